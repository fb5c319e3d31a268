// 共有コード - 消去状態だけを 'x' / '0' で表す簡易文字列

use anyhow::{anyhow, Context, Result};

use crate::domain::grid::{CellState, Grid};

/// 盤面を共有コードに変換（1行1文字列、改行区切り）
pub fn encode(grid: &Grid) -> String {
    let n = grid.size();
    let mut s = String::with_capacity(n * (n + 1));
    for y in 0..n {
        if y > 0 {
            s.push('\n');
        }
        for &v in grid.row(y) {
            s.push(CellState::from_value(v).to_share_char());
        }
    }
    s
}

/// 共有コードから盤面を復元（加算回数は失われ、未消去セルは0になる）
pub fn decode(code: &str) -> Result<Grid> {
    let mut rows = Vec::new();
    for (y, line) in code
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .enumerate()
    {
        let row = line
            .chars()
            .map(|ch| CellState::from_share_char(ch).map(CellState::to_value))
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("{}行目を解釈できません", y))?;
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(anyhow!("共有コードが空です"));
    }
    Grid::from_rows(&rows).context("共有コードの形が不正です")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CLEARED;

    #[test]
    fn encodes_cleared_cells_only() {
        let grid = Grid::from_rows(&[vec![-1, 3, 0], vec![0, -1, 1], vec![2, 2, -1]]).unwrap();
        assert_eq!(encode(&grid), "x00\n0x0\n00x");
    }

    #[test]
    fn decode_restores_cleared_set() {
        let grid = decode("x0\n0x\n").unwrap();
        assert_eq!(grid.size(), 2);
        assert_eq!(grid.get(0, 0), Some(CLEARED));
        assert_eq!(grid.get(0, 1), Some(0));
        assert_eq!(grid.cleared_count(), 2);
    }

    #[test]
    fn decode_rejects_bad_input() {
        assert!(decode("").is_err());
        assert!(decode("x0\n0").is_err());
        assert!(decode("x0\n0y").is_err());
        assert!(decode("x00\n000").is_err());
    }
}
