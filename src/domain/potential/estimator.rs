// 潜在値の推定 - 全セルで仮の手を打ち、消える数列の本数を数える

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::constants::CLEARED;
use crate::domain::grid::{Cursor, Grid};
use crate::domain::moves::simulate_clears;

/// セルごとの潜在値（その位置に手を打ったときの消去本数）
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")]
pub struct PotentialMap {
    size: usize,
    values: Vec<u32>,
}

impl PotentialMap {
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            values: vec![0; size * size],
        }
    }

    fn from_row_values(size: usize, rows: Vec<Vec<u32>>) -> Self {
        let mut values = Vec::with_capacity(size * size);
        for row in rows {
            values.extend(row);
        }
        Self { size, values }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.values[row * self.size + col])
    }

    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.values.chunks(self.size.max(1)).map(|r| r.to_vec()).collect()
    }

    /// 最大の潜在値とその位置
    pub fn best(&self) -> Option<(Cursor, u32)> {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| **v > 0)
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(&a.0)))
            .map(|(i, &v)| (Cursor::new(i / self.size, i % self.size), v))
    }

    pub fn is_all_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0)
    }
}

impl TryFrom<Vec<Vec<u32>>> for PotentialMap {
    type Error = anyhow::Error;

    fn try_from(rows: Vec<Vec<u32>>) -> anyhow::Result<Self> {
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return Err(anyhow::anyhow!("潜在値マップが正方形ではありません"));
        }
        Ok(Self::from_row_values(size, rows))
    }
}

impl From<PotentialMap> for Vec<Vec<u32>> {
    fn from(map: PotentialMap) -> Self {
        map.to_rows()
    }
}

/// 表示用の潜在値レベル（1〜6、0は表示なし）
pub fn potential_level(potential: u32) -> Option<u8> {
    match potential {
        0 => None,
        1..=10 => Some(1),
        11..=20 => Some(2),
        21..=30 => Some(3),
        31..=40 => Some(4),
        41..=50 => Some(5),
        _ => Some(6),
    }
}

/// 一行分の潜在値を計算（消去済みセルは0）
pub fn estimate_row(grid: &Grid, row: usize, scratch: &mut Grid) -> Vec<u32> {
    let n = grid.size();
    let mut out = vec![0u32; n];
    for (col, slot) in out.iter_mut().enumerate() {
        if grid.at(row, col) == CLEARED {
            continue;
        }
        // row/col は盤面内なので失敗しない
        if let Ok(count) = simulate_clears(grid, Cursor::new(row, col), scratch) {
            *slot = count as u32;
        }
    }
    out
}

/// 盤面全体の潜在値を計算する
pub fn estimate_potential(grid: &Grid) -> PotentialMap {
    let never = AtomicBool::new(false);
    estimate_potential_with(grid, &never, &|_| {})
        .unwrap_or_else(|| PotentialMap::zeros(grid.size()))
}

/// 中断可能な潜在値計算
///
/// 行単位で並列に処理し、各行の開始前に abort を確認する。
/// 中断された場合は None を返す（部分的な結果は返さない）。
/// on_row_done は行ごとに評価したセル数を受け取る。
pub fn estimate_potential_with(
    grid: &Grid,
    abort: &AtomicBool,
    on_row_done: &(dyn Fn(usize) + Sync),
) -> Option<PotentialMap> {
    let n = grid.size();
    let rows: Vec<Option<Vec<u32>>> = (0..n)
        .into_par_iter()
        .map_init(
            || Grid::new(n),
            |scratch, row| {
                if abort.load(Ordering::Relaxed) {
                    return None;
                }
                let values = estimate_row(grid, row, scratch);
                on_row_done(n);
                Some(values)
            },
        )
        .collect();

    if abort.load(Ordering::Relaxed) {
        return None;
    }
    let rows: Option<Vec<Vec<u32>>> = rows.into_iter().collect();
    rows.map(|r| PotentialMap::from_row_values(n, r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::moves::apply_move;
    use std::sync::atomic::AtomicUsize;

    fn near_complete() -> Grid {
        Grid::from_rows(&[
            vec![1, 1, 2, 3, 4],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
        ])
        .unwrap()
    }

    #[test]
    fn all_cleared_grid_is_zero() {
        let grid = Grid::from_rows(&vec![vec![CLEARED; 6]; 6]).unwrap();
        let map = estimate_potential(&grid);
        assert_eq!(map.size(), 6);
        assert!(map.is_all_zero());
    }

    #[test]
    fn empty_grid_is_zero() {
        assert!(estimate_potential(&Grid::new(8)).is_all_zero());
    }

    #[test]
    fn matches_apply_move_per_cell() {
        let grid = near_complete();
        let map = estimate_potential(&grid);
        for y in 0..5 {
            for x in 0..5 {
                let expected = apply_move(&grid, Cursor::new(y, x)).unwrap().cleared_count as u32;
                assert_eq!(map.get(y, x), Some(expected), "cell ({}, {})", y, x);
            }
        }
        // 4列目（行0以外）に打つと 4 → 5 で完成
        assert_eq!(map.get(3, 4), Some(1));
        // 行0に打つと全体が+1されるので崩れる
        assert_eq!(map.get(0, 2), Some(0));
        assert_eq!(map.best().map(|(_, v)| v), Some(1));
    }

    #[test]
    fn cleared_cells_have_zero_potential() {
        let mut grid = near_complete();
        grid.set(3, 4, CLEARED).unwrap();
        let map = estimate_potential(&grid);
        assert_eq!(map.get(3, 4), Some(0));
        assert_eq!(map.get(2, 4), Some(1));
    }

    #[test]
    fn aborted_estimation_returns_none() {
        let grid = near_complete();
        let abort = AtomicBool::new(true);
        assert!(estimate_potential_with(&grid, &abort, &|_| {}).is_none());
    }

    #[test]
    fn reports_progress_per_row() {
        let grid = Grid::new(7);
        let seen = AtomicUsize::new(0);
        let abort = AtomicBool::new(false);
        let map = estimate_potential_with(&grid, &abort, &|cells| {
            seen.fetch_add(cells, Ordering::Relaxed);
        });
        assert!(map.is_some());
        assert_eq!(seen.load(Ordering::Relaxed), 49);
    }

    #[test]
    fn potential_levels() {
        assert_eq!(potential_level(0), None);
        assert_eq!(potential_level(1), Some(1));
        assert_eq!(potential_level(10), Some(1));
        assert_eq!(potential_level(11), Some(2));
        assert_eq!(potential_level(50), Some(5));
        assert_eq!(potential_level(51), Some(6));
    }

    #[test]
    fn best_prefers_first_on_tie() {
        let map = PotentialMap::try_from(vec![vec![0, 2], vec![2, 1]]).unwrap();
        assert_eq!(map.best(), Some((Cursor::new(0, 1), 2)));
        assert_eq!(PotentialMap::zeros(3).best(), None);
    }
}
