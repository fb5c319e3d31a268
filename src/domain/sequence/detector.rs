// 数列検出 - 盤面の全行・全列から一般化フィボナッチ数列を探す

use super::sequence::{satisfies_recurrence, LineKind, Sequence};
use crate::constants::{CellValue, CLEAR_SEQUENCE_LEN, MAX_SEQUENCE_LEN, MIN_SEQUENCE_LEN};
use crate::domain::grid::Grid;

/// 盤面上の全数列を検出する
///
/// 行（上から）→ 列（左から）の順に、各線の極大区間に含まれる
/// 長さ3〜5の窓をすべて返す。入れ子の短い窓も含む（重複排除はresolver側）。
pub fn detect(grid: &Grid) -> Vec<Sequence> {
    let mut out = Vec::new();
    let n = grid.size();
    for y in 0..n {
        collect_line(LineKind::Row, y, grid.row(y), &mut out);
    }
    let mut column = Vec::with_capacity(n);
    for x in 0..n {
        column.clear();
        column.extend((0..n).map(|y| grid.at(y, x)));
        collect_line(LineKind::Column, x, &column, &mut out);
    }
    out
}

/// 長さ5（消去対象）の数列数だけを数える
pub fn count_clearable(grid: &Grid) -> usize {
    let n = grid.size();
    let mut total = 0;
    for y in 0..n {
        total += count_windows(grid.row(y), CLEAR_SEQUENCE_LEN);
    }
    let mut column = Vec::with_capacity(n);
    for x in 0..n {
        column.clear();
        column.extend((0..n).map(|y| grid.at(y, x)));
        total += count_windows(&column, CLEAR_SEQUENCE_LEN);
    }
    total
}

/// 一本の線から極大区間 [start, end) を列挙
///
/// 正の値だけが参加でき、0/-1 や漸化式の破れで区間が切れる。
/// 盤面端を越えて繋がることはない。
pub(crate) fn maximal_runs(line: &[CellValue]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut start = 0usize;
    for i in 0..line.len() {
        if line[i] <= 0 {
            push_run(&mut runs, start, i);
            start = i + 1;
            continue;
        }
        if i >= start + 2 && !satisfies_recurrence(line[i - 2], line[i - 1], line[i]) {
            push_run(&mut runs, start, i);
            // 直前の2項から次の区間が始まり得る
            start = i - 1;
        }
    }
    push_run(&mut runs, start, line.len());
    runs
}

#[inline]
fn push_run(runs: &mut Vec<(usize, usize)>, start: usize, end: usize) {
    if end >= start + MIN_SEQUENCE_LEN {
        runs.push((start, end));
    }
}

fn collect_line(kind: LineKind, index: usize, line: &[CellValue], out: &mut Vec<Sequence>) {
    for (run_start, run_end) in maximal_runs(line) {
        for start in run_start..=run_end - MIN_SEQUENCE_LEN {
            for len in MIN_SEQUENCE_LEN..=MAX_SEQUENCE_LEN {
                if start + len > run_end {
                    break;
                }
                out.push(Sequence::new(
                    kind,
                    index,
                    start,
                    line[start..start + len].to_vec(),
                ));
            }
        }
    }
}

fn count_windows(line: &[CellValue], len: usize) -> usize {
    maximal_runs(line)
        .into_iter()
        .map(|(s, e)| (e - s + 1).saturating_sub(len))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CLEARED;
    use crate::domain::sequence::is_generalized_fibonacci;

    fn grid_with_row(size: usize, row: usize, values: &[CellValue]) -> Grid {
        let mut grid = Grid::new(size);
        for (x, &v) in values.iter().enumerate() {
            grid.set(row, x, v).unwrap();
        }
        grid
    }

    #[test]
    fn empty_grid_has_no_sequences() {
        assert!(detect(&Grid::new(10)).is_empty());
        assert!(detect(&Grid::new(0)).is_empty());
    }

    #[test]
    fn finds_single_triple() {
        let grid = grid_with_row(5, 1, &[0, 2, 3, 5, 0]);
        let found = detect(&grid);
        assert_eq!(found, vec![Sequence::new(LineKind::Row, 1, 1, vec![2, 3, 5])]);
    }

    #[test]
    fn five_run_yields_nested_windows() {
        let grid = grid_with_row(5, 0, &[1, 1, 2, 3, 5]);
        let found = detect(&grid);
        let shape: Vec<(usize, usize)> = found.iter().map(|s| (s.start, s.length)).collect();
        assert_eq!(shape, vec![(0, 3), (0, 4), (0, 5), (1, 3), (1, 4), (2, 3)]);
        assert!(found.iter().all(|s| s.kind == LineKind::Row && s.line_index == 0));
    }

    #[test]
    fn lengths_never_exceed_five() {
        let grid = grid_with_row(8, 0, &[1, 1, 2, 3, 5, 8, 13, 21]);
        let found = detect(&grid);
        assert!(found.iter().all(|s| (3..=5).contains(&s.length)));
        assert_eq!(found.iter().filter(|s| s.length == 5).count(), 4);
        assert_eq!(count_clearable(&grid), 4);
    }

    #[test]
    fn cleared_cell_breaks_run() {
        let grid = grid_with_row(6, 0, &[1, 1, CLEARED, 1, 1, 2]);
        let found = detect(&grid);
        assert_eq!(found, vec![Sequence::new(LineKind::Row, 0, 3, vec![1, 1, 2])]);
    }

    #[test]
    fn zero_breaks_run() {
        let grid = grid_with_row(5, 0, &[1, 1, 0, 1, 1]);
        assert!(detect(&grid).is_empty());
    }

    #[test]
    fn negative_values_never_detected() {
        // 判定関数は負値を許すが盤面上の検出対象は正値のみ
        assert!(is_generalized_fibonacci(&[-2, -3, -5]));
        let grid = grid_with_row(5, 0, &[-2, -3, -5, 0, 0]);
        assert!(detect(&grid).is_empty());
    }

    #[test]
    fn broken_recurrence_restarts_from_last_pair() {
        // 1,2,3 が成立、4で破れ、3,4,7 が新たに成立
        let runs = maximal_runs(&[1, 2, 3, 4, 7]);
        assert_eq!(runs, vec![(0, 3), (2, 5)]);
    }

    #[test]
    fn detects_columns() {
        let mut grid = Grid::new(4);
        for (y, v) in [2, 1, 3, 4].into_iter().enumerate() {
            grid.set(y, 2, v).unwrap();
        }
        let found = detect(&grid);
        assert!(found.contains(&Sequence::new(LineKind::Column, 2, 0, vec![2, 1, 3, 4])));
        assert!(found.iter().all(|s| s.kind == LineKind::Column));
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn no_wraparound_across_edges() {
        // 行末と次行頭は繋がらない
        let mut grid = Grid::new(3);
        grid.set(0, 1, 1).unwrap();
        grid.set(0, 2, 1).unwrap();
        grid.set(1, 0, 2).unwrap();
        assert!(detect(&grid).is_empty());
    }

    #[test]
    fn every_detection_is_fibonacci() {
        let grid = Grid::from_rows(&[
            vec![1, 2, 3, 5, 8, 13],
            vec![1, 1, 2, 3, 5, 8],
            vec![2, 3, 5, 8, 13, 21],
            vec![3, 4, 7, 11, 18, 29],
            vec![5, 7, 12, 19, 31, 50],
            vec![8, 11, 19, 30, 49, 79],
        ])
        .unwrap();
        let found = detect(&grid);
        assert!(!found.is_empty());
        for seq in &found {
            assert!(is_generalized_fibonacci(&seq.values));
            let line = grid.line(seq.kind, seq.line_index);
            assert_eq!(&line[seq.start..seq.end()], seq.values.as_slice());
        }
    }
}
