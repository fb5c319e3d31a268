// 手の適用 - 十字加算 → 検出 → 長さ5の消去

use anyhow::Result;

use crate::constants::{CLEARED, CLEAR_SEQUENCE_LEN};
use crate::domain::grid::{Cursor, Grid};
use crate::domain::sequence::{count_clearable, detect, Sequence};

/// 一手の結果
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// 適用後の盤面
    pub grid: Grid,
    /// この手で消えた長さ5数列の本数（セル数ではない）
    pub cleared_count: usize,
    /// 消えた数列
    pub cleared: Vec<Sequence>,
}

/// 十字加算（カーソル行の全セルと、カーソル列の交点以外のセル）
///
/// 消去済みセルは加算しない。
pub fn increment_cross(grid: &mut Grid, cursor: Cursor) {
    let n = grid.size();
    for i in 0..n {
        let cell = grid.at_mut(cursor.row, i);
        if *cell != CLEARED {
            *cell = cell.saturating_add(1);
        }
        if i != cursor.row {
            let cell = grid.at_mut(i, cursor.col);
            if *cell != CLEARED {
                *cell = cell.saturating_add(1);
            }
        }
    }
}

/// 長さ5の数列を -1 で埋める（同じセルを何度消しても結果は同じ）
pub fn clear_sequences(grid: &mut Grid, sequences: &[Sequence]) {
    for seq in sequences {
        for (y, x) in seq.cells() {
            *grid.at_mut(y, x) = CLEARED;
        }
    }
}

/// 盤面に一手を適用する
///
/// 元の盤面は変更せず、新しい盤面を返す。長さ3/4の数列は消さない。
pub fn apply_move(grid: &Grid, cursor: Cursor) -> Result<MoveOutcome> {
    grid.check_cursor(cursor)?;

    let mut next = grid.clone();
    increment_cross(&mut next, cursor);

    let cleared: Vec<Sequence> = detect(&next)
        .into_iter()
        .filter(|s| s.length == CLEAR_SEQUENCE_LEN)
        .collect();
    clear_sequences(&mut next, &cleared);

    Ok(MoveOutcome {
        grid: next,
        cleared_count: cleared.len(),
        cleared,
    })
}

/// 仮の手を打った場合に消える数列の本数（盤面は変更しない）
///
/// scratch は作業用の盤面で、呼び出し側で使い回せる。
pub fn simulate_clears(grid: &Grid, cursor: Cursor, scratch: &mut Grid) -> Result<usize> {
    grid.check_cursor(cursor)?;
    scratch.clone_from(grid);
    increment_cross(scratch, cursor);
    Ok(count_clearable(scratch))
}
