// 盤面定数とセル値の定義

/// セル値の型（0: 未操作, 正: 加算回数, -1: 消去済み）
pub type CellValue = i32;

/// ====== 盤面定数 ======
pub const GRID_SIZE: usize = 50;

/// 消去済みセル（以後一切変化しない）
pub const CLEARED: CellValue = -1;
/// 未操作セル
pub const UNTOUCHED: CellValue = 0;

// 数列の長さ
pub const MIN_SEQUENCE_LEN: usize = 3;
pub const MAX_SEQUENCE_LEN: usize = 5;
/// この長さの数列だけが消去対象
pub const CLEAR_SEQUENCE_LEN: usize = 5;

/// Shift移動時の移動量
pub const FAST_MOVE_STEP: usize = 5;

// 拡大鏡（表示設定）
pub const MAGNIFIER_MIN: usize = 7;
pub const MAGNIFIER_MAX: usize = 25;
pub const MAGNIFIER_STEP: usize = 2;
pub const MAGNIFIER_DEFAULT: usize = 9;
