// 表示状態

pub mod board_view;

pub use board_view::{BoardView, CellShade};
