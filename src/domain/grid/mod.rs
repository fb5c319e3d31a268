// 盤面関連のドメイン層

pub mod cell;
pub mod cursor;
pub mod grid;

pub use cell::CellState;
pub use cursor::{Cursor, Direction};
pub use grid::Grid;
