// 手の適用

pub mod applicator;

pub use applicator::{apply_move, clear_sequences, increment_cross, simulate_clears, MoveOutcome};
