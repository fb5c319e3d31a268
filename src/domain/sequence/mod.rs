// 数列の検出・整理

pub mod detector;
pub mod resolver;
pub mod sequence;

pub use detector::{count_clearable, detect};
pub use resolver::{resolve, Highlight, HighlightMap};
pub use sequence::{is_generalized_fibonacci, LineKind, Sequence};
