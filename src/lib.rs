// フィボナッチ数列消しパズル - ライブラリモジュール

pub mod constants;
pub mod domain;         // ドメイン層
pub mod application;    // アプリケーション層
pub mod infrastructure; // インフラ層
pub mod presentation;   // プレゼンテーション層
pub mod logging;

// 外部クレートの再エクスポート
pub use anyhow::{anyhow, Context, Result};

// 主要な型を再エクスポート
pub use application::{GameService, MoveReport, PotentialService, StampedPotential};
pub use constants::{CellValue, CLEARED, GRID_SIZE};
pub use domain::grid::{Cursor, Direction, Grid};
pub use domain::moves::{apply_move, MoveOutcome};
pub use domain::potential::{estimate_potential, PotentialMap};
pub use domain::sequence::{detect, is_generalized_fibonacci, resolve, LineKind, Sequence};
