// インフラ層 - 外部とのやり取り、技術的実装

pub mod executor;
pub mod share;
pub mod wire;

pub use executor::{ParallelConfig, ParallelExecutor};
