pub mod parallel;

pub use parallel::{ParallelConfig, ParallelExecutor};
