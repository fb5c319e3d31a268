// 並列実行管理

use anyhow::{Context, Result};
use rayon::{ThreadPool, ThreadPoolBuilder};

/// 並列実行設定
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// ワーカースレッド数
    pub num_workers: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
        }
    }
}

impl ParallelConfig {
    pub fn new(num_workers: usize) -> Self {
        Self {
            num_workers: num_workers.max(1),
        }
    }
}

/// 専用スレッドプールを持つ並列実行エグゼキューター
pub struct ParallelExecutor {
    config: ParallelConfig,
    pool: ThreadPool,
}

impl ParallelExecutor {
    pub fn new(config: ParallelConfig) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.num_workers)
            .thread_name(|i| format!("fibogrid-worker-{}", i))
            .build()
            .context("スレッドプールの作成に失敗しました")?;
        Ok(Self { config, pool })
    }

    /// プール内で処理を実行（中のrayon並列処理はこのプールを使う）
    pub fn install<R, F>(&self, f: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        self.pool.install(f)
    }

    /// ワーカー数を取得
    pub fn num_workers(&self) -> usize {
        self.config.num_workers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn parallel_config_default() {
        let config = ParallelConfig::default();
        assert!(config.num_workers > 0);
    }

    #[test]
    fn parallel_config_never_zero() {
        assert_eq!(ParallelConfig::new(0).num_workers, 1);
    }

    #[test]
    fn executor_runs_inside_pool() {
        let executor = ParallelExecutor::new(ParallelConfig::new(2)).unwrap();
        assert_eq!(executor.num_workers(), 2);
        let threads = executor.install(rayon::current_num_threads);
        assert_eq!(threads, 2);
        let sum: u64 = executor.install(|| (1..=100u64).into_par_iter().sum());
        assert_eq!(sum, 5050);
    }
}
