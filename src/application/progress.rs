// 進捗管理（潜在値計算用）

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// 進捗統計
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressStats {
    pub cells_evaluated: u64,
    pub total_cells: u64,
}

impl ProgressStats {
    /// 完了率（0.0〜1.0）
    pub fn ratio(&self) -> f64 {
        if self.total_cells == 0 {
            return 1.0;
        }
        self.cells_evaluated as f64 / self.total_cells as f64
    }
}

/// 進捗マネージャー
pub struct ProgressManager {
    abort_flag: Arc<AtomicBool>,
    cells_evaluated: AtomicU64,
    total_cells: u64,
    start_time: Instant,
}

impl ProgressManager {
    pub fn new(total_cells: u64) -> Self {
        Self {
            abort_flag: Arc::new(AtomicBool::new(false)),
            cells_evaluated: AtomicU64::new(0),
            total_cells,
            start_time: Instant::now(),
        }
    }

    /// 中断フラグを取得
    pub fn abort_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.abort_flag)
    }

    /// 計算を中断
    pub fn abort(&self) {
        self.abort_flag.store(true, Ordering::Relaxed);
    }

    /// 中断されたかチェック
    pub fn is_aborted(&self) -> bool {
        self.abort_flag.load(Ordering::Relaxed)
    }

    /// 評価済みセル数を追加
    pub fn add_cells(&self, count: u64) {
        self.cells_evaluated.fetch_add(count, Ordering::Relaxed);
    }

    /// 現在の統計を取得
    pub fn get_stats(&self) -> ProgressStats {
        ProgressStats {
            cells_evaluated: self.cells_evaluated.load(Ordering::Relaxed),
            total_cells: self.total_cells,
        }
    }

    /// 経過時間を取得
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// 計算速度（セル/秒）を取得
    pub fn cells_per_second(&self) -> f64 {
        let cells = self.cells_evaluated.load(Ordering::Relaxed) as f64;
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            cells / elapsed
        } else {
            0.0
        }
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new(0)
    }
}
