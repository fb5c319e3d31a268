// 潜在値計算サービス - 盤面バージョンごとに最大1つの計算を走らせる

use anyhow::Result;
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use super::event::{EstimateEvent, StampedPotential};
use crate::application::progress::{ProgressManager, ProgressStats};
use crate::domain::grid::Grid;
use crate::domain::potential::estimate_potential_with;
use crate::infrastructure::executor::{ParallelConfig, ParallelExecutor};
use crate::vlog;

/// 計算ハンドル
#[derive(Clone)]
pub struct EstimateHandle {
    pub version: u64,
    pub progress: Arc<ProgressManager>,
}

impl EstimateHandle {
    /// 計算を中断
    pub fn abort(&self) {
        self.progress.abort();
    }

    /// 中断されたかチェック
    pub fn is_aborted(&self) -> bool {
        self.progress.is_aborted()
    }

    /// 進捗統計を取得
    pub fn get_progress(&self) -> ProgressStats {
        self.progress.get_stats()
    }
}

/// 潜在値計算をバックグラウンドで管理するサービス
///
/// 新しい要求が来ると実行中の計算は中断され、結果は破棄される。
/// 受け取れるのは最後に要求したバージョンの結果だけ。
pub struct PotentialService {
    executor: Arc<ParallelExecutor>,
    tx: Sender<EstimateEvent>,
    rx: Receiver<EstimateEvent>,
    current: Option<EstimateHandle>,
}

impl PotentialService {
    pub fn new(config: ParallelConfig) -> Result<Self> {
        let executor = Arc::new(ParallelExecutor::new(config)?);
        vlog!("[潜在値] ワーカー数: {}", executor.num_workers());
        let (tx, rx) = unbounded();
        Ok(Self {
            executor,
            tx,
            rx,
            current: None,
        })
    }

    /// 盤面のスナップショットに対する計算を開始（前の計算は中断）
    pub fn request(&mut self, grid: &Grid, version: u64) -> EstimateHandle {
        self.cancel();

        let total = (grid.size() * grid.size()) as u64;
        let handle = EstimateHandle {
            version,
            progress: Arc::new(ProgressManager::new(total)),
        };
        self.current = Some(handle.clone());

        let snapshot = grid.clone();
        let executor = Arc::clone(&self.executor);
        let progress = Arc::clone(&handle.progress);
        let tx = self.tx.clone();
        vlog!("[潜在値] 計算開始: version={} size={}", version, snapshot.size());

        thread::spawn(move || {
            let abort = progress.abort_flag();
            let result = executor.install(|| {
                estimate_potential_with(&snapshot, &abort, &|cells| {
                    progress.add_cells(cells as u64)
                })
            });
            let event = match result {
                Some(map) => {
                    vlog!(
                        "[潜在値] 計算完了: version={} {:.0}セル/秒",
                        version,
                        progress.cells_per_second()
                    );
                    EstimateEvent::Finished(StampedPotential {
                        version,
                        map,
                        elapsed: progress.elapsed(),
                    })
                }
                None => EstimateEvent::Aborted { version },
            };
            // 受信側が破棄されていれば何もしない
            let _ = tx.send(event);
        });

        handle
    }

    /// 実行中の計算を中断し、以後その結果を受け付けない
    pub fn cancel(&mut self) {
        if let Some(handle) = self.current.take() {
            vlog!("[潜在値] 中断: version={}", handle.version);
            handle.abort();
        }
    }

    /// 最後に要求したバージョン
    pub fn latest_version(&self) -> Option<u64> {
        self.current.as_ref().map(|h| h.version)
    }

    /// 届いている結果のうち最新要求に一致するものを返す（ノンブロッキング）
    pub fn try_latest(&self) -> Option<StampedPotential> {
        let mut found = None;
        while let Ok(event) = self.rx.try_recv() {
            if let Some(p) = self.accept(event) {
                found = Some(p);
            }
        }
        found
    }

    /// 最新要求の結果を待つ（タイムアウトまたは要求なしならNone）
    pub fn wait_latest(&self, timeout: Duration) -> Option<StampedPotential> {
        let deadline = Instant::now() + timeout;
        loop {
            self.latest_version()?;
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(event) => {
                    if let Some(p) = self.accept(event) {
                        return Some(p);
                    }
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return None
                }
            }
        }
    }

    /// 古いバージョンのイベントは捨てる
    fn accept(&self, event: EstimateEvent) -> Option<StampedPotential> {
        let latest = self.latest_version();
        match event {
            EstimateEvent::Finished(p) if Some(p.version) == latest => {
                vlog!(
                    "[潜在値] 完了: version={} ({:.1}ms)",
                    p.version,
                    p.elapsed.as_secs_f64() * 1000.0
                );
                Some(p)
            }
            other => {
                vlog!("[潜在値] 破棄: version={} (最新={:?})", other.version(), latest);
                None
            }
        }
    }
}

impl Drop for PotentialService {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::potential::estimate_potential;

    fn service() -> PotentialService {
        PotentialService::new(ParallelConfig::new(2)).unwrap()
    }

    fn near_complete() -> Grid {
        Grid::from_rows(&[
            vec![1, 1, 2, 3, 4],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
        ])
        .unwrap()
    }

    #[test]
    fn delivers_result_for_latest_version() {
        let mut svc = service();
        let grid = near_complete();
        svc.request(&grid, 1);
        let result = svc.wait_latest(Duration::from_secs(10)).unwrap();
        assert_eq!(result.version, 1);
        assert_eq!(result.map, estimate_potential(&grid));
    }

    #[test]
    fn superseded_request_is_aborted() {
        let mut svc = service();
        let first = svc.request(&Grid::new(30), 1);
        let second = svc.request(&near_complete(), 2);
        assert!(first.is_aborted());
        assert!(!second.is_aborted());

        let result = svc.wait_latest(Duration::from_secs(10)).unwrap();
        assert_eq!(result.version, 2);
        assert_eq!(result.map.size(), 5);
        // 古い結果が後から来ても受け付けない
        assert!(svc.try_latest().is_none());
    }

    #[test]
    fn cancelled_service_returns_nothing() {
        let mut svc = service();
        svc.request(&near_complete(), 7);
        svc.cancel();
        assert_eq!(svc.latest_version(), None);
        assert!(svc.wait_latest(Duration::from_millis(200)).is_none());
    }

    #[test]
    fn progress_reaches_total() {
        let mut svc = service();
        let handle = svc.request(&Grid::new(6), 3);
        assert!(svc.wait_latest(Duration::from_secs(10)).is_some());
        let stats = handle.get_progress();
        assert_eq!(stats.total_cells, 36);
        assert_eq!(stats.cells_evaluated, 36);
    }
}
