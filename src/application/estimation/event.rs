// 潜在値計算のイベント定義（UI層に依存しない）

use std::time::Duration;

use crate::domain::potential::PotentialMap;

/// 計算元の盤面バージョンを刻印した潜在値マップ
#[derive(Clone, Debug, PartialEq)]
pub struct StampedPotential {
    pub version: u64,
    pub map: PotentialMap,
    pub elapsed: Duration,
}

/// 計算スレッドからのイベント
#[derive(Clone, Debug)]
pub enum EstimateEvent {
    /// 計算完了
    Finished(StampedPotential),
    /// 新しい盤面に置き換えられて中断
    Aborted { version: u64 },
}

impl EstimateEvent {
    pub fn version(&self) -> u64 {
        match self {
            EstimateEvent::Finished(p) => p.version,
            EstimateEvent::Aborted { version } => *version,
        }
    }
}
