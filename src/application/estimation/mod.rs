// 潜在値計算アプリケーションサービス

pub mod event;
pub mod service;

pub use event::{EstimateEvent, StampedPotential};
pub use service::{EstimateHandle, PotentialService};
