// ドメイン層 - 盤面解析と盤面変更の中核

pub mod config;
pub mod grid;
pub mod moves;
pub mod potential;
pub mod sequence;
