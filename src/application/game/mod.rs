// ゲーム進行アプリケーションサービス

pub mod service;

pub use service::{GameService, MoveReport};
