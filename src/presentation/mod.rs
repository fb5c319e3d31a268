// プレゼンテーション層 - 表示用の派生状態

pub mod state;
