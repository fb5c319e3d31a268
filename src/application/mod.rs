// アプリケーション層 - ユースケースの組み立て

pub mod estimation;
pub mod game;
pub mod progress;

pub use estimation::{EstimateEvent, PotentialService, StampedPotential};
pub use game::{GameService, MoveReport};
pub use progress::{ProgressManager, ProgressStats};
