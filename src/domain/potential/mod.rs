// 潜在値マップ

pub mod estimator;

pub use estimator::{
    estimate_potential, estimate_potential_with, estimate_row, potential_level, PotentialMap,
};
