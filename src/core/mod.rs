pub mod error;
pub mod estimator;
pub mod model;
pub mod wake;

pub use error::{EstimateError, PredictionError, Result};
pub use estimator::estimate_bedtime;
pub use model::{LinearModelParams, LinearSleepModel, SleepPredictor};
pub use wake::WakeTime;
