use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictionError {
    #[error("model input is not a finite number: {0}")]
    MalformedInput(f64),

    #[error("model produced a non-finite prediction")]
    MalformedOutput,

    #[error("model unavailable: {0}")]
    Unavailable(String),
}

/// The estimator never leaks model internals to the caller; every prediction
/// failure surfaces as this one fixed, user-facing message.
#[derive(Error, Debug)]
pub enum EstimateError {
    #[error("Sorry, there was a problem calculating your bedtime.")]
    Prediction(#[from] PredictionError),
}

pub type Result<T> = std::result::Result<T, EstimateError>;
