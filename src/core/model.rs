use serde::{Deserialize, Serialize};

use crate::core::error::PredictionError;

/// The prediction capability the estimator is handed.
///
/// Takes the three features the sleep model was trained on (wake time in
/// seconds since midnight, sleep goal in hours, daily coffee cups) and
/// returns the estimated sleep need in seconds. The model is opaque to the
/// caller; the only contract is this signature and the failure mode.
pub trait SleepPredictor {
    fn predict(
        &self,
        wake_seconds: f64,
        sleep_goal_hours: f64,
        coffee_cups: f64,
    ) -> Result<f64, PredictionError>;
}

/// Plain functions and closures work as predictors, which keeps the
/// estimator testable with deterministic stand-ins.
impl<F> SleepPredictor for F
where
    F: Fn(f64, f64, f64) -> Result<f64, PredictionError>,
{
    fn predict(
        &self,
        wake_seconds: f64,
        sleep_goal_hours: f64,
        coffee_cups: f64,
    ) -> Result<f64, PredictionError> {
        self(wake_seconds, sleep_goal_hours, coffee_cups)
    }
}

/// Coefficients of the pre-trained linear regression, in seconds of sleep
/// need. `sleep_goal` is weighted per hour of goal, `coffee` per cup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModelParams {
    pub intercept: f64,
    pub wake: f64,
    pub sleep_goal: f64,
    pub coffee: f64,
}

impl Default for LinearModelParams {
    fn default() -> Self {
        Self {
            intercept: 1104.0,
            wake: 0.043,
            sleep_goal: 3449.0,
            coffee: 612.0,
        }
    }
}

/// Pre-trained linear sleep model. The coefficients come from configuration
/// (or the built-in defaults); nothing here trains or updates them.
#[derive(Debug, Clone, Default)]
pub struct LinearSleepModel {
    params: LinearModelParams,
}

impl LinearSleepModel {
    pub fn new(params: LinearModelParams) -> Self {
        Self { params }
    }
}

impl SleepPredictor for LinearSleepModel {
    fn predict(
        &self,
        wake_seconds: f64,
        sleep_goal_hours: f64,
        coffee_cups: f64,
    ) -> Result<f64, PredictionError> {
        for feature in [wake_seconds, sleep_goal_hours, coffee_cups] {
            if !feature.is_finite() {
                return Err(PredictionError::MalformedInput(feature));
            }
        }

        let p = &self.params;
        // Corrupt configuration can smuggle in non-finite coefficients
        if ![p.intercept, p.wake, p.sleep_goal, p.coffee]
            .iter()
            .all(|c| c.is_finite())
        {
            return Err(PredictionError::Unavailable(
                "model coefficients are not finite".to_string(),
            ));
        }
        let seconds = p.intercept
            + p.wake * wake_seconds
            + p.sleep_goal * sleep_goal_hours
            + p.coffee * coffee_cups;

        if !seconds.is_finite() {
            return Err(PredictionError::MalformedOutput);
        }
        Ok(seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_is_deterministic() {
        let model = LinearSleepModel::default();
        let a = model.predict(25200.0, 8.0, 2.0).unwrap();
        let b = model.predict(25200.0, 8.0, 2.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_prediction_is_linear_in_coffee() {
        let model = LinearSleepModel::default();
        let none = model.predict(25200.0, 8.0, 0.0).unwrap();
        let two = model.predict(25200.0, 8.0, 2.0).unwrap();
        assert!((two - none - 2.0 * LinearModelParams::default().coffee).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_non_finite_input() {
        let model = LinearSleepModel::default();
        assert!(matches!(
            model.predict(f64::NAN, 8.0, 1.0),
            Err(PredictionError::MalformedInput(_))
        ));
        assert!(matches!(
            model.predict(25200.0, f64::INFINITY, 1.0),
            Err(PredictionError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite_coefficients() {
        let model = LinearSleepModel::new(LinearModelParams {
            intercept: f64::NAN,
            ..LinearModelParams::default()
        });
        assert!(matches!(
            model.predict(25200.0, 8.0, 1.0),
            Err(PredictionError::Unavailable(_))
        ));
    }

    #[test]
    fn test_params_survive_json() {
        let params = LinearModelParams {
            intercept: 900.0,
            wake: 0.05,
            sleep_goal: 3600.0,
            coffee: 500.0,
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: LinearModelParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back.intercept, 900.0);
        assert_eq!(back.sleep_goal, 3600.0);
    }

    #[test]
    fn test_closure_as_predictor() {
        let stub =
            |_: f64, _: f64, _: f64| -> Result<f64, PredictionError> { Ok(8.0 * 3600.0) };
        assert_eq!(stub.predict(0.0, 0.0, 0.0).unwrap(), 28800.0);
    }
}
