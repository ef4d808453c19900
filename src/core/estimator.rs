use chrono::NaiveTime;

use crate::core::error::Result;
use crate::core::model::SleepPredictor;
use crate::core::wake::WakeTime;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Suggest a bedtime for the given wake time, sleep goal and coffee intake.
///
/// The three inputs are turned into the features the model expects, the
/// injected predictor estimates the sleep need in seconds, and that duration
/// is subtracted from the wake time (wrapping into the previous day when the
/// result goes past midnight). The returned string is a short 12-hour time
/// such as `"10:47 PM"`.
///
/// Ranges are not re-validated here: `sleep_goal_hours` is expected in
/// [4.0, 12.0] and `coffee_cups` in [0, 10], both enforced by the caller.
/// The predictor call is the only step that can fail.
pub fn estimate_bedtime(
    wake: WakeTime,
    sleep_goal_hours: f64,
    coffee_cups: u8,
    predictor: &dyn SleepPredictor,
) -> Result<String> {
    let wake_seconds = wake.seconds_from_midnight();

    let sleep_needed =
        predictor.predict(wake_seconds, sleep_goal_hours, f64::from(coffee_cups))?;

    let bedtime_seconds =
        (wake_seconds as i64 - sleep_needed.round() as i64).rem_euclid(SECONDS_PER_DAY);

    let bedtime = NaiveTime::from_num_seconds_from_midnight_opt(bedtime_seconds as u32, 0)
        .unwrap_or_default();

    Ok(bedtime.format("%-I:%M %p").to_string())
}
