use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target wake-up time. Only hour and minute matter; there is no date
/// component and no time zone. Serializes as an `"HH:MM"` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WakeTime {
    pub hour: u32,
    pub minute: u32,
}

impl WakeTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self { hour, minute })
    }

    /// Wake time expressed as seconds since midnight, the feature the
    /// sleep model was trained on.
    pub fn seconds_from_midnight(&self) -> f64 {
        (self.hour * 3600 + self.minute * 60) as f64
    }
}

impl Default for WakeTime {
    /// 07:00, matching the default the form pre-selects.
    fn default() -> Self {
        Self { hour: 7, minute: 0 }
    }
}

impl FromStr for WakeTime {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = NaiveTime::parse_from_str(s, "%H:%M")?;
        Ok(Self {
            hour: t.hour(),
            minute: t.minute(),
        })
    }
}

impl TryFrom<String> for WakeTime {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value
            .parse()
            .map_err(|e| format!("invalid wake time {:?}: {}", value, e))
    }
}

impl From<WakeTime> for String {
    fn from(wake: WakeTime) -> Self {
        wake.to_string()
    }
}

impl fmt::Display for WakeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
