use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Province and city as reported by the IP lookup, without administrative suffixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationResult {
    pub province: String,
    pub city: String,
}

/// Query parameters for the weather service, suffixes included (`广东省`, `广州市`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub province: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub code: i32,
    pub temperature_c: i32,
    pub humidity_pct: i32,
    /// Raw `update_time` from the service, e.g. `"202610191430"`.
    pub update_time: String,
    pub condition: String,
    pub wind_direction: String,
    pub wind_power: String,
    pub pressure: String,
    pub precipitation: String,
}

impl WeatherObservation {
    /// Observation time in China local time, if the service sent a parseable value.
    pub fn updated_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.update_time, "%Y%m%d%H%M").ok()
    }
}

/// Display icon chosen for a weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IconMatch {
    pub icon_id: &'static str,
    pub display_name: &'static str,
}

/// Everything one `show` needs: where, what was observed, and which icon to draw.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub location: String,
    pub observation: WeatherObservation,
    pub icon: IconMatch,
}
