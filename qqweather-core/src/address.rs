//! Canonical location strings.
//!
//! The IP lookup yields bare names (`广东`, `广州`); the weather service wants
//! suffixed ones (`广东省`, `广州市`). Both sides meet on a single string such
//! as `"广东省广州市"`, or `"北京市"` for the four municipalities.

use regex::Regex;
use std::sync::LazyLock;

use crate::{
    error::WeatherError,
    model::{LocationResult, WeatherQuery},
};

/// Province-level municipalities, which have no separate province name.
pub const MUNICIPALITIES: [&str; 4] = ["北京", "上海", "重庆", "天津"];

static PROVINCE_CITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\S+省)(\S+市)").unwrap());

pub fn is_municipality(name: &str) -> bool {
    MUNICIPALITIES.contains(&name)
}

/// Format bare province/city names into the canonical location string.
pub fn format_location(province: &str, city: &str) -> String {
    if is_municipality(province) {
        format!("{province}市")
    } else {
        format!("{province}省{city}市")
    }
}

/// Parse a canonical location string into the names the weather service expects.
pub fn parse_location(location: &str) -> Result<WeatherQuery, WeatherError> {
    if location.is_empty() {
        return Err(WeatherError::InvalidLocation(String::new()));
    }

    if location.strip_suffix('市').is_some_and(is_municipality) {
        return Ok(WeatherQuery {
            province: location.to_string(),
            city: location.to_string(),
        });
    }

    let caps = PROVINCE_CITY
        .captures(location)
        .ok_or_else(|| WeatherError::InvalidLocation(location.to_string()))?;

    Ok(WeatherQuery {
        province: caps[1].to_string(),
        city: caps[2].to_string(),
    })
}

impl LocationResult {
    pub fn canonical(&self) -> String {
        format_location(&self.province, &self.city)
    }
}
