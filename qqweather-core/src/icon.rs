//! Weather code → icon lookup.

use chrono::{Local, Timelike};

use crate::model::IconMatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherCodeEntry {
    pub display_name: &'static str,
    pub icon_id: &'static str,
    pub code: i32,
}

const fn entry(display_name: &'static str, icon_id: &'static str, code: i32) -> WeatherCodeEntry {
    WeatherCodeEntry { display_name, icon_id, code }
}

/// Returned for codes with no usable table entry.
pub const UNKNOWN_ICON: IconMatch = IconMatch { icon_id: "day", display_name: "未知" };

/// Codes reported by the weather service, in lookup order.
///
/// Day/night pairs share a code and differ only in the `day` / `night` suffix of `icon_id`.
pub static WEATHER_CODES: [WeatherCodeEntry; 41] = [
    entry("晴", "day", 0),
    entry("晴", "night", 0),
    entry("多云", "cloudy-day", 1),
    entry("夜间多云", "cloudy-night", 1),
    entry("阴天", "cloudy", 2),
    entry("白天阵雨", "rainy-1", 3),
    entry("夜间阵雨", "rainy-night-1", 3),
    entry("打雷", "thunder", 4),
    entry("雷雨天", "thunder-rain", 5),
    entry("雨夹雪", "rain-snow-day", 6),
    entry("雨夹雪", "rain-snow-night", 6),
    entry("小雨", "rainy-4", 7),
    entry("中雨", "rainy-5", 8),
    entry("大雨", "rainy-6", 9),
    entry("雨", "rainy-6", 10),
    entry("雨", "rainy-6", 11),
    entry("雨", "rainy-6", 12),
    entry("雪天", "snowy-day", 13),
    entry("雪天", "snowy-night", 13),
    entry("小雪", "snowy-4", 14),
    entry("中雪", "snowy-5", 15),
    entry("大雪", "snowy-6", 16),
    entry("暴雪", "snowy-6", 17),
    entry("中雨", "rainy-6", 19),
    entry("中雨", "rainy-6", 21),
    entry("中雨", "rainy-6", 22),
    entry("中雨", "rainy-6", 23),
    entry("中雨", "rainy-6", 24),
    entry("中雨", "rainy-6", 25),
    entry("中雪", "snowy-6", 26),
    entry("中雪", "snowy-6", 27),
    entry("中雪", "snowy-6", 28),
    entry("有雾", "icon-fog", 18),
    entry("有雾", "icon-fog", 32),
    entry("沙尘暴", "icon-dust", 20),
    entry("沙尘暴", "icon-dust", 29),
    entry("沙尘暴", "icon-dust", 30),
    entry("沙尘暴", "icon-dust", 31),
    entry("冰雹", "icon-hail", -1),
    entry("霰", "icon-sleet", -1),
    entry("风", "icon-wind", -1),
];

impl WeatherCodeEntry {
    fn to_match(self) -> IconMatch {
        IconMatch { icon_id: self.icon_id, display_name: self.display_name }
    }
}

/// Daytime runs from 05:00 through 18:59 local time.
pub fn is_daytime(hour: u32) -> bool {
    (5..=18).contains(&hour)
}

/// Resolve `code` using the current local hour.
pub fn resolve_icon(code: i32) -> IconMatch {
    resolve_icon_at(code, Local::now().hour())
}

/// Resolve `code` as if the local clock read `hour`.
pub fn resolve_icon_at(code: i32, hour: u32) -> IconMatch {
    let matched: Vec<&WeatherCodeEntry> =
        WEATHER_CODES.iter().filter(|e| e.code == code).collect();

    match matched.as_slice() {
        [] => UNKNOWN_ICON,
        [only] => only.to_match(),
        pair => {
            let suffix = if is_daytime(hour) { "day" } else { "night" };
            pair.iter()
                .find(|e| e.icon_id.ends_with(suffix))
                .map(|e| e.to_match())
                .unwrap_or(UNKNOWN_ICON)
        }
    }
}

/// Distinct icon identifiers referenced by the code table, in first-seen order.
pub fn icon_ids() -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = Vec::new();
    for e in WEATHER_CODES.iter() {
        if !ids.contains(&e.icon_id) {
            ids.push(e.icon_id);
        }
    }
    ids
}
