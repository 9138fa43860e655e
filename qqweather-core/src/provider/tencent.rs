use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{address::parse_location, error::WeatherError, http, model::WeatherObservation};

use super::WeatherProvider;

/// Current observations from the Tencent weather service (wis.qq.com).
#[derive(Debug, Clone)]
pub struct TencentWeather {
    url: String,
    http: Client,
}

impl TencentWeather {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, WeatherError> {
        Ok(Self {
            url: url.into(),
            http: http::build_client(timeout)?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TxObserve {
    degree: String,
    humidity: String,
    precipitation: String,
    pressure: String,
    update_time: String,
    weather: String,
    weather_code: String,
    weather_short: String,
    wind_direction: String,
    wind_power: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TxData {
    observe: TxObserve,
}

#[derive(Debug, Deserialize)]
struct TxResponse {
    #[serde(default)]
    data: TxData,
    #[serde(default)]
    message: String,
    status: i64,
}

impl TxResponse {
    fn into_observation(self) -> Result<WeatherObservation, WeatherError> {
        if self.status != 200 {
            return Err(WeatherError::MalformedResponse(format!(
                "wis.qq.com returned status {}: {}",
                self.status, self.message
            )));
        }

        let o = self.data.observe;
        let condition = if o.weather.is_empty() { o.weather_short } else { o.weather };

        Ok(WeatherObservation {
            code: parse_int("weather_code", &o.weather_code)?,
            temperature_c: parse_int("degree", &o.degree)?,
            humidity_pct: parse_int("humidity", &o.humidity)?,
            update_time: o.update_time,
            condition,
            wind_direction: o.wind_direction,
            wind_power: o.wind_power,
            pressure: o.pressure,
            precipitation: o.precipitation,
        })
    }
}

fn parse_int(field: &'static str, value: &str) -> Result<i32, WeatherError> {
    value.parse().map_err(|_| WeatherError::Parse {
        field,
        value: value.to_string(),
    })
}

#[async_trait]
impl WeatherProvider for TencentWeather {
    async fn observe(&self, location: &str) -> Result<WeatherObservation, WeatherError> {
        let query = parse_location(location)?;

        let parsed: TxResponse = http::get_json(
            &self.http,
            &self.url,
            &[
                ("source", "pc"),
                ("weather_type", "observe"),
                ("province", query.province.as_str()),
                ("city", query.city.as_str()),
            ],
        )
        .await?;

        parsed.into_observation()
    }
}
