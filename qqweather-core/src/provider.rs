use crate::{
    Config, LocationResult, WeatherError, WeatherObservation,
    provider::{ipip::IpipLocator, tencent::TencentWeather},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod ipip;
pub mod tencent;

/// Resolves the caller's location from their public IP.
#[async_trait]
pub trait LocationProvider: Send + Sync + Debug {
    async fn locate(&self) -> Result<LocationResult, WeatherError>;
}

/// Fetches the current observation for a canonical location string.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn observe(&self, location: &str) -> Result<WeatherObservation, WeatherError>;
}

/// Construct the IP locator from config.
pub fn locator_from_config(config: &Config) -> Result<Box<dyn LocationProvider>, WeatherError> {
    let locator = IpipLocator::new(config.ip_lookup_url(), config.timeout())?;
    Ok(Box::new(locator))
}

/// Construct the weather provider from config.
pub fn weather_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, WeatherError> {
    let weather = TencentWeather::new(config.weather_url(), config.timeout())?;
    Ok(Box::new(weather))
}
