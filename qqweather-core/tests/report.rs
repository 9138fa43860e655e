use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use qqweather_core::{
    LocationProvider, LocationResult, WeatherError, WeatherObservation, WeatherProvider,
    current_report, resolve_icon,
};

#[derive(Debug, Default)]
struct FixedLocator {
    calls: AtomicUsize,
}

#[async_trait]
impl LocationProvider for FixedLocator {
    async fn locate(&self) -> Result<LocationResult, WeatherError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(LocationResult { province: "浙江".into(), city: "杭州".into() })
    }
}

#[derive(Debug)]
struct ForeignLocator;

#[async_trait]
impl LocationProvider for ForeignLocator {
    async fn locate(&self) -> Result<LocationResult, WeatherError> {
        Err(WeatherError::RegionUnsupported { country: "法国".into() })
    }
}

#[derive(Debug)]
struct EchoWeather;

#[async_trait]
impl WeatherProvider for EchoWeather {
    async fn observe(&self, location: &str) -> Result<WeatherObservation, WeatherError> {
        qqweather_core::parse_location(location)?;
        Ok(WeatherObservation {
            code: 2,
            temperature_c: 15,
            humidity_pct: 80,
            update_time: "202610190800".into(),
            condition: "阴".into(),
            wind_direction: "1".into(),
            wind_power: "3".into(),
            pressure: "1008".into(),
            precipitation: "0.0".into(),
        })
    }
}

#[tokio::test]
async fn report_uses_ip_location_when_none_given() {
    let locator = FixedLocator::default();

    let report = current_report(&locator, &EchoWeather, None).await.unwrap();

    assert_eq!(locator.calls.load(Ordering::SeqCst), 1);
    assert_eq!(report.location, "浙江省杭州市");
    assert_eq!(report.observation.temperature_c, 15);
    assert_eq!(report.icon, resolve_icon(2));
    assert_eq!(report.icon.icon_id, "cloudy");
}

#[tokio::test]
async fn explicit_location_skips_ip_lookup() {
    let locator = FixedLocator::default();

    let report = current_report(&locator, &EchoWeather, Some("天津市")).await.unwrap();

    assert_eq!(locator.calls.load(Ordering::SeqCst), 0);
    assert_eq!(report.location, "天津市");
}

#[tokio::test]
async fn location_errors_propagate() {
    let err = current_report(&ForeignLocator, &EchoWeather, None).await.unwrap_err();
    assert!(matches!(err, WeatherError::RegionUnsupported { .. }));

    let err = current_report(&ForeignLocator, &EchoWeather, Some("nowhere")).await.unwrap_err();
    assert!(matches!(err, WeatherError::InvalidLocation(_)));
}

#[test]
fn report_serializes_to_json() {
    let report = qqweather_core::WeatherReport {
        location: "北京市".into(),
        observation: WeatherObservation {
            code: 0,
            temperature_c: 30,
            humidity_pct: 20,
            update_time: String::new(),
            condition: "晴".into(),
            wind_direction: String::new(),
            wind_power: String::new(),
            pressure: String::new(),
            precipitation: String::new(),
        },
        icon: qqweather_core::resolve_icon_at(0, 12),
    };

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["location"], "北京市");
    assert_eq!(json["icon"]["icon_id"], "day");
    assert_eq!(json["observation"]["temperature_c"], 30);
}
