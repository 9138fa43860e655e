use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{error::WeatherError, http, model::LocationResult};

use super::LocationProvider;

/// The only country the weather service covers.
pub const SUPPORTED_COUNTRY: &str = "中国";

/// IP geolocation via ipip.net's `myip` JSON endpoint.
#[derive(Debug, Clone)]
pub struct IpipLocator {
    url: String,
    http: Client,
}

impl IpipLocator {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, WeatherError> {
        Ok(Self {
            url: url.into(),
            http: http::build_client(timeout)?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct IpipData {
    #[serde(default)]
    ip: String,
    location: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct IpipResponse {
    ret: String,
    data: IpipData,
}

impl IpipResponse {
    fn into_location(self) -> Result<LocationResult, WeatherError> {
        if self.ret != "ok" {
            return Err(WeatherError::MalformedResponse(format!(
                "ipip.net returned ret='{}'",
                self.ret
            )));
        }

        let mut parts = self.data.location.into_iter();
        let country = parts.next().unwrap_or_default();
        if country.is_empty() {
            return Err(WeatherError::MalformedResponse(
                "ipip.net returned an empty location".to_string(),
            ));
        }
        if country != SUPPORTED_COUNTRY {
            return Err(WeatherError::RegionUnsupported { country });
        }

        let province = parts.next().unwrap_or_default();
        let city = parts.next().unwrap_or_default();
        if province.is_empty() || city.is_empty() {
            return Err(WeatherError::MalformedResponse(format!(
                "ipip.net location is missing province or city (province='{province}', city='{city}')"
            )));
        }

        Ok(LocationResult { province, city })
    }
}

#[async_trait]
impl LocationProvider for IpipLocator {
    async fn locate(&self) -> Result<LocationResult, WeatherError> {
        let parsed: IpipResponse = http::get_json(&self.http, &self.url, &[]).await?;
        debug!(ip = %parsed.data.ip, location = ?parsed.data.location, "resolved public IP");
        parsed.into_location()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(ret: &str, location: &[&str]) -> IpipResponse {
        IpipResponse {
            ret: ret.to_string(),
            data: IpipData {
                ip: "1.2.3.4".to_string(),
                location: location.iter().map(|s| s.to_string()).collect(),
            },
        }
    }

    #[test]
    fn domestic_location_is_accepted() {
        let loc = response("ok", &["中国", "广东", "广州", "", "电信"])
            .into_location()
            .expect("domestic IP");
        assert_eq!(loc.province, "广东");
        assert_eq!(loc.city, "广州");
        assert_eq!(loc.canonical(), "广东省广州市");
    }

    #[test]
    fn foreign_location_is_unsupported() {
        let err = response("ok", &["美国", "加利福尼亚州", "洛杉矶"])
            .into_location()
            .unwrap_err();
        assert!(matches!(err, WeatherError::RegionUnsupported { ref country } if country == "美国"));
    }

    #[test]
    fn short_location_is_malformed() {
        let err = response("ok", &["中国", "北京"]).into_location().unwrap_err();
        assert!(matches!(err, WeatherError::MalformedResponse(_)));

        let err = response("ok", &[]).into_location().unwrap_err();
        assert!(matches!(err, WeatherError::MalformedResponse(_)));
    }

    #[test]
    fn failed_ret_is_malformed() {
        let err = response("err", &["中国", "北京", "北京"]).into_location().unwrap_err();
        assert!(err.to_string().contains("ret='err'"));
    }
}
