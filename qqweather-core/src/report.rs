use tracing::debug;

use crate::{
    error::WeatherError,
    icon::resolve_icon,
    model::WeatherReport,
    provider::{LocationProvider, WeatherProvider},
};

/// Run the whole lookup: location (given, or from the public IP), observation, icon.
pub async fn current_report(
    locator: &dyn LocationProvider,
    weather: &dyn WeatherProvider,
    location: Option<&str>,
) -> Result<WeatherReport, WeatherError> {
    let location = match location {
        Some(location) => location.to_string(),
        None => locator.locate().await?.canonical(),
    };
    debug!(%location, "fetching observation");

    let observation = weather.observe(&location).await?;
    let icon = resolve_icon(observation.code);

    Ok(WeatherReport { location, observation, icon })
}
