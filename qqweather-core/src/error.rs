/// Errors returned by the location and weather lookups.
///
/// Each variant is handed back to the caller unchanged; nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IP address is located in '{country}', only mainland China is supported")]
    RegionUnsupported { country: String },

    #[error("Invalid location '{0}': expected \"<province>省<city>市\" or a municipality such as \"北京市\"")]
    InvalidLocation(String),

    #[error("Field '{field}' is not an integer: '{value}'")]
    Parse { field: &'static str, value: String },

    #[error("Unexpected response: {0}")]
    MalformedResponse(String),
}

impl WeatherError {
    pub fn is_network(&self) -> bool {
        matches!(self, WeatherError::Network(_))
    }
}
