//! Core library for the `qqweather` CLI.
//!
//! This crate defines:
//! - IP based location lookup (ipip.net) and canonical location strings
//! - Current weather observations (wis.qq.com)
//! - Weather code → icon resolution and the embedded icon table type
//! - Configuration handling
//!
//! It is used by `qqweather-cli`, but can also be reused by other binaries or services.

pub mod address;
pub mod assets;
pub mod config;
pub mod error;
pub mod http;
pub mod icon;
pub mod model;
pub mod provider;
pub mod report;

pub use address::{format_location, parse_location};
pub use assets::IconAssets;
pub use config::Config;
pub use error::WeatherError;
pub use icon::{WeatherCodeEntry, resolve_icon, resolve_icon_at};
pub use model::{IconMatch, LocationResult, WeatherObservation, WeatherQuery, WeatherReport};
pub use provider::{LocationProvider, WeatherProvider};
pub use report::current_report;
