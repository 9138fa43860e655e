use anyhow::{Context, anyhow};
use chrono::{Local, Timelike};
use clap::{Parser, Subcommand};
use inquire::{CustomType, CustomUserError, Text, validator::Validation};
use qqweather_core::{
    Config, WeatherReport, parse_location,
    provider::{locator_from_config, weather_from_config},
};
use tracing::debug;

use crate::icons;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "qqweather", version, about = "Current weather for your IP location")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Request timeout in seconds, overriding the config file.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the location of this machine's public IP, e.g. "广东省广州市".
    Locate,

    /// Show current weather.
    Show {
        /// Location such as "广东省广州市" or "北京市"; defaults to the configured
        /// location, then to the public IP location.
        location: Option<String>,

        /// Print the full report as JSON.
        #[arg(long)]
        json: bool,

        /// Also print the SVG source of the weather icon.
        #[arg(long)]
        svg: bool,
    },

    /// Resolve a weather code to its icon.
    Icon {
        /// Weather code reported by the weather service.
        #[arg(allow_negative_numbers = true)]
        code: i32,

        /// Hour of day (0-23) to resolve day/night variants; defaults to now.
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,
    },

    /// List bundled icons, or print one icon's SVG.
    Icons {
        /// Icon name, e.g. "cloudy-day".
        name: Option<String>,
    },

    /// Set the default location and request timeout.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let Cli { command, timeout } = self;
        let mut config = if command.uses_config() {
            let config = Config::load()?;
            debug!(?config, "loaded configuration");
            config
        } else {
            Config::default()
        };

        match command {
            Command::Locate => {
                apply_timeout(&mut config, timeout)?;
                let locator = locator_from_config(&config)?;
                let location = locator.locate().await?;
                println!("{}", location.canonical());
            }
            Command::Show { location, json, svg } => {
                apply_timeout(&mut config, timeout)?;
                let locator = locator_from_config(&config)?;
                let weather = weather_from_config(&config)?;

                let location = location.or_else(|| config.default_location.clone());
                let report = qqweather_core::current_report(
                    locator.as_ref(),
                    weather.as_ref(),
                    location.as_deref(),
                )
                .await?;

                if json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    println!("{}", format_report(&report));
                }

                if svg {
                    println!("{}", icon_svg(report.icon.icon_id)?);
                }
            }
            Command::Icon { code, hour } => {
                let hour = hour.unwrap_or_else(|| Local::now().hour());
                let icon = qqweather_core::resolve_icon_at(code, hour);
                println!("{}\t{}", icon.icon_id, icon.display_name);
            }
            Command::Icons { name } => match name {
                Some(name) => println!("{}", icon_svg(&name)?),
                None => {
                    for name in icons::assets().names() {
                        println!("{name}");
                    }
                }
            },
            Command::Configure => configure(config)?,
        }

        Ok(())
    }
}

impl Command {
    /// Offline subcommands never touch the config file, so a broken file cannot stop them.
    fn uses_config(&self) -> bool {
        matches!(self, Command::Locate | Command::Show { .. } | Command::Configure)
    }
}

fn apply_timeout(config: &mut Config, timeout: Option<u64>) -> anyhow::Result<()> {
    if let Some(secs) = timeout {
        config.set_timeout_secs(secs)?;
    }
    Ok(())
}

fn icon_svg(name: &str) -> anyhow::Result<&'static str> {
    icons::assets()
        .get(name)
        .ok_or_else(|| anyhow!("No bundled icon named '{name}'. Run `qqweather icons` to list them."))
}

fn format_report(report: &WeatherReport) -> String {
    let obs = &report.observation;
    let condition = if obs.condition.is_empty() {
        report.icon.display_name
    } else {
        obs.condition.as_str()
    };

    let mut line = format!(
        "{}  {}  {}°C  湿度 {}%  [{}]",
        report.location, condition, obs.temperature_c, obs.humidity_pct, report.icon.icon_id
    );
    if let Some(at) = obs.updated_at() {
        line.push_str(&format!("  更新于 {}", at.format("%Y-%m-%d %H:%M")));
    }
    line
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let current = config.default_location.clone().unwrap_or_default();

    let location = Text::new("Default location (leave blank to detect from IP):")
        .with_initial_value(&current)
        .with_help_message("e.g. 广东省广州市 or 北京市")
        .with_validator(|input: &str| -> Result<Validation, CustomUserError> {
            let input = input.trim();
            if input.is_empty() || parse_location(input).is_ok() {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid(
                    "Expected \"<province>省<city>市\" or a municipality such as \"北京市\"".into(),
                ))
            }
        })
        .prompt()
        .context("Failed to read default location")?;

    let location = location.trim();
    if location.is_empty() {
        config.clear_default_location();
    } else {
        config.set_default_location(location)?;
    }

    let timeout = CustomType::<u64>::new("Request timeout in seconds:")
        .with_default(config.timeout().as_secs())
        .with_error_message("Please enter a whole number of seconds")
        .prompt()
        .context("Failed to read timeout")?;
    config.set_timeout_secs(timeout)?;

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}
