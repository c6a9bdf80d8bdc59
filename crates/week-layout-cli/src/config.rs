//! Configuration loading for the `week-layout` CLI.

use std::path::{Path, PathBuf};

use chrono::Weekday;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use week_layout::config::DEFAULT_PIXELS_PER_HOUR;
use week_layout::LayoutConfig;

/// CLI configuration, merged from defaults, config files and `WEEK_LAYOUT_*`
/// environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Vertical pixel density of the time axis.
    pub pixels_per_hour: f64,
    /// First day of the week used by the `week` command.
    pub week_starts_on: Weekday,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pixels_per_hour: DEFAULT_PIXELS_PER_HOUR,
            week_starts_on: Weekday::Mon,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    ///
    /// Later sources win: defaults, then `<config dir>/week-layout/config.toml`,
    /// then `config_path`, then `WEEK_LAYOUT_*` environment variables.
    #[allow(clippy::result_large_err)]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("WEEK_LAYOUT_"));

        figment.extract()
    }

    /// Layout settings, with an optional command-line override, validated.
    pub fn layout(&self, pixels_per_hour: Option<f64>) -> week_layout::error::Result<LayoutConfig> {
        LayoutConfig::with_pixels_per_hour(pixels_per_hour.unwrap_or(self.pixels_per_hour))
    }
}

/// Returns the platform-specific config directory for week-layout.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("week-layout"))
}
