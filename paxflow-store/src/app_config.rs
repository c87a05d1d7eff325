use paxflow_core::SearchRules;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_basic_window_hours")]
    pub basic_window_hours: u32,
    #[serde(default = "default_delay_tolerance_hours")]
    pub delay_tolerance_hours: u32,
    #[serde(default = "default_max_window_days")]
    pub max_window_days: u32,
}

fn default_basic_window_hours() -> u32 { 48 }
fn default_delay_tolerance_hours() -> u32 { 24 }
fn default_max_window_days() -> u32 { 31 }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            basic_window_hours: default_basic_window_hours(),
            delay_tolerance_hours: default_delay_tolerance_hours(),
            max_window_days: default_max_window_days(),
        }
    }
}

impl SearchConfig {
    pub fn rules(&self) -> SearchRules {
        SearchRules::from_hours(self.basic_window_hours, self.delay_tolerance_hours)
            .with_max_window_days(self.max_window_days)
    }
}

/// JSON files used to seed the in-memory stores. Missing paths mean empty stores.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DataConfig {
    pub flights_path: Option<String>,
    pub registrations_path: Option<String>,
    pub passengers_path: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Developer overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `PAXFLOW_SERVER__PORT=9000`
            .add_source(config::Environment::with_prefix("PAXFLOW").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
