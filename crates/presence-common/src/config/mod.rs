//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, BuildConfig, BuildTarget, ConfigError, DevServerConfig, Environment,
    Minifier, NormalizeConfig,
};
