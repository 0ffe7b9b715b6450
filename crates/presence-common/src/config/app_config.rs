//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when
//! present).

use presence_core::ActivityLimits;
use serde::Serialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub normalize: NormalizeConfig,
    pub dev_server: DevServerConfig,
    pub build: BuildConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Limits applied when normalizing presence records
#[derive(Debug, Clone, Serialize)]
pub struct NormalizeConfig {
    pub max_buttons: usize,
}

impl NormalizeConfig {
    #[must_use]
    pub fn limits(&self) -> ActivityLimits {
        ActivityLimits::new(self.max_buttons)
    }
}

/// Front-end dev server settings for the desktop web view
#[derive(Debug, Clone, Serialize)]
pub struct DevServerConfig {
    pub host: String,
    pub port: u16,
    /// Fail instead of falling back to another port when `port` is taken
    pub strict_port: bool,
    /// Environment variable prefixes exposed to client code
    pub env_prefixes: Vec<String>,
}

impl DevServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check whether a variable may be exposed to client code
    #[must_use]
    pub fn exposes(&self, var: &str) -> bool {
        self.env_prefixes.iter().any(|prefix| var.starts_with(prefix.as_str()))
    }
}

/// Front-end build settings, selected by platform and debug flags
#[derive(Debug, Clone, Serialize)]
pub struct BuildConfig {
    pub platform: Option<String>,
    pub debug: bool,
    pub target: BuildTarget,
    pub minify: Option<Minifier>,
    pub sourcemap: bool,
}

/// Browser engine baseline the bundle is compiled for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTarget {
    /// WebView2 on Windows
    Chrome105,
    /// WebKit on macOS and Linux
    Safari13,
}

impl BuildTarget {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chrome105 => "chrome105",
            Self::Safari13 => "safari13",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Minifier {
    Esbuild,
}

impl BuildConfig {
    /// Derive build settings from the platform name and debug flag
    #[must_use]
    pub fn select(platform: Option<String>, debug: bool) -> Self {
        let target = if platform.as_deref() == Some("windows") {
            BuildTarget::Chrome105
        } else {
            BuildTarget::Safari13
        };

        Self {
            platform,
            debug,
            target,
            minify: (!debug).then_some(Minifier::Esbuild),
            sourcemap: debug,
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "presence".to_string()
}

fn default_max_buttons() -> usize {
    presence_core::DEFAULT_MAX_BUTTONS
}

fn default_dev_host() -> String {
    "localhost".to_string()
}

fn default_dev_port() -> u16 {
    1420
}

fn default_env_prefixes() -> Vec<String> {
    vec!["VITE_".to_string(), "TAURI_".to_string()]
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is set to an unparseable value
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    /// Returns an error if a variable is set to an unparseable value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("APP_ENV") {
            Some(value) => Environment::parse(&value)
                .ok_or(ConfigError::InvalidValue("APP_ENV", value))?,
            None => Environment::default(),
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            normalize: NormalizeConfig {
                max_buttons: parse_var(&lookup, "PRESENCE_MAX_BUTTONS")?
                    .unwrap_or_else(default_max_buttons),
            },
            dev_server: DevServerConfig {
                host: lookup("DEV_SERVER_HOST").unwrap_or_else(default_dev_host),
                port: parse_var(&lookup, "DEV_SERVER_PORT")?.unwrap_or_else(default_dev_port),
                strict_port: parse_var(&lookup, "DEV_SERVER_STRICT_PORT")?.unwrap_or(true),
                env_prefixes: lookup("DEV_SERVER_ENV_PREFIXES")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|prefix| !prefix.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_else(default_env_prefixes),
            },
            // Any non-empty TAURI_DEBUG counts as set, matching the bundler's truthiness check
            build: BuildConfig::select(
                lookup("TAURI_PLATFORM"),
                lookup("TAURI_DEBUG").is_some_and(|value| !value.is_empty()),
            ),
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key, value))
        })
        .transpose()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
