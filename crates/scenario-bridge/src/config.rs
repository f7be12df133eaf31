//! Bridge configuration parsed from environment variables.
//!
//! All settings can be overridden via environment variables prefixed with
//! `SCENARIO_BRIDGE_`.

use std::env;
use std::str::FromStr;

use crate::error::BridgeError;

/// Bootstrap script evaluated when no override is configured.
pub const DEFAULT_BOOTSTRAP_SCRIPT: &str = "scenario_bridge/runner.script";

const LOG_LEVEL_VAR: &str = "SCENARIO_BRIDGE_LOG_LEVEL";
const BOOTSTRAP_SCRIPT_VAR: &str = "SCENARIO_BRIDGE_BOOTSTRAP_SCRIPT";

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Info` when not specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose logging, includes all trace spans.
    Trace,
    /// Debug-level information, including every delegated call.
    Debug,
    /// Standard informational messages.
    #[default]
    Info,
    /// Warning messages, such as failed bootstrap attempts.
    Warn,
    /// Error messages for failures.
    Error,
}

impl FromStr for LogLevel {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(BridgeError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Configuration for the bridge.
///
/// # Environment Variables
///
/// - `SCENARIO_BRIDGE_LOG_LEVEL`: Sets the log level (trace, debug, info,
///   warn, error)
/// - `SCENARIO_BRIDGE_BOOTSTRAP_SCRIPT`: Names the scenario engine's
///   bootstrap script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: LogLevel,
    /// Script evaluated once per process to initialize the scenario engine.
    pub bootstrap_script: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            bootstrap_script: DEFAULT_BOOTSTRAP_SCRIPT.to_owned(),
        }
    }
}

impl BridgeConfig {
    /// Load configuration from environment variables.
    ///
    /// Falls back to defaults for missing values.
    ///
    /// # Errors
    ///
    /// Returns `BridgeError::InvalidConfig` if an environment variable contains
    /// an invalid value.
    pub fn from_env() -> Result<Self, BridgeError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which resolves variable names.
    ///
    /// # Errors
    ///
    /// Returns `BridgeError::InvalidConfig` if a variable contains an invalid
    /// value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BridgeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(val) => val.parse()?,
            None => LogLevel::default(),
        };

        let bootstrap_script = match lookup(BOOTSTRAP_SCRIPT_VAR) {
            Some(val) if val.trim().is_empty() => {
                return Err(BridgeError::InvalidConfig(format!(
                    "{BOOTSTRAP_SCRIPT_VAR} must not be empty"
                )));
            }
            Some(val) => val,
            None => DEFAULT_BOOTSTRAP_SCRIPT.to_owned(),
        };

        Ok(Self {
            log_level,
            bootstrap_script,
        })
    }

    /// Apply optional overrides to an existing configuration.
    #[must_use]
    pub fn apply_overrides(
        mut self,
        log_level: Option<LogLevel>,
        bootstrap_script: Option<String>,
    ) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }

        if let Some(script) = bootstrap_script {
            self.bootstrap_script = script;
        }

        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Create a new configuration with the specified bootstrap script.
    #[must_use]
    pub fn with_bootstrap_script(mut self, script: impl Into<String>) -> Self {
        self.bootstrap_script = script.into();
        self
    }
}
