//! Structured logging for the bridge.
//!
//! Logs are written to stderr so they never interleave with a host's report
//! output on stdout. The configured level applies to the bridge's own events;
//! events from the host and the scenario engine are limited to warnings.
//! Closing the `runner_adapter` span logs how long adapter construction took.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use crate::config::BridgeConfig;

/// Level applied to events that do not originate in this crate.
const FOREIGN_LEVEL: &str = "warn";

fn filter_directives(config: &BridgeConfig) -> String {
    let level = config.log_level.as_filter_str();
    format!("{FOREIGN_LEVEL},{}={level}", env!("CARGO_CRATE_NAME"))
}

fn filter_from_config(config: &BridgeConfig) -> EnvFilter {
    EnvFilter::new(filter_directives(config))
}

/// Installs the bridge's stderr subscriber as the global default.
///
/// Log level precedence (highest to lowest):
///
/// 1. Explicit overrides applied to `config`
/// 2. `SCENARIO_BRIDGE_LOG_LEVEL` (read by [`BridgeConfig::from_env`])
/// 3. Default configuration value
///
/// Returns `false` when a global subscriber was already set. Host frameworks
/// and tests commonly install their own, and the first one wins.
/// [`ScriptEngineProvider::from_config`](crate::ScriptEngineProvider::from_config)
/// calls this for hosts that configure the bridge from the environment.
pub fn init_logging(config: &BridgeConfig) -> bool {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .finish();

    tracing::subscriber::set_global_default(subscriber).is_ok()
}
