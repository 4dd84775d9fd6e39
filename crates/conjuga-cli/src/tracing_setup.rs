//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use conjuga_core::config::ObservabilityConfig;

/// Install the global subscriber. `CONJUGA_LOG` overrides the configured
/// level. Logs go to stderr so they never interleave with drill prompts.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env("CONJUGA_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        eprintln!("tracing already initialized: {e}");
    }
}
