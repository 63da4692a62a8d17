use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "USERDECK_LOG";

/// Install the stderr subscriber. `USERDECK_LOG` wins over the defaults.
pub fn init(default_directive: &str, verbose: bool) {
    let default_directive = if verbose { "debug" } else { default_directive };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("userdeck={default_directive}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
