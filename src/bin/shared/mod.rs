use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::{fmt, EnvFilter};

cvm::host_functions! {
    /// Demo host functions available to `call`.
    pub DemoFunctions {
        /// Returns 2.
        fn Test() {
            2
        }
        /// Returns the seconds since the unix epoch, truncated to an integer.
        fn time() {
            SystemTime::now().duration_since(UNIX_EPOCH).map(|elapsed| elapsed.as_secs() as cvm::Integer).unwrap_or(0)
        }
    }
}

/// Initializes logging to stderr. `RUST_LOG` overrides the default `warn` filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
