//! Tracing subscriber for the binary. Logs go to stderr so stdout stays command output.
//!
//! `RUST_LOG` wins when set; otherwise `warn`, or `debug` for the semnet crates when verbose.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Default filter directive when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,semnet=debug,semnet_cli=debug"
    } else {
        "warn"
    }
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init_logging(verbose: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive(verbose)));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}
