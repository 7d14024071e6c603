//! Tracing subscriber setup for the CLI
//!
//! Logs go to stderr so `--json` output on stdout stays machine-readable.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter for a verbosity level (`-v` count).
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "componentry=warn",
        1 => "componentry=info,warn",
        2 => "componentry=debug,info",
        _ => "componentry=trace,debug",
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the verbosity flag.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: u8, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
