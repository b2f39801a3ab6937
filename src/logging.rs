//! Logging setup
//!
//! Events go to stderr so stdout stays free for the install summary and
//! completion scripts. `RUST_LOG` takes precedence over the command line flags.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive used when `RUST_LOG` is not set
fn default_directive(verbose: bool, quiet: bool) -> String {
    let level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    // Dependencies (reqwest, hyper) only surface warnings
    format!("warn,{}={level}", env!("CARGO_CRATE_NAME"))
}

/// Install the global subscriber. Call once, before any command runs.
pub fn init_logging(verbose: bool, quiet: bool) {
    let env_filter = if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(default_directive(verbose, quiet))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .with_ansi(std::env::var_os("NO_COLOR").is_none()),
        )
        .with(env_filter)
        .init();
}
