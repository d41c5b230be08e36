//! Diagnostic logging to stderr.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding an `EnvFilter` directive.
const LOG_ENV: &str = "XBE_LOG";

/// Install the global subscriber.
///
/// `-v` raises this crate to `debug`, `-vv` to `trace`; otherwise `XBE_LOG`
/// applies and defaults to `warn`. Output goes to stderr so stdout stays
/// machine-readable.
pub fn init(verbosity: u8) {
    let filter = match filter_directive(verbosity) {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    // A second init (tests) is harmless.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn filter_directive(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some("warn,xbe=debug"),
        _ => Some("debug,xbe=trace"),
    }
}
