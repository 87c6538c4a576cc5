//! Diagnostic logging to stderr.
//!
//! Generated code is written to stdout, so log output must never go there.

use std::io;

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "SVCGEN_LOG";

/// Default directive for a given `-v` count.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `SVCGEN_LOG` takes precedence over `-v`.
pub fn init(verbose: u8) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .without_time()
        .with_filter(env_filter);

    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "debug");
        assert_eq!(default_directive(2), "trace");
        assert_eq!(default_directive(9), "trace");
    }
}
