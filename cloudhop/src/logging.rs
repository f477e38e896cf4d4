//! Diagnostics for the cloudhop CLI.
//!
//! Everything goes to stderr; stdout carries only command results so it can
//! be piped. `RUST_LOG` wins over the `--verbose` default when set.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "cloudhop=debug" } else { "warn" }
}

/// Install the stderr subscriber. Call once, after argument parsing.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry().with(filter).with(stderr).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_crate_level() {
        assert_eq!(default_directive(false), "warn");
        assert_eq!(default_directive(true), "cloudhop=debug");
    }
}
