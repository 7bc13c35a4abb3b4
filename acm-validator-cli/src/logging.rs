//! tracing setup
//!
//! Logs go to stderr so that stdout carries only the exported table. Library crates log
//! through the `log` facade; `init()` installs the `log` → tracing bridge as well.

use tracing::Level;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// HTTP stack crates that are too chatty at debug level.
const QUIET_TARGETS: &[&str] = &["hyper=info", "hyper_util=info", "reqwest=info", "rustls=info"];

pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let mut filter = EnvFilter::from_default_env().add_directive(level.into());
    for target in QUIET_TARGETS {
        if let Ok(directive) = target.parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .without_time(),
        )
        .with(filter)
        .init();
}
