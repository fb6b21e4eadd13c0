//! Logger construction
//!
//! Builds the `tracing` dispatcher a service logs through when the caller
//! didn't inject one. The dispatcher is owned by the service; nothing here
//! installs a global subscriber.

use tracing::Dispatch;

use crate::core::verbosity::level_filter;

/// Build a stderr `fmt` dispatcher filtered by verbosity
pub fn default_dispatch(verbosity: u8) -> Dispatch {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    Dispatch::new(subscriber)
}
