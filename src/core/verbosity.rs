//! Verbosity to log level mapping
//!
//! | Verbosity | Level |
//! |-----------|-------|
//! | 0         | error |
//! | 1         | warn  |
//! | 2, 3      | info  |
//! | 4+        | debug |

use tracing_subscriber::filter::LevelFilter;

/// Map a verbosity integer to the most detailed level that will be emitted
pub fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 | 3 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}
