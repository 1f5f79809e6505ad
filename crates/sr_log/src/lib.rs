//! Text logging for the slamrelay crates.
//!
//! * `trace`: spammy things
//! * `debug`: per-chunk and per-message details
//! * `info`: session lifecycle, things an operator wants to see
//! * `warn`: problems we can recover from
//! * `error`: problems that lose functionality or data

pub use log::{debug, error, info, trace, warn};

pub use log::{Level, LevelFilter};

/// Directs all `log` calls to stderr.
///
/// Respects `RUST_LOG`, defaulting to `info` when unset. Safe to call more
/// than once (only the first call has any effect), which keeps tests that
/// each want logging from stepping on each other.
pub fn setup_logging() {
    fn setup() {
        env_logger::Builder::new()
            .parse_filters(&default_log_filter())
            .init();
    }

    use std::sync::Once;
    static START: Once = Once::new();
    START.call_once(setup);
}

/// The `RUST_LOG` filter in effect, or the default one.
pub fn default_log_filter() -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned())
}
