//! Subscriber setup for applications embedding the SDK. The library itself only emits
//! `tracing` events under the `cxsdk::*` targets.

use tracing_subscriber::{fmt, EnvFilter};

/// Install a fmt subscriber filtered by `RUST_LOG`, or by `default_filter` when unset.
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).try_init().is_ok()
}

/// Like [`init_tracing`] but writes through the test harness capture.
pub fn init_test_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cxsdk=debug"));
    fmt().with_env_filter(filter).with_test_writer().try_init().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_refused() {
        let _ = init_tracing("cxsdk=debug");
        assert!(!init_tracing("info"));
        assert!(!init_test_tracing());
    }
}
