//! Telemetry helpers for applications embedding `tariff-chart`.
//!
//! The engine only emits `tracing` events. Hosts either call one of the
//! helpers below or install their own subscriber and filters.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,tariff_chart=info";

/// Installs a compact subscriber with [`DEFAULT_FILTER`] as the fallback.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_FILTER)
}

/// Installs a compact subscriber, preferring `RUST_LOG` over `fallback_filter`.
#[must_use]
pub fn init_tracing_with_fallback(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
