//! Telemetry helpers for hosts embedding `chart-axis`.
//!
//! The axis engine only emits `tracing` events (range resolution, interval
//! selection, ignored pan/zoom requests). Hosts either call
//! `init_default_tracing` or install their own subscriber and filters.

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// The filter is read from `RUST_LOG` and falls back to `info`; use
/// `RUST_LOG=chart_axis=debug` to see per-update range and transform events.
///
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
