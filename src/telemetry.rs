//! Tracing setup for hosts embedding a surface.
//!
//! The crate emits sparse diagnostics through `tracing`: debug events when
//! the dispatch engine selects or releases a live handler, warnings when a
//! gesture is skipped because a coordinate mapping degenerated. Nothing is
//! initialized implicitly; hosts either call [`init_default_tracing`] or
//! install their own subscriber.

/// Installs a compact default `tracing` subscriber scoped to this crate.
///
/// Requires the `telemetry` feature. Honors `RUST_LOG` when set; otherwise
/// defaults to `chart_surface=debug` so live-handler selection and release
/// events are visible while everything else stays quiet.
///
/// Returns `false` when the feature is disabled or the host already
/// installed a global subscriber.
///
/// ```no_run
/// if chart_surface::telemetry::init_default_tracing() {
///     tracing::debug!("surface diagnostics enabled");
/// }
/// ```
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("chart_surface=debug"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
