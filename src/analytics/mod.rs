//! Usage analytics.
//!
//! Events are plain values (`AnalyticsEvent`) handed synchronously to an
//! `AnalyticsSink`. `SessionTracker` keeps the start times needed for the
//! duration properties. Credentials are resolved once at startup; without
//! them the `NullSink` is used.

pub mod credentials;
pub mod events;
pub mod sink;
pub mod tracker;

pub use credentials::{AnalyticsCredentials, ConfigSource, EnvSource, JsonConfigSource};
pub use events::AnalyticsEvent;
pub use sink::{AnalyticsSink, CaptureSink, NullSink, RecordingSink};
pub use tracker::SessionTracker;

/// Pick the sink for this run: a `CaptureSink` when credentials resolve,
/// the `NullSink` otherwise.
pub fn sink_for(
    credentials: Option<AnalyticsCredentials>,
    distinct_id: &str,
) -> Box<dyn AnalyticsSink> {
    match credentials {
        Some(creds) => Box::new(CaptureSink::new(creds, distinct_id)),
        None => Box::new(NullSink),
    }
}
