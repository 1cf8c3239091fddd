//! Where analytics events end up.

use serde_json::{json, Value};
use tracing::{debug, info};

use super::credentials::AnalyticsCredentials;
use super::events::AnalyticsEvent;

/// Receiver of analytics events. Must never fail the caller.
pub trait AnalyticsSink {
    fn capture(&mut self, event: &AnalyticsEvent);
}

/// Drops everything. Used when no credentials are configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl AnalyticsSink for NullSink {
    fn capture(&mut self, event: &AnalyticsEvent) {
        debug!(event = event.name(), "analytics disabled, dropping event");
    }
}

/// Builds capture payloads for the configured host and hands them to the
/// log. Network delivery is out of scope; the payload is what would be
/// POSTed to `<host>/capture/`.
#[derive(Debug, Clone)]
pub struct CaptureSink {
    credentials: AnalyticsCredentials,
    distinct_id: String,
    sent: usize,
}

impl CaptureSink {
    pub fn new(credentials: AnalyticsCredentials, distinct_id: impl Into<String>) -> Self {
        let distinct_id = distinct_id.into();
        info!(
            host = %credentials.host,
            key = %credentials.redacted_key(),
            "analytics configured"
        );
        Self {
            credentials,
            distinct_id,
            sent: 0,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/capture/", self.credentials.host.trim_end_matches('/'))
    }

    /// JSON body for one event.
    pub fn payload(&self, event: &AnalyticsEvent) -> Value {
        json!({
            "api_key": self.credentials.api_key,
            "event": event.name(),
            "distinct_id": self.distinct_id,
            "properties": event.properties(),
        })
    }

    /// Number of events captured so far.
    pub fn sent(&self) -> usize {
        self.sent
    }
}

impl AnalyticsSink for CaptureSink {
    fn capture(&mut self, event: &AnalyticsEvent) {
        let payload = self.payload(event);
        self.sent += 1;
        debug!(
            endpoint = %self.endpoint(),
            urgent = event.is_urgent(),
            payload = %payload,
            "analytics event"
        );
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub events: Vec<AnalyticsEvent>,
}

impl RecordingSink {
    pub fn names(&self) -> Vec<&'static str> {
        self.events.iter().map(AnalyticsEvent::name).collect()
    }
}

impl AnalyticsSink for RecordingSink {
    fn capture(&mut self, event: &AnalyticsEvent) {
        self.events.push(event.clone());
    }
}

impl<S: AnalyticsSink + ?Sized> AnalyticsSink for Box<S> {
    fn capture(&mut self, event: &AnalyticsEvent) {
        (**self).capture(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sink() -> CaptureSink {
        CaptureSink::new(
            AnalyticsCredentials {
                api_key: "phc_test".into(),
                host: "https://us.i.posthog.com/".into(),
            },
            "ABC-123",
        )
    }

    #[test]
    fn payload_shape() {
        let s = sink();
        let body = s.payload(&AnalyticsEvent::AppOpened { is_new_user: true });
        assert_eq!(body["event"], "app_opened");
        assert_eq!(body["distinct_id"], "ABC-123");
        assert_eq!(body["api_key"], "phc_test");
        assert_eq!(body["properties"]["is_new_user"], true);
    }

    #[test]
    fn endpoint_has_single_slash() {
        assert_eq!(sink().endpoint(), "https://us.i.posthog.com/capture/");
    }

    #[test]
    fn capture_counts_events() {
        let mut s = sink();
        s.capture(&AnalyticsEvent::FlashTriggered);
        s.capture(&AnalyticsEvent::PaceViewShown);
        assert_eq!(s.sent(), 2);
    }
}
