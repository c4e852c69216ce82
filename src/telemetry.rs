//! Application telemetry events and sinks.
//!
//! The client is a thin wrapper over a hosted service, but it still
//! benefits from lightweight telemetry to capture operational signals such
//! as stale fetch responses being discarded.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by the listings client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// Records a fetch response that arrived after a newer fetch began.
    StaleFetchDiscarded {
        /// Generation stamp of the discarded request.
        generation: u64,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// This is intended for local debugging and is not transmitted anywhere.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

#[cfg(test)]
mod tests {
    use super::{TelemetryEvent, TelemetrySink};

    #[derive(Debug, Default)]
    struct RecordingSink {
        events: std::sync::Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingSink {
        fn take(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .expect("events mutex should be available")
                .drain(..)
                .collect()
        }
    }

    impl TelemetrySink for RecordingSink {
        fn record(&self, event: TelemetryEvent) {
            self.events
                .lock()
                .expect("events mutex should be available")
                .push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingSink::default();
        sink.record(TelemetryEvent::StaleFetchDiscarded { generation: 3 });

        assert_eq!(
            sink.take(),
            vec![TelemetryEvent::StaleFetchDiscarded { generation: 3 }]
        );
    }

    #[test]
    fn events_serialise_with_a_type_tag() {
        let event = TelemetryEvent::StaleFetchDiscarded { generation: 7 };
        let value = serde_json::to_value(&event).expect("event should serialise");
        assert_eq!(
            value,
            serde_json::json!({ "type": "stale_fetch_discarded", "generation": 7 })
        );
    }
}
