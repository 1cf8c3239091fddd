//! Process-wide access to the application event bus.
//!
//! Carbon hotkey callbacks and AppKit blocks have no convenient way to carry
//! a publisher, so the sender lives in a static. The receiver is only ever
//! drained from the main-thread tick.
//!
//! ```ignore
//! events::init_event_bus();
//! events::publish(AppEvent::CycleMode);
//! while let Some(event) = events::take_event() { /* ... */ }
//! ```

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, OnceLock};

use tracing::warn;

use super::bus::EventPublisher;
use super::types::AppEvent;

static SENDER: OnceLock<Sender<AppEvent>> = OnceLock::new();

static RECEIVER: OnceLock<Mutex<Receiver<AppEvent>>> = OnceLock::new();

/// Initialize the global event bus.
///
/// Returns `false` (and leaves the existing bus in place) if it was already
/// initialized.
pub fn init_event_bus() -> bool {
    let (sender, receiver) = mpsc::channel();
    if SENDER.set(sender).is_err() {
        return false;
    }
    RECEIVER.set(Mutex::new(receiver)).is_ok()
}

/// Get a publisher handle for the global event bus.
///
/// Returns `None` before `init_event_bus()`.
pub fn publisher() -> Option<EventPublisher> {
    SENDER
        .get()
        .map(|sender| EventPublisher::from_sender(sender.clone()))
}

/// Publish an event to the global event bus.
///
/// Safe to call from FFI callbacks: an uninitialized bus drops the event
/// with a warning instead of panicking.
pub fn publish(event: AppEvent) {
    match SENDER.get() {
        Some(sender) => {
            // Receiver gone means the app is shutting down
            let _ = sender.send(event);
        }
        None => warn!(event = ?event, "event bus not initialized, dropping event"),
    }
}

/// Take the next pending event, if any.
pub fn take_event() -> Option<AppEvent> {
    let receiver = RECEIVER.get()?;
    let receiver = match receiver.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    receiver.try_recv().ok()
}

/// Drain all pending events from the global event bus.
pub fn drain_events() -> Vec<AppEvent> {
    std::iter::from_fn(take_event).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // OnceLock can only be set once per process, so everything that touches
    // the global bus lives in this single test.
    #[test]
    fn test_global_bus_lifecycle() {
        init_event_bus();
        assert!(!init_event_bus());

        publish(AppEvent::CycleMode);
        publisher()
            .expect("initialized")
            .publish(AppEvent::TurnOff);

        assert_eq!(take_event(), Some(AppEvent::CycleMode));
        assert_eq!(drain_events(), vec![AppEvent::TurnOff]);
        assert_eq!(take_event(), None);
    }
}
