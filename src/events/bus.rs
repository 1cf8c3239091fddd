//! Owned event queue: many publishers, one main-thread consumer.
//!
//! Carbon and AppKit callbacks cannot borrow the controller, so they post
//! here and the next frame picks the events up in order.

use std::sync::mpsc::{self, Receiver, Sender};

use super::types::AppEvent;

/// An mpsc queue of [`AppEvent`]s.
///
/// ```
/// use pace::events::{AppEvent, EventBus};
///
/// let bus = EventBus::new();
/// bus.publisher().publish(AppEvent::CycleSize);
/// assert_eq!(bus.drain(), vec![AppEvent::CycleSize]);
/// ```
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// A sending handle; clone it freely, including across threads.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher::from_sender(self.sender.clone())
    }

    /// Next queued event without blocking. The bus keeps a sender of its
    /// own, so the channel never disconnects while it is alive.
    pub fn try_recv(&self) -> Option<AppEvent> {
        self.receiver.try_recv().ok()
    }

    /// Everything queued so far, oldest first.
    pub fn drain(&self) -> Vec<AppEvent> {
        self.receiver.try_iter().collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    pub fn from_sender(sender: Sender<AppEvent>) -> Self {
        Self { sender }
    }

    /// Queue `event` for the next frame. Never blocks; a closed queue
    /// means the app is exiting and the event is dropped.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BackgroundStyle, FocusMode};

    #[test]
    fn fresh_bus_is_empty() {
        assert!(EventBus::default().drain().is_empty());
    }

    #[test]
    fn drain_returns_events_in_publish_order() {
        let bus = EventBus::new();
        let a = bus.publisher();
        let b = a.clone();
        a.publish(AppEvent::SelectMode(FocusMode::Square));
        b.publish(AppEvent::TurnOff);
        a.publish(AppEvent::SelectBackground(BackgroundStyle::White));

        assert_eq!(
            bus.drain(),
            vec![
                AppEvent::SelectMode(FocusMode::Square),
                AppEvent::TurnOff,
                AppEvent::SelectBackground(BackgroundStyle::White),
            ]
        );
        assert_eq!(bus.try_recv(), None);
    }

    #[test]
    fn hotkey_thread_can_publish() {
        let bus = EventBus::new();
        let publisher = bus.publisher();
        std::thread::spawn(move || publisher.publish(AppEvent::ToggleFocusMessage))
            .join()
            .unwrap();
        assert_eq!(bus.try_recv(), Some(AppEvent::ToggleFocusMessage));
    }
}
