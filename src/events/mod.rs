//! Event system for decoupled inter-module communication.
//!
//! Hotkeys, the status bar menu and system observers publish [`AppEvent`]s;
//! the main-thread tick drains them and hands each one to the controller.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Hotkeys   │     │ Status menu │     │  Observers  │
//! │  (Carbon)   │     │  (NSMenu)   │     │ (terminate) │
//! └──────┬──────┘     └──────┬──────┘     └──────┬──────┘
//!        │ publish()         │ publish()         │ publish()
//!        ▼                   ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                EventBus (mpsc channel)              │
//! └─────────────────────────┬───────────────────────────┘
//!                           │ take_event()
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │         Dispatcher → PaceController::handle         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! - [`types`]: Event definitions (`AppEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types
//! - [`global`]: Static access functions

pub mod bus;
pub mod global;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use global::{drain_events, init_event_bus, publish, publisher, take_event};
pub use types::AppEvent;
