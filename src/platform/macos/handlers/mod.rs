//! Event handlers driven by the main-thread timer.

pub mod dispatcher;

pub use dispatcher::{run_frame, shutdown};
