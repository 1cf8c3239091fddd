//! Application layer: the controller that owns state, plus the clock and
//! flash scheduling it depends on.

pub mod clock;
pub mod controller;
pub mod flash;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{Flow, PaceController, RenderState};
pub use flash::FlashScheduler;
