//! AppKit user interface: overlay, focus window, flash border, status bar
//! and the first-run alert.

pub mod flash;
pub mod focus_window;
pub mod onboarding;
pub mod overlay;
pub mod status_bar;
pub mod window;

pub use flash::FlashBorder;
pub use focus_window::FocusWindow;
pub use onboarding::show_onboarding;
pub use overlay::{create_overlay_view, set_frame_state};
pub use status_bar::{install_status_item, rebuild_menu};
