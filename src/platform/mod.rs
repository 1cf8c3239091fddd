//! Platform shells around the core. Only macOS is supported.

pub mod macos;
