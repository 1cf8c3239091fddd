#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

#[cfg(target_os = "macos")]
mod macos_main;

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn log_level() -> Level {
    match std::env::var(pace::model::LOG_LEVEL_ENV)
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    pace::events::init_event_bus();

    #[cfg(target_os = "macos")]
    {
        use anyhow::Context;
        macos_main::run().context("pace failed to start")?;
    }

    #[cfg(not(target_os = "macos"))]
    {
        tracing::warn!("pace draws its overlay with AppKit and only runs on macOS");
    }

    Ok(())
}
