//! The application controller.
//!
//! `PaceController` is the single owner of the focus configuration and of
//! every visibility flag. Hotkeys, the status bar menu and lifecycle
//! observers only publish `AppEvent`s; the dispatcher hands each one to
//! [`PaceController::handle`] and redraws from [`PaceController::render`].

use std::time::Instant;

use tracing::{debug, error, info};

use super::clock::Clock;
use super::flash::FlashScheduler;
use crate::analytics::{AnalyticsSink, SessionTracker};
use crate::events::AppEvent;
use crate::model::{
    AppState, BackgroundStyle, FocusConfiguration, FocusGeometry, FocusMode, FocusSize, MenuModel,
    Size,
};
use crate::storage::{ConfigurationRepository, SessionStore};

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything the platform layer needs to draw one frame of UI.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    /// Overlay drawn (visible, not turned off, not suspended).
    pub overlay_shown: bool,
    /// Pointer tracking timer should run.
    pub tracking_active: bool,
    pub configuration: FocusConfiguration,
    pub geometry: FocusGeometry,
    pub focus_message_visible: bool,
    pub flash_active: bool,
    pub menu: MenuModel,
}

pub struct PaceController<R, A, C> {
    repository: R,
    state: AppState,
    flash: FlashScheduler,
    analytics: SessionTracker<A>,
    clock: C,
}

impl<R, A, C> PaceController<R, A, C>
where
    R: ConfigurationRepository + SessionStore,
    A: AnalyticsSink,
    C: Clock,
{
    /// Load the stored configuration. The overlay starts visible.
    pub fn new(repository: R, sink: A, clock: C) -> Self {
        let configuration = repository.load();
        info!(
            mode = configuration.mode.id(),
            size = configuration.size.id(),
            background = configuration.background_style.id(),
            "configuration loaded"
        );
        Self {
            repository,
            state: AppState::new(configuration),
            flash: FlashScheduler::default(),
            analytics: SessionTracker::new(sink),
            clock,
        }
    }

    /// Report the launch. Returns true if onboarding should be shown.
    pub fn start(&mut self) -> bool {
        let now = self.clock.now();
        let is_new_user = !self.repository.has_completed_onboarding();
        self.analytics.app_opened(is_new_user, now);
        self.analytics.view_shown(now);
        self.track_mode(now);
        is_new_user
    }

    pub fn configuration(&self) -> &FocusConfiguration {
        &self.state.configuration
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn analytics(&self) -> &SessionTracker<A> {
        &self.analytics
    }

    /// Snapshot for the given screen size (falls back to the reference
    /// resolution when unknown).
    pub fn render(&self, screen: Option<Size>) -> RenderState {
        RenderState {
            overlay_shown: self.state.overlay_shown(),
            tracking_active: self.state.tracking_active(),
            configuration: self.state.configuration,
            geometry: self.state.configuration.geometry(screen),
            focus_message_visible: self.state.focus_message_visible,
            flash_active: self.state.flash_active,
            menu: MenuModel::render(&self.state),
        }
    }

    pub fn handle(&mut self, event: AppEvent) -> Flow {
        debug!(event = event.description(), "handling event");
        match event {
            AppEvent::CycleMode => self.cycle_mode(),
            AppEvent::CycleSize => self.cycle_size(),
            AppEvent::CycleBackground => self.cycle_background(),
            AppEvent::SelectMode(mode) => self.select_mode(mode),
            AppEvent::SelectSize(size) => self.select_size(size),
            AppEvent::SelectBackground(style) => self.select_background(style),
            AppEvent::ToggleOverlay => self.toggle_overlay(),
            AppEvent::TurnOff => self.turn_off(),
            AppEvent::ToggleFocusMessage => self.toggle_focus_message(),
            AppEvent::ToggleFlash => self.toggle_flash(),
            AppEvent::OnboardingCompleted => self.complete_onboarding(),
            AppEvent::Quit => return Flow::Quit,
            AppEvent::WillTerminate => self.shutdown(),
        }
        Flow::Continue
    }

    pub fn cycle_mode(&mut self) {
        self.apply(|state| {
            state.cycle_mode();
        });
    }

    pub fn cycle_size(&mut self) {
        self.apply(|state| {
            state.cycle_size();
        });
    }

    pub fn cycle_background(&mut self) {
        self.apply(|state| {
            state.cycle_background();
        });
    }

    pub fn select_mode(&mut self, mode: FocusMode) {
        self.apply(|state| state.configuration.mode = mode);
    }

    pub fn select_size(&mut self, size: FocusSize) {
        self.apply(|state| state.configuration.size = size);
    }

    pub fn select_background(&mut self, style: BackgroundStyle) {
        self.apply(|state| state.configuration.background_style = style);
    }

    /// Flip the "Show Pace" toggle.
    pub fn toggle_overlay(&mut self) {
        self.track_view_change(|state| {
            state.toggle_overlay();
        });
    }

    /// Hide the overlay and the writing window, and stop tracking until the
    /// next show or cycle.
    pub fn turn_off(&mut self) {
        if self.state.turned_off && !self.state.focus_message_visible {
            return;
        }
        self.track_view_change(AppState::turn_off);
        info!("overlay turned off");
    }

    pub fn toggle_focus_message(&mut self) {
        let now = self.clock.now();
        if self.state.toggle_focus_message() {
            self.analytics.focus_shown(now);
        } else {
            self.analytics.focus_hidden(now);
        }
    }

    pub fn toggle_flash(&mut self) {
        let active = self.state.toggle_flash();
        if active {
            self.flash.start(self.clock.now());
        } else {
            self.flash.stop();
        }
        info!(active, "flash reminder toggled");
        self.analytics.flash_toggled(active);
    }

    /// Call from the timer. True when a flash pulse should be shown now.
    pub fn poll_flash(&mut self) -> bool {
        if !self.state.flash_active || !self.flash.poll(self.clock.now()) {
            return false;
        }
        self.analytics.flash_triggered();
        true
    }

    pub fn complete_onboarding(&mut self) {
        if let Err(e) = self.repository.mark_onboarding_completed() {
            error!(error = %e, "failed to store onboarding flag");
        }
        self.analytics.onboarding_completed();
    }

    /// Close the session. Safe to call more than once.
    pub fn shutdown(&mut self) {
        let now = self.clock.now();
        self.flash.stop();
        self.analytics.mode_deactivated(now);
        self.analytics.app_closed(now);
    }

    /// Change the configuration, then make the overlay visible, persist and
    /// report a mode change.
    fn apply(&mut self, change: impl FnOnce(&mut AppState)) {
        let before = self.state.configuration;
        change(&mut self.state);
        let after = self.state.configuration;

        self.track_view_change(|state| {
            state.ensure_visible();
        });

        if before != after {
            info!(
                mode = after.mode.id(),
                size = after.size.id(),
                background = after.background_style.id(),
                "configuration changed"
            );
        }
        self.persist();

        if before.mode != after.mode || before.size != after.size {
            self.track_mode(self.clock.now());
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.repository.save(&self.state.configuration) {
            error!(error = %e, "failed to save configuration, keeping it in memory");
        }
    }

    fn track_mode(&mut self, now: Instant) {
        let configuration = self.state.configuration;
        self.analytics
            .mode_activated(configuration.mode.id(), configuration.size.id(), now);
    }

    /// Run a visibility transition and report `pace_view_shown/hidden` if
    /// the user-facing view flipped. The focus window's suspension is not a
    /// view change.
    fn track_view_change(&mut self, change: impl FnOnce(&mut AppState)) {
        let view_on = |s: &AppState| s.overlay_visible && !s.turned_off;
        let was = view_on(&self.state);
        let focus_was = self.state.focus_message_visible;
        change(&mut self.state);

        let now = self.clock.now();
        if focus_was && !self.state.focus_message_visible {
            self.analytics.focus_hidden(now);
        }
        match (was, view_on(&self.state)) {
            (false, true) => self.analytics.view_shown(now),
            (true, false) => self.analytics.view_hidden(now),
            _ => {}
        }
    }
}
