// SPDX-License-Identifier: GPL-3.0-only

//! Capture session controller
//!
//! Owns the session state machine and mediates every capture, mode,
//! settings, editing, and teardown operation. The controller is
//! single-threaded by construction: all mutation happens inside
//! [`SessionController::update`], and spawned side effects (camera calls,
//! transforms, timers, preference writes) report back by sending a
//! [`SessionEvent`] into the internal completion channel rather than
//! touching state.
//!
//! - `state`: session data model, sub-state machines, events
//! - `update`: event dispatcher
//! - `handlers`: event handling grouped by functional domain

mod handlers;
mod state;
mod update;

pub use state::{
    AutoCaptureTimer, CaptureMode, CaptureSession, CaptureState, SessionEvent, SessionNotice,
    SessionOutcome,
};

use crate::backends::Capabilities;
use crate::config::Preferences;
use crate::editor::EditSubflow;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

/// The channel ends a session hands back to its caller.
pub struct SessionChannels {
    /// Where the UI layer and platform integration send events.
    pub events: mpsc::UnboundedSender<SessionEvent>,
    /// Receiver for the UI-facing sender above.
    pub ui_events: mpsc::UnboundedReceiver<SessionEvent>,
    /// Internal async completions (capture, transform, timer) looped back
    /// by spawned tasks, in arrival order.
    pub completions: mpsc::UnboundedReceiver<SessionEvent>,
    /// Resolves exactly once with the session outcome.
    pub outcome: oneshot::Receiver<SessionOutcome>,
}

/// The capture session controller.
///
/// Created per screen entry; destroyed on completion or discard. No state
/// survives a terminal transition.
pub struct SessionController {
    pub(crate) session: CaptureSession,
    pub(crate) prefs: Preferences,
    pub(crate) editor: Option<EditSubflow>,
    pub(crate) capture: CaptureState,
    pub(crate) auto_capture: AutoCaptureTimer,
    pub(crate) capture_seq: u64,
    pub(crate) exit_prompt: bool,
    pub(crate) notice: Option<SessionNotice>,
    pub(crate) handoff: Option<oneshot::Sender<SessionOutcome>>,
    pub(crate) finished: bool,
    pub(crate) events: mpsc::UnboundedSender<SessionEvent>,
    pub(crate) caps: Capabilities,
}

impl SessionController {
    /// Start a fresh session against the given capabilities.
    ///
    /// Preferences are read from the store once, here; later changes write
    /// through as they happen.
    pub async fn start(caps: Capabilities) -> (Self, SessionChannels) {
        let prefs = Preferences::load(caps.store.as_ref()).await;
        info!(?prefs, "Capture session starting");

        let (ui_tx, ui_events) = mpsc::unbounded_channel();
        let (internal_tx, completions) = mpsc::unbounded_channel();
        let (handoff, outcome) = oneshot::channel();

        let controller = Self {
            session: CaptureSession::new(),
            prefs,
            editor: None,
            capture: CaptureState::default(),
            auto_capture: AutoCaptureTimer::default(),
            capture_seq: 0,
            exit_prompt: false,
            notice: None,
            handoff: Some(handoff),
            finished: false,
            events: internal_tx,
            caps,
        };

        (
            controller,
            SessionChannels {
                events: ui_tx,
                ui_events,
                completions,
                outcome,
            },
        )
    }

    // ===== Accessors for the rendering layer =====

    pub fn session(&self) -> &CaptureSession {
        &self.session
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    /// The open edit sub-flow, while editing.
    pub fn editor(&self) -> Option<&EditSubflow> {
        self.editor.as_ref()
    }

    pub fn notice(&self) -> Option<&SessionNotice> {
        self.notice.as_ref()
    }

    /// Whether the discard-confirmation prompt should be shown.
    pub fn exit_prompt_visible(&self) -> bool {
        self.exit_prompt
    }

    /// Whether a terminal transition has happened. A finished controller
    /// drops every further event.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Drive a session to its end: pump UI events and async completions into
/// the controller until a terminal transition, then resolve the outcome.
///
/// If every UI-facing sender is dropped before a terminal event, the
/// session is discarded so the caller still observes exactly one outcome.
pub async fn run(
    mut controller: SessionController,
    mut channels: SessionChannels,
) -> SessionOutcome {
    // This sender belongs to the UI; holding it here would keep the
    // channel open forever.
    drop(channels.events);

    let mut ui_open = true;
    while !controller.is_finished() {
        tokio::select! {
            event = channels.ui_events.recv(), if ui_open => match event {
                Some(event) => controller.update(event),
                None => {
                    debug!("UI event senders dropped; discarding session");
                    ui_open = false;
                    controller.update(SessionEvent::DiscardAll);
                }
            },
            event = channels.completions.recv() => match event {
                // The controller holds the completion sender, so the
                // channel outlives this loop.
                Some(event) => controller.update(event),
                None => break,
            },
        }
    }

    channels.outcome.await.unwrap_or(SessionOutcome::Cancelled)
}
