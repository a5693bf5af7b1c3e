// SPDX-License-Identifier: GPL-3.0-only

//! Session lifecycle handlers
//!
//! Camera readiness, completion, exit gating, and discard. Completion and
//! discard are the only terminal transitions; both funnel through
//! `finish`, which delivers the outcome exactly once.

use crate::session::state::{SessionNotice, SessionOutcome};
use crate::session::SessionController;
use tracing::{debug, info, warn};

impl SessionController {
    // =========================================================================
    // Lifecycle Handlers
    // =========================================================================

    /// The camera signalled readiness. Idempotent.
    pub(crate) fn handle_camera_ready(&mut self) {
        if self.session.camera_ready {
            return;
        }
        self.session.camera_ready = true;
        if matches!(self.notice, Some(SessionNotice::PermissionRequired)) {
            self.notice = None;
        }
        info!("Camera ready");
        self.maybe_arm_auto_capture();
    }

    pub(crate) fn handle_camera_lost(&mut self) {
        if !self.session.camera_ready {
            return;
        }
        self.session.camera_ready = false;
        self.auto_capture.cancel();
        warn!("Camera lost");
    }

    /// Permission permanently denied: the session can never reach
    /// readiness. Surfaced as a persistent, non-dismissible notice.
    pub(crate) fn handle_permission_denied(&mut self) {
        self.session.camera_ready = false;
        self.auto_capture.cancel();
        self.notice = Some(SessionNotice::PermissionRequired);
        warn!("Camera permission denied");
    }

    /// Hand the confirmed frames to the caller: the accumulated set when
    /// non-empty, otherwise the pending capture alone. With neither this
    /// is a defended no-op.
    pub(crate) fn handle_complete(&mut self) {
        let frames = if !self.session.frames.is_empty() {
            self.session.frames.clone()
        } else if let Some(pending) = &self.session.pending_raw {
            vec![pending.clone()]
        } else {
            warn!("Complete ignored: nothing captured");
            return;
        };

        info!(frames = frames.len(), "Session completed");
        self.finish(SessionOutcome::Completed(frames));
    }

    /// The user wants to leave. With captured work present the exit is
    /// gated behind a discard confirmation; with none the session cancels
    /// immediately.
    pub(crate) fn handle_request_exit(&mut self) {
        if self.session.has_captured_work() {
            self.exit_prompt = true;
            info!("Exit requested with captured work; awaiting discard confirmation");
        } else {
            self.handle_discard_all();
        }
    }

    pub(crate) fn handle_confirm_discard(&mut self) {
        self.exit_prompt = false;
        self.handle_discard_all();
    }

    pub(crate) fn handle_dismiss_exit_prompt(&mut self) {
        self.exit_prompt = false;
        debug!("Exit prompt dismissed");
    }

    pub(crate) fn handle_dismiss_notice(&mut self) {
        match &self.notice {
            Some(notice) if notice.is_blocking() => {}
            _ => self.notice = None,
        }
    }

    /// Clear all captured state and cancel the session.
    pub(crate) fn handle_discard_all(&mut self) {
        self.session.clear();
        self.editor = None;
        info!("Session discarded");
        self.finish(SessionOutcome::Cancelled);
    }

    /// Terminal transition: cancel the timer, mark finished, deliver the
    /// outcome. The `finished` guard in `update` makes a second delivery
    /// impossible.
    fn finish(&mut self, outcome: SessionOutcome) {
        self.auto_capture.cancel();
        self.finished = true;
        if let Some(handoff) = self.handoff.take() {
            let _ = handoff.send(outcome);
        }
    }
}
