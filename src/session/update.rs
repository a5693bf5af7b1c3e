// SPDX-License-Identifier: GPL-3.0-only

//! Event dispatch
//!
//! [`SessionController::update`] routes every event to a focused handler
//! method; the handlers live in the `handlers` submodules organized by
//! functional domain.

use crate::session::state::SessionEvent;
use crate::session::SessionController;
use tracing::debug;

impl SessionController {
    /// Main event handler. All session mutation funnels through here.
    ///
    /// After a terminal transition every event is dropped; this is what
    /// keeps late timer fires and stale async completions from acting on a
    /// dead session and what makes the handoff exactly-once.
    pub fn update(&mut self, event: SessionEvent) {
        if self.finished {
            debug!(?event, "Event dropped: session already finished");
            return;
        }

        match event {
            // ===== Camera readiness =====
            SessionEvent::CameraReady => self.handle_camera_ready(),
            SessionEvent::CameraLost => self.handle_camera_lost(),
            SessionEvent::PermissionDenied => self.handle_permission_denied(),

            // ===== Capture =====
            SessionEvent::Capture => self.handle_capture(),
            SessionEvent::CaptureFinished { seq, result } => {
                self.handle_capture_finished(seq, result)
            }
            SessionEvent::AutoCaptureElapsed => self.handle_auto_capture_elapsed(),
            SessionEvent::ToggleFlash => self.handle_toggle_flash(),

            // ===== Mode & preferences =====
            SessionEvent::SetMode(mode) => self.handle_set_mode(mode),
            SessionEvent::SetAutoCapture(enabled) => self.handle_set_auto_capture(enabled),
            SessionEvent::SetOrientation(orientation) => self.handle_set_orientation(orientation),
            SessionEvent::SetSoundEnabled(enabled) => self.handle_set_sound_enabled(enabled),

            // ===== Editing =====
            SessionEvent::OpenEditor => self.handle_open_editor(),
            SessionEvent::SelectEnhancement(enhancement) => {
                self.handle_select_enhancement(enhancement)
            }
            SessionEvent::TransformFinished { seq, result } => {
                self.handle_transform_finished(seq, result)
            }
            SessionEvent::ConfirmEdit => self.handle_confirm_edit(),
            SessionEvent::CancelEdit => self.handle_cancel_edit(),

            // ===== Completion & teardown =====
            SessionEvent::Complete => self.handle_complete(),
            SessionEvent::RequestExit => self.handle_request_exit(),
            SessionEvent::ConfirmDiscard => self.handle_confirm_discard(),
            SessionEvent::DismissExitPrompt => self.handle_dismiss_exit_prompt(),
            SessionEvent::DismissNotice => self.handle_dismiss_notice(),
            SessionEvent::DiscardAll => self.handle_discard_all(),
        }
    }
}
