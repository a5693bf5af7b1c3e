// SPDX-License-Identifier: GPL-3.0-only

//! Capture handlers
//!
//! Manual capture, capture completion, the auto-capture timer, and flash.

use crate::backends::{CaptureRequest, FrameReference};
use crate::constants::AUTO_CAPTURE_DELAY;
use crate::editor::EditSubflow;
use crate::errors::CameraError;
use crate::session::state::{AutoCaptureTimer, CaptureMode, CaptureState, SessionEvent, SessionNotice};
use crate::session::SessionController;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

impl SessionController {
    // =========================================================================
    // Capture Handlers
    // =========================================================================

    /// Request a frame from the camera.
    ///
    /// Inert (not an error) when the camera is not ready, the editor is
    /// open, or a capture is already in flight.
    pub(crate) fn handle_capture(&mut self) {
        if !self.session.camera_ready {
            debug!("Capture ignored: camera not ready");
            return;
        }
        if self.session.editing {
            debug!("Capture ignored: editor open");
            return;
        }
        if self.capture.is_in_flight() {
            warn!("Capture ignored: capture already in flight");
            return;
        }

        self.capture_seq += 1;
        let seq = self.capture_seq;
        self.capture = CaptureState::InFlight { seq };

        let request = CaptureRequest {
            flash: self.session.flash,
            orientation: self.prefs.orientation,
        };
        info!(seq, flash = ?request.flash, orientation = ?request.orientation, "Capturing frame");

        let camera = Arc::clone(&self.caps.camera);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = camera.capture(request).await;
            let _ = events.send(SessionEvent::CaptureFinished { seq, result });
        });
    }

    /// A camera call finished; open the editor over the new frame.
    pub(crate) fn handle_capture_finished(
        &mut self,
        seq: u64,
        result: Result<FrameReference, CameraError>,
    ) {
        if !self.capture.matches(seq) {
            debug!(seq, "Stale capture completion discarded");
            return;
        }
        self.capture = CaptureState::Idle;

        match result {
            Ok(frame) => {
                info!(frame = %frame, "Frame captured");
                if self.prefs.sound_enabled {
                    let sound = Arc::clone(&self.caps.sound);
                    tokio::spawn(async move {
                        sound.play().await;
                    });
                }
                self.session.pending_raw = Some(frame.clone());
                self.session.editing = true;
                self.editor = Some(EditSubflow::new(frame));
            }
            Err(err) => {
                warn!(error = %err, "Capture failed");
                self.notice = Some(SessionNotice::CaptureFailed(err));
            }
        }
    }

    /// The auto-capture timer elapsed. The capture preconditions are
    /// re-checked here, so a timer that fires while the editor is open (or
    /// mid-capture) is inert.
    ///
    /// A fire can race a cancellation: the elapsed event is already queued
    /// when the mode switches or the camera goes away. Cancellation resets
    /// the armed state synchronously, so the guard below drops such fires.
    pub(crate) fn handle_auto_capture_elapsed(&mut self) {
        if !self.auto_capture.is_armed() {
            debug!("Auto-capture fire ignored: timer no longer armed");
            return;
        }
        self.auto_capture.mark_fired();
        debug!("Auto-capture timer elapsed");
        self.handle_capture();
    }

    pub(crate) fn handle_toggle_flash(&mut self) {
        self.session.flash = self.session.flash.toggled();
        info!(flash = ?self.session.flash, "Flash toggled");
    }

    /// Arm the auto-capture timer when the session just transitioned into
    /// an eligible state: auto-capture on, camera ready, Single mode.
    ///
    /// Auto-capture is a single-shot convenience; Batch stays manual.
    pub(crate) fn maybe_arm_auto_capture(&mut self) {
        if self.auto_capture.is_armed() {
            return;
        }
        if !self.prefs.auto_capture
            || !self.session.camera_ready
            || self.session.mode != CaptureMode::Single
        {
            return;
        }

        let (cancel_tx, cancel_rx) = oneshot::channel();
        let events = self.events.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(AUTO_CAPTURE_DELAY) => {
                    let _ = events.send(SessionEvent::AutoCaptureElapsed);
                }
                _ = cancel_rx => {}
            }
        });

        self.auto_capture = AutoCaptureTimer::armed(cancel_tx);
        info!(delay = ?AUTO_CAPTURE_DELAY, "Auto-capture timer armed");
    }
}
