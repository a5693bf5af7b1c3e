// SPDX-License-Identifier: GPL-3.0-only

//! Mode and preference handlers
//!
//! Every preference change is written through to the store immediately so
//! the next session starts from the last observed value. A failed write is
//! logged and otherwise ignored; it never blocks the session.

use crate::config::Orientation;
use crate::constants::{PREF_AUTO_CAPTURE, PREF_ORIENTATION, PREF_SOUND_ENABLED};
use crate::session::state::CaptureMode;
use crate::session::SessionController;
use std::sync::Arc;
use tracing::{info, warn};

impl SessionController {
    // =========================================================================
    // Mode & Preference Handlers
    // =========================================================================

    /// Switch accumulation mode. Frames already captured in Batch are
    /// intentionally kept; a later Single-mode confirmation truncates them
    /// (see `CaptureSession::accumulate`).
    pub(crate) fn handle_set_mode(&mut self, mode: CaptureMode) {
        if self.session.mode == mode {
            return;
        }
        info!(mode = mode.display_name(), "Capture mode changed");
        self.session.mode = mode;

        match mode {
            CaptureMode::Single => self.maybe_arm_auto_capture(),
            CaptureMode::Batch => self.auto_capture.cancel(),
        }
    }

    pub(crate) fn handle_set_auto_capture(&mut self, enabled: bool) {
        if self.prefs.auto_capture == enabled {
            return;
        }
        self.prefs.auto_capture = enabled;
        info!(enabled, "Auto-capture preference changed");
        self.persist(PREF_AUTO_CAPTURE, enabled.to_string());

        if enabled {
            self.maybe_arm_auto_capture();
        } else {
            self.auto_capture.cancel();
        }
    }

    pub(crate) fn handle_set_orientation(&mut self, orientation: Orientation) {
        if self.prefs.orientation == orientation {
            return;
        }
        self.prefs.orientation = orientation;
        info!(orientation = orientation.as_str(), "Orientation preference changed");
        self.persist(PREF_ORIENTATION, orientation.as_str().to_string());
    }

    pub(crate) fn handle_set_sound_enabled(&mut self, enabled: bool) {
        if self.prefs.sound_enabled == enabled {
            return;
        }
        self.prefs.sound_enabled = enabled;
        info!(enabled, "Shutter sound preference changed");
        self.persist(PREF_SOUND_ENABLED, enabled.to_string());
    }

    /// Write a preference through to the store, fire-and-forget.
    fn persist(&self, key: &'static str, value: String) {
        let store = Arc::clone(&self.caps.store);
        tokio::spawn(async move {
            if let Err(err) = store.set(key, &value).await {
                warn!(key, error = %err, "Failed to persist preference");
            }
        });
    }
}
