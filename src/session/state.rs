// SPDX-License-Identifier: GPL-3.0-only

//! Session state types

use crate::backends::{FlashMode, FrameReference};
use crate::config::Orientation;
use crate::editor::Enhancement;
use crate::errors::{CameraError, TransformError};
use tokio::sync::oneshot;
use tracing::debug;

/// Frame accumulation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureMode {
    /// At most one frame in the result; each confirmation replaces it
    #[default]
    Single,
    /// Confirmations append; the result holds every confirmed frame
    Batch,
}

impl CaptureMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            CaptureMode::Single => "Single",
            CaptureMode::Batch => "Batch",
        }
    }
}

/// The central mutable session entity.
///
/// Invariants maintained by the controller:
/// - `editing` implies `pending_raw` is present
/// - in Single mode `frames` never holds more than one element
/// - `clear` resets frames, pending raw, and editing together
#[derive(Debug, Default)]
pub struct CaptureSession {
    pub mode: CaptureMode,
    /// Frames confirmed through the edit sub-flow, in capture order.
    pub frames: Vec<FrameReference>,
    /// Most recent capture, kept for thumbnail display even after
    /// confirmation; replaced by the next capture, cleared by discard.
    pub pending_raw: Option<FrameReference>,
    /// Whether the edit sub-flow is active over `pending_raw`.
    pub editing: bool,
    pub camera_ready: bool,
    pub flash: FlashMode,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the mode-dependent accumulation rule for a confirmed edit.
    ///
    /// Switching from Batch to Single does not retroactively truncate;
    /// the truncation happens here, on the next confirmation.
    pub fn accumulate(&mut self, frame: FrameReference) {
        match self.mode {
            CaptureMode::Single => {
                self.frames.clear();
                self.frames.push(frame);
            }
            CaptureMode::Batch => self.frames.push(frame),
        }
    }

    /// Whether leaving now would lose captured work.
    pub fn has_captured_work(&self) -> bool {
        !self.frames.is_empty() || self.pending_raw.is_some()
    }

    /// Reset frames, pending raw, and editing in one step.
    pub fn clear(&mut self) {
        self.frames.clear();
        self.pending_raw = None;
        self.editing = false;
    }
}

/// In-flight capture guard
///
/// At most one camera call is outstanding; the sequence number lets the
/// controller discard completions that no longer match.
#[derive(Debug, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    InFlight {
        seq: u64,
    },
}

impl CaptureState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, CaptureState::InFlight { .. })
    }

    /// Whether a completion with this sequence number is the current one.
    pub fn matches(&self, completed: u64) -> bool {
        match self {
            CaptureState::Idle => false,
            CaptureState::InFlight { seq } => *seq == completed,
        }
    }
}

/// Auto-capture timer state machine
///
/// Armed holds the cancel side of the timer task; dropping or firing it
/// guarantees the sleeping task exits without sending.
#[derive(Debug, Default)]
pub enum AutoCaptureTimer {
    #[default]
    Idle,
    Armed {
        cancel: Option<oneshot::Sender<()>>,
    },
}

impl AutoCaptureTimer {
    pub fn armed(cancel: oneshot::Sender<()>) -> Self {
        AutoCaptureTimer::Armed {
            cancel: Some(cancel),
        }
    }

    pub fn is_armed(&self) -> bool {
        matches!(self, AutoCaptureTimer::Armed { .. })
    }

    /// Cancel the pending timer, if any. Idempotent.
    pub fn cancel(&mut self) {
        if let AutoCaptureTimer::Armed { cancel } = self {
            if let Some(tx) = cancel.take() {
                let _ = tx.send(());
                debug!("Auto-capture timer cancelled");
            }
        }
        *self = AutoCaptureTimer::Idle;
    }

    /// The timer task fired; back to idle until the next arming transition.
    pub fn mark_fired(&mut self) {
        *self = AutoCaptureTimer::Idle;
    }
}

/// Non-fatal (and one blocking) conditions surfaced to the user.
#[derive(Debug, Clone)]
pub enum SessionNotice {
    /// A capture attempt failed; the session remains usable
    CaptureFailed(CameraError),
    /// An enhancement derivation failed; the previous preview is retained
    EnhancementFailed(TransformError),
    /// Camera permission permanently denied; capture can never start.
    /// Persistent: not dismissible, cleared only by camera readiness.
    PermissionRequired,
}

impl SessionNotice {
    /// Blocking notices survive dismissal.
    pub fn is_blocking(&self) -> bool {
        matches!(self, SessionNotice::PermissionRequired)
    }
}

impl std::fmt::Display for SessionNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionNotice::CaptureFailed(err) => write!(f, "Could not capture: {}", err),
            SessionNotice::EnhancementFailed(err) => {
                write!(f, "Could not apply enhancement: {}", err)
            }
            SessionNotice::PermissionRequired => {
                write!(f, "Camera permission is required.")
            }
        }
    }
}

/// Terminal result of a session, delivered exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The confirmed frame set, in capture order; never empty
    Completed(Vec<FrameReference>),
    /// The session was discarded; no frames leave the session
    Cancelled,
}

/// Events driving the session controller.
///
/// The UI layer and platform integration send these; async completions
/// (`CaptureFinished`, `TransformFinished`, `AutoCaptureElapsed`) loop back
/// through the controller's internal channel.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    // ===== Camera readiness =====
    /// The camera signalled readiness. Idempotent.
    CameraReady,
    /// The camera went away (disconnect, backgrounding).
    CameraLost,
    /// Camera permission permanently denied; blocks the session.
    PermissionDenied,

    // ===== Capture =====
    /// User-directed capture request.
    Capture,
    /// A camera call finished.
    CaptureFinished {
        seq: u64,
        result: Result<FrameReference, CameraError>,
    },
    /// The auto-capture timer elapsed.
    AutoCaptureElapsed,
    /// Flip the flash mode for subsequent shots.
    ToggleFlash,

    // ===== Mode & preferences =====
    /// Switch between Single and Batch accumulation.
    SetMode(CaptureMode),
    SetAutoCapture(bool),
    SetOrientation(Orientation),
    SetSoundEnabled(bool),

    // ===== Editing =====
    /// Reopen the editor over the retained pending frame.
    OpenEditor,
    /// Pick an enhancement in the open editor.
    SelectEnhancement(Enhancement),
    /// An image transform finished.
    TransformFinished {
        seq: u64,
        result: Result<FrameReference, TransformError>,
    },
    /// Accept the editor preview into the session.
    ConfirmEdit,
    /// Close the editor without accumulating.
    CancelEdit,

    // ===== Completion & teardown =====
    /// Hand the confirmed frames to the caller. Terminal.
    Complete,
    /// User wants to leave; prompts when captured work would be lost.
    RequestExit,
    /// User confirmed the discard prompt.
    ConfirmDiscard,
    /// User backed out of the discard prompt.
    DismissExitPrompt,
    /// Clear the current notice (blocking notices stay).
    DismissNotice,
    /// Drop all captured state and cancel the session. Terminal.
    DiscardAll,
}
