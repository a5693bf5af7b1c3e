// SPDX-License-Identifier: GPL-3.0-only

//! Edit sub-flow handlers
//!
//! Routes editor events to the open [`EditSubflow`] and applies the
//! mode-dependent accumulation rule on confirmation.

use crate::backends::FrameReference;
use crate::editor::{EditSubflow, Enhancement};
use crate::errors::TransformError;
use crate::session::state::{SessionEvent, SessionNotice};
use crate::session::SessionController;
use std::sync::Arc;
use tracing::{debug, info, warn};

impl SessionController {
    // =========================================================================
    // Editing Handlers
    // =========================================================================

    /// Reopen the editor over the retained pending frame ("Modify").
    pub(crate) fn handle_open_editor(&mut self) {
        if self.session.editing {
            debug!("Open editor ignored: already editing");
            return;
        }
        let Some(pending) = self.session.pending_raw.clone() else {
            debug!("Open editor ignored: no pending frame");
            return;
        };
        self.session.editing = true;
        self.editor = Some(EditSubflow::new(pending));
    }

    pub(crate) fn handle_select_enhancement(&mut self, enhancement: Enhancement) {
        let Some(editor) = self.editor.as_mut() else {
            debug!("Enhancement selection ignored: editor closed");
            return;
        };

        if let Some(request) = editor.select(enhancement) {
            let transforms = Arc::clone(&self.caps.transforms);
            let events = self.events.clone();
            tokio::spawn(async move {
                let result = transforms.transform(request.source, request.spec).await;
                let _ = events.send(SessionEvent::TransformFinished {
                    seq: request.seq,
                    result,
                });
            });
        }
    }

    pub(crate) fn handle_transform_finished(
        &mut self,
        seq: u64,
        result: Result<FrameReference, TransformError>,
    ) {
        let Some(editor) = self.editor.as_mut() else {
            debug!(seq, "Transform completion discarded: editor closed");
            return;
        };
        if let Some(err) = editor.resolve(seq, result) {
            warn!(error = %err, "Enhancement failed; previous preview retained");
            self.notice = Some(SessionNotice::EnhancementFailed(err));
        }
    }

    /// Accept the editor preview: replace in Single mode, append in Batch.
    /// The confirmed frame stays as `pending_raw` so the latest thumbnail
    /// remains displayable after accumulation.
    pub(crate) fn handle_confirm_edit(&mut self) {
        if !self.session.editing {
            debug!("Confirm ignored: not editing");
            return;
        }
        let Some(editor) = self.editor.take() else {
            warn!("Confirm ignored: editing flag set without an editor");
            self.session.editing = false;
            return;
        };

        let result = editor.confirm();
        self.session.editing = false;
        self.session.pending_raw = Some(result.clone());
        self.session.accumulate(result);
        info!(
            mode = self.session.mode.display_name(),
            frames = self.session.frames.len(),
            "Edit confirmed"
        );
    }

    /// Close the editor without accumulating. The raw capture stays as
    /// `pending_raw` for display; it is not added to the result set.
    pub(crate) fn handle_cancel_edit(&mut self) {
        if !self.session.editing {
            debug!("Cancel ignored: not editing");
            return;
        }
        self.editor = None;
        self.session.editing = false;
        debug!("Edit cancelled; raw frame kept for preview");
    }
}
