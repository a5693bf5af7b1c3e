// SPDX-License-Identifier: GPL-3.0-only

//! Edit sub-flow
//!
//! One captured frame enters, one confirmed frame (or a cancellation)
//! leaves. The sub-flow manages a live preview over a fixed enhancement
//! catalog. Every selection derives from the *original* raw frame;
//! enhancements are never chained onto a previous preview.

use crate::backends::{EnhancementSpec, FrameReference};
use crate::constants::LIGHTEN_TARGET_WIDTH;
use crate::errors::TransformError;
use tracing::{debug, info};

/// The fixed, ordered enhancement catalog shown in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Enhancement {
    /// Identity; keeps the raw frame (displays as "Original")
    #[default]
    Original,
    /// Black & white via desaturation
    Monochrome,
    /// Resize to a fixed width
    Lighten,
}

impl Enhancement {
    /// All catalog entries in display order.
    pub const ALL: [Enhancement; 3] = [
        Enhancement::Original,
        Enhancement::Monochrome,
        Enhancement::Lighten,
    ];

    /// Label shown on the selector chip.
    pub fn display_name(&self) -> &'static str {
        match self {
            Enhancement::Original => "Original",
            Enhancement::Monochrome => "B&W",
            Enhancement::Lighten => "Lighten",
        }
    }

    /// The transform-capability spec for this enhancement.
    pub fn spec(&self) -> EnhancementSpec {
        match self {
            Enhancement::Original => EnhancementSpec::Identity,
            Enhancement::Monochrome => EnhancementSpec::Desaturate,
            Enhancement::Lighten => EnhancementSpec::ResizeToWidth(LIGHTEN_TARGET_WIDTH),
        }
    }
}

/// A transform the controller should dispatch to the image transform
/// capability. The sequence number identifies the completion; anything
/// arriving with an older number is stale and must be dropped.
#[derive(Debug, Clone)]
pub struct TransformRequest {
    pub seq: u64,
    pub source: FrameReference,
    pub spec: EnhancementSpec,
}

/// Live editing state over one raw capture.
#[derive(Debug)]
pub struct EditSubflow {
    original: FrameReference,
    selected: Enhancement,
    preview: FrameReference,
    busy: bool,
    request_seq: u64,
}

impl EditSubflow {
    /// Open the sub-flow over a raw capture. The preview starts as the
    /// original with the identity enhancement selected.
    pub fn new(original: FrameReference) -> Self {
        Self {
            preview: original.clone(),
            original,
            selected: Enhancement::default(),
            busy: false,
            request_seq: 0,
        }
    }

    pub fn original(&self) -> &FrameReference {
        &self.original
    }

    pub fn selected(&self) -> Enhancement {
        self.selected
    }

    /// The reference currently shown in the preview.
    pub fn preview(&self) -> &FrameReference {
        &self.preview
    }

    /// Whether a transform is outstanding for the current selection.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Select an enhancement. Returns the transform request to dispatch,
    /// or `None` when the selection resolves locally (identity).
    ///
    /// Bumping the sequence here is what invalidates any still-in-flight
    /// transform: last selection wins.
    pub fn select(&mut self, enhancement: Enhancement) -> Option<TransformRequest> {
        self.selected = enhancement;
        self.request_seq += 1;

        match enhancement.spec() {
            EnhancementSpec::Identity => {
                self.preview = self.original.clone();
                self.busy = false;
                None
            }
            spec => {
                self.busy = true;
                info!(enhancement = enhancement.display_name(), seq = self.request_seq, "Deriving preview");
                Some(TransformRequest {
                    seq: self.request_seq,
                    source: self.original.clone(),
                    spec,
                })
            }
        }
    }

    /// Apply a transform completion. Returns the error when the *current*
    /// request failed (so the session can surface a notice); stale
    /// completions and successes return `None`.
    ///
    /// On failure the previous preview is retained and the enhancement
    /// stays selectable for retry.
    pub fn resolve(
        &mut self,
        seq: u64,
        result: Result<FrameReference, TransformError>,
    ) -> Option<TransformError> {
        if seq != self.request_seq {
            debug!(seq, current = self.request_seq, "Stale transform completion discarded");
            return None;
        }
        self.busy = false;
        match result {
            Ok(frame) => {
                debug!(frame = %frame, "Preview updated");
                self.preview = frame;
                None
            }
            Err(err) => Some(err),
        }
    }

    /// Confirm the edit, yielding the current preview reference.
    pub fn confirm(self) -> FrameReference {
        self.preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(uri: &str) -> FrameReference {
        FrameReference::new(uri)
    }

    #[test]
    fn catalog_is_ordered_with_identity_first() {
        assert_eq!(Enhancement::ALL[0], Enhancement::Original);
        assert_eq!(Enhancement::Original.spec(), EnhancementSpec::Identity);
        assert_eq!(Enhancement::ALL.map(|e| e.display_name()), [
            "Original", "B&W", "Lighten"
        ]);
    }

    #[test]
    fn identity_selection_resolves_locally() {
        let mut editor = EditSubflow::new(frame("raw"));
        assert!(editor.select(Enhancement::Original).is_none());
        assert!(!editor.is_busy());
        assert_eq!(editor.preview(), &frame("raw"));
    }

    #[test]
    fn async_selection_issues_request_from_original() {
        let mut editor = EditSubflow::new(frame("raw"));
        let request = editor.select(Enhancement::Monochrome).expect("request");
        assert_eq!(request.source, frame("raw"));
        assert_eq!(request.spec, EnhancementSpec::Desaturate);
        assert!(editor.is_busy());

        // Re-selecting still derives from the original, never the preview.
        editor.resolve(request.seq, Ok(frame("raw#bw")));
        let again = editor.select(Enhancement::Lighten).expect("request");
        assert_eq!(again.source, frame("raw"));
    }

    #[test]
    fn stale_completion_does_not_overwrite_preview() {
        let mut editor = EditSubflow::new(frame("raw"));
        let stale = editor.select(Enhancement::Monochrome).expect("request");
        // User flips back to Original before the transform resolves.
        assert!(editor.select(Enhancement::Original).is_none());
        assert!(editor.resolve(stale.seq, Ok(frame("raw#bw"))).is_none());
        assert_eq!(editor.preview(), &frame("raw"));
        assert!(!editor.is_busy());
    }

    #[test]
    fn failed_transform_keeps_previous_preview_and_allows_retry() {
        let mut editor = EditSubflow::new(frame("raw"));
        let request = editor.select(Enhancement::Monochrome).expect("request");
        let err = editor.resolve(request.seq, Err(TransformError::Failed("boom".into())));
        assert!(err.is_some());
        assert!(!editor.is_busy());
        assert_eq!(editor.preview(), &frame("raw"));

        let retry = editor.select(Enhancement::Monochrome).expect("request");
        assert!(retry.seq > request.seq);
        editor.resolve(retry.seq, Ok(frame("raw#bw")));
        assert_eq!(editor.confirm(), frame("raw#bw"));
    }
}
