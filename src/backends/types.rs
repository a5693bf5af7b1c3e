// SPDX-License-Identifier: GPL-3.0-only

//! Shared types for the external capability seams

use crate::config::Orientation;
use std::fmt;
use std::sync::Arc;

/// Opaque handle to a captured (and possibly transformed) image.
///
/// The controller never inspects the contents behind a reference; only
/// identity and capture order matter. The URI scheme is owned by the camera
/// and transform capabilities that mint these.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameReference(Arc<str>);

impl FrameReference {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(Arc::from(uri.into()))
    }

    /// The backing URI, for display or for handing to a capability.
    pub fn uri(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FrameReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Flash operating mode for photo capture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlashMode {
    /// Flash is off
    #[default]
    Off,
    /// Flash fires during capture
    On,
}

impl FlashMode {
    /// Toggle to the other mode: Off -> On -> Off
    pub fn toggled(self) -> Self {
        match self {
            FlashMode::Off => FlashMode::On,
            FlashMode::On => FlashMode::Off,
        }
    }
}

/// Per-shot parameters forwarded to the camera capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureRequest {
    pub flash: FlashMode,
    pub orientation: Orientation,
}

/// The closed set of enhancements the image transform capability accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnhancementSpec {
    /// No-op; the source reference is returned unchanged
    Identity,
    /// Drop saturation to zero (black & white)
    Desaturate,
    /// Resize to the given width, preserving aspect ratio
    ResizeToWidth(u32),
}
