// SPDX-License-Identifier: GPL-3.0-only

//! External capability seams
//!
//! The session controller never talks to a camera, an image pipeline, a
//! speaker, or a preference file directly. Each of those is an external
//! capability behind a trait, injected at session start.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │  Screens / UI layer  │  ← sends SessionEvent
//! └──────────┬───────────┘
//!            │
//!            ▼
//! ┌──────────────────────┐
//! │  SessionController   │  ← owns the session state machine
//! └──────────┬───────────┘
//!            │
//!            ▼
//! ┌──────────────────────┐
//! │  Capability traits   │  ← CameraCapability, ImageTransform,
//! └──────────┬───────────┘    ShutterSound, PreferenceStore
//!            │
//!            ▼
//!   platform integrations
//! ```
//!
//! Camera readiness is event-shaped rather than trait-shaped: the platform
//! integration observes its readiness signal and feeds
//! `SessionEvent::CameraReady` / `CameraLost` / `PermissionDenied` into the
//! controller.

pub mod types;

pub use types::{CaptureRequest, EnhancementSpec, FlashMode, FrameReference};

use crate::errors::{CameraError, TransformError};
use crate::storage::PreferenceStore;
use async_trait::async_trait;
use std::sync::Arc;

/// Camera capability: produce one frame per request.
///
/// Implementations must be safe to call from a spawned task; the controller
/// guarantees at most one capture call is outstanding at a time.
#[async_trait]
pub trait CameraCapability: Send + Sync {
    /// Capture a single frame with the given per-shot parameters.
    async fn capture(&self, request: CaptureRequest) -> Result<FrameReference, CameraError>;
}

/// Image transform capability: derive a new reference by applying a named
/// enhancement to a source frame. The source is never modified.
#[async_trait]
pub trait ImageTransform: Send + Sync {
    async fn transform(
        &self,
        source: FrameReference,
        spec: EnhancementSpec,
    ) -> Result<FrameReference, TransformError>;
}

/// Shutter sound playback. Fire-and-forget; failures are the
/// implementation's problem to log.
#[async_trait]
pub trait ShutterSound: Send + Sync {
    async fn play(&self);
}

/// The full set of capabilities a capture session runs against.
#[derive(Clone)]
pub struct Capabilities {
    pub camera: Arc<dyn CameraCapability>,
    pub transforms: Arc<dyn ImageTransform>,
    pub sound: Arc<dyn ShutterSound>,
    pub store: Arc<dyn PreferenceStore>,
}
