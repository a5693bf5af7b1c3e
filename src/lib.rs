// SPDX-License-Identifier: GPL-3.0-only

//! Hardcopy - a capture session controller for document scanning workflows
//!
//! This library implements the orchestration core of a mobile
//! document/photo capture screen: camera readiness, manual and
//! timer-directed capture, single-vs-batch accumulation, an edit sub-flow
//! with a fixed enhancement catalog, persisted user preferences, and a
//! discard path that never leaks partially-captured state to the caller.
//!
//! Rendering, navigation, and the raw camera / image-manipulation
//! primitives are external: the controller consumes them through the
//! capability traits in [`backends`] and emits exactly one terminal
//! [`SessionOutcome`] per session.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`session`]: the capture session controller and its state machine
//! - [`editor`]: the edit sub-flow over one captured frame
//! - [`backends`]: external capability seams (camera, transforms, sound)
//! - [`config`]: user preferences and their string codec
//! - [`storage`]: preference persistence (file-backed and in-memory)
//!
//! # Example
//!
//! ```ignore
//! let caps = Capabilities { camera, transforms, sound, store };
//! let (controller, channels) = SessionController::start(caps).await;
//! let events = channels.events.clone();
//! let outcome = tokio::spawn(session::run(controller, channels));
//!
//! events.send(SessionEvent::CameraReady)?;
//! events.send(SessionEvent::Capture)?;
//! // ... confirm the edit, then:
//! events.send(SessionEvent::Complete)?;
//! ```

pub mod backends;
pub mod config;
pub mod constants;
pub mod editor;
pub mod errors;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use backends::{
    Capabilities, CameraCapability, CaptureRequest, EnhancementSpec, FlashMode, FrameReference,
    ImageTransform, ShutterSound,
};
pub use config::{Orientation, Preferences};
pub use editor::{EditSubflow, Enhancement};
pub use errors::{CameraError, StoreError, TransformError};
pub use session::{
    CaptureMode, CaptureSession, SessionChannels, SessionController, SessionEvent, SessionNotice,
    SessionOutcome,
};
pub use storage::{JsonFileStore, MemoryStore, PreferenceStore};
