// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the capture session controller

use std::fmt;

/// Result type alias for preference store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Camera capability errors
#[derive(Debug, Clone)]
pub enum CameraError {
    /// Camera permission denied by the platform
    PermissionDenied,
    /// Camera disconnected during operation
    Disconnected,
    /// Camera is busy or in use by another client
    Busy,
    /// Frame capture failed
    CaptureFailed(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::PermissionDenied => write!(f, "Camera permission denied"),
            CameraError::Disconnected => write!(f, "Camera disconnected"),
            CameraError::Busy => write!(f, "Camera is busy"),
            CameraError::CaptureFailed(msg) => write!(f, "Capture failed: {}", msg),
        }
    }
}

impl std::error::Error for CameraError {}

/// Image transform capability errors
#[derive(Debug, Clone)]
pub enum TransformError {
    /// The source frame could not be read
    SourceUnreadable(String),
    /// The transform itself failed
    Failed(String),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::SourceUnreadable(msg) => write!(f, "Source unreadable: {}", msg),
            TransformError::Failed(msg) => write!(f, "Transform failed: {}", msg),
        }
    }
}

impl std::error::Error for TransformError {}

/// Preference store errors
#[derive(Debug, Clone)]
pub enum StoreError {
    /// No user config directory could be located
    NoConfigDir,
    /// Underlying file I/O failed
    Io(String),
    /// Stored payload could not be encoded or decoded
    Malformed(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NoConfigDir => write!(f, "No user config directory found"),
            StoreError::Io(msg) => write!(f, "I/O error: {}", msg),
            StoreError::Malformed(msg) => write!(f, "Malformed preference data: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Malformed(err.to_string())
    }
}
