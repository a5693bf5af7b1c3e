// SPDX-License-Identifier: GPL-3.0-only

//! User preferences
//!
//! Three device-scoped preferences alter session behavior: auto-capture,
//! camera orientation, and the shutter sound. They are loaded once when a
//! session starts and written through to the [`PreferenceStore`] on every
//! change, so the next session resumes with the last observed values.

use crate::constants::{PREF_AUTO_CAPTURE, PREF_ORIENTATION, PREF_SOUND_ENABLED};
use crate::storage::PreferenceStore;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Camera orientation preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// String encoding used by the preference store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }

    /// Decode a stored value. Anything unrecognized is rejected so a
    /// corrupted store degrades to the built-in default.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "portrait" => Some(Orientation::Portrait),
            "landscape" => Some(Orientation::Landscape),
            _ => None,
        }
    }

    /// The other orientation, for toggle-style UI.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Portrait => Orientation::Landscape,
            Orientation::Landscape => Orientation::Portrait,
        }
    }
}

/// User preferences in effect for a capture session.
///
/// Absent or unreadable stored values fall back to these defaults:
/// auto-capture off, portrait orientation, sound off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub auto_capture: bool,
    pub orientation: Orientation,
    pub sound_enabled: bool,
}

impl Preferences {
    /// Load preferences from the store, falling back to defaults per field.
    ///
    /// A read failure is not fatal; it degrades the experience (wrong
    /// default next time) but never blocks the session.
    pub async fn load(store: &dyn PreferenceStore) -> Self {
        let mut prefs = Self::default();

        match store.get(PREF_AUTO_CAPTURE).await {
            Ok(Some(value)) => prefs.auto_capture = value == "true",
            Ok(None) => {}
            Err(err) => {
                warn!(key = PREF_AUTO_CAPTURE, error = %err, "Preference read failed; using default");
            }
        }

        match store.get(PREF_ORIENTATION).await {
            Ok(Some(value)) => {
                if let Some(orientation) = Orientation::parse(&value) {
                    prefs.orientation = orientation;
                } else {
                    warn!(value = %value, "Unrecognized orientation preference; using default");
                }
            }
            Ok(None) => {}
            Err(err) => {
                warn!(key = PREF_ORIENTATION, error = %err, "Preference read failed; using default");
            }
        }

        match store.get(PREF_SOUND_ENABLED).await {
            Ok(Some(value)) => prefs.sound_enabled = value == "true",
            Ok(None) => {}
            Err(err) => {
                warn!(key = PREF_SOUND_ENABLED, error = %err, "Preference read failed; using default");
            }
        }

        prefs
    }
}
