// SPDX-License-Identifier: GPL-3.0-only

//! Crate-wide constants

use std::time::Duration;

/// Delay before an armed auto-capture timer fires.
pub const AUTO_CAPTURE_DELAY: Duration = Duration::from_secs(3);

/// Preference store key for the auto-capture toggle ("true"/"false").
pub const PREF_AUTO_CAPTURE: &str = "autoCapture";

/// Preference store key for the camera orientation ("portrait"/"landscape").
pub const PREF_ORIENTATION: &str = "orientation";

/// Preference store key for the shutter sound toggle ("true"/"false").
pub const PREF_SOUND_ENABLED: &str = "soundEnabled";

/// Target width for the "Lighten" enhancement (resize-to-width).
pub const LIGHTEN_TARGET_WIDTH: u32 = 1000;

/// Directory under the user config dir that holds persisted preferences.
pub const CONFIG_DIR_NAME: &str = "hardcopy";

/// File name of the persisted preference map.
pub const PREFERENCES_FILE: &str = "preferences.json";
