// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for preferences and their store codec

use hardcopy::constants::{PREF_AUTO_CAPTURE, PREF_ORIENTATION, PREF_SOUND_ENABLED};
use hardcopy::{MemoryStore, Orientation, Preferences};

#[test]
fn test_preferences_default() {
    let prefs = Preferences::default();

    assert!(!prefs.auto_capture, "Auto-capture should default to off");
    assert_eq!(
        prefs.orientation,
        Orientation::Portrait,
        "Orientation should default to portrait"
    );
    assert!(!prefs.sound_enabled, "Sound should default to off");
}

#[test]
fn test_orientation_codec() {
    assert_eq!(Orientation::Portrait.as_str(), "portrait");
    assert_eq!(Orientation::Landscape.as_str(), "landscape");
    assert_eq!(Orientation::parse("portrait"), Some(Orientation::Portrait));
    assert_eq!(Orientation::parse("landscape"), Some(Orientation::Landscape));
    assert_eq!(Orientation::parse("sideways"), None);
    assert_eq!(Orientation::Portrait.toggled(), Orientation::Landscape);
}

#[tokio::test]
async fn test_load_resumes_stored_values() {
    let store = MemoryStore::with(&[
        (PREF_AUTO_CAPTURE, "true"),
        (PREF_ORIENTATION, "landscape"),
        (PREF_SOUND_ENABLED, "true"),
    ]);

    let prefs = Preferences::load(&store).await;
    assert!(prefs.auto_capture);
    assert_eq!(prefs.orientation, Orientation::Landscape);
    assert!(prefs.sound_enabled);
}

#[tokio::test]
async fn test_load_falls_back_on_absent_or_garbled_values() {
    let store = MemoryStore::with(&[
        (PREF_AUTO_CAPTURE, "yes please"),
        (PREF_ORIENTATION, "diagonal"),
    ]);

    let prefs = Preferences::load(&store).await;
    assert!(!prefs.auto_capture, "Non-\"true\" value must read as off");
    assert_eq!(
        prefs.orientation,
        Orientation::Portrait,
        "Unrecognized orientation must fall back to the default"
    );
    assert!(!prefs.sound_enabled);
}
