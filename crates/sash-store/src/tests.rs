//! Tests for state loading, atomic writing, and registry round-trips.

use super::*;

use sash_common::{Rect, WindowKey};
use sash_placement::{FrameWindow, PlacementMemory, PlacementOptions, ShowState};

fn rect(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn memory_with_saved_main() -> PlacementMemory {
    let mut memory = PlacementMemory::new();
    memory.enable("main", PlacementOptions::default());
    let window = FrameWindow::new(rect(20.0, 10.0, 800.0, 600.0));
    memory
        .save_on_close(&WindowKey::from("main"), &window)
        .unwrap();
    memory
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.toml");

    let memory = memory_with_saved_main();
    let state = PersistedState::snapshot(&memory);
    save_to_path(&state, &path).unwrap();

    let loaded = load_from_path(&path).unwrap();
    assert_eq!(loaded.version, STATE_VERSION);
    let record = &loaded.placements[&WindowKey::from("main")];
    assert_eq!(record.location.x, 20.0);
    assert_eq!(record.size.height, 600.0);
    assert!(record.save_location);
}

#[test]
fn loaded_state_restores_through_the_registry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.toml");

    save_to_path(&PersistedState::snapshot(&memory_with_saved_main()), &path).unwrap();

    // "Next launch": rebuild the registry from disk and reopen the window.
    let mut memory = load_or_default(&path).into_memory();
    assert!(!memory.dirty());
    memory.enable("main", PlacementOptions::default());

    let screens = sash_placement::StaticScreens::single(rect(0.0, 0.0, 1920.0, 1080.0));
    let mut window = FrameWindow::new(rect(0.0, 0.0, 640.0, 480.0));
    memory
        .restore_on_open(&WindowKey::from("main"), &mut window, &screens)
        .unwrap();
    assert_eq!(window.frame, rect(20.0, 10.0, 800.0, 600.0));
}

#[test]
fn missing_file_loads_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.toml");

    let state = load_or_default(&path);
    assert_eq!(state.version, STATE_VERSION);
    assert!(state.placements.is_empty());

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, sash_common::StoreError::FileNotFound(_)));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, sash_common::StoreError::ParseError(_)));

    // Corrupt state never blocks startup.
    let state = load_or_default(&path);
    assert!(state.placements.is_empty());
}

#[test]
fn partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.toml");
    std::fs::write(
        &path,
        r#"
[placements.main]
show_state = "maximized"
save_location = true
"#,
    )
    .unwrap();

    let state = load_from_path(&path).unwrap();
    assert_eq!(state.version, STATE_VERSION);
    let record = &state.placements[&WindowKey::from("main")];
    assert_eq!(record.show_state, ShowState::Maximized);
    assert!(record.save_location);
    assert!(!record.save_size);
    assert!(record.location.is_origin());
}

#[test]
fn save_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deep").join("state.toml");

    save_to_path(&PersistedState::default(), &path).unwrap();
    assert!(path.exists());
}

#[test]
fn save_cleans_up_tmp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.toml");

    save_to_path(&PersistedState::snapshot(&memory_with_saved_main()), &path).unwrap();

    let tmp_path = path.with_extension("toml.tmp");
    assert!(
        !tmp_path.exists(),
        "tmp file should be cleaned up after rename"
    );
}

#[test]
fn default_state_path_is_reasonable() {
    // This may not work in all CI environments, but should work locally
    if let Ok(path) = default_state_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("sash"));
        assert!(path_str.ends_with("state.toml"));
    }
}
