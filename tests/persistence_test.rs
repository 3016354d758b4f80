//! Persistence integration tests
//!
//! Saves and loads through a real `FileStore` in a temp directory, plus the
//! autosave fingerprint that decides when the game writes.

use aura_chronicles::auras::TemplateFlavor;
use aura_chronicles::core::{required_xp, AutosaveTracker, GameSession, PlayerState, SAVE_KEY};
use aura_chronicles::items::catalog::{iron_plate, toy_knife};
use aura_chronicles::persistence::{FileStore, KeyValueStore, SaveManager};
use std::fs;
use tempfile::TempDir;

fn file_manager(dir: &TempDir) -> SaveManager<FileStore> {
    SaveManager::new(FileStore::new(dir.path()).unwrap())
}

// ============================================================================
// File-backed saves
// ============================================================================

#[test]
fn test_progress_survives_restart() {
    let dir = TempDir::new().unwrap();
    let player = PlayerState {
        gold: 320,
        level: 4,
        xp: 12,
        inventory: vec![toy_knife(), iron_plate()],
        equipped_weapon: Some(toy_knife()),
        equipped_armor: Some(iron_plate()),
        ..PlayerState::default()
    };

    file_manager(&dir).save(&player).unwrap();

    // A fresh manager over the same directory sees the same player
    let loaded = file_manager(&dir).load_or_default();
    assert_eq!(loaded, player);
}

#[test]
fn test_snapshot_uses_camel_case_keys() {
    let dir = TempDir::new().unwrap();
    file_manager(&dir).save(&PlayerState::default()).unwrap();

    let text = fs::read_to_string(dir.path().join(format!("{}.json", SAVE_KEY))).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["maxHp"], 100);
    assert_eq!(value["currentZone"], 0);
    assert_eq!(value["dropRateMultiplier"], 1.0);
    assert_eq!(value["inventory"][1]["type"], "HEAL");
}

#[test]
fn test_partial_save_merges_over_defaults() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path()).unwrap();
    store
        .set(SAVE_KEY, r#"{"gold": 999, "name": "Old Save"}"#)
        .unwrap();

    let player = SaveManager::new(store).load_or_default();
    assert_eq!(player.gold, 999);
    assert_eq!(player.name, "Old Save");
    assert_eq!(player.hp, 100);
    assert_eq!(player.inventory.len(), 2);
    assert!(player.auras.is_empty());
}

#[test]
fn test_bad_fields_are_repaired_not_discarded() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path()).unwrap();
    store
        .set(
            SAVE_KEY,
            r#"{"level": 1, "xp": 5000, "hp": 0, "gold": null, "name": "Hoarder"}"#,
        )
        .unwrap();

    let player = SaveManager::new(store).load_or_default();
    assert_eq!(player.name, "Hoarder");
    assert_eq!(player.gold, 0);
    assert!(player.level > 1);
    assert!(player.xp < required_xp(player.level));
    assert_eq!(player.hp, player.max_hp);
}

#[test]
fn test_garbage_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(format!("{}.json", SAVE_KEY)), "\u{0}\u{1}garbage").unwrap();

    let manager = file_manager(&dir);
    assert!(manager.try_load().is_err());
    assert_eq!(manager.load_or_default(), PlayerState::default());
}

#[test]
fn test_reset_removes_file() {
    let dir = TempDir::new().unwrap();
    let mut manager = file_manager(&dir);
    let mut session = GameSession::new(PlayerState::default(), Box::new(TemplateFlavor));
    session.player.gold = 50;
    manager.save(&session.player).unwrap();

    manager.reset_progress(&mut session).unwrap();
    assert!(!dir.path().join(format!("{}.json", SAVE_KEY)).exists());
    assert_eq!(session.player, PlayerState::default());

    // Resetting twice is harmless
    assert!(manager.clear().is_ok());
}

// ============================================================================
// Autosave
// ============================================================================

#[test]
fn test_autosave_ignores_hp_only_changes() {
    let mut player = PlayerState::default();
    let mut tracker = AutosaveTracker::synced_with(&player);
    assert!(!tracker.should_save(&player));

    player.hp = 40;
    assert!(!tracker.should_save(&player));
}

#[test]
fn test_autosave_fires_once_per_change() {
    let mut player = PlayerState::default();
    let mut tracker = AutosaveTracker::synced_with(&player);

    player.gold += 5;
    assert!(tracker.should_save(&player));
    assert!(!tracker.should_save(&player));

    player.equipped_weapon = Some(toy_knife());
    assert!(tracker.should_save(&player));
}
