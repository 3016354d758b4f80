use super::store::KeyValueStore;
use crate::core::constants::SAVE_KEY;
use crate::core::error::{GameError, GameResult};
use crate::core::game_state::PlayerState;
use crate::core::session::GameSession;
use crate::zones::get_all_zones;
use serde_json::Value;

/// Parses a saved snapshot and lays it over the default player.
///
/// Only top-level keys that the default state knows are taken from the
/// save; anything else is ignored, and anything missing keeps its default.
/// A known key whose value does not fit its field also keeps its default,
/// so one bad field never costs the rest of the save. The merged state is
/// then sanitized against `zone_count`.
pub fn parse_snapshot(text: &str, zone_count: usize) -> GameResult<PlayerState> {
    let saved: Value =
        serde_json::from_str(text).map_err(|e| GameError::PersistenceCorrupt(e.to_string()))?;
    let Value::Object(saved) = saved else {
        return Err(GameError::PersistenceCorrupt(
            "snapshot is not a JSON object".to_string(),
        ));
    };

    let mut merged = match serde_json::to_value(PlayerState::default()) {
        Ok(Value::Object(base)) => base,
        Ok(_) => {
            return Err(GameError::PersistenceCorrupt(
                "default state is not a JSON object".to_string(),
            ))
        }
        Err(e) => return Err(GameError::PersistenceCorrupt(e.to_string())),
    };

    for (key, value) in saved {
        if !merged.contains_key(&key) {
            continue;
        }
        let mut candidate = merged.clone();
        candidate.insert(key.clone(), value);
        match serde_json::from_value::<PlayerState>(Value::Object(candidate.clone())) {
            Ok(_) => merged = candidate,
            Err(err) => tracing::warn!(field = %key, error = %err, "dropping unreadable save field"),
        }
    }

    let mut player: PlayerState = serde_json::from_value(Value::Object(merged))
        .map_err(|e| GameError::PersistenceCorrupt(e.to_string()))?;
    if player.sanitize(zone_count) {
        tracing::warn!("save data was out of range and has been repaired");
    }
    Ok(player)
}

/// Reads and writes the player snapshot under a single store key.
pub struct SaveManager<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SaveManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: SAVE_KEY.to_string(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save(&mut self, player: &PlayerState) -> GameResult<()> {
        let json = serde_json::to_string(player)
            .map_err(|e| GameError::Storage(e.to_string()))?;
        self.store.set(&self.key, &json)?;
        tracing::debug!(level = player.level, gold = player.gold, "game saved");
        Ok(())
    }

    /// `Ok(None)` when nothing has been saved yet.
    pub fn try_load(&self) -> GameResult<Option<PlayerState>> {
        match self.store.get(&self.key)? {
            Some(text) => parse_snapshot(&text, get_all_zones().len()).map(Some),
            None => Ok(None),
        }
    }

    /// Loads the saved player, or a fresh one. Unreadable saves are logged
    /// and replaced by defaults.
    pub fn load_or_default(&self) -> PlayerState {
        match self.try_load() {
            Ok(Some(player)) => {
                tracing::info!(level = player.level, zone = player.current_zone, "save loaded");
                player
            }
            Ok(None) => PlayerState::default(),
            Err(err) => {
                tracing::warn!(error = %err, "could not load save, starting fresh");
                PlayerState::default()
            }
        }
    }

    /// Explicit save from the front end. Confirms with a notification.
    pub fn manual_save(&mut self, session: &mut GameSession) -> GameResult<()> {
        self.save(&session.player)?;
        tracing::info!("manual save");
        session.notify("Game Saved Successfully!");
        Ok(())
    }

    /// Deletes the stored snapshot and restarts the session from defaults.
    pub fn reset_progress(&mut self, session: &mut GameSession) -> GameResult<()> {
        self.store.remove(&self.key)?;
        session.reset();
        Ok(())
    }

    pub fn clear(&mut self) -> GameResult<()> {
        self.store.remove(&self.key)
    }
}
