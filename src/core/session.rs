//! The running game: player state, current screen, encounter and timers.
//!
//! Everything the front end does goes through `GameSession`. Time only
//! moves when `tick` is called, so every delay in the game (enemy turns,
//! exit pauses, notification lifetimes) is deterministic under test.

use super::constants::*;
use super::error::{GameError, GameResult};
use super::game_state::{GameMode, PlayerState};
use super::progression::add_item;
use crate::auras::FlavorSource;
use crate::combat::logic::{self, CombatEvent};
use crate::combat::types::{CombatEnemy, CombatState};
use crate::items::catalog::shop_items;
use crate::items::ItemCategory;
use crate::zones::{get_all_zones, try_enter, Direction, Zone};
use rand::Rng;
use std::collections::VecDeque;

/// A short-lived message shown over the game.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub remaining_seconds: f64,
}

/// Read-only view of what the scene should draw.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSnapshot {
    pub mode: GameMode,
    pub enemy: Option<CombatEnemy>,
    pub environment_color: &'static str,
    /// Marker position (0..=100) while an attack wave is running.
    pub attack_bar_position: Option<f64>,
}

/// The parts of player state whose change should trigger an autosave.
/// HP is left out on purpose so combat damage alone does not write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressFingerprint {
    xp: u64,
    gold: u64,
    level: u32,
    current_zone: usize,
    inventory: Vec<String>,
    auras: Vec<String>,
    equipped_weapon: Option<String>,
    equipped_armor: Option<String>,
}

impl ProgressFingerprint {
    pub fn of(player: &PlayerState) -> Self {
        Self {
            xp: player.xp,
            gold: player.gold,
            level: player.level,
            current_zone: player.current_zone,
            inventory: player.inventory.iter().map(|i| i.id.clone()).collect(),
            auras: player.auras.iter().map(|a| a.id.clone()).collect(),
            equipped_weapon: player.equipped_weapon.as_ref().map(|i| i.id.clone()),
            equipped_armor: player.equipped_armor.as_ref().map(|i| i.id.clone()),
        }
    }
}

/// Remembers the last saved fingerprint and says when a new save is due.
#[derive(Debug, Default)]
pub struct AutosaveTracker {
    last: Option<ProgressFingerprint>,
}

impl AutosaveTracker {
    /// Starts out in sync with `player`, so loading a save does not rewrite it.
    pub fn synced_with(player: &PlayerState) -> Self {
        Self {
            last: Some(ProgressFingerprint::of(player)),
        }
    }

    /// True (once) whenever tracked progress differs from the last save.
    pub fn should_save(&mut self, player: &PlayerState) -> bool {
        let current = ProgressFingerprint::of(player);
        if self.last.as_ref() == Some(&current) {
            return false;
        }
        self.last = Some(current);
        true
    }
}

pub struct GameSession {
    pub player: PlayerState,
    pub mode: GameMode,
    pub combat: Option<CombatState>,
    clock: f64,
    notifications: VecDeque<Notification>,
    flavor: Box<dyn FlavorSource>,
    zones: Vec<Zone>,
}

impl GameSession {
    pub fn new(player: PlayerState, flavor: Box<dyn FlavorSource>) -> Self {
        Self::with_zones(player, flavor, get_all_zones())
    }

    pub fn with_zones(mut player: PlayerState, flavor: Box<dyn FlavorSource>, zones: Vec<Zone>) -> Self {
        player.sanitize(zones.len());
        Self {
            player,
            mode: GameMode::Roaming,
            combat: None,
            clock: 0.0,
            notifications: VecDeque::new(),
            flavor,
            zones,
        }
    }

    /// Seconds elapsed since the session started.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn current_zone(&self) -> Option<&Zone> {
        self.zones.get(self.player.current_zone)
    }

    fn current_zone_name(&self) -> &'static str {
        self.current_zone().map(|z| z.name).unwrap_or_default()
    }

    // --- Notifications ---

    pub fn notify(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "notification");
        self.notifications.push_back(Notification {
            message,
            remaining_seconds: NOTIFICATION_SECONDS,
        });
    }

    /// Live notifications, oldest first.
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    pub fn latest_notification(&self) -> Option<&str> {
        self.notifications.back().map(|n| n.message.as_str())
    }

    // --- Time ---

    /// Advances the session clock and every timer by `delta_time` seconds.
    pub fn tick(&mut self, delta_time: f64) -> Vec<CombatEvent> {
        let delta_time = delta_time.max(0.0);
        self.clock += delta_time;

        for notification in self.notifications.iter_mut() {
            notification.remaining_seconds -= delta_time;
        }
        self.notifications.retain(|n| n.remaining_seconds > 0.0);

        let events = match self.combat.as_mut() {
            Some(combat) => logic::update_combat(&mut self.player, combat, delta_time),
            None => Vec::new(),
        };
        self.apply_combat_events(&events);
        events
    }

    // --- Roaming ---

    fn require_mode(&self, mode: GameMode, what: &'static str) -> GameResult<()> {
        if self.mode == mode {
            Ok(())
        } else {
            Err(GameError::ActionUnavailable(what))
        }
    }

    /// Starts an encounter with a random enemy of the current zone, or
    /// rarely with the zone boss.
    pub fn hunt(&mut self, rng: &mut impl Rng) -> GameResult<()> {
        self.require_mode(GameMode::Roaming, "can only hunt while roaming")?;
        let zone = self
            .current_zone()
            .ok_or(GameError::ActionUnavailable("no zone to hunt in"))?;

        let pick = (rng.gen::<f64>() * zone.enemies.len() as f64) as usize;
        let regular = zone.enemies.get(pick.min(zone.enemies.len().saturating_sub(1)));
        let template = match regular {
            Some(enemy) if rng.gen::<f64>() >= BOSS_ENCOUNTER_CHANCE => enemy,
            _ => &zone.boss,
        };

        let combat = logic::start_combat(template);
        self.combat = Some(combat);
        self.mode = GameMode::Combat;
        Ok(())
    }

    pub fn open_inventory(&mut self) -> GameResult<()> {
        self.open_menu(GameMode::Inventory)
    }

    pub fn open_shop(&mut self) -> GameResult<()> {
        self.open_menu(GameMode::Shop)
    }

    pub fn open_gamepass(&mut self) -> GameResult<()> {
        self.open_menu(GameMode::Gamepass)
    }

    fn open_menu(&mut self, mode: GameMode) -> GameResult<()> {
        self.require_mode(GameMode::Roaming, "menus open only while roaming")?;
        self.mode = mode;
        Ok(())
    }

    /// Closes the inventory, shop or gamepass screen.
    pub fn close_menu(&mut self) -> GameResult<()> {
        match self.mode {
            GameMode::Inventory | GameMode::Shop | GameMode::Gamepass => {
                self.mode = GameMode::Roaming;
                Ok(())
            }
            GameMode::Roaming | GameMode::Combat => {
                Err(GameError::ActionUnavailable("no menu is open"))
            }
        }
    }

    /// Equips a copy of the inventory item at `index`. The inventory itself
    /// is not touched.
    pub fn equip(&mut self, index: usize) -> GameResult<()> {
        self.require_mode(GameMode::Inventory, "equip from the inventory screen")?;
        let item = self
            .player
            .inventory
            .get(index)
            .cloned()
            .ok_or_else(|| GameError::UnknownItem(format!("inventory slot {}", index)))?;

        match item.category {
            ItemCategory::Weapon => self.player.equipped_weapon = Some(item),
            ItemCategory::Armor => self.player.equipped_armor = Some(item),
            ItemCategory::Heal => {
                return Err(GameError::ActionUnavailable("healing items cannot be equipped"))
            }
        }
        Ok(())
    }

    /// Buys one shop item. Gold and capacity are both checked before
    /// anything changes.
    pub fn buy(&mut self, item_id: &str) -> GameResult<()> {
        self.require_mode(GameMode::Shop, "the shop is not open")?;
        let item = shop_items()
            .into_iter()
            .find(|i| i.id == item_id)
            .ok_or_else(|| GameError::UnknownItem(item_id.to_string()))?;

        let result = if self.player.gold < item.price {
            Err(GameError::InsufficientGold {
                needed: item.price,
                current: self.player.gold,
            })
        } else if self.player.inventory_is_full() {
            Err(GameError::CapacityExceeded {
                capacity: MAX_INVENTORY_SLOTS,
            })
        } else {
            self.player.gold -= item.price;
            add_item(&mut self.player, item)
        };

        match &result {
            Ok(()) => self.notify("Purchased!"),
            Err(GameError::InsufficientGold { .. }) => self.notify("Not enough Gold!"),
            Err(err) => self.notify(err.to_string()),
        }
        result
    }

    /// The "2x Loot Chance" pass. Doubles item drop chances from now on.
    pub fn activate_loot_pass(&mut self) -> GameResult<()> {
        self.require_mode(GameMode::Gamepass, "the gamepass store is not open")?;
        self.player.drop_rate_multiplier = LOOT_PASS_MULTIPLIER;
        tracing::info!(multiplier = LOOT_PASS_MULTIPLIER, "loot pass activated");
        self.notify("2x Loot Chance activated!");
        Ok(())
    }

    /// Walks one zone along the chain. Denials are shown as notifications.
    pub fn try_change_zone(&mut self, direction: Direction) -> GameResult<usize> {
        self.require_mode(GameMode::Roaming, "can only travel while roaming")?;
        match try_enter(&mut self.player, &self.zones, direction) {
            Ok(index) => {
                let name = self.zones[index].name;
                self.notify(format!("Entered {}", name));
                Ok(index)
            }
            Err(denial) => {
                self.notify(denial.to_string());
                Err(denial.into())
            }
        }
    }

    // --- Combat ---

    fn combat_mut(&mut self) -> GameResult<&mut CombatState> {
        self.combat
            .as_mut()
            .ok_or(GameError::ActionUnavailable("not in combat"))
    }

    pub fn start_attack(&mut self) -> GameResult<()> {
        let now = self.clock;
        logic::start_attack(self.combat_mut()?, now)
    }

    pub fn confirm_attack(&mut self, rng: &mut impl Rng) -> GameResult<Vec<CombatEvent>> {
        let zone_name = self.current_zone_name();
        let combat = self
            .combat
            .as_mut()
            .ok_or(GameError::ActionUnavailable("not in combat"))?;
        let events = logic::confirm_attack(
            &mut self.player,
            combat,
            self.clock,
            zone_name,
            self.flavor.as_ref(),
            rng,
        )?;
        self.apply_combat_events(&events);
        Ok(events)
    }

    pub fn open_item_menu(&mut self) -> GameResult<()> {
        logic::open_item_menu(self.combat_mut()?)
    }

    pub fn close_item_menu(&mut self) -> GameResult<()> {
        logic::close_item_menu(self.combat_mut()?)
    }

    pub fn use_item(&mut self, inventory_index: usize) -> GameResult<CombatEvent> {
        let combat = self
            .combat
            .as_mut()
            .ok_or(GameError::ActionUnavailable("not in combat"))?;
        logic::use_item(&mut self.player, combat, inventory_index)
    }

    pub fn attempt_run(&mut self, rng: &mut impl Rng) -> GameResult<CombatEvent> {
        let combat = self
            .combat
            .as_mut()
            .ok_or(GameError::ActionUnavailable("not in combat"))?;
        logic::attempt_run(&self.player, combat, rng)
    }

    fn end_combat(&mut self) {
        self.combat = None;
        self.mode = GameMode::Roaming;
    }

    fn apply_combat_events(&mut self, events: &[CombatEvent]) {
        for event in events {
            match event {
                CombatEvent::EnemyDefeated { level_up, loot, .. } => {
                    if level_up.leveled_up() {
                        self.notify(format!("Level Up! You are now level {}", level_up.new_level));
                    }
                    for item in loot.items.iter().chain(&loot.discarded) {
                        self.notify(format!("Dropped: {}", item.name));
                    }
                    if !loot.discarded.is_empty() {
                        self.notify(
                            GameError::CapacityExceeded {
                                capacity: MAX_INVENTORY_SLOTS,
                            }
                            .to_string(),
                        );
                    }
                    if let Some(aura) = &loot.aura {
                        self.notify(format!("AURA OBTAINED: {} ({})", aura.name, aura.rarity));
                    }
                }
                CombatEvent::PlayerDied { .. } => {
                    self.end_combat();
                    self.notify("You died! Lost some XP.");
                }
                CombatEvent::CombatEnded(_) => self.end_combat(),
                _ => {}
            }
        }
    }

    // --- Views ---

    pub fn snapshot(&self) -> SceneSnapshot {
        let attack_bar_position = self
            .combat
            .as_ref()
            .and_then(|c| c.attack_started_at)
            .map(|started| logic::attack_bar_position(self.clock - started));

        SceneSnapshot {
            mode: self.mode,
            enemy: self.combat.as_ref().map(|c| c.enemy.clone()),
            environment_color: self
                .current_zone()
                .map(|z| z.environment_color)
                .unwrap_or_default(),
            attack_bar_position,
        }
    }

    /// Throws away all progress and starts over on the roaming screen.
    /// Removing the stored save is the caller's job.
    pub fn reset(&mut self) {
        self.player = PlayerState::default();
        self.combat = None;
        self.mode = GameMode::Roaming;
        self.notifications.clear();
        tracing::info!("progress reset");
        self.notify("Save Data Reset.");
    }
}
