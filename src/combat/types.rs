use crate::core::constants::COMBAT_LOG_CAPACITY;
use crate::items::DropEntry;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Immutable enemy definition from the zone catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    pub id: String,
    pub name: String,
    pub max_hp: u32,
    pub damage: u32,
    pub xp_reward: u64,
    pub gold_reward: u64,
    pub is_boss: bool,
    /// Hex color used by the front end to tint the enemy.
    pub color: String,
    pub drop_table: Vec<DropEntry>,
}

impl EnemyTemplate {
    /// Creates a fresh combat instance at full HP. The template is untouched.
    pub fn spawn(&self) -> CombatEnemy {
        CombatEnemy {
            template: self.clone(),
            current_hp: self.max_hp,
        }
    }
}

/// A live enemy inside one encounter. Dropped when combat ends.
#[derive(Debug, Clone, PartialEq)]
pub struct CombatEnemy {
    pub template: EnemyTemplate,
    pub current_hp: u32,
}

impl CombatEnemy {
    pub fn name(&self) -> &str {
        &self.template.name
    }

    pub fn max_hp(&self) -> u32 {
        self.template.max_hp
    }

    pub fn damage(&self) -> u32 {
        self.template.damage
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }
}

/// Which combat menu is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Main,
    Item,
    AttackMinigame,
}

/// Why the encounter is about to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Victory,
    RanAway,
}

/// A delayed return to roaming. While one exists, no player action and no
/// enemy turn may run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingExit {
    pub reason: ExitReason,
    pub remaining_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatLogEntry {
    pub message: String,
    pub is_player_action: bool,
}

/// State of the current encounter.
#[derive(Debug, Clone)]
pub struct CombatState {
    pub enemy: CombatEnemy,
    pub menu: MenuState,
    pub is_player_turn: bool,
    /// Session clock value when the current attack wave started.
    pub attack_started_at: Option<f64>,
    /// Time spent waiting on the enemy's turn.
    pub enemy_turn_timer: f64,
    pub pending_exit: Option<PendingExit>,
    pub combat_log: VecDeque<CombatLogEntry>,
}

impl CombatState {
    pub fn new(enemy: CombatEnemy) -> Self {
        Self {
            enemy,
            menu: MenuState::Main,
            is_player_turn: true,
            attack_started_at: None,
            enemy_turn_timer: 0.0,
            pending_exit: None,
            combat_log: VecDeque::with_capacity(COMBAT_LOG_CAPACITY),
        }
    }

    pub fn add_log_entry(&mut self, message: String, is_player_action: bool) {
        if self.combat_log.len() >= COMBAT_LOG_CAPACITY {
            self.combat_log.pop_front();
        }
        self.combat_log.push_back(CombatLogEntry {
            message,
            is_player_action,
        });
    }

    pub fn is_resolving(&self) -> bool {
        self.pending_exit.is_some()
    }

    /// True when the player may pick from `menu`.
    pub fn accepts_input_in(&self, menu: MenuState) -> bool {
        self.is_player_turn && !self.is_resolving() && self.menu == menu
    }

    /// The enemy acts only on its own turn, while alive, with no exit pending.
    pub fn is_enemy_turn_due(&self) -> bool {
        !self.is_player_turn && self.enemy.is_alive() && !self.is_resolving()
    }

    /// Hands the turn to the enemy and resets the menu.
    pub fn end_player_turn(&mut self) {
        self.is_player_turn = false;
        self.menu = MenuState::Main;
        self.attack_started_at = None;
        self.enemy_turn_timer = 0.0;
    }

    pub fn schedule_exit(&mut self, reason: ExitReason, delay_seconds: f64) {
        self.attack_started_at = None;
        self.menu = MenuState::Main;
        self.pending_exit = Some(PendingExit {
            reason,
            remaining_seconds: delay_seconds,
        });
    }
}
