use super::types::*;
use crate::auras::FlavorSource;
use crate::core::constants::*;
use crate::core::error::{GameError, GameResult};
use crate::core::game_state::PlayerState;
use crate::core::progression::{add_xp, xp_after_death, LevelUpReport};
use crate::loot::{roll_victory_loot, LootReport};
use rand::Rng;

/// Something that happened during an encounter. The session turns these
/// into mode changes and notifications.
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    PlayerHit {
        damage: u32,
        accuracy: f64,
    },
    EnemyDefeated {
        xp_gained: u64,
        gold_gained: u64,
        level_up: LevelUpReport,
        loot: LootReport,
    },
    ItemUsed {
        name: String,
        healed: u32,
    },
    RanAway,
    RunFailed,
    EnemyAttack {
        damage: u32,
    },
    /// Player was knocked out and has already respawned.
    PlayerDied {
        xp_lost: u64,
    },
    /// A pending exit finished counting down.
    CombatEnded(ExitReason),
}

/// Where the sliding marker sits `elapsed` seconds into an attack wave.
///
/// Ping-pongs 0 -> 100 -> 0 once per `ATTACK_WAVE_PERIOD_SECONDS`.
pub fn attack_bar_position(elapsed: f64) -> f64 {
    let elapsed = if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 };
    let phase = (elapsed / ATTACK_WAVE_PERIOD_SECONDS).fract();
    if phase < 0.5 {
        phase * 200.0
    } else {
        (1.0 - phase) * 200.0
    }
}

/// 100 at the centre of the bar, 0 at either end, linear in between.
pub fn attack_accuracy(position: f64) -> f64 {
    (100.0 - (50.0 - position).abs() * 2.0).clamp(0.0, 100.0)
}

/// Player hit damage for a given weapon value, level and accuracy.
pub fn attack_damage(weapon_damage: u32, level: u32, accuracy: f64) -> u32 {
    let base = weapon_damage as f64 + level as f64 * DAMAGE_PER_LEVEL as f64;
    (base * accuracy / 100.0).floor().max(0.0) as u32
}

/// Damage an enemy deals through armor. Never below `MIN_ENEMY_DAMAGE`.
pub fn enemy_attack_damage(enemy_damage: u32, armor: u32) -> u32 {
    let mitigated = enemy_damage as f64 - armor as f64 / ARMOR_MITIGATION_DIVISOR;
    mitigated.max(MIN_ENEMY_DAMAGE).floor() as u32
}

/// Spawns a fresh enemy from `template` and opens the encounter.
pub fn start_combat(template: &EnemyTemplate) -> CombatState {
    let mut combat = CombatState::new(template.spawn());
    combat.add_log_entry(format!("You encountered {}!", template.name), false);
    tracing::debug!(enemy = %template.name, boss = template.is_boss, "combat started");
    combat
}

/// Starts (or restarts) the attack wave at session time `now`.
pub fn start_attack(combat: &mut CombatState, now: f64) -> GameResult<()> {
    if !combat.accepts_input_in(MenuState::Main)
        && !combat.accepts_input_in(MenuState::AttackMinigame)
    {
        return Err(GameError::ActionUnavailable("cannot attack right now"));
    }
    combat.menu = MenuState::AttackMinigame;
    combat.attack_started_at = Some(now);
    Ok(())
}

/// Locks in the attack wave at session time `now` and resolves the hit.
///
/// A killing blow resolves the whole victory: XP, gold and loot are applied
/// before this returns and the encounter is left with a pending exit.
pub fn confirm_attack(
    player: &mut PlayerState,
    combat: &mut CombatState,
    now: f64,
    zone_name: &str,
    flavor: &dyn FlavorSource,
    rng: &mut impl Rng,
) -> GameResult<Vec<CombatEvent>> {
    if !combat.accepts_input_in(MenuState::AttackMinigame) {
        return Err(GameError::ActionUnavailable("no attack in progress"));
    }
    let started = combat
        .attack_started_at
        .ok_or(GameError::ActionUnavailable("no attack in progress"))?;

    let position = attack_bar_position(now - started);
    let accuracy = attack_accuracy(position);
    let damage = attack_damage(player.weapon_damage(), player.level, accuracy);

    combat.add_log_entry(format!("You hit for {} damage!", damage), true);
    combat.enemy.take_damage(damage);

    let mut events = vec![CombatEvent::PlayerHit { damage, accuracy }];

    if combat.enemy.is_alive() {
        combat.end_player_turn();
    } else {
        events.push(resolve_victory(player, combat, zone_name, flavor, rng));
    }

    Ok(events)
}

fn resolve_victory(
    player: &mut PlayerState,
    combat: &mut CombatState,
    zone_name: &str,
    flavor: &dyn FlavorSource,
    rng: &mut impl Rng,
) -> CombatEvent {
    let template = combat.enemy.template.clone();
    combat.add_log_entry(format!("Victory! Gained {} XP.", template.xp_reward), false);

    let level_up = add_xp(player, template.xp_reward);
    player.gold = player.gold.saturating_add(template.gold_reward);
    let loot = roll_victory_loot(player, &template, zone_name, flavor, rng);

    combat.schedule_exit(ExitReason::Victory, VICTORY_EXIT_DELAY_SECONDS);
    tracing::debug!(enemy = %template.name, xp = template.xp_reward, gold = template.gold_reward, "victory");

    CombatEvent::EnemyDefeated {
        xp_gained: template.xp_reward,
        gold_gained: template.gold_reward,
        level_up,
        loot,
    }
}

pub fn open_item_menu(combat: &mut CombatState) -> GameResult<()> {
    if !combat.accepts_input_in(MenuState::Main) {
        return Err(GameError::ActionUnavailable("cannot open items right now"));
    }
    combat.menu = MenuState::Item;
    Ok(())
}

pub fn close_item_menu(combat: &mut CombatState) -> GameResult<()> {
    if combat.menu != MenuState::Item {
        return Err(GameError::ActionUnavailable("item menu is not open"));
    }
    combat.menu = MenuState::Main;
    Ok(())
}

/// Consumes the healing item at `inventory_index`. Ends the player's turn.
pub fn use_item(
    player: &mut PlayerState,
    combat: &mut CombatState,
    inventory_index: usize,
) -> GameResult<CombatEvent> {
    if !combat.accepts_input_in(MenuState::Item) {
        return Err(GameError::ActionUnavailable("item menu is not open"));
    }
    let item = player
        .inventory
        .get(inventory_index)
        .ok_or_else(|| GameError::UnknownItem(format!("inventory slot {}", inventory_index)))?;
    if !item.is_heal() {
        return Err(GameError::ActionUnavailable("only healing items can be used in combat"));
    }

    let item = player.inventory.remove(inventory_index);
    let healed = player.heal(item.value);
    combat.add_log_entry(format!("Used {}. Healed {} HP.", item.name, item.value), true);
    combat.end_player_turn();

    Ok(CombatEvent::ItemUsed {
        name: item.name,
        healed,
    })
}

/// Tries to flee. Success schedules a short exit; failure hands the turn over.
pub fn attempt_run(
    player: &PlayerState,
    combat: &mut CombatState,
    rng: &mut impl Rng,
) -> GameResult<CombatEvent> {
    if !combat.accepts_input_in(MenuState::Main) {
        return Err(GameError::ActionUnavailable("cannot run right now"));
    }

    if rng.gen::<f64>() < RUN_ESCAPE_CHANCE {
        combat.add_log_entry(format!("{} ran away...", player.name), true);
        combat.schedule_exit(ExitReason::RanAway, RUN_EXIT_DELAY_SECONDS);
        Ok(CombatEvent::RanAway)
    } else {
        combat.add_log_entry("Couldn't escape!".to_string(), true);
        combat.end_player_turn();
        Ok(CombatEvent::RunFailed)
    }
}

/// Advances encounter timers by `delta_time` seconds.
///
/// Counts down a pending exit, otherwise waits out the enemy's turn delay
/// and lets it act.
pub fn update_combat(
    player: &mut PlayerState,
    combat: &mut CombatState,
    delta_time: f64,
) -> Vec<CombatEvent> {
    let mut events = Vec::new();

    if let Some(exit) = combat.pending_exit.as_mut() {
        exit.remaining_seconds -= delta_time;
        if exit.remaining_seconds <= 0.0 {
            events.push(CombatEvent::CombatEnded(exit.reason));
        }
        return events;
    }

    if !combat.is_enemy_turn_due() {
        return events;
    }

    combat.enemy_turn_timer += delta_time;
    if combat.enemy_turn_timer >= ENEMY_TURN_DELAY_SECONDS {
        events.extend(resolve_enemy_turn(player, combat));
    }

    events
}

/// The enemy strikes once. A knockout respawns the player in place at full
/// HP with the XP penalty applied.
pub fn resolve_enemy_turn(player: &mut PlayerState, combat: &mut CombatState) -> Vec<CombatEvent> {
    let damage = enemy_attack_damage(combat.enemy.damage(), player.armor_value());
    player.take_damage(damage);
    combat.enemy_turn_timer = 0.0;
    combat.add_log_entry(
        format!("{} attacks! Took {} dmg.", combat.enemy.name(), damage),
        false,
    );

    let mut events = vec![CombatEvent::EnemyAttack { damage }];

    if player.is_alive() {
        combat.is_player_turn = true;
    } else {
        let before = player.xp;
        player.hp = player.max_hp;
        player.xp = xp_after_death(player.xp);
        tracing::info!(enemy = %combat.enemy.name(), xp_lost = before - player.xp, "player died");
        events.push(CombatEvent::PlayerDied {
            xp_lost: before - player.xp,
        });
    }

    events
}
