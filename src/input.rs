//! Input handling for the game screen.
//!
//! Keys are dispatched by the session's mode and, in combat, by the combat
//! menu. Errors from the session are expected (a key pressed at the wrong
//! time) and are dropped here after a debug log.

use aura_chronicles::combat::MenuState;
use aura_chronicles::core::{GameMode, GameResult, GameSession};
use aura_chronicles::items::catalog::shop_items;
use aura_chronicles::zones::Direction;
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

/// Front-end state that is not part of the game itself.
#[derive(Debug, Default)]
pub struct UiState {
    /// Highlighted row in whichever list is showing.
    pub cursor: usize,
    /// The "really reset?" prompt is open.
    pub confirming_reset: bool,
}

impl UiState {
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}

/// What the main loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
    ManualSave,
    ResetProgress,
}

/// Main dispatcher for game-screen input.
pub fn handle_game_input(
    key: KeyEvent,
    session: &mut GameSession,
    ui: &mut UiState,
    rng: &mut impl Rng,
) -> InputResult {
    if ui.confirming_reset {
        ui.confirming_reset = false;
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => InputResult::ResetProgress,
            _ => InputResult::Continue,
        };
    }

    let result = match session.mode {
        GameMode::Roaming => return handle_roaming(key, session, ui, rng),
        GameMode::Combat => handle_combat(key, session, ui, rng),
        GameMode::Inventory => handle_inventory(key, session, ui),
        GameMode::Shop => handle_shop(key, session, ui),
        GameMode::Gamepass => handle_gamepass(key, session),
    };

    if let Err(err) = result {
        tracing::debug!(error = %err, mode = ?session.mode, "input ignored");
    }
    InputResult::Continue
}

fn handle_roaming(
    key: KeyEvent,
    session: &mut GameSession,
    ui: &mut UiState,
    rng: &mut impl Rng,
) -> InputResult {
    ui.cursor = 0;
    let result = match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return InputResult::Quit,
        KeyCode::Char('w') | KeyCode::Char('W') => return InputResult::ManualSave,
        KeyCode::Char('r') | KeyCode::Char('R') => {
            ui.confirming_reset = true;
            return InputResult::Continue;
        }
        KeyCode::Enter | KeyCode::Char('h') | KeyCode::Char('H') => session.hunt(rng),
        KeyCode::Char('i') | KeyCode::Char('I') => session.open_inventory(),
        KeyCode::Char('s') | KeyCode::Char('S') => session.open_shop(),
        KeyCode::Char('g') | KeyCode::Char('G') => session.open_gamepass(),
        KeyCode::Right | KeyCode::Char(']') => session.try_change_zone(Direction::Next).map(drop),
        KeyCode::Left | KeyCode::Char('[') => session.try_change_zone(Direction::Prev).map(drop),
        _ => Ok(()),
    };
    if let Err(err) = result {
        tracing::debug!(error = %err, "roaming input ignored");
    }
    InputResult::Continue
}

fn handle_combat(
    key: KeyEvent,
    session: &mut GameSession,
    ui: &mut UiState,
    rng: &mut impl Rng,
) -> GameResult<()> {
    let Some(menu) = session.combat.as_ref().map(|c| c.menu) else {
        return Ok(());
    };

    match menu {
        MenuState::Main => match key.code {
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Enter => session.start_attack(),
            KeyCode::Char('i') | KeyCode::Char('I') => {
                ui.cursor = 0;
                session.open_item_menu()
            }
            KeyCode::Char('r') | KeyCode::Char('R') => session.attempt_run(rng).map(drop),
            _ => Ok(()),
        },
        MenuState::AttackMinigame => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => session.confirm_attack(rng).map(drop),
            _ => Ok(()),
        },
        MenuState::Item => {
            let heal_slots: Vec<usize> = session
                .player
                .heal_items()
                .into_iter()
                .map(|(slot, _)| slot)
                .collect();
            ui.clamp(heal_slots.len());
            match key.code {
                KeyCode::Esc | KeyCode::Backspace => session.close_item_menu(),
                KeyCode::Up => {
                    ui.move_up();
                    Ok(())
                }
                KeyCode::Down => {
                    ui.move_down(heal_slots.len());
                    Ok(())
                }
                KeyCode::Enter => match heal_slots.get(ui.cursor) {
                    Some(&slot) => session.use_item(slot).map(drop),
                    None => Ok(()),
                },
                _ => Ok(()),
            }
        }
    }
}

fn handle_inventory(key: KeyEvent, session: &mut GameSession, ui: &mut UiState) -> GameResult<()> {
    let len = session.player.inventory.len();
    ui.clamp(len);
    match key.code {
        KeyCode::Esc | KeyCode::Char('i') | KeyCode::Char('I') => session.close_menu(),
        KeyCode::Up => {
            ui.move_up();
            Ok(())
        }
        KeyCode::Down => {
            ui.move_down(len);
            Ok(())
        }
        KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('E') => session.equip(ui.cursor),
        _ => Ok(()),
    }
}

fn handle_shop(key: KeyEvent, session: &mut GameSession, ui: &mut UiState) -> GameResult<()> {
    let stock = shop_items();
    ui.clamp(stock.len());
    match key.code {
        KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('S') => session.close_menu(),
        KeyCode::Up => {
            ui.move_up();
            Ok(())
        }
        KeyCode::Down => {
            ui.move_down(stock.len());
            Ok(())
        }
        KeyCode::Enter | KeyCode::Char('b') | KeyCode::Char('B') => match stock.get(ui.cursor) {
            Some(item) => session.buy(&item.id),
            None => Ok(()),
        },
        _ => Ok(()),
    }
}

fn handle_gamepass(key: KeyEvent, session: &mut GameSession) -> GameResult<()> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('g') | KeyCode::Char('G') => session.close_menu(),
        KeyCode::Enter => session.activate_loot_pass(),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_chronicles::auras::TemplateFlavor;
    use aura_chronicles::core::PlayerState;
    use crossterm::event::KeyModifiers;
    use rand::rngs::mock::StepRng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn session() -> GameSession {
        GameSession::new(PlayerState::default(), Box::new(TemplateFlavor))
    }

    #[test]
    fn test_quit_and_save_keys() {
        let mut s = session();
        let mut ui = UiState::default();
        let mut rng = StepRng::new(u64::MAX, 0);
        assert_eq!(
            handle_game_input(key(KeyCode::Char('q')), &mut s, &mut ui, &mut rng),
            InputResult::Quit
        );
        assert_eq!(
            handle_game_input(key(KeyCode::Char('w')), &mut s, &mut ui, &mut rng),
            InputResult::ManualSave
        );
    }

    #[test]
    fn test_reset_needs_confirmation() {
        let mut s = session();
        let mut ui = UiState::default();
        let mut rng = StepRng::new(u64::MAX, 0);

        handle_game_input(key(KeyCode::Char('r')), &mut s, &mut ui, &mut rng);
        assert!(ui.confirming_reset);
        assert_eq!(
            handle_game_input(key(KeyCode::Char('n')), &mut s, &mut ui, &mut rng),
            InputResult::Continue
        );
        assert!(!ui.confirming_reset);

        handle_game_input(key(KeyCode::Char('r')), &mut s, &mut ui, &mut rng);
        assert_eq!(
            handle_game_input(key(KeyCode::Char('y')), &mut s, &mut ui, &mut rng),
            InputResult::ResetProgress
        );
    }

    #[test]
    fn test_hunt_then_attack_keys() {
        let mut s = session();
        let mut ui = UiState::default();
        let mut rng = StepRng::new(u64::MAX, 0);

        handle_game_input(key(KeyCode::Char('h')), &mut s, &mut ui, &mut rng);
        assert_eq!(s.mode, GameMode::Combat);

        handle_game_input(key(KeyCode::Char('a')), &mut s, &mut ui, &mut rng);
        assert_eq!(
            s.combat.as_ref().map(|c| c.menu),
            Some(MenuState::AttackMinigame)
        );
    }

    #[test]
    fn test_shop_cursor_buys_selected_item() {
        let mut s = session();
        s.player.gold = 1_000;
        let mut ui = UiState::default();
        let mut rng = StepRng::new(u64::MAX, 0);

        handle_game_input(key(KeyCode::Char('s')), &mut s, &mut ui, &mut rng);
        assert_eq!(s.mode, GameMode::Shop);
        handle_game_input(key(KeyCode::Enter), &mut s, &mut ui, &mut rng);

        let first = &shop_items()[0];
        assert_eq!(s.player.gold, 1_000 - first.price);
        assert_eq!(s.player.inventory.last().map(|i| i.id.as_str()), Some(first.id.as_str()));
    }

    #[test]
    fn test_cursor_bounds() {
        let mut ui = UiState::default();
        ui.move_up();
        assert_eq!(ui.cursor, 0);
        ui.move_down(2);
        ui.move_down(2);
        assert_eq!(ui.cursor, 1);
    }
}
