use super::hex_to_color;
use crate::input::UiState;
use aura_chronicles::combat::{attack_accuracy, CombatState, MenuState};
use aura_chronicles::core::GameSession;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Draws the encounter: enemy, attack bar or menu, and the combat log.
pub fn draw_combat_scene(frame: &mut Frame, area: Rect, session: &GameSession, ui: &UiState) {
    let Some(combat) = session.combat.as_ref() else {
        return;
    };

    let combat_block = Block::default()
        .borders(Borders::ALL)
        .title("Combat Arena");
    let inner = combat_block.inner(area);
    frame.render_widget(combat_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Enemy HP bar
            Constraint::Length(3), // Enemy sprite
            Constraint::Length(5), // Menu / attack bar
            Constraint::Min(3),    // Log
        ])
        .split(inner);

    draw_enemy_hp(frame, chunks[0], combat);
    draw_enemy_sprite(frame, chunks[1], combat);

    match combat.menu {
        MenuState::AttackMinigame => {
            let position = session.snapshot().attack_bar_position.unwrap_or(0.0);
            draw_attack_bar(frame, chunks[2], position);
        }
        MenuState::Item => draw_item_menu(frame, chunks[2], session, ui),
        MenuState::Main => draw_main_menu(frame, chunks[2], combat),
    }

    draw_combat_log(frame, chunks[3], combat);
}

fn draw_enemy_hp(frame: &mut Frame, area: Rect, combat: &CombatState) {
    let enemy = &combat.enemy;
    let hp_ratio = if enemy.max_hp() > 0 {
        enemy.current_hp as f64 / enemy.max_hp() as f64
    } else {
        0.0
    };
    let title = if enemy.template.is_boss { "BOSS" } else { "Enemy" };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .gauge_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .label(format!("{}: {}/{}", enemy.name(), enemy.current_hp, enemy.max_hp()))
        .ratio(hp_ratio.clamp(0.0, 1.0));

    frame.render_widget(gauge, area);
}

fn draw_enemy_sprite(frame: &mut Frame, area: Rect, combat: &CombatState) {
    let sprite = if combat.enemy.template.is_boss { "(ÒДÓ)" } else { "(•_•)" };
    let color = hex_to_color(&combat.enemy.template.color);
    let status = if combat.is_resolving() {
        "..."
    } else if combat.is_player_turn {
        "Your turn"
    } else {
        "Enemy turn"
    };

    let text = vec![
        Line::from(Span::styled(
            sprite,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(status, Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_main_menu(frame: &mut Frame, area: Rect, combat: &CombatState) {
    let enabled = combat.accepts_input_in(MenuState::Main);
    let style = if enabled {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("[A] FIGHT", style),
            Span::raw("    "),
            Span::styled("[I] ITEM", style),
            Span::raw("    "),
            Span::styled("[R] RUN", style),
        ]),
    ];
    let menu = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(menu, area);
}

/// Draws the sliding marker. The target zone is the middle of the bar.
fn draw_attack_bar(frame: &mut Frame, area: Rect, position: f64) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Press SPACE in the middle!");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width.max(1) as usize;
    let marker = ((position / 100.0) * (width.saturating_sub(1)) as f64).round() as usize;
    let center = width / 2;
    let bar: String = (0..width)
        .map(|i| {
            if i == marker {
                '█'
            } else if i.abs_diff(center) <= width / 10 {
                '▒'
            } else {
                '─'
            }
        })
        .collect();

    let text = vec![
        Line::from(Span::styled(bar, Style::default().fg(Color::Yellow))),
        Line::from(Span::styled(
            format!("Accuracy: {:.0}%", attack_accuracy(position)),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(text), inner);
}

fn draw_item_menu(frame: &mut Frame, area: Rect, session: &GameSession, ui: &UiState) {
    let heals = session.player.heal_items();
    let lines: Vec<Line> = if heals.is_empty() {
        vec![Line::from(Span::styled(
            "No healing items.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        heals
            .iter()
            .enumerate()
            .map(|(row, (_, item))| {
                let selected = row == ui.cursor;
                let style = if selected {
                    Style::default().fg(Color::Black).bg(Color::Green)
                } else {
                    Style::default().fg(Color::Green)
                };
                Line::from(Span::styled(
                    format!("{} {} (+{} HP)", if selected { ">" } else { " " }, item.name, item.value),
                    style,
                ))
            })
            .collect()
    };

    let menu = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Items"));
    frame.render_widget(menu, area);
}

fn draw_combat_log(frame: &mut Frame, area: Rect, combat: &CombatState) {
    let visible = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = combat
        .combat_log
        .iter()
        .rev()
        .take(visible)
        .rev()
        .map(|entry| {
            let color = if entry.is_player_action {
                Color::White
            } else {
                Color::LightRed
            };
            Line::from(Span::styled(entry.message.clone(), Style::default().fg(color)))
        })
        .collect();

    let log = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Log"))
        .wrap(Wrap { trim: true });
    frame.render_widget(log, area);
}
