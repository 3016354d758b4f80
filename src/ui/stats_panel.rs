use aura_chronicles::combat::MenuState;
use aura_chronicles::core::{required_xp, GameMode, GameSession};
use aura_chronicles::zones::{total_aura_power, unique_aura_count};
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the top bar: name, level, HP, XP, gold and zone.
pub fn draw_hud(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    last_saved: Option<DateTime<Local>>,
) {
    let block = Block::default().borders(Borders::ALL).title("Character");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name / gold / zone
            Constraint::Length(1), // HP
            Constraint::Length(1), // XP
        ])
        .split(inner);

    let player = &session.player;
    let zone_name = session.current_zone().map(|z| z.name).unwrap_or("?");
    let saved = last_saved
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    let header = Line::from(vec![
        Span::styled(
            format!("{} Lv.{}", player.name, player.level),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(format!("{} G", player.gold), Style::default().fg(Color::Yellow)),
        Span::raw(" | "),
        Span::styled(zone_name.to_string(), Style::default().fg(Color::Green)),
        Span::raw(" | "),
        Span::styled(
            format!(
                "Auras: {} ({} unique, {:.0} power)",
                player.auras.len(),
                unique_aura_count(&player.auras),
                total_aura_power(&player.auras)
            ),
            Style::default().fg(Color::Magenta),
        ),
        Span::raw(" | "),
        Span::styled(format!("Saved: {}", saved), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(header).alignment(Alignment::Center), rows[0]);

    let hp_ratio = if player.max_hp > 0 {
        (player.hp as f64 / player.max_hp as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let hp_color = if hp_ratio > 0.66 {
        Color::Green
    } else if hp_ratio > 0.33 {
        Color::Yellow
    } else {
        Color::Red
    };
    let hp = Gauge::default()
        .gauge_style(Style::default().fg(hp_color).add_modifier(Modifier::BOLD))
        .label(format!("HP {}/{}", player.hp, player.max_hp))
        .ratio(hp_ratio);
    frame.render_widget(hp, rows[1]);

    let needed = required_xp(player.level);
    let xp_ratio = if needed > 0 {
        (player.xp as f64 / needed as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let xp = Gauge::default()
        .gauge_style(Style::default().fg(Color::Blue))
        .label(format!("XP {}/{}", player.xp, needed))
        .ratio(xp_ratio);
    frame.render_widget(xp, rows[2]);
}

/// Draws the key hints for the current screen.
pub fn draw_footer(frame: &mut Frame, area: Rect, session: &GameSession) {
    let hints = match session.mode {
        GameMode::Roaming => {
            "[H] Hunt  [I] Inventory  [S] Shop  [G] Gamepass  [</>] Zone  [W] Save  [R] Reset  [Q] Quit"
        }
        GameMode::Combat => match session.combat.as_ref().map(|c| c.menu) {
            Some(MenuState::AttackMinigame) => "[Space] Strike!",
            Some(MenuState::Item) => "[Up/Down] Select  [Enter] Use  [Esc] Back",
            _ => "[A] Attack  [I] Items  [R] Run",
        },
        GameMode::Inventory => "[Up/Down] Select  [Enter] Equip  [Esc] Close",
        GameMode::Shop => "[Up/Down] Select  [Enter] Buy  [Esc] Close",
        GameMode::Gamepass => "[Enter] Activate  [Esc] Close",
    };

    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::White),
    )))
    .block(Block::default().borders(Borders::ALL).title("Controls"))
    .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
