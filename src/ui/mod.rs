mod combat_scene;
mod menus;
mod stats_panel;
mod zones;

use crate::input::UiState;
use aura_chronicles::core::{GameMode, GameSession};
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Main UI drawing function
pub fn draw_ui(
    frame: &mut Frame,
    session: &GameSession,
    ui: &UiState,
    last_saved: Option<DateTime<Local>>,
) {
    let size = frame.size();

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // HUD
            Constraint::Min(0),    // Scene + auras
            Constraint::Length(3), // Controls
        ])
        .split(size);

    stats_panel::draw_hud(frame, v_chunks[0], session, last_saved);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(v_chunks[1]);

    match session.mode {
        GameMode::Roaming => zones::draw_roaming_scene(frame, chunks[0], session),
        GameMode::Combat => combat_scene::draw_combat_scene(frame, chunks[0], session, ui),
        GameMode::Inventory => menus::draw_inventory(frame, chunks[0], session, ui),
        GameMode::Shop => menus::draw_shop(frame, chunks[0], session, ui),
        GameMode::Gamepass => menus::draw_gamepass(frame, chunks[0], session),
    }
    zones::draw_aura_panel(frame, chunks[1], session);

    stats_panel::draw_footer(frame, v_chunks[2], session);

    if let Some(message) = session.latest_notification() {
        draw_notification(frame, size, message);
    }
    if ui.confirming_reset {
        draw_reset_confirm(frame, size);
    }
}

/// Toast near the top of the screen for the newest notification.
fn draw_notification(frame: &mut Frame, area: Rect, message: &str) {
    let width = (message.chars().count() as u16 + 4).min(area.width);
    let toast = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + 5u16.min(area.height.saturating_sub(3)),
        width,
        height: 3u16.min(area.height),
    };

    let paragraph = Paragraph::new(Line::from(message.to_string()))
        .style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    frame.render_widget(Clear, toast);
    frame.render_widget(paragraph, toast);
}

fn draw_reset_confirm(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(area, 44, 5);
    let text = vec![
        Line::from("Reset ALL progress? This cannot be undone."),
        Line::from(""),
        Line::from("[Y] Reset   [any other key] Cancel"),
    ];
    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Reset "),
        )
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Converts a `#rrggbb` color from the catalog into a terminal color.
pub(crate) fn hex_to_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return Color::White;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::White,
    }
}

/// Terminal color for an aura's color tag.
pub(crate) fn aura_color(tag: &str) -> Color {
    match tag {
        "gold" => Color::Yellow,
        "cyan" => Color::Cyan,
        other => hex_to_color(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color() {
        assert_eq!(hex_to_color("#4ade80"), Color::Rgb(0x4a, 0xde, 0x80));
        assert_eq!(hex_to_color("86efac"), Color::Rgb(0x86, 0xef, 0xac));
        assert_eq!(hex_to_color("#zzzzzz"), Color::White);
        assert_eq!(hex_to_color("#fff"), Color::White);
    }

    #[test]
    fn test_aura_color_tags() {
        assert_eq!(aura_color("gold"), Color::Yellow);
        assert_eq!(aura_color("cyan"), Color::Cyan);
    }

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 20, 4);
        let popup = centered_rect(area, 44, 5);
        assert_eq!(popup, Rect::new(0, 0, 20, 4));
    }
}
