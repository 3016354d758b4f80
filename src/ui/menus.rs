use crate::input::UiState;
use aura_chronicles::core::{GameSession, LOOT_PASS_MULTIPLIER, MAX_INVENTORY_SLOTS};
use aura_chronicles::items::catalog::shop_items;
use aura_chronicles::items::Item;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn row_style(selected: bool, color: Color) -> Style {
    if selected {
        Style::default().fg(Color::Black).bg(color)
    } else {
        Style::default().fg(color)
    }
}

fn equipped_marker(session: &GameSession, item: &Item) -> &'static str {
    let player = &session.player;
    let is = |slot: &Option<Item>| slot.as_ref().is_some_and(|e| e.id == item.id);
    if is(&player.equipped_weapon) || is(&player.equipped_armor) {
        " [E]"
    } else {
        ""
    }
}

/// Inventory screen: equipment on top, item list below.
pub fn draw_inventory(frame: &mut Frame, area: Rect, session: &GameSession, ui: &UiState) {
    let player = &session.player;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let equipment = vec![
        Line::from(vec![
            Span::styled("Weapon: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                player
                    .equipped_weapon
                    .as_ref()
                    .map(|w| w.name.as_str())
                    .unwrap_or("Fists"),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(vec![
            Span::styled("Armor:  ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                player
                    .equipped_armor
                    .as_ref()
                    .map(|a| a.name.as_str())
                    .unwrap_or("None"),
                Style::default().fg(Color::Blue),
            ),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(equipment).block(Block::default().borders(Borders::ALL).title("Equipped")),
        chunks[0],
    );

    let lines: Vec<Line> = player
        .inventory
        .iter()
        .enumerate()
        .map(|(i, item)| {
            Line::from(Span::styled(
                format!(
                    "{} {:<18} {:<8} {}{}",
                    if i == ui.cursor { ">" } else { " " },
                    item.name,
                    item.category.name(),
                    item.stat_summary(),
                    equipped_marker(session, item)
                ),
                row_style(
                    i == ui.cursor,
                    if item.category.is_equippable() {
                        Color::White
                    } else {
                        Color::Green
                    },
                ),
            ))
        })
        .collect();

    let title = format!("Inventory ({}/{})", player.inventory.len(), MAX_INVENTORY_SLOTS);
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title)),
        chunks[1],
    );
}

/// Shop screen: every catalog item with a price.
pub fn draw_shop(frame: &mut Frame, area: Rect, session: &GameSession, ui: &UiState) {
    let gold = session.player.gold;
    let mut lines: Vec<Line> = Vec::new();
    for (i, item) in shop_items().iter().enumerate() {
        let affordable = gold >= item.price;
        let color = if affordable { Color::Yellow } else { Color::DarkGray };
        lines.push(Line::from(Span::styled(
            format!(
                "{} {:<18} {:>5} G  {}",
                if i == ui.cursor { ">" } else { " " },
                item.name,
                item.price,
                item.description
            ),
            row_style(i == ui.cursor, color),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Item Shop ({} G)", gold)),
        ),
        area,
    );
}

/// Gamepass store. Only the loot pass does anything.
pub fn draw_gamepass(frame: &mut Frame, area: Rect, session: &GameSession) {
    let active = session.player.drop_rate_multiplier >= LOOT_PASS_MULTIPLIER;
    let status = if active {
        Span::styled("ACTIVE", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("[Enter] Activate", Style::default().fg(Color::White))
    };

    let text = vec![
        Line::from(Span::styled(
            "2x Loot Chance",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )),
        Line::from("Doubles item drop chances."),
        Line::from(status),
        Line::from(""),
        Line::from(Span::styled(
            format!("Current drop multiplier: {:.1}x", session.player.drop_rate_multiplier),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(
        Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title("Gamepasses"))
            .alignment(Alignment::Center),
        area,
    );
}
