use super::{aura_color, hex_to_color};
use aura_chronicles::auras::Rarity;
use aura_chronicles::core::GameSession;
use aura_chronicles::zones::{check_requirements, total_aura_power};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Roaming view: the current zone, its enemies and the way forward.
pub fn draw_roaming_scene(frame: &mut Frame, area: Rect, session: &GameSession) {
    let snapshot = session.snapshot();
    let tint = hex_to_color(snapshot.environment_color);
    let Some(zone) = session.current_zone() else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            zone.name,
            Style::default().fg(tint).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Enemies:", Style::default().add_modifier(Modifier::BOLD))),
    ];
    for enemy in &zone.enemies {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", enemy.name), Style::default().fg(hex_to_color(&enemy.color))),
            Span::styled(
                format!("  {} HP, {} dmg", enemy.max_hp, enemy.damage),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("  Boss: ", Style::default().fg(Color::Red)),
        Span::styled(zone.boss.name.clone(), Style::default().fg(hex_to_color(&zone.boss.color))),
    ]));
    lines.push(Line::from(""));

    let next_index = session.player.current_zone + 1;
    match session.zones().get(next_index) {
        Some(next) => {
            let (text, color) = match check_requirements(&session.player.auras, next) {
                Ok(()) => (format!("Next: {} (unlocked)", next.name), Color::Green),
                Err(denial) => (format!("Next: {} - {}", next.name, denial), Color::Yellow),
            };
            lines.push(Line::from(Span::styled(text, Style::default().fg(color))));
        }
        None => lines.push(Line::from(Span::styled(
            "You have reached the last zone.",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    let scene = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(tint))
                .title("World"),
        )
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });
    frame.render_widget(scene, area);
}

/// Aura collection, strongest first.
pub fn draw_aura_panel(frame: &mut Frame, area: Rect, session: &GameSession) {
    let auras = &session.player.auras;
    let mut sorted: Vec<_> = auras.iter().collect();
    sorted.sort_by(|a, b| b.power.total_cmp(&a.power));

    let lines: Vec<Line> = if sorted.is_empty() {
        vec![Line::from(Span::styled(
            "Defeat enemies for a chance at an aura.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        sorted
            .iter()
            .map(|aura| {
                let mut style = Style::default().fg(aura_color(&aura.color));
                if aura.rarity >= Rarity::Legendary {
                    style = style.add_modifier(Modifier::BOLD);
                }
                Line::from(vec![
                    Span::styled(aura.name.clone(), style),
                    Span::styled(
                        format!(" {:.0}", aura.power),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect()
    };

    let title = format!("Auras ({:.0} power)", total_aura_power(auras));
    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true }),
        area,
    );
}
