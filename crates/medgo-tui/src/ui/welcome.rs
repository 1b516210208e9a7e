use medgo_core::content;
use medgo_core::tokens::tokens;
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Placeholder entry screen drawn from the flat role palette. Its button
/// has no action.
pub fn render_welcome(frame: &mut Frame, area: Rect) {
    let roles = &tokens().roles;
    frame.render_widget(
        Block::default().style(
            Style::default()
                .bg(roles.background.to_color())
                .fg(roles.text_primary.to_color()),
        ),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let text = Paragraph::new(Line::from(content::WELCOME_SHELL_TEXT).alignment(Alignment::Center))
        .style(Style::default().fg(roles.on_background.to_color()).add_modifier(Modifier::BOLD));
    frame.render_widget(text, rows[1]);

    let label = format!(" {} ", content::WELCOME_SHELL_BUTTON);
    let width = (label.chars().count() as u16 + 2).min(area.width);
    let button_area = Rect {
        x: rows[3].x + rows[3].width.saturating_sub(width) / 2,
        width,
        ..rows[3]
    };
    let button = Paragraph::new(Line::from(label).alignment(Alignment::Center))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(roles.primary.to_color())),
        )
        .style(
            Style::default()
                .bg(roles.primary.to_color())
                .fg(roles.on_primary.to_color()),
        );
    frame.render_widget(button, button_area);
}
