use crate::ui::app::AppMode;
use itertools::Itertools;
use medgo_core::theme::{Element, Theme};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

fn hints(mode: AppMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        AppMode::Landing => &[
            ("Tab", "next"),
            ("Shift+Tab", "previous"),
            ("Enter", "select"),
            ("↑↓", "scroll"),
            ("Q", "quit"),
        ],
        AppMode::Dialog => &[("←→", "choose"), ("Enter", "confirm"), ("Esc", "close")],
        AppMode::Welcome => &[("Q", "quit")],
    }
}

/// Plain-text key hints, as shown when the footer is too narrow for styling
pub fn hint_text(mode: AppMode) -> String {
    hints(mode)
        .iter()
        .map(|(key, action)| format!("{key} {action}"))
        .join(" | ")
}

pub fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme, mode: AppMode) {
    let plain = hint_text(mode);
    let line = if plain.chars().count() > area.width as usize {
        Line::from(plain)
    } else {
        let spans = hints(mode)
            .iter()
            .enumerate()
            .flat_map(|(i, (key, action))| {
                let separator = if i == 0 { "" } else { " | " };
                [
                    Span::raw(separator),
                    Span::styled(format!("[{key}]"), theme.ratatui_style(Element::Focus)),
                    Span::styled(format!(" {action}"), theme.footer_style()),
                ]
            })
            .collect::<Vec<_>>();
        Line::from(spans)
    };

    let footer = Paragraph::new(line.alignment(Alignment::Center)).style(theme.footer_style());
    frame.render_widget(footer, area);
}
