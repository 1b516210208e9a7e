use super::widgets::dim;
use crate::layout::wrap_lines;
use medgo_core::dialog::Dialog;
use medgo_core::theme::{Element, Theme};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::{block::Title, Block, BorderType, Borders, Clear, Paragraph},
};

/// Centered modal rectangle: 80% of the width within 30..=60 columns, tall
/// enough for the wrapped message and the choices
pub fn modal_area(size: Rect, dialog: &Dialog) -> Rect {
    let min_width = 30;
    let max_width = 60;
    let modal_width = (((size.width as f32) * 0.8).round() as u16)
        .clamp(min_width, max_width)
        .min(size.width);
    let message_rows = wrap_lines(dialog.message(), modal_width.saturating_sub(4)).len() as u16;
    // borders, padding row, message, gap, choices, padding row
    let modal_height = (message_rows + 6).min(size.height);
    Rect::new(
        size.x + (size.width.saturating_sub(modal_width)) / 2,
        size.y + (size.height.saturating_sub(modal_height)) / 2,
        modal_width,
        modal_height,
    )
}

pub fn render_dialog(frame: &mut Frame, dialog: &Dialog, theme: &Theme) {
    let size = frame.size();
    dim(frame.buffer_mut(), size, theme.colors().overlay, 0.5);

    let area = modal_area(size, dialog);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style())
        .title(
            Title::from(Span::styled(
                format!(" {} ", dialog.title()),
                theme.ratatui_style(Element::DialogTitle),
            ))
            .alignment(Alignment::Center),
        )
        .style(theme.ratatui_style(Element::Dialog));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![Line::default()];
    lines.extend(
        wrap_lines(dialog.message(), inner.width.saturating_sub(2))
            .into_iter()
            .map(|l| Line::from(l).alignment(Alignment::Center)),
    );
    lines.push(Line::default());

    let mut choices = Vec::new();
    for (i, choice) in dialog.choices().iter().enumerate() {
        if i > 0 {
            choices.push(Span::raw("   "));
        }
        let style = if i == dialog.selected() {
            theme.ratatui_style(Element::ButtonPrimary)
        } else {
            theme.ratatui_style(Element::Dialog)
        };
        choices.push(Span::styled(format!(" {} ", choice.label), style));
    }
    lines.push(Line::from(choices).alignment(Alignment::Center));

    frame.render_widget(
        Paragraph::new(lines).style(theme.ratatui_style(Element::Dialog)),
        inner,
    );
}
