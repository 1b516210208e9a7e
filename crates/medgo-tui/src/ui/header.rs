use super::background::render_header_art;
use super::widgets::{draw_button, draw_centered, draw_reveal, offset_rows, ButtonFrame, ButtonLook};
use crate::layout::{wrap_lines, PageLayout, Slot};
use medgo_core::content;
use medgo_core::landing::{CtaButton, LandingPage};
use medgo_core::presets::{ButtonSize, ButtonVariant};
use medgo_core::theme::{Element, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
};
use unicode_width::UnicodeWidthStr;

pub fn render_header(buf: &mut Buffer, layout: &PageLayout, page: &LandingPage, theme: &Theme) {
    let area = layout.header;
    buf.set_style(area, theme.ratatui_style(Element::Header));
    render_header_art(buf, area, theme);

    render_logo(buf, layout.slot(Slot::Logo), area, page, theme);

    let tagline = layout.slot(Slot::Tagline);
    let lines = wrap_lines(content::TAGLINE, tagline.width);
    draw_reveal(buf, tagline, area, &lines, &page.tagline, Element::HeaderAccent, theme);

    let subtitle = layout.slot(Slot::Subtitle);
    let lines = wrap_lines(content::SUBTITLE, subtitle.width);
    draw_reveal(buf, subtitle, area, &lines, &page.subtitle, Element::Header, theme);

    let button = &page.get_started;
    draw_button(
        buf,
        layout.slot(Slot::GetStarted),
        area,
        CtaButton::GetStarted.label(),
        &ButtonLook::resolve(ButtonVariant::Accent, ButtonSize::Regular),
        ButtonFrame {
            opacity: page.button_opacity(CtaButton::GetStarted),
            scale: button.scale(),
            shift: 0,
            focused: page.focus() == CtaButton::GetStarted,
        },
        theme,
    );

    render_stats(buf, layout.slot(Slot::Stats), page, theme);
}

/// Boxed "MedGo+" that reveals and then floats
fn render_logo(buf: &mut Buffer, slot: Rect, bounds: Rect, page: &LandingPage, theme: &Theme) {
    let opacity = page.logo.opacity();
    if opacity <= 0.0 {
        return;
    }
    let backdrop = theme.bg(Element::Header);
    let text = theme.faded_style(Element::Header, backdrop, opacity).add_modifier(Modifier::BOLD);
    let accent = theme.faded_style(Element::HeaderAccent, backdrop, opacity);
    let frame = theme.faded_style(Element::Header, backdrop, opacity * 0.6);

    let brand_width = (content::BRAND.width() + content::BRAND_ACCENT.width()) as u16;
    let width = (brand_width + 6).min(slot.width);
    let x = slot.x + (slot.width - width) / 2;
    let shift = offset_rows(page.logo.offset() + page.logo_float.offset());
    let inner = "─".repeat(width.saturating_sub(2) as usize);
    let rows = [
        format!("╭{inner}╮"),
        format!("│{}│", " ".repeat(width.saturating_sub(2) as usize)),
        format!("╰{inner}╯"),
    ];
    for (i, row) in rows.iter().enumerate() {
        let y = slot.y as i32 + shift + i as i32;
        if y < bounds.y as i32 || y >= bounds.bottom() as i32 {
            continue;
        }
        let y = y as u16;
        buf.set_stringn(x, y, row, width as usize, frame);
        if i == 1 {
            let bx = x + (width - brand_width.min(width)) / 2;
            buf.set_stringn(bx, y, content::BRAND, width as usize, text);
            let ax = bx + content::BRAND.width() as u16;
            if ax < x + width {
                buf.set_string(ax, y, content::BRAND_ACCENT, accent);
            }
        }
    }
}

/// Three counters side by side: number, label and a rule that grows with
/// the counter's pop-in
fn render_stats(buf: &mut Buffer, slot: Rect, page: &LandingPage, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(slot);
    let backdrop = theme.bg(Element::Header);

    for (card, column) in page.stats.iter().zip(columns.iter()) {
        let tally = &card.tally;
        let opacity = tally.opacity();
        if opacity <= 0.0 {
            continue;
        }
        let number = theme
            .faded_style(Element::HeaderAccent, backdrop, opacity)
            .add_modifier(Modifier::BOLD);
        let label = theme.faded_style(Element::Header, backdrop, opacity);
        draw_centered(buf, *column, 0, slot, &[tally.formatted()], number);
        draw_centered(buf, *column, 1, slot, &[card.stat.label.to_string()], label);

        let full = column.width.saturating_sub(2);
        let rule = ((full as f32) * tally.scale()).round().clamp(0.0, full as f32) as usize;
        draw_centered(buf, *column, 2, slot, &["─".repeat(rule)], label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_text;
    use medgo_core::motion::Motion;
    use std::time::Duration;

    fn render_at(ms: u64) -> String {
        let layout = PageLayout::compute(80).unwrap();
        let mut page = LandingPage::mount(Motion::Reduced);
        page.advance(Duration::from_millis(ms));
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, layout.height));
        render_header(&mut buf, &layout, &page, &Theme::default());
        buffer_text(&buf)
    }

    #[test]
    fn test_header_is_blank_before_first_reveal() {
        let shown = render_at(200);
        assert!(!shown.contains("MedGo"));
        assert!(!shown.contains("Doorstep"));
    }

    #[test]
    fn test_header_shows_logo_tagline_and_stats() {
        let shown = render_at(5000);
        assert!(shown.contains("MedGo+"));
        assert!(shown.contains("Healthcare at Your Doorstep"));
        assert!(shown.contains("Get Started Today"));
        assert!(shown.contains("1,000+"));
        assert!(shown.contains("Cities Covered"));
    }
}
