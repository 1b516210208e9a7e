use super::widgets::{draw_centered, draw_reveal, draw_shadow, offset_rows, scaled};
use crate::layout::{wrap_lines, CardMetrics, PageLayout, Slot};
use medgo_core::content;
use medgo_core::landing::{FeatureCard, LandingPage};
use medgo_core::presets::{CardStyle, CardVariant};
use medgo_core::theme::{fade, Element, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

pub fn render_features(buf: &mut Buffer, layout: &PageLayout, page: &LandingPage, theme: &Theme) {
    let area = layout.features;
    buf.set_style(area, theme.ratatui_style(Element::Section));

    let title = layout.slot(Slot::FeaturesTitle);
    let lines = wrap_lines(content::FEATURES_TITLE, title.width);
    draw_reveal(buf, title, area, &lines, &page.features_title, Element::Title, theme);

    let subtitle = layout.slot(Slot::FeaturesSubtitle);
    let lines = wrap_lines(content::FEATURES_SUBTITLE, subtitle.width);
    draw_reveal(buf, subtitle, area, &lines, &page.features_subtitle, Element::Subtitle, theme);

    let metrics = CardMetrics::feature();
    let style = CardStyle::resolve(CardVariant::Highlight);
    for (i, card) in page.features.iter().enumerate() {
        let slot = layout.slot(Slot::FeatureCard(i));
        render_card(buf, slot, area, card, &metrics, &style, theme);
    }
}

fn render_card(
    buf: &mut Buffer,
    slot: Rect,
    bounds: Rect,
    card: &FeatureCard,
    metrics: &CardMetrics,
    style: &CardStyle,
    theme: &Theme,
) {
    let opacity = card.reveal.opacity();
    if opacity <= 0.0 || slot.is_empty() {
        return;
    }
    let backdrop = theme.bg(Element::Section);
    let fill = fade(style.background, backdrop, opacity);
    let edge = style
        .border
        .map(|b| fade(b.color, backdrop, opacity))
        .unwrap_or(fill);
    let body = Style::default().bg(fill.to_color());
    let edge = body.fg(edge.to_color());

    let rect = scaled(slot, slot.width, card.pop.scale());
    let shift = offset_rows(card.reveal.offset());
    let top = slot.y as i32 + shift;
    let visible = |r: i32| -> Option<u16> {
        let y = top + r;
        (y >= bounds.y as i32 && y < bounds.bottom() as i32).then_some(y as u16)
    };

    let inner = "─".repeat(rect.width.saturating_sub(2) as usize);
    let last = slot.height as i32 - 1;
    for r in 0..slot.height as i32 {
        let Some(y) = visible(r) else { continue };
        buf.set_style(Rect::new(rect.x, y, rect.width, 1), body);
        if r == 0 {
            buf.set_stringn(rect.x, y, format!("╭{inner}╮"), rect.width as usize, edge);
        } else if r == last {
            buf.set_stringn(rect.x, y, format!("╰{inner}╯"), rect.width as usize, edge);
        } else {
            buf.set_string(rect.x, y, "│", edge);
            buf.set_string(rect.right().saturating_sub(1), y, "│", edge);
        }
    }
    if let Some(shadow) = style.shadow {
        let drawn = Rect {
            y: top.max(0) as u16,
            ..rect
        };
        draw_shadow(buf, drawn, bounds, &shadow, opacity);
    }

    let text_area = Rect {
        x: rect.x + 1 + metrics.pad_cols,
        width: rect.width.saturating_sub(2 + 2 * metrics.pad_cols),
        ..slot
    };
    let inner_top = (top + 1).max(bounds.y as i32);
    let inner_bottom = (top + last).min(bounds.bottom() as i32);
    let inside = Rect {
        y: inner_top as u16,
        height: (inner_bottom - inner_top).max(0) as u16,
        ..bounds
    };

    let feature = &card.feature;
    let icon_row = 1 + metrics.pad_rows as i32 + offset_rows(card.icon_float.offset());
    let title_row = 2 + metrics.pad_rows as i32;
    let text = theme.faded_style(Element::Card, backdrop, opacity).bg(fill.to_color());
    let heading = theme
        .faded_style(Element::CardTitle, backdrop, opacity)
        .bg(fill.to_color())
        .add_modifier(Modifier::BOLD);
    let lines = wrap_lines(feature.description, metrics.text_width(slot.width));

    let icon = [feature.icon.to_string()];
    let title = [feature.title.to_string()];
    draw_centered(buf, text_area, shift + icon_row, inside, &icon, text);
    draw_centered(buf, text_area, shift + title_row, inside, &title, heading);
    draw_centered(buf, text_area, shift + title_row + 1, inside, &lines, text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_text;
    use medgo_core::motion::Motion;
    use std::time::Duration;

    fn render_at(ms: u64) -> (Buffer, PageLayout) {
        let layout = PageLayout::compute(72).unwrap();
        let mut page = LandingPage::mount(Motion::Full);
        for _ in 0..ms / 16 {
            page.advance(Duration::from_millis(16));
        }
        let mut buf = Buffer::empty(Rect::new(0, 0, 72, layout.height));
        render_features(&mut buf, &layout, &page, &Theme::default());
        (buf, layout)
    }

    #[test]
    fn test_cards_hidden_until_their_delay() {
        let (buf, _) = render_at(2700);
        let shown = buffer_text(&buf);
        assert!(shown.contains("Why Choose MedGo+?"));
        assert!(shown.contains("Doorstep Care"));
        assert!(!shown.contains("Video Consultations"));
        assert!(!shown.contains("Rural Reach"));
    }

    #[test]
    fn test_settled_cards_show_every_feature() {
        let (buf, layout) = render_at(5000);
        let shown = buffer_text(&buf);
        for feature in content::FEATURES {
            assert!(shown.contains(feature.title), "{}", feature.title);
        }
        assert!(shown.contains("Qualified doctors visit you at home"));

        let card = layout.slot(Slot::FeatureCard(0));
        assert_eq!(buf.get(card.x, card.y).symbol(), "╭");
        let white = Theme::default().colors().card.to_color();
        assert_eq!(buf.get(card.x + 2, card.y + 1).style().bg, Some(white));
    }
}
