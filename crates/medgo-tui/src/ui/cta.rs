use super::widgets::{draw_button, draw_reveal, offset_rows, ButtonFrame, ButtonLook};
use crate::layout::{wrap_lines, PageLayout, Slot};
use medgo_core::content;
use medgo_core::landing::{CtaButton, LandingPage};
use medgo_core::presets::{ButtonSize, ButtonVariant};
use medgo_core::theme::{Element, Theme};
use ratatui::buffer::Buffer;

pub fn render_cta(buf: &mut Buffer, layout: &PageLayout, page: &LandingPage, theme: &Theme) {
    let area = layout.cta;
    buf.set_style(area, theme.ratatui_style(Element::CtaSection));

    let title = layout.slot(Slot::CtaTitle);
    let lines = wrap_lines(content::CTA_TITLE, title.width);
    draw_reveal(buf, title, area, &lines, &page.cta_title, Element::CtaSection, theme);

    let subtitle = layout.slot(Slot::CtaSubtitle);
    let lines = wrap_lines(content::CTA_SUBTITLE, subtitle.width);
    draw_reveal(buf, subtitle, area, &lines, &page.cta_subtitle, Element::CtaSection, theme);

    let row_shift = offset_rows(page.cta_buttons.offset());
    let buttons = [
        (
            CtaButton::BookConsultation,
            Slot::BookButton,
            ButtonLook::resolve(ButtonVariant::Accent, ButtonSize::Regular),
        ),
        (
            CtaButton::LearnMore,
            Slot::LearnMoreButton,
            ButtonLook::resolve(ButtonVariant::Outline, ButtonSize::Regular)
                .outlined(theme.fg(Element::ButtonOutline)),
        ),
    ];
    for (button, slot, look) in buttons {
        draw_button(
            buf,
            layout.slot(slot),
            area,
            button.label(),
            &look,
            ButtonFrame {
                opacity: page.button_opacity(button),
                scale: page.button(button).scale(),
                shift: row_shift,
                focused: page.focus() == button,
            },
            theme,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_text;
    use medgo_core::motion::Motion;
    use ratatui::layout::Rect;
    use std::time::Duration;

    fn render(page: &LandingPage) -> (Buffer, PageLayout) {
        let layout = PageLayout::compute(70).unwrap();
        let mut buf = Buffer::empty(Rect::new(0, 0, 70, layout.height));
        render_cta(&mut buf, &layout, page, &Theme::default());
        (buf, layout)
    }

    #[test]
    fn test_buttons_wait_for_row_and_own_delay() {
        let mut page = LandingPage::mount(Motion::Reduced);
        page.advance(Duration::from_millis(3700));
        let (buf, _) = render(&page);
        let shown = buffer_text(&buf);
        assert!(shown.contains("Ready to Transform"));
        assert!(!shown.contains("Book Your First Consultation"));
        assert!(!shown.contains("Learn More"));
    }

    #[test]
    fn test_both_calls_to_action_shown_once_settled() {
        let mut page = LandingPage::mount(Motion::Reduced);
        for _ in 0..400 {
            page.advance(Duration::from_millis(16));
        }
        page.focus_previous();
        let (buf, layout) = render(&page);
        let shown = buffer_text(&buf);
        assert!(shown.contains("Book Your First Consultation"));
        assert!(shown.contains("Learn More"));
        assert!(shown.contains("Join thousands of families"));

        let learn_more = layout.slot(Slot::LearnMoreButton);
        let row: String = (0..70)
            .map(|x| buf.get(x, learn_more.y + 1).symbol().to_string())
            .collect();
        assert!(row.contains('▶'), "focused button is marked: {row}");
        assert!(row.contains('│'));
    }
}
