//! MedGo+ terminal theme
//!
//! Maps the semantic parts of the screen onto terminal styles built from
//! the design tokens. Animated opacity has no terminal equivalent, so it is
//! rendered by blending an element's foreground toward its background.

use crate::tokens::{tokens, DesignTokens, Rgb};
use ratatui::style::{Color, Modifier, Style};

/// Resolved colors for the screen
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub page: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub header: Rgb,
    pub on_header: Rgb,
    pub accent: Rgb,
    pub section: Rgb,
    pub cta_section: Rgb,
    pub card: Rgb,
    pub card_border: Rgb,
    pub title: Rgb,
    pub subtitle: Rgb,
    pub on_accent: Rgb,
    pub focus: Rgb,
    pub overlay: Rgb,
    pub decoration: Rgb,
}

impl ThemeColors {
    pub fn from_tokens(t: &DesignTokens) -> Self {
        let c = &t.colors;
        Self {
            page: c.background.secondary,
            text: c.text.primary,
            muted: c.text.muted,
            header: c.primary.teal,
            on_header: c.text.inverse,
            accent: c.primary.orange,
            section: c.background.secondary,
            cta_section: c.primary.dark_teal,
            card: c.background.primary,
            card_border: c.border.secondary,
            title: c.text.primary,
            subtitle: c.text.secondary,
            on_accent: c.text.inverse,
            focus: c.neutral.dark_brown,
            overlay: c.background.overlay.over(c.background.secondary),
            decoration: c.primary.teal.blend(c.text.inverse, 0.25),
        }
    }
}

/// UI element types for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// Page background
    Page,
    /// Teal hero area holding logo, tagline and stats
    Header,
    /// The orange "+" of the logo and other highlights on the header
    HeaderAccent,
    /// Decorative shapes drawn behind the header
    Decoration,
    /// Beige features section
    Section,
    /// Dark teal closing section
    CtaSection,
    Title,
    Subtitle,
    /// Feature card body
    Card,
    CardTitle,
    /// Filled orange button
    ButtonAccent,
    /// Filled teal button
    ButtonPrimary,
    /// Transparent button with a light border
    ButtonOutline,
    /// Highlight for the focused control
    Focus,
    /// Modal dialog body
    Dialog,
    DialogTitle,
    /// Dimmed backdrop behind a dialog
    Overlay,
    /// Key hints
    Footer,
    Muted,
}

#[derive(Debug, Clone)]
pub struct Theme {
    colors: ThemeColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(tokens())
    }
}

/// Blend `fg` toward `bg` so that `opacity` 0 is invisible
pub fn fade(fg: Rgb, bg: Rgb, opacity: f32) -> Rgb {
    bg.blend(fg, opacity)
}

impl Theme {
    pub fn new(t: &DesignTokens) -> Self {
        Self {
            colors: ThemeColors::from_tokens(t),
        }
    }

    pub fn colors(&self) -> &ThemeColors {
        &self.colors
    }

    /// Foreground color for an element
    pub fn fg(&self, element: Element) -> Rgb {
        let c = &self.colors;
        match element {
            Element::Page | Element::Section | Element::Card => c.text,
            Element::Header | Element::CtaSection => c.on_header,
            Element::HeaderAccent => c.accent,
            Element::Decoration => c.decoration,
            Element::Title | Element::DialogTitle => c.title,
            Element::Subtitle | Element::CardTitle => c.subtitle,
            Element::ButtonAccent | Element::ButtonPrimary => c.on_accent,
            Element::ButtonOutline => c.on_header,
            Element::Focus => c.accent,
            Element::Dialog => c.text,
            Element::Overlay | Element::Footer | Element::Muted => c.muted,
        }
    }

    /// Background color for an element
    pub fn bg(&self, element: Element) -> Rgb {
        let c = &self.colors;
        match element {
            Element::Header | Element::HeaderAccent | Element::Decoration => c.header,
            Element::CtaSection | Element::ButtonOutline => c.cta_section,
            Element::Card | Element::CardTitle | Element::Dialog | Element::DialogTitle => c.card,
            Element::ButtonAccent => c.accent,
            Element::ButtonPrimary => c.header,
            Element::Focus => c.focus,
            Element::Overlay => c.overlay,
            Element::Page
            | Element::Section
            | Element::Title
            | Element::Subtitle
            | Element::Footer
            | Element::Muted => c.page,
        }
    }

    /// Get a ratatui Style for the specified UI element
    pub fn ratatui_style(&self, element: Element) -> Style {
        let style = Style::default()
            .fg(self.fg(element).to_color())
            .bg(self.bg(element).to_color());
        match element {
            Element::HeaderAccent
            | Element::Title
            | Element::CardTitle
            | Element::DialogTitle
            | Element::ButtonAccent
            | Element::ButtonPrimary
            | Element::ButtonOutline
            | Element::Focus => style.add_modifier(Modifier::BOLD),
            Element::Muted | Element::Footer => style.add_modifier(Modifier::DIM),
            _ => style,
        }
    }

    /// Element style with its foreground faded over `backdrop`
    pub fn faded_style(&self, element: Element, backdrop: Rgb, opacity: f32) -> Style {
        let fg = fade(self.fg(element), backdrop, opacity);
        self.ratatui_style(element).fg(fg.to_color())
    }

    pub fn page_style(&self) -> Style {
        self.ratatui_style(Element::Page)
    }

    pub fn footer_style(&self) -> Style {
        self.ratatui_style(Element::Footer)
    }

    pub fn border_style(&self) -> Style {
        Style::default()
            .fg(self.colors.card_border.to_color())
            .bg(Color::from(self.colors.card))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        let theme = Theme::default();
        let fg = theme.fg(Element::Title);
        let bg = theme.bg(Element::Title);
        assert_eq!(fade(fg, bg, 0.0), bg);
        assert_eq!(fade(fg, bg, 1.0), fg);
    }

    #[test]
    fn test_header_uses_brand_teal() {
        let theme = Theme::default();
        assert_eq!(theme.bg(Element::Header), tokens().colors.primary.teal);
        assert_eq!(theme.fg(Element::HeaderAccent), tokens().colors.primary.orange);
        assert_eq!(
            theme.ratatui_style(Element::Header).bg,
            Some(Color::Rgb(0x31, 0x9D, 0x9B))
        );
    }

    #[test]
    fn test_faded_style_hides_text_at_zero() {
        let theme = Theme::default();
        let backdrop = theme.bg(Element::Section);
        let style = theme.faded_style(Element::Title, backdrop, 0.0);
        assert_eq!(style.fg, Some(backdrop.to_color()));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
