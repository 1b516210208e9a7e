//! Style presets composed from the design tokens
//!
//! Presets resolve in layers: a base style, then a variant overlay, then a
//! size overlay. Later layers win, field by field.

use crate::tokens::{tokens, DesignTokens, FontWeight, Rgb, Shadow};
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub family: &'static str,
    pub weight: FontWeight,
    pub size: f32,
    /// Absolute line height in px
    pub line_height: f32,
    pub color: Rgb,
    pub letter_spacing: f32,
    pub align: TextAlign,
    pub underline: bool,
}

impl TextStyle {
    fn new(t: &DesignTokens, weight: FontWeight, size: f32, ratio: f32, color: Rgb) -> Self {
        Self {
            family: t.typography.font_family.for_weight(weight),
            weight,
            size,
            line_height: size * ratio,
            color,
            letter_spacing: t.typography.letter_spacing.normal,
            align: TextAlign::Left,
            underline: false,
        }
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = TextAlign::Center;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyles {
    pub h1: TextStyle,
    pub h2: TextStyle,
    pub h3: TextStyle,
    pub h4: TextStyle,
    pub body_large: TextStyle,
    pub body: TextStyle,
    pub body_small: TextStyle,
    pub caption: TextStyle,
    pub label: TextStyle,
    /// Color is supplied by the button variant
    pub button_text: TextStyle,
    pub accent: TextStyle,
    pub link: TextStyle,
}

impl TextStyles {
    pub fn from_tokens(t: &DesignTokens) -> Self {
        let size = &t.typography.font_size;
        let lh = &t.typography.line_height;
        let text = &t.colors.text;

        let mut h1 = TextStyle::new(t, FontWeight::Bold, size.x4l, lh.tight, text.primary);
        h1.letter_spacing = t.typography.letter_spacing.tight;

        let mut link = TextStyle::new(t, FontWeight::Medium, size.base, lh.normal, t.colors.primary.teal);
        link.underline = true;

        Self {
            h1,
            h2: TextStyle::new(t, FontWeight::Bold, size.x3l, lh.tight, text.primary),
            h3: TextStyle::new(t, FontWeight::SemiBold, size.x2l, lh.normal, text.primary),
            h4: TextStyle::new(t, FontWeight::SemiBold, size.xl, lh.normal, text.primary),
            body_large: TextStyle::new(t, FontWeight::Regular, size.lg, lh.relaxed, text.primary),
            body: TextStyle::new(t, FontWeight::Regular, size.base, lh.relaxed, text.primary),
            body_small: TextStyle::new(t, FontWeight::Regular, size.sm, lh.relaxed, text.secondary),
            caption: TextStyle::new(t, FontWeight::Regular, size.sm, lh.normal, text.muted),
            label: TextStyle::new(t, FontWeight::Medium, size.base, lh.normal, text.primary),
            button_text: TextStyle::new(t, FontWeight::SemiBold, size.base, lh.tight, text.primary)
                .centered(),
            accent: TextStyle::new(t, FontWeight::Medium, size.base, lh.normal, text.accent),
            link,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Accent,
    Outline,
    Ghost,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum ButtonSize {
    Small,
    #[default]
    Regular,
    Large,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    /// `None` is transparent
    pub background: Option<Rgb>,
    pub border: Option<Border>,
    pub radius: f32,
    pub padding_vertical: f32,
    pub padding_horizontal: f32,
    pub min_height: f32,
    pub shadow: Option<Shadow>,
    pub text: TextStyle,
}

impl ButtonStyle {
    /// Resolve base, variant and size layers
    pub fn resolve(variant: ButtonVariant, size: ButtonSize) -> Self {
        let t = tokens();
        let text_styles = TextStyles::from_tokens(t);
        let teal = t.colors.primary.teal;

        let mut style = Self {
            background: None,
            border: None,
            radius: t.radius.lg,
            padding_vertical: t.spacing.md,
            padding_horizontal: t.spacing.xl,
            min_height: 56.0,
            shadow: Some(t.shadows.md),
            text: text_styles.button_text,
        };

        match variant {
            ButtonVariant::Primary => {
                style.background = Some(teal);
                style.text.color = t.colors.text.inverse;
            }
            ButtonVariant::Secondary => {
                style.background = Some(t.colors.background.primary);
                style.border = Some(Border { width: 2.0, color: teal });
                style.text.color = teal;
            }
            ButtonVariant::Accent => {
                style.background = Some(t.colors.primary.orange);
                style.text.color = t.colors.text.inverse;
            }
            ButtonVariant::Outline => {
                style.border = Some(Border {
                    width: 2.0,
                    color: t.colors.border.primary,
                });
                style.text.color = t.colors.text.primary;
            }
            ButtonVariant::Ghost => {
                style.shadow = Some(t.shadows.sm);
                style.text.color = teal;
            }
            ButtonVariant::Disabled => {
                style.background = Some(t.colors.neutral.light_gray);
                style.text.color = t.colors.text.muted;
            }
        }

        match size {
            ButtonSize::Small => {
                style.padding_vertical = t.spacing.sm;
                style.padding_horizontal = t.spacing.lg;
                style.min_height = 44.0;
            }
            ButtonSize::Regular => {}
            ButtonSize::Large => {
                style.padding_vertical = t.spacing.lg;
                style.padding_horizontal = t.spacing.x2l;
                style.min_height = 64.0;
            }
        }

        style
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum CardVariant {
    Base,
    Accent,
    Highlight,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    pub background: Rgb,
    pub border: Option<Border>,
    pub radius: f32,
    pub padding: f32,
    pub margin_bottom: f32,
    pub margin_vertical: f32,
    pub shadow: Option<Shadow>,
}

impl CardStyle {
    pub fn resolve(variant: CardVariant) -> Self {
        let t = tokens();
        let mut style = Self {
            background: t.colors.background.primary,
            border: None,
            radius: t.radius.xl,
            padding: t.spacing.lg,
            margin_bottom: 0.0,
            margin_vertical: 0.0,
            shadow: Some(t.shadows.md),
        };
        match variant {
            CardVariant::Base => {}
            CardVariant::Accent => {
                style.background = t.colors.background.secondary;
                style.border = Some(Border {
                    width: 1.0,
                    color: t.colors.border.light,
                });
            }
            CardVariant::Highlight => {
                style.border = Some(Border {
                    width: 2.0,
                    color: t.colors.primary.teal,
                });
            }
            CardVariant::Warning => {
                style.border = Some(Border {
                    width: 2.0,
                    color: t.colors.primary.orange,
                });
            }
        }
        style
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum InputState {
    #[default]
    Default,
    Focused,
    Error,
    Disabled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputStyle {
    pub background: Rgb,
    pub border: Border,
    pub radius: f32,
    pub padding_vertical: f32,
    pub padding_horizontal: f32,
    pub min_height: f32,
    pub shadow: Option<Shadow>,
    pub text: TextStyle,
}

impl InputStyle {
    pub fn resolve(state: InputState) -> Self {
        let t = tokens();
        let mut text = TextStyles::from_tokens(t).body;
        text.line_height = t.typography.font_size.base * t.typography.line_height.normal;

        let mut style = Self {
            background: t.colors.background.primary,
            border: Border {
                width: 2.0,
                color: t.colors.border.light,
            },
            radius: t.radius.lg,
            padding_vertical: t.spacing.md,
            padding_horizontal: t.spacing.lg,
            min_height: 56.0,
            shadow: None,
            text,
        };
        match state {
            InputState::Default => {}
            InputState::Focused => {
                style.border.color = t.colors.primary.teal;
                style.shadow = Some(t.shadows.md);
            }
            InputState::Error => style.border.color = t.colors.semantic.error,
            InputState::Disabled => {
                style.background = t.colors.background.accent;
                style.text.color = t.colors.text.muted;
            }
        }
        style
    }
}

/// Named compositions for common healthcare widgets
pub struct ComponentVariants;

impl ComponentVariants {
    pub fn doctor_card() -> CardStyle {
        let t = tokens();
        CardStyle {
            padding: t.spacing.xl,
            margin_bottom: t.spacing.lg,
            ..CardStyle::resolve(CardVariant::Base)
        }
    }

    pub fn appointment_card() -> CardStyle {
        let t = tokens();
        CardStyle {
            padding: t.spacing.lg,
            margin_vertical: t.spacing.sm,
            ..CardStyle::resolve(CardVariant::Highlight)
        }
    }

    pub fn emergency_button() -> ButtonStyle {
        let t = tokens();
        ButtonStyle {
            background: Some(t.colors.semantic.error),
            padding_vertical: t.spacing.lg,
            ..ButtonStyle::resolve(ButtonVariant::Primary, ButtonSize::Regular)
        }
    }

    pub fn call_doctor_button() -> ButtonStyle {
        let t = tokens();
        ButtonStyle {
            radius: t.radius.full,
            padding_vertical: t.spacing.lg,
            padding_horizontal: t.spacing.x3l,
            ..ButtonStyle::resolve(ButtonVariant::Accent, ButtonSize::Regular)
        }
    }

    /// Pill-shaped teal badge, returns (background, text style)
    pub fn status_badge() -> (Rgb, TextStyle) {
        let t = tokens();
        let mut text = TextStyles::from_tokens(t).caption;
        text.color = t.colors.text.inverse;
        text.family = t.typography.font_family.medium;
        (t.colors.primary.teal, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_text_style_line_heights() {
        let styles = TextStyles::from_tokens(tokens());
        assert_eq!(styles.h1.size, 36.0);
        assert!((styles.h1.line_height - 43.2).abs() < 1e-4);
        assert_eq!(styles.h1.letter_spacing, -0.5);
        assert!((styles.body.line_height - 32.4).abs() < 1e-4);
        assert_eq!(styles.body_small.color, tokens().colors.text.secondary);
        assert!(styles.link.underline);
        assert_eq!(styles.button_text.align, TextAlign::Center);
        assert_eq!(styles.h2.family, "Inter-Bold");
    }

    #[test]
    fn test_every_button_keeps_base_radius() {
        for variant in ButtonVariant::iter() {
            for size in ButtonSize::iter() {
                let style = ButtonStyle::resolve(variant, size);
                assert_eq!(style.radius, tokens().radius.lg, "{variant} {size}");
                assert!(style.min_height >= 44.0);
            }
        }
    }

    #[test]
    fn test_button_variants() {
        let t = tokens();
        let primary = ButtonStyle::resolve(ButtonVariant::Primary, ButtonSize::Regular);
        assert_eq!(primary.background, Some(t.colors.primary.teal));
        assert_eq!(primary.text.color, t.colors.text.inverse);
        assert_eq!(primary.shadow, Some(t.shadows.md));

        let outline = ButtonStyle::resolve(ButtonVariant::Outline, ButtonSize::Regular);
        assert_eq!(outline.background, None);
        assert_eq!(outline.border.map(|b| b.color), Some(t.colors.border.primary));

        let ghost = ButtonStyle::resolve(ButtonVariant::Ghost, ButtonSize::Regular);
        assert_eq!(ghost.shadow, Some(t.shadows.sm));
    }

    #[test]
    fn test_button_sizes() {
        let small = ButtonStyle::resolve(ButtonVariant::Accent, ButtonSize::Small);
        assert_eq!((small.padding_vertical, small.padding_horizontal, small.min_height), (8.0, 24.0, 44.0));
        let large = ButtonStyle::resolve(ButtonVariant::Accent, ButtonSize::Large);
        assert_eq!((large.padding_vertical, large.padding_horizontal, large.min_height), (24.0, 40.0, 64.0));
    }

    #[test]
    fn test_cards_and_inputs() {
        let t = tokens();
        assert_eq!(CardStyle::resolve(CardVariant::Base).radius, t.radius.xl);
        assert_eq!(
            CardStyle::resolve(CardVariant::Warning).border.map(|b| b.color),
            Some(t.colors.primary.orange)
        );
        assert_eq!(InputStyle::resolve(InputState::Focused).border.color, t.colors.primary.teal);
        assert_eq!(InputStyle::resolve(InputState::Error).border.color, t.colors.semantic.error);
        assert_eq!(InputStyle::resolve(InputState::Disabled).background, t.colors.background.accent);
        assert_eq!(InputStyle::resolve(InputState::Default).shadow, None);
    }

    #[test]
    fn test_component_variants() {
        let t = tokens();
        assert_eq!(ComponentVariants::doctor_card().padding, t.spacing.xl);
        assert_eq!(ComponentVariants::appointment_card().margin_vertical, t.spacing.sm);
        assert_eq!(ComponentVariants::emergency_button().background, Some(t.colors.semantic.error));
        assert_eq!(ComponentVariants::call_doctor_button().radius, t.radius.full);
        let (bg, text) = ComponentVariants::status_badge();
        assert_eq!(bg, t.colors.primary.teal);
        assert_eq!(text.color, t.colors.text.inverse);
    }
}
