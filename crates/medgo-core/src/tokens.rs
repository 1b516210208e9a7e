//! MedGo+ Design Tokens
//!
//! The single source of truth for colors, spacing, typography, radii and
//! shadows. Sizes favour senior readers: 18px body text minimum, high
//! contrast text colors, generous touch targets.
//!
//! The table is built once and shared read-only through [`tokens()`].

use lazy_static::lazy_static;
use ratatui::style::Color;

/// Width of one terminal cell in design pixels
pub const CELL_WIDTH_PX: f32 = 8.0;
/// Height of one terminal cell in design pixels
pub const CELL_HEIGHT_PX: f32 = 16.0;

/// Convert a vertical pixel measure to whole terminal rows
pub fn px_to_rows(px: f32) -> u16 {
    (px / CELL_HEIGHT_PX).round().max(0.0) as u16
}

/// Convert a horizontal pixel measure to whole terminal columns
pub fn px_to_cols(px: f32) -> u16 {
    (px / CELL_WIDTH_PX).round().max(0.0) as u16
}

/// An opaque sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Build from a `0xRRGGBB` literal
    pub const fn from_hex(hex: u32) -> Self {
        Self(
            ((hex >> 16) & 0xff) as u8,
            ((hex >> 8) & 0xff) as u8,
            (hex & 0xff) as u8,
        )
    }

    /// Linear blend from `self` (t = 0) to `other` (t = 1)
    pub fn blend(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 { (a as f32 + (b as f32 - a as f32) * t).round() as u8 };
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }

    pub fn to_color(self) -> Color {
        Color::Rgb(self.0, self.1, self.2)
    }

    pub fn to_hex_string(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        rgb.to_color()
    }
}

/// A color with alpha, used for overlays
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Rgba {
    pub const fn new(rgb: Rgb, alpha: f32) -> Self {
        Self { rgb, alpha }
    }

    /// Composite over an opaque backdrop
    pub fn over(self, backdrop: Rgb) -> Rgb {
        backdrop.blend(self.rgb, self.alpha)
    }
}

#[derive(Debug, Clone)]
pub struct PrimaryColors {
    /// Medical theme primary
    pub teal: Rgb,
    pub dark_teal: Rgb,
    pub orange: Rgb,
}

#[derive(Debug, Clone)]
pub struct NeutralColors {
    pub beige: Rgb,
    pub light_gray: Rgb,
    pub dark_brown: Rgb,
    pub white: Rgb,
    pub black: Rgb,
}

#[derive(Debug, Clone)]
pub struct SemanticColors {
    pub success: Rgb,
    pub warning: Rgb,
    pub error: Rgb,
    pub info: Rgb,
}

/// Text colors, all high contrast against light backgrounds
#[derive(Debug, Clone)]
pub struct TextColors {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
    pub inverse: Rgb,
    pub muted: Rgb,
}

#[derive(Debug, Clone)]
pub struct BackgroundColors {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
    pub overlay: Rgba,
}

#[derive(Debug, Clone)]
pub struct BorderColors {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub light: Rgb,
    pub accent: Rgb,
}

/// Full brand palette
#[derive(Debug, Clone)]
pub struct Palette {
    pub primary: PrimaryColors,
    pub neutral: NeutralColors,
    pub semantic: SemanticColors,
    pub text: TextColors,
    pub background: BackgroundColors,
    pub border: BorderColors,
}

impl Palette {
    pub fn medgo() -> Self {
        let dark_brown = Rgb::from_hex(0x3D2F2B);
        Self {
            primary: PrimaryColors {
                teal: Rgb::from_hex(0x319D9B),
                dark_teal: Rgb::from_hex(0x237373),
                orange: Rgb::from_hex(0xF28C28),
            },
            neutral: NeutralColors {
                beige: Rgb::from_hex(0xFDF3E7),
                light_gray: Rgb::from_hex(0xF4F4F4),
                dark_brown,
                white: Rgb::from_hex(0xFFFFFF),
                black: Rgb::from_hex(0x000000),
            },
            semantic: SemanticColors {
                success: Rgb::from_hex(0x2D6A4F),
                warning: Rgb::from_hex(0xF28C28),
                error: Rgb::from_hex(0xDC2626),
                info: Rgb::from_hex(0x319D9B),
            },
            text: TextColors {
                primary: dark_brown,
                secondary: Rgb::from_hex(0x237373),
                accent: Rgb::from_hex(0xF28C28),
                inverse: Rgb::from_hex(0xFFFFFF),
                muted: Rgb::from_hex(0x6B7280),
            },
            background: BackgroundColors {
                primary: Rgb::from_hex(0xFFFFFF),
                secondary: Rgb::from_hex(0xFDF3E7),
                accent: Rgb::from_hex(0xF4F4F4),
                overlay: Rgba::new(dark_brown, 0.5),
            },
            border: BorderColors {
                primary: dark_brown,
                secondary: Rgb::from_hex(0x319D9B),
                light: Rgb::from_hex(0xF4F4F4),
                accent: Rgb::from_hex(0xF28C28),
            },
        }
    }
}

/// Flat role-based palette used by the placeholder welcome shell
#[derive(Debug, Clone)]
pub struct ColorRoles {
    pub background: Rgb,
    pub surface: Rgb,
    pub on_background: Rgb,
    pub primary: Rgb,
    pub on_primary: Rgb,
    pub secondary: Rgb,
    pub on_secondary: Rgb,
    pub outline: Rgb,
    pub success: Rgb,
    pub error: Rgb,
    pub warning: Rgb,
    pub info: Rgb,
    pub text_primary: Rgb,
    pub text_secondary: Rgb,
    pub text_disabled: Rgb,
    pub disabled_background: Rgb,
    pub disabled_text: Rgb,
}

impl ColorRoles {
    pub fn medgo() -> Self {
        Self {
            background: Rgb::from_hex(0xFDF3E7),
            surface: Rgb::from_hex(0xFFFFFF),
            on_background: Rgb::from_hex(0x3D2F2B),
            primary: Rgb::from_hex(0x319D9B),
            on_primary: Rgb::from_hex(0xFFFFFF),
            secondary: Rgb::from_hex(0xF28C28),
            on_secondary: Rgb::from_hex(0x3D2F2B),
            outline: Rgb::from_hex(0xCCC7BF),
            success: Rgb::from_hex(0x2E7D32),
            error: Rgb::from_hex(0xC62828),
            warning: Rgb::from_hex(0xED6C02),
            info: Rgb::from_hex(0x0288D1),
            text_primary: Rgb::from_hex(0x3D2F2B),
            text_secondary: Rgb::from_hex(0x5D534C),
            text_disabled: Rgb::from_hex(0x9E9E9E),
            disabled_background: Rgb::from_hex(0xE0E0E0),
            disabled_text: Rgb::from_hex(0x9E9E9E),
        }
    }
}

/// Spacing scale in design pixels
#[derive(Debug, Clone)]
pub struct Spacing {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub x2l: f32,
    pub x3l: f32,
    pub x4l: f32,
    pub x5l: f32,
    pub x6l: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            xs: 4.0,
            sm: 8.0,
            md: 16.0,
            lg: 24.0,
            xl: 32.0,
            x2l: 40.0,
            x3l: 48.0,
            x4l: 56.0,
            x5l: 64.0,
            x6l: 72.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Medium,
    SemiBold,
    Bold,
}

impl FontWeight {
    /// CSS numeric weight
    pub fn numeric(self) -> u16 {
        match self {
            Self::Regular => 400,
            Self::Medium => 500,
            Self::SemiBold => 600,
            Self::Bold => 700,
        }
    }

    /// Terminals only have bold and not-bold
    pub fn is_bold(self) -> bool {
        self.numeric() >= 600
    }
}

#[derive(Debug, Clone)]
pub struct FontFamilies {
    pub regular: &'static str,
    pub medium: &'static str,
    pub semi_bold: &'static str,
    pub bold: &'static str,
}

impl FontFamilies {
    pub fn for_weight(&self, weight: FontWeight) -> &'static str {
        match weight {
            FontWeight::Regular => self.regular,
            FontWeight::Medium => self.medium,
            FontWeight::SemiBold => self.semi_bold,
            FontWeight::Bold => self.bold,
        }
    }
}

/// Font sizes, larger than usual for senior readers
#[derive(Debug, Clone)]
pub struct FontSizes {
    pub xs: f32,
    pub sm: f32,
    /// Minimum recommended size for body copy
    pub base: f32,
    pub lg: f32,
    pub xl: f32,
    pub x2l: f32,
    pub x3l: f32,
    pub x4l: f32,
    pub x5l: f32,
    /// Brand logo on the landing page
    pub display: f32,
}

#[derive(Debug, Clone)]
pub struct LineHeights {
    pub tight: f32,
    pub normal: f32,
    pub relaxed: f32,
}

#[derive(Debug, Clone)]
pub struct LetterSpacing {
    pub tight: f32,
    pub normal: f32,
    pub wide: f32,
}

#[derive(Debug, Clone)]
pub struct Typography {
    pub font_family: FontFamilies,
    pub font_size: FontSizes,
    pub line_height: LineHeights,
    pub letter_spacing: LetterSpacing,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: FontFamilies {
                regular: "Inter-Regular",
                medium: "Inter-Medium",
                semi_bold: "Inter-SemiBold",
                bold: "Inter-Bold",
            },
            font_size: FontSizes {
                xs: 14.0,
                sm: 16.0,
                base: 18.0,
                lg: 20.0,
                xl: 24.0,
                x2l: 28.0,
                x3l: 32.0,
                x4l: 36.0,
                x5l: 40.0,
                display: 48.0,
            },
            line_height: LineHeights {
                tight: 1.2,
                normal: 1.5,
                relaxed: 1.8,
            },
            letter_spacing: LetterSpacing {
                tight: -0.5,
                normal: 0.0,
                wide: 0.5,
            },
        }
    }
}

/// One step of the simple type scale: size, weight and line height in px
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeRamp {
    pub font_size: f32,
    pub weight: FontWeight,
    pub line_height: f32,
}

/// Compact type scale used by the welcome shell
#[derive(Debug, Clone)]
pub struct TypeScale {
    pub family: &'static str,
    pub heading: TypeRamp,
    pub subheading: TypeRamp,
    pub body: TypeRamp,
    pub label: TypeRamp,
    pub caption: TypeRamp,
}

impl Default for TypeScale {
    fn default() -> Self {
        let ramp = |font_size, weight, line_height| TypeRamp {
            font_size,
            weight,
            line_height,
        };
        Self {
            family: "System",
            heading: ramp(24.0, FontWeight::Bold, 32.0),
            subheading: ramp(20.0, FontWeight::SemiBold, 28.0),
            body: ramp(16.0, FontWeight::Regular, 24.0),
            label: ramp(14.0, FontWeight::Medium, 20.0),
            caption: ramp(12.0, FontWeight::Regular, 16.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BorderRadius {
    pub none: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub x2l: f32,
    pub full: f32,
}

impl Default for BorderRadius {
    fn default() -> Self {
        Self {
            none: 0.0,
            sm: 4.0,
            md: 8.0,
            lg: 12.0,
            xl: 16.0,
            x2l: 20.0,
            full: 9999.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Rgb,
    pub offset_x: f32,
    pub offset_y: f32,
    pub opacity: f32,
    pub radius: f32,
    /// Android elevation
    pub elevation: u8,
}

#[derive(Debug, Clone)]
pub struct Shadows {
    pub sm: Shadow,
    pub md: Shadow,
    pub lg: Shadow,
    pub xl: Shadow,
}

impl Shadows {
    fn with_color(color: Rgb) -> Self {
        let shadow = |offset_y, opacity, radius, elevation| Shadow {
            color,
            offset_x: 0.0,
            offset_y,
            opacity,
            radius,
            elevation,
        };
        Self {
            sm: shadow(1.0, 0.1, 2.0, 1),
            md: shadow(2.0, 0.15, 4.0, 3),
            lg: shadow(4.0, 0.2, 8.0, 5),
            xl: shadow(8.0, 0.25, 16.0, 8),
        }
    }
}

/// Every token table, bundled
#[derive(Debug, Clone)]
pub struct DesignTokens {
    pub colors: Palette,
    pub roles: ColorRoles,
    pub typography: Typography,
    pub type_scale: TypeScale,
    pub spacing: Spacing,
    pub radius: BorderRadius,
    pub shadows: Shadows,
}

impl DesignTokens {
    pub fn medgo() -> Self {
        let colors = Palette::medgo();
        let shadows = Shadows::with_color(colors.neutral.dark_brown);
        Self {
            colors,
            roles: ColorRoles::medgo(),
            typography: Typography::default(),
            type_scale: TypeScale::default(),
            spacing: Spacing::default(),
            radius: BorderRadius::default(),
            shadows,
        }
    }
}

lazy_static! {
    static ref TOKENS: DesignTokens = DesignTokens::medgo();
}

/// The process-wide token table
pub fn tokens() -> &'static DesignTokens {
    &TOKENS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Rgb::from_hex(0x319D9B), Rgb(0x31, 0x9D, 0x9B));
        assert_eq!(Rgb::from_hex(0xF28C28).to_hex_string(), "#F28C28");
    }

    #[test]
    fn test_blend_endpoints() {
        let teal = tokens().colors.primary.teal;
        let white = tokens().colors.neutral.white;
        assert_eq!(teal.blend(white, 0.0), teal);
        assert_eq!(teal.blend(white, 1.0), white);
        // out of range factors are clamped
        assert_eq!(teal.blend(white, 3.0), white);
    }

    #[test]
    fn test_overlay_composites_half_way() {
        let overlay = tokens().colors.background.overlay;
        let white = tokens().colors.neutral.white;
        let composed = overlay.over(white);
        assert_eq!(composed, Rgb(0x9E, 0x97, 0x95));
    }

    #[test]
    fn test_palette_values() {
        let t = tokens();
        assert_eq!(t.colors.primary.dark_teal.to_hex_string(), "#237373");
        assert_eq!(t.colors.text.secondary, t.colors.primary.dark_teal);
        assert_eq!(t.colors.background.secondary, t.colors.neutral.beige);
        assert_eq!(t.roles.background, t.colors.neutral.beige);
        assert_eq!(t.roles.outline.to_hex_string(), "#CCC7BF");
    }

    #[test]
    fn test_scales() {
        let t = tokens();
        assert_eq!(t.spacing.md, 16.0);
        assert_eq!(t.spacing.x6l, 72.0);
        assert_eq!(t.typography.font_size.base, 18.0);
        assert_eq!(t.typography.font_size.display, 48.0);
        assert_eq!(t.radius.full, 9999.0);
        assert_eq!(t.type_scale.body.line_height, 24.0);
        assert_eq!(t.type_scale.label.weight.numeric(), 500);
    }

    #[test]
    fn test_shadow_ramp_grows() {
        let s = &tokens().shadows;
        let ramp = [s.sm, s.md, s.lg, s.xl];
        for pair in ramp.windows(2) {
            assert!(pair[0].offset_y < pair[1].offset_y);
            assert!(pair[0].opacity < pair[1].opacity);
            assert!(pair[0].elevation < pair[1].elevation);
        }
        assert_eq!(s.md.color, tokens().colors.neutral.dark_brown);
    }

    #[test]
    fn test_cell_conversion() {
        assert_eq!(px_to_rows(16.0), 1);
        assert_eq!(px_to_rows(30.0), 2);
        assert_eq!(px_to_rows(-15.0), 0);
        assert_eq!(px_to_cols(40.0), 5);
    }

    #[test]
    fn test_singleton_is_shared() {
        assert!(std::ptr::eq(tokens(), tokens()));
    }
}
