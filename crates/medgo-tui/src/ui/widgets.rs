//! Drawing helpers shared by the page sections
//!
//! Everything here paints straight into a [`Buffer`] so the page can be
//! composed off screen and scrolled as one piece. Vertical motion is
//! expressed in whole rows; anything pushed outside the `bounds` of its
//! section is clipped.

use medgo_core::motion::Reveal;
use medgo_core::presets::{ButtonSize, ButtonStyle, ButtonVariant};
use medgo_core::theme::{fade, Element, Theme};
use medgo_core::tokens::{px_to_cols, Rgb, Shadow, CELL_HEIGHT_PX};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

/// Whole rows for a vertical offset in design pixels
pub fn offset_rows(px: f32) -> i32 {
    (px / CELL_HEIGHT_PX).round() as i32
}

fn row_in(bounds: Rect, y: i32) -> Option<u16> {
    (y >= bounds.y as i32 && y < bounds.bottom() as i32).then_some(y as u16)
}

/// Centered run of `width` columns inside `area`, shrunk by `scale`
pub fn scaled(area: Rect, width: u16, scale: f32) -> Rect {
    let width = width.min(area.width);
    let scaled = ((width as f32) * scale).round().clamp(0.0, area.width as f32) as u16;
    Rect {
        x: area.x + (area.width - scaled) / 2,
        width: scaled,
        ..area
    }
}

/// Draw `lines` centered in `area`, moved down by `shift` rows
pub fn draw_centered(
    buf: &mut Buffer,
    area: Rect,
    shift: i32,
    bounds: Rect,
    lines: &[String],
    style: Style,
) {
    for (i, line) in lines.iter().enumerate() {
        let Some(y) = row_in(bounds, area.y as i32 + shift + i as i32) else {
            continue;
        };
        let width = (line.width() as u16).min(area.width);
        let x = area.x + (area.width - width) / 2;
        buf.set_stringn(x, y, line, area.width as usize, style);
    }
}

/// Wrapped text that fades and springs in with `reveal`
pub fn draw_reveal(
    buf: &mut Buffer,
    area: Rect,
    bounds: Rect,
    lines: &[String],
    reveal: &Reveal,
    element: Element,
    theme: &Theme,
) {
    let opacity = reveal.opacity();
    if opacity <= 0.0 {
        return;
    }
    let style = theme.faded_style(element, theme.bg(element), opacity);
    draw_centered(buf, area, offset_rows(reveal.offset()), bounds, lines, style);
}

/// Blend a terminal color toward `toward`; non-RGB colors are left alone
pub fn tint(color: Color, toward: Rgb, amount: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => Rgb(r, g, b).blend(toward, amount).to_color(),
        other => other,
    }
}

/// Tint the background of every cell in `area`
pub fn tint_area(buf: &mut Buffer, area: Rect, toward: Rgb, amount: f32) {
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = buf.get_mut(x, y);
            if let Some(bg) = cell.style().bg {
                cell.set_bg(tint(bg, toward, amount));
            }
        }
    }
}

/// Pull both colors of every cell in `area` toward `toward`
pub fn dim(buf: &mut Buffer, area: Rect, toward: Rgb, amount: f32) {
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = buf.get_mut(x, y);
            let style = cell.style();
            if let Some(fg) = style.fg {
                cell.set_fg(tint(fg, toward, amount));
            }
            if let Some(bg) = style.bg {
                cell.set_bg(tint(bg, toward, amount));
            }
        }
    }
}

/// One-cell drop shadow to the right of and below `rect`
pub fn draw_shadow(buf: &mut Buffer, rect: Rect, bounds: Rect, shadow: &Shadow, opacity: f32) {
    if shadow.elevation == 0 || rect.is_empty() {
        return;
    }
    let amount = shadow.opacity * opacity;
    let right = Rect::new(rect.right(), rect.y + 1, 1, rect.height.saturating_sub(1));
    let below = Rect::new(rect.x + 1, rect.bottom(), rect.width, 1);
    tint_area(buf, right.intersection(bounds), shadow.color, amount);
    tint_area(buf, below.intersection(bounds), shadow.color, amount);
}

/// Resolved colors and padding of a button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonLook {
    pub fill: Option<Rgb>,
    pub border: Option<Rgb>,
    pub text: Rgb,
    pub pad_cols: u16,
}

impl ButtonLook {
    pub fn resolve(variant: ButtonVariant, size: ButtonSize) -> Self {
        let style = ButtonStyle::resolve(variant, size);
        Self {
            fill: style.background,
            border: style.border.map(|b| b.color),
            text: style.text.color,
            pad_cols: px_to_cols(style.padding_horizontal),
        }
    }

    /// Outline drawn in a single color, for dark sections
    pub fn outlined(mut self, color: Rgb) -> Self {
        self.fill = None;
        self.border = Some(color);
        self.text = color;
        self
    }

    /// Full width of a button showing `label`
    pub fn width(&self, label: &str) -> u16 {
        label.width() as u16 + 2 * self.pad_cols + 2
    }
}

/// Animated state of a button for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonFrame {
    pub opacity: f32,
    pub scale: f32,
    pub shift: i32,
    pub focused: bool,
}

/// Draw a button centered in `slot`. Returns the drawn rectangle, before
/// clipping, or `None` when fully transparent.
pub fn draw_button(
    buf: &mut Buffer,
    slot: Rect,
    bounds: Rect,
    label: &str,
    look: &ButtonLook,
    state: ButtonFrame,
    theme: &Theme,
) -> Option<Rect> {
    if state.opacity <= 0.0 || slot.is_empty() {
        return None;
    }
    let backdrop = buf
        .get(slot.x, slot.y)
        .style()
        .bg
        .and_then(|c| match c {
            Color::Rgb(r, g, b) => Some(Rgb(r, g, b)),
            _ => None,
        })
        .unwrap_or(theme.colors().page);

    let label_width = label.width() as u16;
    let mut rect = scaled(slot, look.width(label), state.scale);
    if rect.width < label_width + 2 {
        rect = scaled(slot, label_width + 2, 1.0);
    }

    let fill = look.fill.map(|c| fade(c, backdrop, state.opacity)).unwrap_or(backdrop);
    let text = fade(look.text, backdrop, state.opacity);
    let body = Style::default().bg(fill.to_color());
    let mut label_style = body.fg(text.to_color()).add_modifier(Modifier::BOLD);
    if state.focused {
        label_style = label_style.add_modifier(Modifier::UNDERLINED);
    }
    let edge = look
        .border
        .map(|c| body.fg(fade(c, backdrop, state.opacity).to_color()));

    let mid = slot.height / 2;
    let last = slot.height.saturating_sub(1);
    for r in 0..slot.height {
        let Some(y) = row_in(bounds, slot.y as i32 + state.shift + r as i32) else {
            continue;
        };
        buf.set_style(Rect::new(rect.x, y, rect.width, 1), body);

        if let Some(edge) = edge {
            let inner = "─".repeat(rect.width.saturating_sub(2) as usize);
            let line = match r {
                0 => format!("╭{inner}╮"),
                r if r == last => format!("╰{inner}╯"),
                _ => String::new(),
            };
            if line.is_empty() {
                buf.set_string(rect.x, y, "│", edge);
                buf.set_string(rect.right().saturating_sub(1), y, "│", edge);
            } else {
                buf.set_stringn(rect.x, y, &line, rect.width as usize, edge);
            }
        }

        if r == mid {
            let shown = label_width.min(rect.width.saturating_sub(2));
            let x = rect.x + (rect.width - shown) / 2;
            buf.set_stringn(x, y, label, shown as usize, label_style);

            if state.focused {
                let marker = theme.ratatui_style(Element::Focus).bg(backdrop.to_color());
                if rect.x >= bounds.x + 2 {
                    buf.set_string(rect.x - 2, y, "▶", marker);
                }
                if rect.right() + 2 <= bounds.right() {
                    buf.set_string(rect.right() + 1, y, "◀", marker);
                }
            }
        }
    }

    Some(Rect {
        y: (slot.y as i32 + state.shift).max(0) as u16,
        ..rect
    })
}
