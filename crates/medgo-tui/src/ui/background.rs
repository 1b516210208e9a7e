//! Decorative background: header art and the floating circles behind the page

use super::widgets::{offset_rows, tint_area};
use medgo_core::motion::Float;
use medgo_core::theme::{fade, Element, Theme};
use medgo_core::tokens::{px_to_cols, px_to_rows, tokens, Rgb};
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use std::f32::consts::TAU;

/// Opacity of the floating circles
const CIRCLE_OPACITY: f32 = 0.1;

/// (x as fraction of width, y in px, glyph, opacity)
const HEADER_ART: [(f32, f32, &str, f32); 9] = [
    (0.85, 100.0, "●", 0.35),
    (0.15, 160.0, "●", 0.35),
    (0.70, 180.0, "⬬", 0.35),
    (0.90, 86.0, "✚", 0.4),
    (0.25, 220.0, "•", 0.3),
    (0.75, 60.0, "●", 0.2),
    (0.10, 50.0, "·", 0.4),
    (0.20, 35.0, "·", 0.3),
    (0.80, 45.0, "•", 0.3),
];

const WAVE: [&str; 4] = ["▁", "▂", "▃", "▄"];

/// Scattered dots, a medical cross and waves over the teal header
pub fn render_header_art(buf: &mut Buffer, area: Rect, theme: &Theme) {
    let teal = theme.bg(Element::Header);
    let orange = tokens().colors.primary.orange;

    // faint wave near the top
    let crest = area.y + 1;
    if crest < area.bottom() {
        let style = Style::default()
            .fg(fade(orange, teal, 0.2).to_color())
            .bg(teal.to_color());
        for x in area.left()..area.right() {
            let phase = (x - area.x) as f32 / area.width.max(1) as f32;
            let glyph = if (phase * TAU * 2.0).sin() > 0.0 { "∼" } else { " " };
            buf.set_string(x, crest, glyph, style);
        }
    }

    for (fx, py, glyph, opacity) in HEADER_ART {
        let x = area.x + (area.width as f32 * fx) as u16;
        let y = area.y + px_to_rows(py);
        if x < area.right() && y < area.bottom() {
            let style = Style::default()
                .fg(fade(orange, teal, opacity).to_color())
                .bg(teal.to_color());
            buf.set_string(x, y, glyph, style);
        }
    }

    // bottom wave easing into the next section
    if area.height > 0 {
        let next = theme.bg(Element::Section);
        let style = Style::default().fg(next.to_color()).bg(teal.to_color());
        let y = area.bottom() - 1;
        for x in area.left()..area.right() {
            let phase = (x - area.x) as f32 / area.width.max(1) as f32;
            let level = ((phase * TAU).cos() + 1.0) / 2.0 * (WAVE.len() - 1) as f32;
            buf.set_string(x, y, WAVE[level.round() as usize], style);
        }
    }
}

/// Placement of a floating circle within the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
struct Circle {
    size_px: f32,
    color: Rgb,
    anchor: Anchor,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Anchor {
    TopRight { top_px: f32, right_px: f32 },
    BottomLeft { bottom_px: f32, left_px: f32 },
    /// Fractions of the viewport
    Relative { top: f32, left: f32 },
}

fn circles() -> [Circle; 3] {
    let c = &tokens().colors.primary;
    [
        Circle {
            size_px: 120.0,
            color: c.teal,
            anchor: Anchor::TopRight {
                top_px: 100.0,
                right_px: 50.0,
            },
        },
        Circle {
            size_px: 80.0,
            color: c.orange,
            anchor: Anchor::BottomLeft {
                bottom_px: 200.0,
                left_px: 30.0,
            },
        },
        Circle {
            size_px: 60.0,
            color: c.teal,
            anchor: Anchor::Relative {
                top: 0.5,
                left: 0.3,
            },
        },
    ]
}

impl Circle {
    fn bounds(&self, viewport: Rect, lift: i32) -> Rect {
        let w = px_to_cols(self.size_px).min(viewport.width);
        let h = px_to_rows(self.size_px).min(viewport.height);
        let (x, y) = match self.anchor {
            Anchor::TopRight { top_px, right_px } => (
                viewport.width.saturating_sub(w + px_to_cols(right_px)),
                px_to_rows(top_px),
            ),
            Anchor::BottomLeft { bottom_px, left_px } => (
                px_to_cols(left_px),
                viewport.height.saturating_sub(h + px_to_rows(bottom_px)),
            ),
            Anchor::Relative { top, left } => (
                (viewport.width as f32 * left) as u16,
                (viewport.height as f32 * top) as u16,
            ),
        };
        let y = (y as i32 + lift).max(0) as u16;
        Rect::new(viewport.x + x, viewport.y + y, w, h).intersection(viewport)
    }
}

/// Tint the cells covered by each floating circle, which bob with `floats`
pub fn render_floating(buf: &mut Buffer, viewport: Rect, floats: &[Float; 3]) {
    for (circle, float) in circles().iter().zip(floats) {
        let rect = circle.bounds(viewport, offset_rows(float.offset()));
        if rect.is_empty() {
            continue;
        }
        let (cx, cy) = (
            rect.x as f32 + rect.width as f32 / 2.0,
            rect.y as f32 + rect.height as f32 / 2.0,
        );
        let (rx, ry) = (rect.width as f32 / 2.0, rect.height as f32 / 2.0);
        for y in rect.top()..rect.bottom() {
            for x in rect.left()..rect.right() {
                let dx = (x as f32 + 0.5 - cx) / rx;
                let dy = (y as f32 + 0.5 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    tint_area(buf, Rect::new(x, y, 1, 1), circle.color, CIRCLE_OPACITY);
                }
            }
        }
    }
}
