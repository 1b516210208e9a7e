pub mod app;
pub mod background;
pub mod cta;
pub mod dialog;
pub mod features;
pub mod footer;
pub mod header;
pub mod welcome;
pub mod widgets;

use crate::layout::PageLayout;
use medgo_core::landing::LandingPage;
use medgo_core::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, Frame};

/// Draw the whole page off-screen, then copy the rows visible at `scroll`
/// into `area` and lay the floating circles over the viewport
pub fn render_landing(
    frame: &mut Frame,
    area: Rect,
    page: &LandingPage,
    layout: &PageLayout,
    scroll: u16,
    theme: &Theme,
) {
    let canvas_area = Rect::new(0, 0, layout.width, layout.height);
    let mut canvas = Buffer::empty(canvas_area);
    canvas.set_style(canvas_area, theme.page_style());
    header::render_header(&mut canvas, layout, page, theme);
    features::render_features(&mut canvas, layout, page, theme);
    cta::render_cta(&mut canvas, layout, page, theme);

    let buf = frame.buffer_mut();
    buf.set_style(area, theme.page_style());
    let width = area.width.min(layout.width);
    for row in 0..area.height {
        let source = scroll as u32 + row as u32;
        if source >= layout.height as u32 {
            break;
        }
        for col in 0..width {
            *buf.get_mut(area.x + col, area.y + row) = canvas.get(col, source as u16).clone();
        }
    }

    background::render_floating(buf, area, &page.background);
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf.get(x, y).symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
