//! Root page layout: background, centred content and the fixed header.

use folio_background::BackgroundState;
use folio_core::CellMetrics;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use crate::header::Header;
use crate::pages::Page;

/// Maximum content width (max-w-4xl).
const CONTENT_MAX_WIDTH_PX: f32 = 896.0;
/// Padding around the content container (p-8).
const CONTENT_PADDING_PX: f32 = 32.0;

/// Screen regions of the root layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootLayout {
    /// Full area, covered by the background.
    pub background: Rect,
    pub header: Rect,
    pub content: Rect,
}

impl RootLayout {
    /// Split `area` for a page whose body needs `content_height` rows at
    /// the content width returned by [`RootLayout::content_width`].
    pub fn compute(area: Rect, metrics: &CellMetrics, content_height: u16) -> Self {
        let pad_x = metrics.px_to_cols(CONTENT_PADDING_PX);
        let pad_y = metrics.px_to_rows(CONTENT_PADDING_PX);
        let inner = Rect {
            x: area.x + pad_x.min(area.width / 2),
            y: area.y + pad_y.min(area.height / 2),
            width: area.width.saturating_sub(2 * pad_x),
            height: area.height.saturating_sub(2 * pad_y),
        };

        let width = Self::content_width(area, metrics);
        let [_, column, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .areas(inner);
        let [_, content, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(content_height.min(inner.height)),
            Constraint::Fill(1),
        ])
        .areas(column);

        Self {
            background: area,
            header: Header::area(area, metrics),
            content,
        }
    }

    /// Width available to page content inside `area`.
    pub fn content_width(area: Rect, metrics: &CellMetrics) -> u16 {
        let pad_x = metrics.px_to_cols(CONTENT_PADDING_PX);
        area.width
            .saturating_sub(2 * pad_x)
            .min(metrics.px_to_cols(CONTENT_MAX_WIDTH_PX))
    }
}

/// Draw one frame of the page: background first, then the page content,
/// then the header on top.
pub fn render_root(
    frame: &mut Frame,
    background: &mut BackgroundState,
    header: &Header,
    page: &Page,
    metrics: &CellMetrics,
) -> RootLayout {
    let area = frame.area();
    let width = RootLayout::content_width(area, metrics);
    let layout = RootLayout::compute(area, metrics, page.height(width));

    background.render(frame, layout.background);
    page.render(frame, layout.content);
    header.render(frame, layout.header, metrics);
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_config::PagesConfig;
    use folio_core::{BackgroundSettings, Route};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_content_is_centred_and_capped() {
        let m = CellMetrics::default();
        let layout = RootLayout::compute(Rect::new(0, 0, 200, 50), &m, 6);
        // 112 columns max width, centred in 200 - 2 * 4.
        assert_eq!(layout.content.width, 112);
        assert_eq!(layout.content.x, 4 + (192 - 112) / 2);
        assert_eq!(layout.content.height, 6);
        assert_eq!(layout.content.y, 2 + (46 - 6) / 2);
        assert_eq!(layout.header, Rect::new(0, 0, 200, 7));
        assert_eq!(layout.background, Rect::new(0, 0, 200, 50));
    }

    #[test]
    fn test_narrow_terminal_uses_padded_width() {
        let m = CellMetrics::default();
        assert_eq!(RootLayout::content_width(Rect::new(0, 0, 60, 20), &m), 52);
        let layout = RootLayout::compute(Rect::new(0, 0, 60, 20), &m, 100);
        assert_eq!(layout.content.width, 52);
        assert_eq!(layout.content.height, 16);
    }

    #[test]
    fn test_render_root_stacks_layers() {
        let m = CellMetrics::default();
        let mut settings = BackgroundSettings::default();
        settings.noise.enabled = false;
        settings.particles.enabled = false;
        let mut background = BackgroundState::new(settings, m, 1);
        let header = Header::new("mustafa enes öztürk");
        let page = Page::for_route(Route::About, &PagesConfig::default());

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut layout = None;
        terminal
            .draw(|frame| layout = Some(render_root(frame, &mut background, &header, &page, &m)))
            .unwrap();
        let layout = layout.unwrap();

        let buffer = terminal.backend().buffer();
        // Grid under everything.
        assert_eq!(buffer[(0, 0)].symbol(), "┼");
        // Header text on row 3.
        let header_row: String = (0..100).map(|x| buffer[(x, 3)].symbol().to_string()).collect();
        assert!(header_row.contains("projects"));
        // Page title at the top-left of the content area.
        let title: String = (0..5)
            .map(|i| buffer[(layout.content.x + i, layout.content.y)].symbol().to_string())
            .collect();
        assert_eq!(title, "about");
    }
}
