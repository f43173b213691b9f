//! Fixed navigation header.

use folio_core::{CellMetrics, Rgb, Route};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
};

/// Vertical padding around the header (py-9).
const HEADER_PADDING_Y_PX: f32 = 36.0;
/// Vertical padding around the nav row (py-3).
const NAV_PADDING_Y_PX: f32 = 12.0;
/// Space between the brand link and the first nav link (mr-32).
const BRAND_MARGIN_PX: f32 = 128.0;
/// Space between nav links (space-x-8).
const LINK_GAP_PX: f32 = 32.0;
/// Duration of the hover colour transition.
const TRANSITION_MS: f32 = 200.0;

const BRAND_COLOR: Rgb = Rgb::WHITE;
const BRAND_HOVER_COLOR: Rgb = Rgb::new(209, 213, 219);
/// White at 90% opacity over the black page.
const LINK_COLOR: Rgb = Rgb::grey(230);
const LINK_HOVER_COLOR: Rgb = Rgb::WHITE;

/// Something in the header that can be clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Brand,
    Link(Route),
}

impl NavTarget {
    /// Page the target navigates to.
    pub fn route(self) -> Route {
        match self {
            NavTarget::Brand => Route::About,
            NavTarget::Link(route) => route,
        }
    }
}

#[derive(Debug, Clone)]
struct NavItem {
    target: NavTarget,
    label: String,
    color: Rgb,
    hover_color: Rgb,
    bold: bool,
    /// Progress of the hover transition (0.0 - 1.0).
    highlight: f32,
}

impl NavItem {
    fn width(&self) -> u16 {
        u16::try_from(Span::raw(self.label.as_str()).width()).unwrap_or(u16::MAX)
    }

    fn current_color(&self) -> Rgb {
        self.color.lerp(self.hover_color, self.highlight)
    }
}

/// Navigation header with a brand link and one link per route.
#[derive(Debug, Clone)]
pub struct Header {
    items: Vec<NavItem>,
    hovered: Option<usize>,
    focused: Option<usize>,
    last_tick_ms: Option<u64>,
}

impl Header {
    pub fn new(owner: &str) -> Self {
        let brand = NavItem {
            target: NavTarget::Brand,
            label: owner.to_string(),
            color: BRAND_COLOR,
            hover_color: BRAND_HOVER_COLOR,
            bold: true,
            highlight: 0.0,
        };
        let links = Route::ALL.into_iter().map(|route| NavItem {
            target: NavTarget::Link(route),
            label: route.label().to_string(),
            color: LINK_COLOR,
            hover_color: LINK_HOVER_COLOR,
            bold: false,
            highlight: 0.0,
        });

        Self {
            items: std::iter::once(brand).chain(links).collect(),
            hovered: None,
            focused: None,
            last_tick_ms: None,
        }
    }

    /// Total header height in rows.
    pub fn height(metrics: &CellMetrics) -> u16 {
        let outer = metrics.px_to_rows(HEADER_PADDING_Y_PX);
        let inner = metrics.px_to_rows(NAV_PADDING_Y_PX);
        2 * outer + 2 * inner + 1
    }

    /// Header strip at the top of `area`.
    pub fn area(area: Rect, metrics: &CellMetrics) -> Rect {
        Rect {
            height: Self::height(metrics).min(area.height),
            ..area
        }
    }

    /// Screen rectangles of each item, brand first, clipped to `area`.
    fn item_rects(&self, area: Rect, metrics: &CellMetrics) -> Vec<Rect> {
        let row_offset =
            metrics.px_to_rows(HEADER_PADDING_Y_PX) + metrics.px_to_rows(NAV_PADDING_Y_PX);
        if row_offset >= area.height {
            return Vec::new();
        }
        let row = area.y + row_offset;
        let brand_margin = metrics.px_to_cols(BRAND_MARGIN_PX);
        let gap = metrics.px_to_cols(LINK_GAP_PX);

        let widths: Vec<u16> = self.items.iter().map(NavItem::width).collect();
        let gaps = u16::try_from(widths.len().saturating_sub(2)).unwrap_or(u16::MAX);
        let total = widths
            .iter()
            .fold(0u16, |acc, &w| acc.saturating_add(w))
            .saturating_add(brand_margin)
            .saturating_add(gap.saturating_mul(gaps));

        let mut x = area.x + area.width.saturating_sub(total) / 2;
        let right = area.x + area.width;
        widths
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                let start = x.min(right);
                let rect = Rect::new(start, row, w.min(right - start), 1);
                x = x.saturating_add(w).saturating_add(if i == 0 { brand_margin } else { gap });
                rect
            })
            .collect()
    }

    /// Item under the given cell, if any.
    pub fn hit_test(
        &self,
        area: Rect,
        metrics: &CellMetrics,
        column: u16,
        row: u16,
    ) -> Option<NavTarget> {
        self.index_at(area, metrics, column, row)
            .map(|i| self.items[i].target)
    }

    fn index_at(&self, area: Rect, metrics: &CellMetrics, column: u16, row: u16) -> Option<usize> {
        self.item_rects(area, metrics).iter().position(|r| {
            r.width > 0 && row == r.y && column >= r.x && column < r.x + r.width
        })
    }

    /// Update hover state from a pointer position.
    pub fn on_pointer(&mut self, area: Rect, metrics: &CellMetrics, column: u16, row: u16) {
        self.hovered = self.index_at(area, metrics, column, row);
    }

    pub fn hovered(&self) -> Option<NavTarget> {
        self.hovered.map(|i| self.items[i].target)
    }

    pub fn focused(&self) -> Option<NavTarget> {
        self.focused.map(|i| self.items[i].target)
    }

    /// Move keyboard focus to the next item, wrapping around.
    pub fn focus_next(&mut self) {
        let len = self.items.len();
        self.focused = Some(self.focused.map_or(0, |i| (i + 1) % len));
    }

    /// Move keyboard focus to the previous item, wrapping around.
    pub fn focus_prev(&mut self) {
        let len = self.items.len();
        self.focused = Some(self.focused.map_or(len - 1, |i| (i + len - 1) % len));
    }

    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    /// Advance hover transitions to `now_ms`.
    pub fn tick(&mut self, now_ms: u64) {
        let delta_ms = self
            .last_tick_ms
            .map_or(0, |last| now_ms.saturating_sub(last));
        self.last_tick_ms = Some(now_ms);
        let step = delta_ms as f32 / TRANSITION_MS;

        for (i, item) in self.items.iter_mut().enumerate() {
            let active = self.hovered == Some(i) || self.focused == Some(i);
            item.highlight = if active {
                (item.highlight + step).min(1.0)
            } else {
                (item.highlight - step).max(0.0)
            };
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, metrics: &CellMetrics) {
        for (item, rect) in self.items.iter().zip(self.item_rects(area, metrics)) {
            if rect.width == 0 {
                continue;
            }
            let mut style = Style::new().fg(item.current_color().into());
            if item.bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            frame.render_widget(Span::styled(item.label.as_str(), style), rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    const OWNER: &str = "mustafa enes öztürk";

    fn area() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn test_height_from_padding() {
        // 36px -> 2 rows, 12px -> 1 row.
        assert_eq!(Header::height(&CellMetrics::default()), 7);
    }

    #[test]
    fn test_items_are_centred_with_spacing() {
        let header = Header::new(OWNER);
        let rects = header.item_rects(area(), &CellMetrics::default());
        // 19 + 16 + 5 + 4 + 8 + 4 + 4 = 60 columns, so (80 - 60) / 2 = 10.
        assert_eq!(rects[0], Rect::new(10, 3, 19, 1));
        assert_eq!(rects[1], Rect::new(45, 3, 5, 1));
        assert_eq!(rects[2], Rect::new(54, 3, 8, 1));
        assert_eq!(rects[3], Rect::new(66, 3, 4, 1));
    }

    #[test]
    fn test_hit_test() {
        let header = Header::new(OWNER);
        let m = CellMetrics::default();
        assert_eq!(header.hit_test(area(), &m, 10, 3), Some(NavTarget::Brand));
        assert_eq!(
            header.hit_test(area(), &m, 57, 3),
            Some(NavTarget::Link(Route::Projects))
        );
        assert_eq!(
            header.hit_test(area(), &m, 69, 3),
            Some(NavTarget::Link(Route::Writing))
        );
        assert_eq!(header.hit_test(area(), &m, 40, 3), None);
        assert_eq!(header.hit_test(area(), &m, 57, 4), None);
    }

    #[test]
    fn test_brand_routes_home() {
        assert_eq!(NavTarget::Brand.route(), Route::About);
        assert_eq!(NavTarget::Link(Route::Writing).route(), Route::Writing);
    }

    #[test]
    fn test_focus_wraps() {
        let mut header = Header::new(OWNER);
        header.focus_prev();
        assert_eq!(header.focused(), Some(NavTarget::Link(Route::Writing)));
        header.focus_next();
        assert_eq!(header.focused(), Some(NavTarget::Brand));
        header.focus_next();
        assert_eq!(header.focused(), Some(NavTarget::Link(Route::About)));
        header.clear_focus();
        assert_eq!(header.focused(), None);
    }

    #[test]
    fn test_hover_transition_takes_200ms() {
        let mut header = Header::new(OWNER);
        let m = CellMetrics::default();
        header.tick(0);
        header.on_pointer(area(), &m, 46, 3);
        assert_eq!(header.hovered(), Some(NavTarget::Link(Route::About)));

        header.tick(100);
        assert!((header.items[1].highlight - 0.5).abs() < 1e-6);
        header.tick(250);
        assert_eq!(header.items[1].highlight, 1.0);
        assert_eq!(header.items[1].current_color(), LINK_HOVER_COLOR);

        header.on_pointer(area(), &m, 0, 0);
        header.tick(350);
        assert!((header.items[1].highlight - 0.5).abs() < 1e-6);
        header.tick(1000);
        assert_eq!(header.items[1].current_color(), LINK_COLOR);
    }

    #[test]
    fn test_render_writes_labels() {
        let header = Header::new(OWNER);
        let m = CellMetrics::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 8)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                header.render(frame, area, &m);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..80).map(|x| buffer[(x, 3)].symbol().to_string()).collect();
        assert!(row.contains("mustafa enes öztürk"));
        assert!(row.contains("about"));
        assert!(row.contains("projects"));
        assert!(row.contains("blog"));
        assert!(buffer[(10, 3)].modifier.contains(Modifier::BOLD));
        assert!(!buffer[(45, 3)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_narrow_area_clips_items() {
        let header = Header::new(OWNER);
        let rects = header.item_rects(Rect::new(0, 0, 30, 10), &CellMetrics::default());
        assert!(rects.iter().all(|r| r.x + r.width <= 30));
    }

    #[test]
    fn test_overlong_owner_saturates() {
        let header = Header::new(&"x".repeat(70_000));
        let area = area();
        let rects = header.item_rects(area, &CellMetrics::default());
        assert_eq!(rects[0], Rect::new(0, 3, 80, 1));
        assert!(rects[1..].iter().all(|r| r.width == 0));
        assert_eq!(
            header.hit_test(area, &CellMetrics::default(), 5, 3),
            Some(NavTarget::Brand)
        );
    }
}
