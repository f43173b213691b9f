//! Page content rendered inside the root layout.

use folio_config::PagesConfig;
use folio_core::Route;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
};

const ABOUT_TEXT: &str = "hi, welcome to my corner of the terminal.\n\n\
    use the links above, or press 1-3, to look around.";
const PROJECTS_TEXT: &str = "things i have built and am building.\n\n\
    nothing listed yet.";
const WRITING_TEXT: &str = "notes and longer posts.\n\n\
    nothing published yet.";

/// A page: a heading and a body.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub route: Route,
    pub title: &'static str,
    pub body: String,
}

impl Page {
    /// Build the page for `route`, preferring configured text.
    pub fn for_route(route: Route, pages: &PagesConfig) -> Self {
        let (title, configured, builtin) = match route {
            Route::About => ("about", &pages.about, ABOUT_TEXT),
            Route::Projects => ("projects", &pages.projects, PROJECTS_TEXT),
            Route::Writing => ("blog", &pages.writing, WRITING_TEXT),
        };
        Self {
            route,
            title,
            body: configured.clone().unwrap_or_else(|| builtin.to_string()),
        }
    }

    fn lines(&self) -> Vec<Line<'_>> {
        let mut lines = vec![
            Line::styled(self.title, Style::new().fg(Color::White).add_modifier(Modifier::BOLD)),
            Line::raw(""),
        ];
        lines.extend(
            self.body
                .lines()
                .map(|l| Line::styled(l, Style::new().fg(Color::Gray))),
        );
        lines
    }

    fn paragraph(&self) -> Paragraph<'_> {
        Paragraph::new(self.lines()).wrap(Wrap { trim: true })
    }

    /// Rows needed to show the page at `width`, wrapped the same way
    /// [`Page::render`] wraps it.
    pub fn height(&self, width: u16) -> u16 {
        let rows = self.paragraph().line_count(width.max(1));
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.paragraph(), area);
    }
}
