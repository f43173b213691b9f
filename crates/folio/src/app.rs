//! Application state, frame loop and input handling.

use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use folio_background::BackgroundState;
use folio_config::Config;
use folio_core::{CellMetrics, Route};
use ratatui::{DefaultTerminal, Frame, layout::Rect};

use crate::header::Header;
use crate::layout::render_root;
use crate::pages::Page;

/// Start-up options that come from the command line rather than config.
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub seed: u64,
    pub route: Route,
    pub show_background: bool,
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    metrics: CellMetrics,
    frame_interval: Duration,
    background: BackgroundState,
    header: Header,
    page: Page,
    /// Current value of the particle refresh toggle.
    particle_refresh: bool,
    /// Area of the last drawn frame, used for pointer hit testing.
    last_area: Rect,
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config, options: AppOptions) -> Self {
        let metrics = config.display.cell;
        let mut background =
            BackgroundState::new(config.background.clone(), metrics, options.seed);
        background.set_enabled(options.show_background);

        Self {
            running: false,
            metrics,
            frame_interval: Duration::from_millis(config.display.frame_interval_ms.max(1)),
            background,
            header: Header::new(&config.site.owner),
            page: Page::for_route(options.route, &config.pages),
            particle_refresh: config.background.particles.refresh,
            last_area: Rect::default(),
            started: Instant::now(),
            config,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            let frame_start = Instant::now();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events(frame_start + self.frame_interval)?;
        }
        tracing::info!(path = self.route().path(), "exiting");
        Ok(())
    }

    pub fn route(&self) -> Route {
        self.page.route
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if area != self.last_area {
            tracing::debug!(width = area.width, height = area.height, "viewport changed");
            self.last_area = area;
        }
        self.header.tick(self.started.elapsed().as_millis() as u64);
        render_root(
            frame,
            &mut self.background,
            &self.header,
            &self.page,
            &self.metrics,
        );
    }

    /// Reads crossterm events until `deadline`, the start of the next frame.
    fn handle_crossterm_events(&mut self, deadline: Instant) -> color_eyre::Result<()> {
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if timeout.is_zero() || !event::poll(timeout)? {
                return Ok(());
            }
            self.on_event(event::read()?);
            if !self.running {
                return Ok(());
            }
        }
    }

    fn on_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Mouse(mouse) => self.on_mouse_event(mouse),
            // Resizes included: layers pick up the new size on the next frame.
            _ => {}
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Tab | KeyCode::Right) => self.header.focus_next(),
            (_, KeyCode::BackTab | KeyCode::Left) => self.header.focus_prev(),
            (_, KeyCode::Enter) => {
                if let Some(target) = self.header.focused().or(self.header.hovered()) {
                    self.navigate(target.route());
                }
            }
            (_, KeyCode::Char(c @ '1'..='3')) => {
                let index = c as usize - '1' as usize;
                self.navigate(Route::ALL[index]);
            }
            (_, KeyCode::Char('r')) => self.toggle_particle_refresh(),
            (_, KeyCode::Char('b')) => self.toggle_background(),
            _ => {}
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.header.clear_focus();
                self.header
                    .on_pointer(self.last_area, &self.metrics, column, row);
                self.background.on_pointer(column, row);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(target) =
                    self.header
                        .hit_test(self.last_area, &self.metrics, column, row)
                {
                    self.navigate(target.route());
                }
            }
            _ => {}
        }
    }

    fn navigate(&mut self, route: Route) {
        if route != self.page.route {
            tracing::info!(path = route.path(), "navigate");
            self.page = Page::for_route(route, &self.config.pages);
        }
    }

    /// Flip the particle refresh toggle, which respawns the field.
    fn toggle_particle_refresh(&mut self) {
        self.particle_refresh = !self.particle_refresh;
        self.background.set_particle_refresh(self.particle_refresh);
    }

    fn toggle_background(&mut self) {
        let enabled = !self.background.is_enabled();
        tracing::debug!(enabled, "background toggled");
        self.background.set_enabled(enabled);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
