//! Application state and event loop

use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseEventKind,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
    DefaultTerminal, Frame,
};
use tracing::{info, warn};

use crate::services::{ProfileSource, RhythmBinner};

use super::theme::Theme;
use super::widgets::{
    heatmap::HoverState,
    help::HelpPopup,
    layout::GridLayout,
    panel::{PanelContent, RhythmPanel},
    spinner::Spinner,
};

/// Footer key hints
const FOOTER_HINT: &str = "? help · r reload · q quit";

/// Application state
pub enum AppState {
    /// Loading data with spinner animation
    Loading { spinner_frame: usize },
    /// Ready with loaded data
    Ready { data: Box<AppData> },
    /// Error state
    Error { message: String },
}

/// Loaded application data
pub struct AppData {
    pub content: PanelContent,
}

/// Main application
pub struct App {
    state: AppState,
    should_quit: bool,
    show_help: bool,
    hover: HoverState,
    layout: GridLayout,
    theme: Theme,
    source_label: String,
    reload_requested: bool,
    /// Frame area from the last draw, for mouse hit testing
    last_area: Rect,
}

impl App {
    /// Create a new app in loading state
    pub fn new(layout: GridLayout, theme: Theme, source_label: String) -> Self {
        Self {
            state: AppState::Loading { spinner_frame: 0 },
            should_quit: false,
            show_help: false,
            hover: HoverState::default(),
            layout,
            theme,
            source_label,
            reload_requested: false,
            last_area: Rect::default(),
        }
    }

    /// Area the rhythm panel occupies: one blank row on top, footer below
    fn panel_area(area: Rect) -> Rect {
        Rect {
            x: area.x,
            y: area.y + 1.min(area.height),
            width: area.width,
            height: area.height.saturating_sub(2),
        }
    }

    /// Grid cell under a terminal position, if any
    fn cell_at_position(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        let grid_area = RhythmPanel::grid_area(Self::panel_area(self.last_area), &self.layout);
        let x = column.checked_sub(grid_area.x)?;
        let y = row.checked_sub(grid_area.y)?;
        if x >= grid_area.width || y >= grid_area.height {
            return None;
        }
        self.layout.cell_at(x, y)
    }

    /// Handle keyboard and mouse events
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
                {
                    self.should_quit = true;
                    return;
                }
                if self.show_help {
                    match key.code {
                        KeyCode::Char('?') | KeyCode::Esc => self.show_help = false,
                        KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
                        _ => {}
                    }
                    return;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') => {
                        self.should_quit = true;
                    }
                    KeyCode::Esc => {
                        if !self.hover.leave() {
                            self.should_quit = true;
                        }
                    }
                    KeyCode::Char('?') => {
                        self.show_help = true;
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        self.request_reload();
                    }
                    KeyCode::Up | KeyCode::Char('k') => self.step_hover(-1, 0),
                    KeyCode::Down | KeyCode::Char('j') => self.step_hover(1, 0),
                    KeyCode::Left | KeyCode::Char('h') => self.step_hover(0, -1),
                    KeyCode::Right | KeyCode::Char('l') => self.step_hover(0, 1),
                    _ => {}
                }
            }
            Event::Mouse(mouse) => {
                if matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
                    self.pointer_at(mouse.column, mouse.row);
                }
            }
            _ => {}
        }
    }

    /// Pointer moved: enter the cell under it, or leave when off-grid
    fn pointer_at(&mut self, column: u16, row: u16) {
        let target = self.cell_at_position(column, row);
        let AppState::Ready { data } = &self.state else {
            return;
        };
        let Some(binned) = data.content.binned() else {
            return;
        };
        match target {
            Some((day, hour)) => {
                self.hover.enter(&binned.grid, day, hour);
            }
            None => {
                self.hover.leave();
            }
        }
    }

    fn step_hover(&mut self, d_day: i32, d_hour: i32) {
        if let AppState::Ready { data } = &self.state {
            if let Some(binned) = data.content.binned() {
                self.hover.step(&binned.grid, d_day, d_hour);
            }
        }
    }

    /// Drop the current grid and ask the loop to fetch again
    fn request_reload(&mut self) {
        if matches!(self.state, AppState::Loading { .. }) {
            return;
        }
        self.reload_requested = true;
        self.hover = HoverState::default();
        self.state = AppState::Loading { spinner_frame: 0 };
    }

    /// Take a pending reload request
    fn take_reload_request(&mut self) -> bool {
        std::mem::take(&mut self.reload_requested)
    }

    /// Apply data loading result to app state. A new grid always starts
    /// without hover.
    fn apply_data_result(&mut self, result: Result<PanelContent, String>) {
        self.hover = HoverState::default();
        match result {
            Ok(content) => {
                self.state = AppState::Ready {
                    data: Box::new(AppData { content }),
                }
            }
            Err(message) => self.state = AppState::Error { message },
        }
    }

    /// Update spinner animation
    pub fn tick(&mut self) {
        if let AppState::Loading { spinner_frame } = &self.state {
            self.state = AppState::Loading {
                spinner_frame: Spinner::next_frame(*spinner_frame),
            };
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Draw the application
    pub fn draw(&mut self, frame: &mut Frame) {
        self.last_area = frame.area();
        frame.render_widget(&*self, frame.area());
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match &self.state {
            AppState::Loading { spinner_frame } => {
                Spinner::new(*spinner_frame, &self.source_label, self.theme).render(area, buf);
            }
            AppState::Ready { data } => {
                RhythmPanel::new(&data.content, self.layout, self.theme)
                    .with_source(&self.source_label)
                    .with_hover(self.hover)
                    .render(App::panel_area(area), buf);

                if area.height > 0 {
                    let footer: String = FOOTER_HINT.chars().take(area.width as usize).collect();
                    buf.set_string(
                        area.x,
                        area.y + area.height - 1,
                        footer,
                        Style::default().fg(self.theme.muted()),
                    );
                }

                if self.show_help {
                    let popup_area = HelpPopup::centered_area(area);
                    HelpPopup::new(self.theme).render(popup_area, buf);
                }
            }
            AppState::Error { message } => {
                let y = area.y + area.height / 2;
                let text = format!("Error: {}", message);
                let x = area.x + (area.width.saturating_sub(text.chars().count() as u16)) / 2;
                buf.set_string(x, y, &text, Style::default().fg(self.theme.error()));
            }
        }
    }
}

/// Load, extract and bin a payload (runs on the loader thread)
pub fn load_content(source: &ProfileSource) -> Result<PanelContent, String> {
    let result = source
        .load()
        .and_then(|payload| RhythmBinner::bin_payload(&payload));
    if let Ok(binned) = &result {
        info!(
            "binned {} reviews from {} ({} warnings)",
            binned.grid.total(),
            source.describe(),
            binned.warnings.len()
        );
    }
    PanelContent::from_result(result).map_err(|e| {
        warn!("loading {} failed: {}", source.describe(), e);
        e.to_string()
    })
}

/// Spawn a background loader, returning the channel its result arrives on
fn spawn_loader(source: ProfileSource) -> Receiver<Result<PanelContent, String>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(load_content(&source));
    });
    rx
}

/// Run the TUI application
pub fn run(source: ProfileSource, layout: GridLayout, theme: Theme) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    crossterm::execute!(std::io::stdout(), EnableMouseCapture)?;
    let result = run_app(&mut terminal, source, layout, theme);
    let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

fn run_app(
    terminal: &mut DefaultTerminal,
    source: ProfileSource,
    layout: GridLayout,
    theme: Theme,
) -> anyhow::Result<()> {
    let mut app = App::new(layout, theme, source.describe());
    let mut data_rx = spawn_loader(source.clone());

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if app.should_quit() {
            break;
        }

        if app.take_reload_request() {
            data_rx = spawn_loader(source.clone());
        }

        // Check for data loading completion (non-blocking)
        if matches!(app.state, AppState::Loading { .. }) {
            if let Ok(result) = data_rx.try_recv() {
                app.apply_data_result(result);
            }
        }

        // Poll for events with 100ms timeout for spinner animation
        if event::poll(Duration::from_millis(100))? {
            app.handle_event(event::read()?);
        } else {
            app.tick();
        }
    }

    Ok(())
}
