//! TUI application state and logic

use crate::commands::export_view;
use crate::controller::BoardController;
use crate::core::{GRID_SIZE, Line};
use crate::export::Exporter;
use crate::presenter::RenderedBoard;
use crate::storage::KeyValueStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, S> {
    pub controller: BoardController<S>,
    pub view: RenderedBoard,
    pub exporter: &'a dyn Exporter,
    pub cursor: usize,
    pub messages: Vec<Message>,
    /// Blocking notice shown over the board until dismissed
    pub notification: Option<String>,
    pub exporting: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Board,
    WinCelebration,
    Notification,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl<'a, S: KeyValueStore> App<'a, S> {
    #[must_use]
    pub fn new(
        controller: BoardController<S>,
        view: RenderedBoard,
        exporter: &'a dyn Exporter,
    ) -> Self {
        let mut app = Self {
            controller,
            view,
            exporter,
            cursor: 0,
            messages: Vec::new(),
            notification: None,
            exporting: false,
            should_quit: false,
        };

        app.add_message("Welcome! Arrows move, Space marks a cell.", MessageStyle::Info);
        if app.controller.pool().is_short() {
            app.add_message(
                &format!(
                    "Only {} words loaded; some cells are blank. Add more to the word list.",
                    app.controller.pool().len()
                ),
                MessageStyle::Error,
            );
        }
        app
    }

    /// Which key set is active
    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        if self.notification.is_some() {
            InputMode::Notification
        } else if self.view.overlay_visible() {
            InputMode::WinCelebration
        } else {
            InputMode::Board
        }
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        let (row, col) = (self.cursor / GRID_SIZE, self.cursor % GRID_SIZE);
        let (row, col) = match direction {
            Direction::Up => ((row + GRID_SIZE - 1) % GRID_SIZE, col),
            Direction::Down => ((row + 1) % GRID_SIZE, col),
            Direction::Left => (row, (col + GRID_SIZE - 1) % GRID_SIZE),
            Direction::Right => (row, (col + 1) % GRID_SIZE),
        };
        self.cursor = row * GRID_SIZE + col;
    }

    pub fn toggle_cursor(&mut self) {
        self.toggle(self.cursor);
    }

    pub fn toggle(&mut self, index: usize) {
        match self.controller.toggle(index, &mut self.view) {
            Ok(true) => {
                self.add_message("🎉 BINGO! Press Esc to keep playing.", MessageStyle::Success);
            }
            Ok(false) => {}
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_board(&mut self) {
        self.controller.new_board(&mut self.view);
        self.add_message("New board!", MessageStyle::Info);
    }

    pub fn shuffle(&mut self) {
        self.controller.shuffle(&mut self.view);
        self.add_message(
            &format!("Reloaded {} words and shuffled", self.controller.pool().len()),
            MessageStyle::Info,
        );
    }

    pub fn clear_saved(&mut self) {
        self.controller.clear_saved(&mut self.view);
        self.add_message("Cleared saved board", MessageStyle::Info);
    }

    pub fn close_overlay(&mut self) {
        self.view.hide_overlay();
    }

    /// Mark an export as running; returns false if one is already running
    pub fn begin_export(&mut self) -> bool {
        if self.exporting {
            return false;
        }
        self.exporting = true;
        true
    }

    /// Run the export started by [`App::begin_export`]
    pub fn finish_export(&mut self) {
        let result = export_view(self.controller.config(), &mut self.view, self.exporter);
        self.exporting = false;

        match result {
            Ok(path) => self.add_message(
                &format!("Exported board to {}", path.display()),
                MessageStyle::Success,
            ),
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                self.notification = Some(format!("Export failed: {e}"));
            }
        }
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Complete lines on the current board
    #[must_use]
    pub fn winning_lines(&self) -> Vec<Line> {
        self.controller.winning_lines()
    }

    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.view.cells().iter().filter(|c| c.marked).count()
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode() {
                InputMode::Notification => {
                    // Blocking: any key acknowledges
                    app.dismiss_notification();
                }
                InputMode::WinCelebration => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') => app.new_board(),
                    KeyCode::Char('e') => {
                        if app.begin_export() {
                            terminal.draw(|f| super::rendering::ui(f, &app))?;
                            app.finish_export();
                        }
                    }
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('x' | ' ') => {
                        app.close_overlay();
                    }
                    _ => {}
                },
                InputMode::Board => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Up | KeyCode::Char('k') => app.move_cursor(Direction::Up),
                    KeyCode::Down | KeyCode::Char('j') => app.move_cursor(Direction::Down),
                    KeyCode::Left | KeyCode::Char('h') => app.move_cursor(Direction::Left),
                    KeyCode::Right | KeyCode::Char('l') => app.move_cursor(Direction::Right),
                    KeyCode::Char(' ') | KeyCode::Enter => app.toggle_cursor(),
                    KeyCode::Char('n') => app.new_board(),
                    KeyCode::Char('s') => app.shuffle(),
                    KeyCode::Char('c') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.clear_saved();
                    }
                    KeyCode::Char('e') => {
                        if app.begin_export() {
                            // Draw once so the disabled export hint shows while it runs
                            terminal.draw(|f| super::rendering::ui(f, &app))?;
                            app.finish_export();
                        }
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
