//! Main TUI application state and logic

use super::panes::{self, SourceScrollState, StackScrollState, StatusRenderData};
use crate::events::EventLog;
use crate::interpreter::program::Program;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Output,
    Stack,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> output -> stack)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Stack,
            FocusedPane::Stack => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Stack,
            FocusedPane::Output => FocusedPane::Source,
            FocusedPane::Stack => FocusedPane::Output,
        }
    }
}

/// Timing and limits for the TUI
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    /// Delay between steps in auto-play mode
    pub play_interval: Duration,
    /// Cap on steps taken by a single "run to end"
    pub max_steps: usize,
}

/// The main application state
pub struct App {
    /// The program being visualized
    pub program: Program,

    /// Sink the program reports to
    pub events: Rc<RefCell<EventLog>>,

    /// The source code being executed
    pub source_code: String,

    pub config: AppConfig,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll state
    pub source_scroll: SourceScrollState,
    pub stack_scroll: StackScrollState,
    pub output_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(
        program: Program,
        events: Rc<RefCell<EventLog>>,
        source_code: String,
        config: AppConfig,
    ) -> Self {
        let status_message = if program.has_call_stack() {
            String::from("Ready!")
        } else {
            String::from("Ready (no call stack, calls are ignored)")
        };
        let long_ago = Instant::now()
            .checked_sub(Duration::from_secs(1))
            .unwrap_or_else(Instant::now);

        App {
            program,
            events,
            source_code,
            config,
            focused_pane: FocusedPane::Source,
            source_scroll: SourceScrollState::new(),
            stack_scroll: StackScrollState::default(),
            output_scroll: 0,
            should_quit: false,
            status_message,
            is_playing: false,
            last_play_time: long_ago,
            last_space_press: long_ago,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= self.config.play_interval {
                if self.program.is_finished() {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                } else {
                    self.step_forward();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Left column: Source (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        let current = self.program.current_method();
        let current_line = current.and_then(|m| m.current_line());
        let next_line = current
            .and_then(|m| m.lines().get(m.ticks()))
            .map(String::as_str);
        let events = self.events.borrow();

        panes::render_source_pane(
            frame,
            left_rows[0],
            &self.source_code,
            current_line,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        panes::render_output_pane(
            frame,
            left_rows[1],
            &events,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        panes::render_stack_pane(
            frame,
            columns[1],
            &events,
            next_line,
            self.focused_pane == FocusedPane::Stack,
            &mut self.stack_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                message: &self.status_message,
                program_name: self.program.name(),
                steps: self.program.steps(),
                state: self.program.state(),
                is_playing: self.is_playing,
                standalone: !self.program.has_call_stack(),
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).map_or(1, |d| d as usize);
                let stepped = self.program.run(n);
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.output_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Right | KeyCode::Char('n') => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::Stack => {
                    self.stack_scroll.offset = self.stack_scroll.offset.saturating_sub(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::Stack => {
                    self.stack_scroll.offset = self.stack_scroll.offset.saturating_add(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing && !self.program.is_finished();
                    self.status_message = if self.is_playing {
                        "Playing...".to_string()
                    } else {
                        "Paused".to_string()
                    };
                }
            }
            KeyCode::Enter => {
                // Run to the end, bounded so runaway recursion cannot hang the UI
                self.is_playing = false;
                let stepped = self.program.run(self.config.max_steps);
                self.status_message = if self.program.is_finished() {
                    format!("Ran {} step(s) to the end", stepped)
                } else {
                    format!("Stopped after {} step(s), program still running", stepped)
                };
                self.output_scroll = usize::MAX;
            }
            _ => {}
        }
    }

    /// Take a single step
    fn step_forward(&mut self) {
        if self.program.is_finished() {
            self.status_message = "Cannot step forward: program finished".to_string();
            return;
        }
        let before = self.events.borrow().total_events();
        self.program.step();

        let events = self.events.borrow();
        self.status_message = if events.total_events() > before {
            events
                .events()
                .last()
                .map_or_else(String::new, |event| event.to_string())
        } else if self.program.is_finished() {
            "Program finished".to_string()
        } else {
            "Stepped forward".to_string()
        };
        // Auto-scroll output to bottom
        self.output_scroll = usize::MAX;
    }
}
