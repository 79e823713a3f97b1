//! Main TUI application state and frame loop

use super::panes::{
    render_bars_pane, render_controls_pane, render_status_bar, ControlsView, StatusView,
};
use crate::algorithms::Algorithm;
use crate::constants::{DELAY_FACTOR, SIZE_STEP, TARGET_FPS};
use crate::session::{RunState, Session};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The main application state
pub struct App {
    /// The visualizer session
    pub session: Session,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app around a session
    pub fn new(session: Session) -> Self {
        App {
            session,
            status_message: String::from("Ready! Press Enter to sort"),
        }
    }

    /// Run the TUI application
    ///
    /// Each frame advances the session by at most one step, draws, then waits
    /// for input for the rest of the frame budget.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let frame_budget = Duration::from_secs(1) / TARGET_FPS;

        loop {
            let frame_start = Instant::now();
            self.tick(frame_start);

            terminal.draw(|f| self.render(f))?;

            if self.session.should_quit() {
                break;
            }

            let deadline = frame_start + frame_budget;
            loop {
                let now = Instant::now();
                if now >= deadline || !event::poll(deadline - now)? {
                    break;
                }
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
                if self.session.should_quit() {
                    break;
                }
            }
        }

        log::info!("quit requested, leaving frame loop");
        Ok(())
    }

    /// Advance the session and report a finished run
    pub fn tick(&mut self, now: Instant) {
        let was_running = self.session.is_running();
        self.session.tick(now);

        if was_running && !self.session.is_running() && !self.session.should_quit() {
            self.report_finished();
        }
    }

    fn report_finished(&mut self) {
        let stats = self.session.frame_stats();
        self.status_message = if self.session.is_completed() {
            format!(
                "Sorted in {} steps ({} comparisons)",
                stats.steps, stats.comparisons
            )
        } else {
            // A deferred size change replaced the sorted array
            "Run finished, new array generated".to_string()
        };
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Controls on top, bars in the middle, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(size);

        let session = &self.session;

        render_controls_pane(
            frame,
            chunks[0],
            &ControlsView {
                selected: session.algorithm(),
                running: session.algorithm_running(),
                size: session.size(),
                resize_pending: session.resize_pending(),
                delay_secs: session.delay_secs(),
            },
        );

        render_bars_pane(
            frame,
            chunks[1],
            session.frame(),
            session.is_running(),
            session.is_completed(),
        );

        render_status_bar(
            frame,
            chunks[2],
            &StatusView {
                message: &self.status_message,
                state: session.run_state(),
                stats: session.frame_stats(),
                position: session.history_position(),
                total: session.total_snapshots(),
                completed: session.is_completed(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.session.quit();
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.session.quit();
            }
            KeyCode::Enter | KeyCode::Char('s') => {
                if self.session.on_start() {
                    self.status_message = format!("Sorting with {}...", self.session.algorithm());
                } else {
                    self.status_message = "Already sorting (press r to reset)".to_string();
                }
            }
            KeyCode::Char('r') => {
                self.session.on_reset();
                self.status_message = format!("New array of {} elements", self.session.size());
            }
            KeyCode::Tab | KeyCode::Char('a') => {
                self.select_algorithm(self.session.algorithm().next());
            }
            KeyCode::BackTab => {
                self.select_algorithm(self.session.algorithm().prev());
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.change_size(self.session.size().saturating_add(SIZE_STEP));
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.change_size(self.session.size().saturating_sub(SIZE_STEP));
            }
            KeyCode::Char(']') => {
                self.session
                    .on_delay_changed(self.session.delay_secs() / DELAY_FACTOR);
                self.status_message = format!("Delay {:.2}s", self.session.delay_secs());
            }
            KeyCode::Char('[') => {
                self.session
                    .on_delay_changed(self.session.delay_secs() * DELAY_FACTOR);
                self.status_message = format!("Delay {:.2}s", self.session.delay_secs());
            }
            KeyCode::Char(' ') => {
                self.status_message = match self.session.toggle_pause() {
                    RunState::Paused => "Paused (←/→ to step)".to_string(),
                    RunState::Running => {
                        let algorithm = self
                            .session
                            .algorithm_running()
                            .unwrap_or(self.session.algorithm());
                        format!("Sorting with {}...", algorithm)
                    }
                    _ => "Nothing to pause".to_string(),
                };
            }
            KeyCode::Left => {
                if self.session.step_backward() {
                    self.status_message = "Stepped backward".to_string();
                } else if self.session.run_state() == RunState::Paused {
                    self.status_message =
                        "Cannot step backward: at the oldest recorded step".to_string();
                }
            }
            KeyCode::Right => {
                let was_paused = self.session.run_state() == RunState::Paused;
                if self.session.step_forward() {
                    self.status_message = "Stepped forward".to_string();
                } else if was_paused && !self.session.is_running() {
                    self.report_finished();
                }
            }
            _ => {}
        }
    }

    fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.session.on_algorithm_changed(algorithm);
        self.status_message = if self.session.is_running() {
            format!("{} selected for the next run", algorithm)
        } else {
            format!("{} selected", algorithm)
        };
    }

    fn change_size(&mut self, size: usize) {
        self.session.on_size_changed(size);
        self.status_message = if self.session.resize_pending() {
            format!("Size {} applies after this run", self.session.size())
        } else {
            format!("New array of {} elements", self.session.size())
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::new(Session::new(&Settings {
            seed: Some(5),
            ..Settings::default()
        }))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_keys_drive_session() {
        let mut app = app();

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.session.algorithm(), Algorithm::Selection);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.session.algorithm(), Algorithm::Bubble);

        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.session.size(), 45);
        assert_eq!(app.session.frame().len(), 45);

        press(&mut app, KeyCode::Char('['));
        assert!(app.session.delay_secs() > 0.1);

        press(&mut app, KeyCode::Enter);
        assert!(app.session.is_running());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.status_message, "Already sorting (press r to reset)");

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.session.run_state(), RunState::Paused);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.session.history_position(), 1);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.session.run_state(), RunState::Idle);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.session.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits_mid_run() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);

        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!app.session.should_quit());

        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.session.should_quit());
        assert_eq!(app.session.run_state(), RunState::Terminal);
    }

    #[test]
    fn test_tick_reports_completion() {
        let mut app = app();
        app.session.on_size_changed(10);
        app.session.on_delay_changed(0.01);
        press(&mut app, KeyCode::Enter);

        let mut now = Instant::now();
        while app.session.is_running() {
            now += Duration::from_millis(20);
            app.tick(now);
        }

        assert!(app.status_message.starts_with("Sorted in"));
        assert!(app.session.is_completed());
    }

    #[test]
    fn test_render_draws_every_pane() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Controls"));
        assert!(text.contains("Array (50 elements)"));
        assert!(text.contains("READY"));
    }
}
