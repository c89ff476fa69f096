//! Main TUI application state machine.
//!
//! Handles:
//! - Screen navigation
//! - Input event handling
//! - Assessment of submitted intakes

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::adapters::guideline::GuidelineCatalog;
use crate::application::AssessmentService;
use crate::ports::GuidanceCatalog;

use super::ui::{
    assessment::{render_assessment, AssessmentState},
    dashboard::{render_dashboard, SessionSummary},
    guidance::{render_guidance, GuidanceState},
    intake::{render_intake_form, IntakeFormState},
    render_disclaimer,
};

/// Current screen/view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    IntakeForm,
    Assessment,
    Guidance,
}

/// Main application state
pub struct App {
    screen: Screen,

    /// Screen to return to when leaving the guidance viewer
    guidance_return: Screen,

    should_quit: bool,

    service: AssessmentService<GuidelineCatalog>,

    session: SessionSummary,

    intake_state: IntakeFormState,

    assessment_state: AssessmentState,

    guidance_state: GuidanceState,
}

impl App {
    /// Create a new application with the built-in guideline catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_service(AssessmentService::new(GuidelineCatalog::new()))
    }

    /// Create an application around an existing service.
    #[must_use]
    pub fn with_service(service: AssessmentService<GuidelineCatalog>) -> Self {
        Self {
            screen: Screen::Dashboard,
            guidance_return: Screen::Dashboard,
            should_quit: false,
            service,
            session: SessionSummary::default(),
            intake_state: IntakeFormState::default(),
            assessment_state: AssessmentState::default(),
            guidance_state: GuidanceState::default(),
        }
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(3)])
                    .split(f.area());

                let content_area = chunks[0];

                match self.screen {
                    Screen::Dashboard => render_dashboard(
                        f,
                        content_area,
                        self.session,
                        self.service.engine().rules(),
                    ),
                    Screen::IntakeForm => {
                        render_intake_form(f, content_area, &self.intake_state);
                    }
                    Screen::Assessment => {
                        render_assessment(f, content_area, &self.assessment_state);
                    }
                    Screen::Guidance => {
                        let section = self
                            .service
                            .catalog()
                            .section(self.guidance_state.kind());
                        render_guidance(f, content_area, &self.guidance_state, &section);
                    }
                }

                render_disclaimer(f, chunks[1]);
            })?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Dashboard => self.handle_dashboard_key(key),
            Screen::IntakeForm => self.handle_intake_key(key, modifiers),
            Screen::Assessment => self.handle_assessment_key(key),
            Screen::Guidance => self.handle_guidance_key(key),
        }
    }

    fn open_intake(&mut self) {
        self.intake_state = IntakeFormState::default();
        self.screen = Screen::IntakeForm;
    }

    fn open_guidance(&mut self) {
        self.guidance_return = self.screen;
        self.screen = Screen::Guidance;
    }

    fn handle_dashboard_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('n' | 'N') => self.open_intake(),
            KeyCode::Char('l' | 'L') => self.screen = Screen::Assessment,
            KeyCode::Char('g' | 'G') => self.open_guidance(),
            KeyCode::Char('q' | 'Q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_intake_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Esc => {
                self.intake_state.clear_sensitive();
                self.screen = Screen::Dashboard;
            }
            KeyCode::Up | KeyCode::BackTab => self.intake_state.prev_field(),
            KeyCode::Down | KeyCode::Tab => self.intake_state.next_field(),
            KeyCode::Char('s') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.intake_state.load_sample_data();
            }
            KeyCode::Char(c) => self.intake_state.input_char(c),
            KeyCode::Backspace => self.intake_state.delete_char(),
            KeyCode::Delete => self.intake_state.clear_field(),
            KeyCode::Enter => self.submit_intake(),
            _ => {}
        }
    }

    fn handle_assessment_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Esc => self.screen = Screen::Dashboard,
            KeyCode::Char('n' | 'N') => self.open_intake(),
            KeyCode::Char('g' | 'G') => self.open_guidance(),
            _ => {}
        }
    }

    fn handle_guidance_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.screen = self.guidance_return,
            KeyCode::Right | KeyCode::Tab => self.guidance_state.next_tab(),
            KeyCode::Left | KeyCode::BackTab => self.guidance_state.prev_tab(),
            KeyCode::Down => self.guidance_state.scroll_down(),
            KeyCode::Up => self.guidance_state.scroll_up(),
            _ => {}
        }
    }

    fn submit_intake(&mut self) {
        match self.intake_state.submit() {
            Ok(record) => {
                let report = self.service.assess(&record);
                self.session.record(report.eligibility.status);
                self.assessment_state = AssessmentState::Complete {
                    report: Box::new(report),
                };
                self.screen = Screen::Assessment;

                // Clear plaintext answers from the UI immediately.
                self.intake_state.clear_sensitive();
            }
            Err(errors) => {
                tracing::debug!(fields = errors.len(), "Intake form rejected");
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EligibilityStatus;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    #[test]
    fn test_sample_submission_reaches_assessment() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(app.screen, Screen::IntakeForm);

        app.handle_key(KeyCode::Char('s'), KeyModifiers::CONTROL);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(app.screen, Screen::Assessment);
        assert_eq!(app.session.total, 1);
        assert_eq!(app.session.eligible, 1);
        match &app.assessment_state {
            AssessmentState::Complete { report } => {
                assert_eq!(report.eligibility.status, EligibilityStatus::Eligible);
            }
            AssessmentState::Idle => panic!("Expected a report"),
        }
    }

    #[test]
    fn test_invalid_form_stays_on_intake() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        type_text(&mut app, "abc");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(app.screen, Screen::IntakeForm);
        assert!(app.intake_state.errors.is_some());
        assert_eq!(app.session.total, 0);
    }

    #[test]
    fn test_guidance_returns_to_caller() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('l'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('g'), KeyModifiers::NONE);
        assert_eq!(app.screen, Screen::Guidance);

        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.screen, Screen::Assessment);
    }

    #[test]
    fn test_ctrl_q_quits_from_form() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn test_typed_intake_with_contraindication() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        for answer in ["52", "F", "40", "n", "y", "n", "y", "y", "n", "y", "intermediate"] {
            type_text(&mut app, answer);
            app.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(app.screen, Screen::Assessment);
        assert_eq!(app.session.contraindicated, 1);
    }
}
