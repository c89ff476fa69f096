//! Patient intake form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use zeroize::Zeroize;

use crate::domain::{
    IntakeField, IntakeQuestion, PatientIntake, PatientRecord, ValidationErrors, INTAKE_QUESTIONS,
};
use crate::tui::styles::ClinicalTheme;

use super::{key_hints, render_footer, render_header};

/// Longest answer accepted per field.
const MAX_ANSWER_LEN: usize = 24;

/// Intake form state
#[derive(Default)]
pub struct IntakeFormState {
    pub intake: PatientIntake,
    pub selected_field: usize,
    /// Errors from the last rejected submit, one per failing field.
    pub errors: Option<ValidationErrors>,
}

impl IntakeFormState {
    fn current(&self) -> &IntakeQuestion {
        &INTAKE_QUESTIONS[self.selected_field]
    }

    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % INTAKE_QUESTIONS.len();
    }

    pub fn prev_field(&mut self) {
        self.selected_field = self
            .selected_field
            .checked_sub(1)
            .unwrap_or(INTAKE_QUESTIONS.len() - 1);
    }

    /// Add a character to the current answer
    pub fn input_char(&mut self, c: char) {
        let field = self.current().field;
        let answer = self.intake.answer_mut(field);
        if !c.is_control() && answer.len() < MAX_ANSWER_LEN {
            answer.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        let field = self.current().field;
        self.intake.answer_mut(field).pop();
    }

    pub fn clear_field(&mut self) {
        let field = self.current().field;
        self.intake.answer_mut(field).clear();
    }

    /// Wipe every answer buffer and reset the form.
    ///
    /// Called right after a successful submit so answers do not linger in
    /// UI state.
    pub fn clear_sensitive(&mut self) {
        for question in INTAKE_QUESTIONS.iter() {
            self.intake.answer_mut(question.field).zeroize();
        }
        self.errors = None;
        self.selected_field = 0;
    }

    /// Validate the answers into a record, remembering any field errors.
    ///
    /// # Errors
    /// Returns every field error of the form.
    pub fn submit(&mut self) -> Result<PatientRecord, ValidationErrors> {
        match self.intake.validate() {
            Ok(record) => {
                self.errors = None;
                Ok(record)
            }
            Err(errors) => {
                self.errors = Some(errors.clone());
                Err(errors)
            }
        }
    }

    /// Message for `field` from the last rejected submit.
    #[must_use]
    pub fn field_error(&self, field: IntakeField) -> Option<String> {
        self.errors
            .as_ref()?
            .errors()
            .iter()
            .find(|e| e.field() == field)
            .map(ToString::to_string)
    }

    /// Fill the form with a patient who triggers no rule
    pub fn load_sample_data(&mut self) {
        self.intake = PatientIntake::sample();
        self.errors = None;
    }
}

/// Render the intake form
pub fn render_intake_form(f: &mut Frame, area: Rect, state: &IntakeFormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Current question
            Constraint::Min(0),    // Form
            Constraint::Length(3), // Footer/error
        ])
        .split(area);

    render_header(f, chunks[0], "Patient Intake", "I-131 Eligibility Questionnaire");
    render_prompt(f, chunks[1], state.current());
    render_form_fields(f, chunks[2], state);
    render_form_footer(f, chunks[3], state);
}

fn render_prompt(f: &mut Frame, area: Rect, question: &IntakeQuestion) {
    let prompt = Paragraph::new(Line::from(vec![
        Span::styled(" ", ClinicalTheme::text()),
        Span::styled(question.prompt, ClinicalTheme::focused()),
    ]));
    f.render_widget(prompt, area);
}

fn render_form_fields(f: &mut Frame, area: Rect, state: &IntakeFormState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(area);

    let mid = INTAKE_QUESTIONS.len().div_ceil(2);

    render_field_column(f, columns[0], &INTAKE_QUESTIONS[..mid], 0, state);
    render_field_column(f, columns[1], &INTAKE_QUESTIONS[mid..], mid, state);
}

fn render_field_column(
    f: &mut Frame,
    area: Rect,
    questions: &[IntakeQuestion],
    offset: usize,
    state: &IntakeFormState,
) {
    let constraints: Vec<Constraint> = questions
        .iter()
        .map(|_| Constraint::Length(3))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, question) in questions.iter().enumerate() {
        let is_selected = offset + i == state.selected_field;
        let error = state.field_error(question.field);
        let (border_style, title_style) = match (&error, is_selected) {
            (Some(_), _) => (ClinicalTheme::danger(), ClinicalTheme::danger()),
            (None, true) => (ClinicalTheme::border_focused(), ClinicalTheme::focused()),
            (None, false) => (ClinicalTheme::border(), ClinicalTheme::text_secondary()),
        };

        let mut block = Block::default()
            .title(Span::styled(format!(" {} ", question.label), title_style))
            .borders(Borders::ALL)
            .border_style(border_style);
        if let Some(message) = error {
            block = block.title_bottom(Span::styled(format!(" {message} "), ClinicalTheme::danger()));
        }

        let answer = state.intake.answer(question.field);
        let value_display = if answer.is_empty() {
            Span::styled(question.hint, ClinicalTheme::text_muted())
        } else {
            Span::styled(answer.to_string(), ClinicalTheme::text())
        };

        let content = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            value_display,
            if is_selected {
                Span::styled("▌", ClinicalTheme::cursor())
            } else {
                Span::raw("")
            },
        ]))
        .block(block);

        f.render_widget(content, chunks[i]);
    }
}

fn render_form_footer(f: &mut Frame, area: Rect, state: &IntakeFormState) {
    let content = match &state.errors {
        Some(errors) => Line::from(vec![
            Span::styled("! ", ClinicalTheme::danger()),
            Span::styled(
                format!("{} field(s) need attention; fix the marked answers", errors.len()),
                ClinicalTheme::danger(),
            ),
        ]),
        None => key_hints(&[
            ("↑↓", "Navigate"),
            ("Enter", "Assess"),
            ("Ctrl+S", "Sample Patient"),
            ("Esc", "Cancel"),
        ]),
    };

    render_footer(f, area, content);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut state = IntakeFormState::default();
        state.prev_field();
        assert_eq!(state.selected_field, INTAKE_QUESTIONS.len() - 1);
        state.next_field();
        assert_eq!(state.selected_field, 0);
    }

    #[test]
    fn test_typing_fills_current_answer() {
        let mut state = IntakeFormState::default();
        state.input_char('4');
        state.input_char('5');
        state.next_field();
        state.input_char('F');
        assert_eq!(state.intake.answer(IntakeField::Age), "45");
        assert_eq!(state.intake.answer(IntakeField::Sex), "F");

        state.delete_char();
        assert_eq!(state.intake.answer(IntakeField::Sex), "");
    }

    #[test]
    fn test_empty_form_marks_every_field() {
        let mut state = IntakeFormState::default();
        let errors = state.submit().expect_err("Empty form should fail");
        assert_eq!(errors.len(), INTAKE_QUESTIONS.len());

        for question in &INTAKE_QUESTIONS {
            assert!(
                state.field_error(question.field).is_some(),
                "{} should be marked",
                question.label
            );
        }
        assert_eq!(
            state.field_error(IntakeField::RiskCategory).as_deref(),
            Some("Risk category is required")
        );
    }

    #[test]
    fn test_only_bad_fields_are_marked() {
        let mut state = IntakeFormState::default();
        state.load_sample_data();
        state.intake.tsh = "high".to_string();
        state.intake.pregnant = "maybe".to_string();

        assert!(state.submit().is_err());
        assert!(state.field_error(IntakeField::Tsh).is_some());
        assert!(state.field_error(IntakeField::Pregnant).is_some());
        assert!(state.field_error(IntakeField::Age).is_none());

        state.intake.tsh = "35".to_string();
        state.intake.pregnant = "n".to_string();
        assert!(state.submit().is_ok());
        assert!(state.errors.is_none());
    }

    #[test]
    fn test_sample_then_clear() {
        let mut state = IntakeFormState::default();
        state.load_sample_data();
        assert!(state.submit().is_ok());

        state.selected_field = 3;
        state.clear_sensitive();
        assert_eq!(state.selected_field, 0);
        assert!(INTAKE_QUESTIONS
            .iter()
            .all(|q| state.intake.answer(q.field).is_empty()));
    }
}
