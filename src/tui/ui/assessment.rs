//! Assessment result view.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::{AssessmentReport, DoseAdvice, EligibilityAssessment};
use crate::tui::styles::ClinicalTheme;

use super::{key_hints, render_footer, render_header};

/// Assessment state
#[derive(Debug, Clone, Default)]
pub enum AssessmentState {
    /// Nothing assessed yet
    #[default]
    Idle,
    /// Report for the last submitted intake
    Complete { report: Box<AssessmentReport> },
}

/// Render the assessment view
pub fn render_assessment(f: &mut Frame, area: Rect, state: &AssessmentState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(f, chunks[0], "Eligibility Assessment", "Advisory Only");

    match state {
        AssessmentState::Idle => render_idle(f, chunks[1]),
        AssessmentState::Complete { report } => render_report(f, chunks[1], report),
    }

    render_footer(
        f,
        chunks[2],
        key_hints(&[
            ("Enter", "Dashboard"),
            ("N", "New Assessment"),
            ("G", "Guidance"),
        ]),
    );
}

fn render_idle(f: &mut Frame, area: Rect) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No assessment yet",
            ClinicalTheme::text_secondary(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Complete the intake form to begin",
            ClinicalTheme::text_muted(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(ClinicalTheme::border()),
    );

    f.render_widget(content, area);
}

fn render_report(f: &mut Frame, area: Rect, report: &AssessmentReport) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Status
            Constraint::Min(4),    // Issues
            Constraint::Length(4), // Dose
        ])
        .split(area);

    render_status(f, chunks[0], &report.eligibility);
    render_issues(f, chunks[1], &report.eligibility);
    render_dose(f, chunks[2], &report.dose);
}

fn render_status(f: &mut Frame, area: Rect, eligibility: &EligibilityAssessment) {
    let style = ClinicalTheme::status(eligibility.status);

    let status = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(
                "{} {}",
                ClinicalTheme::status_icon(eligibility.status),
                eligibility.status
            ),
            style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            eligibility.status.description(),
            ClinicalTheme::text_secondary(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(style),
    );

    f.render_widget(status, area);
}

fn render_issues(f: &mut Frame, area: Rect, eligibility: &EligibilityAssessment) {
    let block = Block::default()
        .title(Span::styled(
            format!(" Issues ({}) ", eligibility.issues.len()),
            ClinicalTheme::subtitle(),
        ))
        .borders(Borders::ALL)
        .border_style(ClinicalTheme::border());

    let lines: Vec<Line> = if eligibility.issues.is_empty() {
        vec![Line::from(Span::styled(
            "No issues detected.",
            ClinicalTheme::text_muted(),
        ))]
    } else {
        eligibility
            .issues
            .iter()
            .map(|issue| {
                let style = ClinicalTheme::status(issue.severity);
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", ClinicalTheme::status_icon(issue.severity)),
                        style,
                    ),
                    Span::styled(format!("{:<14}", issue.rule.code()), style),
                    Span::styled(issue.message, ClinicalTheme::text()),
                ])
            })
            .collect()
    };

    let issues = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(issues, area);
}

fn render_dose(f: &mut Frame, area: Rect, dose: &DoseAdvice) {
    let band = dose
        .band
        .map_or_else(|| "no standard band".to_string(), |b| b.to_string());

    let content = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Risk: ", ClinicalTheme::text_secondary()),
            Span::styled(dose.category.to_string(), ClinicalTheme::text()),
            Span::styled("   Band: ", ClinicalTheme::text_secondary()),
            Span::styled(band, ClinicalTheme::advisory()),
        ]),
        Line::from(Span::styled(dose.text, ClinicalTheme::text())),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(Span::styled(
                " Dose Suggestion (advisory only) ",
                ClinicalTheme::subtitle(),
            ))
            .borders(Borders::ALL)
            .border_style(ClinicalTheme::border()),
    );

    f.render_widget(content, area);
}
