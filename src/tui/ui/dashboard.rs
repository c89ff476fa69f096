//! Dashboard view: Main overview screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{EligibilityRule, EligibilityStatus};
use crate::tui::styles::ClinicalTheme;

use super::render_header;

/// Verdict counts for the current session only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub total: usize,
    pub eligible: usize,
    pub needs_review: usize,
    pub contraindicated: usize,
}

impl SessionSummary {
    pub fn record(&mut self, status: EligibilityStatus) {
        self.total += 1;
        match status {
            EligibilityStatus::Eligible => self.eligible += 1,
            EligibilityStatus::NeedsReview => self.needs_review += 1,
            EligibilityStatus::Contraindicated => self.contraindicated += 1,
        }
    }
}

/// Render the main dashboard view.
pub fn render_dashboard(
    f: &mut Frame,
    area: Rect,
    summary: SessionSummary,
    rules: &[EligibilityRule],
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    render_header(f, chunks[0], "I-131 Assist", "Radioiodine Therapy Eligibility Screening");

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    render_session_panels(f, columns[0], summary);
    render_rule_table(f, columns[1], rules);
}

fn render_session_panels(f: &mut Frame, area: Rect, summary: SessionSummary) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Session counts
            Constraint::Min(0),    // Quick actions
        ])
        .margin(1)
        .split(area);

    let count_line = |label: &'static str, count: usize, status: EligibilityStatus| {
        Line::from(vec![
            Span::styled(format!("  {label:<16}"), ClinicalTheme::text_secondary()),
            Span::styled(count.to_string(), ClinicalTheme::status(status)),
        ])
    };

    let session = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(format!("  {:<16}", "Assessed"), ClinicalTheme::text_secondary()),
            Span::styled(summary.total.to_string(), ClinicalTheme::text()),
        ]),
        count_line("Eligible", summary.eligible, EligibilityStatus::Eligible),
        count_line("Needs review", summary.needs_review, EligibilityStatus::NeedsReview),
        count_line(
            "Contraindicated",
            summary.contraindicated,
            EligibilityStatus::Contraindicated,
        ),
        Line::from(Span::styled(
            "  Nothing is saved between sessions.",
            ClinicalTheme::text_muted(),
        )),
    ])
    .block(
        Block::default()
            .title(Span::styled(" This Session ", ClinicalTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(ClinicalTheme::border()),
    );
    f.render_widget(session, chunks[0]);

    let action = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("[{key}] "), ClinicalTheme::key_hint()),
            Span::styled(desc, ClinicalTheme::key_desc()),
        ])
    };

    let actions = Paragraph::new(vec![
        action("N", "New Assessment"),
        action("L", "Last Result"),
        action("G", "Patient Guidance"),
        action("Q", "Quit"),
    ])
    .block(
        Block::default()
            .title(Span::styled(" Quick Actions ", ClinicalTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(ClinicalTheme::border()),
    );
    f.render_widget(actions, chunks[1]);
}

fn render_rule_table(f: &mut Frame, area: Rect, rules: &[EligibilityRule]) {
    let mut lines: Vec<Line> = rules
        .iter()
        .enumerate()
        .map(|(i, rule)| {
            Line::from(vec![
                Span::styled(format!(" {}. ", i + 1), ClinicalTheme::text_muted()),
                Span::styled(format!("{:<15}", rule.id.code()), ClinicalTheme::status(rule.severity)),
                Span::styled(rule.message, ClinicalTheme::text_secondary()),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Every rule is checked; the most severe one sets the verdict.",
        ClinicalTheme::text_muted(),
    )));

    let table = Paragraph::new(lines)
        .wrap(ratatui::widgets::Wrap { trim: false })
        .block(
            Block::default()
                .title(Span::styled(" Eligibility Rules ", ClinicalTheme::subtitle()))
                .borders(Borders::ALL)
                .border_style(ClinicalTheme::border()),
        );
    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_summary_counts() {
        let mut summary = SessionSummary::default();
        summary.record(EligibilityStatus::Eligible);
        summary.record(EligibilityStatus::Contraindicated);
        summary.record(EligibilityStatus::Contraindicated);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.eligible, 1);
        assert_eq!(summary.needs_review, 0);
        assert_eq!(summary.contraindicated, 2);
    }
}
