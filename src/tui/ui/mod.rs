//! UI module: View components for the TUI.

pub mod assessment;
pub mod dashboard;
pub mod guidance;
pub mod intake;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::CLINICIAN_REMINDER;
use crate::tui::styles::ClinicalTheme;

pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "DISCLAIMER: Decision support only. This tool is not a diagnostic or dosing authority.",
            ClinicalTheme::text_muted(),
        )),
        Line::from(Span::styled(CLINICIAN_REMINDER, ClinicalTheme::text_muted())),
    ];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(ClinicalTheme::border());

    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(p, area);
}

/// Header bar with a title and a dimmer subtitle.
fn render_header(f: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", ClinicalTheme::text()),
        Span::styled(title.to_string(), ClinicalTheme::title()),
        Span::styled(format!(" │ {subtitle}"), ClinicalTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(ClinicalTheme::border()),
    );

    f.render_widget(header, area);
}

/// Footer line of `[key] description` pairs.
fn key_hints(hints: &[(&str, &str)]) -> Line<'static> {
    let spans: Vec<Span<'static>> = hints
        .iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(format!("[{key}] "), ClinicalTheme::key_hint()),
                Span::styled(format!("{desc} "), ClinicalTheme::key_desc()),
            ]
        })
        .collect();
    Line::from(spans)
}

fn render_footer(f: &mut Frame, area: Rect, content: Line<'_>) {
    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(ClinicalTheme::border()),
    );

    f.render_widget(footer, area);
}
