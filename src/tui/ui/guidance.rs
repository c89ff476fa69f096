//! Guidance viewer: preparation, side effects and post-therapy tabs.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::domain::{GuidanceKind, GuidanceSection};
use crate::tui::styles::ClinicalTheme;

use super::{key_hints, render_footer, render_header};

/// Guidance viewer state
#[derive(Debug, Clone, Copy, Default)]
pub struct GuidanceState {
    pub tab: usize,
    pub scroll: u16,
}

impl GuidanceState {
    #[must_use]
    pub fn kind(&self) -> GuidanceKind {
        GuidanceKind::ALL[self.tab % GuidanceKind::ALL.len()]
    }

    pub fn next_tab(&mut self) {
        self.tab = (self.tab + 1) % GuidanceKind::ALL.len();
        self.scroll = 0;
    }

    pub fn prev_tab(&mut self) {
        self.tab = self.tab.checked_sub(1).unwrap_or(GuidanceKind::ALL.len() - 1);
        self.scroll = 0;
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

fn tab_title(kind: GuidanceKind) -> &'static str {
    match kind {
        GuidanceKind::Preparation => "Preparation",
        GuidanceKind::SideEffects => "Side Effects",
        GuidanceKind::PostTherapy => "Post-Therapy",
    }
}

/// Render the guidance viewer for the selected section.
pub fn render_guidance(f: &mut Frame, area: Rect, state: &GuidanceState, section: &GuidanceSection) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Tabs
            Constraint::Min(0),    // Section
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(f, chunks[0], "Patient Guidance", "Static Advisory Text");

    let tabs = Tabs::new(GuidanceKind::ALL.iter().map(|k| tab_title(*k)))
        .select(state.tab)
        .style(ClinicalTheme::text_secondary())
        .highlight_style(ClinicalTheme::selected())
        .divider(Span::styled("│", ClinicalTheme::text_muted()));
    f.render_widget(tabs, chunks[1]);

    let mut lines: Vec<Line> = section
        .items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled(" • ", ClinicalTheme::focused()),
                Span::styled(item.clone(), ClinicalTheme::text()),
            ])
        })
        .collect();
    if let Some(note) = &section.closing_note {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(note.clone(), ClinicalTheme::advisory())));
    }

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0))
        .block(
            Block::default()
                .title(Span::styled(format!(" {} ", section.title), ClinicalTheme::subtitle()))
                .borders(Borders::ALL)
                .border_style(ClinicalTheme::border()),
        );
    f.render_widget(body, chunks[2]);

    render_footer(
        f,
        chunks[3],
        key_hints(&[("←→", "Section"), ("↑↓", "Scroll"), ("Esc", "Back")]),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_cycle_and_reset_scroll() {
        let mut state = GuidanceState::default();
        assert_eq!(state.kind(), GuidanceKind::Preparation);

        state.scroll_down();
        state.next_tab();
        assert_eq!(state.kind(), GuidanceKind::SideEffects);
        assert_eq!(state.scroll, 0);

        state.prev_tab();
        state.prev_tab();
        assert_eq!(state.kind(), GuidanceKind::PostTherapy);
    }

    #[test]
    fn test_scroll_saturates_at_top() {
        let mut state = GuidanceState::default();
        state.scroll_up();
        assert_eq!(state.scroll, 0);
    }
}
