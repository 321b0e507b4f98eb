//! Footer with a status title and keyboard hints

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::theme::{ACCENT, PANEL_BG, SUBTLE, TEXT};

/// Hint spans: `[key] action`, spaced apart
pub fn hint_spans(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    hints
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let mut spans = vec![
                Span::styled(format!("[{}]", key), Style::default().fg(ACCENT)),
                Span::styled(format!(" {}", action), Style::default().fg(TEXT)),
            ];
            if i + 1 < hints.len() {
                spans.push(Span::raw("   "));
            }
            spans
        })
        .collect()
}

/// Render the footer. `status` goes in the top border.
pub fn render_footer(frame: &mut Frame, area: Rect, status: &str, hints: &[(&str, &str)]) {
    let footer = Paragraph::new(Line::from(hint_spans(hints)))
        .alignment(Alignment::Center)
        .style(Style::default().bg(PANEL_BG))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(SUBTLE))
                .title(Span::styled(format!(" {} ", status), Style::default().fg(ACCENT))),
        );

    frame.render_widget(footer, area);
}
