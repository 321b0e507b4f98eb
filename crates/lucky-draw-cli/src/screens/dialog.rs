//! Small modal dialogs: confirmations and warnings

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::theme::{self, ACCENT, SUBTLE, WARNING};

/// Yes/no question
pub fn render_confirm(frame: &mut Frame, area: Rect, title: &str, question: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(question.to_string(), Style::default().fg(theme::TEXT))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y]", Style::default().fg(ACCENT)),
            Span::raw(" Yes   "),
            Span::styled("[n]", Style::default().fg(ACCENT)),
            Span::raw(" No"),
        ]),
    ];
    render_modal(frame, area, title, ACCENT, lines);
}

/// A warning the user acknowledges with Enter
pub fn render_warning(frame: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Style::default().fg(theme::TEXT))),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(SUBTLE).italic(),
        )),
    ];
    render_modal(frame, area, "Warning", WARNING, lines);
}

fn render_modal(frame: &mut Frame, area: Rect, title: &str, border: Color, lines: Vec<Line>) {
    let widest = lines.iter().map(|line| line.width()).max().unwrap_or(0) as u16;
    let width = (widest + 6).clamp(30, 64);
    let height = lines.len() as u16 + 3;
    let modal_area = centered_rect(width, height, area);

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(border).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(theme::panel());

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(body, modal_area);
}

/// A `width` x `height` rectangle centered in `parent`, clipped to it
pub fn centered_rect(width: u16, height: u16, parent: Rect) -> Rect {
    let x = parent.x + (parent.width.saturating_sub(width)) / 2;
    let y = parent.y + (parent.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(parent.width), height.min(parent.height))
}
