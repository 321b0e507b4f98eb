//! Help screen showing keyboard shortcuts

use std::path::Path;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::theme::{self, ACCENT, SUBTLE, TEXT};

use super::centered_rect;

/// `settings_file` is where Ctrl+S writes
pub fn render(frame: &mut Frame, area: Rect, settings_file: &Path) {
    let modal_area = centered_rect(60, 24, area);
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(Span::styled(
            " Keyboard Shortcuts ",
            Style::default().fg(ACCENT).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .style(theme::panel());

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let lines = vec![
        Line::from(Span::styled("Draw", Style::default().fg(ACCENT).bold())),
        shortcut_line("Space/Enter", "Start or stop rolling"),
        shortcut_line("r", "Reset: put every name back"),
        shortcut_line("m", "Mask the middle of names"),
        shortcut_line("s", "Settings"),
        shortcut_line("q/Esc", "Quit"),
        Line::from(""),
        Line::from(Span::styled("Settings", Style::default().fg(ACCENT).bold())),
        shortcut_line("\u{2191}/\u{2193} or j/k", "Select an entry"),
        shortcut_line("\u{2190}/\u{2192}", "Adjust a number"),
        shortcut_line("Enter", "Edit, then Enter to apply"),
        shortcut_line("d", "Restore defaults"),
        shortcut_line("Ctrl+S", "Save and close"),
        shortcut_line("Esc", "Close without saving"),
        Line::from(""),
        shortcut_line("?", "This help screen"),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Settings file: ", Style::default().fg(SUBTLE)),
            Span::styled(settings_file.display().to_string(), Style::default().fg(TEXT)),
        ]),
    ];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Help content
            Constraint::Length(2), // Footer
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(lines), chunks[0]);
    if chunks[1].height < 2 {
        return;
    }

    let separator = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(ACCENT));
    frame.render_widget(separator, chunks[1]);

    let footer = Paragraph::new(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(SUBTLE).italic(),
    )))
    .alignment(Alignment::Center);
    let footer_inner = Rect::new(chunks[1].x, chunks[1].y + 1, chunks[1].width, 1);
    frame.render_widget(footer, footer_inner);
}

/// Create a formatted shortcut line with key and description
fn shortcut_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{:<16}", key), Style::default().fg(TEXT)),
        Span::styled(description.to_string(), Style::default().fg(SUBTLE)),
    ])
}
