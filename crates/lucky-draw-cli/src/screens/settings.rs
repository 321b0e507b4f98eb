//! Settings dialog: every entry in document order with an inline editor

use lucky_draw_core::{Rgb, SettingEntry, SettingKind, SettingValue};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::SettingsDialog;
use crate::theme::{self, ACCENT, ERROR, SELECTION_BG, SUBTLE, SUCCESS, TEXT};

use super::centered_rect;
use super::dialog::render_confirm;

/// Width of the name column
const NAME_WIDTH: usize = 33;

pub fn render(frame: &mut Frame, area: Rect, dialog: &SettingsDialog) {
    let entries = dialog.session.working().entries();
    let modal_area = centered_rect(78, entries.len() as u16 + 5, area);
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", dialog.session.title()),
            Style::default().fg(ACCENT).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .style(theme::panel());
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Entries
            Constraint::Length(2), // Message
        ])
        .split(inner);

    let lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let selected = i == dialog.selected;
            let editing = if selected { dialog.editing.as_deref() } else { None };
            entry_line(entry, selected, editing)
        })
        .collect();

    // Keep the selection in view on short terminals
    let visible = chunks[0].height as usize;
    let scroll = (dialog.selected + 1).saturating_sub(visible) as u16;
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), chunks[0]);

    let message = match (&dialog.message, dialog.selected_entry()) {
        (Some(notice), _) => Span::styled(
            notice.text.clone(),
            Style::default().fg(if notice.is_error { ERROR } else { SUCCESS }),
        ),
        (None, Some(entry)) => Span::styled(
            kind_hint(entry.kind(), dialog.editing.is_some()),
            Style::default().fg(SUBTLE).italic(),
        ),
        (None, None) => Span::raw(""),
    };
    frame.render_widget(
        Paragraph::new(vec![Line::from(""), Line::from(message)]),
        chunks[1],
    );

    if dialog.confirm_discard {
        render_confirm(frame, area, "Unsaved changes", "Discard the changes you made?");
    }
}

fn entry_line<'a>(entry: &'a SettingEntry, selected: bool, editing: Option<&'a str>) -> Line<'a> {
    let marker = if selected { "> " } else { "  " };
    let name_style = if selected {
        Style::default().fg(ACCENT).bold()
    } else {
        Style::default().fg(TEXT)
    };

    let mut spans = vec![
        Span::styled(marker, name_style),
        Span::styled(format!("{:<width$}", entry.name, width = NAME_WIDTH), name_style),
    ];

    match (editing, &entry.value) {
        (Some(buffer), _) => {
            spans.push(Span::styled(
                format!("{}|", buffer),
                Style::default().fg(Color::White).bold(),
            ));
        }
        (None, SettingValue::Int(range)) => {
            spans.push(Span::styled("\u{25c0} ", Style::default().fg(SUBTLE)));
            spans.push(Span::styled(range.value.to_string(), Style::default().fg(TEXT)));
            spans.push(Span::styled(
                format!(" \u{25b6}  {}..={}", range.min, range.max),
                Style::default().fg(SUBTLE),
            ));
        }
        (None, SettingValue::Color(hex)) => {
            // Swatch with the hex code on it; unparseable values show as text
            let style = match hex.parse::<Rgb>() {
                Ok(rgb) => Style::default()
                    .fg(theme::contrast(rgb))
                    .bg(theme::color(rgb)),
                Err(_) => Style::default().fg(TEXT),
            };
            spans.push(Span::styled(format!(" {} ", hex), style));
        }
        (None, value) => {
            spans.push(Span::styled(value.summary(), Style::default().fg(TEXT)));
        }
    }

    let line = Line::from(spans);
    if selected {
        line.style(Style::default().bg(SELECTION_BG))
    } else {
        line
    }
}

/// How to edit the selected kind of value
fn kind_hint(kind: SettingKind, editing: bool) -> &'static str {
    match (kind, editing) {
        (SettingKind::Int, false) => "\u{2190}/\u{2192} adjust, Enter to type a number",
        (SettingKind::Color, true) => "Hex color: #RRGGBB or #RGB",
        (SettingKind::Font, true) => "Family Size [bold] [italic] [underline] [overstrike]",
        (SettingKind::Path, true) => "Path to a PNG, JPEG, GIF or BMP image",
        (_, true) => "Enter to apply, Esc to cancel",
        (_, false) => "Enter to edit",
    }
}
