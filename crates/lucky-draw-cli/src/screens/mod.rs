//! Screen rendering and routing
//!
//! The draw view is always drawn; dialogs are modals on top of it so the
//! preview stays visible while settings are edited.

mod dialog;
mod draw;
mod help;
mod settings;

use ratatui::prelude::*;

use crate::app::{App, AppState};
use crate::widgets;

pub use dialog::centered_rect;

/// Render the draw view plus whatever dialog the state calls for
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Draw view
            Constraint::Length(3), // Footer
        ])
        .split(area);

    draw::render(frame, chunks[0], app);
    widgets::render_footer(frame, chunks[1], &status_text(app), &get_hints(app));

    match &app.state {
        AppState::Draw => {}
        AppState::Settings(dialog) => settings::render(frame, chunks[0], dialog),
        AppState::ConfirmQuit => {
            dialog::render_confirm(frame, chunks[0], "Quit", "Do you want to quit?");
        }
        AppState::Warning { message } => dialog::render_warning(frame, chunks[0], message),
        AppState::Help { .. } => help::render(frame, chunks[0], &app.store().paths().user),
    }
}

/// Pool size, mask flag and the latest notice
fn status_text(app: &App) -> String {
    let engine = app.engine();
    let mut status = format!("{}/{} left", engine.remaining(), engine.original().len());
    if app.is_masked() {
        status.push_str(" | masked");
    }
    if let Some(notice) = app.notice() {
        status.push_str(" | ");
        status.push_str(&notice.text);
    }
    status
}

fn get_hints(app: &App) -> Vec<(&str, &str)> {
    match &app.state {
        AppState::Draw => vec![
            ("Space", app.appearance().button_text(app.engine().state())),
            ("r", "Reset"),
            ("m", if app.is_masked() { "Unmask" } else { "Mask" }),
            ("s", "Settings"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
        AppState::Settings(dialog) if dialog.confirm_discard => {
            vec![("y", "Discard"), ("n", "Keep editing")]
        }
        AppState::Settings(dialog) if dialog.editing.is_some() => {
            vec![("Enter", "Apply"), ("Esc", "Cancel edit")]
        }
        AppState::Settings(_) => vec![
            ("\u{2191}/\u{2193}", "Select"),
            ("\u{2190}/\u{2192}", "Adjust"),
            ("Enter", "Edit"),
            ("d", "Defaults"),
            ("Ctrl+S", "Save"),
            ("Esc", "Close"),
        ],
        AppState::ConfirmQuit => vec![("y", "Quit"), ("n", "Stay")],
        AppState::Warning { .. } => vec![("Enter", "OK")],
        AppState::Help { .. } => vec![("any key", "Close")],
    }
}
