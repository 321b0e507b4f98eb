//! Application state and key handling

use std::time::Duration;

use crossterm::event::KeyEvent;
use lucky_draw_core::settings::keys;
use lucky_draw_core::{
    check_image, Appearance, DrawEngine, EditSession, FontSpec, Rgb, SettingEntry, SettingKind,
    SettingValue, SettingsStore,
};
use ratatui::prelude::*;
use tracing::{debug, info, warn};

use crate::event;
use crate::screens;
use crate::widgets::Backdrop;

/// How often the shown name changes while rolling
pub const ROLLING_INTERVAL: Duration = Duration::from_millis(30);

/// A one-line message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// State of the settings dialog
#[derive(Debug, Clone)]
pub struct SettingsDialog {
    pub session: EditSession,
    pub selected: usize,
    /// Input being typed for the selected entry
    pub editing: Option<String>,
    /// Feedback shown under the list
    pub message: Option<Notice>,
    /// Asking whether to drop unsaved changes
    pub confirm_discard: bool,
}

impl SettingsDialog {
    pub fn new(session: EditSession) -> Self {
        Self {
            session,
            selected: 0,
            editing: None,
            message: None,
            confirm_discard: false,
        }
    }

    pub fn selected_entry(&self) -> Option<&SettingEntry> {
        self.session.working().entries().get(self.selected)
    }
}

#[derive(Debug, Clone)]
pub enum AppState {
    /// The draw view, nothing on top
    Draw,
    Settings(SettingsDialog),
    ConfirmQuit,
    /// A message the user has to acknowledge
    Warning {
        message: String,
    },
    Help {
        /// The state to return to when help is closed
        previous_state: Box<AppState>,
    },
}

/// Main application
pub struct App {
    pub state: AppState,
    pub should_quit: bool,
    engine: DrawEngine,
    store: SettingsStore,
    appearance: Appearance,
    masked: bool,
    backdrop: Backdrop,
    notice: Option<Notice>,
}

impl App {
    pub fn new(engine: DrawEngine, store: SettingsStore) -> Self {
        let appearance = Appearance::from_settings(store.live());
        let backdrop = Backdrop::load(&appearance.background_image);
        info!(candidates = engine.remaining(), "Draw ready");
        Self {
            state: AppState::Draw,
            should_quit: false,
            engine,
            store,
            appearance,
            masked: false,
            backdrop,
            notice: None,
        }
    }

    pub fn engine(&self) -> &DrawEngine {
        &self.engine
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Let the text position span the terminal height
    pub fn fit_to_height(&mut self, rows: u16) {
        self.store
            .fit_int_max(keys::TEXT_POSITION, rows.saturating_sub(1).max(1) as i64);
        self.appearance = Appearance::from_settings(self.store.live());
    }

    /// Advance the rolling animation. Runs in every state, so the draw keeps
    /// rolling behind dialogs.
    pub fn tick(&mut self) {
        if !self.engine.is_rolling() {
            return;
        }
        if let Err(e) = self.engine.tick() {
            warn!(error = %e, "Tick rejected");
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        screens::render(frame, self);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match &self.state {
            AppState::Help { .. } => self.close_help(),
            AppState::Draw => self.handle_draw_key(key),
            AppState::Settings(_) => self.handle_settings_key(key),
            AppState::ConfirmQuit => self.handle_confirm_quit_key(key),
            AppState::Warning { .. } => {
                if event::is_enter(&key) || event::is_escape(&key) || event::is_space(&key) {
                    self.state = AppState::Draw;
                }
            }
        }
    }

    // =========================================================================
    // Draw view
    // =========================================================================

    fn handle_draw_key(&mut self, key: KeyEvent) {
        self.notice = None;

        if event::is_activate(&key) {
            self.toggle_rolling();
        } else if event::is_key(&key, 'r') {
            self.engine.reset();
        } else if event::is_key(&key, 'm') {
            self.masked = !self.masked;
            debug!(masked = self.masked, "Mask toggled");
        } else if event::is_key(&key, 's') {
            self.state = AppState::Settings(SettingsDialog::new(self.store.begin_edit()));
        } else if event::is_help(&key) {
            self.show_help();
        } else if event::is_escape(&key) || event::is_quit(&key) {
            self.state = AppState::ConfirmQuit;
        }
    }

    /// The start/stop button
    pub fn toggle_rolling(&mut self) {
        if self.engine.is_rolling() {
            if let Err(e) = self.engine.stop() {
                warn!(error = %e, "Stop rejected");
            }
            return;
        }

        match self.engine.start() {
            Ok(()) => {}
            Err(e) if e.is_warning() => {
                self.state = AppState::Warning {
                    message: e.to_string(),
                };
            }
            Err(e) => warn!(error = %e, "Start rejected"),
        }
    }

    fn handle_confirm_quit_key(&mut self, key: KeyEvent) {
        if event::is_key(&key, 'y') || event::is_enter(&key) {
            self.should_quit = true;
        } else if event::is_key(&key, 'n') || event::is_escape(&key) {
            self.state = AppState::Draw;
        }
    }

    fn show_help(&mut self) {
        let previous_state = Box::new(std::mem::replace(&mut self.state, AppState::Draw));
        self.state = AppState::Help { previous_state };
    }

    fn close_help(&mut self) {
        if let AppState::Help { previous_state } = std::mem::replace(&mut self.state, AppState::Draw) {
            self.state = *previous_state;
        }
    }

    // =========================================================================
    // Settings dialog
    // =========================================================================

    fn handle_settings_key(&mut self, key: KeyEvent) {
        let AppState::Settings(dialog) = &mut self.state else {
            return;
        };

        if dialog.confirm_discard {
            if event::is_key(&key, 'y') || event::is_enter(&key) {
                self.discard_settings();
            } else if event::is_key(&key, 'n') || event::is_escape(&key) {
                dialog.confirm_discard = false;
            }
            return;
        }

        if dialog.editing.is_some() {
            self.handle_field_key(key);
            return;
        }

        let entries = dialog.session.working().len();
        if event::is_save(&key) {
            self.save_settings();
        } else if event::is_up(&key) {
            dialog.selected = dialog.selected.saturating_sub(1);
            dialog.message = None;
        } else if event::is_down(&key) {
            if dialog.selected + 1 < entries {
                dialog.selected += 1;
            }
            dialog.message = None;
        } else if event::is_left(&key) {
            self.step_int(-1);
        } else if event::is_right(&key) {
            self.step_int(1);
        } else if event::is_enter(&key) {
            dialog.editing = dialog.selected_entry().map(|entry| edit_text(&entry.value));
            dialog.message = None;
        } else if event::is_key(&key, 'd') {
            dialog
                .session
                .restore_defaults(self.store.defaults(), &mut self.appearance);
            dialog.selected = dialog
                .selected
                .min(dialog.session.working().len().saturating_sub(1));
            dialog.message = Some(Notice::info("Defaults restored, Ctrl+S to save"));
            self.refresh_backdrop();
        } else if event::is_help(&key) {
            self.show_help();
        } else if event::is_escape(&key) {
            if dialog.session.is_dirty() {
                dialog.confirm_discard = true;
            } else {
                self.discard_settings();
            }
        }
    }

    /// Keys while an inline editor is open
    fn handle_field_key(&mut self, key: KeyEvent) {
        if event::is_enter(&key) {
            self.apply_field();
            return;
        }

        let AppState::Settings(dialog) = &mut self.state else {
            return;
        };
        if event::is_escape(&key) {
            dialog.editing = None;
            dialog.message = None;
            return;
        }
        let Some(buffer) = dialog.editing.as_mut() else {
            return;
        };
        if event::is_backspace(&key) {
            buffer.pop();
        } else if let Some(c) = event::typed_char(&key) {
            buffer.push(c);
        }
    }

    /// Move the selected int setting by `delta`, within its range
    fn step_int(&mut self, delta: i64) {
        let AppState::Settings(dialog) = &mut self.state else {
            return;
        };
        let Some(entry) = dialog.selected_entry() else {
            return;
        };
        let SettingValue::Int(range) = &entry.value else {
            return;
        };

        let target = range
            .value
            .saturating_add(delta)
            .clamp(range.min, range.max.max(range.min));
        if target == range.value {
            return;
        }
        let name = entry.name.clone();
        dialog.session.set_int(&name, target, &mut self.appearance);
    }

    /// Parse the inline editor's input and put it into the working copy.
    /// Invalid input keeps the editor open with a message.
    fn apply_field(&mut self) {
        let AppState::Settings(dialog) = &mut self.state else {
            return;
        };
        let (Some(entry), Some(input)) = (dialog.selected_entry(), dialog.editing.as_deref()) else {
            return;
        };
        let name = entry.name.clone();
        let kind = entry.kind();
        let input = input.to_string();
        let trimmed = input.trim();

        let outcome = match kind {
            SettingKind::Text => {
                dialog.session.set_text(&name, &input, &mut self.appearance);
                Ok(())
            }
            SettingKind::Int => match trimmed.parse::<i64>() {
                Ok(value) => {
                    dialog.session.set_int(&name, value, &mut self.appearance);
                    Ok(())
                }
                Err(_) => Err(format!("Not a whole number: '{}'", trimmed)),
            },
            SettingKind::Color => match trimmed.parse::<Rgb>() {
                Ok(color) => {
                    dialog.session.set_color(&name, color, &mut self.appearance);
                    Ok(())
                }
                Err(e) => Err(e.to_string()),
            },
            SettingKind::Font => match trimmed.parse::<FontSpec>() {
                Ok(font) => {
                    dialog.session.set_font(&name, font, &mut self.appearance);
                    Ok(())
                }
                Err(e) => Err(e.to_string()),
            },
            SettingKind::Path => match check_image(trimmed) {
                Ok((width, height)) => {
                    // Stored absolute
                    let stored = std::fs::canonicalize(trimmed)
                        .map(|path| path.display().to_string())
                        .unwrap_or_else(|_| trimmed.to_string());
                    debug!(path = %stored, width, height, "Background image accepted");
                    dialog.session.set_path(&name, &stored, &mut self.appearance);
                    Ok(())
                }
                Err(e) => {
                    warn!(error = %e, "Background image rejected");
                    Err(format!("Invalid image: {}", trimmed))
                }
            },
        };

        match outcome {
            Ok(()) => {
                dialog.editing = None;
                dialog.message = None;
                self.refresh_backdrop();
            }
            Err(message) => dialog.message = Some(Notice::error(message)),
        }
    }

    fn save_settings(&mut self) {
        let AppState::Settings(dialog) = &mut self.state else {
            return;
        };
        match dialog.session.clone().commit(&mut self.store) {
            Ok(()) => {
                self.notice = Some(Notice::info(format!(
                    "Settings saved to {}",
                    self.store.paths().user.display()
                )));
                self.state = AppState::Draw;
            }
            Err(e) => {
                warn!(error = %e, "Saving settings failed");
                dialog.message = Some(Notice::error(format!("Save failed: {}", e)));
            }
        }
    }

    /// Close the dialog, reverting the preview to the live settings
    fn discard_settings(&mut self) {
        if let AppState::Settings(dialog) = std::mem::replace(&mut self.state, AppState::Draw) {
            dialog.session.discard(self.store.live(), &mut self.appearance);
            self.refresh_backdrop();
        }
    }

    fn refresh_backdrop(&mut self) {
        if !self.backdrop.is_for(&self.appearance.background_image) {
            self.backdrop = Backdrop::load(&self.appearance.background_image);
        }
    }
}

/// Initial editor contents for a value
fn edit_text(value: &SettingValue) -> String {
    match value {
        SettingValue::Int(range) => range.value.to_string(),
        SettingValue::Text(s) | SettingValue::Color(s) | SettingValue::Path(s) => s.clone(),
        SettingValue::Font(font) => font.to_string(),
    }
}
