//! Edit sessions over a working copy of the settings

use tracing::debug;

use super::color::Rgb;
use super::document::SettingsDocument;
use super::font::FontSpec;
use super::store::SettingsStore;
use crate::error::Result;

/// Something that redraws itself from settings.
///
/// Edit sessions call this synchronously after every change to the working
/// copy so a preview can follow the edits.
pub trait SettingsObserver {
    fn settings_changed(&mut self, settings: &SettingsDocument);
}

impl<F: FnMut(&SettingsDocument)> SettingsObserver for F {
    fn settings_changed(&mut self, settings: &SettingsDocument) {
        self(settings)
    }
}

/// A working copy of the live settings.
///
/// Nothing reaches the live document until [`commit`](Self::commit);
/// [`discard`](Self::discard) drops the copy.
#[derive(Debug, Clone)]
pub struct EditSession {
    working: SettingsDocument,
    dirty: bool,
}

impl EditSession {
    pub fn new(live: &SettingsDocument) -> Self {
        Self {
            working: live.clone(),
            dirty: false,
        }
    }

    pub fn working(&self) -> &SettingsDocument {
        &self.working
    }

    /// Whether anything changed since the session started
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Dialog title, starred once there are unsaved changes
    pub fn title(&self) -> &'static str {
        if self.dirty {
            "Settings *"
        } else {
            "Settings"
        }
    }

    pub fn set_int(&mut self, key: &str, value: i64, observer: &mut dyn SettingsObserver) -> bool {
        let changed = self.working.set_int(key, value);
        self.after_edit(changed, observer)
    }

    pub fn set_text(&mut self, key: &str, text: &str, observer: &mut dyn SettingsObserver) -> bool {
        let changed = self.working.set_text(key, text);
        self.after_edit(changed, observer)
    }

    pub fn set_font(&mut self, key: &str, font: FontSpec, observer: &mut dyn SettingsObserver) -> bool {
        let changed = self.working.set_font(key, font);
        self.after_edit(changed, observer)
    }

    pub fn set_color(&mut self, key: &str, color: Rgb, observer: &mut dyn SettingsObserver) -> bool {
        let changed = self.working.set_color(key, color);
        self.after_edit(changed, observer)
    }

    pub fn set_path(&mut self, key: &str, path: &str, observer: &mut dyn SettingsObserver) -> bool {
        let changed = self.working.set_path(key, path);
        self.after_edit(changed, observer)
    }

    /// Replace the working copy with the defaults, then notify once.
    /// Extra keys and the entry order of the working copy are dropped.
    pub fn restore_defaults(&mut self, defaults: &SettingsDocument, observer: &mut dyn SettingsObserver) {
        self.working = defaults.clone();
        debug!(entries = defaults.len(), "Restored default settings");
        self.notify(observer);
    }

    /// Save the working copy and make it live
    pub fn commit(self, store: &mut SettingsStore) -> Result<()> {
        store.commit(self.working)
    }

    /// Drop the working copy. When it had changes the observer is pointed
    /// back at the live settings so the preview reverts.
    pub fn discard(self, live: &SettingsDocument, observer: &mut dyn SettingsObserver) {
        if self.dirty {
            observer.settings_changed(live);
        }
    }

    fn after_edit(&mut self, changed: bool, observer: &mut dyn SettingsObserver) -> bool {
        if changed {
            self.notify(observer);
        }
        changed
    }

    fn notify(&mut self, observer: &mut dyn SettingsObserver) {
        self.dirty = true;
        observer.settings_changed(&self.working);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::schema::{builtin_defaults, keys};
    use crate::settings::value::SettingValue;

    /// Counts notifications and remembers the last document seen
    #[derive(Default)]
    struct Recorder {
        calls: usize,
        last: Option<SettingsDocument>,
    }

    impl SettingsObserver for Recorder {
        fn settings_changed(&mut self, settings: &SettingsDocument) {
            self.calls += 1;
            self.last = Some(settings.clone());
        }
    }

    #[test]
    fn test_new_session_is_clean_copy() {
        let live = builtin_defaults();
        let session = EditSession::new(&live);
        assert!(!session.is_dirty());
        assert_eq!(session.title(), "Settings");
        assert_eq!(session.working(), &live);
    }

    #[test]
    fn test_each_edit_notifies_with_working_copy() {
        let live = builtin_defaults();
        let mut session = EditSession::new(&live);
        let mut recorder = Recorder::default();

        assert!(session.set_text(keys::WELCOME_TEXT, "Hello", &mut recorder));
        assert!(session.set_int(keys::VISIBLE_LEFT, 1, &mut recorder));
        assert!(session.set_color(keys::MAIN_COLOR, Rgb::new(1, 2, 3), &mut recorder));

        assert_eq!(recorder.calls, 3);
        let last = recorder.last.unwrap();
        assert_eq!(last.text(keys::WELCOME_TEXT), Some("Hello"));
        assert_eq!(last.color(keys::MAIN_COLOR), Some("#010203"));
        assert!(session.is_dirty());
        assert_eq!(session.title(), "Settings *");

        // the live document is untouched
        assert_eq!(live.text(keys::WELCOME_TEXT), Some("Lucky Draw!"));
    }

    #[test]
    fn test_unmatched_edit_does_not_notify() {
        let mut session = EditSession::new(&builtin_defaults());
        let mut recorder = Recorder::default();
        assert!(!session.set_text("Nope", "x", &mut recorder));
        assert!(!session.set_text(keys::VISIBLE_LEFT, "x", &mut recorder));
        assert_eq!(recorder.calls, 0);
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_restore_defaults_notifies_once() {
        let defaults = builtin_defaults();
        let mut live = defaults.clone();
        live.set_text(keys::WELCOME_TEXT, "Custom");
        live.set_int(keys::VISIBLE_RIGHT, 9);

        let mut session = EditSession::new(&live);
        let mut recorder = Recorder::default();
        session.restore_defaults(&defaults, &mut recorder);

        assert_eq!(recorder.calls, 1);
        assert_eq!(session.working(), &defaults);
        assert!(session.is_dirty());
    }

    #[test]
    fn test_restore_defaults_drops_extra_keys_and_order() {
        let defaults = builtin_defaults();
        let mut live = SettingsDocument::new(defaults.iter().rev().cloned().collect());
        live.put("Confetti", SettingValue::Text("lots".to_string()));

        let mut session = EditSession::new(&live);
        let mut recorder = Recorder::default();
        session.restore_defaults(&defaults, &mut recorder);

        assert_eq!(recorder.calls, 1);
        assert!(!session.working().contains("Confetti"));
        assert_eq!(session.working().entries(), defaults.entries());
    }

    #[test]
    fn test_discard_reverts_preview_only_when_dirty() {
        let live = builtin_defaults();
        let mut recorder = Recorder::default();

        EditSession::new(&live).discard(&live, &mut recorder);
        assert_eq!(recorder.calls, 0);

        let mut session = EditSession::new(&live);
        session.set_text(keys::STOP_TEXT, "Halt", &mut recorder);
        session.discard(&live, &mut recorder);
        assert_eq!(recorder.calls, 2);
        assert_eq!(recorder.last.unwrap(), live);
    }

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        let mut session = EditSession::new(&builtin_defaults());
        session.set_text(keys::BEGIN_TEXT, "Go", &mut |doc: &SettingsDocument| {
            seen.push(doc.text(keys::BEGIN_TEXT).unwrap_or_default().to_string())
        });
        assert_eq!(seen, vec!["Go"]);
    }
}
