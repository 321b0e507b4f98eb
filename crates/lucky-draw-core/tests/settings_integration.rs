//! Integration tests for the settings store.
//!
//! These tests exercise the on-disk behaviour: the user/default fallback
//! chain, saving, and a full edit session from load to commit.

use std::fs;
use std::path::Path;

use lucky_draw_core::settings::{builtin_defaults, keys};
use lucky_draw_core::{
    Appearance, EditSession, Error, FontStyle, Rgb, SettingsDocument, SettingsPaths, SettingsSource,
    SettingsStore,
};
use tempfile::TempDir;

/// Test fixture with a private settings directory.
struct TestFixture {
    _temp_dir: TempDir,
    paths: SettingsPaths,
}

impl TestFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let paths = SettingsPaths::in_dir(temp_dir.path());
        Self {
            _temp_dir: temp_dir,
            paths,
        }
    }

    fn write(&self, path: &Path, content: &str) {
        fs::write(path, content).expect("Failed to write settings file");
    }

    fn write_document(&self, path: &Path, document: &SettingsDocument) {
        self.write(path, &document.to_json().expect("Failed to render settings"));
    }

    fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).expect("Failed to read settings file")
    }
}

fn customised() -> SettingsDocument {
    let mut document = builtin_defaults();
    document.set_text(keys::WELCOME_TEXT, "Year-end party!");
    document
}

// =============================================================================
// Fallback chain
// =============================================================================

#[test]
fn test_load_prefers_user_file() {
    let fixture = TestFixture::new();
    fixture.write_document(&fixture.paths.user, &customised());
    fixture.write_document(&fixture.paths.defaults, &builtin_defaults());

    let store = SettingsStore::load(fixture.paths.clone()).expect("load failed");
    assert_eq!(store.source(), SettingsSource::UserFile);
    assert_eq!(store.live().text(keys::WELCOME_TEXT), Some("Year-end party!"));
    assert_eq!(store.defaults(), &builtin_defaults());
}

#[test]
fn test_load_falls_back_when_user_file_is_not_json() {
    let fixture = TestFixture::new();
    fixture.write(&fixture.paths.user, "{ this is not json");
    fixture.write_document(&fixture.paths.defaults, &builtin_defaults());

    let store = SettingsStore::load(fixture.paths.clone()).expect("load failed");
    assert_eq!(store.source(), SettingsSource::DefaultFile);
    assert_eq!(store.live(), &builtin_defaults());
}

#[test]
fn test_load_falls_back_when_user_file_misses_a_key() {
    let fixture = TestFixture::new();
    let mut incomplete = customised();
    incomplete.remove(keys::VISIBLE_RIGHT);
    fixture.write_document(&fixture.paths.user, &incomplete);
    fixture.write_document(&fixture.paths.defaults, &builtin_defaults());

    let store = SettingsStore::load(fixture.paths.clone()).expect("load failed");
    assert_eq!(store.source(), SettingsSource::DefaultFile);
    assert_eq!(store.live().text(keys::WELCOME_TEXT), Some("Lucky Draw!"));
}

#[test]
fn test_load_falls_back_when_user_file_missing() {
    let fixture = TestFixture::new();
    fixture.write_document(&fixture.paths.defaults, &customised());

    let store = SettingsStore::load(fixture.paths.clone()).expect("load failed");
    assert_eq!(store.source(), SettingsSource::DefaultFile);
    assert_eq!(store.live(), &customised());
}

#[test]
fn test_load_fails_when_both_files_broken() {
    let fixture = TestFixture::new();
    fixture.write(&fixture.paths.user, "[[\"Welcome text\", \"text\"");
    fixture.write(&fixture.paths.defaults, "[]");

    match SettingsStore::load(fixture.paths.clone()) {
        Err(Error::Configuration(message)) => {
            assert!(message.contains("user.json"), "{message}");
            assert!(message.contains("default.json"), "{message}");
        }
        other => panic!("expected configuration error, got {:?}", other),
    }
}

#[test]
fn test_load_fails_when_no_files_exist() {
    let fixture = TestFixture::new();
    assert!(matches!(
        SettingsStore::load(fixture.paths.clone()),
        Err(Error::Configuration(_))
    ));
}

#[test]
fn test_broken_default_file_uses_builtin_defaults_for_restore() {
    let fixture = TestFixture::new();
    fixture.write_document(&fixture.paths.user, &customised());
    fixture.write(&fixture.paths.defaults, "garbage");

    let store = SettingsStore::load(fixture.paths.clone()).expect("load failed");
    assert_eq!(store.source(), SettingsSource::UserFile);
    assert_eq!(store.defaults(), &builtin_defaults());
}

#[test]
fn test_extra_keys_and_order_are_accepted() {
    let fixture = TestFixture::new();
    let json = r##"[
	["Confetti", "text", "lots"],
	["Right visible letter count", "int", [0, 50, 4]],
	["Left visible letter count", "int", [0, 50, 3]],
	["End rolling text", "text", "Stop"],
	["Begin rolling text", "text", "Begin!"],
	["Rolling button background color", "color", "#FFC6BF"],
	["Rolling button foreground color", "color", "#3A4BFF"],
	["Rolling button font", "font", ["Arial", "20", "bold"]],
	["Congratulations text", "text", "恭喜!"],
	["Main text color", "color", "#FF0000"],
	["Main text font", "font", ["Arial", 20, "bold"]],
	["Main text vertical position", "int", [0, 200, 40]],
	["Welcome text", "text", "Lucky Draw!"],
	["Background color", "color", "#000000"],
	["Background image path", "path", "../image.jpg"]
]"##;
    fixture.write(&fixture.paths.user, json);

    let store = SettingsStore::load(fixture.paths.clone()).expect("load failed");
    assert_eq!(store.source(), SettingsSource::UserFile);
    assert_eq!(store.live().len(), 15);
    assert_eq!(store.live().text(keys::WINNER_LABEL), Some("恭喜!"));
}

#[test]
fn test_space_joined_font_styles_load_from_user_file() {
    let fixture = TestFixture::new();
    let json = r##"[
	["Background image path", "path", "../image.jpg"],
	["Background color", "color", "#000000"],
	["Welcome text", "text", "Year-end party!"],
	["Main text vertical position", "int", [0, 200, 40]],
	["Main text font", "font", ["Arial", 20, "bold italic"]],
	["Main text color", "color", "#FF0000"],
	["Congratulations text", "text", "Congratulations!"],
	["Rolling button font", "font", ["Arial", 20, ""]],
	["Rolling button foreground color", "color", "#3A4BFF"],
	["Rolling button background color", "color", "#FFC6BF"],
	["Begin rolling text", "text", "Begin!"],
	["End rolling text", "text", "Stop"],
	["Left visible letter count", "int", [0, 50, 3]],
	["Right visible letter count", "int", [0, 50, 4]]
]"##;
    fixture.write(&fixture.paths.user, json);
    fixture.write_document(&fixture.paths.defaults, &builtin_defaults());

    let store = SettingsStore::load(fixture.paths.clone()).expect("load failed");
    assert_eq!(store.source(), SettingsSource::UserFile);
    assert_eq!(store.live().text(keys::WELCOME_TEXT), Some("Year-end party!"));

    let main_font = store.live().font(keys::MAIN_FONT).expect("main font");
    assert!(main_font.has_style(FontStyle::Bold));
    assert!(main_font.has_style(FontStyle::Italic));
    let button_font = store.live().font(keys::BUTTON_FONT).expect("button font");
    assert!(button_font.styles().is_empty());
}

// =============================================================================
// Saving and defaults installation
// =============================================================================

#[test]
fn test_save_writes_tab_indented_utf8() {
    let fixture = TestFixture::new();
    let store = SettingsStore::from_parts(fixture.paths.clone(), builtin_defaults(), builtin_defaults());

    let mut document = builtin_defaults();
    document.set_text(keys::WINNER_LABEL, "Gratulálunk!");
    store.save(&document).expect("save failed");

    let written = fixture.read(&fixture.paths.user);
    assert!(written.contains("\n\t[\n\t\t\"Background image path\""));
    assert!(written.contains("Gratulálunk!"));
    assert_eq!(SettingsDocument::from_json(&written).unwrap(), document);
}

#[test]
fn test_save_overwrites_and_creates_directories() {
    let fixture = TestFixture::new();
    let nested = SettingsPaths::in_dir(fixture.paths.user.parent().unwrap().join("a/b"));
    let store = SettingsStore::from_parts(nested.clone(), builtin_defaults(), builtin_defaults());

    store.save(&customised()).expect("first save failed");
    store.save(&builtin_defaults()).expect("second save failed");

    let reloaded = lucky_draw_core::settings::load_document(&nested.user).unwrap();
    assert_eq!(reloaded, builtin_defaults());
}

#[test]
fn test_install_defaults_respects_existing_file() {
    let fixture = TestFixture::new();
    assert!(SettingsStore::install_defaults(&fixture.paths, false).unwrap());
    assert!(!fixture.paths.user.exists());

    fixture.write_document(&fixture.paths.defaults, &customised());
    assert!(!SettingsStore::install_defaults(&fixture.paths, false).unwrap());
    assert!(fixture.read(&fixture.paths.defaults).contains("Year-end party!"));

    assert!(SettingsStore::install_defaults(&fixture.paths, true).unwrap());
    let store = SettingsStore::load(fixture.paths.clone()).unwrap();
    assert_eq!(store.live(), &builtin_defaults());
}

// =============================================================================
// Edit sessions end to end
// =============================================================================

#[test]
fn test_commit_replaces_live_and_persists() {
    let fixture = TestFixture::new();
    SettingsStore::install_defaults(&fixture.paths, false).unwrap();
    let mut store = SettingsStore::load(fixture.paths.clone()).unwrap();
    let mut look = Appearance::from_settings(store.live());

    let mut session = store.begin_edit();
    session.set_color(keys::BACKGROUND_COLOR, Rgb::new(0x10, 0x20, 0x30), &mut look);
    session.set_int(keys::VISIBLE_LEFT, 2, &mut look);
    assert_eq!(look.background_color, Rgb::new(0x10, 0x20, 0x30));
    assert_eq!(store.live().color(keys::BACKGROUND_COLOR), Some("#000000"));

    session.commit(&mut store).expect("commit failed");
    assert_eq!(store.live().color(keys::BACKGROUND_COLOR), Some("#102030"));
    assert_eq!(store.source(), SettingsSource::UserFile);

    let reloaded = SettingsStore::load(fixture.paths.clone()).unwrap();
    assert_eq!(reloaded.source(), SettingsSource::UserFile);
    assert_eq!(reloaded.live(), store.live());
}

#[test]
fn test_discard_leaves_live_and_disk_untouched() {
    let fixture = TestFixture::new();
    SettingsStore::install_defaults(&fixture.paths, false).unwrap();
    let store = SettingsStore::load(fixture.paths.clone()).unwrap();
    let mut look = Appearance::from_settings(store.live());

    let mut session: EditSession = store.begin_edit();
    session.set_text(keys::BEGIN_TEXT, "Go go go", &mut look);
    assert_eq!(look.begin_text, "Go go go");
    session.discard(store.live(), &mut look);

    assert_eq!(look.begin_text, "Begin!");
    assert_eq!(store.live(), &builtin_defaults());
    assert!(!fixture.paths.user.exists());
}

#[test]
fn test_fit_int_max_applies_to_live_and_defaults() {
    let fixture = TestFixture::new();
    let mut store = SettingsStore::from_parts(fixture.paths.clone(), builtin_defaults(), builtin_defaults());
    store.fit_int_max(keys::TEXT_POSITION, 24);
    assert_eq!(store.live().int(keys::TEXT_POSITION).unwrap().max, 24);
    assert_eq!(store.live().int(keys::TEXT_POSITION).unwrap().value, 24);
    assert_eq!(store.defaults().int(keys::TEXT_POSITION).unwrap().max, 24);
}
