//! Colors for the dialog chrome, and conversions from setting values to
//! terminal styles.

use lucky_draw_core::{FontSpec, FontStyle, Rgb};
use ratatui::prelude::{Color, Modifier, Style};

/// Accent used for dialog borders, titles and key hints
pub const ACCENT: Color = Color::Rgb(255, 198, 191);
/// Dialog text
pub const TEXT: Color = Color::Rgb(230, 230, 235);
/// Dimmed text
pub const SUBTLE: Color = Color::Rgb(150, 150, 165);
/// Dialog background
pub const PANEL_BG: Color = Color::Rgb(24, 24, 32);
/// Selected row background
pub const SELECTION_BG: Color = Color::Rgb(58, 75, 120);
pub const WARNING: Color = Color::Yellow;
pub const ERROR: Color = Color::Rgb(255, 110, 110);
pub const SUCCESS: Color = Color::Rgb(140, 220, 150);

/// A setting color as a terminal color
pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Black or white, whichever reads better on `background`
pub fn contrast(background: Rgb) -> Color {
    if background.luma() > 140 {
        Color::Black
    } else {
        Color::White
    }
}

/// Terminal modifiers for a font's style words. Family and size have no
/// terminal equivalent.
pub fn font_modifiers(font: &FontSpec) -> Modifier {
    font.styles()
        .iter()
        .fold(Modifier::empty(), |acc, style| {
            acc | match style {
                FontStyle::Bold => Modifier::BOLD,
                FontStyle::Italic => Modifier::ITALIC,
                FontStyle::Underline => Modifier::UNDERLINED,
                FontStyle::Overstrike => Modifier::CROSSED_OUT,
            }
        })
}

/// Foreground color plus font modifiers
pub fn text_style(fg: Rgb, font: &FontSpec) -> Style {
    Style::default().fg(color(fg)).add_modifier(font_modifiers(font))
}

/// Panel style for modal dialogs
pub fn panel() -> Style {
    Style::default().fg(TEXT).bg(PANEL_BG)
}
