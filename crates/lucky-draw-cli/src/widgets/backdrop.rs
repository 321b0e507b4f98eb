//! Background image drawn with half-block characters
//!
//! Each terminal cell shows two vertical pixels: the upper one as the
//! foreground of `▀`, the lower one as the background.

use std::cell::RefCell;
use std::path::Path;

use image::RgbImage;
use lucky_draw_core::{BackgroundImage, Rgb};
use ratatui::prelude::*;

use crate::theme;

const UPPER_HALF: &str = "\u{2580}";

/// The decoded background plus its last resize
#[derive(Debug, Default)]
pub struct Backdrop {
    source: Option<BackgroundImage>,
    scaled: RefCell<Option<RgbImage>>,
}

impl Backdrop {
    /// Decode `path`; an unreadable image leaves the backdrop empty
    pub fn load(path: &Path) -> Self {
        Self {
            source: BackgroundImage::try_open(path),
            scaled: RefCell::new(None),
        }
    }

    /// Whether `path` is what this backdrop was loaded from
    pub fn is_for(&self, path: &Path) -> bool {
        match &self.source {
            Some(image) => image.path() == path,
            None => false,
        }
    }

    /// Fill `area`, with `fallback` when there is no image
    pub fn render(&self, buf: &mut Buffer, area: Rect, fallback: Rgb) {
        let Some(source) = &self.source else {
            buf.set_style(area, Style::default().bg(theme::color(fallback)));
            return;
        };
        if area.is_empty() {
            return;
        }

        let (width, height) = (area.width as u32, area.height as u32 * 2);
        let mut scaled = self.scaled.borrow_mut();
        let stale = scaled
            .as_ref()
            .map_or(true, |image| image.dimensions() != (width, height));
        if stale {
            *scaled = Some(source.scaled(width, height));
        }
        let Some(pixels) = scaled.as_ref() else {
            return;
        };

        for y in 0..area.height {
            for x in 0..area.width {
                let top = pixels.get_pixel(x as u32, y as u32 * 2).0;
                let bottom = pixels.get_pixel(x as u32, y as u32 * 2 + 1).0;
                buf[(area.x + x, area.y + y)]
                    .set_symbol(UPPER_HALF)
                    .set_fg(Color::Rgb(top[0], top[1], top[2]))
                    .set_bg(Color::Rgb(bottom[0], bottom[1], bottom[2]));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_image_fills_with_color() {
        let missing = Path::new("does/not/exist.png");
        let backdrop = Backdrop::load(missing);
        assert!(!backdrop.is_for(missing));

        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        backdrop.render(&mut buf, area, Rgb::new(10, 20, 30));
        assert_eq!(buf[(3, 1)].bg, Color::Rgb(10, 20, 30));
    }

    #[test]
    fn test_image_uses_half_blocks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stripes.png");
        let mut stripes = RgbImage::new(2, 2);
        for (_, y, pixel) in stripes.enumerate_pixels_mut() {
            *pixel = if y == 0 { image::Rgb([255, 0, 0]) } else { image::Rgb([0, 0, 255]) };
        }
        stripes.save(&path).unwrap();

        let backdrop = Backdrop::load(&path);
        assert!(backdrop.is_for(&path));

        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        backdrop.render(&mut buf, area, Rgb::BLACK);
        let cell = &buf[(0, 0)];
        assert_eq!(cell.symbol(), UPPER_HALF);
        assert_eq!(cell.fg, Color::Rgb(255, 0, 0));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 255));
    }
}
