//! The draw view: backdrop, main text and the start/stop button

use lucky_draw_core::IntRange;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::theme;

/// Rows taken by the button
const BUTTON_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let look = app.appearance();
    app.backdrop()
        .render(frame.buffer_mut(), area, look.background_color);

    let button_space = if area.height > BUTTON_HEIGHT + 2 {
        BUTTON_HEIGHT + 1
    } else {
        0
    };

    // Main text
    let text = app
        .engine()
        .display_text(&look.display_options(app.is_masked()));
    let style = theme::text_style(look.main_color, &look.main_font);
    let lines: Vec<Line> = text
        .lines()
        .map(|line| Line::styled(line.to_string(), style))
        .collect();
    let text_height = (lines.len() as u16).min(area.height);
    let free_rows = area.height.saturating_sub(text_height + button_space);
    let text_area = Rect::new(
        area.x,
        area.y + text_row(&look.text_position, free_rows),
        area.width,
        text_height,
    );
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), text_area);

    if button_space == 0 {
        return;
    }

    // Button
    let label = look.button_text(app.engine().state());
    let width = (Span::raw(label).width() as u16 + 8).min(area.width);
    let button_area = Rect::new(
        area.x + (area.width - width) / 2,
        area.bottom() - button_space,
        width,
        BUTTON_HEIGHT,
    );
    let button_style = Style::default()
        .fg(theme::color(look.button_foreground))
        .bg(theme::color(look.button_background))
        .add_modifier(theme::font_modifiers(&look.button_font));
    let button = Paragraph::new(vec![Line::from(""), Line::from(label.to_string())])
        .alignment(Alignment::Center)
        .style(button_style);
    frame.render_widget(button, button_area);
}

/// First row of the main text: the position's share of its range, applied
/// to the rows available
fn text_row(position: &IntRange, free_rows: u16) -> u16 {
    // Widened so any range read from a settings file fits
    let (min, max, value) = (
        i128::from(position.min),
        i128::from(position.max),
        i128::from(position.value),
    );
    let span = max - min;
    if span <= 0 {
        return 0;
    }
    let offset = (value - min).clamp(0, span);
    u16::try_from(offset * i128::from(free_rows) / span).unwrap_or(free_rows)
}
