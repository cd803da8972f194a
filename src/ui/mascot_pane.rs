use crate::app::AppState;
use crate::domain::{MascotMode, Position, WaypointSource};
use crate::persistence::KeyValueStore;
use crate::ui::styles::{border_style, bubble_style, forest_style, mascot_style, title_style};
use chrono::Local;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SPARKLE_FRAMES: [&str; 4] = ["·  ✦  ·", "✦  ·  ✦", "·  ✧  ·", "✧  ·  ✧"];
const FOREST_FLOOR: &str = "🌲 🌳 🌲 🌲 🌳 ";
const ASCII_FLOOR: &str = "^ ^^ ^ ^^^ ^ ";

/// Seconds each flying line stays up before the next one
const BUBBLE_PERIOD_SECS: i64 = 5;
const FLYING_LINES: [&str; 2] = ["Let's focus! ✨", "Study magic activated! 🔮"];
const FLYING_LINES_ASCII: [&str; 2] = ["Let's focus!", "Study magic activated!"];
const CELEBRATE_LINE: &str = "Great job! ⭐ Keep it up!";
const CELEBRATE_LINE_ASCII: &str = "Great job! Keep it up!";

/// Render the forest pane with the witch at her current position
pub fn render_mascot_pane<S: KeyValueStore, R: WaypointSource>(f: &mut Frame, app: &AppState<S, R>, area: Rect) {
    let mode = app.session.mode();
    let title = Line::from(vec![
        Span::styled(" Forest ", title_style()),
        Span::styled(format!("· {} ", mode.label()), mascot_style(mode)),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Forest floor along the bottom row
    let floor_pattern = if app.use_emoji { FOREST_FLOOR } else { ASCII_FLOOR };
    let floor_row = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    let floor = floor_pattern.repeat(usize::from(inner.width) / floor_pattern.chars().count() + 1);
    f.render_widget(Paragraph::new(floor).style(forest_style()), floor_row);

    let glyph = mode.glyph(app.use_emoji);
    // Emoji glyphs are two cells wide
    let glyph_width = glyph.chars().count() as u16 * if app.use_emoji { 2 } else { 1 };
    let (col, row) = cell_for(app.mascot.position(), inner, glyph_width);

    let bubble = speech_bubble(mode, app.mascot.is_roaming(), Local::now().timestamp(), app.use_emoji);
    let mut above = row;
    if let Some(text) = bubble {
        if above > inner.y {
            above -= 1;
            render_above(f, text, bubble_style(mode), col, above, inner);
        }
    }

    if mode == MascotMode::Celebrating && above > inner.y {
        let sparkle = SPARKLE_FRAMES[(app.animation_frame / 3) as usize % SPARKLE_FRAMES.len()];
        render_above(f, sparkle, mascot_style(mode), col, above - 1, inner);
    }

    let width = glyph_width.min(inner.x + inner.width - col);
    f.render_widget(
        Paragraph::new(glyph).style(mascot_style(mode)),
        Rect::new(col, row, width, 1),
    );
}

/// One line of text starting a little left of `col`, kept inside `inner`
fn render_above(f: &mut Frame, text: &str, style: Style, col: u16, row: u16, inner: Rect) {
    // Each line carries at most one two-cell emoji
    let width = (text.chars().count() as u16 + 1).min(inner.width);
    let x = col.saturating_sub(3).max(inner.x).min(inner.x + inner.width - width);
    f.render_widget(Paragraph::new(text.to_string()).style(style), Rect::new(x, row, width, 1));
}

/// What the witch says: encouragement while she flies, praise while celebrating
pub fn speech_bubble(mode: MascotMode, roaming: bool, now_secs: i64, use_emoji: bool) -> Option<&'static str> {
    match mode {
        MascotMode::Celebrating => Some(if use_emoji { CELEBRATE_LINE } else { CELEBRATE_LINE_ASCII }),
        MascotMode::Active if roaming => {
            let lines = if use_emoji { FLYING_LINES } else { FLYING_LINES_ASCII };
            let index = now_secs.div_euclid(BUBBLE_PERIOD_SECS).rem_euclid(2) as usize;
            Some(lines[index])
        }
        _ => None,
    }
}

/// Map a percent position onto a cell inside `area`, keeping a glyph of `glyph_width` fully visible
pub fn cell_for(position: Position, area: Rect, glyph_width: u16) -> (u16, u16) {
    let usable_w = area.width.saturating_sub(glyph_width);
    // The bottom row is the forest floor
    let usable_h = area.height.saturating_sub(2);

    let col = area.x + ((position.x / 100.0) * f64::from(usable_w)).round() as u16;
    let row = area.y + ((position.y / 100.0) * f64::from(usable_h)).round() as u16;
    (col.min(area.x + usable_w), row.min(area.y + usable_h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mascot::REST_POSITION;

    #[test]
    fn test_cell_for_corners() {
        let area = Rect::new(10, 5, 52, 22);
        assert_eq!(cell_for(Position::new(0.0, 0.0), area, 2), (10, 5));
        assert_eq!(cell_for(Position::new(100.0, 100.0), area, 2), (60, 25));
        assert_eq!(cell_for(Position::new(50.0, 50.0), area, 2), (35, 15));
    }

    #[test]
    fn test_rest_position_sits_bottom_right() {
        let area = Rect::new(0, 0, 102, 12);
        let (col, row) = cell_for(REST_POSITION, area, 2);
        assert_eq!(col, 85);
        assert_eq!(row, 8);
    }

    #[test]
    fn test_speech_bubble_alternates_while_flying() {
        assert_eq!(speech_bubble(MascotMode::Active, true, 0, true), Some("Let's focus! ✨"));
        assert_eq!(speech_bubble(MascotMode::Active, true, 4, true), Some("Let's focus! ✨"));
        assert_eq!(speech_bubble(MascotMode::Active, true, 5, true), Some("Study magic activated! 🔮"));
        assert_eq!(speech_bubble(MascotMode::Active, true, 10, false), Some("Let's focus!"));
        assert_eq!(speech_bubble(MascotMode::Active, false, 0, true), None);
    }

    #[test]
    fn test_speech_bubble_praise_and_silence() {
        assert_eq!(speech_bubble(MascotMode::Celebrating, false, 7, true), Some("Great job! ⭐ Keep it up!"));
        assert_eq!(speech_bubble(MascotMode::Celebrating, true, 7, false), Some("Great job! Keep it up!"));
        assert_eq!(speech_bubble(MascotMode::Idle, false, 0, true), None);
    }

    #[test]
    fn test_tiny_area_stays_inside() {
        let area = Rect::new(3, 3, 1, 1);
        let (col, row) = cell_for(Position::new(99.0, 99.0), area, 2);
        assert_eq!((col, row), (3, 3));
    }
}
