use crate::app::AppState;
use crate::domain::{Focus, SessionPhase, SessionState, TimerDial, WaypointSource, PRESETS};
use crate::persistence::KeyValueStore;
use crate::report::format_clock;
use crate::ui::layout::create_timer_layout;
use crate::ui::styles::{
    active_style, border_style, celebrate_style, default_style, focused_border_style, gauge_style, hint_style,
    selected_style, title_style,
};
use ratatui::{
    layout::{Alignment, Rect},
    style::Color,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine, Points},
        Block, Borders, Gauge, Paragraph,
    },
    Frame,
};

/// Points sampled per full turn when drawing the arc
const ARC_RESOLUTION: usize = 240;

/// Render the dial, countdown, progress gauge and preset row
pub fn render_timer_pane<S: KeyValueStore, R: WaypointSource>(f: &mut Frame, app: &mut AppState<S, R>, area: Rect) {
    let border = if app.focus == Focus::Dial {
        focused_border_style()
    } else {
        border_style()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Spell Timer ", title_style()))
        .border_style(border);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let layout = create_timer_layout(inner);
    app.dial_area = Some(layout.dial_area);

    render_dial(f, &app.session, &app.dial, layout.dial_area);

    let (clock, style) = countdown_label(&app.session, &app.dial);
    let clock = Paragraph::new(vec![Line::from(Span::styled(clock, style)), Line::raw("")])
        .alignment(Alignment::Center);
    f.render_widget(clock, layout.clock_area);

    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .ratio(app.session.progress().clamp(0.0, 1.0))
        .label(format!("{:.0}%", app.session.progress() * 100.0));
    f.render_widget(gauge, layout.gauge_area);

    let presets = Paragraph::new(vec![Line::raw(""), preset_line(&app.dial)]).alignment(Alignment::Center);
    f.render_widget(presets, layout.presets_area);
}

fn render_dial(f: &mut Frame, session: &SessionState, dial: &TimerDial, area: Rect) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    // One x unit is half a cell wide and one y unit a quarter cell tall, so circles stay round
    let half_w = f64::from(area.width);
    let half_h = f64::from(area.height) * 2.0;
    let radius = half_w.min(half_h) * 0.85;

    let sweep = arc_fraction(session, dial);
    let arc = arc_points(radius, sweep);
    let hand = dial.angle().to_radians();
    let (hand_x, hand_y) = (radius * hand.sin(), radius * hand.cos());
    let hand_color = if dial.is_locked() { Color::DarkGray } else { Color::Yellow };

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-half_w, half_w])
        .y_bounds([-half_h, half_h])
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius,
                color: Color::DarkGray,
            });
            ctx.draw(&Points {
                coords: &arc,
                color: Color::Magenta,
            });
            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: 0.0,
                x2: hand_x,
                y2: hand_y,
                color: hand_color,
            });
            ctx.print(0.0, radius * 0.55, Line::styled("120", hint_style()));
            ctx.print(radius * 0.55, 0.0, Line::styled("30", hint_style()));
            ctx.print(0.0, -radius * 0.55, Line::styled("60", hint_style()));
            ctx.print(-radius * 0.65, 0.0, Line::styled("90", hint_style()));
        });
    f.render_widget(canvas, area);
}

/// Share of a full turn to fill: the remaining time while running, else the dial setting
fn arc_fraction(session: &SessionState, dial: &TimerDial) -> f64 {
    if session.active {
        f64::from(session.remaining_secs) / (120.0 * 60.0)
    } else {
        dial.angle() / 360.0
    }
}

/// Canvas points along the rim from twelve o'clock clockwise for `fraction` of a turn
fn arc_points(radius: f64, fraction: f64) -> Vec<(f64, f64)> {
    let steps = (ARC_RESOLUTION as f64 * fraction.clamp(0.0, 1.0)).round() as usize;
    (0..=steps)
        .map(|i| {
            let theta = (i as f64 / ARC_RESOLUTION as f64) * std::f64::consts::TAU;
            (radius * theta.sin(), radius * theta.cos())
        })
        .collect()
}

/// Big clock text under the dial
fn countdown_label(session: &SessionState, dial: &TimerDial) -> (String, ratatui::style::Style) {
    match session.phase {
        SessionPhase::Completing => ("✨ Spell complete ✨".to_string(), celebrate_style()),
        SessionPhase::Active => (format_clock(session.remaining_secs), active_style()),
        SessionPhase::Idle => (format_clock(dial.minutes() * 60), default_style()),
    }
}

fn preset_line(dial: &TimerDial) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, minutes) in PRESETS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *minutes == dial.minutes() && !dial.is_locked() {
            selected_style()
        } else {
            hint_style()
        };
        spans.push(Span::styled(format!("[{}] {}m", i + 1, minutes), style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_label() {
        let mut session = SessionState::new();
        let dial = TimerDial::new(25);
        assert_eq!(countdown_label(&session, &dial).0, "25:00");

        session.start(10).unwrap();
        session.tick();
        assert_eq!(countdown_label(&session, &dial).0, "09:59");

        session.phase = SessionPhase::Completing;
        assert!(countdown_label(&session, &dial).0.contains("Spell complete"));
    }

    #[test]
    fn test_arc_fraction_follows_dial_then_countdown() {
        let mut session = SessionState::new();
        let dial = TimerDial::new(60);
        assert_eq!(arc_fraction(&session, &dial), 0.5);

        session.start(30).unwrap();
        assert_eq!(arc_fraction(&session, &dial), 0.25);
    }

    #[test]
    fn test_arc_points_start_at_twelve() {
        let points = arc_points(10.0, 0.25);
        assert_eq!(points.len(), 61);
        let (x0, y0) = points[0];
        assert!(x0.abs() < 1e-9);
        assert!((y0 - 10.0).abs() < 1e-9);
        let (x1, y1) = points[60];
        assert!((x1 - 10.0).abs() < 1e-9);
        assert!(y1.abs() < 1e-9);
    }

    #[test]
    fn test_preset_line() {
        let line = preset_line(&TimerDial::new(45));
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[1] 15m  [2] 25m  [3] 45m  [4] 60m");
        assert_eq!(line.spans[4].style, selected_style());
    }
}
