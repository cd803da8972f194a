use crate::domain::MascotMode;
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightMagenta)
        .add_modifier(Modifier::BOLD)
}

/// Countdown style while a spell runs
pub fn active_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

/// Completion / celebration style
pub fn celebrate_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Idle badge style
pub fn idle_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Style for the mascot label in each mode
pub fn mascot_style(mode: MascotMode) -> Style {
    match mode {
        MascotMode::Idle => idle_style(),
        MascotMode::Active => active_style(),
        MascotMode::Celebrating => celebrate_style(),
    }
}

/// The witch's speech bubble, gold when celebrating
pub fn bubble_style(mode: MascotMode) -> Style {
    let bg = if mode == MascotMode::Celebrating { Color::Yellow } else { Color::White };
    Style::default().fg(Color::Magenta).bg(bg).add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::LightMagenta)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Border style for the pane that receives arrow keys
pub fn focused_border_style() -> Style {
    Style::default().fg(Color::LightMagenta)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Forest floor under the mascot
pub fn forest_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Session progress gauge style
pub fn gauge_style() -> Style {
    Style::default().fg(Color::Magenta).bg(Color::DarkGray)
}

/// Done/completed todo style
pub fn done_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Sessions bars in the chart
pub fn sessions_bar_style() -> Style {
    Style::default().fg(Color::LightMagenta)
}

/// Focus-minutes bars in the chart
pub fn focus_bar_style() -> Style {
    Style::default().fg(Color::LightBlue)
}
