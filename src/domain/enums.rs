/// Lifecycle phase of a focus session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Active,
    /// Countdown reached zero; the completion spell is on screen
    Completing,
}

/// Animation mode of the witch, derived from session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MascotMode {
    Idle,
    Active,
    Celebrating,
}

impl MascotMode {
    /// Short label shown in the mascot pane title
    pub fn label(&self) -> &'static str {
        match self {
            MascotMode::Idle => "Resting",
            MascotMode::Active => "Flying",
            MascotMode::Celebrating => "Casting",
        }
    }

    /// Glyph drawn at the witch position
    pub fn glyph(&self, use_emoji: bool) -> &'static str {
        match (self, use_emoji) {
            (MascotMode::Celebrating, true) => "🧙✨",
            (_, true) => "🧙",
            (MascotMode::Celebrating, false) => "W*",
            (_, false) => "W",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTodo,
    Stats,
    DayChanged,
}

/// Which pane receives list navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Dial,
    Todos,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Dial => Focus::Todos,
            Focus::Todos => Focus::Dial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mascot_mode_labels() {
        assert_eq!(MascotMode::Idle.label(), "Resting");
        assert_eq!(MascotMode::Active.label(), "Flying");
        assert_eq!(MascotMode::Celebrating.label(), "Casting");
    }

    #[test]
    fn test_mascot_glyph_ascii_fallback() {
        assert_eq!(MascotMode::Active.glyph(false), "W");
        assert_eq!(MascotMode::Celebrating.glyph(false), "W*");
        assert_eq!(MascotMode::Idle.glyph(true), "🧙");
    }

    #[test]
    fn test_focus_toggle() {
        assert_eq!(Focus::Dial.toggle(), Focus::Todos);
        assert_eq!(Focus::Todos.toggle(), Focus::Dial);
    }
}
