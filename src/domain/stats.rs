use serde::{Deserialize, Serialize};

/// Per-day history entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStats {
    #[serde(default)]
    pub sessions: u32,
    #[serde(default, rename = "focusTime")]
    pub focus_minutes: u32,
    #[serde(default, rename = "tasks")]
    pub tasks_completed: u32,
}

/// Counters shown in the status bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateCounters {
    pub sessions_today: u32,
    pub total_focus_minutes: u32,
    pub completed_tasks: u32,
}

/// Increments applied by a single `record_session` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsDelta {
    pub focus_minutes: u32,
    pub sessions: u32,
    pub tasks: u32,
}

impl StatsDelta {
    /// A session that ran to zero
    pub fn completed_session(focus_minutes: u32) -> Self {
        Self { focus_minutes, sessions: 1, tasks: 0 }
    }

    /// Credit for a manually stopped session
    pub fn partial_focus(focus_minutes: u32) -> Self {
        Self { focus_minutes, sessions: 0, tasks: 0 }
    }

    /// One todo ticked off
    pub fn task_completed() -> Self {
        Self { focus_minutes: 0, sessions: 0, tasks: 1 }
    }

    pub fn is_empty(&self) -> bool {
        self.focus_minutes == 0 && self.sessions == 0 && self.tasks == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_constructors() {
        assert_eq!(StatsDelta::completed_session(5).sessions, 1);
        assert_eq!(StatsDelta::completed_session(5).focus_minutes, 5);
        assert_eq!(StatsDelta::partial_focus(5).sessions, 0);
        assert_eq!(StatsDelta::task_completed().tasks, 1);
        assert!(StatsDelta::default().is_empty());
        assert!(!StatsDelta::task_completed().is_empty());
    }

    #[test]
    fn test_daily_stats_uses_storage_field_names() {
        let json = r#"{"sessions":2,"focusTime":50,"tasks":3}"#;
        let parsed: DailyStats = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.focus_minutes, 50);
        assert_eq!(parsed.tasks_completed, 3);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), json);
    }

    #[test]
    fn test_daily_stats_missing_fields_default() {
        let parsed: DailyStats = serde_json::from_str(r#"{"sessions":1}"#).unwrap();
        assert_eq!(parsed.focus_minutes, 0);
        assert_eq!(parsed.tasks_completed, 0);
    }
}
