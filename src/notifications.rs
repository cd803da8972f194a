//! Desktop notifications. Only macOS is wired up; other platforms are silent.

#[cfg(target_os = "macos")]
use std::process::Command;

/// Notify that a focus session ran to the end
pub fn notify_session_complete(minutes: u32) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{} focused minutes banked" with title "Witchwatch - Spell Complete""#,
            minutes
        );

        let _ = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output();
    }

    #[cfg(not(target_os = "macos"))]
    {
        let _ = minutes;
    }
}
