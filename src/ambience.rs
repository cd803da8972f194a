//! Looping ambient sound played through an external audio player.
//! Playback problems never surface to the user; the app just stays quiet.
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use tracing::{debug, info, warn};

/// Fixed playback volume (0.0 - 1.0)
pub const VOLUME: f64 = 0.3;

pub struct Ambience {
    sound_file: Option<PathBuf>,
    enabled: bool,
    player: Option<Child>,
    /// Set when the player exited with an error; cleared on the next toggle
    failed: bool,
}

impl Ambience {
    pub fn new(sound_file: Option<PathBuf>) -> Self {
        Self {
            sound_file,
            enabled: false,
            player: None,
            failed: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_playing(&self) -> bool {
        self.player.is_some()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.failed = false;
        if enabled {
            self.play();
        } else {
            self.halt();
        }
    }

    /// Restart the player when the track ends. Called from the event loop.
    pub fn poll(&mut self) {
        let Some(player) = self.player.as_mut() else {
            return;
        };

        match player.try_wait() {
            Ok(Some(status)) => {
                self.player = None;
                if status.success() {
                    if self.enabled {
                        self.play();
                    }
                } else {
                    warn!(%status, "ambient player exited with an error, staying muted");
                    self.failed = true;
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "could not query ambient player");
                self.player = None;
                self.failed = true;
            }
        }
    }

    fn play(&mut self) {
        if self.player.is_some() || self.failed {
            return;
        }
        let Some(path) = self.sound_file.as_deref() else {
            debug!("no ambient sound file configured");
            return;
        };
        if !path.exists() {
            warn!(path = %path.display(), "ambient sound file not found");
            return;
        }

        match player_command(path).spawn() {
            Ok(child) => {
                info!(path = %path.display(), "ambient sound playing");
                self.player = Some(child);
            }
            Err(e) => {
                warn!(error = %e, "could not start ambient player");
                self.failed = true;
            }
        }
    }

    fn halt(&mut self) {
        if let Some(mut player) = self.player.take() {
            let _ = player.kill();
            let _ = player.wait();
        }
    }
}

impl Drop for Ambience {
    fn drop(&mut self) {
        self.halt();
    }
}

fn player_command(path: &Path) -> Command {
    #[cfg(target_os = "macos")]
    let mut command = {
        let mut c = Command::new("afplay");
        c.arg("-v").arg(VOLUME.to_string()).arg(path);
        c
    };

    #[cfg(not(target_os = "macos"))]
    let mut command = {
        // paplay volume is linear, 65536 = 100%
        let mut c = Command::new("paplay");
        c.arg(format!("--volume={}", (VOLUME * 65536.0) as u32)).arg(path);
        c
    };

    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    command
}
