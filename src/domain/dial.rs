use super::error::SessionError;
use super::session::{MAX_MINUTES, MIN_MINUTES};

/// Quick-select session lengths
pub const PRESETS: [u32; 4] = [15, 25, 45, 60];

/// Map a dial angle in degrees (0 = twelve o'clock, clockwise) to minutes.
/// A full turn covers 120 minutes; the result is clamped to 1..=120.
pub fn minutes_from_angle(angle_deg: f64) -> u32 {
    let angle = angle_deg.rem_euclid(360.0);
    let minutes = (angle / 360.0 * f64::from(MAX_MINUTES)).round();
    // NaN casts to 0 and is clamped up
    (minutes as i64).clamp(i64::from(MIN_MINUTES), i64::from(MAX_MINUTES)) as u32
}

/// Angle of the dial handle for a minute value
pub fn angle_from_minutes(minutes: u32) -> f64 {
    f64::from(minutes) / f64::from(MAX_MINUTES) * 360.0
}

/// Angle of a pointer relative to the dial centre, in screen coordinates (y grows downwards)
pub fn pointer_angle(dx: f64, dy: f64) -> f64 {
    (dy.atan2(dx).to_degrees() + 90.0 + 360.0) % 360.0
}

/// Session length picker. Locked while a session runs.
#[derive(Debug, Clone)]
pub struct TimerDial {
    minutes: u32,
    locked: bool,
}

impl TimerDial {
    pub fn new(minutes: u32) -> Self {
        Self {
            minutes: minutes.clamp(MIN_MINUTES, MAX_MINUTES),
            locked: false,
        }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn angle(&self) -> f64 {
        angle_from_minutes(self.minutes)
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    fn set(&mut self, minutes: u32) -> Result<u32, SessionError> {
        if self.locked {
            return Err(SessionError::DialLocked);
        }
        self.minutes = minutes.clamp(MIN_MINUTES, MAX_MINUTES);
        Ok(self.minutes)
    }

    /// Drag the handle to `angle_deg`
    pub fn set_from_angle(&mut self, angle_deg: f64) -> Result<u32, SessionError> {
        self.set(minutes_from_angle(angle_deg))
    }

    pub fn select_preset(&mut self, index: usize) -> Result<u32, SessionError> {
        let minutes = PRESETS.get(index).copied().unwrap_or(self.minutes);
        self.set(minutes)
    }

    pub fn increment(&mut self, step: u32) -> Result<u32, SessionError> {
        self.set(self.minutes.saturating_add(step))
    }

    pub fn decrement(&mut self, step: u32) -> Result<u32, SessionError> {
        self.set(self.minutes.saturating_sub(step))
    }

    /// Confirm the chosen length; this is the only way a start is requested
    pub fn confirm(&self) -> Result<u32, SessionError> {
        if self.locked {
            return Err(SessionError::DialLocked);
        }
        Ok(self.minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_from_angle() {
        assert_eq!(minutes_from_angle(0.0), 1);
        assert_eq!(minutes_from_angle(90.0), 30);
        assert_eq!(minutes_from_angle(180.0), 60);
        assert_eq!(minutes_from_angle(75.0), 25);
        assert_eq!(minutes_from_angle(359.0), 120);
        assert_eq!(minutes_from_angle(1.4), 1);
    }

    #[test]
    fn test_minutes_from_angle_normalises() {
        assert_eq!(minutes_from_angle(-90.0), 90);
        assert_eq!(minutes_from_angle(450.0), 30);
        assert_eq!(minutes_from_angle(f64::NAN), 1);
    }

    #[test]
    fn test_angle_round_trip_on_whole_minutes() {
        for minutes in 1..120 {
            assert_eq!(minutes_from_angle(angle_from_minutes(minutes)), minutes);
        }
    }

    #[test]
    fn test_dial_angle_follows_minutes() {
        let mut dial = TimerDial::new(30);
        assert_eq!(dial.angle(), 90.0);
        dial.set_from_angle(180.0).unwrap();
        assert_eq!(dial.angle(), 180.0);
        assert_eq!(TimerDial::new(500).angle(), 360.0);
    }

    #[test]
    fn test_pointer_angle_quadrants() {
        assert!((pointer_angle(0.0, -1.0) - 0.0).abs() < 1e-9);
        assert!((pointer_angle(1.0, 0.0) - 90.0).abs() < 1e-9);
        assert!((pointer_angle(0.0, 1.0) - 180.0).abs() < 1e-9);
        assert!((pointer_angle(-1.0, 0.0) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(TimerDial::new(0).minutes(), 1);
        assert_eq!(TimerDial::new(500).minutes(), 120);
    }

    #[test]
    fn test_presets_and_steps() {
        let mut dial = TimerDial::new(25);
        assert_eq!(dial.select_preset(2), Ok(45));
        assert_eq!(dial.increment(5), Ok(50));
        assert_eq!(dial.decrement(100), Ok(1));
        assert_eq!(dial.increment(500), Ok(120));
        assert_eq!(dial.select_preset(9), Ok(120));
    }

    #[test]
    fn test_locked_dial_rejects_changes() {
        let mut dial = TimerDial::new(25);
        dial.lock();
        assert_eq!(dial.set_from_angle(180.0), Err(SessionError::DialLocked));
        assert_eq!(dial.select_preset(0), Err(SessionError::DialLocked));
        assert_eq!(dial.increment(1), Err(SessionError::DialLocked));
        assert_eq!(dial.confirm(), Err(SessionError::DialLocked));
        assert_eq!(dial.minutes(), 25);

        dial.unlock();
        assert_eq!(dial.confirm(), Ok(25));
    }
}
