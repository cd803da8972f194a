use chrono::Local;
use rand::Rng;

pub const MIN_COORD: f64 = 1.0;
pub const MAX_COORD: f64 = 99.0;

/// Pick a new waypoint once the witch is this close to the current one
pub const ARRIVAL_THRESHOLD: f64 = 8.0;

/// Distance covered per mascot step (percent of the pane)
pub const STEP_SPEED: f64 = 2.0;

/// Bottom-right corner where the witch waits between sessions
pub const REST_POSITION: Position = Position { x: 85.0, y: 80.0 };

/// A point in percent coordinates of the mascot pane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Position) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(MIN_COORD, MAX_COORD),
            y: self.y.clamp(MIN_COORD, MAX_COORD),
        }
    }
}

/// Randomness for waypoint selection
pub trait WaypointSource {
    /// Jitter mixed into the waypoint formula, 0..1000
    fn jitter(&mut self) -> u64;
    /// Uniform sample in [0, 1), used for the first target of a session
    fn unit(&mut self) -> f64;
}

/// Wall-clock jitter plus the thread RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemWaypoints;

impl WaypointSource for SystemWaypoints {
    fn jitter(&mut self) -> u64 {
        Local::now().timestamp_millis().rem_euclid(1000) as u64
    }

    fn unit(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Waypoint derived from the step counter: both axes land in 3..=97
pub fn waypoint(counter: u64, jitter: u64) -> Position {
    let x = (counter.wrapping_mul(17).wrapping_add(jitter)) % 95 + 3;
    let y = (counter.wrapping_mul(31).wrapping_add(jitter)) % 95 + 3;
    Position::new(x as f64, y as f64)
}

/// Random walk of the decorative witch
pub struct MascotAnimator<R: WaypointSource> {
    position: Position,
    target: Position,
    counter: u64,
    roaming: bool,
    source: R,
}

impl<R: WaypointSource> MascotAnimator<R> {
    pub fn new(source: R) -> Self {
        Self {
            position: REST_POSITION,
            target: REST_POSITION,
            counter: 0,
            roaming: false,
            source,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    #[cfg(test)]
    pub fn target(&self) -> Position {
        self.target
    }

    /// True between `start_roaming` and `rest`
    pub fn is_roaming(&self) -> bool {
        self.roaming
    }

    /// Begin roaming towards a random point in the middle of the pane
    pub fn start_roaming(&mut self) {
        self.roaming = true;
        let x = self.source.unit() * 80.0 + 10.0;
        let y = self.source.unit() * 80.0 + 10.0;
        self.target = Position::new(x, y);
    }

    /// Advance one step. Does nothing while resting.
    pub fn step(&mut self) {
        if !self.roaming {
            return;
        }

        if self.position.distance_to(self.target) < ARRIVAL_THRESHOLD {
            let jitter = self.source.jitter();
            self.target = waypoint(self.counter, jitter);
            self.counter += 1;
        }

        let dx = self.target.x - self.position.x;
        let dy = self.target.y - self.position.y;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance > 0.0 {
            let next = Position::new(
                self.position.x + dx / distance * STEP_SPEED,
                self.position.y + dy / distance * STEP_SPEED,
            );
            self.position = next.clamped();
        }
    }

    /// Stop roaming and snap back to the corner
    pub fn rest(&mut self) {
        self.roaming = false;
        self.position = REST_POSITION;
        self.target = REST_POSITION;
    }
}

#[cfg(test)]
pub mod testing {
    use super::WaypointSource;

    /// Replays fixed jitter and unit values, cycling when exhausted
    #[derive(Debug, Clone)]
    pub struct ScriptedWaypoints {
        jitters: Vec<u64>,
        units: Vec<f64>,
        next_jitter: usize,
        next_unit: usize,
    }

    impl ScriptedWaypoints {
        pub fn new(jitters: Vec<u64>, units: Vec<f64>) -> Self {
            Self {
                jitters,
                units,
                next_jitter: 0,
                next_unit: 0,
            }
        }
    }

    impl WaypointSource for ScriptedWaypoints {
        fn jitter(&mut self) -> u64 {
            let value = self.jitters[self.next_jitter % self.jitters.len()];
            self.next_jitter += 1;
            value
        }

        fn unit(&mut self) -> f64 {
            let value = self.units[self.next_unit % self.units.len()];
            self.next_unit += 1;
            value
        }
    }
}
