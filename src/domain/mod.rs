pub mod dial;
pub mod enums;
pub mod error;
pub mod mascot;
pub mod session;
pub mod stats;
pub mod todo;

pub use dial::{TimerDial, PRESETS};
pub use enums::{Focus, MascotMode, SessionPhase, UiMode};
pub use error::SessionError;
pub use mascot::{MascotAnimator, Position, SystemWaypoints, WaypointSource};
pub use session::{Effect, SessionState, Timeout};
pub use stats::{AggregateCounters, DailyStats, StatsDelta};
pub use todo::{Todo, TodoList};
