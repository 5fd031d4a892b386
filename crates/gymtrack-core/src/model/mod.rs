pub mod exercise;
pub mod schedule;
pub mod snapshot;
pub mod weekday;

pub use exercise::{Exercise, ExerciseDraft, ExercisePatch};
pub use schedule::Schedule;
pub use snapshot::Snapshot;
pub use weekday::Weekday;
