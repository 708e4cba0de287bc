pub mod workout;

pub use workout::{describe, Coordinates, Workout, WorkoutDetails, WorkoutId, WorkoutKind};
