/// Workout Management Layer
///
/// Record types and their SQLite persistence.

// Workout and create-payload definitions
pub mod types;

// SQLite persistence for the workouts table
pub mod storage;

pub use storage::WorkoutStorage;
pub use types::{NewWorkout, Workout};
