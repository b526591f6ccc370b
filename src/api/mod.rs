/// HTTP API Layer
///
/// REST endpoints for workouts and the JSON error envelope they share.

// Workout endpoints (GET list, GET by id, POST)
pub mod workouts;

// {"error": ...} responses
pub mod error;

pub use error::ApiError;
pub use workouts::{create_workout_routes, AppState};
