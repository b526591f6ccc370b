/// Workoutd: a small workout tracking service
///
/// Exposes list, get-by-id, and create over HTTP, backed by one SQLite table.

// Fixed listen address and database location
pub mod config;

// Workout types and SQLite persistence
pub mod workout;

// HTTP API layer - REST endpoints and error responses
pub mod api;

// Server setup and initialization
pub mod server;

pub use server::{create_app, start_server};
pub use workout::{NewWorkout, Workout, WorkoutStorage};
