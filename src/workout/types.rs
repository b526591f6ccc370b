/// Workout record types
///
/// `Workout` is both the stored row and the JSON shape returned to clients.
/// `NewWorkout` is what a create request deserializes into.

use serde::{Deserialize, Serialize};

/// A persisted workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Workout {
    /// Storage-assigned identifier
    pub id: i64,
    /// Free-form name (e.g., "Run")
    pub name: String,
    /// Duration, stored as given
    pub duration: i64,
}

/// Payload of a create request
///
/// Clients may send an `id`; it is parsed so the body is accepted but it is
/// never written. Storage always assigns a fresh one.
#[derive(Debug, Clone, Deserialize)]
pub struct NewWorkout {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub duration: i64,
}

impl NewWorkout {
    /// Build the stored record once storage has assigned `id`
    pub fn into_workout(self, id: i64) -> Workout {
        Workout {
            id,
            name: self.name,
            duration: self.duration,
        }
    }
}
