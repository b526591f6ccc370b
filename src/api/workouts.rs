/// Workout REST API endpoints
///
/// List, fetch by ID, and create. Each handler performs at most one storage
/// call and turns failures into an `ApiError`.

use crate::{
    api::error::ApiError,
    workout::{
        storage::WorkoutStorage,
        types::{NewWorkout, Workout},
    },
};
use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Workout storage, shared by every request
    pub storage: WorkoutStorage,
}

/// Create workout routes
///
/// Request bodies are not capped: a workout name may be any length.
pub fn create_workout_routes() -> Router<AppState> {
    Router::new()
        .route("/api/workouts", get(list_workouts).post(create_workout))
        .route("/api/workouts/{id}", get(get_workout))
        .layer(DefaultBodyLimit::disable())
}

/// List all workouts
///
/// GET /api/workouts
/// Returns: [{ "id": 1, "name": "...", "duration": 30 }]
async fn list_workouts(State(state): State<AppState>) -> Result<Json<Vec<Workout>>, ApiError> {
    let workouts = state.storage.list_workouts().await?;
    Ok(Json(workouts))
}

/// Get a specific workout by ID
///
/// GET /api/workouts/{id}
async fn get_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Workout>, ApiError> {
    let id: i64 = id.parse().map_err(|_| {
        tracing::warn!("Rejected workout lookup with invalid ID: {:?}", id);
        ApiError::InvalidId
    })?;

    tracing::debug!("🔍 Looking up workout {}", id);
    match state.storage.get_workout(id).await? {
        Some(workout) => Ok(Json(workout)),
        None => Err(ApiError::NotFound),
    }
}

/// Create a new workout
///
/// POST /api/workouts
/// Body: { "name": "Run", "duration": 30 }
///
/// The body is parsed by hand so that any malformed or mistyped payload is a
/// 400 carrying the parser's message, whatever the Content-Type header says.
async fn create_workout(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Workout>), ApiError> {
    let new = parse_new_workout(&body).map_err(|e| {
        tracing::warn!("❌ Invalid workout payload: {}", e);
        e
    })?;

    let workout = state.storage.create_workout(new).await?;
    tracing::info!("Created workout {} ({})", workout.id, workout.name);

    Ok((StatusCode::CREATED, Json(workout)))
}

/// Decode the first JSON value in `body`; anything after it is ignored
fn parse_new_workout(body: &[u8]) -> Result<NewWorkout, ApiError> {
    match serde_json::Deserializer::from_slice(body)
        .into_iter::<NewWorkout>()
        .next()
    {
        Some(Ok(new)) => Ok(new),
        Some(Err(e)) => Err(ApiError::InvalidBody(e.to_string())),
        None => Err(ApiError::InvalidBody("EOF while parsing a value".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_data_after_the_object_is_ignored() {
        let new = parse_new_workout(br#"{"name":"Run","duration":30} x"#).unwrap();
        assert_eq!(new.name, "Run");
        assert_eq!(new.duration, 30);
    }

    #[test]
    fn blank_body_is_invalid() {
        for body in [&b""[..], &b"   \n"[..]] {
            match parse_new_workout(body) {
                Err(ApiError::InvalidBody(msg)) => assert!(msg.contains("EOF")),
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[test]
    fn null_name_is_invalid() {
        assert!(matches!(
            parse_new_workout(br#"{"name":null,"duration":30}"#),
            Err(ApiError::InvalidBody(_))
        ));
    }
}
