/// SQLite persistence layer for workouts
///
/// One flat `workouts` table. Every operation is a single statement against
/// the shared pool; nothing is wrapped in a transaction.

use crate::workout::types::{NewWorkout, Workout};
use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};

/// SQLite-backed workout store
///
/// Cheap to clone: clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct WorkoutStorage {
    /// SQLite connection pool for the workouts database
    pool: SqlitePool,
}

impl WorkoutStorage {
    /// Create storage over an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (or create) the database file at `path` and ensure the schema
    pub async fn connect(path: &str) -> Result<Self> {
        tracing::info!("🗄️ Opening workout database: {}", path);

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to open database '{}': {}", path, e))?;

        let storage = Self::new(pool);
        storage
            .init_schema()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to initialize schema in '{}': {}", path, e))?;

        Ok(storage)
    }

    /// Initialize the workouts table
    ///
    /// Safe to call multiple times (uses IF NOT EXISTS).
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS workouts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                duration INTEGER
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// List every workout, lowest id first
    pub async fn list_workouts(&self) -> Result<Vec<Workout>> {
        let workouts = sqlx::query_as::<_, Workout>(
            "SELECT id, name, duration FROM workouts ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(workouts)
    }

    /// Retrieve a workout by ID
    pub async fn get_workout(&self, id: i64) -> Result<Option<Workout>> {
        let workout = sqlx::query_as::<_, Workout>(
            "SELECT id, name, duration FROM workouts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(workout)
    }

    /// Insert a workout and return it with its assigned ID
    ///
    /// The ID comes from the insert's own result, so it belongs to this row
    /// even when other creates run on other pooled connections.
    pub async fn create_workout(&self, new: NewWorkout) -> Result<Workout> {
        let result = sqlx::query("INSERT INTO workouts (name, duration) VALUES (?, ?)")
            .bind(&new.name)
            .bind(new.duration)
            .execute(&self.pool)
            .await?;

        Ok(new.into_workout(result.last_insert_rowid()))
    }
}
