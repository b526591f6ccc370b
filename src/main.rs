/// Workoutd entry point
///
/// Opens ./fitness.db and serves the workout API on port 8080.

use workoutd::{config::Config, server::start_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    // Fails before binding if the database cannot be opened or initialized
    start_server(config).await?;

    Ok(())
}
