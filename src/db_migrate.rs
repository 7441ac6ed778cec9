use color_eyre::eyre::{Result, eyre};
use defensesync_db::schema::initialize_database;
use dotenv::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| eyre!("DATABASE_URL must be set to create the responses table"))?;

    info!("Connecting to database...");
    let db_pool = defensesync_db::create_pool(&database_url).await?;

    initialize_database(&db_pool).await?;

    Ok(())
}
