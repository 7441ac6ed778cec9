use std::sync::Arc;

use color_eyre::eyre::Result;
use defensesync_api::config::{ApiConfig, StoreBackend};
use defensesync_core::store::ResponseStore;
use defensesync_db::{
    JsonFileStore, MemoryStore, PgResponseStore, create_pool, schema::initialize_database,
};
use dotenv::dotenv;

async fn open_store(backend: &StoreBackend) -> Result<Arc<dyn ResponseStore>> {
    let store: Arc<dyn ResponseStore> = match backend {
        StoreBackend::File(path) => Arc::new(JsonFileStore::new(path.clone())),
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
        StoreBackend::Postgres { database_url } => {
            let db_pool = create_pool(database_url).await?;
            initialize_database(&db_pool).await?;
            Arc::new(PgResponseStore::new(db_pool))
        }
    };

    Ok(store)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    let store = open_store(&config.store_backend).await?;

    // Start API server
    defensesync_api::start_server(config, store).await?;

    Ok(())
}
