use std::sync::Arc;

use crate::{
    conf::settings,
    pkg::internal::store::{MongoStore, Store},
    prelude::Result,
};

pub async fn db_store() -> Result<MongoStore> {
    let store = MongoStore::connect(
        &settings.database_url,
        &settings.database_name,
        &settings.jobs_collection,
        &settings.profiles_collection,
    )
    .await?;
    store.ensure_indexes().await?;
    Ok(store)
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub async fn new() -> Result<AppState> {
        Ok(AppState {
            store: Arc::new(db_store().await?),
        })
    }

    pub fn with_store(store: Arc<dyn Store>) -> AppState {
        AppState { store }
    }
}
