use std::sync::Arc;

use crate::{
	adapters::repositories::{MemoryThoughtRepository, MongoThoughtRepository, ThoughtRepository},
	config::{Config, StoreKind},
	database,
	services::response::ServiceError,
};

/// Everything a request handler needs, built once at startup and handed to
/// the router as state.
#[derive(Clone)]
pub struct AppState {
	pub repository: Arc<dyn ThoughtRepository>,
	pub thoughts_limit: i64,
}

impl AppState {
	pub fn new(
		repository: impl ThoughtRepository + 'static,
		thoughts_limit: i64,
	) -> Self {
		Self {
			repository: Arc::new(repository),
			thoughts_limit,
		}
	}

	pub async fn from_config(config: &Config) -> Result<Self, ServiceError> {
		match config.store {
			StoreKind::Mongo => {
				let database = database::connect(&config.database_url).await?;
				Ok(Self::new(MongoThoughtRepository::new(&database), config.thoughts_limit))
			}
			StoreKind::Memory => {
				tracing::warn!("Using the in-memory store, thoughts will not survive a restart");
				Ok(Self::new(MemoryThoughtRepository::new(), config.thoughts_limit))
			}
		}
	}
}
