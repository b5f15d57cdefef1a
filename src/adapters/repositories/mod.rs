pub mod memory_repository;
pub mod mongo_repository;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::{
	domain::thought::{NewThought, Thought},
	services::response::ServiceError,
};

pub use memory_repository::MemoryThoughtRepository;
pub use mongo_repository::MongoThoughtRepository;

#[async_trait]
pub trait ThoughtRepository: Send + Sync {
	/// Newest-first, at most `limit` thoughts.
	async fn recent(
		&self,
		limit: i64,
	) -> Result<Vec<Thought>, ServiceError>;

	async fn insert(
		&self,
		thought: NewThought,
	) -> Result<Thought, ServiceError>;

	async fn get(
		&self,
		id: &str,
	) -> Result<Option<Thought>, ServiceError>;

	/// Increments `likes` by one and returns the updated thought.
	async fn like(
		&self,
		id: &str,
	) -> Result<Option<Thought>, ServiceError>;
}

pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId, ServiceError> {
	ObjectId::parse_str(id).map_err(|_| ServiceError::InvalidId(id.to_string()))
}
