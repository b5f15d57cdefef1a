use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::{parse_object_id, ThoughtRepository};
use crate::{
	domain::thought::{NewThought, Thought},
	services::response::ServiceError,
};

/// Process-local store with the same semantics as the Mongo collection.
/// Insertion order breaks ties between equal timestamps.
#[derive(Clone, Default)]
pub struct MemoryThoughtRepository {
	thoughts: Arc<RwLock<Vec<(ObjectId, Thought)>>>,
}

impl MemoryThoughtRepository {
	pub fn new() -> Self {
		Self::default()
	}
}

#[async_trait]
impl ThoughtRepository for MemoryThoughtRepository {
	async fn recent(
		&self,
		limit: i64,
	) -> Result<Vec<Thought>, ServiceError> {
		let thoughts = self.thoughts.read().await;
		let mut recent: Vec<&Thought> = thoughts.iter().rev().map(|(_, thought)| thought).collect();
		recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));

		Ok(recent
			.into_iter()
			.take(usize::try_from(limit).unwrap_or_default())
			.cloned()
			.collect())
	}

	async fn insert(
		&self,
		thought: NewThought,
	) -> Result<Thought, ServiceError> {
		let id = ObjectId::new();
		let thought = thought.into_thought(id.to_hex());
		self.thoughts.write().await.push((id, thought.clone()));
		Ok(thought)
	}

	async fn get(
		&self,
		id: &str,
	) -> Result<Option<Thought>, ServiceError> {
		let id = parse_object_id(id)?;
		let thoughts = self.thoughts.read().await;
		Ok(thoughts.iter().find(|(key, _)| *key == id).map(|(_, thought)| thought.clone()))
	}

	async fn like(
		&self,
		id: &str,
	) -> Result<Option<Thought>, ServiceError> {
		let id = parse_object_id(id)?;
		let mut thoughts = self.thoughts.write().await;
		Ok(thoughts.iter_mut().find(|(key, _)| *key == id).map(|(_, thought)| {
			thought.likes += 1;
			thought.clone()
		}))
	}
}
