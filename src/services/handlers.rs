use crate::{
	dependencies::AppState,
	domain::thought::{CreateThought, Thought},
};

use super::response::ServiceError;

pub struct ThoughtHandler;
impl ThoughtHandler {
	pub async fn list_recent(state: &AppState) -> Result<Vec<Thought>, ServiceError> {
		state.repository.recent(state.thoughts_limit).await
	}

	/// Validates before anything reaches the store.
	pub async fn create(
		state: &AppState,
		command: CreateThought,
	) -> Result<Thought, ServiceError> {
		let new_thought = command.validate().map_err(|err| {
			tracing::info!("Rejected thought: {}", err);
			ServiceError::from(err)
		})?;

		let thought = state.repository.insert(new_thought).await?;
		tracing::debug!("Stored thought {}", thought.id);
		Ok(thought)
	}

	pub async fn get(
		state: &AppState,
		id: &str,
	) -> Result<Thought, ServiceError> {
		state.repository.get(id).await?.ok_or(ServiceError::EntityNotFound)
	}

	pub async fn like(
		state: &AppState,
		id: &str,
	) -> Result<Thought, ServiceError> {
		let thought = state.repository.like(id).await?.ok_or_else(|| {
			tracing::info!("Like for unknown thought {}", id);
			ServiceError::EntityNotFound
		})?;
		tracing::debug!("Thought {} now has {} likes", thought.id, thought.likes);
		Ok(thought)
	}
}
