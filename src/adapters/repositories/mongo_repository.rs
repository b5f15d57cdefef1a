use std::time::SystemTime;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
	bson::{self, doc, oid::ObjectId},
	options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument},
	Collection, Database,
};
use serde::{Deserialize, Serialize};

use super::{parse_object_id, ThoughtRepository};
use crate::{
	domain::thought::{NewThought, Thought},
	services::response::ServiceError,
};

pub const COLLECTION: &str = "thoughts";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThoughtDocument {
	#[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
	id: Option<ObjectId>,
	#[serde(alias = "thought")]
	message: String,
	#[serde(default)]
	type_of_message: String,
	#[serde(default)]
	likes: i64,
	created_at: bson::DateTime,
}

impl From<&NewThought> for ThoughtDocument {
	fn from(value: &NewThought) -> Self {
		Self {
			id: None,
			message: value.message.clone(),
			type_of_message: value.type_of_message.clone(),
			likes: 0,
			created_at: bson::DateTime::from_system_time(SystemTime::from(value.created_at)),
		}
	}
}

impl From<ThoughtDocument> for Thought {
	fn from(value: ThoughtDocument) -> Self {
		Thought {
			id: value.id.map(|id| id.to_hex()).unwrap_or_default(),
			message: value.message,
			type_of_message: value.type_of_message,
			likes: value.likes,
			created_at: DateTime::<Utc>::from(value.created_at.to_system_time()),
		}
	}
}

#[derive(Clone)]
pub struct MongoThoughtRepository {
	collection: Collection<ThoughtDocument>,
}

impl MongoThoughtRepository {
	pub fn new(database: &Database) -> Self {
		Self::with_collection(database, COLLECTION)
	}

	pub fn with_collection(
		database: &Database,
		name: &str,
	) -> Self {
		Self {
			collection: database.collection(name),
		}
	}
}

#[async_trait]
impl ThoughtRepository for MongoThoughtRepository {
	async fn recent(
		&self,
		limit: i64,
	) -> Result<Vec<Thought>, ServiceError> {
		let options = FindOptions::builder()
			.sort(doc! { "createdAt": -1, "_id": -1 })
			.limit(limit)
			.build();
		let cursor = self.collection.find(None, options).await?;
		let documents: Vec<ThoughtDocument> = cursor.try_collect().await?;

		Ok(documents.into_iter().map(Thought::from).collect())
	}

	async fn insert(
		&self,
		thought: NewThought,
	) -> Result<Thought, ServiceError> {
		let mut document = ThoughtDocument::from(&thought);
		let result = self.collection.insert_one(&document, None).await?;
		let id = result.inserted_id.as_object_id().ok_or_else(|| {
			tracing::error!("Store returned a non-ObjectId id: {:?}", result.inserted_id);
			ServiceError::DatabaseError("inserted id is not an ObjectId".into())
		})?;
		document.id = Some(id);

		// Same millisecond precision as every later read.
		Ok(Thought::from(document))
	}

	async fn get(
		&self,
		id: &str,
	) -> Result<Option<Thought>, ServiceError> {
		let id = parse_object_id(id)?;
		let document = self.collection.find_one(doc! { "_id": id }, None).await?;

		Ok(document.map(Thought::from))
	}

	async fn like(
		&self,
		id: &str,
	) -> Result<Option<Thought>, ServiceError> {
		let id = parse_object_id(id)?;
		let options = FindOneAndUpdateOptions::builder().return_document(ReturnDocument::After).build();
		let document = self
			.collection
			.find_one_and_update(doc! { "_id": id }, doc! { "$inc": { "likes": 1 } }, options)
			.await?;

		Ok(document.map(Thought::from))
	}
}

#[cfg(test)]
mod test {
	use chrono::{Duration, SubsecRound, TimeZone, Utc};
	use mongodb::bson::{self, doc, oid::ObjectId};

	use super::{MongoThoughtRepository, ThoughtDocument};
	use crate::{
		adapters::repositories::ThoughtRepository,
		database,
		domain::thought::{NewThought, Thought},
	};

	#[test]
	fn test_document_conversion_keeps_fields() {
		let created_at = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
		let new_thought = NewThought {
			message: "Sunny day at the lake".to_string(),
			type_of_message: "joy".to_string(),
			created_at,
		};

		let mut document = ThoughtDocument::from(&new_thought);
		assert!(document.id.is_none());
		assert_eq!(document.likes, 0);

		let id = ObjectId::new();
		document.id = Some(id);
		let thought = Thought::from(document);

		assert_eq!(thought.id, id.to_hex());
		assert_eq!(thought.message, "Sunny day at the lake");
		assert_eq!(thought.type_of_message, "joy");
		assert_eq!(thought.created_at, created_at.trunc_subsecs(3));
	}

	#[test]
	fn test_millisecond_timestamps_survive_storage_unchanged() {
		let created_at = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap().trunc_subsecs(3);
		let new_thought = NewThought {
			message: "Stored exactly as returned".to_string(),
			type_of_message: String::new(),
			created_at,
		};

		let mut document = ThoughtDocument::from(&new_thought);
		document.id = Some(ObjectId::new());
		let id = document.id.map(|id| id.to_hex()).unwrap();

		assert_eq!(Thought::from(document), new_thought.into_thought(id));
	}

	#[test]
	fn test_document_field_names() {
		let document = ThoughtDocument::from(&NewThought {
			message: "Field names matter".to_string(),
			type_of_message: String::new(),
			created_at: Utc::now(),
		});
		let serialized = bson::to_document(&document).unwrap();

		assert!(!serialized.contains_key("_id"));
		assert!(serialized.contains_key("typeOfMessage"));
		assert!(serialized.contains_key("createdAt"));
		assert_eq!(serialized.get_i64("likes").unwrap(), 0);
	}

	#[test]
	fn test_legacy_thought_field_is_read() {
		let stored = doc! {
			"_id": ObjectId::new(),
			"thought": "Written by the old schema",
			"likes": 3,
			"createdAt": bson::DateTime::now(),
		};

		let thought = Thought::from(bson::from_document::<ThoughtDocument>(stored).unwrap());
		assert_eq!(thought.message, "Written by the old schema");
		assert_eq!(thought.type_of_message, "");
		assert_eq!(thought.likes, 3);
	}

	/// Runs against the store at `MONGO_URL` in a throwaway collection.
	async fn live_repository() -> Option<MongoThoughtRepository> {
		let Ok(url) = std::env::var("MONGO_URL") else {
			println!("MONGO_URL is not set, skipping");
			return None;
		};
		let database = database::connect(&url).await.unwrap();
		let collection = format!("thoughts_test_{}", ObjectId::new().to_hex());
		Some(MongoThoughtRepository::with_collection(&database, &collection))
	}

	fn new_thought(
		message: &str,
		minutes_ago: i64,
	) -> NewThought {
		NewThought {
			message: message.to_string(),
			type_of_message: String::new(),
			created_at: (Utc::now() - Duration::minutes(minutes_ago)).trunc_subsecs(3),
		}
	}

	#[tokio::test]
	#[ignore = "needs a running MongoDB at MONGO_URL"]
	async fn test_live_recent_is_newest_first_and_limited() {
		'_given: {
			let Some(repository) = live_repository().await else { break '_given };
			repository.insert(new_thought("oldest one", 30)).await.unwrap();
			repository.insert(new_thought("newest one", 0)).await.unwrap();
			repository.insert(new_thought("middle one", 10)).await.unwrap();

			'_when: {
				let recent = repository.recent(2).await.unwrap();

				let messages: Vec<_> = recent.iter().map(|t| t.message.as_str()).collect();
				assert_eq!(messages, vec!["newest one", "middle one"]);
			}
			repository.collection.drop(None).await.unwrap();
		}
	}

	#[tokio::test]
	#[ignore = "needs a running MongoDB at MONGO_URL"]
	async fn test_live_like_increments_and_keeps_created_at() {
		'_given: {
			let Some(repository) = live_repository().await else { break '_given };
			let inserted = repository.insert(new_thought("like me please", 0)).await.unwrap();

			'_when: {
				let liked = repository.like(&inserted.id).await.unwrap().unwrap();
				assert_eq!(liked.likes, 1);
				assert_eq!(liked.created_at, inserted.created_at);

				let liked = repository.like(&inserted.id).await.unwrap().unwrap();
				assert_eq!(liked.likes, 2);
				assert_eq!(repository.get(&inserted.id).await.unwrap().unwrap(), liked);
			}
			repository.collection.drop(None).await.unwrap();
		}
	}

	#[tokio::test]
	#[ignore = "needs a running MongoDB at MONGO_URL"]
	async fn test_live_missing_thought() {
		'_given: {
			let Some(repository) = live_repository().await else { break '_given };

			let missing = ObjectId::new().to_hex();
			assert!(repository.like(&missing).await.unwrap().is_none());
			assert!(repository.get(&missing).await.unwrap().is_none());
			assert!(repository.recent(20).await.unwrap().is_empty());
		}
	}
}
