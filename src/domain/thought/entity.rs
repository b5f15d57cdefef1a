use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thought {
	#[serde(rename = "_id")]
	pub id: String,
	pub message: String,
	pub type_of_message: String,
	pub likes: i64,
	pub created_at: DateTime<Utc>,
}

/// A validated thought that has not been given an id by the store yet.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NewThought {
	pub message: String,
	pub type_of_message: String,
	pub created_at: DateTime<Utc>,
}

impl NewThought {
	pub fn into_thought(self, id: String) -> Thought {
		Thought {
			id,
			message: self.message,
			type_of_message: self.type_of_message,
			likes: 0,
			created_at: self.created_at,
		}
	}
}

#[test]
fn test_thought_json_shape() {
	let thought = NewThought {
		message: "Happy thoughts only".to_string(),
		type_of_message: String::new(),
		created_at: Utc::now(),
	}
	.into_thought("65f1c0ffee00000000000001".to_string());

	let jsonified = serde_json::to_value(&thought).unwrap();
	assert_eq!(jsonified["_id"], "65f1c0ffee00000000000001");
	assert_eq!(jsonified["message"], "Happy thoughts only");
	assert_eq!(jsonified["typeOfMessage"], "");
	assert_eq!(jsonified["likes"], 0);
	assert!(jsonified["createdAt"].is_string());
}
