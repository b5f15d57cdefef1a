use std::fmt::Display;

use chrono::{SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::entity::NewThought;

pub const MESSAGE_MIN_LENGTH: usize = 5;
pub const MESSAGE_MAX_LENGTH: usize = 140;
/// Any whitespace-free run at least this long is rejected.
pub const WORD_MAX_LENGTH: usize = 30;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateThought {
	#[serde(default, alias = "thought")]
	pub message: Option<String>,
	#[serde(default)]
	pub type_of_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
	Required,
	TooShort { length: usize },
	TooLong { length: usize },
	WordTooLong { length: usize },
}

impl ValidationError {
	pub fn field(&self) -> &'static str {
		"message"
	}

	pub fn kind(&self) -> &'static str {
		match self {
			ValidationError::Required => "required",
			ValidationError::TooShort { .. } => "minlength",
			ValidationError::TooLong { .. } => "maxlength",
			ValidationError::WordTooLong { .. } => "user defined",
		}
	}
}

impl Display for ValidationError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ValidationError::Required => write!(f, "Path `message` is required."),
			ValidationError::TooShort { length } => write!(
				f,
				"Path `message` ({length} characters) is shorter than the minimum allowed length ({MESSAGE_MIN_LENGTH})."
			),
			ValidationError::TooLong { length } => write!(
				f,
				"Path `message` ({length} characters) is longer than the maximum allowed length ({MESSAGE_MAX_LENGTH})."
			),
			ValidationError::WordTooLong { length } => write!(
				f,
				"Message contains a word of {length} characters, please use words shorter than {}.",
				WORD_MAX_LENGTH + 1
			),
		}
	}
}

impl std::error::Error for ValidationError {}

impl CreateThought {
	pub fn validate(self) -> Result<NewThought, ValidationError> {
		let message = self.message.ok_or(ValidationError::Required)?;
		let message = message.trim();

		let length = message.chars().count();
		if length == 0 {
			return Err(ValidationError::Required);
		}
		if length < MESSAGE_MIN_LENGTH {
			return Err(ValidationError::TooShort { length });
		}
		if length > MESSAGE_MAX_LENGTH {
			return Err(ValidationError::TooLong { length });
		}
		if let Some(length) = message
			.split_whitespace()
			.map(|word| word.chars().count())
			.find(|count| *count > WORD_MAX_LENGTH)
		{
			return Err(ValidationError::WordTooLong { length });
		}

		Ok(NewThought {
			message: message.to_string(),
			type_of_message: self.type_of_message.unwrap_or_default(),
			// The store keeps milliseconds; finer precision would differ on reread.
			created_at: Utc::now().trunc_subsecs(3),
		})
	}
}
