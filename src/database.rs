use mongodb::{options::ClientOptions, Client, Database};

use crate::services::response::ServiceError;

pub const DEFAULT_DATABASE: &str = "happyThoughts";

/// Connects to the store named by `url`, using the database in the url path
/// or `happyThoughts` when the url has none.
pub async fn connect(url: &str) -> Result<Database, ServiceError> {
	let mut options = ClientOptions::parse(url).await.map_err(|err| {
		tracing::error!("Invalid store url {}: {}", url, err);
		ServiceError::InvalidConfig(format!("MONGO_URL is not a valid connection string: {}", err))
	})?;
	options.app_name.get_or_insert_with(|| "thought".to_string());

	let client = Client::with_options(options)?;
	let database = client.default_database().unwrap_or_else(|| client.database(DEFAULT_DATABASE));
	tracing::info!("Using database `{}`", database.name());

	Ok(database)
}

#[cfg(test)]
mod test {
	use super::{connect, DEFAULT_DATABASE};
	use crate::services::response::ServiceError;

	#[tokio::test]
	async fn test_database_from_url_path() {
		let database = connect("mongodb://localhost:27017/otherThoughts").await.unwrap();
		assert_eq!(database.name(), "otherThoughts");
	}

	#[tokio::test]
	async fn test_default_database_when_url_has_none() {
		let database = connect("mongodb://localhost:27017").await.unwrap();
		assert_eq!(database.name(), DEFAULT_DATABASE);
	}

	#[tokio::test]
	async fn test_invalid_url() {
		assert!(matches!(connect("postgres://localhost/thoughts").await, Err(ServiceError::InvalidConfig(_))));
	}
}
