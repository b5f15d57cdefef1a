use crate::services::response::ServiceError;

pub const DEFAULT_MONGO_URL: &str = "mongodb://localhost/happyThoughts";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_THOUGHTS_LIMIT: i64 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
	Mongo,
	Memory,
}

#[derive(Clone, Debug)]
pub struct Config {
	/// Port server is listening to
	pub port: u16,
	pub database_url: String,
	/// Comma separated, `*` allows any origin
	pub allow_origins: String,
	pub thoughts_limit: i64,
	pub store: StoreKind,
}

impl Config {
	pub fn new() -> Result<Config, ServiceError> {
		dotenv::dotenv().ok();
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ServiceError> {
		let port = match lookup("PORT") {
			Some(port) => port
				.trim()
				.parse::<u16>()
				.map_err(|_| ServiceError::InvalidConfig(format!("PORT must be a port number, got `{port}`")))?,
			None => DEFAULT_PORT,
		};
		let thoughts_limit = match lookup("THOUGHTS_LIMIT") {
			Some(limit) => match limit.trim().parse::<i64>() {
				Ok(limit) if limit > 0 => limit,
				_ => Err(ServiceError::InvalidConfig(format!(
					"THOUGHTS_LIMIT must be a positive integer, got `{limit}`"
				)))?,
			},
			None => DEFAULT_THOUGHTS_LIMIT,
		};
		let store = match lookup("STORE").as_deref().map(str::trim) {
			None | Some("") | Some("mongo") => StoreKind::Mongo,
			Some("memory") => StoreKind::Memory,
			Some(other) => Err(ServiceError::InvalidConfig(format!("STORE must be `mongo` or `memory`, got `{other}`")))?,
		};
		let database_url = lookup("MONGO_URL").unwrap_or(DEFAULT_MONGO_URL.to_string());
		let allow_origins = lookup("ALLOW_ORIGINS").unwrap_or("*".to_string());

		Ok(Config {
			port,
			database_url,
			allow_origins,
			thoughts_limit,
			store,
		})
	}

	pub fn server_ip_port(&self) -> String {
		format!("0.0.0.0:{}", self.port)
	}
}
