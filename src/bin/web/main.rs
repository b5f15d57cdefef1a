use std::{net::SocketAddr, str::FromStr};

use thought::{config::Config, create_routes, dependencies::AppState, routes::cors, services::response::ServiceError};
use tower_http::trace::TraceLayer;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
	// ! Tracing
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			// axum logs rejections from built-in extractors with the `axum::rejection`
			// target, at `TRACE` level. `axum::rejection=trace` enables showing those events
			"thought=debug,tower_http=debug,axum::rejection=trace".into()
		}))
		.with(tracing_subscriber::fmt::layer())
		.init();

	// Loads `.env` before reading the environment.
	let config = Config::new()?;

	// ! Connection
	tracing::info!("Connecting to the {:?} store...", config.store);
	let state = AppState::from_config(&config).await?;

	let app = create_routes(state).layer(cors(&config.allow_origins)).layer(TraceLayer::new_for_http());

	let address = SocketAddr::from_str(&config.server_ip_port())
		.map_err(|err| ServiceError::InvalidConfig(format!("invalid listen address: {}", err)))?;
	tracing::info!("Server running on http://localhost:{}", config.port);
	axum::Server::bind(&address)
		.serve(app.into_make_service())
		.await
		.map_err(|err| ServiceError::ServerError(Box::new(err)))
}
