mod home;
mod thoughts;

use axum::{
	http::{header, HeaderValue, Method},
	routing::{get, post},
	Router,
};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::dependencies::AppState;

#[derive(Debug, Serialize)]
pub struct Endpoint {
	pub path: &'static str,
	pub methods: &'static [&'static str],
}

/// Served by `GET /`. Keep in step with `create_routes`.
pub const ENDPOINTS: &[Endpoint] = &[
	Endpoint { path: "/", methods: &["GET"] },
	Endpoint {
		path: "/thoughts",
		methods: &["GET", "POST"],
	},
	Endpoint {
		path: "/thoughts/:id",
		methods: &["GET"],
	},
	Endpoint {
		path: "/thoughts/:id/likes",
		methods: &["POST"],
	},
];

pub fn create_routes(state: AppState) -> Router {
	Router::new()
		.route("/", get(home::index))
		.route("/thoughts", get(thoughts::list_thoughts).post(thoughts::create_thought))
		.route("/thoughts/:id", get(thoughts::get_thought))
		.route("/thoughts/:id/likes", post(thoughts::like_thought))
		.with_state(state)
}

/// `*` (or an empty list) allows any origin.
pub fn cors(allow_origins: &str) -> CorsLayer {
	let origins: Vec<HeaderValue> = allow_origins
		.split(',')
		.map(str::trim)
		.filter(|origin| !origin.is_empty() && *origin != "*")
		.filter_map(|origin| match origin.parse::<HeaderValue>() {
			Ok(value) => Some(value),
			Err(_) => {
				tracing::warn!("Ignoring invalid CORS origin `{}`", origin);
				None
			}
		})
		.collect();

	let allow_origin = if origins.is_empty() || allow_origins.split(',').any(|origin| origin.trim() == "*") {
		AllowOrigin::from(Any)
	} else {
		AllowOrigin::list(origins)
	};

	CorsLayer::new()
		.allow_origin(allow_origin)
		.allow_methods([Method::GET, Method::POST])
		.allow_headers([header::CONTENT_TYPE])
}
