use axum::Json;
use axum_macros::debug_handler;

use super::{Endpoint, ENDPOINTS};

#[debug_handler]
pub(super) async fn index() -> Json<&'static [Endpoint]> {
	Json(ENDPOINTS)
}
