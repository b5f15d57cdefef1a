use axum::{
	extract::{rejection::JsonRejection, Path, State},
	http::StatusCode,
	Json,
};
use axum_macros::debug_handler;

use crate::{
	dependencies::AppState,
	domain::thought::{CreateThought, Thought},
	services::{
		handlers::ThoughtHandler,
		response::{ServiceError, ServiceResponse},
	},
};

#[debug_handler]
pub(super) async fn list_thoughts(State(state): State<AppState>) -> Result<Json<Vec<Thought>>, ServiceError> {
	Ok(Json(ThoughtHandler::list_recent(&state).await?))
}

#[debug_handler]
pub(super) async fn create_thought(
	State(state): State<AppState>,
	payload: Result<Json<CreateThought>, JsonRejection>,
) -> Result<(StatusCode, Json<ServiceResponse<Thought>>), ServiceError> {
	let Json(command) = payload.map_err(|rejection| ServiceError::BadRequest(rejection.body_text()))?;
	let thought = ThoughtHandler::create(&state, command).await?;

	Ok((StatusCode::CREATED, Json(ServiceResponse::ok(thought))))
}

#[debug_handler]
pub(super) async fn get_thought(
	State(state): State<AppState>,
	Path(id): Path<String>,
) -> Result<Json<Thought>, ServiceError> {
	Ok(Json(ThoughtHandler::get(&state, &id).await?))
}

#[debug_handler]
pub(super) async fn like_thought(
	State(state): State<AppState>,
	Path(id): Path<String>,
) -> Result<Json<ServiceResponse<Thought>>, ServiceError> {
	let thought = ThoughtHandler::like(&state, &id).await?;
	Ok(Json(ServiceResponse::ok(thought)))
}
