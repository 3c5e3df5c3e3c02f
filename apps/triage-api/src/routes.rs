use axum::{
	Json, Router,
	extract::State,
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;

use crate::state::AppState;
use triage_service::{Error as ServiceError, RouteRequest, RouteResponse};

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/tickets/route", post(route_ticket))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn route_ticket(
	State(state): State<AppState>,
	Json(payload): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
	let response = state.service.route_and_apply(payload).await?;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: &'static str,
	message: String,
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		let (status, error_code) = match &err {
			ServiceError::InvalidRequest { .. } => (StatusCode::BAD_REQUEST, "invalid_request"),
			ServiceError::Embedding { .. } => (StatusCode::BAD_GATEWAY, "embedding_unavailable"),
			ServiceError::Search { .. } => (StatusCode::BAD_GATEWAY, "search_failed"),
			ServiceError::Update { .. } => (StatusCode::BAD_GATEWAY, "update_failed"),
			ServiceError::Routing(_) => (StatusCode::INTERNAL_SERVER_ERROR, "routing_failed"),
		};

		Self { status, error_code, message: err.to_string() }
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body =
			ErrorBody { error_code: self.error_code.to_string(), message: self.message };

		(self.status, Json(body)).into_response()
	}
}
