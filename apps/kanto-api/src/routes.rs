use axum::{
	Json, Router,
	extract::{Path, Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use kanto_domain::{Command, TagFilter, record::Record};
use kanto_service::{AcquisitionStatus, DexView, apply_filter};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/dex/status", get(status))
		.route("/v1/dex/records", get(records))
		.route("/v1/dex/records/{id}", get(record_detail))
		.route("/v1/dex/types", get(types))
		.route("/v1/dex/view", get(view))
		.route("/v1/dex/commands", post(command))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn status(State(state): State<AppState>) -> Json<AcquisitionStatus> {
	Json(state.status())
}

#[derive(Debug, Deserialize)]
struct RecordsParams {
	#[serde(default)]
	query: String,
	#[serde(default, rename = "type")]
	tag: Option<String>,
}

async fn records(
	State(state): State<AppState>,
	Query(params): Query<RecordsParams>,
) -> Result<Json<Vec<Record>>, ApiError> {
	let tag = params.tag.as_deref().map(TagFilter::parse).unwrap_or(TagFilter::All);
	let records = state.try_with_view(|view| {
		apply_filter(view.records(), &params.query, &tag).into_iter().cloned().collect()
	})?;

	Ok(Json(records))
}

async fn record_detail(
	State(state): State<AppState>,
	Path(id): Path<u32>,
) -> Result<Json<Record>, ApiError> {
	let record = state.try_with_view(|view| view.record(id).cloned())?;

	record.map(Json).ok_or_else(|| ApiError::NotFound {
		message: format!("No record with identifier {id}."),
	})
}

async fn types(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
	let tags = state.try_with_view(DexView::tags)?;

	Ok(Json(tags))
}

/// Projection of the command-driven view state for the rendering surface.
#[derive(Debug, Deserialize, Serialize)]
pub struct ViewResponse {
	pub query: String,
	pub pending_query: Option<String>,
	pub tag: String,
	pub records: Vec<Record>,
	pub selected: Option<Record>,
}

fn view_response(view: &DexView) -> ViewResponse {
	ViewResponse {
		query: view.active_query().to_string(),
		pending_query: view.pending_query().map(str::to_string),
		tag: view.tag_filter().as_str().to_string(),
		records: view.filtered().into_iter().cloned().collect(),
		selected: view.selected().cloned(),
	}
}

async fn view(State(state): State<AppState>) -> Result<Json<ViewResponse>, ApiError> {
	let now = Instant::now();
	let response = state.try_with_view_mut(|view| {
		view.settle(now);

		view_response(view)
	})?;

	Ok(Json(response))
}

async fn command(
	State(state): State<AppState>,
	Json(payload): Json<Command>,
) -> Result<Json<ViewResponse>, ApiError> {
	let now = Instant::now();
	let response = state.try_with_view_mut(|view| {
		view.apply(payload, now)?;
		view.settle(now);

		Ok::<_, kanto_service::Error>(view_response(view))
	})??;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub enum ApiError {
	/// The collection is not available; the body is the acquisition status.
	NotReady(AcquisitionStatus),
	NotFound { message: String },
	BadRequest { message: String },
}

impl From<AcquisitionStatus> for ApiError {
	fn from(status: AcquisitionStatus) -> Self {
		Self::NotReady(status)
	}
}

impl From<kanto_service::Error> for ApiError {
	fn from(err: kanto_service::Error) -> Self {
		match err {
			kanto_service::Error::NotFound { message } => Self::NotFound { message },
			kanto_service::Error::InvalidRequest { message }
			| kanto_service::Error::Aborted { message } => Self::BadRequest { message },
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		match self {
			Self::NotReady(status) =>
				(StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response(),
			Self::NotFound { message } => error_body(StatusCode::NOT_FOUND, "NOT_FOUND", message),
			Self::BadRequest { message } =>
				error_body(StatusCode::BAD_REQUEST, "BAD_REQUEST", message),
		}
	}
}

fn error_body(status: StatusCode, error_code: &str, message: String) -> Response {
	(status, Json(ErrorBody { error_code: error_code.to_string(), message })).into_response()
}
