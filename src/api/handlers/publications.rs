//! Publication handlers: create, list, retrieve.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{CreatePublicationRequest, ListParams, PublicationResponse};
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};

/// `POST /publications/` — Record a new publication.
///
/// # Errors
///
/// Returns [`ApiError`] when a required field is empty or the
/// `file_url` is already recorded.
#[utoipa::path(
    post,
    path = "/publications/",
    tag = "Publications",
    summary = "Record a publication",
    description = "Records the public URL of an uploaded gazette PDF under its competence. Rows are immutable and file_url is unique: re-submitting an existing URL is rejected.",
    request_body = CreatePublicationRequest,
    responses(
        (status = 201, description = "Publication recorded", body = PublicationResponse),
        (status = 400, description = "Missing or empty required field", body = ErrorResponse),
        (status = 422, description = "file_url already recorded", body = ErrorResponse),
    )
)]
pub async fn create_publication(
    State(state): State<AppState>,
    Json(req): Json<CreatePublicationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let publication = state
        .publications
        .create(&req.file_url, &req.competence)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PublicationResponse::from(publication)),
    ))
}

/// `GET /publications/` — List publications newest-first.
///
/// # Errors
///
/// Returns [`ApiError`] on persistence failures.
#[utoipa::path(
    get,
    path = "/publications/",
    tag = "Publications",
    summary = "List publications",
    description = "Returns all publications newest-first, optionally filtered by exact competence match (e.g. ?competence=2025-06).",
    params(ListParams),
    responses(
        (status = 200, description = "Publication list", body = Vec<PublicationResponse>),
    )
)]
pub async fn list_publications(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let publications = state
        .publications
        .list(params.competence.as_deref())
        .await?;

    let data: Vec<PublicationResponse> = publications
        .into_iter()
        .map(PublicationResponse::from)
        .collect();

    Ok(Json(data))
}

/// `GET /publications/{id}/` — Retrieve a single publication.
///
/// # Errors
///
/// Returns [`ApiError`] when the ID does not exist.
#[utoipa::path(
    get,
    path = "/publications/{id}/",
    tag = "Publications",
    summary = "Retrieve a publication",
    params(
        ("id" = i64, Path, description = "Publication row ID"),
    ),
    responses(
        (status = 200, description = "Publication", body = PublicationResponse),
        (status = 404, description = "Unknown publication ID", body = ErrorResponse),
    )
)]
pub async fn get_publication(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let publication = state.publications.get(id).await?;
    Ok(Json(PublicationResponse::from(publication)))
}

/// Publication routes with Django-router-compatible trailing slashes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/publications/",
            get(list_publications).post(create_publication),
        )
        .route("/publications/{id}/", get(get_publication))
}
