use axum::{extract::{Query, State}, http::StatusCode, Json};
use axum_extra::extract::Query as MultiQuery;
use serde::Deserialize;
use service::errors::ServiceError;
use service::exam::{Exam, ExamKey, ExamUpdate};
use tracing::info;
use utoipa::IntoParams;

use crate::{errors::ApiError, state::ServerState};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NameQuery {
    /// Case-insensitive name prefix
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NamesQuery {
    /// Name prefixes; repeat the parameter or separate with commas
    #[serde(default)]
    pub names: Vec<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct KeyQuery {
    pub name: String,
    pub title: String,
}

impl From<KeyQuery> for ExamKey {
    fn from(q: KeyQuery) -> Self { ExamKey::new(q.name, q.title) }
}

/// Flatten repeated and comma-separated values, dropping empty segments.
pub(crate) fn split_names(raw: Vec<String>) -> Vec<String> {
    raw.iter()
        .flat_map(|v| v.split(','))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[utoipa::path(
    get, path = "/api/v1/exam", tag = "exam",
    params(NameQuery),
    responses(
        (status = 200, description = "Exams, filtered by name prefix when given", body = [crate::openapi::ExamDoc]),
        (status = 500, description = "Storage Unavailable")
    )
)]
pub async fn list(State(state): State<ServerState>, Query(q): Query<NameQuery>) -> Result<Json<Vec<Exam>>, ApiError> {
    let exams = match q.name.as_deref() {
        Some(prefix) => state.exams.list_by_name_prefix(prefix).await?,
        None => state.exams.list_all().await?,
    };
    info!(count = exams.len(), name = ?q.name, "list exams");
    Ok(Json(exams))
}

#[utoipa::path(
    get, path = "/api/v1/exam/multiple", tag = "exam",
    params(NamesQuery),
    responses(
        (status = 200, description = "Exams matching any name prefix", body = [crate::openapi::ExamDoc]),
        (status = 400, description = "No names given"),
        (status = 500, description = "Storage Unavailable")
    )
)]
pub async fn list_multiple(State(state): State<ServerState>, MultiQuery(q): MultiQuery<NamesQuery>) -> Result<Json<Vec<Exam>>, ApiError> {
    let prefixes = split_names(q.names);
    if prefixes.is_empty() {
        return Err(ApiError::BadRequest("query parameter `names` is required".into()));
    }
    let exams = state.exams.list_by_any_name_prefix(prefixes.as_slice()).await?;
    info!(count = exams.len(), prefixes = prefixes.len(), "list exams by names");
    Ok(Json(exams))
}

#[utoipa::path(
    post, path = "/api/v1/exam", tag = "exam",
    request_body = crate::openapi::ExamDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ExamDoc),
        (status = 500, description = "Storage Unavailable")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(exam): Json<Exam>) -> Result<(StatusCode, Json<Exam>), ApiError> {
    let created = state.exams.create(exam).await?;
    info!(name = %created.name, title = %created.title, "created exam");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/v1/exam", tag = "exam",
    params(KeyQuery),
    request_body = crate::openapi::ExamUpdateDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ExamDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Storage Unavailable")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Query(key): Query<KeyQuery>,
    Json(changes): Json<ExamUpdate>,
) -> Result<Json<Exam>, ApiError> {
    let key = ExamKey::from(key);
    match state.exams.update(&key, changes).await? {
        Some(updated) => {
            info!(%key, "updated exam");
            Ok(Json(updated))
        }
        None => Err(ServiceError::not_found(format!("exam {}", key)).into()),
    }
}

#[utoipa::path(
    delete, path = "/api/v1/exam", tag = "exam",
    params(KeyQuery),
    responses(
        (status = 204, description = "Deleted, or nothing to delete"),
        (status = 500, description = "Storage Unavailable")
    )
)]
pub async fn delete(State(state): State<ServerState>, Query(key): Query<KeyQuery>) -> Result<StatusCode, ApiError> {
    let key = ExamKey::from(key);
    let existed = state.exams.delete(&key).await?;
    info!(%key, existed, "delete exam");
    Ok(StatusCode::NO_CONTENT)
}
