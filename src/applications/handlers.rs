use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use bytes::Bytes;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    applications::dto::{ApplicationRequest, ApplicationResponse},
    auth::extractors::AuthUser,
    error::{parse_json, ApiError},
    state::AppState,
};

// Nested under /auth so the session cookie is sent along.
pub fn application_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/auth/applications",
            get(list_applications).post(create_application),
        )
        .route(
            "/auth/applications/:id",
            get(get_application)
                .put(update_application)
                .delete(delete_application),
        )
}

#[instrument(skip(state))]
pub async fn list_applications(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<ApplicationResponse>>, ApiError> {
    let rows = state.applications.list(user_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[instrument(skip(state))]
pub async fn get_application(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApplicationResponse>, ApiError> {
    match state.applications.get(user_id, id).await? {
        Some(a) => Ok(Json(a.into())),
        None => Err(ApiError::NotFound),
    }
}

#[instrument(skip(state, body))]
pub async fn create_application(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    body: Bytes,
) -> Result<(StatusCode, HeaderMap, Json<ApplicationResponse>), ApiError> {
    let req: ApplicationRequest = parse_json(&body)?;
    let new = req.into_new()?;

    let created = state.applications.create(user_id, &new).await?;
    info!(user_id = %user_id, application_id = %created.id, "application created");

    let mut headers = HeaderMap::new();
    headers.insert(
        header::LOCATION,
        HeaderValue::from_str(&format!("/auth/applications/{}", created.id))
            .map_err(anyhow::Error::from)?,
    );
    Ok((StatusCode::CREATED, headers, Json(created.into())))
}

#[instrument(skip(state, body))]
pub async fn update_application(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    body: Bytes,
) -> Result<Json<ApplicationResponse>, ApiError> {
    let req: ApplicationRequest = parse_json(&body)?;
    let new = req.into_new()?;

    match state.applications.update(user_id, id, &new).await? {
        Some(a) => {
            info!(user_id = %user_id, application_id = %id, "application updated");
            Ok(Json(a.into()))
        }
        None => {
            warn!(user_id = %user_id, application_id = %id, "update of unknown application");
            Err(ApiError::NotFound)
        }
    }
}

#[instrument(skip(state))]
pub async fn delete_application(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.applications.delete(user_id, id).await? {
        info!(user_id = %user_id, application_id = %id, "application deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
