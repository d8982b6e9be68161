use axum::{
    extract::{FromRef, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        cookie::{clear_session_cookie, session_cookie},
        dto::{Credentials, LoginResponse},
        extractors::AuthUser,
        jwt::JwtKeys,
    },
    error::{parse_json, ApiError},
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
}

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[instrument(skip(state, body))]
pub async fn signup(State(state): State<AppState>, body: Bytes) -> Result<StatusCode, ApiError> {
    let payload: Credentials = parse_json(&body)?;
    let email = normalize_email(&payload.email);

    if !is_valid_email(&email) {
        warn!(email = %email, "invalid email");
        return Err(ApiError::MalformedRequest);
    }

    let hash = state.hasher.hash(&payload.password).map_err(|e| {
        error!(error = %e, "could not hash password");
        ApiError::Internal(e)
    })?;

    // Duplicate emails surface the same way as any other store failure.
    let user = state.users.add_user(&email, &hash).await.map_err(|e| {
        error!(error = %e, email = %email, "could not create user");
        ApiError::Internal(e)
    })?;

    info!(user_id = %user.id, email = %user.email, "user signed up");
    Ok(StatusCode::OK)
}

#[instrument(skip(state, body))]
pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let payload: Credentials = parse_json(&body)?;
    let email = normalize_email(&payload.email);

    // Unknown email and failed lookup are reported exactly like a wrong password,
    // and pay for the same hash verification.
    let user = match state.users.get_user_by_email(&email).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            warn!(email = %email, "login unknown email");
            let _ = state.hasher.verify(&payload.password, state.hasher.decoy_hash());
            return Err(ApiError::InvalidCredentials);
        }
        Err(e) => {
            error!(error = %e, email = %email, "get_user_by_email failed");
            let _ = state.hasher.verify(&payload.password, state.hasher.decoy_hash());
            return Err(ApiError::InvalidCredentials);
        }
    };

    match state.hasher.verify(&payload.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            warn!(user_id = %user.id, "login invalid password");
            return Err(ApiError::InvalidCredentials);
        }
        Err(e) => {
            error!(error = %e, user_id = %user.id, "stored password hash unreadable");
            return Err(ApiError::InvalidCredentials);
        }
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id).map_err(|e| {
        error!(error = %e, user_id = %user.id, "jwt sign failed");
        ApiError::Internal(e)
    })?;
    let cookie = session_cookie(&token, keys.ttl, state.config.cookies_secure)?;

    info!(user_id = %user.id, "user logged in");
    Ok((
        StatusCode::ACCEPTED,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse { email: user.email }),
    ))
}

#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let cookie = clear_session_cookie(state.config.cookies_secure)?;
    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]))
}

#[instrument(skip(state))]
pub async fn me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<LoginResponse>, ApiError> {
    match state.users.get_user_by_id(user_id).await? {
        Some(user) => Ok(Json(LoginResponse { email: user.email })),
        None => {
            warn!(user_id = %user_id, "session for unknown user");
            Err(ApiError::Unauthorized)
        }
    }
}
