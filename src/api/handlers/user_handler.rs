//! User handlers: registration, login and the caller's own profile.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{CurrentUser, ValidatedJson};
use crate::api::AppState;
use crate::domain::{ProfileChanges, UserResponse};
use crate::errors::AppResult;
use crate::services::{Registration, TokenResponse};
use crate::types::Created;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "keks@htmlacademy.ru")]
    pub email: String,
    /// User password (6 to 12 characters)
    #[validate(length(min = 6, max = 12, message = "Password must be 6 to 12 characters"))]
    #[schema(example = "qwerty1", min_length = 6, max_length = 12)]
    pub password: String,
    /// User display name
    #[validate(length(min = 1, max = 15, message = "Name must be 1 to 15 characters"))]
    #[schema(example = "Keks")]
    pub name: String,
    /// Avatar image path
    #[validate(length(max = 256, message = "Avatar path is too long"))]
    #[schema(example = "avatar.jpg")]
    pub avatar_path: Option<String>,
}

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "keks@htmlacademy.ru")]
    pub email: String,
    /// User password
    #[schema(example = "qwerty1")]
    pub password: String,
}

/// Profile update request; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 15, message = "Name must be 1 to 15 characters"))]
    #[schema(example = "Tom")]
    pub name: Option<String>,
    #[validate(length(max = 256, message = "Avatar path is too long"))]
    pub avatar_path: Option<String>,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(get_current_user).patch(update_current_user))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users/register",
    tag = "Users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "User already exists")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<Created<UserResponse>> {
    let user = state
        .auth_service
        .register(Registration {
            email: payload.email,
            password: payload.password,
            name: payload.name,
            avatar_path: payload.avatar_path,
        })
        .await?;

    Ok(Created(UserResponse::from(user)))
}

/// Login and get JWT token
#[utoipa::path(
    post,
    path = "/users/login",
    tag = "Users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    Ok(Json(token))
}

/// Profile of the authenticated user
#[utoipa::path(
    get,
    path = "/users/me",
    tag = "Users",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(current_user.id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Update name and/or avatar of the authenticated user
#[utoipa::path(
    patch,
    path = "/users/me",
    tag = "Users",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_current_user(
    State(state): State<AppState>,
    current_user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<UpdateProfileRequest>,
) -> AppResult<Json<UserResponse>> {
    let changes = ProfileChanges {
        name: payload.name,
        avatar_path: payload.avatar_path,
    };
    let user = state
        .user_service
        .update_profile(current_user.id, changes)
        .await?;

    Ok(Json(UserResponse::from(user)))
}
