//! Genre handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::film_handler::show_by_genre;
use crate::api::extractors::{CurrentUser, ValidatedJson};
use crate::api::AppState;
use crate::domain::GenreResponse;
use crate::errors::AppResult;
use crate::types::Created;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGenreRequest {
    #[validate(length(min = 3, max = 50, message = "name must be 3 to 50 characters"))]
    #[schema(example = "Drama")]
    pub name: String,
}

/// Create genre routes
pub fn genre_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:genre_id/films", get(show_by_genre))
}

/// List genres by name
#[utoipa::path(
    get,
    path = "/genres",
    tag = "Genres",
    responses(
        (status = 200, description = "All genres", body = Vec<GenreResponse>)
    )
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<GenreResponse>>> {
    let genres = state.genre_service.list().await?;
    Ok(Json(genres.into_iter().map(GenreResponse::from).collect()))
}

/// Create a genre
#[utoipa::path(
    post,
    path = "/genres",
    tag = "Genres",
    request_body = CreateGenreRequest,
    responses(
        (status = 201, description = "Genre created", body = GenreResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Genre already exists")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<CreateGenreRequest>,
) -> AppResult<Created<GenreResponse>> {
    let genre = state.genre_service.create(payload.name).await?;
    Ok(Created(GenreResponse::from(genre)))
}
