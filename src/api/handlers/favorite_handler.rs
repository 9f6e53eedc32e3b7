//! Favorite film handlers. Every route requires authentication.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use uuid::Uuid;

use crate::api::extractors::{CurrentUser, PathParam};
use crate::api::AppState;
use crate::domain::FilmResponse;
use crate::errors::AppResult;
use crate::types::NoContent;

/// Create favorite routes
pub fn favorite_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/:film_id", post(add).delete(remove))
}

/// Favorite films of the current user
#[utoipa::path(
    get,
    path = "/favorites",
    tag = "Favorites",
    responses(
        (status = 200, description = "Favorite films", body = Vec<FilmResponse>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<FilmResponse>>> {
    let films = state.favorite_service.list(current_user.id).await?;
    Ok(Json(films.into_iter().map(FilmResponse::from).collect()))
}

/// Add a film to favorites
#[utoipa::path(
    post,
    path = "/favorites/{film_id}",
    tag = "Favorites",
    params(("film_id" = Uuid, Path, description = "Film ID")),
    responses(
        (status = 200, description = "Film is a favorite", body = FilmResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Film not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn add(
    State(state): State<AppState>,
    current_user: CurrentUser,
    PathParam(film_id): PathParam<Uuid>,
) -> AppResult<Json<FilmResponse>> {
    let film = state.favorite_service.add(current_user.id, film_id).await?;
    Ok(Json(FilmResponse::from(film)))
}

/// Remove a film from favorites
#[utoipa::path(
    delete,
    path = "/favorites/{film_id}",
    tag = "Favorites",
    params(("film_id" = Uuid, Path, description = "Film ID")),
    responses(
        (status = 204, description = "Film is no longer a favorite"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = []))
)]
pub async fn remove(
    State(state): State<AppState>,
    current_user: CurrentUser,
    PathParam(film_id): PathParam<Uuid>,
) -> AppResult<NoContent> {
    state
        .favorite_service
        .remove(current_user.id, film_id)
        .await?;
    Ok(NoContent)
}
