//! Film handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::patterns::{HEX_COLOR, IMAGE_PATH};
use crate::api::extractors::{CurrentUser, PathParam, QueryParams, ValidatedJson};
use crate::api::AppState;
use crate::domain::{FilmChanges, FilmDeleteResponse, FilmResponse, NewFilm};
use crate::errors::AppResult;
use crate::types::{Created, PaginationParams};

/// Film creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFilmRequest {
    #[validate(length(min = 2, max = 100, message = "title must be 2 to 100 characters"))]
    #[schema(example = "Aftersun")]
    pub title: String,
    #[validate(length(
        min = 20,
        max = 1024,
        message = "description must be 20 to 1024 characters"
    ))]
    pub description: String,
    /// Defaults to the time of the request
    pub published_at: Option<DateTime<Utc>>,
    pub genre_id: Uuid,
    #[validate(range(min = 1895, max = 2100, message = "released must be a year between 1895 and 2100"))]
    #[schema(example = 2022)]
    pub released: i32,
    #[validate(url(message = "preview_video_link must be a URL"))]
    pub preview_video_link: String,
    #[validate(url(message = "video_link must be a URL"))]
    pub video_link: String,
    #[validate(length(min = 1, message = "starring must list at least one actor"))]
    pub starring: Vec<String>,
    #[validate(length(min = 2, max = 50, message = "director must be 2 to 50 characters"))]
    #[schema(example = "Charlotte Wells")]
    pub director: String,
    #[validate(range(min = 1, max = 600, message = "run_time must be 1 to 600 minutes"))]
    #[schema(example = 101)]
    pub run_time: i32,
    #[validate(regex(path = *IMAGE_PATH, message = "poster_image must be a jpg or png"))]
    #[schema(example = "aftersun.jpg")]
    pub poster_image: String,
    #[validate(regex(path = *IMAGE_PATH, message = "background_image must be a jpg or png"))]
    #[schema(example = "aftersun-bg.jpg")]
    pub background_image: String,
    #[validate(regex(path = *HEX_COLOR, message = "background_color must look like #RRGGBB"))]
    #[schema(example = "#A6B4C2")]
    pub background_color: String,
}

impl CreateFilmRequest {
    fn into_new_film(self, user_id: Uuid) -> NewFilm {
        NewFilm {
            title: self.title,
            description: self.description,
            published_at: self.published_at.unwrap_or_else(Utc::now),
            genre_id: self.genre_id,
            released: self.released,
            preview_video_link: self.preview_video_link,
            video_link: self.video_link,
            starring: self.starring,
            director: self.director,
            run_time: self.run_time,
            user_id,
            poster_image: self.poster_image,
            background_image: self.background_image,
            background_color: self.background_color,
        }
    }
}

/// Partial film update; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateFilmRequest {
    /// Film to update
    pub id: Uuid,
    #[validate(length(min = 2, max = 100, message = "title must be 2 to 100 characters"))]
    pub title: Option<String>,
    #[validate(length(
        min = 20,
        max = 1024,
        message = "description must be 20 to 1024 characters"
    ))]
    pub description: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub genre_id: Option<Uuid>,
    #[validate(range(min = 1895, max = 2100, message = "released must be a year between 1895 and 2100"))]
    pub released: Option<i32>,
    #[validate(url(message = "preview_video_link must be a URL"))]
    pub preview_video_link: Option<String>,
    #[validate(url(message = "video_link must be a URL"))]
    pub video_link: Option<String>,
    #[validate(length(min = 1, message = "starring must list at least one actor"))]
    pub starring: Option<Vec<String>>,
    #[validate(length(min = 2, max = 50, message = "director must be 2 to 50 characters"))]
    pub director: Option<String>,
    #[validate(range(min = 1, max = 600, message = "run_time must be 1 to 600 minutes"))]
    pub run_time: Option<i32>,
    #[validate(regex(path = *IMAGE_PATH, message = "poster_image must be a jpg or png"))]
    pub poster_image: Option<String>,
    #[validate(regex(path = *IMAGE_PATH, message = "background_image must be a jpg or png"))]
    pub background_image: Option<String>,
    #[validate(regex(path = *HEX_COLOR, message = "background_color must look like #RRGGBB"))]
    pub background_color: Option<String>,
}

impl UpdateFilmRequest {
    fn into_parts(self) -> (Uuid, FilmChanges) {
        let changes = FilmChanges {
            title: self.title,
            description: self.description,
            published_at: self.published_at,
            genre_id: self.genre_id,
            released: self.released,
            preview_video_link: self.preview_video_link,
            video_link: self.video_link,
            starring: self.starring,
            director: self.director,
            run_time: self.run_time,
            poster_image: self.poster_image,
            background_image: self.background_image,
            background_color: self.background_color,
        };
        (self.id, changes)
    }
}

/// Film deletion request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DeleteFilmRequest {
    pub id: Uuid,
}

/// Create film routes
pub fn film_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index).post(create).patch(update).delete(delete))
        .route("/:film_id/promo", get(promo))
        .route("/:film_id/details", get(details))
}

/// List films, newest first
#[utoipa::path(
    get,
    path = "/films",
    tag = "Films",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of films", body = Vec<FilmResponse>)
    )
)]
pub async fn index(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<PaginationParams>,
) -> AppResult<Json<Vec<FilmResponse>>> {
    let films = state.film_service.find(&params).await?;
    Ok(Json(films.into_iter().map(FilmResponse::from).collect()))
}

/// Publish a new film
#[utoipa::path(
    post,
    path = "/films",
    tag = "Films",
    request_body = CreateFilmRequest,
    responses(
        (status = 201, description = "Film created", body = FilmResponse),
        (status = 400, description = "Validation error or unknown genre"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create(
    State(state): State<AppState>,
    current_user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<CreateFilmRequest>,
) -> AppResult<Created<FilmResponse>> {
    let film = state
        .film_service
        .create(payload.into_new_film(current_user.id))
        .await?;

    Ok(Created(FilmResponse::from(film)))
}

/// Update a film you published
#[utoipa::path(
    patch,
    path = "/films",
    tag = "Films",
    request_body = UpdateFilmRequest,
    responses(
        (status = 200, description = "Film updated", body = FilmResponse),
        (status = 400, description = "Validation error or unknown genre"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the author of the film"),
        (status = 404, description = "Film not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update(
    State(state): State<AppState>,
    current_user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<UpdateFilmRequest>,
) -> AppResult<Json<FilmResponse>> {
    let (id, changes) = payload.into_parts();
    let film = state
        .film_service
        .update_by_id(current_user.id, id, changes)
        .await?;

    Ok(Json(FilmResponse::from(film)))
}

/// Delete a film you published, with its comments and favorites
#[utoipa::path(
    delete,
    path = "/films",
    tag = "Films",
    request_body = DeleteFilmRequest,
    responses(
        (status = 200, description = "Film deleted", body = FilmDeleteResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the author of the film"),
        (status = 404, description = "Film not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete(
    State(state): State<AppState>,
    current_user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<DeleteFilmRequest>,
) -> AppResult<Json<FilmDeleteResponse>> {
    let id = state
        .film_service
        .delete_by_id(current_user.id, payload.id)
        .await?;

    Ok(Json(FilmDeleteResponse { id }))
}

/// Promo card of a film
#[utoipa::path(
    get,
    path = "/films/{film_id}/promo",
    tag = "Films",
    params(("film_id" = Uuid, Path, description = "Film ID")),
    responses(
        (status = 200, description = "Film found", body = FilmResponse),
        (status = 404, description = "Film not found")
    )
)]
pub async fn promo(
    State(state): State<AppState>,
    PathParam(film_id): PathParam<Uuid>,
) -> AppResult<Json<FilmResponse>> {
    let film = state.film_service.find_by_id(film_id).await?;
    Ok(Json(FilmResponse::from(film)))
}

/// Full details of a film
#[utoipa::path(
    get,
    path = "/films/{film_id}/details",
    tag = "Films",
    params(("film_id" = Uuid, Path, description = "Film ID")),
    responses(
        (status = 200, description = "Film found", body = FilmResponse),
        (status = 404, description = "Film not found")
    )
)]
pub async fn details(
    State(state): State<AppState>,
    PathParam(film_id): PathParam<Uuid>,
) -> AppResult<Json<FilmResponse>> {
    let film = state.film_service.find_by_id(film_id).await?;
    Ok(Json(FilmResponse::from(film)))
}

/// Films of one genre
#[utoipa::path(
    get,
    path = "/genres/{genre_id}/films",
    tag = "Films",
    params(("genre_id" = Uuid, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Films of the genre", body = Vec<FilmResponse>),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn show_by_genre(
    State(state): State<AppState>,
    PathParam(genre_id): PathParam<Uuid>,
) -> AppResult<Json<Vec<FilmResponse>>> {
    let films = state.film_service.find_by_genre_id(genre_id).await?;
    Ok(Json(films.into_iter().map(FilmResponse::from).collect()))
}
