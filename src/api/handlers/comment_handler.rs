//! Comment handlers, nested under `/films`.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::{CurrentUser, PathParam, ValidatedJson};
use crate::api::AppState;
use crate::domain::{CommentResponse, NewComment};
use crate::errors::AppResult;
use crate::types::Created;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCommentRequest {
    #[validate(length(min = 5, max = 1024, message = "text must be 5 to 1024 characters"))]
    #[schema(example = "A quiet, devastating film.")]
    pub text: String,
    #[validate(range(min = 1, max = 10, message = "rating must be between 1 and 10"))]
    #[schema(example = 8)]
    pub rating: i16,
}

/// Create comment routes
pub fn comment_routes() -> Router<AppState> {
    Router::new().route("/:film_id/comments", get(list).post(create))
}

/// Newest comments of a film
#[utoipa::path(
    get,
    path = "/films/{film_id}/comments",
    tag = "Comments",
    params(("film_id" = Uuid, Path, description = "Film ID")),
    responses(
        (status = 200, description = "Up to 50 newest comments", body = Vec<CommentResponse>),
        (status = 404, description = "Film not found")
    )
)]
pub async fn list(
    State(state): State<AppState>,
    PathParam(film_id): PathParam<Uuid>,
) -> AppResult<Json<Vec<CommentResponse>>> {
    let comments = state.comment_service.list_for_film(film_id).await?;
    Ok(Json(comments.into_iter().map(CommentResponse::from).collect()))
}

/// Comment on a film
#[utoipa::path(
    post,
    path = "/films/{film_id}/comments",
    tag = "Comments",
    params(("film_id" = Uuid, Path, description = "Film ID")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Film not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create(
    State(state): State<AppState>,
    current_user: CurrentUser,
    PathParam(film_id): PathParam<Uuid>,
    ValidatedJson(payload): ValidatedJson<CreateCommentRequest>,
) -> AppResult<Created<CommentResponse>> {
    let comment = state
        .comment_service
        .create(NewComment {
            text: payload.text,
            rating: payload.rating,
            film_id,
            user_id: current_user.id,
        })
        .await?;

    Ok(Created(CommentResponse::from(comment)))
}
