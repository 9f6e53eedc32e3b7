//! Comment domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{AuthorResponse, User};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub text: String,
    pub rating: i16,
    pub film_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Comment creation data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub text: String,
    pub rating: i16,
    pub film_id: Uuid,
    pub user_id: Uuid,
}

/// Comment joined with its author, if the author still exists
#[derive(Debug, Clone)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author: Option<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub id: Uuid,
    #[schema(example = "A quiet, devastating film.")]
    pub text: String,
    #[schema(example = 8, minimum = 1, maximum = 10)]
    pub rating: i16,
    pub film_id: Uuid,
    pub user_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorResponse>,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            text: comment.text,
            rating: comment.rating,
            film_id: comment.film_id,
            user_id: comment.user_id,
            author: None,
            created_at: comment.created_at,
        }
    }
}

impl From<CommentWithAuthor> for CommentResponse {
    fn from(entry: CommentWithAuthor) -> Self {
        Self {
            author: entry.author.map(AuthorResponse::from),
            ..Self::from(entry.comment)
        }
    }
}
