//! Comment repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::comment::{self, ActiveModel, Entity as CommentEntity};
use super::entities::film::{self, Entity as FilmEntity};
use super::entities::user::Entity as UserEntity;
use crate::domain::{Comment, CommentWithAuthor, Film, NewComment, User};
use crate::errors::{AppResult, OptionExt};
use crate::infra::unit_of_work::in_transaction;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Newest comments of a film with their authors
    async fn list_by_film(&self, film_id: Uuid, limit: u64) -> AppResult<Vec<CommentWithAuthor>>;

    /// Insert a comment and fold its rating into the film, atomically
    async fn create(&self, comment: NewComment) -> AppResult<Comment>;
}

pub struct CommentStore {
    db: DatabaseConnection,
}

impl CommentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for CommentStore {
    async fn list_by_film(&self, film_id: Uuid, limit: u64) -> AppResult<Vec<CommentWithAuthor>> {
        let rows = CommentEntity::find()
            .filter(comment::Column::FilmId.eq(film_id))
            .order_by_desc(comment::Column::CreatedAt)
            .limit(limit)
            .find_also_related(UserEntity)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(comment, author)| CommentWithAuthor {
                comment: Comment::from(comment),
                author: author.map(User::from),
            })
            .collect())
    }

    async fn create(&self, new_comment: NewComment) -> AppResult<Comment> {
        in_transaction(&self.db, move |txn| {
            Box::pin(async move {
                // Row lock serializes concurrent rating updates
                let film_model = FilmEntity::find_by_id(new_comment.film_id)
                    .lock_exclusive()
                    .one(txn)
                    .await?
                    .ok_or_not_found("Film")?;

                let comment = ActiveModel {
                    id: Set(Uuid::new_v4()),
                    text: Set(new_comment.text),
                    rating: Set(new_comment.rating),
                    film_id: Set(new_comment.film_id),
                    user_id: Set(new_comment.user_id),
                    created_at: Set(chrono::Utc::now()),
                }
                .insert(txn)
                .await?;

                let mut rated = Film::from(film_model.clone());
                rated.record_rating(new_comment.rating);

                let mut active: film::ActiveModel = film_model.into();
                active.rating = Set(rated.rating);
                active.comment_count = Set(rated.comment_count);
                active.updated_at = Set(rated.updated_at);
                active.update(txn).await?;

                Ok(Comment::from(comment))
            })
        })
        .await
    }
}
