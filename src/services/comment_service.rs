//! Comment service - Film reviews and the ratings they feed.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::COMMENT_LIST_LIMIT;
use crate::domain::{CommentWithAuthor, NewComment};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait CommentService: Send + Sync {
    /// Newest comments of an existing film
    async fn list_for_film(&self, film_id: Uuid) -> AppResult<Vec<CommentWithAuthor>>;

    /// Post a comment and update the film rating
    async fn create(&self, comment: NewComment) -> AppResult<CommentWithAuthor>;
}

pub struct CommentManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CommentManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CommentService for CommentManager<U> {
    async fn list_for_film(&self, film_id: Uuid) -> AppResult<Vec<CommentWithAuthor>> {
        self.uow
            .films()
            .find_by_id(film_id)
            .await?
            .ok_or_not_found("Film")?;

        self.uow
            .comments()
            .list_by_film(film_id, COMMENT_LIST_LIMIT)
            .await
    }

    async fn create(&self, comment: NewComment) -> AppResult<CommentWithAuthor> {
        let comment = self.uow.comments().create(comment).await?;
        let author = self.uow.users().find_by_id(comment.user_id).await?;

        tracing::info!(
            comment_id = %comment.id,
            film_id = %comment.film_id,
            rating = comment.rating,
            "Comment posted"
        );

        Ok(CommentWithAuthor { comment, author })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::film::fixtures;
    use crate::domain::{Comment, User};
    use crate::errors::AppError;
    use crate::infra::unit_of_work::testing::MockUnitOfWork;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_list_for_unknown_film() {
        let mut uow = MockUnitOfWork::default();
        uow.films.expect_find_by_id().returning(|_| Ok(None));
        uow.comments.expect_list_by_film().never();

        let service = CommentManager::new(uow.build());
        let result = service.list_for_film(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound("Film"))));
    }

    #[tokio::test]
    async fn test_list_is_limited() {
        let film = fixtures::film(Uuid::new_v4(), Uuid::new_v4());
        let film_id = film.id;
        let mut uow = MockUnitOfWork::default();
        uow.films
            .expect_find_by_id()
            .returning(move |_| Ok(Some(film.clone())));
        uow.comments
            .expect_list_by_film()
            .with(eq(film_id), eq(COMMENT_LIST_LIMIT))
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let service = CommentManager::new(uow.build());

        assert!(service.list_for_film(film_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_attaches_author() {
        let author = User::new("keks@htmlacademy.ru".to_string(), "Keks".to_string(), None);
        let author_id = author.id;
        let film_id = Uuid::new_v4();

        let mut uow = MockUnitOfWork::default();
        uow.comments.expect_create().times(1).returning(|new| {
            Ok(Comment {
                id: Uuid::new_v4(),
                text: new.text,
                rating: new.rating,
                film_id: new.film_id,
                user_id: new.user_id,
                created_at: chrono::Utc::now(),
            })
        });
        uow.users
            .expect_find_by_id()
            .with(eq(author_id))
            .returning(move |_| Ok(Some(author.clone())));

        let service = CommentManager::new(uow.build());
        let created = service
            .create(NewComment {
                text: "Wonderful film".to_string(),
                rating: 9,
                film_id,
                user_id: author_id,
            })
            .await
            .unwrap();

        assert_eq!(created.comment.film_id, film_id);
        assert_eq!(created.comment.rating, 9);
        assert_eq!(created.author.map(|a| a.name), Some("Keks".to_string()));
    }

    #[tokio::test]
    async fn test_create_on_missing_film() {
        let mut uow = MockUnitOfWork::default();
        uow.comments
            .expect_create()
            .returning(|_| Err(AppError::NotFound("Film")));
        uow.users.expect_find_by_id().never();

        let service = CommentManager::new(uow.build());
        let result = service
            .create(NewComment {
                text: "Wonderful film".to_string(),
                rating: 9,
                film_id: Uuid::new_v4(),
                user_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result, Err(AppError::NotFound("Film"))));
    }
}
