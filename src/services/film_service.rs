//! Film service - Catalog queries and author-only film mutations.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Film, FilmChanges, NewFilm};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::types::PaginationParams;

#[async_trait]
pub trait FilmService: Send + Sync {
    /// One page of films, newest first
    async fn find(&self, params: &PaginationParams) -> AppResult<Vec<Film>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Film>;

    /// Films of a genre; an unknown genre is `NotFound`
    async fn find_by_genre_id(&self, genre_id: Uuid) -> AppResult<Vec<Film>>;

    async fn create(&self, film: NewFilm) -> AppResult<Film>;

    /// Update a film the caller authored
    async fn update_by_id(&self, user_id: Uuid, id: Uuid, changes: FilmChanges)
        -> AppResult<Film>;

    /// Delete a film the caller authored, returning its id
    async fn delete_by_id(&self, user_id: Uuid, id: Uuid) -> AppResult<Uuid>;
}

pub struct FilmManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> FilmManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn ensure_genre_exists(&self, genre_id: Uuid) -> AppResult<()> {
        if self.uow.genres().find_by_id(genre_id).await?.is_none() {
            return Err(AppError::bad_request(format!("genre {} does not exist", genre_id)));
        }
        Ok(())
    }

    async fn find_owned(&self, user_id: Uuid, id: Uuid) -> AppResult<Film> {
        let film = self.find_by_id(id).await?;
        if !film.is_owned_by(user_id) {
            return Err(AppError::Forbidden);
        }
        Ok(film)
    }
}

#[async_trait]
impl<U: UnitOfWork> FilmService for FilmManager<U> {
    async fn find(&self, params: &PaginationParams) -> AppResult<Vec<Film>> {
        self.uow
            .films()
            .find_page(params.offset(), params.limit())
            .await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Film> {
        self.uow
            .films()
            .find_by_id(id)
            .await?
            .ok_or_not_found("Film")
    }

    async fn find_by_genre_id(&self, genre_id: Uuid) -> AppResult<Vec<Film>> {
        self.uow
            .genres()
            .find_by_id(genre_id)
            .await?
            .ok_or_not_found("Genre")?;

        self.uow.films().find_by_genre(genre_id).await
    }

    async fn create(&self, film: NewFilm) -> AppResult<Film> {
        self.ensure_genre_exists(film.genre_id).await?;

        let film = self.uow.films().create(film).await?;
        tracing::info!(film_id = %film.id, user_id = %film.user_id, "Film created");
        Ok(film)
    }

    async fn update_by_id(
        &self,
        user_id: Uuid,
        id: Uuid,
        changes: FilmChanges,
    ) -> AppResult<Film> {
        let film = self.find_owned(user_id, id).await?;

        if let Some(genre_id) = changes.genre_id {
            self.ensure_genre_exists(genre_id).await?;
        }
        if changes == FilmChanges::default() {
            return Ok(film);
        }

        self.uow.films().update(id, changes).await
    }

    async fn delete_by_id(&self, user_id: Uuid, id: Uuid) -> AppResult<Uuid> {
        self.find_owned(user_id, id).await?;
        self.uow.films().delete(id).await?;

        tracing::info!(film_id = %id, user_id = %user_id, "Film deleted");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::film::fixtures;
    use crate::domain::Genre;
    use crate::infra::unit_of_work::testing::MockUnitOfWork;
    use mockall::predicate::eq;

    fn genre(id: Uuid) -> Genre {
        Genre {
            id,
            name: "Drama".to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    fn new_film(user_id: Uuid, genre_id: Uuid) -> NewFilm {
        let film = fixtures::film(Uuid::new_v4(), user_id);
        NewFilm {
            title: film.title,
            description: film.description,
            published_at: film.published_at,
            genre_id,
            released: film.released,
            preview_video_link: film.preview_video_link,
            video_link: film.video_link,
            starring: film.starring,
            director: film.director,
            run_time: film.run_time,
            user_id,
            poster_image: film.poster_image,
            background_image: film.background_image,
            background_color: film.background_color,
        }
    }

    #[tokio::test]
    async fn test_find_uses_capped_page() {
        let mut uow = MockUnitOfWork::default();
        uow.films
            .expect_find_page()
            .with(eq(100), eq(100))
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let service = FilmManager::new(uow.build());
        let params = PaginationParams {
            page: 2,
            per_page: 1000,
        };

        assert!(service.find(&params).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let mut uow = MockUnitOfWork::default();
        uow.films.expect_find_by_id().returning(|_| Ok(None));

        let service = FilmManager::new(uow.build());
        let result = service.find_by_id(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound("Film"))));
    }

    #[tokio::test]
    async fn test_find_by_unknown_genre() {
        let mut uow = MockUnitOfWork::default();
        uow.genres.expect_find_by_id().returning(|_| Ok(None));
        uow.films.expect_find_by_genre().never();

        let service = FilmManager::new(uow.build());
        let result = service.find_by_genre_id(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound("Genre"))));
    }

    #[tokio::test]
    async fn test_create_requires_existing_genre() {
        let mut uow = MockUnitOfWork::default();
        uow.genres.expect_find_by_id().returning(|_| Ok(None));
        uow.films.expect_create().never();

        let service = FilmManager::new(uow.build());
        let result = service
            .create(new_film(Uuid::new_v4(), Uuid::new_v4()))
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_create_persists_film() {
        let genre_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let mut uow = MockUnitOfWork::default();
        uow.genres
            .expect_find_by_id()
            .with(eq(genre_id))
            .returning(|id| Ok(Some(genre(id))));
        uow.films.expect_create().times(1).returning(|new| {
            let mut film = fixtures::film(Uuid::new_v4(), new.user_id);
            film.genre_id = new.genre_id;
            Ok(film)
        });

        let service = FilmManager::new(uow.build());
        let film = service.create(new_film(user_id, genre_id)).await.unwrap();

        assert_eq!(film.genre_id, genre_id);
        assert_eq!(film.user_id, user_id);
        assert_eq!(film.rating, 0.0);
        assert_eq!(film.comment_count, 0);
    }

    #[tokio::test]
    async fn test_update_by_non_author_is_forbidden() {
        let film = fixtures::film(Uuid::new_v4(), Uuid::new_v4());
        let id = film.id;
        let mut uow = MockUnitOfWork::default();
        uow.films
            .expect_find_by_id()
            .returning(move |_| Ok(Some(film.clone())));
        uow.films.expect_update().never();

        let service = FilmManager::new(uow.build());
        let changes = FilmChanges {
            title: Some("Other".to_string()),
            ..Default::default()
        };
        let result = service.update_by_id(Uuid::new_v4(), id, changes).await;

        assert!(matches!(result, Err(AppError::Forbidden)));
    }

    #[tokio::test]
    async fn test_update_rejects_unknown_genre() {
        let owner = Uuid::new_v4();
        let film = fixtures::film(Uuid::new_v4(), owner);
        let id = film.id;
        let mut uow = MockUnitOfWork::default();
        uow.films
            .expect_find_by_id()
            .returning(move |_| Ok(Some(film.clone())));
        uow.genres.expect_find_by_id().returning(|_| Ok(None));
        uow.films.expect_update().never();

        let service = FilmManager::new(uow.build());
        let changes = FilmChanges {
            genre_id: Some(Uuid::new_v4()),
            ..Default::default()
        };
        let result = service.update_by_id(owner, id, changes).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_update_by_author() {
        let owner = Uuid::new_v4();
        let film = fixtures::film(Uuid::new_v4(), owner);
        let id = film.id;
        let stored = film.clone();
        let mut uow = MockUnitOfWork::default();
        uow.films
            .expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        uow.films
            .expect_update()
            .with(eq(id), mockall::predicate::always())
            .times(1)
            .returning(move |_, changes| {
                let mut updated = film.clone();
                updated.title = changes.title.unwrap_or_default();
                Ok(updated)
            });

        let service = FilmManager::new(uow.build());
        let changes = FilmChanges {
            title: Some("Past Lives".to_string()),
            ..Default::default()
        };
        let updated = service.update_by_id(owner, id, changes).await.unwrap();

        assert_eq!(updated.title, "Past Lives");
    }

    #[tokio::test]
    async fn test_delete_by_author_returns_id() {
        let owner = Uuid::new_v4();
        let film = fixtures::film(Uuid::new_v4(), owner);
        let id = film.id;
        let mut uow = MockUnitOfWork::default();
        uow.films
            .expect_find_by_id()
            .returning(move |_| Ok(Some(film.clone())));
        uow.films
            .expect_delete()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(()));

        let service = FilmManager::new(uow.build());

        assert_eq!(service.delete_by_id(owner, id).await.unwrap(), id);
    }

    #[tokio::test]
    async fn test_delete_missing_film() {
        let mut uow = MockUnitOfWork::default();
        uow.films.expect_find_by_id().returning(|_| Ok(None));
        uow.films.expect_delete().never();

        let service = FilmManager::new(uow.build());
        let result = service.delete_by_id(Uuid::new_v4(), Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound("Film"))));
    }
}
