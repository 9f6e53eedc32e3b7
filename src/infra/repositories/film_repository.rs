//! Film repository implementation.
//!
//! Deleting a film relies on the `ON DELETE CASCADE` foreign keys of the
//! comments and favorites tables.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::film::{self, ActiveModel, Entity as FilmEntity};
use crate::domain::{Film, FilmChanges, NewFilm};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(test)]
use mockall::automock;

/// Film repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FilmRepository: Send + Sync {
    /// Films ordered newest `published_at` first
    async fn find_page(&self, offset: u64, limit: u64) -> AppResult<Vec<Film>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Film>>;

    /// Films of one genre, newest first
    async fn find_by_genre(&self, genre_id: Uuid) -> AppResult<Vec<Film>>;

    /// Films whose id is in `ids`, newest first
    async fn find_by_ids(&self, ids: Vec<Uuid>) -> AppResult<Vec<Film>>;

    async fn create(&self, film: NewFilm) -> AppResult<Film>;

    async fn update(&self, id: Uuid, changes: FilmChanges) -> AppResult<Film>;

    /// Delete a film and, by cascade, its comments and favorites
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct FilmStore {
    db: DatabaseConnection,
}

impl FilmStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FilmRepository for FilmStore {
    async fn find_page(&self, offset: u64, limit: u64) -> AppResult<Vec<Film>> {
        let models = FilmEntity::find()
            .order_by_desc(film::Column::PublishedAt)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Film::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Film>> {
        let result = FilmEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Film::from))
    }

    async fn find_by_genre(&self, genre_id: Uuid) -> AppResult<Vec<Film>> {
        let models = FilmEntity::find()
            .filter(film::Column::GenreId.eq(genre_id))
            .order_by_desc(film::Column::PublishedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Film::from).collect())
    }

    async fn find_by_ids(&self, ids: Vec<Uuid>) -> AppResult<Vec<Film>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = FilmEntity::find()
            .filter(film::Column::Id.is_in(ids))
            .order_by_desc(film::Column::PublishedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Film::from).collect())
    }

    async fn create(&self, film: NewFilm) -> AppResult<Film> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(film.title),
            description: Set(film.description),
            published_at: Set(film.published_at),
            genre_id: Set(film.genre_id),
            released: Set(film.released),
            rating: Set(0.0),
            preview_video_link: Set(film.preview_video_link),
            video_link: Set(film.video_link),
            starring: Set(film.starring),
            director: Set(film.director),
            run_time: Set(film.run_time),
            comment_count: Set(0),
            user_id: Set(film.user_id),
            poster_image: Set(film.poster_image),
            background_image: Set(film.background_image),
            background_color: Set(film.background_color),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Film::from(model))
    }

    async fn update(&self, id: Uuid, changes: FilmChanges) -> AppResult<Film> {
        let film = FilmEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found("Film")?;

        let mut active: ActiveModel = film.into();

        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(published_at) = changes.published_at {
            active.published_at = Set(published_at);
        }
        if let Some(genre_id) = changes.genre_id {
            active.genre_id = Set(genre_id);
        }
        if let Some(released) = changes.released {
            active.released = Set(released);
        }
        if let Some(link) = changes.preview_video_link {
            active.preview_video_link = Set(link);
        }
        if let Some(link) = changes.video_link {
            active.video_link = Set(link);
        }
        if let Some(starring) = changes.starring {
            active.starring = Set(starring);
        }
        if let Some(director) = changes.director {
            active.director = Set(director);
        }
        if let Some(run_time) = changes.run_time {
            active.run_time = Set(run_time);
        }
        if let Some(image) = changes.poster_image {
            active.poster_image = Set(image);
        }
        if let Some(image) = changes.background_image {
            active.background_image = Set(image);
        }
        if let Some(color) = changes.background_color {
            active.background_color = Set(color);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await?;
        Ok(Film::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = FilmEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Film"));
        }

        Ok(())
    }
}
