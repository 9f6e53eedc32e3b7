//! Genre service - Genre catalog management.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{MAX_GENRE_NAME_LENGTH, MIN_GENRE_NAME_LENGTH};
use crate::domain::Genre;
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait GenreService: Send + Sync {
    /// All genres ordered by name
    async fn list(&self) -> AppResult<Vec<Genre>>;

    /// Create a genre; a duplicate name yields `Conflict`
    async fn create(&self, name: String) -> AppResult<Genre>;
}

pub struct GenreManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> GenreManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> GenreService for GenreManager<U> {
    async fn list(&self) -> AppResult<Vec<Genre>> {
        self.uow.genres().list().await
    }

    async fn create(&self, name: String) -> AppResult<Genre> {
        let name = name.trim();
        let length = name.chars().count();
        if !(MIN_GENRE_NAME_LENGTH..=MAX_GENRE_NAME_LENGTH).contains(&length) {
            return Err(AppError::validation(format!(
                "name must be {} to {} characters",
                MIN_GENRE_NAME_LENGTH, MAX_GENRE_NAME_LENGTH
            )));
        }

        let genre = self.uow.genres().create(name.to_string()).await?;
        tracing::info!(genre_id = %genre.id, name = %genre.name, "Genre created");
        Ok(genre)
    }
}
