//! Favorite service - Per-user list of favorite films.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::Film;
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait FavoriteService: Send + Sync {
    /// Favorite films, most recently added first
    async fn list(&self, user_id: Uuid) -> AppResult<Vec<Film>>;

    /// Add a film to favorites and return it; repeating is harmless
    async fn add(&self, user_id: Uuid, film_id: Uuid) -> AppResult<Film>;

    /// Remove a film from favorites; removing an absent film is a no-op
    async fn remove(&self, user_id: Uuid, film_id: Uuid) -> AppResult<()>;
}

pub struct FavoriteManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> FavoriteManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> FavoriteService for FavoriteManager<U> {
    async fn list(&self, user_id: Uuid) -> AppResult<Vec<Film>> {
        let ids = self.uow.favorites().film_ids(user_id).await?;
        let mut films = self.uow.films().find_by_ids(ids.clone()).await?;
        films.sort_by_key(|film| ids.iter().position(|id| *id == film.id));
        Ok(films)
    }

    async fn add(&self, user_id: Uuid, film_id: Uuid) -> AppResult<Film> {
        let film = self
            .uow
            .films()
            .find_by_id(film_id)
            .await?
            .ok_or_not_found("Film")?;

        self.uow.favorites().add(user_id, film_id).await?;
        Ok(film)
    }

    async fn remove(&self, user_id: Uuid, film_id: Uuid) -> AppResult<()> {
        if !self.uow.favorites().remove(user_id, film_id).await? {
            tracing::debug!(user_id = %user_id, film_id = %film_id, "Film was not a favorite");
        }
        Ok(())
    }
}
