//! Genre repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use super::entities::genre::{self, ActiveModel, Entity as GenreEntity};
use crate::domain::Genre;
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// List all genres ordered by name
    async fn list(&self) -> AppResult<Vec<Genre>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Genre>>;

    /// Persist a new genre; a duplicate name yields `Conflict`
    async fn create(&self, name: String) -> AppResult<Genre>;
}

pub struct GenreStore {
    db: DatabaseConnection,
}

impl GenreStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GenreRepository for GenreStore {
    async fn list(&self) -> AppResult<Vec<Genre>> {
        let models = GenreEntity::find()
            .order_by_asc(genre::Column::Name)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Genre::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Genre>> {
        let result = GenreEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Genre::from))
    }

    async fn create(&self, name: String) -> AppResult<Genre> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_write("Genre", e))?;

        Ok(Genre::from(model))
    }
}
