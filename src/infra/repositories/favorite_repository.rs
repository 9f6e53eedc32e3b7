//! Favorite films repository implementation.

use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

use super::entities::favorite::{self, ActiveModel, Entity as FavoriteEntity};
use crate::errors::AppResult;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Ids of the user's favorite films, most recently added first
    async fn film_ids(&self, user_id: Uuid) -> AppResult<Vec<Uuid>>;

    /// Mark a film as favorite; adding twice is a no-op
    async fn add(&self, user_id: Uuid, film_id: Uuid) -> AppResult<()>;

    /// Returns whether anything was removed
    async fn remove(&self, user_id: Uuid, film_id: Uuid) -> AppResult<bool>;
}

pub struct FavoriteStore {
    db: DatabaseConnection,
}

impl FavoriteStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FavoriteRepository for FavoriteStore {
    async fn film_ids(&self, user_id: Uuid) -> AppResult<Vec<Uuid>> {
        let models = FavoriteEntity::find()
            .filter(favorite::Column::UserId.eq(user_id))
            .order_by_desc(favorite::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.film_id).collect())
    }

    async fn add(&self, user_id: Uuid, film_id: Uuid) -> AppResult<()> {
        let active_model = ActiveModel {
            user_id: Set(user_id),
            film_id: Set(film_id),
            created_at: Set(chrono::Utc::now()),
        };

        let inserted = FavoriteEntity::insert(active_model)
            .on_conflict(
                OnConflict::columns([favorite::Column::UserId, favorite::Column::FilmId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        if inserted == 0 {
            tracing::debug!(user_id = %user_id, film_id = %film_id, "Film already a favorite");
        }
        Ok(())
    }

    async fn remove(&self, user_id: Uuid, film_id: Uuid) -> AppResult<bool> {
        let result = FavoriteEntity::delete_by_id((user_id, film_id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn exec_result(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn test_add_twice_succeeds_without_duplicating() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec_result(1), exec_result(0)])
            .into_connection();
        let store = FavoriteStore::new(db.clone());
        let (user_id, film_id) = (Uuid::new_v4(), Uuid::new_v4());

        tokio_test::assert_ok!(store.add(user_id, film_id).await);
        tokio_test::assert_ok!(store.add(user_id, film_id).await);

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 2);
        for entry in &log {
            let sql = &entry.statements()[0].sql;
            assert!(sql.starts_with(r#"INSERT INTO "favorites""#));
            assert!(sql.contains(r#"ON CONFLICT ("user_id", "film_id") DO NOTHING"#));
        }
    }

    #[tokio::test]
    async fn test_add_propagates_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([sea_orm::DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let store = FavoriteStore::new(db);

        let result = store.add(Uuid::new_v4(), Uuid::new_v4()).await;
        assert!(matches!(result, Err(crate::errors::AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_remove_reports_whether_a_row_went_away() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec_result(1), exec_result(0)])
            .into_connection();
        let store = FavoriteStore::new(db);
        let (user_id, film_id) = (Uuid::new_v4(), Uuid::new_v4());

        assert!(store.remove(user_id, film_id).await.unwrap());
        assert!(!store.remove(user_id, film_id).await.unwrap());
    }
}
