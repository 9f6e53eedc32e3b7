//! Unit of Work pattern implementation.
//!
//! Centralizes access to every repository so services depend on a single
//! handle, and provides the transaction helper used by writes that touch
//! more than one table.

use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait,
};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::repositories::{
    CommentRepository, CommentStore, FavoriteRepository, FavoriteStore, FilmRepository, FilmStore,
    GenreRepository, GenreStore, UserRepository, UserStore,
};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    fn users(&self) -> Arc<dyn UserRepository>;

    fn genres(&self) -> Arc<dyn GenreRepository>;

    fn films(&self) -> Arc<dyn FilmRepository>;

    fn comments(&self) -> Arc<dyn CommentRepository>;

    fn favorites(&self) -> Arc<dyn FavoriteRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    user_repo: Arc<UserStore>,
    genre_repo: Arc<GenreStore>,
    film_repo: Arc<FilmStore>,
    comment_repo: Arc<CommentStore>,
    favorite_repo: Arc<FavoriteStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            genre_repo: Arc::new(GenreStore::new(db.clone())),
            film_repo: Arc::new(FilmStore::new(db.clone())),
            comment_repo: Arc::new(CommentStore::new(db.clone())),
            favorite_repo: Arc::new(FavoriteStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn genres(&self) -> Arc<dyn GenreRepository> {
        self.genre_repo.clone()
    }

    fn films(&self) -> Arc<dyn FilmRepository> {
        self.film_repo.clone()
    }

    fn comments(&self) -> Arc<dyn CommentRepository> {
        self.comment_repo.clone()
    }

    fn favorites(&self) -> Arc<dyn FavoriteRepository> {
        self.favorite_repo.clone()
    }
}

/// Execute a closure within a ReadCommitted transaction.
///
/// The transaction is committed when the closure succeeds and rolled back
/// when it returns an error.
pub async fn in_transaction<F, T>(db: &DatabaseConnection, f: F) -> AppResult<T>
where
    F: for<'a> FnOnce(
            &'a DatabaseTransaction,
        ) -> Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>
        + Send,
    T: Send,
{
    let txn = db
        .begin_with_config(
            Some(IsolationLevel::ReadCommitted),
            Some(AccessMode::ReadWrite),
        )
        .await
        .map_err(AppError::from)?;

    let outcome = f(&txn).await;

    match outcome {
        Ok(result) => {
            txn.commit().await.map_err(AppError::from)?;
            Ok(result)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Transaction rollback failed: {}", rollback_err);
            }
            Err(e)
        }
    }
}

/// Unit of work backed by mockall repositories, for service unit tests.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::infra::repositories::{
        MockCommentRepository, MockFavoriteRepository, MockFilmRepository, MockGenreRepository,
        MockUserRepository,
    };

    #[derive(Default)]
    pub struct MockUnitOfWork {
        pub users: MockUserRepository,
        pub genres: MockGenreRepository,
        pub films: MockFilmRepository,
        pub comments: MockCommentRepository,
        pub favorites: MockFavoriteRepository,
    }

    impl MockUnitOfWork {
        /// Freeze the configured expectations into a shareable unit of work.
        pub fn build(self) -> Arc<TestUnitOfWork> {
            Arc::new(TestUnitOfWork {
                users: Arc::new(self.users),
                genres: Arc::new(self.genres),
                films: Arc::new(self.films),
                comments: Arc::new(self.comments),
                favorites: Arc::new(self.favorites),
            })
        }
    }

    pub struct TestUnitOfWork {
        users: Arc<MockUserRepository>,
        genres: Arc<MockGenreRepository>,
        films: Arc<MockFilmRepository>,
        comments: Arc<MockCommentRepository>,
        favorites: Arc<MockFavoriteRepository>,
    }

    impl UnitOfWork for TestUnitOfWork {
        fn users(&self) -> Arc<dyn UserRepository> {
            self.users.clone()
        }

        fn genres(&self) -> Arc<dyn GenreRepository> {
            self.genres.clone()
        }

        fn films(&self) -> Arc<dyn FilmRepository> {
            self.films.clone()
        }

        fn comments(&self) -> Arc<dyn CommentRepository> {
            self.comments.clone()
        }

        fn favorites(&self) -> Arc<dyn FavoriteRepository> {
            self.favorites.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_transaction_fails_without_connection() {
        let db = DatabaseConnection::Disconnected;
        let result = in_transaction(&db, |_txn| Box::pin(async { Ok(1) })).await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
