//! Service Container - Centralized service access.
//!
//! Builds every service over one shared Unit of Work and hands them out as
//! trait objects, so the HTTP layer never sees concrete implementations.

use std::sync::Arc;

use super::{AuthService, CommentService, FavoriteService, FilmService, GenreService, UserService};
use crate::config::Config;
use crate::infra::Persistence;

#[cfg(test)]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(test, automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn users(&self) -> Arc<dyn UserService>;

    fn films(&self) -> Arc<dyn FilmService>;

    fn genres(&self) -> Arc<dyn GenreService>;

    fn comments(&self) -> Arc<dyn CommentService>;

    fn favorites(&self) -> Arc<dyn FavoriteService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<dyn AuthService>,
    pub users: Arc<dyn UserService>,
    pub films: Arc<dyn FilmService>,
    pub genres: Arc<dyn GenreService>,
    pub comments: Arc<dyn CommentService>,
    pub favorites: Arc<dyn FavoriteService>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        use super::{
            Authenticator, CommentManager, FavoriteManager, FilmManager, GenreManager, UserManager,
        };

        let uow = Arc::new(Persistence::new(db));

        Self {
            auth: Arc::new(Authenticator::new(uow.clone(), config)),
            users: Arc::new(UserManager::new(uow.clone())),
            films: Arc::new(FilmManager::new(uow.clone())),
            genres: Arc::new(GenreManager::new(uow.clone())),
            comments: Arc::new(CommentManager::new(uow.clone())),
            favorites: Arc::new(FavoriteManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.users.clone()
    }

    fn films(&self) -> Arc<dyn FilmService> {
        self.films.clone()
    }

    fn genres(&self) -> Arc<dyn GenreService> {
        self.genres.clone()
    }

    fn comments(&self) -> Arc<dyn CommentService> {
        self.comments.clone()
    }

    fn favorites(&self) -> Arc<dyn FavoriteService> {
        self.favorites.clone()
    }
}
