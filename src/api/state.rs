//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    AuthService, CommentService, FavoriteService, FilmService, GenreService, ServiceContainer,
    Services, UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub user_service: Arc<dyn UserService>,
    pub film_service: Arc<dyn FilmService>,
    pub genre_service: Arc<dyn GenreService>,
    pub comment_service: Arc<dyn CommentService>,
    pub favorite_service: Arc<dyn FavoriteService>,
    /// Database handle, used by the health check
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a database and config.
    ///
    /// This is the recommended way to create AppState as it wires every
    /// service over the same Unit of Work.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);
        Self::new(&container, database)
    }

    /// Create application state from any service container.
    pub fn new(services: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            auth_service: services.auth(),
            user_service: services.users(),
            film_service: services.films(),
            genre_service: services.genres(),
            comment_service: services.comments(),
            favorite_service: services.favorites(),
            database,
        }
    }
}
