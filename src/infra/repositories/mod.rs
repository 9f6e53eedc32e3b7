//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod comment_repository;
pub(crate) mod entities;
mod favorite_repository;
mod film_repository;
mod genre_repository;
mod user_repository;

pub use comment_repository::{CommentRepository, CommentStore};
pub use favorite_repository::{FavoriteRepository, FavoriteStore};
pub use film_repository::{FilmRepository, FilmStore};
pub use genre_repository::{GenreRepository, GenreStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for unit tests
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
#[cfg(test)]
pub use favorite_repository::MockFavoriteRepository;
#[cfg(test)]
pub use film_repository::MockFilmRepository;
#[cfg(test)]
pub use genre_repository::MockGenreRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
