//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion, and reach repositories through the Unit of Work.

mod auth_service;
mod comment_service;
pub mod container;
mod favorite_service;
mod film_service;
mod genre_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, Claims, Registration, TokenResponse};
pub use comment_service::{CommentManager, CommentService};
pub use favorite_service::{FavoriteManager, FavoriteService};
pub use film_service::{FilmManager, FilmService};
pub use genre_service::{GenreManager, GenreService};
pub use user_service::{UserManager, UserService};

#[cfg(test)]
pub use container::MockServiceContainer;
