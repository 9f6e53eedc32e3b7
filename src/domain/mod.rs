//! Domain layer - Core business entities and logic
//!
//! Entities, value objects and the response DTOs each entity maps to.

pub mod comment;
pub mod film;
pub mod genre;
pub mod password;
pub mod user;

pub use comment::{Comment, CommentResponse, CommentWithAuthor, NewComment};
pub use film::{Film, FilmChanges, FilmDeleteResponse, FilmResponse, NewFilm};
pub use genre::{Genre, GenreResponse};
pub use password::Password;
pub use user::{AuthorResponse, ProfileChanges, User, UserResponse};
