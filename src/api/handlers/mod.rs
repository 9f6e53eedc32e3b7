//! HTTP request handlers, one router per resource.

pub mod comment_handler;
pub mod favorite_handler;
pub mod film_handler;
pub mod genre_handler;
mod patterns;
pub mod user_handler;

pub use comment_handler::comment_routes;
pub use favorite_handler::favorite_routes;
pub use film_handler::film_routes;
pub use genre_handler::genre_routes;
pub use user_handler::user_routes;
