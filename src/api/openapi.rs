//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    comment_handler, favorite_handler, film_handler, genre_handler, user_handler,
};
use crate::domain::{
    AuthorResponse, CommentResponse, FilmDeleteResponse, FilmResponse, GenreResponse,
    UserResponse,
};
use crate::services::TokenResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for the film catalog
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Film Catalog API",
        version = "0.1.0",
        description = "Films, genres, comments, favorites and user accounts of a film rental service",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:4000", description = "Local development server")
    ),
    paths(
        film_handler::index,
        film_handler::create,
        film_handler::update,
        film_handler::delete,
        film_handler::promo,
        film_handler::details,
        film_handler::show_by_genre,
        genre_handler::list,
        genre_handler::create,
        comment_handler::list,
        comment_handler::create,
        user_handler::register,
        user_handler::login,
        user_handler::get_current_user,
        user_handler::update_current_user,
        favorite_handler::list,
        favorite_handler::add,
        favorite_handler::remove,
    ),
    components(
        schemas(
            FilmResponse,
            FilmDeleteResponse,
            GenreResponse,
            CommentResponse,
            AuthorResponse,
            UserResponse,
            TokenResponse,
            MessageResponse,
            film_handler::CreateFilmRequest,
            film_handler::UpdateFilmRequest,
            film_handler::DeleteFilmRequest,
            genre_handler::CreateGenreRequest,
            comment_handler::CreateCommentRequest,
            user_handler::RegisterRequest,
            user_handler::LoginRequest,
            user_handler::UpdateProfileRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Films", description = "Film catalog"),
        (name = "Genres", description = "Film genres"),
        (name = "Comments", description = "Film reviews and ratings"),
        (name = "Users", description = "Registration, login and profile"),
        (name = "Favorites", description = "Per-user favorite films")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /users/login"))
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_routes() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/films"));
        assert!(doc.paths.paths.contains_key("/films/{film_id}/comments"));
        assert!(doc.paths.paths.contains_key("/genres/{genre_id}/films"));
        assert!(doc.paths.paths.contains_key("/users/me"));
        assert!(doc
            .components
            .as_ref()
            .map(|c| c.security_schemes.contains_key("bearer_auth"))
            .unwrap_or(false));
    }
}
