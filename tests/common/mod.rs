//! Shared fixtures for the HTTP integration tests.
//!
//! The router is driven against in-memory service fakes and a disconnected
//! database, so no PostgreSQL instance is needed.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use film_catalog::api::{create_router, AppState};
use film_catalog::domain::{
    Comment, CommentWithAuthor, Film, FilmChanges, Genre, NewComment, NewFilm, ProfileChanges,
    User,
};
use film_catalog::errors::{AppError, AppResult};
use film_catalog::infra::Database;
use film_catalog::services::{
    AuthService, Claims, CommentService, FavoriteService, FilmService, GenreService,
    Registration, Services, TokenResponse, UserService,
};
use film_catalog::types::PaginationParams;

/// Token accepted for the author of `FILM_ID`
pub const AUTHOR_TOKEN: &str = "author-token";
/// Token accepted for a user who authored nothing
pub const READER_TOKEN: &str = "reader-token";

pub const TAKEN_EMAIL: &str = "taken@example.com";
pub const VALID_PASSWORD: &str = "qwerty1";

pub fn author_id() -> Uuid {
    Uuid::from_u128(1)
}

pub fn reader_id() -> Uuid {
    Uuid::from_u128(2)
}

pub fn genre_id() -> Uuid {
    Uuid::from_u128(10)
}

pub fn film_id() -> Uuid {
    Uuid::from_u128(100)
}

pub fn user(id: Uuid) -> User {
    let mut user = User::new(format!("{}@example.com", id.simple()), "Keks".to_string(), None);
    user.id = id;
    user
}

pub fn film() -> Film {
    let now = Utc::now();
    Film {
        id: film_id(),
        title: "Aftersun".to_string(),
        description: "A father and daughter on holiday in Turkey.".to_string(),
        published_at: now,
        genre_id: genre_id(),
        released: 2022,
        rating: 8.7,
        preview_video_link: "https://example.com/preview.mp4".to_string(),
        video_link: "https://example.com/film.mp4".to_string(),
        starring: vec!["Paul Mescal".to_string()],
        director: "Charlotte Wells".to_string(),
        run_time: 101,
        comment_count: 3,
        user_id: author_id(),
        poster_image: "aftersun.jpg".to_string(),
        background_image: "aftersun-bg.jpg".to_string(),
        background_color: "#A6B4C2".to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub fn film_body() -> Value {
    serde_json::json!({
        "title": "Past Lives",
        "description": "Two childhood friends reunite decades later in New York.",
        "genre_id": genre_id(),
        "released": 2023,
        "preview_video_link": "https://example.com/past-lives-preview.mp4",
        "video_link": "https://example.com/past-lives.mp4",
        "starring": ["Greta Lee", "Teo Yoo"],
        "director": "Celine Song",
        "run_time": 106,
        "poster_image": "past-lives.jpg",
        "background_image": "past-lives-bg.png",
        "background_color": "#1F2A44"
    })
}

struct FakeAuth;

#[async_trait]
impl AuthService for FakeAuth {
    async fn register(&self, registration: Registration) -> AppResult<User> {
        if registration.email == TAKEN_EMAIL {
            return Err(AppError::conflict("User"));
        }
        Ok(User::new(
            registration.email,
            registration.name,
            registration.avatar_path,
        ))
    }

    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse> {
        if email != TAKEN_EMAIL || password != VALID_PASSWORD {
            return Err(AppError::InvalidCredentials);
        }
        Ok(TokenResponse {
            access_token: AUTHOR_TOKEN.to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 86400,
        })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let sub = match token {
            AUTHOR_TOKEN => author_id(),
            READER_TOKEN => reader_id(),
            _ => return Err(AppError::Unauthorized),
        };
        Ok(Claims {
            sub,
            email: format!("{}@example.com", sub.simple()),
            exp: Utc::now().timestamp() + 3600,
            iat: Utc::now().timestamp(),
        })
    }
}

struct FakeUsers;

#[async_trait]
impl UserService for FakeUsers {
    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        Ok(user(id))
    }

    async fn update_profile(&self, id: Uuid, changes: ProfileChanges) -> AppResult<User> {
        let mut user = user(id);
        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(avatar_path) = changes.avatar_path {
            user.avatar_path = avatar_path;
        }
        Ok(user)
    }
}

struct FakeFilms;

impl FakeFilms {
    fn owned(&self, user_id: Uuid, id: Uuid) -> AppResult<Film> {
        let film = self.lookup(id)?;
        if film.user_id != user_id {
            return Err(AppError::Forbidden);
        }
        Ok(film)
    }

    fn lookup(&self, id: Uuid) -> AppResult<Film> {
        if id == film_id() {
            Ok(film())
        } else {
            Err(AppError::NotFound("Film"))
        }
    }
}

#[async_trait]
impl FilmService for FakeFilms {
    async fn find(&self, params: &PaginationParams) -> AppResult<Vec<Film>> {
        Ok(vec![film()]
            .into_iter()
            .skip(params.offset() as usize)
            .take(params.limit() as usize)
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Film> {
        self.lookup(id)
    }

    async fn find_by_genre_id(&self, id: Uuid) -> AppResult<Vec<Film>> {
        if id != genre_id() {
            return Err(AppError::NotFound("Genre"));
        }
        Ok(vec![film()])
    }

    async fn create(&self, new: NewFilm) -> AppResult<Film> {
        if new.genre_id != genre_id() {
            return Err(AppError::bad_request("unknown genre"));
        }
        Ok(Film {
            id: Uuid::new_v4(),
            title: new.title,
            user_id: new.user_id,
            genre_id: new.genre_id,
            rating: 0.0,
            comment_count: 0,
            ..film()
        })
    }

    async fn update_by_id(
        &self,
        user_id: Uuid,
        id: Uuid,
        changes: FilmChanges,
    ) -> AppResult<Film> {
        let mut film = self.owned(user_id, id)?;
        if let Some(title) = changes.title {
            film.title = title;
        }
        Ok(film)
    }

    async fn delete_by_id(&self, user_id: Uuid, id: Uuid) -> AppResult<Uuid> {
        self.owned(user_id, id).map(|film| film.id)
    }
}

struct FakeGenres;

#[async_trait]
impl GenreService for FakeGenres {
    async fn list(&self) -> AppResult<Vec<Genre>> {
        Ok(vec![Genre {
            id: genre_id(),
            name: "Drama".to_string(),
            created_at: Utc::now(),
        }])
    }

    async fn create(&self, name: String) -> AppResult<Genre> {
        if name == "Drama" {
            return Err(AppError::conflict("Genre"));
        }
        Ok(Genre {
            id: Uuid::new_v4(),
            name,
            created_at: Utc::now(),
        })
    }
}

struct FakeComments;

#[async_trait]
impl CommentService for FakeComments {
    async fn list_for_film(&self, id: Uuid) -> AppResult<Vec<CommentWithAuthor>> {
        if id != film_id() {
            return Err(AppError::NotFound("Film"));
        }
        Ok(vec![CommentWithAuthor {
            comment: Comment {
                id: Uuid::new_v4(),
                text: "Quietly devastating.".to_string(),
                rating: 9,
                film_id: id,
                user_id: reader_id(),
                created_at: Utc::now(),
            },
            author: Some(user(reader_id())),
        }])
    }

    async fn create(&self, new: NewComment) -> AppResult<CommentWithAuthor> {
        if new.film_id != film_id() {
            return Err(AppError::NotFound("Film"));
        }
        Ok(CommentWithAuthor {
            comment: Comment {
                id: Uuid::new_v4(),
                text: new.text,
                rating: new.rating,
                film_id: new.film_id,
                user_id: new.user_id,
                created_at: Utc::now(),
            },
            author: Some(user(new.user_id)),
        })
    }
}

struct FakeFavorites;

#[async_trait]
impl FavoriteService for FakeFavorites {
    async fn list(&self, _user_id: Uuid) -> AppResult<Vec<Film>> {
        Ok(vec![film()])
    }

    async fn add(&self, _user_id: Uuid, id: Uuid) -> AppResult<Film> {
        if id != film_id() {
            return Err(AppError::NotFound("Film"));
        }
        Ok(film())
    }

    async fn remove(&self, _user_id: Uuid, _id: Uuid) -> AppResult<()> {
        Ok(())
    }
}

/// Router wired to the fakes; the database is never reachable.
pub fn app() -> Router {
    let services = Services {
        auth: Arc::new(FakeAuth),
        users: Arc::new(FakeUsers),
        films: Arc::new(FakeFilms),
        genres: Arc::new(FakeGenres),
        comments: Arc::new(FakeComments),
        favorites: Arc::new(FakeFavorites),
    };
    let database = Arc::new(Database::from_connection(DatabaseConnection::Disconnected));

    create_router(AppState::new(&services, database))
}

/// Send a request and decode the JSON body (`Null` when empty).
pub async fn send(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
