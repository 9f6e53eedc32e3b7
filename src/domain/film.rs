//! Film domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Film domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub published_at: DateTime<Utc>,
    pub genre_id: Uuid,
    /// Release year
    pub released: i32,
    /// Average comment rating, one decimal place
    pub rating: f64,
    pub preview_video_link: String,
    pub video_link: String,
    pub starring: Vec<String>,
    pub director: String,
    /// Running time in minutes
    pub run_time: i32,
    pub comment_count: i32,
    /// Author who published the film
    pub user_id: Uuid,
    pub poster_image: String,
    pub background_image: String,
    pub background_color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Film {
    /// Fold a new comment rating into the running average.
    pub fn record_rating(&mut self, rating: i16) {
        let total = self.rating * f64::from(self.comment_count) + f64::from(rating);
        self.comment_count += 1;
        self.rating = round_rating(total / f64::from(self.comment_count));
        self.updated_at = Utc::now();
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

fn round_rating(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Film creation data
#[derive(Debug, Clone, PartialEq)]
pub struct NewFilm {
    pub title: String,
    pub description: String,
    pub published_at: DateTime<Utc>,
    pub genre_id: Uuid,
    pub released: i32,
    pub preview_video_link: String,
    pub video_link: String,
    pub starring: Vec<String>,
    pub director: String,
    pub run_time: i32,
    pub user_id: Uuid,
    pub poster_image: String,
    pub background_image: String,
    pub background_color: String,
}

/// Partial film update; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilmChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub genre_id: Option<Uuid>,
    pub released: Option<i32>,
    pub preview_video_link: Option<String>,
    pub video_link: Option<String>,
    pub starring: Option<Vec<String>>,
    pub director: Option<String>,
    pub run_time: Option<i32>,
    pub poster_image: Option<String>,
    pub background_image: Option<String>,
    pub background_color: Option<String>,
}

/// Film response (mapped from the entity)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FilmResponse {
    pub id: Uuid,
    #[schema(example = "The Grand Budapest Hotel")]
    pub title: String,
    pub description: String,
    pub published_at: DateTime<Utc>,
    pub genre_id: Uuid,
    #[schema(example = 2014)]
    pub released: i32,
    #[schema(example = 8.9)]
    pub rating: f64,
    pub preview_video_link: String,
    pub video_link: String,
    pub starring: Vec<String>,
    #[schema(example = "Wes Anderson")]
    pub director: String,
    #[schema(example = 99)]
    pub run_time: i32,
    pub comment_count: i32,
    pub user_id: Uuid,
    pub poster_image: String,
    pub background_image: String,
    #[schema(example = "#ffffff")]
    pub background_color: String,
}

impl From<Film> for FilmResponse {
    fn from(film: Film) -> Self {
        Self {
            id: film.id,
            title: film.title,
            description: film.description,
            published_at: film.published_at,
            genre_id: film.genre_id,
            released: film.released,
            rating: film.rating,
            preview_video_link: film.preview_video_link,
            video_link: film.video_link,
            starring: film.starring,
            director: film.director,
            run_time: film.run_time,
            comment_count: film.comment_count,
            user_id: film.user_id,
            poster_image: film.poster_image,
            background_image: film.background_image,
            background_color: film.background_color,
        }
    }
}

/// Response for a deleted film
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FilmDeleteResponse {
    pub id: Uuid,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_rating_sets_average() {
        let mut film = fixtures::film(Uuid::new_v4(), Uuid::new_v4());
        film.record_rating(7);

        assert_eq!(film.comment_count, 1);
        assert_eq!(film.rating, 7.0);
    }

    #[test]
    fn test_running_average_rounds_to_one_decimal() {
        let mut film = fixtures::film(Uuid::new_v4(), Uuid::new_v4());
        film.record_rating(10);
        film.record_rating(8);
        film.record_rating(8);

        assert_eq!(film.comment_count, 3);
        assert_eq!(film.rating, 8.7);
    }

    #[test]
    fn test_ownership() {
        let owner = Uuid::new_v4();
        let film = fixtures::film(Uuid::new_v4(), owner);

        assert!(film.is_owned_by(owner));
        assert!(!film.is_owned_by(Uuid::new_v4()));
    }

    #[test]
    fn test_response_mapping_keeps_fields() {
        let film = fixtures::film(Uuid::new_v4(), Uuid::new_v4());
        let response = FilmResponse::from(film.clone());

        assert_eq!(response.id, film.id);
        assert_eq!(response.starring, film.starring);
        assert_eq!(response.background_color, film.background_color);
    }
}
