//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// Validated JSON extractor that automatically validates requests.
///
/// # Example
///
/// ```rust,ignore
/// use serde::Deserialize;
/// use validator::Validate;
/// use film_catalog::api::extractors::ValidatedJson;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateGenreRequest {
///     #[validate(length(min = 3, max = 50))]
///     name: String,
/// }
///
/// async fn create_genre(ValidatedJson(payload): ValidatedJson<CreateGenreRequest>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Format validation errors into a user-friendly string, sorted by field
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::header::CONTENT_TYPE};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 3, message = "name is too short"))]
        name: String,
        #[validate(range(min = 1, max = 10))]
        rating: i16,
    }

    fn request(body: &'static str) -> Request {
        Request::builder()
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_accepts_valid_body() {
        let ValidatedJson(payload) =
            ValidatedJson::<Payload>::from_request(request(r#"{"name":"Keks","rating":5}"#), &())
                .await
                .unwrap();

        assert_eq!(payload.name, "Keks");
        assert_eq!(payload.rating, 5);
    }

    #[tokio::test]
    async fn test_reports_every_invalid_field() {
        let result =
            ValidatedJson::<Payload>::from_request(request(r#"{"name":"K","rating":11}"#), &())
                .await;

        match result {
            Err(AppError::Validation(message)) => {
                assert_eq!(message, "name is too short, rating is invalid");
            }
            _ => panic!("expected validation error"),
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_validation_error() {
        let result = ValidatedJson::<Payload>::from_request(request("{"), &()).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
