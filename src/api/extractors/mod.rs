//! Custom request extractors.

mod current_user;
mod params;
mod validated_json;

pub use current_user::CurrentUser;
pub use params::{PathParam, QueryParams};
pub use validated_json::ValidatedJson;
