//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod comment;
pub mod favorite;
pub mod film;
pub mod genre;
pub mod user;
