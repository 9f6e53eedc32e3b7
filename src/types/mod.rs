//! Shared request and response types.

mod pagination;
mod response;

pub use pagination::PaginationParams;
pub use response::{Created, MessageResponse, NoContent};
