//! Immutable, self-validating domain primitives.
//!
//! Every constructor validates its input and returns
//! [`AppError::Validation`](crate::error::AppError::Validation) on failure,
//! so a value that exists is always well-formed.

pub mod category;
pub mod email;
pub mod location;
pub mod price;
pub mod search_query;

pub use category::Category;
pub use email::Email;
pub use location::Location;
pub use price::{Currency, Price};
pub use search_query::{SearchParams, SearchQuery};
