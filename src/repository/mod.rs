mod error;
mod notifications_repository;

pub use error::*;
pub use notifications_repository::*;
