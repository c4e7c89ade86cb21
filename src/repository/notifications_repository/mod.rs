mod dto;
mod notifications_repository;
mod notifications_repository_impl;

pub use dto::{NotificationKind, NotificationRecord};
pub use notifications_repository::*;
pub use notifications_repository_impl::*;
