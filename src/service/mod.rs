pub mod fanout_service;
pub mod hub_listener_service;
pub mod notifications_feed_service;
