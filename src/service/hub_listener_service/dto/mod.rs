mod hub_listener_service_config;

pub use hub_listener_service_config::*;
