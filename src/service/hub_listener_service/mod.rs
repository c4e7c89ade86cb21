mod dto;
mod hub_listener_service;
mod record_id_sequence;
mod record_mapper;

pub use dto::HubListenerServiceConfig;
pub use hub_listener_service::*;
pub use record_id_sequence::*;
