mod dto;
mod notification_panel;

pub use dto::*;
pub use notification_panel::*;
