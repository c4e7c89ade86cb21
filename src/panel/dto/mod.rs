mod display_mode;
mod kind_filter;

pub use display_mode::*;
pub use kind_filter::*;
