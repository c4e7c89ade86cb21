mod subscription_id;

pub use subscription_id::*;
