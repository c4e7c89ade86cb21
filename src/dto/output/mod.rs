mod feed_item;

pub use feed_item::*;
