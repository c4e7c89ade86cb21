use crate::repository::NotificationKind;
use serde::Serialize;

///
/// Render ready feed entry produced by a notification panel.
///
/// In dropdown mode `body` holds a shortened preview,
/// full page panels carry the whole body.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItem {
    pub id: i64,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub occurred_date: String,
    pub occurred_time: String,
    pub read: bool,
}
