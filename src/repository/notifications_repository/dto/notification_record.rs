use serde::{Deserialize, Serialize};
use strum::AsRefStr;

///
/// Single entry of the persisted notification feed.
///
/// Entries are kept most recent first. `occurred_date` and `occurred_time`
/// are captured on the client when the event arrives, the hub does not
/// transmit a trusted timestamp.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    /// Unix epoch milliseconds at receipt, unique within the feed
    pub id: i64,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub occurred_date: String,
    pub occurred_time: String,
    pub read: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum NotificationKind {
    Emergency,
    ShiftStarted,
    /// Kept for already persisted feeds. Interval events map
    /// to [NotificationKind::ShiftStarted] on arrival.
    ShiftInterval,
    ShiftEnded,
    Feedback,
}
