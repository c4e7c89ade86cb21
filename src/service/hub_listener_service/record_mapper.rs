use super::RecordIdSequence;
use crate::repository::{NotificationKind, NotificationRecord};
use time::{format_description::BorrowedFormatItem, macros::format_description, OffsetDateTime};

const EVENT_BUS_SOS: &str = "BusSOS";
const EVENT_FEEDBACK_RECEIVED: &str = "FeedbackReceived";
const EVENT_SHIFT_STARTED: &str = "ShiftStarted";
const EVENT_SHIFT_INTERVAL: &str = "ShiftInterval";
const EVENT_SHIFT_ENDED: &str = "ShiftEnded";

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]:[second]");

///
/// Translates a named hub event into an unread feed record.
///
/// Returns [None] for event names the dashboard does not know.
/// Interval events keep their own title but count as shift start
/// notifications, matching how the feed has always grouped them.
///
pub fn map_event(
    id_sequence: &RecordIdSequence,
    event: &str,
    payload: &str,
) -> Option<NotificationRecord> {
    let (kind, title, body) = match event {
        EVENT_BUS_SOS => (NotificationKind::Emergency, "SOS Alert", payload.to_string()),
        EVENT_FEEDBACK_RECEIVED => (
            NotificationKind::Feedback,
            "Passenger Feedback",
            feedback_excerpt(payload),
        ),
        EVENT_SHIFT_STARTED => (
            NotificationKind::ShiftStarted,
            "Shift Started",
            payload.to_string(),
        ),
        EVENT_SHIFT_INTERVAL => (
            NotificationKind::ShiftStarted,
            "Shift Interval",
            payload.to_string(),
        ),
        EVENT_SHIFT_ENDED => (
            NotificationKind::ShiftEnded,
            "Shift Ended",
            payload.to_string(),
        ),
        _ => return None,
    };

    let (occurred_date, occurred_time) = occurred_stamp();

    Some(NotificationRecord {
        id: id_sequence.next(),
        kind,
        title: title.to_string(),
        body,
        occurred_date,
        occurred_time,
        read: false,
    })
}

/// Feedback payloads look like "New feedback: Great service",
/// only the part after the first colon is worth showing
fn feedback_excerpt(payload: &str) -> String {
    match payload.split_once(':') {
        Some((_, excerpt)) => excerpt.trim().to_string(),
        None => payload.to_string(),
    }
}

/// Date and time of receipt, local clock when the offset is known,
/// UTC otherwise
fn occurred_stamp() -> (String, String) {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let occurred_date = now.format(DATE_FORMAT).unwrap_or_default();
    let occurred_time = now.format(TIME_FORMAT).unwrap_or_default();

    (occurred_date, occurred_time)
}
