use serde::Deserialize;

///
/// Frame shape of the notification hub.
///
/// Every server event arrives as one JSON text frame carrying
/// the event name and a single string payload.
///
#[derive(Debug, Deserialize)]
pub struct HubEvent {
    pub event: String,
    pub payload: String,
}
