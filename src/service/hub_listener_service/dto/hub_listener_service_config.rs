use std::time::Duration;

pub struct HubListenerServiceConfig {
    pub hub_url: String,
    /// Pause between connection attempts after a failure or a lost session
    pub retry_interval: Duration,
}
