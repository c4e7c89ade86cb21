use anyhow::anyhow;
use std::{path::PathBuf, time::Duration};

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub hub_url: String,
    pub hub_retry_interval: Duration,

    pub feed_path: PathBuf,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("TRANSIT_NOTIFIER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("TRANSIT_NOTIFIER_LOG_FILENAME")?;
        let hub_url = Self::env_var("TRANSIT_NOTIFIER_HUB_URL")?;
        let hub_retry_interval = Self::env_var("TRANSIT_NOTIFIER_HUB_RETRY_INTERVAL")?.parse()?;
        let hub_retry_interval = Duration::from_secs(hub_retry_interval);
        let feed_path = Self::env_var("TRANSIT_NOTIFIER_FEED_PATH")?.into();

        Ok(Self {
            log_directory,
            log_filename,
            hub_url,
            hub_retry_interval,
            feed_path,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
