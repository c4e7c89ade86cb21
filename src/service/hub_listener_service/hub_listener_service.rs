use super::{record_mapper, HubListenerServiceConfig, RecordIdSequence};
use crate::{
    dto::input,
    service::{
        fanout_service::FanoutService, notifications_feed_service::NotificationsFeedService,
    },
};
use anyhow::anyhow;
use futures::StreamExt;
use std::sync::Arc;
use tokio::{net::TcpStream, sync::Notify, task::JoinHandle};
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};

///
/// Owner of the single connection to the notification hub.
///
/// The connection lives in a background task started by [Self::new].
/// Whenever connecting fails or an established session is lost the task
/// retries after the configured interval, forever. Events emitted by the
/// hub while no session is up are lost, there is no replay.
///
pub struct HubListenerService {
    listen_handle: JoinHandle<()>,
    close_notify: Arc<Notify>,
}

impl HubListenerService {
    pub fn new(
        config: HubListenerServiceConfig,
        id_sequence: Arc<RecordIdSequence>,
        feed_service: Arc<dyn NotificationsFeedService>,
        fanout_service: Arc<dyn FanoutService>,
    ) -> Self {
        let close_notify = Arc::new(Notify::new());
        let listener = Listener {
            config,
            id_sequence,
            feed_service,
            fanout_service,
        };
        let listen_handle = tokio::spawn(listen(Arc::clone(&close_notify), listener));

        Self {
            listen_handle,
            close_notify,
        }
    }

    pub async fn close(self) {
        self.close_notify.notify_one();
        self.listen_handle.await.unwrap(); // task can't be aborted and will never panic
    }
}

#[tracing::instrument(name = "Hub Listener", skip_all)]
async fn listen(close_notify: Arc<Notify>, listener: Listener) {
    tracing::info!("hub listener started");

    tokio::select! {
        biased;

        // Wait for signal to close
        _ = close_notify.notified() => {}

        // Keep one hub session alive, reconnecting after failures
        _ = listener.run() => {}
    }

    tracing::info!("hub listener finished");
}

struct Listener {
    config: HubListenerServiceConfig,
    id_sequence: Arc<RecordIdSequence>,
    feed_service: Arc<dyn NotificationsFeedService>,
    fanout_service: Arc<dyn FanoutService>,
}

impl Listener {
    async fn run(self) {
        let mut attempt = 0;

        loop {
            attempt += 1;
            tracing::info!(attempt, url = %self.config.hub_url, "connecting to hub");

            match connect_async(self.config.hub_url.as_str()).await {
                Ok((ws, _)) => {
                    attempt = 0;
                    tracing::info!("connected to hub");
                    self.consume_session(ws).await;
                    tracing::warn!("hub session ended");
                }
                Err(err) => {
                    tracing::warn!(attempt, %err, "connecting to hub failed");
                }
            }

            tokio::time::sleep(self.config.retry_interval).await;
        }
    }

    async fn consume_session(&self, mut ws: WebSocketStream<MaybeTlsStream<TcpStream>>) {
        while let Some(message) = ws.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    if let Err(err) = self.try_consume(&text).await {
                        tracing::debug!(%err, "skipping hub message");
                    }
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("hub closed session");
                    return;
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(%err, "hub session error");
                    return;
                }
            }
        }
    }

    ///
    /// Turns one hub frame into a feed record, stores it and fans it out.
    ///
    /// The feed keeps flowing when persisting fails, subscribers still
    /// receive the record and the next successful mutation rewrites
    /// the stored feed.
    ///
    async fn try_consume(&self, text: &str) -> anyhow::Result<()> {
        let event = serde_json::from_str::<input::HubEvent>(text)
            .map_err(|err| anyhow!("invalid hub event: {err}"))?;

        let Some(record) = record_mapper::map_event(&self.id_sequence, &event.event, &event.payload)
        else {
            anyhow::bail!("unknown hub event: {}", event.event);
        };

        tracing::info!(
            id = record.id,
            kind = record.kind.as_ref(),
            "received notification"
        );

        let record = Arc::new(record);
        if let Err(err) = self.feed_service.append((*record).clone()).await {
            tracing::warn!(%err, "failed to persist notification");
        }
        self.fanout_service.publish(record).await;

        Ok(())
    }
}
