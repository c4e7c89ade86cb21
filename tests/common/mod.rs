use futures::SinkExt;
use std::{net::SocketAddr, path::Path, sync::Arc, time::Duration};
use tokio::{
    net::{TcpListener, TcpStream},
    sync::mpsc::{self, UnboundedReceiver},
};
use tokio_tungstenite::{accept_async, tungstenite::Message, WebSocketStream};
use transit_notifier::{
    application::ApplicationEnv, repository::NotificationRecord,
    service::fanout_service::SubscriberCallback,
};

///
/// Stand-in for the operations hub, one WebSocket endpoint
/// emitting the `{"event", "payload"}` frames a real hub would
///
pub struct TestHub {
    listener: TcpListener,
}

impl TestHub {
    pub async fn bind() -> Self {
        Self {
            listener: TcpListener::bind("127.0.0.1:0").await.unwrap(),
        }
    }

    /// Rebinds a previously used address to simulate hub recovery
    pub async fn bind_to(addr: SocketAddr) -> Self {
        Self {
            listener: TcpListener::bind(addr).await.unwrap(),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.listener.local_addr().unwrap()
    }

    pub fn url(&self) -> String {
        format!("ws://{}", self.addr())
    }

    pub async fn accept(&self) -> TestHubSession {
        let (stream, _) = self.listener.accept().await.unwrap();
        let ws = accept_async(stream).await.unwrap();
        TestHubSession { ws }
    }
}

pub struct TestHubSession {
    ws: WebSocketStream<TcpStream>,
}

impl TestHubSession {
    pub async fn emit(&mut self, event: &str, payload: &str) {
        let text = serde_json::json!({ "event": event, "payload": payload }).to_string();
        self.ws.send(Message::Text(text)).await.unwrap();
    }

    pub async fn close(mut self) {
        self.ws.close(None).await.unwrap();
    }
}

///
/// Creates environment pointing at given hub, feed slot kept inside `feed_dir`
///
pub fn create_test_env(hub_url: String, feed_dir: &Path) -> ApplicationEnv {
    ApplicationEnv {
        log_directory: feed_dir.join("logs").to_string_lossy().into_owned(),
        log_filename: "transit_notifier.log".to_string(),
        hub_url,
        hub_retry_interval: Duration::from_millis(100),
        feed_path: feed_dir.join("feed.json"),
    }
}

///
/// Creates subscriber forwarding every delivered record to the returned channel
///
pub fn create_recording_subscriber() -> (SubscriberCallback, UnboundedReceiver<NotificationRecord>)
{
    let (tx, rx) = mpsc::unbounded_channel();
    let callback = Box::new(move |record: Arc<NotificationRecord>| {
        let _ = tx.send((*record).clone());
    });

    (callback, rx)
}
