use super::{FanoutService, SubscriberCallback, SubscriptionId};
use crate::repository::NotificationRecord;
use async_trait::async_trait;
use std::{
    panic::{catch_unwind, AssertUnwindSafe},
    sync::Arc,
};
use tokio::sync::Mutex;

pub struct FanoutServiceImpl {
    subscribers: Mutex<Vec<(SubscriptionId, SubscriberCallback)>>,
}

impl FanoutServiceImpl {
    pub fn new() -> Self {
        let subscribers = Vec::new();
        let subscribers = Mutex::new(subscribers);

        Self { subscribers }
    }
}

#[async_trait]
impl FanoutService for FanoutServiceImpl {
    async fn subscribe(&self, callback: SubscriberCallback) -> SubscriptionId {
        let id = SubscriptionId::new();

        let mut subscribers = self.subscribers.lock().await;
        subscribers.push((id, callback));
        tracing::debug!(subscription_id = %id, "subscriber registered");

        id
    }

    async fn unsubscribe(&self, id: SubscriptionId) {
        let mut subscribers = self.subscribers.lock().await;
        let len_before = subscribers.len();
        subscribers.retain(|(subscription_id, _)| *subscription_id != id);

        match subscribers.len() < len_before {
            true => tracing::debug!(subscription_id = %id, "subscriber removed"),
            false => tracing::debug!(subscription_id = %id, "subscriber not registered"),
        }
    }

    ///
    /// Invokes every registered callback once, in registration order.
    ///
    /// A panicking subscriber is reported and skipped, delivery continues
    /// with the remaining subscribers.
    ///
    async fn publish(&self, record: Arc<NotificationRecord>) {
        let subscribers = self.subscribers.lock().await;

        for (id, callback) in subscribers.iter() {
            let delivery = catch_unwind(AssertUnwindSafe(|| callback(Arc::clone(&record))));
            if delivery.is_err() {
                tracing::warn!(subscription_id = %id, "subscriber panicked");
            }
        }
    }
}
