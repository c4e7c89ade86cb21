use super::SubscriptionId;
use crate::repository::NotificationRecord;
use async_trait::async_trait;
use std::sync::Arc;

pub type SubscriberCallback = Box<dyn Fn(Arc<NotificationRecord>) + Send + Sync>;

///
/// Service used to propagate received notifications to any interested party.
///
/// Callbacks run inline on the publishing task, in registration order,
/// and must not block. Delivery is best effort: subscribers only see
/// notifications published while they are registered, nothing is replayed.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FanoutService: Send + Sync {
    /// Registering the same logic twice yields two invocations per publish
    async fn subscribe(&self, callback: SubscriberCallback) -> SubscriptionId;

    /// Unknown ids are ignored
    async fn unsubscribe(&self, id: SubscriptionId);

    async fn publish(&self, record: Arc<NotificationRecord>);
}
