use super::ApplicationEnv;
use crate::{
    repository::NotificationsRepositoryImpl,
    service::{
        fanout_service::{FanoutService, FanoutServiceImpl},
        hub_listener_service::{HubListenerService, HubListenerServiceConfig, RecordIdSequence},
        notifications_feed_service::{NotificationsFeedService, NotificationsFeedServiceImpl},
    },
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ApplicationState {
    pub notifications_feed_service: Arc<dyn NotificationsFeedService>,
    pub fanout_service: Arc<dyn FanoutService>,
}

pub struct ApplicationStateToClose {
    pub hub_listener_service: HubListenerService,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("creating repositories");
    let notifications_repository = NotificationsRepositoryImpl::new(env.feed_path.clone()).await?;
    let notifications_repository = Arc::new(notifications_repository);

    tracing::info!("creating services");
    let notifications_feed_service =
        NotificationsFeedServiceImpl::new(notifications_repository).await;
    let notifications_feed_service: Arc<dyn NotificationsFeedService> =
        Arc::new(notifications_feed_service);

    let fanout_service: Arc<dyn FanoutService> = Arc::new(FanoutServiceImpl::new());

    // Record ids double as insertion timestamps. Seeding the sequence with
    // persisted ids keeps new ids unique even when the clock moved back
    // since the previous run.
    let id_sequence = RecordIdSequence::new();
    for record in notifications_feed_service.records().await {
        id_sequence.advance_past(record.id);
    }
    let id_sequence = Arc::new(id_sequence);

    let config = HubListenerServiceConfig {
        hub_url: env.hub_url.clone(),
        retry_interval: env.hub_retry_interval,
    };
    let hub_listener_service = HubListenerService::new(
        config,
        id_sequence,
        notifications_feed_service.clone(),
        fanout_service.clone(),
    );

    Ok((
        ApplicationState {
            notifications_feed_service,
            fanout_service,
        },
        ApplicationStateToClose {
            hub_listener_service,
        },
    ))
}
