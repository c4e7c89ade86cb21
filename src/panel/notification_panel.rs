use super::{DisplayMode, KindFilter};
use crate::{
    dto::output,
    error::Error,
    repository::NotificationRecord,
    service::{
        fanout_service::{FanoutService, SubscriptionId},
        notifications_feed_service::NotificationsFeedService,
    },
};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

const DROPDOWN_PREVIEW_MAX_CHARS: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Open,
}

///
/// One embeddable view over the shared notification feed.
///
/// Every surface mounts its own panel. Panels share the feed and the
/// fanout bus but keep their own display mode, filter and open state.
/// Opening a panel marks the whole feed read, once per open.
///
/// [Self::revision] increases whenever a notification arrives while
/// the panel is mounted, an embedding surface polls or diffs it to know
/// when to render again. A panel that is no longer needed must be
/// released with [Self::unmount], dropping it without unmounting leaves
/// its subscription registered.
///
pub struct NotificationPanel {
    mode: DisplayMode,
    filter: KindFilter,
    state: PanelState,
    revision: Arc<AtomicU64>,
    subscription_id: SubscriptionId,
    feed_service: Arc<dyn NotificationsFeedService>,
    fanout_service: Arc<dyn FanoutService>,
}

impl NotificationPanel {
    pub async fn mount(
        mode: DisplayMode,
        feed_service: Arc<dyn NotificationsFeedService>,
        fanout_service: Arc<dyn FanoutService>,
    ) -> Self {
        let revision = Arc::new(AtomicU64::new(0));
        let subscriber_revision = Arc::clone(&revision);
        let subscription_id = fanout_service
            .subscribe(Box::new(move |_| {
                subscriber_revision.fetch_add(1, Ordering::SeqCst);
            }))
            .await;

        Self {
            mode,
            filter: KindFilter::All,
            state: PanelState::Closed,
            revision,
            subscription_id,
            feed_service,
            fanout_service,
        }
    }

    pub async fn unmount(self) {
        self.fanout_service.unsubscribe(self.subscription_id).await;
    }

    ///
    /// Opens the panel and marks the feed read.
    ///
    /// Opening an already open panel changes nothing, the feed is
    /// marked again only after the panel was closed in between.
    ///
    pub async fn open(&mut self) -> Result<(), Error> {
        if self.state == PanelState::Open {
            return Ok(());
        }

        self.state = PanelState::Open;
        self.feed_service.mark_all_read().await
    }

    /// Outside clicks and toggle buttons both end up here
    pub fn close(&mut self) {
        self.state = PanelState::Closed;
    }

    pub async fn toggle(&mut self) -> Result<(), Error> {
        match self.state {
            PanelState::Closed => self.open().await,
            PanelState::Open => {
                self.close();
                Ok(())
            }
        }
    }

    ///
    /// Feed entries matching the panel filter, most recent first.
    ///
    pub async fn items(&self) -> Vec<output::FeedItem> {
        self.feed_service
            .records()
            .await
            .into_iter()
            .filter(|record| self.filter.matches(record.kind))
            .map(|record| self.feed_item(record))
            .collect()
    }

    /// Unread count shown on the closed panel badge
    pub async fn badge(&self) -> usize {
        self.feed_service.unread_count().await
    }

    pub async fn dismiss(&self, id: i64) -> Result<(), Error> {
        self.feed_service.remove(id).await
    }

    pub async fn clear_all(&self) -> Result<(), Error> {
        self.feed_service.clear().await
    }

    pub fn set_filter(&mut self, filter: KindFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> KindFilter {
        self.filter
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }

    fn feed_item(&self, record: NotificationRecord) -> output::FeedItem {
        let NotificationRecord {
            id,
            kind,
            title,
            body,
            occurred_date,
            occurred_time,
            read,
        } = record;

        let body = match self.mode {
            DisplayMode::Dropdown => preview(&body),
            DisplayMode::FullPage => body,
        };

        output::FeedItem {
            id,
            kind,
            title,
            body,
            occurred_date,
            occurred_time,
            read,
        }
    }
}

fn preview(body: &str) -> String {
    let mut chars = body.chars();
    let preview: String = chars.by_ref().take(DROPDOWN_PREVIEW_MAX_CHARS).collect();
    match chars.next() {
        Some(_) => format!("{preview}…"),
        None => preview,
    }
}
