//! Dashboard state machine.
//!
//! Holds the most recently fetched batch, the loading flag, the category
//! filter and the auto-refresh toggle. State lives in a `watch` channel so
//! front-ends can subscribe and re-render whenever it changes.
//!
//! Refreshes are not serialized: two overlapping refreshes both run to
//! completion and whichever finishes last determines the event list.

mod auto_refresh;
mod filter;

pub use auto_refresh::{AutoRefresh, DEFAULT_AUTO_REFRESH_INTERVAL};
pub use filter::{CategoryFilter, category_options, filter_events};

use crate::feed::{EventFeed, FeedError};
use std::sync::Arc;
use std::time::Duration;
use time::OffsetDateTime;
use tokio::sync::watch;
use tracing::{error, info};
use wevt_sdk::objects::Event;

/// Snapshot of everything the dashboard displays.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Latest successfully fetched batch. Empty until the first success.
    pub events: Vec<Event>,
    pub loading: bool,
    pub filter: CategoryFilter,
    pub auto_refresh: bool,
    /// When `events` was last replaced.
    pub last_updated: Option<OffsetDateTime>,
}

impl DashboardState {
    /// The filtered view.
    pub fn visible_events(&self) -> Vec<&Event> {
        filter_events(&self.events, &self.filter)
    }

    /// Selector options derived from the loaded batch.
    pub fn category_options(&self) -> Vec<CategoryFilter> {
        category_options(&self.events)
    }
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub auto_refresh_interval: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            auto_refresh_interval: DEFAULT_AUTO_REFRESH_INTERVAL,
        }
    }
}

struct DashboardInner {
    feed: Arc<dyn EventFeed>,
    state: watch::Sender<DashboardState>,
}

/// Cloneable handle for operations that may run from spawned tasks.
///
/// Does not own the auto-refresh timer; only [`Dashboard`] does.
#[derive(Clone)]
pub struct DashboardHandle {
    inner: Arc<DashboardInner>,
}

impl DashboardHandle {
    /// Fetch a new batch and replace the event list with it.
    ///
    /// `loading` is set for the duration of the call and cleared however it
    /// ends, including when the future is dropped mid-fetch. On failure the
    /// error is logged and the previous events are kept.
    pub async fn refresh(&self) -> Result<usize, FeedError> {
        let _loading = LoadingGuard::start(&self.inner.state);

        match self.inner.feed.fetch_events().await {
            Ok(events) => {
                let count = events.len();
                let now = OffsetDateTime::now_utc();
                self.inner.state.send_modify(|state| {
                    state.events = events;
                    state.last_updated = Some(now);
                });
                info!(count, "Events refreshed");
                Ok(count)
            }
            Err(e) => {
                error!(error = %e, "Error fetching events");
                Err(e)
            }
        }
    }

    /// Change the category filter. Never fetches.
    pub fn set_filter(&self, filter: CategoryFilter) {
        self.inner.state.send_modify(|state| state.filter = filter);
    }

    /// Copy of the current state.
    pub fn state(&self) -> DashboardState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.inner.state.subscribe()
    }
}

/// Sets `loading` on creation and clears it on drop.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<DashboardState>,
}

impl<'a> LoadingGuard<'a> {
    fn start(state: &'a watch::Sender<DashboardState>) -> Self {
        state.send_modify(|s| s.loading = true);
        Self { state }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|s| s.loading = false);
    }
}

/// A mounted dashboard.
///
/// Dropping it cancels auto-refresh.
pub struct Dashboard {
    handle: DashboardHandle,
    config: DashboardConfig,
    auto_refresh: Option<AutoRefresh>,
}

impl Dashboard {
    /// Create a dashboard over `feed` and run the initial refresh.
    ///
    /// A failed initial refresh is logged and leaves the dashboard empty.
    pub async fn mount(feed: Arc<dyn EventFeed>, config: DashboardConfig) -> Self {
        let (state, _) = watch::channel(DashboardState::default());
        let dashboard = Self {
            handle: DashboardHandle {
                inner: Arc::new(DashboardInner { feed, state }),
            },
            config,
            auto_refresh: None,
        };
        let _ = dashboard.handle.refresh().await;
        dashboard
    }

    pub fn handle(&self) -> DashboardHandle {
        self.handle.clone()
    }

    pub async fn refresh(&self) -> Result<usize, FeedError> {
        self.handle.refresh().await
    }

    pub fn set_filter(&self, filter: CategoryFilter) {
        self.handle.set_filter(filter);
    }

    /// Start or stop the recurring refresh.
    ///
    /// Enabling while already enabled keeps the existing schedule.
    pub fn set_auto_refresh(&mut self, enabled: bool) {
        if enabled {
            if self.auto_refresh.is_none() {
                self.auto_refresh = Some(AutoRefresh::spawn(
                    self.handle.clone(),
                    self.config.auto_refresh_interval,
                ));
            }
        } else {
            // Dropping the handle aborts the task.
            self.auto_refresh = None;
        }
        self.handle
            .inner
            .state
            .send_modify(|state| state.auto_refresh = enabled);
    }

    pub fn is_auto_refreshing(&self) -> bool {
        self.auto_refresh.is_some()
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn state(&self) -> DashboardState {
        self.handle.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.handle.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_events;
    use async_trait::async_trait;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use tokio::sync::{Notify, oneshot};
    use wevt_sdk::client::ClientError;
    use wevt_sdk::objects::Category;

    /// Counts fetches and can be switched into a failing mode.
    #[derive(Default)]
    struct CountingFeed {
        calls: AtomicUsize,
        failing: AtomicBool,
    }

    impl CountingFeed {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl EventFeed for CountingFeed {
        async fn fetch_events(&self) -> Result<Vec<Event>, FeedError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.load(Ordering::SeqCst) {
                return Err(FeedError::Transport(ClientError::Api {
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                    body: r#"{"success":false,"error":"Failed to fetch events"}"#.to_string(),
                }));
            }
            let mut rng = StdRng::seed_from_u64(call as u64);
            Ok(generate_events(&mut rng, OffsetDateTime::now_utc())?)
        }
    }

    /// Blocks each fetch until `gate` is notified.
    #[derive(Default)]
    struct GatedFeed {
        gate: Notify,
        armed: AtomicBool,
    }

    #[async_trait]
    impl EventFeed for GatedFeed {
        async fn fetch_events(&self) -> Result<Vec<Event>, FeedError> {
            if self.armed.load(Ordering::SeqCst) {
                self.gate.notified().await;
            }
            let mut rng = StdRng::seed_from_u64(0);
            Ok(generate_events(&mut rng, OffsetDateTime::now_utc())?)
        }
    }

    /// Each fetch resolves with whatever is sent on the next queued channel.
    #[derive(Default)]
    struct QueuedFeed {
        pending: Mutex<VecDeque<oneshot::Receiver<Vec<Event>>>>,
    }

    impl QueuedFeed {
        fn enqueue(&self) -> oneshot::Sender<Vec<Event>> {
            let (tx, rx) = oneshot::channel();
            self.pending.lock().unwrap().push_back(rx);
            tx
        }
    }

    #[async_trait]
    impl EventFeed for QueuedFeed {
        async fn fetch_events(&self) -> Result<Vec<Event>, FeedError> {
            let rx = self.pending.lock().unwrap().pop_front();
            match rx {
                Some(rx) => Ok(rx.await.unwrap_or_default()),
                None => Ok(Vec::new()),
            }
        }
    }

    #[tokio::test]
    async fn test_mount_refreshes_once() {
        let feed = Arc::new(CountingFeed::default());
        let dashboard = Dashboard::mount(feed.clone(), DashboardConfig::default()).await;

        assert_eq!(feed.calls(), 1);
        let state = dashboard.state();
        assert_eq!(state.events.len(), 15);
        assert_eq!(state.filter, CategoryFilter::All);
        assert!(!state.loading);
        assert!(!state.auto_refresh);
        assert!(state.last_updated.is_some());
    }

    #[tokio::test]
    async fn test_filter_does_not_fetch() {
        let feed = Arc::new(CountingFeed::default());
        let dashboard = Dashboard::mount(feed.clone(), DashboardConfig::default()).await;

        dashboard.set_filter(CategoryFilter::parse("technology"));
        let state = dashboard.state();
        let visible = state.visible_events();
        assert_eq!(visible.len(), 3);
        assert!(visible.iter().all(|e| e.category == Category::Technology));
        assert_eq!(feed.calls(), 1);

        dashboard.set_filter(CategoryFilter::parse("all"));
        let state = dashboard.state();
        assert_eq!(state.visible_events().len(), state.events.len());
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_events() {
        let feed = Arc::new(CountingFeed::default());
        let dashboard = Dashboard::mount(feed.clone(), DashboardConfig::default()).await;
        let before = dashboard.state().events;
        assert_eq!(before.len(), 15);

        feed.failing.store(true, Ordering::SeqCst);
        let result = dashboard.refresh().await;
        assert!(matches!(result, Err(FeedError::Transport(_))));

        let state = dashboard.state();
        assert_eq!(state.events, before);
        assert!(!state.loading);
        assert_eq!(feed.calls(), 2);
    }

    #[tokio::test]
    async fn test_failed_mount_starts_empty() {
        let feed = Arc::new(CountingFeed::default());
        feed.failing.store(true, Ordering::SeqCst);
        let dashboard = Dashboard::mount(feed.clone(), DashboardConfig::default()).await;

        let state = dashboard.state();
        assert!(state.events.is_empty());
        assert!(!state.loading);
        assert_eq!(state.category_options(), vec![CategoryFilter::All]);
    }

    #[tokio::test]
    async fn test_loading_set_while_in_flight() {
        let feed = Arc::new(GatedFeed::default());
        let dashboard = Dashboard::mount(feed.clone(), DashboardConfig::default()).await;
        feed.armed.store(true, Ordering::SeqCst);

        let handle = dashboard.handle();
        let task = tokio::spawn(async move { handle.refresh().await });
        tokio::task::yield_now().await;
        assert!(dashboard.state().loading);

        feed.gate.notify_one();
        assert_eq!(task.await.unwrap().unwrap(), 15);
        assert!(!dashboard.state().loading);
    }

    #[tokio::test]
    async fn test_cancelled_refresh_clears_loading() {
        let feed = Arc::new(GatedFeed::default());
        let dashboard = Dashboard::mount(feed.clone(), DashboardConfig::default()).await;
        feed.armed.store(true, Ordering::SeqCst);

        let handle = dashboard.handle();
        let task = tokio::spawn(async move { handle.refresh().await });
        tokio::task::yield_now().await;
        assert!(dashboard.state().loading);

        task.abort();
        assert!(task.await.unwrap_err().is_cancelled());
        assert!(!dashboard.state().loading);
        assert_eq!(dashboard.state().events.len(), 15);
    }

    #[tokio::test]
    async fn test_overlapping_refreshes_last_write_wins() {
        let feed = Arc::new(QueuedFeed::default());
        let dashboard = Dashboard::mount(feed.clone(), DashboardConfig::default()).await;

        let first = feed.enqueue();
        let second = feed.enqueue();

        let h1 = dashboard.handle();
        let t1 = tokio::spawn(async move { h1.refresh().await });
        tokio::task::yield_now().await;
        let h2 = dashboard.handle();
        let t2 = tokio::spawn(async move { h2.refresh().await });
        tokio::task::yield_now().await;

        let now = OffsetDateTime::now_utc();
        let batch_a = generate_events(&mut StdRng::seed_from_u64(10), now).unwrap();
        let batch_b = generate_events(&mut StdRng::seed_from_u64(11), now).unwrap();

        second.send(batch_b.clone()).unwrap();
        t2.await.unwrap().unwrap();
        assert_eq!(dashboard.state().events, batch_b);

        first.send(batch_a.clone()).unwrap();
        t1.await.unwrap().unwrap();
        assert_eq!(dashboard.state().events, batch_a);
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_refresh_fires_every_interval() {
        let feed = Arc::new(CountingFeed::default());
        let mut dashboard = Dashboard::mount(feed.clone(), DashboardConfig::default()).await;

        dashboard.set_auto_refresh(true);
        assert!(dashboard.state().auto_refresh);

        tokio::time::sleep(Duration::from_secs(29)).await;
        assert_eq!(feed.calls(), 1);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(feed.calls(), 2);

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(feed.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_off_before_interval_skips_refresh() {
        let feed = Arc::new(CountingFeed::default());
        let mut dashboard = Dashboard::mount(feed.clone(), DashboardConfig::default()).await;

        dashboard.set_auto_refresh(true);
        tokio::time::sleep(Duration::from_secs(10)).await;
        dashboard.set_auto_refresh(false);
        assert!(!dashboard.is_auto_refreshing());
        assert!(!dashboard.state().auto_refresh);

        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(feed.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_enabling_twice_keeps_one_schedule() {
        let feed = Arc::new(CountingFeed::default());
        let mut dashboard = Dashboard::mount(feed.clone(), DashboardConfig::default()).await;

        dashboard.set_auto_refresh(true);
        tokio::time::sleep(Duration::from_secs(15)).await;
        dashboard.set_auto_refresh(true);

        tokio::time::sleep(Duration::from_secs(16)).await;
        assert_eq!(feed.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_auto_refresh() {
        let feed = Arc::new(CountingFeed::default());
        let mut dashboard = Dashboard::mount(feed.clone(), DashboardConfig::default()).await;
        dashboard.set_auto_refresh(true);
        drop(dashboard);

        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(feed.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_interval() {
        let feed = Arc::new(CountingFeed::default());
        let config = DashboardConfig {
            auto_refresh_interval: Duration::from_secs(5),
        };
        let mut dashboard = Dashboard::mount(feed.clone(), config).await;
        dashboard.set_auto_refresh(true);

        tokio::time::sleep(Duration::from_secs(11)).await;
        assert_eq!(feed.calls(), 3);
    }

    #[tokio::test]
    async fn test_subscribers_see_refresh() {
        let feed = Arc::new(CountingFeed::default());
        let dashboard = Dashboard::mount(feed.clone(), DashboardConfig::default()).await;
        let mut rx = dashboard.subscribe();
        rx.borrow_and_update();

        dashboard.refresh().await.unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().events.len(), 15);
    }
}
