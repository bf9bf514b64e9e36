/// Revalidating read cache over the upstream API
use crate::config::{CachePolicy, RefreshIntervals};
use crate::domain::{Resource, ResourceKey};
use crate::errors::FetchError;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{sleep, Instant};
use tracing::{debug, error, info, warn};

/// Refresh intervals a key may go unread before its poller stops
const IDLE_INTERVALS: u32 = 3;

/// Source of resources for the cache
pub trait Fetcher: Send + Sync + 'static {
    /// Cache key for a resource; single items include their id
    fn key_url(&self, key: &ResourceKey) -> String;

    fn fetch(&self, key: &ResourceKey)
        -> impl Future<Output = Result<Resource, FetchError>> + Send;
}

/// Observable state of one cache key
#[derive(Debug, Clone, Default)]
pub struct CacheState {
    /// Last known good value
    pub data: Option<Arc<Resource>>,
    /// Error of the latest settled request, cleared by the next success
    pub error: Option<Arc<FetchError>>,
    /// A request is in flight and there is nothing to show yet
    pub is_loading: bool,
    /// A request is in flight
    pub is_validating: bool,
    /// Highest request generation applied so far
    pub settled_generation: u64,
    /// When `data` was last replaced
    pub updated_at: Option<DateTime<Utc>>,
}

struct Entry {
    key: ResourceKey,
    state: watch::Sender<CacheState>,
    in_flight: Option<u64>,
    generation: u64,
    last_started: Option<Instant>,
    last_read: Instant,
    polling: bool,
}

impl Entry {
    fn new(key: ResourceKey) -> Self {
        let (state, _) = watch::channel(CacheState::default());
        Self {
            key,
            state,
            in_flight: None,
            generation: 0,
            last_started: None,
            last_read: Instant::now(),
            polling: false,
        }
    }
}

struct Inner<F> {
    fetcher: F,
    policy: CachePolicy,
    intervals: RefreshIntervals,
    entries: Mutex<HashMap<String, Entry>>,
}

/// Handle on the request a caller started or joined
struct Ticket {
    rx: watch::Receiver<CacheState>,
    pending: Option<u64>,
}

impl Ticket {
    fn current(&self) -> CacheState {
        self.rx.borrow().clone()
    }

    async fn settled(mut self) -> CacheState {
        let Some(generation) = self.pending else {
            return self.current();
        };
        if let Ok(state) = self
            .rx
            .wait_for(|s| s.settled_generation >= generation)
            .await
        {
            return state.clone();
        }
        self.current()
    }
}

/// Shared cache handle; clones refer to the same entries.
///
/// Every key (the resource URL) owns a `watch` channel carrying its
/// [`CacheState`]. Stale data stays visible while a background request is
/// in flight, and per key there is at most one request at a time.
///
/// A read key is polled on its resource class interval until it goes
/// unread for a few intervals with no subscriber left; the next read
/// resumes polling. A zero interval disables polling.
///
/// Operations spawn Tokio tasks and must run inside a Tokio runtime.
pub struct Cache<F: Fetcher> {
    inner: Arc<Inner<F>>,
}

impl<F: Fetcher> Clone for Cache<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: Fetcher> Cache<F> {
    pub fn new(fetcher: F, policy: CachePolicy, intervals: RefreshIntervals) -> Self {
        Self {
            inner: Arc::new(Inner {
                fetcher,
                policy,
                intervals,
                entries: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Current state of `key`, starting a background request when the key
    /// is new or outside the dedup window
    pub fn read(&self, key: &ResourceKey) -> CacheState {
        self.begin(key, false).current()
    }

    /// Like [`Cache::read`], but waits for the request to settle when
    /// there is no data to show yet
    pub async fn get(&self, key: &ResourceKey) -> CacheState {
        let ticket = self.begin(key, false);
        let current = ticket.current();
        if current.data.is_some() {
            return current;
        }
        ticket.settled().await
    }

    /// Force a re-fetch of `key` and wait for it; joins a request already
    /// in flight instead of issuing a second one
    pub async fn revalidate(&self, key: &ResourceKey) -> CacheState {
        self.begin(key, true).settled().await
    }

    /// Change feed for `key`; registering a key starts its first fetch
    pub fn subscribe(&self, key: &ResourceKey) -> watch::Receiver<CacheState> {
        self.begin(key, false).rx
    }

    /// Current state of `key` without triggering any request
    pub fn snapshot(&self, key: &ResourceKey) -> Option<CacheState> {
        let url = self.inner.fetcher.key_url(key);
        self.inner
            .entries()
            .get(&url)
            .map(|entry| entry.state.borrow().clone())
    }

    pub fn keys(&self) -> Vec<ResourceKey> {
        self.inner
            .entries()
            .values()
            .map(|entry| entry.key.clone())
            .collect()
    }

    /// Consumer surface became visible again; returns the number of keys
    /// now revalidating
    pub fn on_focus(&self) -> usize {
        if !self.inner.policy.revalidate_on_focus {
            return 0;
        }
        let count = self.revalidate_all();
        info!("Focus regained, revalidating {} keys", count);
        count
    }

    /// Network connectivity restored; returns the number of keys now
    /// revalidating
    pub fn on_reconnect(&self) -> usize {
        if !self.inner.policy.revalidate_on_reconnect {
            return 0;
        }
        let count = self.revalidate_all();
        info!("Connection restored, revalidating {} keys", count);
        count
    }

    fn revalidate_all(&self) -> usize {
        self.keys()
            .iter()
            .filter(|key| self.start(key, false, false).pending.is_some())
            .count()
    }

    fn begin(&self, key: &ResourceKey, force: bool) -> Ticket {
        self.start(key, force, true)
    }

    /// `touch` marks a consumer read, which keeps (or resumes) polling
    fn start(&self, key: &ResourceKey, force: bool, touch: bool) -> Ticket {
        let url = self.inner.fetcher.key_url(key);
        let mut entries = self.inner.entries();

        let entry = entries
            .entry(url.clone())
            .or_insert_with(|| Entry::new(key.clone()));

        if touch {
            entry.last_read = Instant::now();
            let interval = self.inner.intervals.for_class(key.class());
            if !entry.polling && !interval.is_zero() {
                entry.polling = true;
                self.spawn_poller(url.clone(), key.clone(), interval);
            }
        }

        if let Some(generation) = entry.in_flight {
            return Ticket {
                rx: entry.state.subscribe(),
                pending: Some(generation),
            };
        }

        if !force {
            if let Some(started) = entry.last_started {
                if started.elapsed() < self.inner.policy.deduping_interval {
                    return Ticket {
                        rx: entry.state.subscribe(),
                        pending: None,
                    };
                }
            }
        }

        entry.generation += 1;
        let generation = entry.generation;
        entry.in_flight = Some(generation);
        entry.last_started = Some(Instant::now());
        entry.state.send_modify(|state| {
            state.is_validating = true;
            state.is_loading = state.data.is_none();
        });
        let rx = entry.state.subscribe();
        drop(entries);

        debug!("Fetching {} (generation {})", url, generation);
        let inner = Arc::clone(&self.inner);
        let key = key.clone();
        tokio::spawn(async move {
            let result = inner.fetch_with_retry(&key, &url).await;
            inner.settle(&url, generation, result);
        });

        Ticket {
            rx,
            pending: Some(generation),
        }
    }

    /// Interval task for one key; it ends when the key goes idle or every
    /// cache handle is gone
    fn spawn_poller(&self, url: String, key: ResourceKey, interval: Duration) {
        let weak = Arc::downgrade(&self.inner);
        tokio::spawn(async move {
            loop {
                sleep(interval).await;
                let Some(inner) = weak.upgrade() else {
                    debug!("Cache dropped, stopping refresh of {}", url);
                    break;
                };
                if !inner.keep_polling(&url, interval) {
                    debug!("{} idle, stopping refresh", url);
                    break;
                }
                let ticket = Cache { inner }.start(&key, true, false);
                ticket.settled().await;
            }
        });
    }
}

impl<F: Fetcher> Inner<F> {
    fn entries(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Clears the polling flag once nobody reads or watches the key
    fn keep_polling(&self, url: &str, interval: Duration) -> bool {
        let mut entries = self.entries();
        let Some(entry) = entries.get_mut(url) else {
            return false;
        };
        let idle = entry.state.receiver_count() == 0
            && entry.last_read.elapsed() >= interval.saturating_mul(IDLE_INTERVALS);
        if idle {
            entry.polling = false;
        }
        !idle
    }

    async fn fetch_with_retry(&self, key: &ResourceKey, url: &str) -> Result<Resource, FetchError> {
        let mut retries = 0;
        loop {
            match self.fetcher.fetch(key).await {
                Ok(resource) => return Ok(resource),
                Err(e) => {
                    if !self.policy.should_retry_on_error || retries >= self.policy.error_retry_count {
                        error!("Fetching {} failed after {} attempts: {}", url, retries + 1, e);
                        return Err(e);
                    }
                    retries += 1;
                    warn!(
                        "Fetching {} failed: {}; retry {}/{} in {:?}",
                        url, e, retries, self.policy.error_retry_count, self.policy.error_retry_interval
                    );
                    sleep(self.policy.error_retry_interval).await;
                }
            }
        }
    }

    /// Apply a finished request; whichever completes last wins
    fn settle(&self, url: &str, generation: u64, result: Result<Resource, FetchError>) {
        let mut entries = self.entries();
        let Some(entry) = entries.get_mut(url) else {
            return;
        };
        if entry.in_flight == Some(generation) {
            entry.in_flight = None;
        }
        let still_running = entry.in_flight.is_some();

        entry.state.send_modify(|state| {
            match result {
                Ok(resource) => {
                    state.data = Some(Arc::new(resource));
                    state.error = None;
                    state.updated_at = Some(Utc::now());
                }
                Err(e) => state.error = Some(Arc::new(e)),
            }
            state.is_validating = still_running;
            state.is_loading = still_running && state.data.is_none();
            state.settled_generation = state.settled_generation.max(generation);
        });
    }
}
