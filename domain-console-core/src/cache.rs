//! 请求缓存与标签失效
//!
//! One entry per query key, each carrying resource tags. Reads are served
//! from a fresh entry, joined onto an in-flight request, or trigger a new
//! request. A successful mutation invalidates every entry that carries one
//! of its tags; the next read of such an entry goes back to the network.
//!
//! Entries are never patched in place: the only way data changes is a
//! completed fetch.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use tokio::sync::{watch, Mutex};

use domain_console_gateway::{Domain, GatewayError};

/// Query key of the domain list.
pub const LIST_DOMAINS_KEY: &str = "getDomains";

/// Cache holding the domain list.
pub type DomainListCache = QueryCache<Vec<Domain>>;

/// Resource tag attached to cache entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheTag {
    /// Anything derived from the domain collection.
    Domain,
}

impl fmt::Display for CacheTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain => write!(f, "Domain"),
        }
    }
}

/// Observable state of one cache entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QueryStatus {
    /// Never requested.
    #[default]
    Idle,
    /// A request is in flight.
    Fetching,
    /// Data is present and fresh.
    Ready,
    /// Invalidated; the next read refetches.
    Stale,
    /// The last request failed; the next read refetches.
    Failed(String),
}

impl QueryStatus {
    pub fn is_fetching(&self) -> bool {
        matches!(self, Self::Fetching)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

type SharedFetch<V> = Shared<BoxFuture<'static, Result<Arc<V>, GatewayError>>>;

struct InFlight<V> {
    id: u64,
    fetch: SharedFetch<V>,
}

struct Entry<V> {
    tags: Vec<CacheTag>,
    data: Option<Arc<V>>,
    stale: bool,
    in_flight: Option<InFlight<V>>,
    status: watch::Sender<QueryStatus>,
}

impl<V> Entry<V> {
    fn new() -> Self {
        let (status, _) = watch::channel(QueryStatus::Idle);
        Self {
            tags: Vec::new(),
            data: None,
            stale: false,
            in_flight: None,
            status,
        }
    }

    fn add_tags(&mut self, tags: &[CacheTag]) {
        for tag in tags {
            if !self.tags.contains(tag) {
                self.tags.push(*tag);
            }
        }
    }
}

struct Entries<V> {
    map: HashMap<String, Entry<V>>,
    next_fetch_id: u64,
}

/// Tag-invalidated query cache with in-flight de-duplication.
pub struct QueryCache<V> {
    entries: Mutex<Entries<V>>,
}

impl<V> QueryCache<V>
where
    V: Send + Sync + 'static,
{
    /// 创建空缓存
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Entries {
                map: HashMap::new(),
                next_fetch_id: 0,
            }),
        }
    }

    /// Read `key`, fetching with `fetch` only when there is no fresh data
    /// and no request already in flight.
    ///
    /// Every caller waiting on the same request receives the same result,
    /// errors included.
    pub async fn query<F, Fut>(
        &self,
        key: &str,
        tags: &[CacheTag],
        fetch: F,
    ) -> Result<Arc<V>, GatewayError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, GatewayError>> + Send + 'static,
    {
        let (fetch_id, shared) = {
            let mut entries = self.entries.lock().await;
            let next_id = entries.next_fetch_id;
            let entry = entries
                .map
                .entry(key.to_string())
                .or_insert_with(Entry::new);
            entry.add_tags(tags);

            if let (Some(data), false) = (&entry.data, entry.stale) {
                log::debug!("[cache] hit: {key}");
                return Ok(Arc::clone(data));
            }

            if let Some(in_flight) = &entry.in_flight {
                log::debug!("[cache] joining in-flight request: {key}");
                (in_flight.id, in_flight.fetch.clone())
            } else {
                log::debug!("[cache] miss: {key}");
                let shared = fetch().map(|r| r.map(Arc::new)).boxed().shared();
                entry.in_flight = Some(InFlight {
                    id: next_id,
                    fetch: shared.clone(),
                });
                entry.status.send_replace(QueryStatus::Fetching);
                entries.next_fetch_id += 1;
                (next_id, shared)
            }
        };

        let result = shared.await;
        self.settle(key, fetch_id, &result).await;
        result
    }

    /// Store the outcome of request `fetch_id`, unless the entry was
    /// invalidated (or already settled) while it was in flight.
    async fn settle(&self, key: &str, fetch_id: u64, result: &Result<Arc<V>, GatewayError>) {
        let mut entries = self.entries.lock().await;
        let Some(entry) = entries.map.get_mut(key) else {
            return;
        };
        if entry.in_flight.as_ref().map(|f| f.id) != Some(fetch_id) {
            return;
        }
        entry.in_flight = None;

        match result {
            Ok(data) => {
                entry.data = Some(Arc::clone(data));
                entry.stale = false;
                entry.status.send_replace(QueryStatus::Ready);
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("[cache] {key} fetch failed: {e}");
                } else {
                    log::error!("[cache] {key} fetch failed: {e}");
                }
                entry.stale = true;
                entry.status.send_replace(QueryStatus::Failed(e.to_string()));
            }
        }
    }

    /// Mark every entry carrying one of `tags` as stale and detach any
    /// request in flight for it. Returns the number of entries touched.
    pub async fn invalidate_tags(&self, tags: &[CacheTag]) -> usize {
        let mut entries = self.entries.lock().await;
        let mut count = 0;
        for (key, entry) in &mut entries.map {
            if entry.tags.iter().any(|t| tags.contains(t)) {
                entry.stale = true;
                entry.in_flight = None;
                entry.status.send_replace(QueryStatus::Stale);
                log::debug!("[cache] invalidated: {key}");
                count += 1;
            }
        }
        count
    }

    /// Last fetched value for `key`, fresh or not, without any request.
    pub async fn peek(&self, key: &str) -> Option<Arc<V>> {
        let entries = self.entries.lock().await;
        entries.map.get(key).and_then(|e| e.data.clone())
    }

    /// Current status of `key`.
    pub async fn status(&self, key: &str) -> QueryStatus {
        let entries = self.entries.lock().await;
        entries
            .map
            .get(key)
            .map_or(QueryStatus::Idle, |e| e.status.borrow().clone())
    }

    /// Watch status changes of `key`.
    pub async fn subscribe(&self, key: &str) -> watch::Receiver<QueryStatus> {
        let mut entries = self.entries.lock().await;
        entries
            .map
            .entry(key.to_string())
            .or_insert_with(Entry::new)
            .status
            .subscribe()
    }
}

impl<V> Default for QueryCache<V>
where
    V: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    const KEY: &str = "getNumbers";

    fn counting_fetch(
        calls: &Arc<AtomicUsize>,
        value: Result<u32, GatewayError>,
    ) -> impl FnOnce() -> BoxFuture<'static, Result<u32, GatewayError>> {
        let calls = Arc::clone(calls);
        move || {
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                value
            }
            .boxed()
        }
    }

    fn gated_fetch(
        calls: &Arc<AtomicUsize>,
        gate: &Arc<Notify>,
        value: u32,
    ) -> impl FnOnce() -> BoxFuture<'static, Result<u32, GatewayError>> {
        let calls = Arc::clone(calls);
        let gate = Arc::clone(gate);
        move || {
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                gate.notified().await;
                Ok(value)
            }
            .boxed()
        }
    }

    fn network_error() -> GatewayError {
        GatewayError::NetworkError {
            detail: "connection refused".into(),
        }
    }

    #[tokio::test]
    async fn fresh_entry_is_served_without_request() {
        let cache = QueryCache::<u32>::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let first = cache
            .query(KEY, &[CacheTag::Domain], counting_fetch(&calls, Ok(1)))
            .await
            .unwrap();
        let second = cache
            .query(KEY, &[CacheTag::Domain], counting_fetch(&calls, Ok(2)))
            .await
            .unwrap();

        assert_eq!((*first, *second), (1, 1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.status(KEY).await, QueryStatus::Ready);
    }

    #[tokio::test]
    async fn concurrent_reads_share_one_request() {
        let cache = QueryCache::<u32>::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let gate = Arc::new(Notify::new());

        let (a, b, ()) = tokio::join!(
            cache.query(KEY, &[CacheTag::Domain], gated_fetch(&calls, &gate, 7)),
            cache.query(KEY, &[CacheTag::Domain], gated_fetch(&calls, &gate, 8)),
            async { gate.notify_one() },
        );

        assert_eq!(*a.unwrap(), 7);
        assert_eq!(*b.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalidation_forces_refetch() {
        let cache = QueryCache::<u32>::new();
        let calls = Arc::new(AtomicUsize::new(0));

        cache
            .query(KEY, &[CacheTag::Domain], counting_fetch(&calls, Ok(1)))
            .await
            .unwrap();
        assert_eq!(cache.invalidate_tags(&[CacheTag::Domain]).await, 1);
        assert_eq!(cache.status(KEY).await, QueryStatus::Stale);

        let value = cache
            .query(KEY, &[CacheTag::Domain], counting_fetch(&calls, Ok(2)))
            .await
            .unwrap();
        assert_eq!(*value, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn untagged_entries_survive_invalidation() {
        let cache = QueryCache::<u32>::new();
        let calls = Arc::new(AtomicUsize::new(0));

        cache
            .query("other", &[], counting_fetch(&calls, Ok(1)))
            .await
            .unwrap();
        assert_eq!(cache.invalidate_tags(&[CacheTag::Domain]).await, 0);
        assert_eq!(cache.status("other").await, QueryStatus::Ready);
    }

    #[tokio::test]
    async fn invalidation_during_fetch_discards_result() {
        let cache = QueryCache::<u32>::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let gate = Arc::new(Notify::new());

        let (first, ()) = tokio::join!(
            cache.query(KEY, &[CacheTag::Domain], gated_fetch(&calls, &gate, 1)),
            async {
                assert_eq!(calls.load(Ordering::SeqCst), 1);
                cache.invalidate_tags(&[CacheTag::Domain]).await;
                gate.notify_one();
            },
        );

        // the caller still gets what it waited for
        assert_eq!(*first.unwrap(), 1);
        assert_eq!(cache.status(KEY).await, QueryStatus::Stale);

        let second = cache
            .query(KEY, &[CacheTag::Domain], counting_fetch(&calls, Ok(2)))
            .await
            .unwrap();
        assert_eq!(*second, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_fetch_is_reported_and_retried_on_next_read_only() {
        let cache = QueryCache::<u32>::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let err = cache
            .query(KEY, &[CacheTag::Domain], counting_fetch(&calls, Err(network_error())))
            .await
            .unwrap_err();
        assert!(err.is_transport());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(cache.status(KEY).await.is_error());
        assert!(cache.peek(KEY).await.is_none());

        let value = cache
            .query(KEY, &[CacheTag::Domain], counting_fetch(&calls, Ok(5)))
            .await
            .unwrap();
        assert_eq!(*value, 5);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_refetch_keeps_last_data_for_peek() {
        let cache = QueryCache::<u32>::new();
        let calls = Arc::new(AtomicUsize::new(0));

        cache
            .query(KEY, &[CacheTag::Domain], counting_fetch(&calls, Ok(3)))
            .await
            .unwrap();
        cache.invalidate_tags(&[CacheTag::Domain]).await;
        let _ = cache
            .query(KEY, &[CacheTag::Domain], counting_fetch(&calls, Err(network_error())))
            .await;

        assert_eq!(cache.peek(KEY).await.as_deref(), Some(&3));
        assert!(cache.status(KEY).await.is_error());
    }

    #[tokio::test]
    async fn subscribers_see_status_transitions() {
        let cache = QueryCache::<u32>::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let mut rx = cache.subscribe(KEY).await;
        assert_eq!(*rx.borrow_and_update(), QueryStatus::Idle);

        cache
            .query(KEY, &[CacheTag::Domain], counting_fetch(&calls, Ok(1)))
            .await
            .unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), QueryStatus::Ready);

        cache.invalidate_tags(&[CacheTag::Domain]).await;
        assert_eq!(*rx.borrow_and_update(), QueryStatus::Stale);
    }
}
