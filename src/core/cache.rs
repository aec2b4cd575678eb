//! 以 endpoint 為 key 的共用快取，附 TTL 與同 key 請求合併。
//!
//! 同一個 key 的並行請求會排在同一把鎖後面，第一個完成後其餘直接拿快取值，
//! 所以同時間只有一個請求在路上。錯誤不寫入快取。

use crate::utils::error::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
struct Entry {
    value: Arc<Value>,
    fetched_at: Instant,
}

#[derive(Debug)]
pub struct QueryCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, Entry>>,
    in_flight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl QueryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// 未過期的快取值
    pub async fn get_fresh(&self, key: &str) -> Option<Arc<Value>> {
        let entries = self.entries.lock().await;
        entries
            .get(key)
            .filter(|e| e.fetched_at.elapsed() < self.ttl)
            .map(|e| Arc::clone(&e.value))
    }

    /// 有新鮮的快取且沒有 `force` 就直接回傳，否則呼叫 `fetch` 並寫入快取。
    /// `fetch` 回傳 `None`（無內容）時以 `Value::Null` 保存。
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, force: bool, fetch: F) -> Result<Arc<Value>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<Value>>>,
    {
        if !force {
            if let Some(value) = self.get_fresh(key).await {
                tracing::debug!("💾 cache hit: {}", key);
                return Ok(value);
            }
        }

        let key_lock = {
            let mut in_flight = self.in_flight.lock().await;
            Arc::clone(in_flight.entry(key.to_string()).or_default())
        };
        let result = self.fetch_locked(key, force, &key_lock, fetch).await;
        self.release(key, key_lock).await;
        result
    }

    async fn fetch_locked<F, Fut>(
        &self,
        key: &str,
        force: bool,
        key_lock: &Mutex<()>,
        fetch: F,
    ) -> Result<Arc<Value>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<Value>>>,
    {
        let started = Instant::now();
        let _guard = key_lock.lock().await;

        // 等鎖期間別人可能已經抓好了
        if let Some(entry) = self.entries.lock().await.get(key) {
            if entry.fetched_at >= started || (!force && entry.fetched_at.elapsed() < self.ttl) {
                return Ok(Arc::clone(&entry.value));
            }
        }

        tracing::debug!("💾 cache miss: {} (force: {})", key, force);
        let value = Arc::new(fetch().await?.unwrap_or(Value::Null));
        self.entries.lock().await.insert(
            key.to_string(),
            Entry {
                value: Arc::clone(&value),
                fetched_at: Instant::now(),
            },
        );
        Ok(value)
    }

    /// 沒有其他等待者時移除 key 的鎖
    async fn release(&self, key: &str, key_lock: Arc<Mutex<()>>) {
        let mut in_flight = self.in_flight.lock().await;
        // map 一份加上這裡一份
        if Arc::strong_count(&key_lock) <= 2 {
            in_flight.remove(key);
        }
    }

    /// 目前保留中的 per-key 鎖數量
    pub async fn in_flight_len(&self) -> usize {
        self.in_flight.lock().await.len()
    }

    pub async fn invalidate(&self, key: &str) {
        self.entries.lock().await.remove(key);
    }

    /// 刪除以 `prefix` 開頭的所有 key，例如 `/menu-items/`
    pub async fn invalidate_prefix(&self, prefix: &str) {
        self.entries.lock().await.retain(|k, _| !k.starts_with(prefix));
    }

    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ApiError;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn counted(counter: &AtomicUsize, value: Value) -> Result<Option<Value>> {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Some(value))
    }

    #[tokio::test]
    async fn test_fresh_value_is_reused() {
        let cache = QueryCache::new(Duration::from_secs(60));
        let calls = AtomicUsize::new(0);

        let first = cache
            .get_or_fetch("/categories/", false, || counted(&calls, json!([1])))
            .await
            .unwrap();
        let second = cache
            .get_or_fetch("/categories/", false, || counted(&calls, json!([2])))
            .await
            .unwrap();

        assert_eq!(*first, json!([1]));
        assert_eq!(*second, json!([1]));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_force_and_expired_entries_refetch() {
        let cache = QueryCache::new(Duration::from_secs(60));
        let calls = AtomicUsize::new(0);

        cache.get_or_fetch("k", false, || counted(&calls, json!(1))).await.unwrap();
        let forced = cache.get_or_fetch("k", true, || counted(&calls, json!(2))).await.unwrap();
        assert_eq!(*forced, json!(2));

        let expired = QueryCache::new(Duration::ZERO);
        expired.get_or_fetch("k", false, || counted(&calls, json!(3))).await.unwrap();
        let again = expired.get_or_fetch("k", false, || counted(&calls, json!(4))).await.unwrap();
        assert_eq!(*again, json!(4));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let cache = QueryCache::new(Duration::from_secs(60));
        let failed = cache
            .get_or_fetch("k", false, || async {
                Err(ApiError::Timeout(Duration::from_secs(10)))
            })
            .await;
        assert!(failed.is_err());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_fetch() {
        let cache = Arc::new(QueryCache::new(Duration::from_secs(60)));
        let calls = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..5 {
            let cache = Arc::clone(&cache);
            let calls = Arc::clone(&calls);
            handles.push(tokio::spawn(async move {
                cache
                    .get_or_fetch("/promotions/", false, || async {
                        calls.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(20)).await;
                        Ok(Some(json!({"results": []})))
                    })
                    .await
                    .unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_key_locks_are_released() {
        let cache = Arc::new(QueryCache::new(Duration::from_secs(60)));
        let calls = Arc::new(AtomicUsize::new(0));

        for id in 0..20 {
            let key = format!("/menu-items/{}/", id);
            cache.get_or_fetch(&key, false, || counted(&calls, json!(id))).await.unwrap();
        }
        let failed = cache
            .get_or_fetch("/reviews/", false, || async { Err(ApiError::Timeout(Duration::from_secs(1))) })
            .await;
        assert!(failed.is_err());
        assert_eq!(cache.in_flight_len().await, 0);

        let mut handles = Vec::new();
        for _ in 0..5 {
            let cache = Arc::clone(&cache);
            let calls = Arc::clone(&calls);
            handles.push(tokio::spawn(async move {
                cache
                    .get_or_fetch("/promotions/", true, || async {
                        calls.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(10)).await;
                        Ok(Some(json!([])))
                    })
                    .await
                    .unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(cache.len().await, 21);
        assert_eq!(cache.in_flight_len().await, 0);
    }

    #[tokio::test]
    async fn test_invalidate_prefix() {
        let cache = QueryCache::default();
        let calls = AtomicUsize::new(0);
        cache.get_or_fetch("/menu-items/1/", false, || counted(&calls, json!(1))).await.unwrap();
        cache.get_or_fetch("/menu-items/2/", false, || counted(&calls, json!(2))).await.unwrap();
        cache.get_or_fetch("/categories/", false, || counted(&calls, json!(3))).await.unwrap();

        cache.invalidate_prefix("/menu-items/").await;
        assert_eq!(cache.len().await, 1);
        assert!(cache.get_fresh("/categories/").await.is_some());
    }
}
