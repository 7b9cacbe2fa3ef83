//! Cache access trait
//!
//! Components that need cache access take this trait instead of the concrete
//! client, so a test can substitute an in-memory fake.

use crate::client::CacheClient;
use crate::errors::CacheError;
use crate::value::CacheValue;
use async_trait::async_trait;

/// Minimal cache surface: liveness plus read, write-with-expiry, delete.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Whether the connection to the store is believed to be live
    fn is_alive(&self) -> bool;

    /// Read the value stored under `key`
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store `value` under `key`, expiring after `duration_secs` seconds
    async fn set(
        &self,
        key: &str,
        value: CacheValue,
        duration_secs: u64,
    ) -> Result<(), CacheError>;

    /// Delete the entry stored under `key`
    async fn del(&self, key: &str) -> Result<(), CacheError>;
}

#[async_trait]
impl Cache for CacheClient {
    fn is_alive(&self) -> bool {
        CacheClient::is_alive(self)
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        CacheClient::get(self, key).await
    }

    async fn set(
        &self,
        key: &str,
        value: CacheValue,
        duration_secs: u64,
    ) -> Result<(), CacheError> {
        CacheClient::set(self, key, value, duration_secs).await
    }

    async fn del(&self, key: &str) -> Result<(), CacheError> {
        CacheClient::del(self, key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory stand-in used where a component takes `&dyn Cache`
    struct FakeCache {
        entries: Mutex<HashMap<String, String>>,
    }

    impl FakeCache {
        fn new() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl Cache for FakeCache {
        fn is_alive(&self) -> bool {
            true
        }

        async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn set(
            &self,
            key: &str,
            value: CacheValue,
            _duration_secs: u64,
        ) -> Result<(), CacheError> {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn del(&self, key: &str) -> Result<(), CacheError> {
            self.entries.lock().unwrap().remove(key);
            Ok(())
        }
    }

    async fn store_session(cache: &dyn Cache, token: &str, user: &str) -> Result<(), CacheError> {
        cache.set(token, CacheValue::from(user), 3600).await
    }

    #[tokio::test]
    async fn fake_substitutes_for_the_client() {
        let cache = FakeCache::new();

        store_session(&cache, "session:42", "user-7")
            .await
            .expect("fake set succeeds");
        assert_eq!(
            cache.get("session:42").await.unwrap(),
            Some("user-7".to_string())
        );

        cache.del("session:42").await.unwrap();
        assert_eq!(cache.get("session:42").await.unwrap(), None);
        assert!(cache.is_alive());
    }

    #[test]
    fn client_is_object_safe_behind_the_trait() {
        let client =
            CacheClient::new(config::CacheConfig::default()).expect("default URL parses");
        let _boxed: Box<dyn Cache> = Box::new(client);
    }
}
