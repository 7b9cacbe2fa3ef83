//! Cache client implementation
//!
//! This module provides the main CacheClient struct
//! for Redis operations and connection liveness tracking.

use crate::errors::CacheError;
use crate::value::CacheValue;
use config::CacheConfig;
use redis::{AsyncCommands, Client};
use std::fmt::Debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Redis-backed cache accessor
///
/// One instance owns one multiplexed connection to the store, shared by
/// every clone. Construct it once at application startup and hand clones to
/// the components that need cache access.
#[derive(Clone)]
pub struct CacheClient {
    client: Arc<Client>,
    config: Arc<CacheConfig>,
    connection: Arc<RwLock<Option<redis::aio::MultiplexedConnection>>>,
    /// Liveness flag. Starts `true` before any connection attempt (assume
    /// healthy until told otherwise) and tracks the most recent
    /// connection-level event observed. Best-effort only: not synchronized
    /// with in-flight calls.
    connected: Arc<AtomicBool>,
}

impl Debug for CacheClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let connection_status = {
            match self.connection.try_read() {
                Ok(handle) => {
                    if handle.is_some() {
                        "established"
                    } else {
                        "not_established"
                    }
                }
                Err(_) => "lock_busy",
            }
        };

        f.debug_struct("CacheClient")
            .field("config", &self.config)
            .field("alive", &self.is_alive())
            .field("connection", &connection_status)
            .finish()
    }
}

impl CacheClient {
    /// Create a new cache client
    ///
    /// Parses the configured URL without touching the network; the
    /// connection itself is established on first use.
    pub fn new(config: CacheConfig) -> Result<Self, CacheError> {
        let client = Client::open(config.redis_url.as_str())?;

        Ok(Self {
            client: Arc::new(client),
            config: Arc::new(config),
            connection: Arc::new(RwLock::new(None)),
            connected: Arc::new(AtomicBool::new(true)),
        })
    }

    /// Get or establish the shared Redis connection
    async fn get_connection(&self) -> Result<redis::aio::MultiplexedConnection, CacheError> {
        let mut handle = self.connection.write().await;

        if handle.is_none() {
            let connection = match self.client.get_multiplexed_async_connection().await {
                Ok(connection) => connection,
                Err(err) => {
                    tracing::error!("redis connection failed: {err}");
                    self.mark_disconnected();
                    return Err(err.into());
                }
            };
            crate::debug_log!("redis connection established to {}", self.config.redis_url);
            self.mark_connected();
            *handle = Some(connection);
        }

        // Safe extraction: we just ensured the handle holds a connection above
        Ok(handle
            .as_ref()
            .ok_or_else(|| CacheError::Connection("Failed to get cached connection".into()))?
            .clone())
    }

    /// Record the outcome of a round trip on the liveness flag
    ///
    /// Any success counts as a connect event. Connection-level failures (IO,
    /// refusal, dropped connection) are logged, downgrade the flag, and drop
    /// the cached handle so the next call dials again; the error itself
    /// always propagates to the caller unwrapped.
    async fn observe<T>(&self, result: redis::RedisResult<T>) -> Result<T, CacheError> {
        match result {
            Ok(value) => {
                self.mark_connected();
                Ok(value)
            }
            Err(err) => {
                if err.is_io_error() || err.is_connection_refusal() || err.is_connection_dropped()
                {
                    tracing::error!("redis connection failed: {err}");
                    self.mark_disconnected();
                    self.connection.write().await.take();
                }
                Err(err.into())
            }
        }
    }

    fn mark_connected(&self) {
        self.connected.store(true, Ordering::Relaxed);
    }

    fn mark_disconnected(&self) {
        self.connected.store(false, Ordering::Relaxed);
    }

    /// Whether the connection to the store is believed to be live
    ///
    /// Synchronous and side-effect free. A `true` result is no guarantee the
    /// next operation succeeds; operations are attempted regardless, so
    /// callers wishing to gate on liveness check this themselves.
    pub fn is_alive(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }

    /// Read the value stored under `key`
    ///
    /// Returns `Ok(None)` when the key is absent or expired. The key is
    /// passed through to the store as-is.
    pub async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.get_connection().await?;

        let value: Option<String> = self.observe(conn.get(key).await).await?;
        Ok(value)
    }

    /// Store `value` under `key`, expiring after `duration_secs` seconds
    ///
    /// TTL validation is the store's own; non-positive durations surface as
    /// the server's error.
    pub async fn set(
        &self,
        key: &str,
        value: impl Into<CacheValue>,
        duration_secs: u64,
    ) -> Result<(), CacheError> {
        let value = value.into();
        let mut conn = self.get_connection().await?;

        let _: () = self.observe(conn.set_ex(key, value, duration_secs).await).await?;
        Ok(())
    }

    /// Delete the entry stored under `key`
    ///
    /// Succeeds whether or not the key existed.
    pub async fn del(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.get_connection().await?;

        let _deleted: i32 = self.observe(conn.del(key).await).await?;
        Ok(())
    }

    /// Check whether `key` currently exists in the store
    pub async fn exists(&self, key: &str) -> Result<bool, CacheError> {
        let mut conn = self.get_connection().await?;

        let exists: bool = self.observe(conn.exists(key).await).await?;
        Ok(exists)
    }

    /// Get the remaining TTL for `key` in seconds
    ///
    /// Server semantics apply: -2 for a missing key, -1 for a key without
    /// expiry.
    pub async fn ttl(&self, key: &str) -> Result<i64, CacheError> {
        let mut conn = self.get_connection().await?;

        let ttl: i64 = self.observe(conn.ttl(key).await).await?;
        Ok(ttl)
    }

    /// Ping the store to check connectivity
    ///
    /// Also the natural way to force eager connection establishment at
    /// startup.
    pub async fn ping(&self) -> Result<String, CacheError> {
        let mut conn = self.get_connection().await?;

        let pong: String = self
            .observe(redis::cmd("PING").query_async(&mut conn).await)
            .await?;
        Ok(pong)
    }

    /// Get current configuration
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }
}
