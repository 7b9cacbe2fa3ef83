//! # Keystash
//!
//! A small async accessor for a Redis-backed key-value cache: one shared
//! connection, read/write-with-expiry/delete operations, and a best-effort
//! connection-liveness flag. All protocol work is the `redis` crate's;
//! keystash is the thin layer an application hands around.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use keystash::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // REDIS_URL when set, redis://127.0.0.1:6379 otherwise
//!     let client = CacheClient::new(CacheConfig::from_env())?;
//!
//!     client.set("session:42", "user-7", 3600).await?;
//!     let user = client.get("session:42").await?;
//!     println!("session owner: {user:?}");
//!
//!     client.del("session:42").await?;
//!
//!     if !client.is_alive() {
//!         eprintln!("cache connection is down");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Values may be strings, integers, floats, or booleans; the store keeps
//! their string form and reads always return `String`. Entries expire
//! server-side after the duration given to [`CacheClient::set`].

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod client;
pub mod errors;
pub mod prelude;
pub mod traits;
pub mod value;

// Re-export the main public types for convenience
pub use client::CacheClient;
pub use errors::CacheError;
pub use traits::Cache;
pub use value::CacheValue;

// Re-export centralized config
pub use config::{AppConfig, CacheConfig, ConfigError};

// Re-export external dependencies used in public API
pub use async_trait;
pub use redis;
