//! Convenience re-exports for common keystash usage
//!
//! This prelude module re-exports the most commonly used items, making it
//! easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use keystash::prelude::*;
//!
//! // Now you have access to all the common keystash types and traits
//! ```

// Core keystash components
pub use crate::client::CacheClient;
pub use crate::errors::CacheError;
pub use crate::traits::Cache;
pub use crate::value::CacheValue;

// Re-export centralized config
pub use config::{AppConfig, CacheConfig, ConfigError};

// Common external dependencies
pub use async_trait::async_trait;
pub use redis;
pub use tokio;
