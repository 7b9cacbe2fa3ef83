//! Error types for the keystash crate
//!
//! This module contains all error types that can be returned by cache operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Connection error: {0}")]
    Connection(String),
}
