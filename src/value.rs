//! Scalar value type accepted by cache writes
//!
//! The store speaks strings on the wire; this module defines the closed set
//! of scalar kinds a caller may hand to `set` and how each is rendered for
//! transmission. Values always come back from the store as `String`.

use redis::{RedisWrite, ToRedisArgs};
use std::fmt;

/// A scalar cache value: string, integer, float, or boolean.
///
/// Converted to its string form before transmission; there is no type
/// round-trip on read.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for CacheValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheValue::Str(s) => f.write_str(s),
            CacheValue::Int(i) => write!(f, "{i}"),
            CacheValue::Float(x) => write!(f, "{x}"),
            CacheValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl ToRedisArgs for CacheValue {
    fn write_redis_args<W>(&self, out: &mut W)
    where
        W: ?Sized + RedisWrite,
    {
        match self {
            CacheValue::Str(s) => out.write_arg(s.as_bytes()),
            other => out.write_arg(other.to_string().as_bytes()),
        }
    }
}

impl From<&str> for CacheValue {
    fn from(value: &str) -> Self {
        CacheValue::Str(value.to_string())
    }
}

impl From<String> for CacheValue {
    fn from(value: String) -> Self {
        CacheValue::Str(value)
    }
}

impl From<i64> for CacheValue {
    fn from(value: i64) -> Self {
        CacheValue::Int(value)
    }
}

impl From<f64> for CacheValue {
    fn from(value: f64) -> Self {
        CacheValue::Float(value)
    }
}

impl From<bool> for CacheValue {
    fn from(value: bool) -> Self {
        CacheValue::Bool(value)
    }
}
