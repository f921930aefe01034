//! Redis-backed link repository.
//!
//! Each record is a Redis hash at `{prefix}{code}` with four fields:
//!
//! | field       | encoding              |
//! |-------------|-----------------------|
//! | `url`       | string                |
//! | `code`      | string                |
//! | `clicks`    | decimal integer       |
//! | `is_active` | `1` / `0`             |
//!
//! `HGETALL` on a missing key yields an empty map, which is decoded as
//! `None`. A non-empty hash missing any field is a store error, never a
//! record.

use super::error::StoreError;
use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, map_redis_error};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, Script, aio::ConnectionManager};
use std::collections::HashMap;
use tracing::{debug, info};

const FIELD_URL: &str = "url";
const FIELD_CODE: &str = "code";
const FIELD_CLICKS: &str = "clicks";
const FIELD_IS_ACTIVE: &str = "is_active";

/// Increments `clicks` only while `is_active` is truthy. Returns nil otherwise,
/// which also covers a missing key without creating a partial hash.
const RECORD_CLICK_SCRIPT: &str = r#"
local active = redis.call('HGET', KEYS[1], 'is_active')
if active and tonumber(active) ~= 0 then
    return redis.call('HINCRBY', KEYS[1], 'clicks', 1)
end
return false
"#;

/// Redis implementation of [`LinkRepository`].
///
/// Uses `ConnectionManager` for automatic reconnection; clones of the manager
/// share one multiplexed connection.
pub struct RedisLinkRepository {
    client: ConnectionManager,
    key_prefix: String,
    record_click: Script,
}

impl RedisLinkRepository {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `key_prefix` - namespace prepended to every code; empty by default
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, key_prefix: &str) -> Result<Self, StoreError> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url)
            .map_err(|e| StoreError::Connection(format!("Failed to create Redis client: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: key_prefix.to_string(),
            record_click: Script::new(RECORD_CLICK_SCRIPT),
        })
    }

    fn build_key(&self, code: &str) -> String {
        format!("{}{}", self.key_prefix, code)
    }
}

/// Encodes a link as the full field set written by `HSET`.
fn encode_link(link: &Link) -> [(&'static str, String); 4] {
    [
        (FIELD_URL, link.url.clone()),
        (FIELD_CODE, link.code.clone()),
        (FIELD_CLICKS, link.clicks.to_string()),
        (FIELD_IS_ACTIVE, if link.is_active { "1" } else { "0" }.to_string()),
    ]
}

/// Decodes an `HGETALL` reply. An empty map means the key does not exist.
fn decode_link(key: &str, mut fields: HashMap<String, String>) -> Result<Option<Link>, StoreError> {
    if fields.is_empty() {
        return Ok(None);
    }

    let mut take = |field: &'static str| {
        fields.remove(field).ok_or_else(|| StoreError::MissingField {
            key: key.to_string(),
            field,
        })
    };

    let url = take(FIELD_URL)?;
    let code = take(FIELD_CODE)?;
    let clicks_raw = take(FIELD_CLICKS)?;
    let is_active_raw = take(FIELD_IS_ACTIVE)?;

    let clicks = clicks_raw
        .trim()
        .parse::<u64>()
        .map_err(|_| StoreError::InvalidField {
            key: key.to_string(),
            field: FIELD_CLICKS,
            value: clicks_raw.clone(),
        })?;

    let is_active = is_active_raw
        .trim()
        .parse::<i64>()
        .map(|v| v != 0)
        .map_err(|_| StoreError::InvalidField {
            key: key.to_string(),
            field: FIELD_IS_ACTIVE,
            value: is_active_raw.clone(),
        })?;

    Ok(Some(Link {
        code,
        url,
        clicks,
        is_active,
    }))
}

#[async_trait]
impl LinkRepository for RedisLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let key = self.build_key(code);
        let mut conn = self.client.clone();

        let fields: HashMap<String, String> =
            conn.hgetall(&key).await.map_err(map_redis_error)?;

        let link = decode_link(&key, fields)?;
        debug!(code, found = link.is_some(), "Redis HGETALL");

        Ok(link)
    }

    async fn save(&self, link: &Link) -> Result<(), AppError> {
        let key = self.build_key(&link.code);
        let items = encode_link(link);
        let mut conn = self.client.clone();

        let _: () = conn
            .hset_multiple(&key, &items[..])
            .await
            .map_err(map_redis_error)?;

        debug!(code = %link.code, clicks = link.clicks, is_active = link.is_active, "Redis HSET");
        Ok(())
    }

    async fn record_click(&self, code: &str) -> Result<Option<u64>, AppError> {
        let key = self.build_key(code);
        let mut conn = self.client.clone();

        let clicks: Option<u64> = self
            .record_click
            .key(&key)
            .invoke_async(&mut conn)
            .await
            .map_err(map_redis_error)?;

        Ok(clicks)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
