use super::{DocumentStore, StoreError};
use async_trait::async_trait;
use folio_model::{ContactMessage, PortfolioProfile};
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info};

/// Documents live as JSON values in two Redis lists. Inserts LPUSH, so
/// index 0 is always the most recently created document and LRANGE yields
/// newest-first without sorting.
pub struct RedisDocumentStore {
    client: redis::Client,
    prefix: String,
    command_timeout: Duration,
}

impl RedisDocumentStore {
    pub fn new(url: &str, prefix: &str, command_timeout: Duration) -> Result<Self, StoreError> {
        let client = redis::Client::open(url).map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(Self {
            client,
            prefix: prefix.to_string(),
            command_timeout,
        })
    }

    fn contacts_key(&self) -> String {
        format!("{}:contacts", self.prefix)
    }

    fn profiles_key(&self) -> String {
        format!("{}:profiles", self.prefix)
    }

    async fn connection(&self) -> Result<MultiplexedConnection, StoreError> {
        timeout(
            self.command_timeout,
            self.client.get_multiplexed_async_connection(),
        )
        .await
        .map_err(|_| StoreError::Backend("store connect timeout".to_string()))?
        .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn bounded<T>(
        &self,
        op: impl std::future::Future<Output = redis::RedisResult<T>>,
    ) -> Result<T, StoreError> {
        timeout(self.command_timeout, op)
            .await
            .map_err(|_| StoreError::Backend("store command timeout".to_string()))?
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}

#[async_trait]
impl DocumentStore for RedisDocumentStore {
    fn backend_tag(&self) -> &'static str {
        "redis"
    }

    async fn is_live(&self) -> bool {
        let Ok(mut conn) = self.connection().await else {
            return false;
        };
        let cmd = redis::cmd("PING");
        let reply: Result<String, StoreError> = self.bounded(cmd.query_async(&mut conn)).await;
        match reply {
            Ok(pong) => pong == "PONG",
            Err(err) => {
                debug!("store ping failed: {err}");
                false
            }
        }
    }

    async fn latest_profile(&self) -> Result<Option<PortfolioProfile>, StoreError> {
        let mut conn = self.connection().await?;
        let raw: Option<String> = self.bounded(conn.lindex(self.profiles_key(), 0)).await?;
        match raw {
            Some(doc) => serde_json::from_str(&doc)
                .map(Some)
                .map_err(|e| StoreError::Codec(e.to_string())),
            None => Ok(None),
        }
    }

    async fn insert_contact(&self, contact: &ContactMessage) -> Result<(), StoreError> {
        let payload =
            serde_json::to_string(contact).map_err(|e| StoreError::Codec(e.to_string()))?;
        let mut conn = self.connection().await?;
        let _: i64 = self.bounded(conn.lpush(self.contacts_key(), payload)).await?;
        Ok(())
    }

    async fn recent_contacts(&self, limit: usize) -> Result<Vec<ContactMessage>, StoreError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let mut conn = self.connection().await?;
        let stop = limit as isize - 1;
        let raw: Vec<String> = self
            .bounded(conn.lrange(self.contacts_key(), 0, stop))
            .await?;
        raw.iter()
            .map(|doc| serde_json::from_str(doc).map_err(|e| StoreError::Codec(e.to_string())))
            .collect()
    }

    async fn close(&self) {
        // Multiplexed connections are dropped with the client; nothing to
        // flush, but the shutdown path is logged for operators.
        info!("closing redis document store");
    }
}
