use async_trait::async_trait;
use folio_model::{ContactMessage, PortfolioProfile};
use thiserror::Error;

pub mod fake;
pub mod redis_backend;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store connection is not live")]
    NotLive,

    #[error("store backend error: {0}")]
    Backend(String),

    #[error("document codec error: {0}")]
    Codec(String),
}

/// The document store as seen by the handlers: connect-state, one read per
/// document kind, one insert. Implementations own their connection
/// lifecycle; handlers never retry.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    fn backend_tag(&self) -> &'static str {
        "unknown"
    }

    /// Whether the backing connection currently answers. Degrading reads
    /// to fallback data and refusing admin listings both key off this.
    async fn is_live(&self) -> bool;

    /// The most recently created profile document, if any.
    async fn latest_profile(&self) -> Result<Option<PortfolioProfile>, StoreError>;

    async fn insert_contact(&self, contact: &ContactMessage) -> Result<(), StoreError>;

    /// Up to `limit` contact messages, newest first.
    async fn recent_contacts(&self, limit: usize) -> Result<Vec<ContactMessage>, StoreError>;

    async fn close(&self) {}
}
