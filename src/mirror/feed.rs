//! Feed contract consumed by the mirror producer.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::broadcast;

/// A remote collection that can be mirrored locally.
#[async_trait]
pub trait MirrorFeed: Send + Sync + 'static {
    /// Element of the mirrored collection.
    type Item: Clone + Send + Sync + 'static;
    /// Change notice emitted by the backing store.
    type Notice: Clone + Send + 'static;

    /// Subscribes to the store's change notices.
    fn subscribe(&self) -> broadcast::Receiver<Self::Notice>;

    /// Returns `true` when `notice` may affect this collection.
    fn is_relevant(&self, notice: &Self::Notice) -> bool;

    /// Loads the current contents in display order.
    async fn load(&self) -> Result<Vec<Self::Item>, MirrorFeedError>;
}

/// Errors returned while loading a mirrored collection.
#[derive(Debug, Clone, Error)]
pub enum MirrorFeedError {
    /// The backing store failed to answer the query.
    #[error("failed to load collection: {0}")]
    Load(Arc<dyn std::error::Error + Send + Sync>),
}

impl MirrorFeedError {
    /// Wraps a store error.
    pub fn load(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Load(Arc::new(err))
    }
}
