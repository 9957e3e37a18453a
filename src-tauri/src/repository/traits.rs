//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for list persistence.
//! Implementations can use a JSON file, in-memory, etc.

use async_trait::async_trait;
use crate::domain::{DomainResult, Item};

/// Store for the whole item list, saved and loaded wholesale
///
/// All operations are async to support various backends.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Persist the full list, replacing any previous contents
    async fn save(&self, items: &[Item]) -> DomainResult<()>;

    /// Load the previously persisted list, or `None` if nothing was saved yet
    async fn load(&self) -> DomainResult<Option<Vec<Item>>>;
}
