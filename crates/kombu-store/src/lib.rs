//! Document persistence collaborator for Kombu.
//!
//! The search kernel never talks to storage directly; it consumes candidate
//! streams produced by a [`DocumentStore`]. This crate defines that contract
//! and ships [`MemoryStore`], a thread-safe in-memory implementation. Any
//! backend (relational, embedded, remote) can substitute behind the trait as
//! long as it hands back `(id, vector)` pairs in a stable order.

mod memory;

pub use memory::MemoryStore;

use kombu_vector::QuantizedVector;

/// A stored document with its quantized embedding.
#[derive(Debug, Clone)]
pub struct Document {
    /// Unique document id.
    pub id: u64,
    /// Owning tenant.
    pub owner: u64,
    /// Title text.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Embedding quantized under the global convention.
    pub embedding: QuantizedVector,
}

/// Scope restriction for candidate listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateFilter {
    /// Every stored document.
    All,
    /// Documents belonging to one owner.
    Owner(u64),
}

impl CandidateFilter {
    fn matches(&self, doc: &Document) -> bool {
        match self {
            Self::All => true,
            Self::Owner(owner) => doc.owner == *owner,
        }
    }
}

/// Storage contract supplying candidate sets to the search layer.
///
/// Implementations hold whatever resource they need (a connection, a file
/// handle, a map) scoped to each call; configuration such as location or
/// credentials is passed at construction, never read from ambient global
/// state.
pub trait DocumentStore: Send + Sync {
    /// Insert or replace a document.
    fn put(&self, doc: Document) -> Result<()>;

    /// Fetch a document by id.
    fn get(&self, id: u64) -> Option<Document>;

    /// Remove a document. Returns whether it existed.
    fn delete(&self, id: u64) -> bool;

    /// List `(id, embedding)` pairs matching `filter`, in ascending id order.
    ///
    /// Ascending id order keeps downstream tie-breaking reproducible from
    /// call to call.
    fn candidates(&self, filter: CandidateFilter) -> Vec<(u64, QuantizedVector)>;

    /// Number of stored documents.
    fn len(&self) -> usize;

    /// Whether the store holds no documents.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Document embedding width disagrees with the store's dimension.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
