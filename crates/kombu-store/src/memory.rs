//! In-memory document store.

use crate::{CandidateFilter, Document, DocumentStore, Result, StoreError};
use kombu_vector::QuantizedVector;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// Thread-safe in-memory [`DocumentStore`].
///
/// Documents live in a `HashMap` behind an `RwLock`; candidate listings are
/// materialized per call in ascending id order. Suited to tests, demos, and
/// moderate corpora that fit in memory.
pub struct MemoryStore {
    dimension: usize,
    docs: RwLock<HashMap<u64, Document>>,
}

impl MemoryStore {
    /// Create an empty store accepting embeddings of the given width.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            docs: RwLock::new(HashMap::new()),
        }
    }

    /// Embedding width this store accepts.
    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

impl DocumentStore for MemoryStore {
    fn put(&self, doc: Document) -> Result<()> {
        if doc.embedding.dimension() != self.dimension {
            return Err(StoreError::DimensionMismatch {
                expected: self.dimension,
                actual: doc.embedding.dimension(),
            });
        }

        debug!(id = doc.id, owner = doc.owner, "put document");
        self.docs.write().insert(doc.id, doc);
        Ok(())
    }

    fn get(&self, id: u64) -> Option<Document> {
        self.docs.read().get(&id).cloned()
    }

    fn delete(&self, id: u64) -> bool {
        let removed = self.docs.write().remove(&id).is_some();
        if removed {
            debug!(id, "delete document");
        }
        removed
    }

    fn candidates(&self, filter: CandidateFilter) -> Vec<(u64, QuantizedVector)> {
        let docs = self.docs.read();
        let mut out: Vec<(u64, QuantizedVector)> = docs
            .values()
            .filter(|doc| filter.matches(doc))
            .map(|doc| (doc.id, doc.embedding.clone()))
            .collect();
        out.sort_by_key(|(id, _)| *id);
        out
    }

    fn len(&self) -> usize {
        self.docs.read().len()
    }
}
