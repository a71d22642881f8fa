//! The learned-knowledge store: an append-only log of past extractions.

mod jsonl;
mod memory;

pub use jsonl::JsonlStore;
pub use memory::MemoryStore;

use crate::error::StoreError;
use crate::models::TrainingExample;

/// Capability trait for the training store.
///
/// The store is an ordered, append-only sequence: examples are never
/// deleted or mutated, insertion order is preserved, and there is no
/// pruning or deduplication. Implementations must make `append` durable
/// before returning and atomic with respect to concurrent appends, and
/// `load_all` must never surface a partially written example.
pub trait TrainingStore: Send + Sync {
    /// Append one example to the log.
    fn append(&self, example: TrainingExample) -> Result<(), StoreError>;

    /// Load every example in original insertion order.
    fn load_all(&self) -> Result<Vec<TrainingExample>, StoreError>;

    /// Number of stored examples.
    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.load_all()?.len())
    }

    /// Distinct non-empty lender codes seen in past extractions,
    /// lower-cased, in first-seen order. Consulted before the static
    /// dictionary during lender resolution.
    fn known_lenders(&self) -> Result<Vec<String>, StoreError> {
        let mut codes = Vec::new();
        for example in self.load_all()? {
            if example.parsed.bank.is_empty() {
                continue;
            }
            let code = example.parsed.bank.to_lowercase();
            if !codes.contains(&code) {
                codes.push(code);
            }
        }
        Ok(codes)
    }
}
