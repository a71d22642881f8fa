//! In-memory training store, mainly for tests and ephemeral deployments.

use parking_lot::RwLock;

use crate::error::StoreError;
use crate::models::TrainingExample;

use super::TrainingStore;

/// Training store backed by a process-local vector.
#[derive(Debug, Default)]
pub struct MemoryStore {
    examples: RwLock<Vec<TrainingExample>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TrainingStore for MemoryStore {
    fn append(&self, example: TrainingExample) -> Result<(), StoreError> {
        self.examples.write().push(example);
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<TrainingExample>, StoreError> {
        Ok(self.examples.read().clone())
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.examples.read().len())
    }
}
