//! Write-buffered store.
//!
//! Collects writes over a parent store and applies them only on
//! [`BufferedStore::flush`]. Dropping the buffer discards the writes, so a
//! rejected message leaves the parent untouched.

use crate::domain::errors::KVStoreError;
use crate::ports::outbound::{BatchOperation, KeyValueStore};
use std::collections::BTreeMap;
use tracing::debug;

/// Write buffer layered over a parent store.
pub struct BufferedStore<'a, S: KeyValueStore + ?Sized> {
    parent: &'a mut S,
    writes: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl<'a, S: KeyValueStore + ?Sized> BufferedStore<'a, S> {
    /// Start buffering writes over `parent`.
    pub fn new(parent: &'a mut S) -> Self {
        Self {
            parent,
            writes: BTreeMap::new(),
        }
    }

    /// Number of keys written but not yet flushed.
    pub fn pending_writes(&self) -> usize {
        self.writes.len()
    }

    /// Apply buffered writes to the parent as a single atomic batch.
    ///
    /// Returns the number of keys written. On error the parent is unchanged.
    pub fn flush(self) -> Result<usize, KVStoreError> {
        let Self { parent, writes } = self;
        let count = writes.len();
        if count == 0 {
            return Ok(0);
        }
        let batch = writes
            .into_iter()
            .map(|(key, value)| BatchOperation::Put { key, value })
            .collect();
        parent.atomic_batch_write(batch)?;
        debug!(keys = count, "Flushed buffered writes");
        Ok(count)
    }

    /// Drop buffered writes without touching the parent.
    pub fn discard(self) -> usize {
        let count = self.writes.len();
        if count > 0 {
            debug!(keys = count, "Discarded buffered writes");
        }
        count
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for BufferedStore<'_, S> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        if let Some(value) = self.writes.get(key) {
            return Ok(Some(value.clone()));
        }
        self.parent.get(key)
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        self.writes.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        for op in operations {
            match op {
                BatchOperation::Put { key, value } => {
                    self.writes.insert(key, value);
                }
            }
        }
        Ok(())
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        if self.writes.contains_key(key) {
            return Ok(true);
        }
        self.parent.exists(key)
    }
}
