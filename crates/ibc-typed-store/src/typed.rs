//! # Typed Store
//!
//! A single logical value of type `T` backed by one entry of a byte store.
//!
//! The handle borrows the store (through any `Deref` to a `KeyValueStore`),
//! so it is cheap to build per access and is never persisted itself. A
//! shared borrow gives read access; a mutable borrow also enables `set`.
//!
//! Every call performs exactly one store read or write. Nothing is cached,
//! so results always reflect the current store state.

use crate::domain::errors::{display_key, StoreError};
use crate::ports::outbound::{Codec, KeyValueStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

/// Typed view over one key of a byte-oriented store.
pub struct TypedStore<B, C, T> {
    store: B,
    codec: C,
    key: Vec<u8>,
    _value: PhantomData<fn() -> T>,
}

impl<B, C, T> TypedStore<B, C, T>
where
    B: Deref,
    B::Target: KeyValueStore,
    C: Codec,
    T: Serialize + DeserializeOwned,
{
    /// Bind `store`, `codec` and `key`.
    pub fn new(store: B, codec: C, key: impl Into<Vec<u8>>) -> Self {
        Self {
            store,
            codec,
            key: key.into(),
            _value: PhantomData,
        }
    }

    /// The key this handle is bound to.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// True iff the underlying key exists.
    pub fn has(&self) -> Result<bool, StoreError> {
        Ok(self.store.exists(&self.key)?)
    }

    /// Decoded value, or `None` if the key is absent.
    ///
    /// # Errors
    /// - `Decode` if the stored bytes are not a valid `T` (corruption)
    /// - `Backend` if the store fails
    pub fn get(&self) -> Result<Option<T>, StoreError> {
        let Some(bytes) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        self.codec
            .decode(&bytes)
            .map(Some)
            .map_err(|e| {
                tracing::error!(
                    key = %display_key(&self.key),
                    error = %e,
                    "Stored value failed to decode"
                );
                StoreError::Decode {
                    key: display_key(&self.key),
                    message: e.to_string(),
                }
            })
    }

    /// Decoded value, treating absence as an invariant violation.
    ///
    /// Use [`get`](Self::get) or [`has`](Self::has) where absence is expected.
    pub fn must_get(&self) -> Result<T, StoreError> {
        self.get()?.ok_or_else(|| StoreError::Missing {
            key: display_key(&self.key),
        })
    }
}

impl<B, C, T> TypedStore<B, C, T>
where
    B: DerefMut,
    B::Target: KeyValueStore,
    C: Codec,
    T: Serialize + DeserializeOwned,
{
    /// Encode and write `value`, overwriting any previous value.
    ///
    /// The value is fully encoded before the store is touched, so an
    /// encoding failure leaves the store unchanged.
    pub fn set(&mut self, value: &T) -> Result<(), StoreError> {
        let bytes = self.codec.encode(value).map_err(|e| StoreError::Encode {
            key: display_key(&self.key),
            message: e.to_string(),
        })?;
        self.store.put(&self.key, &bytes)?;
        tracing::debug!(key = %display_key(&self.key), bytes = bytes.len(), "Stored value");
        Ok(())
    }
}
