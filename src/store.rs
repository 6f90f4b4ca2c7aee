//! In-memory product store.
//!
//! Holds every created [`ProductRecord`] for the lifetime of the process (or
//! until [`ProductStore::clear`]) and answers uniqueness queries over the
//! (seller.id, marketplace, title) triple.
//!
//! Uniqueness is checked by scanning, not enforced by a map key. Callers that
//! need check-then-insert to be atomic take [`ProductStore::lock`] and run
//! both through the returned [`Records`] guard.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use time::OffsetDateTime;

use crate::product::{NewProduct, ProductKey, ProductRecord};

#[derive(Debug, Default)]
pub struct ProductStore {
    records: Mutex<Vec<ProductRecord>>,
}

/// Exclusive access to the stored records. Dropping it releases the store.
#[derive(Debug)]
pub struct Records<'a> {
    inner: MutexGuard<'a, Vec<ProductRecord>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the store. A poisoned lock is recovered: the records are a plain
    /// Vec and a panicking holder cannot leave a partial record behind.
    pub fn lock(&self) -> Records<'_> {
        Records {
            inner: self
                .records
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        }
    }

    pub fn is_duplicate(&self, key: &ProductKey) -> bool {
        self.lock().is_duplicate(key)
    }

    pub fn insert(&self, product: NewProduct) -> ProductRecord {
        self.lock().insert(product)
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Records<'_> {
    /// Returns true if any stored record has exactly this triple.
    pub fn is_duplicate(&self, key: &ProductKey) -> bool {
        self.inner.iter().any(|record| record.matches(key))
    }

    /// Stores `product` under a fresh id with both timestamps set to now.
    ///
    /// Does not check for duplicates; call [`Records::is_duplicate`] first
    /// while holding the same guard.
    pub fn insert(&mut self, product: NewProduct) -> ProductRecord {
        let now = OffsetDateTime::now_utc();
        let (key, fields) = product.into_parts();

        let record = ProductRecord {
            id: generate_id(now),
            key,
            fields,
            created_at: now,
            updated_at: now,
        };

        self.inner.push(record.clone());
        record
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// `product-<unix millis>-<suffix>`, where the suffix encodes a process-wide
/// counter so two ids never collide, even within the same millisecond.
fn generate_id(now: OffsetDateTime) -> String {
    static NEXT_PRODUCT: AtomicU64 = AtomicU64::new(1);
    let seq = NEXT_PRODUCT.fetch_add(1, Ordering::Relaxed);

    let generator = block_id::BlockId::new(block_id::Alphabet::alphanumeric(), 4321, 6);
    let suffix = generator
        .encode_string(seq)
        .unwrap_or_else(|| seq.to_string());

    let millis = now.unix_timestamp_nanos() / 1_000_000;
    format!("product-{}-{}", millis, suffix)
}
