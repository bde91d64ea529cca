//! Persistence-facing allocation and submission.
//!
//! The remote data service is abstracted behind [`BookingStore`]; this
//! module owns the read-max-then-increment reference allocation, its
//! degraded fallback, and the submit flow with retry-on-conflict. The
//! store is assumed to enforce a unique constraint on the reference
//! column — duplicate inserts must surface as
//! [`StoreError::DuplicateReference`].

mod allocator;
mod memory;
mod submit;

pub use allocator::{Allocation, ReferenceAllocator};
pub use memory::MemoryStore;
pub use submit::{SubmitError, SubmitOutcome, submit_booking, submit_booking_retaining};

use thiserror::Error;

use crate::core::{Booking, ReferenceNumber};

/// Errors surfaced by a [`BookingStore`] implementation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The reference lookup query failed (network or store error).
    #[error("reference lookup failed: {0}")]
    Lookup(String),

    /// The insert violated the unique constraint on the reference column.
    #[error("reference number already exists: {0}")]
    DuplicateReference(String),

    /// The insert failed for any other reason.
    #[error("booking insert failed: {0}")]
    Insert(String),
}

/// Identifier pair returned by a successful insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingReceipt {
    /// Store-assigned record id.
    pub id: u64,
    /// The reference number the booking was persisted under.
    pub reference: ReferenceNumber,
}

/// The persistence layer, as seen by the booking core.
pub trait BookingStore {
    /// The single highest existing reference number whose value starts
    /// with `prefix` followed by a dash, or `None` when no booking of
    /// that category exists yet.
    fn find_max_reference(&self, prefix: &str) -> Result<Option<String>, StoreError>;

    /// Persist one booking. The caller supplies the reference number it
    /// already allocated; the store must reject a duplicate reference
    /// with [`StoreError::DuplicateReference`].
    fn insert_booking(&self, booking: &Booking) -> Result<BookingReceipt, StoreError>;
}
