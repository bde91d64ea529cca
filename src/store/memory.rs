use std::cell::RefCell;

use super::{BookingReceipt, BookingStore, StoreError};
use crate::core::{Booking, ReferenceNumber};

/// In-process [`BookingStore`] used by tests and demos.
///
/// Enforces the reference unique constraint the way the production store
/// does, and resolves the per-prefix maximum by parsed comparison (year,
/// then batch, then sequence) rather than raw string ordering, so batch
/// numbers past 9 compare correctly.
#[derive(Debug, Default)]
pub struct MemoryStore {
    bookings: RefCell<Vec<Booking>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted bookings.
    pub fn len(&self) -> usize {
        self.bookings.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.borrow().is_empty()
    }

    /// Clone of one persisted booking, by insertion order.
    pub fn booking(&self, index: usize) -> Option<Booking> {
        self.bookings.borrow().get(index).cloned()
    }
}

impl BookingStore for MemoryStore {
    fn find_max_reference(&self, prefix: &str) -> Result<Option<String>, StoreError> {
        let bookings = self.bookings.borrow();
        let max = bookings
            .iter()
            .filter_map(|b| b.reference)
            .filter(|r| r.category.prefix() == prefix)
            .max_by_key(|r| (r.year2, r.batch, r.seq));
        Ok(max.map(|r| r.to_string()))
    }

    fn insert_booking(&self, booking: &Booking) -> Result<BookingReceipt, StoreError> {
        let reference: ReferenceNumber = booking
            .reference
            .ok_or_else(|| StoreError::Insert("booking has no reference number".into()))?;

        let mut bookings = self.bookings.borrow_mut();
        if bookings.iter().any(|b| b.reference == Some(reference)) {
            return Err(StoreError::DuplicateReference(reference.to_string()));
        }

        bookings.push(booking.clone());
        Ok(BookingReceipt {
            id: bookings.len() as u64,
            reference,
        })
    }
}
