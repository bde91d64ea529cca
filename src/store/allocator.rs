use chrono::{Datelike, NaiveDate};
use rand::Rng;
use tracing::warn;

use super::BookingStore;
use crate::core::{DocumentCategory, ReferenceNumber, SEQ_MAX};

/// Result of a reference allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    /// The allocated reference number.
    pub number: ReferenceNumber,
    /// True when the store lookup failed and the number carries a random
    /// sequence filler. Degraded numbers keep the form usable but are not
    /// guaranteed unique; callers must surface this to operators.
    pub degraded: bool,
}

/// Allocates the next reference number for a document category.
///
/// Reads the current per-prefix maximum from the store and increments it.
/// The read-then-write pair is not atomic across concurrent sessions, so
/// the store's unique constraint is the actual correctness guarantee —
/// see [`submit_booking`](super::submit_booking) for the retry side.
pub struct ReferenceAllocator<'a, S: BookingStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: BookingStore + ?Sized> ReferenceAllocator<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Allocate the next reference for a booking issued today.
    pub fn allocate(&self, category: DocumentCategory) -> Allocation {
        self.allocate_on(category, chrono::Local::now().date_naive())
    }

    /// Allocate the next reference for a booking issued on `date`.
    ///
    /// The allocator only computes the number; persisting it (and thereby
    /// claiming it) is the caller's write.
    pub fn allocate_on(&self, category: DocumentCategory, date: NaiveDate) -> Allocation {
        let year = date.year();
        match self.store.find_max_reference(category.prefix()) {
            Ok(None) => Allocation {
                number: ReferenceNumber::first(category, year),
                degraded: false,
            },
            Ok(Some(max)) => match max.parse::<ReferenceNumber>() {
                Ok(current) => Allocation {
                    number: current.next(year),
                    degraded: false,
                },
                Err(err) => {
                    warn!(
                        reference = %max,
                        error = %err,
                        "stored maximum reference is malformed, issuing fallback number"
                    );
                    self.fallback(category, year)
                }
            },
            Err(err) => {
                warn!(
                    prefix = category.prefix(),
                    error = %err,
                    "reference lookup failed, issuing fallback number"
                );
                self.fallback(category, year)
            }
        }
    }

    /// Degraded mode: a random 4-digit sequence filler in batch 1. Keeps
    /// the UI usable when the store cannot be queried; uniqueness is not
    /// guaranteed and a human must reconcile later.
    fn fallback(&self, category: DocumentCategory, year: i32) -> Allocation {
        let seq = rand::thread_rng().gen_range(1..=SEQ_MAX);
        Allocation {
            number: ReferenceNumber {
                seq,
                ..ReferenceNumber::first(category, year)
            },
            degraded: true,
        }
    }
}
