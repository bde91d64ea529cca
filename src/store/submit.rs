use thiserror::Error;
use tracing::{debug, warn};

use super::{BookingReceipt, BookingStore, ReferenceAllocator, StoreError};
use crate::core::Booking;

/// Bounded number of allocation attempts when inserts keep hitting the
/// reference unique constraint under concurrent sessions.
const MAX_ATTEMPTS: u32 = 3;

/// Successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub receipt: BookingReceipt,
    /// True when reference numbering fell back to degraded (random filler)
    /// mode during any attempt. Must be surfaced to operators.
    pub degraded_numbering: bool,
}

/// Submission failure. Both variants hand the booking back — with its
/// allocated reference retained — so a retry does not require re-entry.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Every allocation attempt collided with an existing reference.
    #[error("no unique reference number obtained after {attempts} attempts")]
    ReferenceExhausted { attempts: u32, booking: Box<Booking> },

    /// The insert failed for a reason other than a reference conflict.
    /// Retry with [`submit_booking_retaining`] — the write may have
    /// partially succeeded, so a fresh number must not be allocated.
    #[error("booking insert failed")]
    Persistence {
        #[source]
        source: StoreError,
        booking: Box<Booking>,
    },
}

impl SubmitError {
    /// The booking as it was when submission failed, for retry.
    pub fn into_booking(self) -> Booking {
        match self {
            Self::ReferenceExhausted { booking, .. } => *booking,
            Self::Persistence { booking, .. } => *booking,
        }
    }
}

/// Allocate a reference number and persist the booking in one flow.
///
/// The reference is allocated exactly once per attempt, never
/// speculatively. When the insert hits the store's unique constraint —
/// another session claimed the same number between our read and write —
/// a fresh number is allocated and the insert retried, up to three
/// attempts. Any other insert failure is returned
/// immediately with the booking (and its number) retained.
pub fn submit_booking<S: BookingStore + ?Sized>(
    store: &S,
    booking: Booking,
) -> Result<SubmitOutcome, SubmitError> {
    let allocator = ReferenceAllocator::new(store);
    let issue_date = booking.issue_date();
    let mut booking = booking;
    let mut degraded = false;
    let mut attempt = 0;

    loop {
        attempt += 1;
        let allocation = allocator.allocate_on(booking.category, issue_date);
        degraded |= allocation.degraded;
        booking.reference = Some(allocation.number);

        match store.insert_booking(&booking) {
            Ok(receipt) => {
                debug!(reference = %receipt.reference, attempt, "booking persisted");
                return Ok(SubmitOutcome {
                    receipt,
                    degraded_numbering: degraded,
                });
            }
            Err(StoreError::DuplicateReference(reference)) if attempt < MAX_ATTEMPTS => {
                warn!(%reference, attempt, "reference conflict, re-allocating");
            }
            Err(StoreError::DuplicateReference(reference)) => {
                warn!(%reference, attempts = MAX_ATTEMPTS, "reference conflicts exhausted");
                return Err(SubmitError::ReferenceExhausted {
                    attempts: MAX_ATTEMPTS,
                    booking: Box::new(booking),
                });
            }
            Err(source) => {
                return Err(SubmitError::Persistence {
                    source,
                    booking: Box::new(booking),
                });
            }
        }
    }
}

/// Retry the insert of a booking whose reference was already allocated by
/// a previous [`submit_booking`] attempt.
///
/// No new number is allocated: after a persistence failure the original
/// write may have partially succeeded, and re-allocating would leak or
/// duplicate numbers. A duplicate-reference error here therefore also
/// surfaces as [`SubmitError::Persistence`] — it may be our own earlier
/// half-write, which a human must reconcile.
pub fn submit_booking_retaining<S: BookingStore + ?Sized>(
    store: &S,
    booking: Booking,
) -> Result<SubmitOutcome, SubmitError> {
    if booking.reference.is_none() {
        return submit_booking(store, booking);
    }

    match store.insert_booking(&booking) {
        Ok(receipt) => {
            debug!(reference = %receipt.reference, "booking persisted on retry");
            Ok(SubmitOutcome {
                receipt,
                degraded_numbering: false,
            })
        }
        Err(source) => Err(SubmitError::Persistence {
            source,
            booking: Box::new(booking),
        }),
    }
}
