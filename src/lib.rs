//! # buchung
//!
//! Travel-agency booking core: human-readable reference numbering,
//! per-passenger quote aggregation with VAT, and credit-term date
//! arithmetic, plus a store-facing allocation and submission flow.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating
//! point. Rounding is deferred to the final displayed output (half-up,
//! two decimal places), so per-line cent drift cannot accumulate.
//!
//! ## Quick Start
//!
//! ```rust
//! use buchung::core::*;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let mut sheet = QuoteSheet::new();
//! sheet.set_fare_field(FareCategory::Adult, FareField::SalePrice, "950");
//! sheet.set_fare_field(FareCategory::Adult, FareField::PaxCount, "2");
//! sheet.set_extra_field(0, ExtraField::Description, "Excess baggage");
//! sheet.set_extra_field(0, ExtraField::SalePrice, "60");
//!
//! assert_eq!(sheet.subtotal(), dec!(1960));
//! assert_eq!(sheet.vat_amount(dec!(7)), dec!(137.20));
//!
//! let booking = BookingBuilder::new(
//!     DocumentCategory::FlightTicket,
//!     "Al Noor Travels",
//!     NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
//! )
//! .sheet(&sheet)
//! .vat_percent(dec!(7))
//! .credit_days(14)
//! .build()
//! .unwrap();
//!
//! assert_eq!(booking.totals.as_ref().unwrap().grand_total, dec!(2097.20));
//! assert_eq!(
//!     booking.credit_term.due_date(),
//!     NaiveDate::from_ymd_opt(2025, 3, 24).unwrap()
//! );
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Booking types, quote math, numbering, credit terms, validation |
//! | `store` | Reference allocator and booking submission against a [`store::BookingStore`] |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "store")]
pub mod store;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
