//! Core booking types, quote math, reference numbering, and credit terms.
//!
//! This module provides the foundational types for travel-agency
//! back-office documents: the quote accumulator behind the booking form,
//! the `PREFIX-YY-BATCH-SEQ` reference numbering scheme, and the
//! credit-term date arithmetic.

mod builder;
mod currencies;
mod error;
pub mod format;
mod numbering;
mod quote;
mod terms;
mod types;
mod validation;

pub use builder::*;
pub use currencies::is_known_currency_code;
pub use error::*;
pub use format::{SeparatorStyle, format_display_date, format_money, storage_date};
pub use numbering::*;
pub use quote::*;
pub use terms::*;
pub use types::*;
pub use validation::*;
