use rust_decimal::Decimal;

use super::error::ValidationError;
use super::quote;
use super::types::*;

/// Validate a booking before submission.
/// Returns all validation errors found (not just the first).
pub fn validate_booking(booking: &Booking) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if booking.customer.trim().is_empty() {
        errors.push(ValidationError::new(
            "customer",
            "customer name must not be empty",
        ));
    }

    if booking.currency_code.trim().is_empty() {
        errors.push(ValidationError::new(
            "currency_code",
            "currency code must not be empty",
        ));
    } else if booking.currency_code.len() != 3 {
        errors.push(ValidationError::new(
            "currency_code",
            "currency code must be 3 characters (ISO 4217)",
        ));
    } else if !super::currencies::is_known_currency_code(&booking.currency_code) {
        errors.push(ValidationError::new(
            "currency_code",
            format!(
                "currency code '{}' is not a known ISO 4217 code",
                booking.currency_code
            ),
        ));
    }

    for (category, tier) in FareCategory::ALL.iter().zip(booking.fares.iter()) {
        validate_fare(tier, category, &mut errors);
    }

    for (i, extra) in booking.extras.iter().enumerate() {
        validate_extra(extra, i, &mut errors);
    }

    // A booking with no passengers and no extras has nothing to invoice.
    let has_pax = booking.fares.iter().any(|t| t.pax_count > 0);
    if !has_pax && booking.extras.is_empty() {
        errors.push(ValidationError::new(
            "fares",
            "booking must have at least one passenger or extra item",
        ));
    }

    errors.extend(validate_arithmetic(booking));

    errors
}

/// Validate the totals snapshot against a recomputation from the line data.
pub fn validate_arithmetic(booking: &Booking) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let Some(totals) = &booking.totals else {
        errors.push(ValidationError::new(
            "totals",
            "totals must be calculated before validation",
        ));
        return errors;
    };

    let expected = quote::totals_of(&booking.fares, &booking.extras, totals.vat_percent);

    if totals.subtotal != expected.subtotal {
        errors.push(ValidationError::new(
            "totals.subtotal",
            format!(
                "subtotal {} does not match sum of line totals {}",
                totals.subtotal, expected.subtotal
            ),
        ));
    }

    if totals.vat_amount != expected.vat_amount {
        errors.push(ValidationError::new(
            "totals.vat_amount",
            format!(
                "VAT amount {} does not match {}% of subtotal ({})",
                totals.vat_amount, totals.vat_percent, expected.vat_amount
            ),
        ));
    }

    if totals.grand_total != totals.subtotal + totals.vat_amount {
        errors.push(ValidationError::new(
            "totals.grand_total",
            format!(
                "grand total {} does not match subtotal {} + VAT {}",
                totals.grand_total, totals.subtotal, totals.vat_amount
            ),
        ));
    }

    if totals.vat_percent.is_sign_negative() {
        errors.push(ValidationError::new(
            "totals.vat_percent",
            "VAT percentage must not be negative",
        ));
    }

    errors
}

fn validate_fare(tier: &FareTier, category: &FareCategory, errors: &mut Vec<ValidationError>) {
    let prefix = format!("fares.{}", category.label().to_lowercase());

    if tier.net_price.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("{prefix}.net_price"),
            "net price must not be negative",
        ));
    }
    if tier.sale_price.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("{prefix}.sale_price"),
            "sale price must not be negative",
        ));
    }
}

fn validate_extra(extra: &ExtraLine, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("extras[{index}]");

    if extra.net_price.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("{prefix}.net_price"),
            "net price must not be negative",
        ));
    }
    if extra.sale_price.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("{prefix}.sale_price"),
            "sale price must not be negative",
        ));
    }
    if extra.quantity == 0 {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            "quantity must be at least 1",
        ));
    }
    if extra.description.trim().is_empty() && extra.total() > Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.description"),
            "description is required for a charged item",
        ));
    }
}
