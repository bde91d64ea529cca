use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::{ExtraLine, FareCategory, FareTier, QuoteTotals};

/// Fare tier fields editable from the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FareField {
    NetPrice,
    SalePrice,
    PaxCount,
}

/// Extra line fields editable from the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraField {
    Description,
    NetPrice,
    SalePrice,
    Quantity,
}

/// A numeric form cell: the verbatim text the user typed plus the value
/// used for computation. Non-numeric or empty input computes as zero but
/// the text is kept for redisplay until the user changes it; negative
/// input is clamped to zero.
#[derive(Debug, Clone, Default)]
struct MoneyCell {
    raw: String,
    value: Decimal,
}

impl MoneyCell {
    fn set(&mut self, raw: &str) {
        self.raw = raw.to_string();
        self.value = parse_money(raw);
    }
}

#[derive(Debug, Clone)]
struct CountCell {
    raw: String,
    value: u32,
}

impl CountCell {
    fn new(value: u32) -> Self {
        Self {
            raw: value.to_string(),
            value,
        }
    }

    fn set(&mut self, raw: &str) {
        self.raw = raw.to_string();
        self.value = parse_count(raw);
    }
}

#[derive(Debug, Clone)]
struct FareRow {
    net: MoneyCell,
    sale: MoneyCell,
    pax: CountCell,
}

impl Default for FareRow {
    fn default() -> Self {
        Self {
            net: MoneyCell::default(),
            sale: MoneyCell::default(),
            pax: CountCell::new(0),
        }
    }
}

#[derive(Debug, Clone)]
struct ExtraRow {
    description: String,
    net: MoneyCell,
    sale: MoneyCell,
    qty: CountCell,
}

impl Default for ExtraRow {
    fn default() -> Self {
        Self {
            description: String::new(),
            net: MoneyCell::default(),
            sale: MoneyCell::default(),
            qty: CountCell::new(1),
        }
    }
}

/// Stateful quote accumulator backing one booking-entry form.
///
/// Holds exactly three fare tiers (adult/child/infant) and at least one
/// extra line row. Every mutation is synchronous; totals are pure reads
/// over the current state.
///
/// Rounding policy: per-line totals and the subtotal accumulate as exact
/// [`Decimal`] values; the VAT amount and grand total round half-up to
/// two decimal places when produced, and display formatting rounds the
/// rest. No per-line pre-rounding, so cent drift cannot accumulate.
#[derive(Debug, Clone)]
pub struct QuoteSheet {
    fares: [FareRow; 3],
    extras: Vec<ExtraRow>,
}

impl Default for QuoteSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteSheet {
    /// Empty sheet: three zeroed fare tiers and one blank extra row.
    pub fn new() -> Self {
        Self {
            fares: Default::default(),
            extras: vec![ExtraRow::default()],
        }
    }

    // --- fare tiers ---

    /// Update one field of a fare tier from free-text input. The tier's
    /// total is derived from the stored sale price and pax count, so it
    /// follows immediately.
    pub fn set_fare_field(&mut self, category: FareCategory, field: FareField, raw: &str) {
        let row = &mut self.fares[category.index()];
        match field {
            FareField::NetPrice => row.net.set(raw),
            FareField::SalePrice => row.sale.set(raw),
            FareField::PaxCount => row.pax.set(raw),
        }
    }

    /// Current values of one fare tier.
    pub fn fare(&self, category: FareCategory) -> FareTier {
        let row = &self.fares[category.index()];
        FareTier {
            net_price: row.net.value,
            sale_price: row.sale.value,
            pax_count: row.pax.value,
        }
    }

    /// Verbatim text of one fare tier field, for redisplay.
    pub fn fare_text(&self, category: FareCategory, field: FareField) -> &str {
        let row = &self.fares[category.index()];
        match field {
            FareField::NetPrice => &row.net.raw,
            FareField::SalePrice => &row.sale.raw,
            FareField::PaxCount => &row.pax.raw,
        }
    }

    /// Line total of one fare tier: `sale_price × pax_count`, exact.
    pub fn fare_total(&self, category: FareCategory) -> Decimal {
        let row = &self.fares[category.index()];
        row.sale.value * Decimal::from(row.pax.value)
    }

    /// Snapshot of all three fare tiers in [`FareCategory::ALL`] order.
    pub fn fares(&self) -> [FareTier; 3] {
        FareCategory::ALL.map(|c| self.fare(c))
    }

    // --- extra lines ---

    /// Number of extra line rows (always at least 1).
    pub fn extra_count(&self) -> usize {
        self.extras.len()
    }

    /// Append a blank extra row.
    pub fn add_extra_line(&mut self) {
        self.extras.push(ExtraRow::default());
    }

    /// Remove one extra row. A no-op (returning `false`) when the index is
    /// out of range or when removal would leave zero rows — the form
    /// always presents at least one editable row.
    pub fn remove_extra_line(&mut self, index: usize) -> bool {
        if self.extras.len() <= 1 || index >= self.extras.len() {
            return false;
        }
        self.extras.remove(index);
        true
    }

    /// Update one field of an extra row from free-text input. Returns
    /// `false` when the index is out of range.
    pub fn set_extra_field(&mut self, index: usize, field: ExtraField, raw: &str) -> bool {
        let Some(row) = self.extras.get_mut(index) else {
            return false;
        };
        match field {
            ExtraField::Description => row.description = raw.to_string(),
            ExtraField::NetPrice => row.net.set(raw),
            ExtraField::SalePrice => row.sale.set(raw),
            ExtraField::Quantity => row.qty.set(raw),
        }
        true
    }

    /// Current values of one extra row.
    pub fn extra(&self, index: usize) -> Option<ExtraLine> {
        self.extras.get(index).map(|row| ExtraLine {
            description: row.description.clone(),
            net_price: row.net.value,
            sale_price: row.sale.value,
            quantity: row.qty.value,
        })
    }

    /// Verbatim text of one extra row field, for redisplay.
    pub fn extra_text(&self, index: usize, field: ExtraField) -> Option<&str> {
        self.extras.get(index).map(|row| match field {
            ExtraField::Description => row.description.as_str(),
            ExtraField::NetPrice => row.net.raw.as_str(),
            ExtraField::SalePrice => row.sale.raw.as_str(),
            ExtraField::Quantity => row.qty.raw.as_str(),
        })
    }

    /// Line total of one extra row: `sale_price × quantity`, exact.
    pub fn extra_total(&self, index: usize) -> Option<Decimal> {
        self.extras
            .get(index)
            .map(|row| row.sale.value * Decimal::from(row.qty.value))
    }

    /// Snapshot of all extra rows.
    pub fn extras(&self) -> Vec<ExtraLine> {
        (0..self.extras.len()).filter_map(|i| self.extra(i)).collect()
    }

    // --- derived totals ---

    /// Pre-tax subtotal: exact sum of all fare tier and extra line totals.
    pub fn subtotal(&self) -> Decimal {
        let fares: Decimal = FareCategory::ALL.iter().map(|c| self.fare_total(*c)).sum();
        let extras: Decimal = self
            .extras
            .iter()
            .map(|row| row.sale.value * Decimal::from(row.qty.value))
            .sum();
        fares + extras
    }

    /// VAT amount for the given percentage, rounded half-up to 2dp.
    pub fn vat_amount(&self, vat_percent: Decimal) -> Decimal {
        round_half_up(self.subtotal() * vat_percent / dec!(100), 2)
    }

    /// Grand total = subtotal + VAT, at 2dp.
    pub fn grand_total(&self, vat_percent: Decimal) -> Decimal {
        round_half_up(self.subtotal(), 2) + self.vat_amount(vat_percent)
    }

    /// Totals snapshot for submission.
    pub fn snapshot(&self, vat_percent: Decimal) -> QuoteTotals {
        totals_of(&self.fares(), &self.extras(), vat_percent)
    }
}

/// Compute the quote totals for a set of fare tiers and extra lines.
pub fn totals_of(fares: &[FareTier; 3], extras: &[ExtraLine], vat_percent: Decimal) -> QuoteTotals {
    let exact: Decimal = fares.iter().map(FareTier::total).sum::<Decimal>()
        + extras.iter().map(ExtraLine::total).sum::<Decimal>();
    let subtotal = round_half_up(exact, 2);
    let vat_amount = round_half_up(exact * vat_percent / dec!(100), 2);
    QuoteTotals {
        subtotal,
        vat_percent,
        vat_amount,
        grand_total: subtotal + vat_amount,
    }
}

/// Round a Decimal to `dp` decimal places using half-up (commercial rounding).
pub(crate) fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Lenient money parse for free-text fields: empty or non-numeric input
/// computes as zero, grouping commas are tolerated, negatives clamp to zero.
fn parse_money(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();
    match Decimal::from_str(&cleaned) {
        Ok(v) if v.is_sign_negative() => Decimal::ZERO,
        Ok(v) => v,
        Err(_) => Decimal::ZERO,
    }
}

/// Lenient count parse: non-numeric or negative input computes as zero.
fn parse_count(raw: &str) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(n) if n >= 0 => n.min(i64::from(u32::MAX)) as u32,
        _ => 0,
    }
}
