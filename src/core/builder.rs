use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::BuchungError;
use super::quote::{self, QuoteSheet};
use super::types::*;
use super::validation;

/// Builder for assembling a valid booking document.
///
/// ```
/// use buchung::core::*;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let booking = BookingBuilder::new(
///     DocumentCategory::FlightTicket,
///     "Al Noor Travels",
///     NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
/// )
/// .fare(FareCategory::Adult, dec!(820), dec!(950), 2)
/// .add_extra("Excess baggage", dec!(40), dec!(60), 1)
/// .vat_percent(dec!(7))
/// .credit_days(14)
/// .build()
/// .unwrap();
///
/// assert_eq!(booking.totals.as_ref().unwrap().subtotal, dec!(1960.00));
/// ```
pub struct BookingBuilder {
    category: DocumentCategory,
    customer: String,
    issue_date: NaiveDate,
    passenger_name: Option<String>,
    route: Option<String>,
    supplier: Option<String>,
    fares: [FareTier; 3],
    extras: Vec<ExtraLine>,
    vat_percent: Decimal,
    credit_days: u32,
    currency_code: String,
    notes: Vec<String>,
}

impl BookingBuilder {
    pub fn new(
        category: DocumentCategory,
        customer: impl Into<String>,
        issue_date: NaiveDate,
    ) -> Self {
        Self {
            category,
            customer: customer.into(),
            issue_date,
            passenger_name: None,
            route: None,
            supplier: None,
            fares: Default::default(),
            extras: Vec::new(),
            vat_percent: Decimal::ZERO,
            credit_days: 0,
            currency_code: "USD".to_string(),
            notes: Vec::new(),
        }
    }

    pub fn passenger(mut self, name: impl Into<String>) -> Self {
        self.passenger_name = Some(name.into());
        self
    }

    pub fn route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self
    }

    pub fn vat_percent(mut self, percent: Decimal) -> Self {
        self.vat_percent = percent;
        self
    }

    pub fn credit_days(mut self, days: u32) -> Self {
        self.credit_days = days;
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Set one fare tier.
    pub fn fare(mut self, category: FareCategory, net: Decimal, sale: Decimal, pax: u32) -> Self {
        self.fares[category.index()] = FareTier {
            net_price: net,
            sale_price: sale,
            pax_count: pax,
        };
        self
    }

    /// Append an extra line item.
    pub fn add_extra(
        mut self,
        description: impl Into<String>,
        net: Decimal,
        sale: Decimal,
        quantity: u32,
    ) -> Self {
        self.extras.push(ExtraLine {
            description: description.into(),
            net_price: net,
            sale_price: sale,
            quantity,
        });
        self
    }

    /// Take fare tiers and extra lines from an edited quote sheet.
    pub fn sheet(mut self, sheet: &QuoteSheet) -> Self {
        self.fares = sheet.fares();
        self.extras = sheet.extras();
        self
    }

    /// Build the booking, calculating totals and running validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Booking, BuchungError> {
        // Input limits to prevent abuse
        if self.extras.len() > 500 {
            return Err(BuchungError::Builder(
                "booking cannot have more than 500 extra lines".into(),
            ));
        }
        if self.customer.len() > 200 {
            return Err(BuchungError::Builder(
                "customer name cannot exceed 200 characters".into(),
            ));
        }
        if self.notes.len() > 100 {
            return Err(BuchungError::Builder(
                "booking cannot have more than 100 notes".into(),
            ));
        }

        let booking = self.assemble();

        let errors = validation::validate_booking(&booking);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(BuchungError::Validation(msg));
        }

        Ok(booking)
    }

    /// Build without validation — useful for testing or importing external data.
    pub fn build_unchecked(self) -> Booking {
        self.assemble()
    }

    fn assemble(self) -> Booking {
        // Untouched placeholder rows from the form carry no information.
        let extras: Vec<ExtraLine> = self
            .extras
            .into_iter()
            .filter(|e| {
                !(e.description.trim().is_empty()
                    && e.net_price.is_zero()
                    && e.sale_price.is_zero())
            })
            .collect();

        let totals = quote::totals_of(&self.fares, &extras, self.vat_percent);

        Booking {
            reference: None,
            category: self.category,
            customer: self.customer,
            passenger_name: self.passenger_name,
            route: self.route,
            supplier: self.supplier,
            fares: self.fares,
            extras,
            totals: Some(totals),
            credit_term: CreditTerm {
                issue_date: self.issue_date,
                credit_days: self.credit_days,
            },
            currency_code: self.currency_code,
            notes: self.notes,
        }
    }
}
