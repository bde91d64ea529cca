use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::numbering::ReferenceNumber;
use super::terms;

/// Back-office document category — determines the reference number prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentCategory {
    /// FT — flight ticket sale.
    FlightTicket,
    /// VC — travel voucher (hotel/package).
    Voucher,
    /// DP — customer deposit.
    Deposit,
    /// TR — organised tour.
    Tour,
    /// VS — visa processing.
    Visa,
    /// OT — other travel service.
    Other,
}

impl DocumentCategory {
    /// Reference number prefix for this category.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::FlightTicket => "FT",
            Self::Voucher => "VC",
            Self::Deposit => "DP",
            Self::Tour => "TR",
            Self::Visa => "VS",
            Self::Other => "OT",
        }
    }

    /// Parse from a reference number prefix.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "FT" => Some(Self::FlightTicket),
            "VC" => Some(Self::Voucher),
            "DP" => Some(Self::Deposit),
            "TR" => Some(Self::Tour),
            "VS" => Some(Self::Visa),
            "OT" => Some(Self::Other),
            _ => None,
        }
    }

    /// Human-readable category name as shown on documents.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FlightTicket => "Flight Ticket",
            Self::Voucher => "Voucher",
            Self::Deposit => "Deposit",
            Self::Tour => "Tour",
            Self::Visa => "Visa",
            Self::Other => "Other Service",
        }
    }
}

/// Passenger fare category. Exactly these three exist on every booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FareCategory {
    Adult,
    Child,
    Infant,
}

impl FareCategory {
    /// All categories in display order.
    pub const ALL: [FareCategory; 3] = [Self::Adult, Self::Child, Self::Infant];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Adult => "Adult",
            Self::Child => "Child",
            Self::Infant => "Infant",
        }
    }

    /// Index into per-booking fare tier storage.
    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Adult => 0,
            Self::Child => 1,
            Self::Infant => 2,
        }
    }
}

/// One fare tier of a booking: per-person pricing times passenger count.
///
/// The line total is derived, never stored — `total()` is always
/// `sale_price × pax_count`, so inputs and total cannot drift apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareTier {
    /// Net cost from the supplier, per passenger.
    pub net_price: Decimal,
    /// Sale price to the customer, per passenger.
    pub sale_price: Decimal,
    /// Number of passengers in this tier.
    pub pax_count: u32,
}

impl FareTier {
    /// Line total: `sale_price × pax_count`.
    pub fn total(&self) -> Decimal {
        self.sale_price * Decimal::from(self.pax_count)
    }
}

/// A free-form ad-hoc charge (baggage fee, service charge, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraLine {
    /// Free-text description of the charge.
    pub description: String,
    /// Net cost from the supplier.
    pub net_price: Decimal,
    /// Sale price to the customer, per unit.
    pub sale_price: Decimal,
    /// Quantity, at least 1 on a finalised booking.
    pub quantity: u32,
}

impl ExtraLine {
    /// Line total: `sale_price × quantity`.
    pub fn total(&self) -> Decimal {
        self.sale_price * Decimal::from(self.quantity)
    }
}

impl Default for ExtraLine {
    fn default() -> Self {
        Self {
            description: String::new(),
            net_price: Decimal::ZERO,
            sale_price: Decimal::ZERO,
            quantity: 1,
        }
    }
}

/// Computed quote snapshot written with the booking at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteTotals {
    /// Sum of all fare tier and extra line totals, before VAT.
    pub subtotal: Decimal,
    /// VAT percentage applied (e.g. 7 for 7%).
    pub vat_percent: Decimal,
    /// VAT amount = subtotal × vat_percent / 100, rounded half-up to 2dp.
    pub vat_amount: Decimal,
    /// Grand total = subtotal + vat_amount.
    pub grand_total: Decimal,
}

/// Payment credit term: issue date plus a number of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditTerm {
    /// Date the document is issued.
    pub issue_date: NaiveDate,
    /// Calendar days of credit granted to the customer.
    pub credit_days: u32,
}

impl CreditTerm {
    /// Payment due date: `issue_date + credit_days` calendar days.
    pub fn due_date(&self) -> NaiveDate {
        terms::due_date_from(self.issue_date, self.credit_days)
    }
}

/// An assembled booking document, ready for persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Allocated reference number. `None` until submission.
    pub reference: Option<ReferenceNumber>,
    /// Document category (determines the reference prefix).
    pub category: DocumentCategory,
    /// Customer the booking is billed to.
    pub customer: String,
    /// Lead passenger name, if different from the customer.
    pub passenger_name: Option<String>,
    /// Route or itinerary summary (e.g. "DXB-LHR-DXB").
    pub route: Option<String>,
    /// Airline or supplier the service is purchased from.
    pub supplier: Option<String>,
    /// The three fare tiers, in [`FareCategory::ALL`] order.
    pub fares: [FareTier; 3],
    /// Ad-hoc extra charges.
    pub extras: Vec<ExtraLine>,
    /// Quote snapshot (set by the builder).
    pub totals: Option<QuoteTotals>,
    /// Payment credit term.
    pub credit_term: CreditTerm,
    /// Booking currency (ISO 4217, e.g. "AED").
    pub currency_code: String,
    /// Free-text notes.
    pub notes: Vec<String>,
}

impl Booking {
    /// Fare tier for one category.
    pub fn fare(&self, category: FareCategory) -> &FareTier {
        &self.fares[category.index()]
    }

    /// Issue date of the booking.
    pub fn issue_date(&self) -> NaiveDate {
        self.credit_term.issue_date
    }
}
