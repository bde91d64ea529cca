//! ISO 4217 currency code validation.
//!
//! Bookings carry the currency they are quoted in; this module provides a
//! lookup of the ISO 4217 codes an agency realistically invoices in —
//! the major settlement currencies plus the markets travel agencies
//! commonly sell into.

/// Check whether `code` is a known ISO 4217 currency code.
pub fn is_known_currency_code(code: &str) -> bool {
    CURRENCY_CODES.binary_search(&code).is_ok()
}

/// Sorted list of ISO 4217 currency codes accepted on bookings.
/// Sorted for binary search.
static CURRENCY_CODES: &[&str] = &[
    "AED", // UAE Dirham
    "AUD", // Australian Dollar
    "BDT", // Bangladeshi Taka
    "BHD", // Bahraini Dinar
    "CAD", // Canadian Dollar
    "CHF", // Swiss Franc
    "CNY", // Chinese Yuan
    "CZK", // Czech Koruna
    "DKK", // Danish Krone
    "EGP", // Egyptian Pound
    "EUR", // Euro
    "GBP", // Pound Sterling
    "HKD", // Hong Kong Dollar
    "HUF", // Hungarian Forint
    "IDR", // Indonesian Rupiah
    "ILS", // Israeli Shekel
    "INR", // Indian Rupee
    "JOD", // Jordanian Dinar
    "JPY", // Japanese Yen
    "KES", // Kenyan Shilling
    "KRW", // South Korean Won
    "KWD", // Kuwaiti Dinar
    "LKR", // Sri Lankan Rupee
    "MAD", // Moroccan Dirham
    "MXN", // Mexican Peso
    "MYR", // Malaysian Ringgit
    "NGN", // Nigerian Naira
    "NOK", // Norwegian Krone
    "NPR", // Nepalese Rupee
    "NZD", // New Zealand Dollar
    "OMR", // Omani Rial
    "PHP", // Philippine Peso
    "PKR", // Pakistani Rupee
    "PLN", // Polish Zloty
    "QAR", // Qatari Riyal
    "RON", // Romanian Leu
    "SAR", // Saudi Riyal
    "SEK", // Swedish Krona
    "SGD", // Singapore Dollar
    "THB", // Thai Baht
    "TRY", // Turkish Lira
    "TWD", // New Taiwan Dollar
    "TZS", // Tanzanian Shilling
    "UAH", // Ukrainian Hryvnia
    "USD", // US Dollar
    "VND", // Vietnamese Dong
    "ZAR", // South African Rand
];
