use buchung::core::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// --- Fare tier edits ---

#[test]
fn fare_total_follows_last_edit() {
    let mut sheet = QuoteSheet::new();
    sheet.set_fare_field(FareCategory::Adult, FareField::SalePrice, "450.50");
    sheet.set_fare_field(FareCategory::Adult, FareField::PaxCount, "3");
    assert_eq!(sheet.fare_total(FareCategory::Adult), dec!(1351.50));

    // Changing pax keeps the stored sale price.
    sheet.set_fare_field(FareCategory::Adult, FareField::PaxCount, "2");
    assert_eq!(sheet.fare_total(FareCategory::Adult), dec!(901.00));

    // Changing price keeps the stored pax count.
    sheet.set_fare_field(FareCategory::Adult, FareField::SalePrice, "500");
    assert_eq!(sheet.fare_total(FareCategory::Adult), dec!(1000));
}

#[test]
fn net_price_does_not_affect_total() {
    let mut sheet = QuoteSheet::new();
    sheet.set_fare_field(FareCategory::Child, FareField::SalePrice, "200");
    sheet.set_fare_field(FareCategory::Child, FareField::PaxCount, "2");
    sheet.set_fare_field(FareCategory::Child, FareField::NetPrice, "180");
    assert_eq!(sheet.fare_total(FareCategory::Child), dec!(400));
    assert_eq!(sheet.fare(FareCategory::Child).net_price, dec!(180));
}

#[test]
fn garbage_input_computes_as_zero_but_text_kept() {
    let mut sheet = QuoteSheet::new();
    sheet.set_fare_field(FareCategory::Adult, FareField::SalePrice, "12x.50");
    sheet.set_fare_field(FareCategory::Adult, FareField::PaxCount, "2");

    assert_eq!(sheet.fare_total(FareCategory::Adult), Decimal::ZERO);
    // The verbatim text stays for the user to correct.
    assert_eq!(sheet.fare_text(FareCategory::Adult, FareField::SalePrice), "12x.50");
}

#[test]
fn negative_input_clamps_to_zero() {
    let mut sheet = QuoteSheet::new();
    sheet.set_fare_field(FareCategory::Adult, FareField::SalePrice, "-300");
    sheet.set_fare_field(FareCategory::Adult, FareField::PaxCount, "-2");
    assert_eq!(sheet.fare(FareCategory::Adult).sale_price, Decimal::ZERO);
    assert_eq!(sheet.fare(FareCategory::Adult).pax_count, 0);
}

// --- Extra lines ---

#[test]
fn last_extra_row_cannot_be_removed() {
    let mut sheet = QuoteSheet::new();
    assert_eq!(sheet.extra_count(), 1);
    assert!(!sheet.remove_extra_line(0));
    assert_eq!(sheet.extra_count(), 1);

    sheet.add_extra_line();
    sheet.add_extra_line();
    assert_eq!(sheet.extra_count(), 3);
    assert!(sheet.remove_extra_line(1));
    assert_eq!(sheet.extra_count(), 2);
    assert!(sheet.remove_extra_line(0));
    assert!(!sheet.remove_extra_line(0));
    assert_eq!(sheet.extra_count(), 1);
}

#[test]
fn remove_out_of_range_is_noop() {
    let mut sheet = QuoteSheet::new();
    sheet.add_extra_line();
    assert!(!sheet.remove_extra_line(7));
    assert_eq!(sheet.extra_count(), 2);
}

#[test]
fn extra_totals_use_quantity() {
    let mut sheet = QuoteSheet::new();
    sheet.set_extra_field(0, ExtraField::Description, "Lounge pass");
    sheet.set_extra_field(0, ExtraField::SalePrice, "35.25");
    sheet.set_extra_field(0, ExtraField::Quantity, "4");
    assert_eq!(sheet.extra_total(0), Some(dec!(141.00)));

    assert!(!sheet.set_extra_field(5, ExtraField::SalePrice, "10"));
    assert_eq!(sheet.extra_text(0, ExtraField::Quantity), Some("4"));
}

// --- Aggregates ---

#[test]
fn subtotal_is_exact_sum_of_all_lines() {
    let mut sheet = QuoteSheet::new();
    sheet.set_fare_field(FareCategory::Adult, FareField::SalePrice, "950");
    sheet.set_fare_field(FareCategory::Adult, FareField::PaxCount, "2");
    sheet.set_fare_field(FareCategory::Child, FareField::SalePrice, "712.35");
    sheet.set_fare_field(FareCategory::Child, FareField::PaxCount, "1");
    sheet.set_fare_field(FareCategory::Infant, FareField::SalePrice, "95.10");
    sheet.set_fare_field(FareCategory::Infant, FareField::PaxCount, "1");
    sheet.set_extra_field(0, ExtraField::Description, "Baggage");
    sheet.set_extra_field(0, ExtraField::SalePrice, "42.55");
    sheet.add_extra_line();
    sheet.set_extra_field(1, ExtraField::Description, "Meal");
    sheet.set_extra_field(1, ExtraField::SalePrice, "18.40");
    sheet.set_extra_field(1, ExtraField::Quantity, "3");

    let expected = dec!(1900) + dec!(712.35) + dec!(95.10) + dec!(42.55) + dec!(55.20);
    assert_eq!(sheet.subtotal(), expected);
}

#[test]
fn vat_seven_percent_rounds_half_up() {
    let mut sheet = QuoteSheet::new();
    sheet.set_extra_field(0, ExtraField::Description, "Service");
    sheet.set_extra_field(0, ExtraField::SalePrice, "99.95");

    // 99.95 * 0.07 = 6.9965 → 7.00
    assert_eq!(sheet.vat_amount(dec!(7)), dec!(7.00));
    assert_eq!(sheet.grand_total(dec!(7)), dec!(106.95));
}

#[test]
fn vat_zero_is_zero() {
    let mut sheet = QuoteSheet::new();
    sheet.set_extra_field(0, ExtraField::SalePrice, "1234.56");
    assert_eq!(sheet.vat_amount(dec!(0)), dec!(0));
    assert_eq!(sheet.grand_total(dec!(0)), dec!(1234.56));
}

#[test]
fn read_order_does_not_matter() {
    let mut sheet = QuoteSheet::new();
    sheet.set_fare_field(FareCategory::Adult, FareField::SalePrice, "100.333");
    sheet.set_fare_field(FareCategory::Adult, FareField::PaxCount, "3");

    let grand_first = sheet.grand_total(dec!(5));
    let vat = sheet.vat_amount(dec!(5));
    let subtotal = sheet.subtotal();
    assert_eq!(grand_first, sheet.grand_total(dec!(5)));
    // 300.999 → VAT 15.05, grand = 301.00 + 15.05
    assert_eq!(subtotal, dec!(300.999));
    assert_eq!(vat, dec!(15.05));
    assert_eq!(grand_first, dec!(316.05));
}

#[test]
fn snapshot_matches_reads() {
    let mut sheet = QuoteSheet::new();
    sheet.set_fare_field(FareCategory::Adult, FareField::SalePrice, "800");
    sheet.set_fare_field(FareCategory::Adult, FareField::PaxCount, "2");
    sheet.set_extra_field(0, ExtraField::Description, "Insurance");
    sheet.set_extra_field(0, ExtraField::SalePrice, "75");

    let snap = sheet.snapshot(dec!(7));
    assert_eq!(snap.subtotal, dec!(1675.00));
    assert_eq!(snap.vat_amount, sheet.vat_amount(dec!(7)));
    assert_eq!(snap.grand_total, snap.subtotal + snap.vat_amount);
}
