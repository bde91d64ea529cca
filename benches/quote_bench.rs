use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use buchung::core::*;
use buchung::store::{MemoryStore, ReferenceAllocator, submit_booking};

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
}

fn build_sheet(extra_lines: usize) -> QuoteSheet {
    let mut sheet = QuoteSheet::new();
    sheet.set_fare_field(FareCategory::Adult, FareField::SalePrice, "950.50");
    sheet.set_fare_field(FareCategory::Adult, FareField::PaxCount, "2");
    sheet.set_fare_field(FareCategory::Child, FareField::SalePrice, "712.35");
    sheet.set_fare_field(FareCategory::Child, FareField::PaxCount, "1");
    sheet.set_fare_field(FareCategory::Infant, FareField::SalePrice, "95.10");
    sheet.set_fare_field(FareCategory::Infant, FareField::PaxCount, "1");

    for i in 0..extra_lines {
        if i > 0 {
            sheet.add_extra_line();
        }
        sheet.set_extra_field(i, ExtraField::Description, &format!("Extra {i}"));
        sheet.set_extra_field(i, ExtraField::SalePrice, "42.55");
        sheet.set_extra_field(i, ExtraField::Quantity, "2");
    }
    sheet
}

fn bench_quote_recompute(c: &mut Criterion) {
    let small = build_sheet(3);
    let large = build_sheet(200);

    c.bench_function("grand_total_3_extras", |b| {
        b.iter(|| black_box(&small).grand_total(dec!(7)))
    });

    c.bench_function("grand_total_200_extras", |b| {
        b.iter(|| black_box(&large).grand_total(dec!(7)))
    });

    c.bench_function("snapshot_3_extras", |b| {
        b.iter(|| black_box(&small).snapshot(dec!(7)))
    });
}

fn bench_keystroke_edit(c: &mut Criterion) {
    // One keystroke in a price field: mutate, then recompute the totals.
    c.bench_function("edit_and_recompute", |b| {
        let mut sheet = build_sheet(10);
        b.iter(|| {
            sheet.set_fare_field(FareCategory::Adult, FareField::SalePrice, "951.25");
            black_box(sheet.grand_total(dec!(7)))
        })
    });
}

fn bench_allocation(c: &mut Criterion) {
    let store = MemoryStore::new();
    for _ in 0..1000 {
        let booking = BookingBuilder::new(DocumentCategory::FlightTicket, "Bench", test_date())
            .fare(FareCategory::Adult, dec!(500), dec!(600), 1)
            .build()
            .unwrap();
        submit_booking(&store, booking).unwrap();
    }

    c.bench_function("allocate_over_1000_bookings", |b| {
        let allocator = ReferenceAllocator::new(&store);
        b.iter(|| allocator.allocate_on(DocumentCategory::FlightTicket, test_date()))
    });
}

criterion_group!(
    benches,
    bench_quote_recompute,
    bench_keystroke_edit,
    bench_allocation
);
criterion_main!(benches);
