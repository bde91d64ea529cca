use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::BuchungError;
use super::types::DocumentCategory;

/// Highest sequence value within one `(prefix, year, batch)` scope.
/// When exceeded the batch counter increments and the sequence restarts.
pub const SEQ_MAX: u32 = 9999;

/// A human-readable booking reference: `PREFIX-YY-BATCH-SEQ`.
///
/// `SEQ` is zero-padded to 4 digits, `BATCH` is unpadded, `YY` is the
/// two-digit issue year. Examples: `FT-25-1-0042`, `VC-24-2-0001`.
///
/// References are allocated once, at booking creation, and never reused —
/// even when the owning booking is later cancelled or deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ReferenceNumber {
    /// Document category (carries the prefix).
    pub category: DocumentCategory,
    /// Two-digit issue year (0–99).
    pub year2: u8,
    /// Batch counter, starting at 1, incremented when `seq` overflows.
    pub batch: u32,
    /// Sequence counter within the batch, 1..=[`SEQ_MAX`].
    pub seq: u32,
}

impl ReferenceNumber {
    /// First reference of a fresh `(category, year)` scope: batch 1, seq 0001.
    pub fn first(category: DocumentCategory, year: i32) -> Self {
        Self {
            category,
            year2: year2_of(year),
            batch: 1,
            seq: 1,
        }
    }

    /// The reference following this one, for a booking issued in `current_year`.
    ///
    /// A year change resets to `(batch 1, seq 0001)`; a sequence overflow
    /// rolls over into the next batch.
    pub fn next(&self, current_year: i32) -> Self {
        if self.year2 != year2_of(current_year) {
            return Self::first(self.category, current_year);
        }
        if self.seq >= SEQ_MAX {
            Self {
                batch: self.batch + 1,
                seq: 1,
                ..*self
            }
        } else {
            Self {
                seq: self.seq + 1,
                ..*self
            }
        }
    }
}

fn year2_of(year: i32) -> u8 {
    year.rem_euclid(100) as u8
}

impl fmt::Display for ReferenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:02}-{}-{:04}",
            self.category.prefix(),
            self.year2,
            self.batch,
            self.seq
        )
    }
}

impl FromStr for ReferenceNumber {
    type Err = BuchungError;

    /// Strict parse of `PREFIX-YY-BATCH-SEQ`. All structural invariants are
    /// checked: known prefix, 2-digit year, batch >= 1, exactly 4-digit
    /// sequence in 1..=[`SEQ_MAX`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |msg: &str| BuchungError::Numbering(format!("'{s}': {msg}"));

        let parts: Vec<&str> = s.split('-').collect();
        let &[prefix, yy, batch, seq] = parts.as_slice() else {
            return Err(err("expected four dash-separated parts"));
        };

        let category = DocumentCategory::from_prefix(prefix)
            .ok_or_else(|| err("unknown document prefix"))?;

        if yy.len() != 2 || !yy.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err("year must be exactly two digits"));
        }
        let year2: u8 = yy.parse().map_err(|_| err("invalid year"))?;

        if batch.is_empty() || !batch.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err("batch must be a positive integer"));
        }
        if batch.len() > 1 && batch.starts_with('0') {
            return Err(err("batch must not be zero-padded"));
        }
        let batch: u32 = batch.parse().map_err(|_| err("batch out of range"))?;
        if batch == 0 {
            return Err(err("batch must be at least 1"));
        }

        if seq.len() != 4 || !seq.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err("sequence must be exactly four digits"));
        }
        let seq: u32 = seq.parse().map_err(|_| err("invalid sequence"))?;
        if seq == 0 {
            return Err(err("sequence must be at least 0001"));
        }

        Ok(Self {
            category,
            year2,
            batch,
            seq,
        })
    }
}

impl From<ReferenceNumber> for String {
    fn from(r: ReferenceNumber) -> Self {
        r.to_string()
    }
}

impl TryFrom<String> for ReferenceNumber {
    type Error = BuchungError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_padding() {
        let r = ReferenceNumber::first(DocumentCategory::FlightTicket, 2025);
        assert_eq!(r.to_string(), "FT-25-1-0001");

        let r = ReferenceNumber {
            category: DocumentCategory::Voucher,
            year2: 25,
            batch: 12,
            seq: 42,
        };
        assert_eq!(r.to_string(), "VC-25-12-0042");
    }

    #[test]
    fn sequential_next() {
        let r = ReferenceNumber::first(DocumentCategory::FlightTicket, 2025);
        assert_eq!(r.next(2025).to_string(), "FT-25-1-0002");
        assert_eq!(r.next(2025).next(2025).to_string(), "FT-25-1-0003");
    }

    #[test]
    fn batch_rollover_at_seq_max() {
        let r: ReferenceNumber = "FT-25-1-9999".parse().unwrap();
        assert_eq!(r.next(2025).to_string(), "FT-25-2-0001");
    }

    #[test]
    fn year_change_resets_batch_and_seq() {
        let r: ReferenceNumber = "FT-24-3-0050".parse().unwrap();
        assert_eq!(r.next(2025).to_string(), "FT-25-1-0001");
    }

    #[test]
    fn parse_roundtrip() {
        for s in ["FT-25-1-0001", "VC-24-17-9999", "DP-00-1-0007"] {
            let r: ReferenceNumber = s.parse().unwrap();
            assert_eq!(r.to_string(), s);
        }
    }

    #[test]
    fn parse_rejects_malformed() {
        for s in [
            "",
            "FT",
            "FT-25-1",
            "FT-25-1-0001-9",
            "XX-25-1-0001",  // unknown prefix
            "FT-2025-1-0001", // four-digit year
            "FT-25-0-0001",  // batch zero
            "FT-25-02-0001", // zero-padded batch
            "FT-25-1-001",   // sequence not four digits
            "FT-25-1-00011", // sequence too long
            "FT-25-1-0000",  // sequence zero
            "FT-25--1-0001",
            "ft-25-1-0001",
        ] {
            assert!(s.parse::<ReferenceNumber>().is_err(), "accepted {s:?}");
        }
    }
}
