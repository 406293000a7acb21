//! Sort-attribute records for client-side fast sorting
//!
//! Each entry of the sortable list carries one transient attribute string:
//!
//! ```text
//! id&{...};datecreated&dd.MM.yyyy;dateupdated&dd.MM.yyyy
//! ```
//!
//! Client comparators parse the record positionally, so the date format is
//! load-bearing: fixed two-digit day and month, four-digit year, in
//! day-month-year order. Never a locale-sensitive format.
//!
//! Only the id round-trips into storage; the dates exist purely so the
//! reordered list can be re-sorted without another repository round trip.

use chrono::NaiveDate;
use fieldkit_core::{Item, ItemId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Date format of the record, day-month-year with fixed widths
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// One decoded sort-attribute record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortAttr {
    /// Item identifier; the only field that round-trips into storage
    pub id: ItemId,
    /// Creation date
    pub created: NaiveDate,
    /// Last-update date
    pub updated: NaiveDate,
}

impl SortAttr {
    /// Build the record for an item
    pub fn for_item(item: &Item) -> Self {
        Self {
            id: item.id,
            created: item.created,
            updated: item.updated,
        }
    }

    /// Encode to the attribute string
    pub fn encode(&self) -> String {
        format!(
            "id&{};datecreated&{};dateupdated&{}",
            self.id,
            self.created.format(DATE_FORMAT),
            self.updated.format(DATE_FORMAT),
        )
    }

    /// Decode an attribute string
    ///
    /// Fields split on `;`, name and value on the first `&`; surrounding
    /// whitespace around a field is tolerated. Returns `None` when the id or
    /// either date is missing or malformed; a lossy consumer simply skips
    /// such records.
    pub fn decode(record: &str) -> Option<Self> {
        let mut id = None;
        let mut created = None;
        let mut updated = None;
        for field in record.split(';') {
            let (name, value) = field.trim().split_once('&')?;
            match name {
                "id" => id = ItemId::parse(value),
                "datecreated" => created = parse_date(value),
                "dateupdated" => updated = parse_date(value),
                _ => {}
            }
        }
        Some(Self {
            id: id?,
            created: created?,
            updated: updated?,
        })
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Order display names ascending, case-insensitively
///
/// Mirrors the client's by-name comparator (upper-cased locale compare).
pub fn by_name(a: &str, b: &str) -> Ordering {
    a.to_uppercase().cmp(&b.to_uppercase())
}

/// Order records by creation date, most recent first
///
/// Ties are not broken; relative order of equal dates is up to the caller's
/// sort stability.
pub fn by_created_desc(a: &SortAttr, b: &SortAttr) -> Ordering {
    b.created.cmp(&a.created)
}

/// Order records by update date, most recent first
pub fn by_updated_desc(a: &SortAttr, b: &SortAttr) -> Ordering {
    b.updated.cmp(&a.updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn attr(id: &str, created: NaiveDate, updated: NaiveDate) -> SortAttr {
        SortAttr {
            id: ItemId::parse(id).unwrap(),
            created,
            updated,
        }
    }

    const A: &str = "{11111111-1111-1111-1111-111111111111}";

    #[test]
    fn test_encode_format() {
        let record = attr(A, date(2020, 1, 5), date(2020, 2, 1)).encode();
        assert_eq!(
            record,
            format!("id&{};datecreated&05.01.2020;dateupdated&01.02.2020", A)
        );
    }

    #[test]
    fn test_encode_is_day_month_year() {
        // 2020-01-05 must render day-first, never month-first or ISO.
        let record = attr(A, date(2020, 1, 5), date(2020, 1, 5)).encode();
        assert!(record.contains("datecreated&05.01.2020"));
        assert!(!record.contains("01.05.2020"));
        assert!(!record.contains("2020-01-05"));
    }

    #[test]
    fn test_decode_round_trip() {
        let original = attr(A, date(2019, 12, 31), date(2021, 6, 15));
        assert_eq!(SortAttr::decode(&original.encode()), Some(original));
    }

    #[test]
    fn test_decode_positional_dates() {
        let record = format!("id&{};datecreated&03.04.2020;dateupdated&04.03.2020", A);
        let decoded = SortAttr::decode(&record).unwrap();
        assert_eq!(decoded.created, date(2020, 4, 3));
        assert_eq!(decoded.updated, date(2020, 3, 4));
    }

    #[test]
    fn test_decode_tolerates_field_whitespace() {
        let record = format!("id&{}; datecreated&01.01.2020;dateupdated&02.01.2020", A);
        assert!(SortAttr::decode(&record).is_some());
    }

    #[test]
    fn test_decode_rejects_incomplete_records() {
        assert!(SortAttr::decode("").is_none());
        assert!(SortAttr::decode(&format!("id&{}", A)).is_none());
        assert!(SortAttr::decode("datecreated&01.01.2020;dateupdated&01.01.2020").is_none());
        assert!(SortAttr::decode(&format!(
            "id&{};datecreated&2020-01-01;dateupdated&01.01.2020",
            A
        ))
        .is_none());
    }

    #[test]
    fn test_for_item() {
        let item = fieldkit_core::Item::new(ItemId::parse(A).unwrap(), "Home")
            .with_dates(date(2020, 1, 1), date(2020, 2, 2));
        let record = SortAttr::for_item(&item);
        assert_eq!(record.id, item.id);
        assert_eq!(record.created, item.created);
        assert_eq!(record.updated, item.updated);
    }

    #[test]
    fn test_serde_round_trip() {
        let original = attr(A, date(2020, 1, 1), date(2020, 2, 2));
        let json = serde_json::to_string(&original).unwrap();
        let restored: SortAttr = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn test_by_name_case_insensitive() {
        assert_eq!(by_name("apple", "BANANA"), Ordering::Less);
        assert_eq!(by_name("Cherry", "banana"), Ordering::Greater);
        assert_eq!(by_name("same", "SAME"), Ordering::Equal);
    }

    #[test]
    fn test_by_created_desc() {
        let older = attr(A, date(2020, 1, 1), date(2020, 1, 1));
        let newer = attr(A, date(2021, 1, 1), date(2020, 1, 1));
        assert_eq!(by_created_desc(&newer, &older), Ordering::Less);
        assert_eq!(by_created_desc(&older, &newer), Ordering::Greater);
    }

    #[test]
    fn test_by_updated_desc() {
        let older = attr(A, date(2020, 1, 1), date(2020, 1, 1));
        let newer = attr(A, date(2020, 1, 1), date(2022, 5, 5));
        assert_eq!(by_updated_desc(&newer, &older), Ordering::Less);
    }
}
