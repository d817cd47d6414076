//! Reduces raw catalog rows to [`FieldDescriptor`]s.
//!
//! A column is dropped when it is part of the primary key or has a default
//! value. Every surviving column is kept in the order it was read, with no
//! sorting, deduplication or type-based filtering.
//!
//! Decoding never fails: an absent or non-numeric length reads as `0`, and a
//! malformed primary-key flag reads as `false`.

use crate::model::{FieldDescriptor, RawColumn};

/// Converts a single raw row, returning `None` when the column is excluded.
pub fn reduce(raw: RawColumn) -> Option<FieldDescriptor> {
    let is_primary = parse_primary(raw.primary.as_deref());
    if is_primary || has_default(raw.default_value.as_deref()) {
        return None;
    }

    Some(FieldDescriptor {
        max_length: parse_max_length(raw.max_length.as_deref()),
        is_nullable: parse_nullable(raw.is_nullable.as_deref()),
        data_type: raw.data_type.unwrap_or_default(),
        name: raw.name,
        is_primary,
    })
}

/// Reduces a whole result set, preserving row order.
pub fn reduce_all<I>(rows: I) -> Vec<FieldDescriptor>
where
    I: IntoIterator<Item = RawColumn>,
{
    rows.into_iter().filter_map(reduce).collect()
}

/// Character maximum length; anything that is not a non-negative integer
/// (NULL, text, `-1` for unbounded types) is treated as not applicable.
pub fn parse_max_length(value: Option<&str>) -> u32 {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

pub fn has_default(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

pub fn parse_nullable(value: Option<&str>) -> bool {
    value == Some("YES")
}

/// The query reports the primary-key flag as `1`/`0`.
pub fn parse_primary(value: Option<&str>) -> bool {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(0)
        == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_length_falls_back_to_zero() {
        assert_eq!(parse_max_length(Some("50")), 50);
        assert_eq!(parse_max_length(Some(" 12 ")), 12);
        assert_eq!(parse_max_length(Some("-1")), 0);
        assert_eq!(parse_max_length(Some("abc")), 0);
        assert_eq!(parse_max_length(Some("")), 0);
        assert_eq!(parse_max_length(None), 0);
    }

    #[test]
    fn primary_flag_is_lenient() {
        assert!(parse_primary(Some("1")));
        assert!(!parse_primary(Some("0")));
        assert!(!parse_primary(Some("true")));
        assert!(!parse_primary(None));
    }

    #[test]
    fn nullable_is_exact_match() {
        assert!(parse_nullable(Some("YES")));
        assert!(!parse_nullable(Some("yes")));
        assert!(!parse_nullable(Some("NO")));
        assert!(!parse_nullable(None));
    }
}
