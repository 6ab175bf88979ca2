use crate::data_processing::record_error::PairError;
use crate::save_format::FieldValue;

/// Counts the values of a field: 0 when absent, 1 for a scalar, the length of a list.
pub fn count_entries(field: FieldValue<'_>) -> usize {
    match field {
        FieldValue::Absent => 0,
        FieldValue::Scalar(_) => 1,
        FieldValue::List(values) => values.len(),
    }
}

/// Sums the counts of a field whose entries are `id,count` pairs.
///
/// The id is ignored. An absent field sums to 0.
///
/// # Arguments
///
/// * `field` - A field such as `rm_completed` or `ship_type_killed`.
///
/// # Returns
///
/// The total of all counts, or a `PairError` for the first malformed entry or
/// for a total that does not fit in an `i64`.
pub fn sum_pair_counts(field: FieldValue<'_>) -> Result<i64, PairError> {
    field.values().try_fold(0i64, |total, entry| {
        total
            .checked_add(parse_pair_count(entry)?)
            .ok_or_else(|| PairError::Overflow(entry.to_owned()))
    })
}

/// Extracts the count from an `id,count` pair, ignoring whitespace around it.
fn parse_pair_count(entry: &str) -> Result<i64, PairError> {
    let count = entry
        .split(',')
        .nth(1)
        .ok_or_else(|| PairError::MissingComma(entry.to_owned()))?;
    count
        .trim()
        .parse()
        .map_err(|_| PairError::InvalidCount(entry.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn counts_absent_scalar_and_list() {
        let values = list(&["a", "b", "c", "d"]);
        assert_eq!(count_entries(FieldValue::Absent), 0);
        assert_eq!(count_entries(FieldValue::Scalar("a")), 1);
        assert_eq!(count_entries(FieldValue::List(&values)), 4);
    }

    #[test]
    fn sums_counts_of_pairs() {
        let values = list(&["a,3", "b,5"]);
        assert_eq!(sum_pair_counts(FieldValue::List(&values)), Ok(8));
        assert_eq!(sum_pair_counts(FieldValue::Scalar("a,7")), Ok(7));
        assert_eq!(sum_pair_counts(FieldValue::Absent), Ok(0));
    }

    #[test]
    fn tolerates_spaces_and_extra_components() {
        let values = list(&["2151746432, 3", "2151746433 , 12", "1,2,9"]);
        assert_eq!(sum_pair_counts(FieldValue::List(&values)), Ok(17));
    }

    #[test]
    fn overflowing_total_is_reported() {
        let values = list(&["a,9223372036854775807", "b,1"]);
        assert_eq!(
            sum_pair_counts(FieldValue::List(&values)),
            Err(PairError::Overflow("b,1".into()))
        );
    }

    #[test]
    fn malformed_pairs_are_reported() {
        assert_eq!(
            sum_pair_counts(FieldValue::Scalar("12345")),
            Err(PairError::MissingComma("12345".into()))
        );

        let values = list(&["a,1", "b,lots"]);
        assert_eq!(
            sum_pair_counts(FieldValue::List(&values)),
            Err(PairError::InvalidCount("b,lots".into()))
        );
    }
}
