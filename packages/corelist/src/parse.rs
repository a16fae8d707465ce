use std::num::NonZero;

use nonempty::NonEmpty;

use crate::Item;

/// Parses a comma-separated list of processor indexes, preserving input
/// order and duplicates.
///
/// Empty items are skipped, so `0,,1,` yields the same result as `0,1`. At
/// most `capacity` indexes are produced: parsing stops once the capacity is
/// reached and the remaining items are ignored without error, whether they
/// are well-formed or not.
///
/// Input that yields no indexes at all fails with [`Error::Empty`][1], so a
/// successful parse always carries at least one index.
///
/// See [package-level documentation][crate] for details of the format.
///
/// [1]: crate::Error::Empty
pub fn parse(list: &str, capacity: NonZero<usize>) -> crate::Result<NonEmpty<Item>> {
    let mut items = Vec::new();

    for part in list.split(',') {
        if part.is_empty() {
            continue;
        }

        if items.len() == capacity.get() {
            // Deliberate truncation - the capacity bounds the output and
            // anything beyond it is not even inspected.
            break;
        }

        items.push(parse_item(part)?);
    }

    NonEmpty::from_vec(items).ok_or(crate::Error::Empty)
}

fn parse_item(part: &str) -> crate::Result<Item> {
    part.parse::<Item>()
        .map_err(|inner| crate::Error::InvalidItem {
            invalid_value: part.to_string(),
            problem: inner.to_string(),
        })
}
