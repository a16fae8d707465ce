use itertools::Itertools;

use crate::Item;

/// Generates a processor list string in the format accepted by
/// [`parse()`][crate::parse].
///
/// Order and duplicates of the input are reproduced as-is, so a parsed list
/// emits back in its canonical form: empty items removed, nothing else
/// changed.
pub fn emit<'a>(items: impl IntoIterator<Item = &'a Item>) -> String {
    items.into_iter().join(",")
}
