//! Lenient readers for list-valued sections.
//!
//! Older records stored list sections as arrays of arrays, or as a bare
//! object where a one-element list was meant. Both collapse to a flat list.
//! Required text fields read `null` as empty text.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Item<T> {
    Many(Vec<T>),
    One(T),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListShape<T> {
    List(Vec<Item<T>>),
    Single(T),
}

/// Deserialize an optional list section, flattening one level of nesting
/// and wrapping a bare object into a one-element list.
pub(crate) fn flat_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let shape = Option::<ListShape<T>>::deserialize(deserializer)?;
    Ok(shape.map(|shape| match shape {
        ListShape::Single(item) => vec![item],
        ListShape::List(items) => items
            .into_iter()
            .flat_map(|item| match item {
                Item::Many(many) => many,
                Item::One(one) => vec![one],
            })
            .collect(),
    }))
}

/// Deserialize a text field, reading `null` as empty.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
