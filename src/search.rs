//! Exact-match category search.

use std::borrow::Borrow;

use crate::record::Entity;

/// Entities tagged with `query`, in input order.
///
/// Matching is exact string equality. An entity listing the same category
/// more than once is returned once per listing.
pub fn search<'a, E: Borrow<Entity>>(query: &str, entities: &'a [E]) -> Vec<&'a Entity> {
    entities
        .iter()
        .map(|e| Borrow::<Entity>::borrow(e))
        .flat_map(|e| {
            e.categories()
                .iter()
                .filter(move |c| c.as_str() == query)
                .map(move |_| e)
        })
        .collect()
}
