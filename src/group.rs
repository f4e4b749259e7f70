//! Order-preserving group-by.

/// Group the values of `(key, value)` pairs by key.
///
/// Returns one group per distinct key, ordered by the key's first
/// occurrence. Values keep their relative input order within a group, and
/// every pair lands in exactly one group.
///
/// Keys only need `PartialEq`, so this works for float coordinates as well
/// as hashable ids. Lookup is linear in the number of distinct keys.
///
/// ```rust
/// use tastemap::group_by_first;
///
/// let pairs = vec![(1, 2), (3, 2), (2, 4), (1, 3), (3, 1), (1, 2)];
/// assert_eq!(group_by_first(pairs), vec![vec![2, 3, 2], vec![2, 1], vec![4]]);
/// ```
pub fn group_by_first<K, V, I>(pairs: I) -> Vec<Vec<V>>
where
    K: PartialEq,
    I: IntoIterator<Item = (K, V)>,
{
    let mut keys: Vec<K> = Vec::new();
    let mut groups: Vec<Vec<V>> = Vec::new();

    for (key, value) in pairs {
        match keys.iter().position(|k| *k == key) {
            Some(i) => groups[i].push(value),
            None => {
                keys.push(key);
                groups.push(vec![value]);
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_group_by_first_orders_by_first_key() {
        let pairs = vec![(1, 2), (3, 2), (2, 4), (1, 3), (3, 1), (1, 2)];
        assert_eq!(
            group_by_first(pairs),
            vec![vec![2, 3, 2], vec![2, 1], vec![4]]
        );
    }

    #[test]
    fn test_group_by_first_empty() {
        let pairs: Vec<(u8, u8)> = vec![];
        assert!(group_by_first(pairs).is_empty());
    }

    #[test]
    fn test_group_by_first_float_keys() {
        let pairs = vec![([0.0, 1.0], "a"), ([2.0, 2.0], "b"), ([0.0, 1.0], "c")];
        assert_eq!(group_by_first(pairs), vec![vec!["a", "c"], vec!["b"]]);
    }

    proptest! {
        #[test]
        fn prop_group_by_first_is_a_partition(
            pairs in proptest::collection::vec((0u8..6, any::<u32>()), 0..60),
        ) {
            let groups = group_by_first(pairs.iter().copied());

            let total: usize = groups.iter().map(Vec::len).sum();
            prop_assert_eq!(total, pairs.len());
            prop_assert!(groups.iter().all(|g| !g.is_empty()));

            let mut distinct: Vec<u8> = Vec::new();
            for (k, _) in &pairs {
                if !distinct.contains(k) {
                    distinct.push(*k);
                }
            }
            prop_assert_eq!(groups.len(), distinct.len());

            for (key, group) in distinct.iter().zip(&groups) {
                let expected: Vec<u32> = pairs
                    .iter()
                    .filter(|(k, _)| k == key)
                    .map(|(_, v)| *v)
                    .collect();
                prop_assert_eq!(group, &expected);
            }
        }
    }
}
