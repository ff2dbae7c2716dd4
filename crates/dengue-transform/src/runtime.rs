//! Data-parallel pipeline primitives over in-memory record streams.
//!
//! Map stages run record by record on the rayon pool. `group_by_key` and
//! `combine_per_key` are the shuffle barriers: every value for a key is
//! collected before the key is reduced, and distinct keys reduce in
//! parallel with no ordering between them.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use rayon::prelude::*;

/// Builds the global worker pool. Returns `false` when a pool already exists,
/// in which case the existing pool is kept.
pub fn configure_threads(threads: Option<usize>) -> bool {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = threads {
        builder = builder.num_threads(threads);
    }
    builder.build_global().is_ok()
}

/// Number of workers in the current pool.
pub fn worker_count() -> usize {
    rayon::current_num_threads()
}

/// Fallible parallel map; output keeps input order.
pub fn par_map<T, U, E, F>(items: Vec<T>, f: F) -> Result<Vec<U>, E>
where
    T: Send,
    U: Send,
    E: Send,
    F: Fn(T) -> Result<U, E> + Sync + Send,
{
    items.into_par_iter().map(f).collect()
}

/// Fallible parallel flat-map; output keeps input order.
pub fn par_flat_map<T, U, E, F>(items: Vec<T>, f: F) -> Result<Vec<U>, E>
where
    T: Send,
    U: Send,
    E: Send,
    F: Fn(T) -> Result<Vec<U>, E> + Sync + Send,
{
    let nested: Vec<Vec<U>> = items.into_par_iter().map(f).collect::<Result<_, E>>()?;
    Ok(nested.into_iter().flatten().collect())
}

/// Collects every value under its key.
pub fn group_by_key<K, V>(pairs: Vec<(K, V)>) -> HashMap<K, Vec<V>>
where
    K: Eq + Hash + Send,
    V: Send,
{
    pairs
        .into_par_iter()
        .fold(HashMap::new, |mut groups: HashMap<K, Vec<V>>, (key, value)| {
            groups.entry(key).or_default().push(value);
            groups
        })
        .reduce(HashMap::new, |mut left, right| {
            for (key, mut values) in right {
                left.entry(key).or_default().append(&mut values);
            }
            left
        })
}

/// Groups `pairs` by key and reduces each group with `reducer`.
pub fn combine_per_key<K, F>(pairs: Vec<(K, f64)>, reducer: F) -> BTreeMap<K, f64>
where
    K: Ord + Hash + Send,
    F: Fn(&[f64]) -> f64 + Sync + Send,
{
    group_by_key(pairs)
        .into_par_iter()
        .map(|(key, values)| (key, reducer(&values)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn par_map_keeps_order_and_stops_on_error() {
        let doubled: Result<Vec<i32>, String> = par_map((0..100).collect::<Vec<i32>>(), |n| Ok(n * 2));
        assert_eq!(doubled.unwrap(), (0..100).map(|n| n * 2).collect::<Vec<_>>());

        let failed: Result<Vec<i32>, String> = par_map((0..100).collect::<Vec<i32>>(), |n| {
            if n == 42 {
                Err(format!("bad {n}"))
            } else {
                Ok(n)
            }
        });
        assert_eq!(failed.unwrap_err(), "bad 42");
    }

    #[test]
    fn par_flat_map_concatenates() {
        let out: Result<Vec<u8>, ()> = par_flat_map(vec![1u8, 2, 3], |n| Ok(vec![n; n as usize]));
        assert_eq!(out.unwrap(), vec![1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn group_by_key_collects_all_values() {
        let pairs: Vec<(&str, u32)> = (0..1000u32)
            .map(|n| (if n % 2 == 0 { "even" } else { "odd" }, n))
            .collect();
        let groups = group_by_key(pairs);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["even"].len(), 500);
        let odd_total: u32 = (0..1000u32).filter(|n| n % 2 == 1).sum();
        assert_eq!(groups["odd"].iter().sum::<u32>(), odd_total);
    }

    #[test]
    fn combine_per_key_reduces_each_key() {
        let pairs = vec![("a", 1.0), ("b", 2.0), ("a", 3.0)];
        let totals = combine_per_key(pairs, |values| values.iter().sum());
        assert_eq!(
            totals.into_iter().collect::<Vec<_>>(),
            vec![("a", 4.0), ("b", 2.0)]
        );
    }

    #[test]
    fn empty_input_has_no_groups() {
        let totals = combine_per_key(Vec::<(String, f64)>::new(), |values| values.iter().sum());
        assert!(totals.is_empty());
    }
}
