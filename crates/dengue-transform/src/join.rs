//! Outer co-group of the two keyed streams and the completeness filter.

use std::collections::BTreeMap;

use dengue_model::{JoinKey, JoinedGroup, Source};

/// Co-groups rain and case contributions by key.
///
/// Every key seen in either stream gets a group; a source that never
/// contributed under a key leaves its list empty. Groups come out ordered by
/// key.
pub fn co_group<C, D>(chuvas: C, dengue: D) -> Vec<JoinedGroup>
where
    C: IntoIterator<Item = (JoinKey, f64)>,
    D: IntoIterator<Item = (JoinKey, f64)>,
{
    let tagged = chuvas
        .into_iter()
        .map(|pair| (Source::Chuvas, pair))
        .chain(dengue.into_iter().map(|pair| (Source::Dengue, pair)));

    let mut groups: BTreeMap<JoinKey, JoinedGroup> = BTreeMap::new();
    for (source, (key, value)) in tagged {
        groups
            .entry(key.clone())
            .or_insert_with(|| JoinedGroup::new(key))
            .values_mut(source)
            .push(value);
    }
    groups.into_values().collect()
}

/// True when both sources contributed under the group's key.
pub fn is_complete(group: &JoinedGroup) -> bool {
    !group.chuvas.is_empty() && !group.dengue.is_empty()
}
