//! Array helpers
//!
//! Small slice and `Vec` utilities. Grouping keeps the order in which groups
//! were first seen, and honours the [`Comparable`](crate::contracts::Comparable)
//! capability of keys that expose one.

use serde_json::Value;
use std::collections::HashSet;
use std::hash::Hash;

use crate::contracts::GroupKey;
use crate::helpers::object::value_retriever;
use crate::utils::OrderedMap;

/// Array helper namespace
pub struct Arr;

impl Arr {
    /// Repeat `value` `count` times
    pub fn duplicate<T: Clone>(value: T, count: usize) -> Vec<T> {
        vec![value; count]
    }

    pub fn empty<T>(source: &[T]) -> bool {
        source.is_empty()
    }

    /// First element, or `default` when `source` is empty
    ///
    /// # Example
    ///
    /// ```rust
    /// use support_kit::Arr;
    ///
    /// let empty: [i32; 0] = [];
    /// assert_eq!(Arr::first(&[3, 4], None), Some(&3));
    /// assert_eq!(Arr::first(&empty, Some(&0)), Some(&0));
    /// ```
    pub fn first<'a, T>(source: &'a [T], default: Option<&'a T>) -> Option<&'a T> {
        source.first().or(default)
    }

    /// Last element, or `default` when `source` is empty
    pub fn last<'a, T>(source: &'a [T], default: Option<&'a T>) -> Option<&'a T> {
        source.last().or(default)
    }

    /// Group elements by a derived key; see [`group_by`]
    pub fn group_by<T, K, F>(source: Vec<T>, key_fn: F) -> OrderedMap<K, Vec<T>>
    where
        K: GroupKey,
        F: Fn(&T) -> K,
    {
        group_by(source, key_fn)
    }

    /// Group JSON values by the value found at a dot path
    ///
    /// Elements where the path is missing are grouped under `Value::Null`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use support_kit::Arr;
    /// use serde_json::json;
    ///
    /// let rows = vec![json!({"id": 1, "v": "a"}), json!({"id": 2, "v": "b"}), json!({"id": 1, "v": "c"})];
    /// let groups = Arr::group_by_path(rows, "id");
    ///
    /// assert_eq!(groups.len(), 2);
    /// assert_eq!(groups.get(&json!(1)).map(Vec::len), Some(2));
    /// ```
    pub fn group_by_path(source: Vec<Value>, path: &str) -> OrderedMap<Value, Vec<Value>> {
        group_by(source, value_retriever(path))
    }

    /// Remove duplicates, keeping the first occurrence of each value
    pub fn unique<T: Clone + Eq + Hash>(source: Vec<T>) -> Vec<T> {
        unique(source)
    }
}

/// Group vector elements by a key function
///
/// Elements keep their source order inside each group and groups are ordered
/// by first appearance. When a key exposes [`GroupKey::as_comparable`], the
/// element joins the first existing group whose key `equals` it, and that
/// existing key stays canonical. Otherwise keys are compared with `PartialEq`.
///
/// # Example
///
/// ```rust
/// use support_kit::utils::array::group_by;
///
/// let data = vec!["apple", "banana", "apricot", "blueberry"];
/// let grouped = group_by(data, |s| s.chars().next());
///
/// assert_eq!(grouped.get(&Some('a')), Some(&vec!["apple", "apricot"]));
/// assert_eq!(grouped.get(&Some('b')), Some(&vec!["banana", "blueberry"]));
/// ```
pub fn group_by<T, K, F>(source: Vec<T>, key_fn: F) -> OrderedMap<K, Vec<T>>
where
    K: GroupKey,
    F: Fn(&T) -> K,
{
    let mut groups: OrderedMap<K, Vec<T>> = OrderedMap::new();

    for item in source {
        let key = key_fn(&item);

        let existing = if key.as_comparable().is_some() {
            groups.position_where(|candidate| {
                candidate
                    .as_comparable()
                    .map_or(candidate == &key, |cmp| cmp.equals(&key))
            })
        } else {
            groups.position_where(|candidate| candidate == &key)
        };

        match existing {
            Some(index) => {
                if let Some(group) = groups.get_index_mut(index) {
                    group.push(item);
                }
            }
            None => {
                groups.push(key, vec![item]);
            }
        }
    }

    groups
}

/// Remove duplicates from a vector while preserving order
///
/// Uses plain `Eq`; a [`Comparable`](crate::contracts::Comparable) capability
/// on `T` is not consulted.
///
/// # Example
///
/// ```rust
/// use support_kit::utils::array::unique;
///
/// let data = vec![1, 2, 2, 3, 1, 4];
/// assert_eq!(unique(data), vec![1, 2, 3, 4]);
/// ```
pub fn unique<T: Clone + Eq + Hash>(source: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for item in source {
        if seen.insert(item.clone()) {
            result.push(item);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::Comparable;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq)]
    struct Tenant {
        id: u32,
        label: &'static str,
    }

    impl Comparable for Tenant {
        fn equals(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    impl GroupKey for Tenant {
        fn as_comparable(&self) -> Option<&dyn Comparable<Self>> {
            Some(self)
        }
    }

    #[test]
    fn test_duplicate_and_empty() {
        assert_eq!(Arr::duplicate("x", 3), vec!["x", "x", "x"]);
        assert!(Arr::duplicate(1, 0).is_empty());
        assert!(Arr::empty::<i32>(&[]));
        assert!(!Arr::empty(&[1]));
    }

    #[test]
    fn test_first_and_last() {
        let data = [1, 2, 3];
        assert_eq!(Arr::first(&data, None), Some(&1));
        assert_eq!(Arr::last(&data, None), Some(&3));

        let empty: [i32; 0] = [];
        assert_eq!(Arr::first(&empty, None), None);
        assert_eq!(Arr::last(&empty, Some(&9)), Some(&9));
    }

    #[test]
    fn test_group_by_path() {
        let rows = vec![
            json!({"id": 1, "v": "a"}),
            json!({"id": 2, "v": "b"}),
            json!({"id": 1, "v": "c"}),
        ];
        let groups = Arr::group_by_path(rows, "id");

        let values = |key: Value| -> Vec<Value> {
            groups.get(&key).unwrap().iter().map(|row| row["v"].clone()).collect()
        };
        assert_eq!(values(json!(1)), vec![json!("a"), json!("c")]);
        assert_eq!(values(json!(2)), vec![json!("b")]);
    }

    #[test]
    fn test_group_by_missing_path_uses_null() {
        let rows = vec![json!({"id": 1}), json!({"name": "x"})];
        let groups = Arr::group_by_path(rows, "id");
        assert_eq!(groups.get(&Value::Null).map(Vec::len), Some(1));
    }

    #[test]
    fn test_group_by_comparable_keys_collapse() {
        let rows = vec![("r1", 1, "first"), ("r2", 2, "other"), ("r3", 1, "renamed")];
        let groups = Arr::group_by(rows, |&(_, id, label)| Tenant { id, label });

        assert_eq!(groups.len(), 2);
        let (canonical, members) = groups.get_index(0).unwrap();
        assert_eq!(canonical.label, "first");
        assert_eq!(members.iter().map(|r| r.0).collect::<Vec<_>>(), vec!["r1", "r3"]);
    }

    #[test]
    fn test_group_by_plain_keys() {
        let data = vec![1, 2, 3, 4, 5, 6];
        let groups = group_by(data, |n| n % 3);

        let keys: Vec<_> = groups.keys().copied().collect();
        assert_eq!(keys, vec![1, 2, 0]);
        assert_eq!(groups.get(&0), Some(&vec![3, 6]));

        let empty: Vec<i32> = vec![];
        assert!(group_by(empty, |n| *n).is_empty());
    }

    #[test]
    fn test_unique() {
        assert_eq!(unique(vec![1, 2, 2, 3, 1, 4]), vec![1, 2, 3, 4]);
        assert_eq!(Arr::unique(vec!["b", "a", "b"]), vec!["b", "a"]);
        assert!(unique::<i32>(vec![]).is_empty());
    }
}
