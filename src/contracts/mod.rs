//! Capability traits shared across the crate

use serde_json::Value;

/// Custom equality capability
///
/// Types implement this when two values should be treated as the same even
/// though `PartialEq` says otherwise (e.g. entities compared by id only).
pub trait Comparable<Rhs: ?Sized = Self> {
    fn equals(&self, other: &Rhs) -> bool;
}

/// Types that render themselves into a fixed-shape boundary object
pub trait Objectifiable {
    type Object;

    fn to_object(&self) -> Self::Object;
}

/// Key types usable with [`crate::utils::array::group_by`]
///
/// Grouping uses `PartialEq` unless the key exposes the [`Comparable`]
/// capability through [`GroupKey::as_comparable`], in which case keys that are
/// `equals` to an existing group key join that group and the first key seen
/// stays canonical.
pub trait GroupKey: PartialEq + Sized {
    fn as_comparable(&self) -> Option<&dyn Comparable<Self>> {
        None
    }
}

macro_rules! plain_group_keys {
    ($($ty:ty),* $(,)?) => {
        $(impl GroupKey for $ty {})*
    };
}

plain_group_keys!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String, &str, Value,
);

/// Two `Some` keys compare with the inner capability when it exists
impl<T: GroupKey> Comparable for Option<T> {
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.as_comparable().map_or(a == b, |cmp| cmp.equals(b)),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: GroupKey> GroupKey for Option<T> {
    fn as_comparable(&self) -> Option<&dyn Comparable<Self>> {
        self.as_ref()
            .and_then(|inner| inner.as_comparable())
            .map(|_| self as &dyn Comparable<Self>)
    }
}
