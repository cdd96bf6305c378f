//! String and collection utilities

pub mod array;
pub mod ordered_map;
pub mod strings;

pub use array::{group_by, unique, Arr};
pub use ordered_map::OrderedMap;
pub use strings::Str;
