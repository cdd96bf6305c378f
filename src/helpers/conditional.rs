//! Truthiness checks and conditional execution

use serde_json::Value;

/// Loose truthiness
///
/// Zero, `NaN`, empty strings, empty collections, `None` and JSON `null` are
/// falsy. JSON objects are always truthy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

macro_rules! truthy_ints {
    ($($ty:ty),*) => {
        $(impl Truthy for $ty {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

truthy_ints!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Self::String(s) => !s.is_empty(),
            Self::Array(items) => !items.is_empty(),
            Self::Object(_) => true,
        }
    }
}

/// Values that may be "blank" even when present
///
/// Only empty strings (and JSON `null`/`""`) are blank; every other value
/// counts as present.
pub trait Blank {
    fn is_blank(&self) -> bool {
        false
    }
}

macro_rules! never_blank {
    ($($ty:ty),*) => {
        $(impl Blank for $ty {})*
    };
}

never_blank!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T> Blank for Vec<T> {}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for &str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for Value {
    fn is_blank(&self) -> bool {
        matches!(self, Self::Null) || self.as_str().is_some_and(str::is_empty)
    }
}

/// Whether `value` is truthy; see [`Truthy`]
pub fn truthy<T: Truthy + ?Sized>(value: &T) -> bool {
    value.is_truthy()
}

/// Run `callback` with `value` when it is truthy
///
/// # Example
///
/// ```rust
/// use support_kit::helpers::when;
///
/// assert_eq!(when(3, |n| n * 2), Some(6));
/// assert_eq!(when(String::new(), |s| s.len()), None);
/// ```
pub fn when<T, R, F>(value: T, callback: F) -> Option<R>
where
    T: Truthy,
    F: FnOnce(T) -> R,
{
    if value.is_truthy() {
        Some(callback(value))
    } else {
        None
    }
}

/// Run `callback` when `value` is present and not blank
///
/// Unlike [`when`], falsy values such as `0` or `false` still run the
/// callback.
pub fn when_has<T, R, F>(value: Option<T>, callback: F) -> Option<R>
where
    T: Blank,
    F: FnOnce(T) -> R,
{
    value.filter(|v| !v.is_blank()).map(callback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthy_primitives() {
        assert!(truthy(&1));
        assert!(!truthy(&0_u64));
        assert!(!truthy(&f64::NAN));
        assert!(truthy(&-0.5));
        assert!(truthy("a"));
        assert!(!truthy(""));
        assert!(!truthy(&Vec::<i32>::new()));
        assert!(truthy(&vec![0]));
        assert!(!truthy(&None::<i32>));
        assert!(!truthy(&Some(0)));
        assert!(truthy(&Some("x")));
    }

    #[test]
    fn test_truthy_json() {
        assert!(!truthy(&json!(null)));
        assert!(!truthy(&json!([])));
        assert!(truthy(&json!({})));
        assert!(!truthy(&json!(0)));
        assert!(truthy(&json!("0")));
    }

    #[test]
    fn test_when() {
        assert_eq!(when("abc", str::len), Some(3));
        assert_eq!(when(0, |n: i32| n + 1), None);
        assert_eq!(when(vec![1, 2], |v| v.len()), Some(2));
    }

    #[test]
    fn test_when_has() {
        assert_eq!(when_has(Some(0), |n: i32| n + 1), Some(1));
        assert_eq!(when_has(Some(false), |b: bool| !b), Some(true));
        assert_eq!(when_has(Some(""), str::len), None);
        assert_eq!(when_has(None::<String>, |s| s.len()), None);
        assert_eq!(when_has(Some(json!(null)), |v| v.is_null()), None);
        assert_eq!(when_has(Some(json!("x")), |v| v.is_string()), Some(true));
    }
}
