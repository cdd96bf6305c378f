//! Cryptographically secure random strings

use rand::rngs::OsRng;
use rand::{Rng, RngCore};

/// Generate a random string of exactly `size` characters
///
/// With `alphanumeric` set the result is lowercase hex drawn from the OS
/// random source. Otherwise it is a decimal number of `size` digits with no
/// leading zero, i.e. uniformly distributed in `[10^(size-1), 10^size)`.
///
/// # Example
///
/// ```rust
/// use support_kit::helpers::random;
///
/// let token = random(8, true);
/// assert_eq!(token.len(), 8);
/// assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
///
/// let otp = random(6, false);
/// assert_eq!(otp.len(), 6);
/// assert!(!otp.starts_with('0'));
/// ```
pub fn random(size: usize, alphanumeric: bool) -> String {
    if size == 0 {
        return String::new();
    }

    if alphanumeric {
        random_hex(size)
    } else {
        random_digits(size)
    }
}

fn random_hex(size: usize) -> String {
    let mut bytes = vec![0u8; size.div_ceil(2)];
    OsRng.fill_bytes(&mut bytes);

    let mut encoded = hex::encode(bytes);
    encoded.truncate(size);
    encoded
}

fn random_digits(size: usize) -> String {
    let mut rng = OsRng;
    let mut digits = String::with_capacity(size);

    digits.push(char::from(b'0' + rng.gen_range(1..=9u8)));
    for _ in 1..size {
        digits.push(char::from(b'0' + rng.gen_range(0..=9u8)));
    }

    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_hex_lengths() {
        for size in [1, 2, 7, 8, 33, 64] {
            let value = random(size, true);
            assert_eq!(value.len(), size);
            assert!(value.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_random_numeric() {
        for size in [1, 6, 12, 30] {
            let value = random(size, false);
            assert_eq!(value.len(), size);
            assert!(value.chars().all(|c| c.is_ascii_digit()));
            assert!(!value.starts_with('0'));
        }
    }

    #[test]
    fn test_random_zero_and_uniqueness() {
        assert_eq!(random(0, true), "");
        assert_eq!(random(0, false), "");
        assert_ne!(random(32, true), random(32, true));
    }
}
