//! String helpers
//!
//! Case conversion, separator-aware trimming, path normalisation, wildcard
//! matching and a handful of validators. Everything is a pure function on
//! `&str` exposed as an associated function of [`Str`].

use base64::{engine::general_purpose, Engine as _};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::Result;

/// Characters escaped by [`Str::escape_for_regex`]
pub const REGEX_SPECIAL_CHARS: [char; 12] =
    ['(', ')', '[', '{', '*', '+', '.', '$', '^', '|', '?', '\\'];

const LOCAL_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "0.0.0.0"];

const SCHEMES: [&str; 2] = ["http://", "https://"];

// Private ranges, public dotted quads, then DNS names with an alphabetic TLD.
#[allow(clippy::expect_used)]
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:(?:https?|ftp):)?//",
        r"(?:\S+(?::\S*)?@)?",
        r"(?:",
        r"(?:10|127)(?:\.[0-9]{1,3}){3}",
        r"|(?:169\.254|192\.168)(?:\.[0-9]{1,3}){2}",
        r"|172\.(?:1[6-9]|2[0-9]|3[0-1])(?:\.[0-9]{1,3}){2}",
        r"|(?:[1-9][0-9]?|1[0-9][0-9]|2[01][0-9]|22[0-3])",
        r"(?:\.(?:1?[0-9]{1,2}|2[0-4][0-9]|25[0-5])){2}",
        r"\.(?:[1-9][0-9]?|1[0-9][0-9]|2[0-4][0-9]|25[0-4])",
        r"|(?:(?:[a-z0-9\x{00a1}-\x{ffff}][a-z0-9\x{00a1}-\x{ffff}_-]{0,62})?[a-z0-9\x{00a1}-\x{ffff}]\.)+",
        r"[a-z\x{00a1}-\x{ffff}]{2,}\.?",
        r")",
        r"(?::[0-9]{2,5})?",
        r"(?:[/?#]\S*)?$",
    ))
    .expect("URL pattern compiles")
});

/// String helper namespace
pub struct Str;

impl Str {
    /// Base64-encode the UTF-8 bytes of `data`
    pub fn base64_encode(data: &str) -> String {
        general_purpose::STANDARD.encode(data.as_bytes())
    }

    /// Decode base64 into a UTF-8 string
    ///
    /// Fails on malformed base64 and on payloads that are not valid UTF-8.
    pub fn base64_decode(data: &str) -> Result<String> {
        let bytes = general_purpose::STANDARD.decode(data)?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Convert a string to camelCase
    ///
    /// # Example
    ///
    /// ```rust
    /// use support_kit::Str;
    ///
    /// assert_eq!(Str::camel("hello_world"), "helloWorld");
    /// assert_eq!(Str::camel("foo-bar baz"), "fooBarBaz");
    /// ```
    pub fn camel(value: &str) -> String {
        Self::lcfirst(&Self::studly(value))
    }

    /// Strip an `http://`/`https://` prefix and surrounding slashes
    pub fn domain_without_schema(domain: &str) -> String {
        let domain = Self::trim_start(domain.trim(), &SCHEMES);
        Self::trim(&domain, "/")
    }

    /// Normalised path with `/` replaced by `.`
    pub fn dotted_path(path: &str) -> String {
        Self::replace(&Self::path(path, false), "/", ".")
    }

    /// Escape the regex metacharacters in [`REGEX_SPECIAL_CHARS`]
    ///
    /// Characters listed in `exclude` are left as they are.
    ///
    /// # Example
    ///
    /// ```rust
    /// use support_kit::Str;
    ///
    /// assert_eq!(Str::escape_for_regex("a.b*", &[]), r"a\.b\*");
    /// assert_eq!(Str::escape_for_regex("a.b*", &['*']), r"a\.b*");
    /// ```
    pub fn escape_for_regex(pattern: &str, exclude: &[char]) -> String {
        let mut escaped = String::with_capacity(pattern.len() * 2);
        for ch in pattern.chars() {
            if REGEX_SPECIAL_CHARS.contains(&ch) && !exclude.contains(&ch) {
                escaped.push('\\');
            }
            escaped.push(ch);
        }
        escaped
    }

    pub fn is_alpha_num(value: &str) -> bool {
        !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
    }

    pub fn is_hex(value: &str) -> bool {
        !value.is_empty() && value.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Structural email check
    ///
    /// The address must split on its last `@` into a local part of at most 64
    /// characters and a domain of dot-separated labels ending in an
    /// alphabetic TLD. No DNS lookup is made.
    pub fn is_valid_email(email: &str) -> bool {
        if email.len() > 254 {
            return false;
        }

        let Some((local, domain)) = email.rsplit_once('@') else {
            return false;
        };

        is_valid_local_part(local) && is_valid_domain(domain)
    }

    /// Check for an absolute (or scheme-relative) URL with a routable host
    pub fn is_valid_url(url: &str) -> bool {
        URL_PATTERN.is_match(url)
    }

    /// Whether a host, with or without scheme, points at the local machine
    pub fn is_localhost(host: &str) -> bool {
        let host = Self::trim_start(host, &["https://"]);
        let host = Self::trim_start(&host, &["http://"]);
        LOCAL_HOSTS.iter().any(|local| host.starts_with(local))
    }

    /// Convert a string to kebab-case
    pub fn kebab(value: &str) -> String {
        Self::snake(value).replace('_', "-")
    }

    pub fn lcfirst(value: &str) -> String {
        let mut chars = value.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Full-string match against a pattern where `*` matches anything
    ///
    /// Every other character is matched literally.
    ///
    /// # Example
    ///
    /// ```rust
    /// use support_kit::Str;
    ///
    /// assert!(Str::matches("/payment/approved", "/payment/*"));
    /// assert!(!Str::matches("/other", "/payment/*"));
    /// ```
    pub fn matches(value: &str, pattern: &str) -> bool {
        let expression = pattern
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");

        Regex::new(&format!("^{expression}$")).is_ok_and(|re| re.is_match(value))
    }

    /// Normalise a filesystem or URL path
    ///
    /// Backslashes become `/`, runs of `/` collapse to one, and leading and
    /// trailing separators are dropped. `needs_root_slash` prefixes a single
    /// `/` to the result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use support_kit::Str;
    ///
    /// assert_eq!(Str::path(" \\var//www\\html/ ", false), "var/www/html");
    /// assert_eq!(Str::path("var/www", true), "/var/www");
    /// ```
    pub fn path(path: &str, needs_root_slash: bool) -> String {
        let normalized = Self::replace(path.trim(), "\\", "/");
        let collapsed = Self::replace_with_one(&normalized, "/");
        let trimmed = Self::trim(&collapsed, "/");

        if needs_root_slash {
            format!("/{trimmed}")
        } else {
            trimmed
        }
    }

    /// Replace every literal occurrence of `needle`
    pub fn replace(value: &str, needle: &str, replacement: &str) -> String {
        value.replace(needle, replacement)
    }

    /// Collapse consecutive repetitions of `needle` into a single one
    pub fn replace_with_one(value: &str, needle: &str) -> String {
        if needle.is_empty() {
            return value.to_string();
        }

        let doubled = needle.repeat(2);
        let mut result = value.to_string();
        while result.contains(&doubled) {
            result = result.replace(&doubled, needle);
        }
        result
    }

    /// Convert a string to snake_case
    ///
    /// Words are capitalised and joined, then an underscore is placed before
    /// every ASCII capital that is not the first character.
    ///
    /// # Example
    ///
    /// ```rust
    /// use support_kit::Str;
    ///
    /// assert_eq!(Str::snake("HelloWorld"), "hello_world");
    /// assert_eq!(Str::snake("hello world"), "hello_world");
    /// ```
    pub fn snake(value: &str) -> String {
        let compact: String = Self::ucwords(value).split_whitespace().collect();

        let mut result = String::with_capacity(compact.len() + 4);
        for (i, ch) in compact.chars().enumerate() {
            if i > 0 && ch.is_ascii_uppercase() {
                result.push('_');
            }
            result.push(ch);
        }
        result.to_lowercase()
    }

    /// Convert a string to StudlyCase
    pub fn studly(value: &str) -> String {
        Self::ucwords(&value.replace(['-', '_'], " ")).replace(' ', "")
    }

    /// Remove any run of `needle` from both ends
    pub fn trim(value: &str, needle: &str) -> String {
        let start = Self::trim_start(value, &[needle]);
        Self::trim_end(&start, needle)
    }

    /// Remove any run of `needle` from the end
    pub fn trim_end(value: &str, needle: &str) -> String {
        if needle.is_empty() {
            return value.to_string();
        }

        let mut rest = value;
        while let Some(stripped) = rest.strip_suffix(needle) {
            rest = stripped;
        }
        rest.to_string()
    }

    /// Remove any run of the given needles from the start
    ///
    /// Needles may alternate: `trim_start("abab-x", &["a", "b"])` yields `-x`.
    pub fn trim_start(value: &str, needles: &[&str]) -> String {
        let mut rest = value;
        'strip: loop {
            for needle in needles.iter().filter(|n| !n.is_empty()) {
                if let Some(stripped) = rest.strip_prefix(needle) {
                    rest = stripped;
                    continue 'strip;
                }
            }
            break;
        }
        rest.to_string()
    }

    pub fn ucfirst(value: &str) -> String {
        let mut chars = value.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Capitalise the first letter of every space-separated word
    pub fn ucwords(value: &str) -> String {
        value
            .trim()
            .split(' ')
            .map(Self::ucfirst)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn is_valid_local_part(local: &str) -> bool {
    const ALLOWED: &str = "!#$%&'*+-/=?^_`{|}~.";

    !local.is_empty()
        && local.len() <= 64
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ALLOWED.contains(c))
}

fn is_valid_domain(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > 253 {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    let tld_ok = labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));

    labels_ok && tld_ok
}
