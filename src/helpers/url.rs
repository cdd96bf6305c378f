//! Query-string and URL construction

use reqwest::Url;
use std::fmt::Display;

use crate::error::{Result, SupportError};
use crate::types::MongoConnectionOption;

/// Join `key=value` pairs with `&`, skipping pairs whose value is `None`
///
/// Nothing is percent-encoded.
///
/// # Example
///
/// ```rust
/// use support_kit::helpers::query_string;
///
/// let query = query_string([("page", Some("2")), ("sort", None), ("q", Some("a b"))]);
/// assert_eq!(query, "page=2&q=a b");
/// ```
pub fn query_string<I, K, V>(queries: I) -> String
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: Display,
    V: Display,
{
    queries
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| format!("{key}={value}")))
        .collect::<Vec<_>>()
        .join("&")
}

/// Resolve `endpoint` (optionally against `base_url`) and replace its query
///
/// When `queries` is given the existing query is replaced by
/// [`query_string`] of the pairs; an empty result removes the query entirely.
pub fn url(
    endpoint: &str,
    base_url: Option<&str>,
    queries: Option<&[(&str, Option<&str>)]>,
) -> Result<String> {
    let parsed = match base_url {
        Some(base) => Url::parse(base).and_then(|base| base.join(endpoint)),
        None => Url::parse(endpoint),
    };
    let mut resolved = parsed.map_err(|e| SupportError::InvalidUrl(format!("{endpoint}: {e}")))?;

    if let Some(queries) = queries {
        let search = query_string(queries.iter().copied());
        resolved.set_query((!search.is_empty()).then_some(search.as_str()));
    }

    Ok(resolved.to_string())
}

/// Build a `mongodb://` connection string
///
/// The credentials segment is omitted when neither username nor password is
/// set; options are appended only when present.
pub fn mongo_url(option: &MongoConnectionOption) -> String {
    let auth = [option.username.as_deref(), option.password.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(":");

    let direct_connection = option.direct_connection.map(|direct| direct.to_string());
    let query = query_string([
        ("authSource", option.auth_source.as_deref()),
        ("replicaSet", option.replica_set.as_deref()),
        ("directConnection", direct_connection.as_deref()),
    ]);

    let mut url = String::from("mongodb://");
    if !auth.is_empty() {
        url.push_str(&auth);
        url.push('@');
    }
    url.push_str(&option.hosts);
    url.push('/');
    url.push_str(&option.database);
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string() {
        assert_eq!(query_string([("a", Some(1)), ("b", Some(2))]), "a=1&b=2");
        assert_eq!(query_string([("a", None::<&str>)]), "");
        assert_eq!(query_string(Vec::<(&str, Option<&str>)>::new()), "");
    }

    #[test]
    fn test_url_with_base_and_queries() {
        let built = url("/users", Some("https://api.example.com/v1/"), Some(&[("page", Some("2")), ("skip", None)]))
            .unwrap();
        assert_eq!(built, "https://api.example.com/users?page=2");

        let relative = url("users", Some("https://api.example.com/v1/"), None).unwrap();
        assert_eq!(relative, "https://api.example.com/v1/users");
    }

    #[test]
    fn test_url_replaces_existing_query() {
        let built = url("https://example.com/search?old=1", None, Some(&[("q", Some("rust"))])).unwrap();
        assert_eq!(built, "https://example.com/search?q=rust");

        let cleared = url("https://example.com/search?old=1", None, Some(&[])).unwrap();
        assert_eq!(cleared, "https://example.com/search");
    }

    #[test]
    fn test_url_rejects_relative_without_base() {
        let err = url("/users", None, None).unwrap_err();
        assert!(matches!(err, SupportError::InvalidUrl(_)));
    }

    #[test]
    fn test_mongo_url() {
        let mut option = MongoConnectionOption::new("mongo1:27017,mongo2:27017", "app");
        assert_eq!(mongo_url(&option), "mongodb://mongo1:27017,mongo2:27017/app");

        option.username = Some("admin".into());
        option.password = Some("pw".into());
        option.auth_source = Some("admin".into());
        option.replica_set = Some("rs0".into());
        option.direct_connection = Some(false);
        assert_eq!(
            mongo_url(&option),
            "mongodb://admin:pw@mongo1:27017,mongo2:27017/app?authSource=admin&replicaSet=rs0&directConnection=false"
        );
    }

    #[test]
    fn test_mongo_url_username_only() {
        let mut option = MongoConnectionOption::new("localhost:27017", "db");
        option.username = Some("reader".into());
        option.password = Some(String::new());
        assert_eq!(mongo_url(&option), "mongodb://reader@localhost:27017/db");
    }
}
