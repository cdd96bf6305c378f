//! Shared value types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
}

impl Locale {
    /// Locale for a stored numeric id
    pub const fn from_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(Self::En),
            _ => None,
        }
    }

    pub const fn id(self) -> u32 {
        match self {
            Self::En => 1,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Connection settings for [`crate::helpers::mongo_url`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MongoConnectionOption {
    /// Comma-separated `host:port` list, e.g. `mongo1:27017,mongo2:27017`
    pub hosts: String,
    pub database: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replica_set: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_connection: Option<bool>,
}

impl MongoConnectionOption {
    pub fn new(hosts: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            hosts: hosts.into(),
            database: database.into(),
            ..Self::default()
        }
    }
}
