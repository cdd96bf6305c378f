//! Support Kit
//!
//! General-purpose building blocks for service code: string and collection
//! helpers, an async event emitter, an HTTP-style exception carrier and a
//! pagination abstraction.
//!
//! # Features
//!
//! - **Strings**: case conversion, path cleanup, wildcard matching and validators ([`Str`])
//! - **Collections**: grouping with custom key equality, dedupe, first/last ([`Arr`])
//! - **Pagination**: item ranges and navigation links ([`LengthAwarePaginator`])
//! - **Events**: named listeners with concurrent fan-out ([`EventEmitter`])
//! - **Exceptions**: status-coded errors with a fixed boundary shape ([`Exception`])
//! - **Helpers**: dot-path access, URL building, bcrypt hashing and AES encryption
//!
//! # Quick Start
//!
//! ```rust
//! use support_kit::{LengthAwarePaginator, Paginator, Str};
//!
//! let mut page = LengthAwarePaginator::new(vec!["a", "b"], 12, 2, 1);
//! page.set_path("/letters").add_query("sort", "asc");
//!
//! assert_eq!(page.next_page_url().as_deref(), Some("/letters?sort=asc&page=2"));
//! assert_eq!(Str::snake("HelloWorld"), "hello_world");
//! ```

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod contracts;
pub mod error;
pub mod event_emitter;
pub mod exception;
pub mod helpers;
pub mod paginator;
pub mod types;
pub mod utils;

// Re-exports for convenience
pub use config::{Environment, SupportConfig};
pub use contracts::{Comparable, GroupKey, Objectifiable};
pub use error::{Result, SupportError};
pub use event_emitter::{EventEmitter, EventNames, Listener};
pub use exception::{Exception, ExceptionObject};
pub use paginator::{LengthAwareObject, LengthAwarePaginator, Paginator, PaginatorState};
pub use types::{Locale, MongoConnectionOption};
pub use utils::{Arr, OrderedMap, Str};
