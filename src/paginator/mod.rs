//! Pagination over a window of items
//!
//! [`PaginatorState`] holds everything a paginator needs to compute item
//! ranges and navigation links. The [`Paginator`] trait supplies those
//! computations for any type that owns a state and can answer
//! [`Paginator::has_more_pages`]; [`LengthAwarePaginator`] is the variant that
//! knows the total item count.

pub mod length_aware;

pub use length_aware::{LengthAwareObject, LengthAwarePaginator};

use futures::future::try_join_all;
use std::fmt::Display;
use std::future::Future;
use tracing::debug;

use crate::helpers::query_string;
use crate::utils::OrderedMap;

pub const DEFAULT_PER_PAGE: usize = 10;
pub const DEFAULT_PATH: &str = "/";
pub const DEFAULT_PAGE_NAME: &str = "page";

/// Items and link settings shared by every paginator
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatorState<T> {
    pub(crate) items: Vec<T>,
    pub(crate) per_page: usize,
    pub(crate) current_page: usize,
    pub(crate) path: String,
    pub(crate) query: OrderedMap<String, String>,
    pub(crate) page_name: String,
}

impl<T> Default for PaginatorState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            per_page: DEFAULT_PER_PAGE,
            current_page: 1,
            path: DEFAULT_PATH.to_string(),
            query: OrderedMap::new(),
            page_name: DEFAULT_PAGE_NAME.to_string(),
        }
    }
}

impl<T> PaginatorState<T> {
    /// State for `items` on `current_page`; a page of 0 becomes 1
    pub fn new(items: Vec<T>, per_page: usize, current_page: usize) -> Self {
        Self {
            items,
            per_page,
            current_page: current_page.max(1),
            ..Self::default()
        }
    }

    /// Apply `f` to every item concurrently, keeping input order
    ///
    /// The first failure is returned and no items are replaced.
    pub async fn transform<U, F, Fut, E>(self, f: F) -> Result<PaginatorState<U>, E>
    where
        F: FnMut(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
    {
        let Self {
            items,
            per_page,
            current_page,
            path,
            query,
            page_name,
        } = self;

        debug!(count = items.len(), page = current_page, "transforming page items");
        let items = try_join_all(items.into_iter().map(f)).await?;

        Ok(PaginatorState {
            items,
            per_page,
            current_page,
            path,
            query,
            page_name,
        })
    }
}

/// Page arithmetic and link building over a [`PaginatorState`]
pub trait Paginator {
    type Item;

    fn state(&self) -> &PaginatorState<Self::Item>;

    fn state_mut(&mut self) -> &mut PaginatorState<Self::Item>;

    /// Whether items exist beyond the current page
    fn has_more_pages(&self) -> bool;

    fn items(&self) -> &[Self::Item] {
        &self.state().items
    }

    fn per_page(&self) -> usize {
        self.state().per_page
    }

    fn current_page(&self) -> usize {
        self.state().current_page
    }

    fn path(&self) -> &str {
        &self.state().path
    }

    fn page_name(&self) -> &str {
        &self.state().page_name
    }

    fn query(&self) -> &OrderedMap<String, String> {
        &self.state().query
    }

    fn count(&self) -> usize {
        self.state().items.len()
    }

    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    fn is_valid_page_number(&self, page: usize) -> bool {
        page >= 1
    }

    /// Link to `page`, clamped to 1
    ///
    /// Stored query pairs keep their order. A stored pair named after the page
    /// key is overwritten in place, otherwise the page key goes last. Values
    /// are not URL-encoded.
    fn url(&self, page: usize) -> String {
        let state = self.state();
        let page = page.max(1).to_string();

        let mut page_written = false;
        let mut pairs: Vec<(&str, Option<&str>)> = state
            .query
            .iter()
            .map(|(key, value)| {
                if *key == state.page_name {
                    page_written = true;
                    (key.as_str(), Some(page.as_str()))
                } else {
                    (key.as_str(), Some(value.as_str()))
                }
            })
            .collect();
        if !page_written {
            pairs.push((state.page_name.as_str(), Some(page.as_str())));
        }

        let separator = if state.path.contains('?') { '&' } else { '?' };
        format!("{}{}{}", state.path, separator, query_string(pairs))
    }

    fn previous_page_url(&self) -> Option<String> {
        let page = self.current_page();
        (page > 1).then(|| self.url(page - 1))
    }

    fn next_page_url(&self) -> Option<String> {
        self.has_more_pages()
            .then(|| self.url(self.current_page().saturating_add(1)))
    }

    /// 1-based position of the first item on this page
    ///
    /// Saturates at `usize::MAX` for page numbers beyond any real data source.
    fn first_item(&self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let state = self.state();
        Some(
            (state.current_page.max(1) - 1)
                .saturating_mul(state.per_page)
                .saturating_add(1),
        )
    }

    fn last_item(&self) -> Option<usize> {
        self.first_item()
            .map(|first| first.saturating_add(self.count() - 1))
    }

    fn has_pages(&self) -> bool {
        self.current_page() != 1 || self.has_more_pages()
    }

    fn on_first_page(&self) -> bool {
        self.current_page() <= 1
    }

    fn has_path(&self) -> bool {
        self.path() != DEFAULT_PATH
    }

    fn has_query(&self) -> bool {
        !self.state().query.is_empty()
    }

    /// Add a query pair to every generated link; the page key is ignored
    fn add_query(&mut self, key: impl Into<String>, value: impl Display) -> &mut Self
    where
        Self: Sized,
    {
        let key = key.into();
        let state = self.state_mut();
        if key != state.page_name {
            state.query.insert(key, value.to_string());
        }
        self
    }

    /// Replace the stored query pairs
    fn set_query<I, K, V>(&mut self, query: I) -> &mut Self
    where
        Self: Sized,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Display,
    {
        self.state_mut().query = query
            .into_iter()
            .map(|(key, value)| (key.into(), value.to_string()))
            .collect();
        self
    }

    fn set_items(&mut self, items: Vec<Self::Item>) -> &mut Self
    where
        Self: Sized,
    {
        self.state_mut().items = items;
        self
    }

    fn set_path(&mut self, path: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.state_mut().path = path.into();
        self
    }

    fn set_page_name(&mut self, page_name: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.state_mut().page_name = page_name.into();
        self
    }
}
