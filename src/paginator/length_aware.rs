//! Paginator that knows the total item count

use serde::{Serialize, Serializer};
use std::future::Future;

use super::{Paginator, PaginatorState};
use crate::contracts::Objectifiable;

/// Paginator over a known total
#[derive(Debug, Clone, PartialEq)]
pub struct LengthAwarePaginator<T> {
    state: PaginatorState<T>,
    total: usize,
    last_page: usize,
}

/// Boundary form of a [`LengthAwarePaginator`]
///
/// `D` is the item container: an owned `Vec` from
/// [`Objectifiable::to_object`], a borrowed slice when serializing directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthAwareObject<D> {
    pub current_page: usize,
    pub data: D,
    pub first_page_url: String,
    pub from: Option<usize>,
    pub last_page: usize,
    pub last_page_url: String,
    pub next_page_url: Option<String>,
    pub path: String,
    pub per_page: usize,
    pub prev_page_url: Option<String>,
    pub to: Option<usize>,
    pub total: usize,
}

impl<T> LengthAwarePaginator<T> {
    /// Paginate `items` as page `current_page` of `total`
    ///
    /// A `per_page` of 0 is treated as 1 and so is a `current_page` of 0.
    pub fn new(items: Vec<T>, total: usize, per_page: usize, current_page: usize) -> Self {
        let per_page = per_page.max(1);
        Self {
            state: PaginatorState::new(items, per_page, current_page),
            total,
            last_page: total.div_ceil(per_page).max(1),
        }
    }

    pub const fn total(&self) -> usize {
        self.total
    }

    pub const fn last_page(&self) -> usize {
        self.last_page
    }

    /// Replace every item with the result of `f`, run concurrently
    pub async fn transform<U, F, Fut, E>(self, f: F) -> Result<LengthAwarePaginator<U>, E>
    where
        F: FnMut(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
    {
        Ok(LengthAwarePaginator {
            state: self.state.transform(f).await?,
            total: self.total,
            last_page: self.last_page,
        })
    }
}

impl<T> Paginator for LengthAwarePaginator<T> {
    type Item = T;

    fn state(&self) -> &PaginatorState<T> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PaginatorState<T> {
        &mut self.state
    }

    fn has_more_pages(&self) -> bool {
        self.current_page() < self.last_page
    }
}

impl<T> LengthAwarePaginator<T> {
    fn object_with<D>(&self, data: D) -> LengthAwareObject<D> {
        LengthAwareObject {
            current_page: self.current_page(),
            data,
            first_page_url: self.url(1),
            from: self.first_item(),
            last_page: self.last_page,
            last_page_url: self.url(self.last_page),
            next_page_url: self.next_page_url(),
            path: self.path().to_string(),
            per_page: self.per_page(),
            prev_page_url: self.previous_page_url(),
            to: self.last_item(),
            total: self.total,
        }
    }
}

impl<T: Clone> Objectifiable for LengthAwarePaginator<T> {
    type Object = LengthAwareObject<Vec<T>>;

    fn to_object(&self) -> LengthAwareObject<Vec<T>> {
        self.object_with(self.items().to_vec())
    }
}

impl<T: Serialize> Serialize for LengthAwarePaginator<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.object_with(self.items()).serialize(serializer)
    }
}
