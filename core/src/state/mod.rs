//! Search-state controller: the single holder of what the user is looking at
//! in one search domain.
//!
//! # Design
//!
//! - One `SearchState` per domain; instances share nothing.
//! - Pagination is embedded, not inherited.
//! - Every parameter setter resets the offset, since the result ordering
//!   changed underneath the current page.
//! - `apply_results` is the only mutator a search client may call and
//!   replaces hits and total together.
//! - Failed searches are the caller's concern; state is left untouched and
//!   the caller may record a message through `set_error`.
//! - An optional notify callback runs after every mutation so a view layer
//!   can re-render.

use std::sync::Arc;

use crate::pagination::Pagination;
use crate::query::{Domain, FilterSet, Query, QueryModel, SearchRequest, compose_query};
use crate::types::domain::{Housing, HousingId, Listings, Reviews};
use crate::types::{PageSize, SearchSettings, SortBy, SortDirection};

pub type Notify = Arc<dyn Fn() + Send + Sync>;

/// Hits of one response together with the total the index reported for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet<R> {
    records: Vec<R>,
    total_hits: usize,
}

impl<R> Default for ResultSet<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            total_hits: 0,
        }
    }
}

impl<R> ResultSet<R> {
    pub fn new(records: Vec<R>, total_hits: usize) -> Self {
        Self {
            records,
            total_hits,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn into_records(self) -> Vec<R> {
        self.records
    }

    pub fn total_hits(&self) -> usize {
        self.total_hits
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub struct SearchState<D: Domain> {
    scope: D::Scope,
    model: QueryModel<D>,
    pagination: Pagination,
    results: ResultSet<D::Record>,
    error: String,
    notify: Option<Notify>,
}

/// Create operations.
impl<D: Domain> SearchState<D> {
    pub fn with_scope(scope: D::Scope, page_size: PageSize) -> Self {
        Self {
            scope,
            model: QueryModel::default(),
            pagination: Pagination::new(page_size),
            results: ResultSet::default(),
            error: String::new(),
            notify: None,
        }
    }

    /// Registers a callback invoked after every state change.
    pub fn with_notify(mut self, notify: Notify) -> Self {
        self.notify = Some(notify);
        self
    }

    fn changed(&self) {
        if let Some(notify) = &self.notify {
            notify();
        }
    }
}

impl<D: Domain<Scope = ()>> SearchState<D> {
    pub fn new(page_size: PageSize) -> Self {
        Self::with_scope((), page_size)
    }
}

/// Query operations.
impl<D: Domain> SearchState<D> {
    pub fn scope(&self) -> &D::Scope {
        &self.scope
    }

    pub fn query_text(&self) -> &str {
        self.model.text()
    }

    pub fn filters(&self) -> &D::Filters {
        self.model.filters()
    }

    pub fn sort(&self) -> Option<SortBy<D::SortField>> {
        self.model.sort()
    }

    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.model.set_text(text);
        self.pagination.reset();
        self.changed();
    }

    pub fn set_filter(&mut self, update: <D::Filters as FilterSet>::Update) {
        self.model.set_filter(update);
        self.pagination.reset();
        self.changed();
    }

    pub fn set_sort_field(&mut self, field: D::SortField) {
        self.model.set_sort_field(field);
        self.pagination.reset();
        self.changed();
    }

    /// No-op for domains without a sort.
    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        if self.model.set_sort_direction(direction) {
            self.pagination.reset();
            self.changed();
        }
    }

    /// Resets text, filters, sort and offset together.
    pub fn clear_query(&mut self) {
        self.model.clear();
        self.pagination.reset();
        self.changed();
    }

    pub fn full_query(&self) -> Query<D> {
        compose_query(&self.scope, &self.model, self.pagination.offset())
    }

    /// The query flattened for a search client, one page long.
    pub fn request(&self, settings: &SearchSettings) -> SearchRequest {
        self.full_query().to_request(
            self.pagination.page_size(),
            &settings.highlight_pre_tag,
            &settings.highlight_post_tag,
        )
    }
}

/// Paging operations.
impl<D: Domain> SearchState<D> {
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn offset(&self) -> usize {
        self.pagination.offset()
    }

    pub fn set_offset(&mut self, offset: usize) {
        self.pagination.set_offset(offset);
        self.changed();
    }

    pub fn next_page(&mut self) {
        self.pagination.increment();
        self.changed();
    }

    pub fn previous_page(&mut self) {
        self.pagination.decrement();
        self.changed();
    }
}

/// Result operations.
impl<D: Domain> SearchState<D> {
    /// Replaces hits and total hit count in one step.
    pub fn apply_results(&mut self, records: Vec<D::Record>, total_hits: usize) {
        self.results = ResultSet::new(records, total_hits);
        self.pagination.set_total_hits(total_hits);
        self.changed();
    }

    pub fn results(&self) -> &ResultSet<D::Record> {
        &self.results
    }

    pub fn hits(&self) -> &[D::Record] {
        self.results.records()
    }

    pub fn total_hits(&self) -> usize {
        self.results.total_hits()
    }

    /// Up to `n` leading hits, for preview surfaces.
    pub fn sample(&self, n: usize) -> &[D::Record] {
        let hits = self.results.records();
        &hits[..n.min(hits.len())]
    }
}

/// Error operations.
impl<D: Domain> SearchState<D> {
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = message.into();
        self.changed();
    }

    pub fn clear_error(&mut self) {
        if !self.error.is_empty() {
            self.error.clear();
            self.changed();
        }
    }
}

impl SearchState<Listings> {
    /// Looks up an already loaded residence.
    pub fn find_housing(&self, id: HousingId) -> Option<&Housing> {
        self.hits().iter().find(|housing| housing.id == id)
    }
}

impl SearchState<Reviews> {
    pub fn for_housing(housing: HousingId, page_size: PageSize) -> Self {
        Self::with_scope(housing, page_size)
    }

    pub fn housing(&self) -> HousingId {
        self.scope
    }

    /// Points the controller at another residence's reviews.
    ///
    /// Parameters stay; hits and page position are dropped since they belong
    /// to the previous residence.
    pub fn set_housing(&mut self, housing: HousingId) {
        if self.scope == housing {
            return;
        }
        self.scope = housing;
        self.results = ResultSet::default();
        self.pagination.set_total_hits(0);
        self.changed();
    }
}
