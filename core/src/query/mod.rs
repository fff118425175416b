//! Query, filter and sort model shared by every search domain.
//!
//! A [`Domain`] fixes the record type, filter dimensions and sortable fields
//! of one index. [`QueryModel`] is the editable text/filters/sort triple;
//! [`compose_query`] snapshots it together with the current offset into an
//! immutable [`Query`], which [`Query::to_request`] flattens into the
//! index-agnostic [`SearchRequest`] handed to a search client.

use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::error::ValidationError;
use crate::types::{SortBy, SortDirection, SortField};

/// Filter dimensions of one domain.
///
/// `None` in a dimension means "no constraint", never "match empty".
pub trait FilterSet: Default + Clone + Debug + PartialEq + Send + Sync {
    /// A change to exactly one dimension.
    type Update: Copy + Debug;

    fn apply(&mut self, update: Self::Update);

    /// Parses a filter control's `(attribute, value)` pair, `""` meaning unset.
    fn parse_update(field: &str, value: &str) -> Result<Self::Update, ValidationError>;

    /// `field = value` expressions for every set dimension, in declaration order.
    fn expressions(&self) -> Vec<String>;

    fn is_empty(&self) -> bool {
        self.expressions().is_empty()
    }
}

/// Binds the types of one searchable index together.
pub trait Domain: Clone + Copy + Debug + PartialEq + Send + Sync + 'static {
    type Record: Clone + Debug + DeserializeOwned + Send + Sync + 'static;
    type Filters: FilterSet;
    type SortField: SortField;
    /// Extra context selecting the index, e.g. the residence for reviews.
    type Scope: Clone + Debug + PartialEq + Send + Sync;

    /// Attributes the index should highlight matches in.
    const HIGHLIGHT: &'static [&'static str];

    fn index(scope: &Self::Scope) -> String;

    fn default_sort() -> Option<SortBy<Self::SortField>>;
}

/// Editable search parameters of one controller.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryModel<D: Domain> {
    text: String,
    filters: D::Filters,
    sort: Option<SortBy<D::SortField>>,
}

impl<D: Domain> Default for QueryModel<D> {
    fn default() -> Self {
        Self {
            text: String::new(),
            filters: D::Filters::default(),
            sort: D::default_sort(),
        }
    }
}

impl<D: Domain> QueryModel<D> {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn filters(&self) -> &D::Filters {
        &self.filters
    }

    pub fn sort(&self) -> Option<SortBy<D::SortField>> {
        self.sort
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_filter(&mut self, update: <D::Filters as FilterSet>::Update) {
        self.filters.apply(update);
    }

    /// Sorts on `field`, keeping the current direction, or the domain default
    /// direction when nothing was sorted yet.
    pub fn set_sort_field(&mut self, field: D::SortField) {
        let direction = self
            .sort
            .or_else(D::default_sort)
            .map(|sort| sort.direction)
            .unwrap_or_default();
        self.sort = Some(SortBy::new(field, direction));
    }

    /// Changes the direction of the current sort. Returns false when the
    /// domain has nothing sorted to change.
    pub fn set_sort_direction(&mut self, direction: SortDirection) -> bool {
        match self.sort.as_mut() {
            Some(sort) => {
                sort.direction = direction;
                true
            }
            None => false,
        }
    }

    /// Resets text, filters and sort to their defaults together.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Immutable snapshot of what to search for.
#[derive(Clone, Debug, PartialEq)]
pub struct Query<D: Domain> {
    pub index: String,
    pub text: String,
    pub filters: D::Filters,
    pub sort: Option<SortBy<D::SortField>>,
    pub offset: usize,
}

/// Snapshots `model` at `offset` against the index selected by `scope`.
///
/// Pure; performs no I/O.
pub fn compose_query<D: Domain>(
    scope: &D::Scope,
    model: &QueryModel<D>,
    offset: usize,
) -> Query<D> {
    Query {
        index: D::index(scope),
        text: model.text.clone(),
        filters: model.filters.clone(),
        sort: model.sort,
        offset,
    }
}

/// Highlight markers wrapped around matched text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub attributes: Vec<String>,
    pub pre_tag: String,
    pub post_tag: String,
}

/// Flattened request shape understood by a search client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub index: String,
    pub text: String,
    pub filters: Vec<String>,
    pub sort: Vec<String>,
    pub limit: usize,
    pub offset: usize,
    pub highlight: Highlight,
}

impl<D: Domain> Query<D> {
    pub fn to_request(&self, limit: usize, pre_tag: &str, post_tag: &str) -> SearchRequest {
        SearchRequest {
            index: self.index.clone(),
            text: self.text.clone(),
            filters: self.filters.expressions(),
            sort: self.sort.iter().map(SortBy::to_expression).collect(),
            limit,
            offset: self.offset,
            highlight: Highlight {
                attributes: D::HIGHLIGHT.iter().map(|a| a.to_string()).collect(),
                pre_tag: pre_tag.to_string(),
                post_tag: post_tag.to_string(),
            },
        }
    }
}
