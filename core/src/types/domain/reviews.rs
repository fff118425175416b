//! Housing reviews. Each residence has its own review index.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::housing::HousingId;
use super::{Ratings, filter_expression};
use crate::error::ValidationError;
use crate::query::{Domain, FilterSet};
use crate::types::ReviewId;
use crate::types::sort::{SortBy, SortDirection, SortField};

/// Attribute names in a review index.
pub mod fields {
    pub const ID: &str = "id";
    pub const HOUSING_ID: &str = "housing_id";
    pub const OVERALL_RATING: &str = "overall_rating";
    pub const RATINGS: &str = "ratings";
    pub const DATE: &str = "date";
    pub const DESCRIPTION: &str = "description";
    pub const THUMBS_UP: &str = "thumbs_up";
    pub const THUMBS_DOWN: &str = "thumbs_down";
}

/// Star rating stored as 100, 200, 300, 400 or 500.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum ReviewRating {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl ReviewRating {
    pub const ALL: &'static [ReviewRating] = &[
        ReviewRating::One,
        ReviewRating::Two,
        ReviewRating::Three,
        ReviewRating::Four,
        ReviewRating::Five,
    ];

    pub fn value(self) -> u16 {
        match self {
            ReviewRating::One => 100,
            ReviewRating::Two => 200,
            ReviewRating::Three => 300,
            ReviewRating::Four => 400,
            ReviewRating::Five => 500,
        }
    }

    pub fn stars(self) -> u8 {
        (self.value() / 100) as u8
    }

    /// Parses a filter control value. `""` and `"0"` mean no constraint.
    pub fn parse_filter(value: &str) -> Result<Option<Self>, ValidationError> {
        match value {
            "" | "0" => Ok(None),
            _ => value.parse().map(Some),
        }
    }
}

impl TryFrom<u16> for ReviewRating {
    type Error = ValidationError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            100 => Ok(ReviewRating::One),
            200 => Ok(ReviewRating::Two),
            300 => Ok(ReviewRating::Three),
            400 => Ok(ReviewRating::Four),
            500 => Ok(ReviewRating::Five),
            _ => Err(ValidationError::UnknownValue {
                kind: "review rating",
                value: value.to_string(),
            }),
        }
    }
}

impl From<ReviewRating> for u16 {
    fn from(rating: ReviewRating) -> Self {
        rating.value()
    }
}

impl fmt::Display for ReviewRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for ReviewRating {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u16 = s.parse().map_err(|_| ValidationError::UnknownValue {
            kind: "review rating",
            value: s.to_string(),
        })?;
        ReviewRating::try_from(value)
    }
}

labeled_enum! {
    pub enum ReviewSort: "review sort" {
        Date => "date",
    }
}

impl ReviewSort {
    pub fn direction_label(direction: SortDirection) -> &'static str {
        match direction {
            SortDirection::Asc => "Oldest First",
            SortDirection::Desc => "Most Recent",
        }
    }
}

impl SortField for ReviewSort {
    fn as_str(&self) -> &'static str {
        ReviewSort::as_str(self)
    }
}

labeled_enum! {
    /// A helpful / not helpful vote on a review.
    pub enum ThumbsDelta: "thumbs delta" {
        Up => "up",
        Down => "down",
    }
}

/// A review as stored in a residence's review index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ReviewId>,
    pub housing_id: HousingId,
    pub overall_rating: ReviewRating,
    pub ratings: Ratings<ReviewRating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbs_up: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbs_down: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewFilters {
    pub overall_rating: Option<ReviewRating>,
}

/// A change to the review filter; `None` clears it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewFilter {
    OverallRating(Option<ReviewRating>),
}

impl FilterSet for ReviewFilters {
    type Update = ReviewFilter;

    fn apply(&mut self, update: ReviewFilter) {
        match update {
            ReviewFilter::OverallRating(value) => self.overall_rating = value,
        }
    }

    fn parse_update(field: &str, value: &str) -> Result<ReviewFilter, ValidationError> {
        match field {
            fields::OVERALL_RATING => Ok(ReviewFilter::OverallRating(
                ReviewRating::parse_filter(value)?,
            )),
            _ => Err(ValidationError::UnknownValue {
                kind: "review filter",
                value: field.to_string(),
            }),
        }
    }

    fn expressions(&self) -> Vec<String> {
        self.overall_rating
            .map(|rating| filter_expression(fields::OVERALL_RATING, rating))
            .into_iter()
            .collect()
    }
}

/// The review search domain, scoped to one residence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reviews;

impl Domain for Reviews {
    type Record = Review;
    type Filters = ReviewFilters;
    type SortField = ReviewSort;
    type Scope = HousingId;

    const HIGHLIGHT: &'static [&'static str] = &[fields::DESCRIPTION];

    fn index(scope: &HousingId) -> String {
        scope.as_str().to_string()
    }

    /// Most recent first.
    fn default_sort() -> Option<SortBy<ReviewSort>> {
        Some(SortBy::new(ReviewSort::Date, SortDirection::Desc))
    }
}
