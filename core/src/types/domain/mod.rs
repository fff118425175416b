//! Entity types: marketplace items, housing listings, reviews and site
//! traffic.
//!
//! Each searchable submodule defines the record shape returned by the index, the
//! allowed filter values, the sortable fields and a [`Domain`](crate::query::Domain)
//! marker tying them together.

use serde::{Deserialize, Serialize};

/// Declares a closed set of string-labelled values.
///
/// Generates `ALL`, `as_str`, `Display`, `FromStr` and `parse_filter`, where
/// the empty string parses as "unfiltered".
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $kind:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            Debug,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        $vis enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Parses a filter control value. `""` means no constraint.
            pub fn parse_filter(
                value: &str,
            ) -> Result<Option<Self>, $crate::error::ValidationError> {
                if value.is_empty() {
                    return Ok(None);
                }
                value.parse().map(Some)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    _ => Err($crate::error::ValidationError::UnknownValue {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

pub mod housing;
pub mod items;
pub mod reviews;
pub mod traffic;

pub use housing::{
    CampusType, CostSymbol, Housing, HousingFilter, HousingFilters, HousingId, HousingSort,
    HousingType, Listings,
};
pub use items::{Condition, Emoji, Item, ItemFilter, ItemFilters, ItemType, Items, Location};
pub use reviews::{
    Review, ReviewFilter, ReviewFilters, ReviewRating, ReviewSort, Reviews, ThumbsDelta,
};
pub use traffic::{ChartData, Website};

/// Per-category breakdown shared by housing aggregates and individual reviews.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratings<T> {
    pub living_conditions: T,
    pub location: T,
    pub amenities: T,
    pub value: T,
    pub community: T,
}

impl<T> Ratings<T> {
    pub fn iter(&self) -> impl Iterator<Item = (RatingCategory, &T)> {
        [
            (RatingCategory::LivingConditions, &self.living_conditions),
            (RatingCategory::Location, &self.location),
            (RatingCategory::Amenities, &self.amenities),
            (RatingCategory::Value, &self.value),
            (RatingCategory::Community, &self.community),
        ]
        .into_iter()
    }
}

labeled_enum! {
    /// Rating categories reviewers score individually.
    pub enum RatingCategory: "rating category" {
        LivingConditions => "living_conditions",
        Location => "location",
        Amenities => "amenities",
        Value => "value",
        Community => "community",
    }
}

impl RatingCategory {
    pub fn label(&self) -> &'static str {
        match self {
            RatingCategory::LivingConditions => "Living Conditions",
            RatingCategory::Location => "Location & Accessibility",
            RatingCategory::Amenities => "Amenities",
            RatingCategory::Value => "Value",
            RatingCategory::Community => "Community",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RatingCategory::LivingConditions => {
                "Cleanliness, maintenance, noise levels, room condition, AC/heating"
            }
            RatingCategory::Location => {
                "Proximity to campus, bus stops, groceries, accessibility features"
            }
            RatingCategory::Amenities => {
                "Laundry, internet, study areas, gym, kitchen, parking, security"
            }
            RatingCategory::Value => "Rent vs quality, utility inclusions, lease flexibility",
            RatingCategory::Community => "Resident community, events, staff friendliness",
        }
    }
}

pub(crate) fn filter_expression(field: &str, value: impl std::fmt::Display) -> String {
    format!("{field} = {value}")
}
