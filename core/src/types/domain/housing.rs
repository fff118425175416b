//! Housing listings.

use serde::{Deserialize, Serialize};

use super::{Ratings, filter_expression};
use crate::error::ValidationError;
use crate::query::{Domain, FilterSet};
use crate::types::sort::{SortBy, SortDirection, SortField};

pub const HOUSING_INDEX: &str = "housing";

/// Attribute names in the housing index.
pub mod fields {
    pub const ID: &str = "id";
    pub const OVERALL_RATING: &str = "overall_rating";
    pub const RATINGS: &str = "ratings";
    pub const REVIEW_COUNT: &str = "review_count";
    pub const HOUSING_TYPE: &str = "housing_type";
    pub const CAMPUS_TYPE: &str = "campus_type";
    pub const WALK_TIME_MINS: &str = "walk_time_mins";
    pub const COST_MIN: &str = "cost_min";
    pub const COST_MAX: &str = "cost_max";
    pub const ADDRESS: &str = "address";
    pub const COST_SYMBOL: &str = "cost_symbol";
}

labeled_enum! {
    pub enum HousingType: "housing type" {
        Dorm => "Dorm",
        Apartment => "Apartment",
    }
}

labeled_enum! {
    pub enum CampusType: "campus type" {
        OnCampus => "On-Campus",
        OffCampus => "Off-Campus",
    }
}

labeled_enum! {
    pub enum CostSymbol: "cost symbol" {
        Low => "$",
        Medium => "$$",
        High => "$$$",
    }
}

labeled_enum! {
    /// URL-safe identifier of a residence. Review indexes are named after these.
    pub enum HousingId: "housing id" {
        CaryQuad => "cary-quad",
        McCutcheon => "mc-cutcheon",
        Tarkington => "tarkington",
        Wiley => "wiley",
        Owen => "owen",
        Shreve => "shreve",
        Earhart => "earhart",
        Harrison => "harrison",
        Hillenbrand => "hillenbrand",
        Meredith => "meredith",
        MeredithSouth => "meredith-south",
        Windsor => "windsor",
        FirstStreet => "first-street",
        Hilltop => "hilltop",
        Winifred => "winifred",
        Frieda => "frieda",
        Hawkins => "hawkins",
        Fuse => "fuse",
        Aspire => "aspire",
        ThirdAndWest => "3rd-and-west",
        BenchmarkII => "benchmark-ii",
        Grant333 => "grant-333",
        Provenance => "provenance",
        Russell414 => "russell-414",
        Steely410 => "steely-410",
        Waldron125 => "waldron-125",
        Waldron19 => "waldron-19",
        WaldronSquare => "waldron-square",
        HonorsCollegeResidences => "honors-college-residences",
        Hub => "hub",
        Rise => "rise",
        Chauncey => "chauncey",
        Lark => "lark",
        Allight => "allight",
        Redpoint => "redpoint",
        Verve => "verve",
        River => "river",
        Morris => "morris",
    }
}

impl HousingId {
    pub fn name(&self) -> &'static str {
        match self {
            HousingId::CaryQuad => "Cary Quadrangle",
            HousingId::McCutcheon => "McCutcheon Hall",
            HousingId::Tarkington => "Tarkington Hall",
            HousingId::Wiley => "Wiley Hall",
            HousingId::Owen => "Owen Hall",
            HousingId::Shreve => "Shreve Hall",
            HousingId::Earhart => "Earhart Hall",
            HousingId::Harrison => "Harrison Hall",
            HousingId::Hillenbrand => "Hillenbrand Hall",
            HousingId::Meredith => "Meredith Hall",
            HousingId::MeredithSouth => "Meredith South",
            HousingId::Windsor => "Windsor Halls",
            HousingId::FirstStreet => "First Street Towers",
            HousingId::Hilltop => "Hilltop Apartments",
            HousingId::Winifred => "Winifred Parker Hall",
            HousingId::Frieda => "Frieda Parker Hall",
            HousingId::Hawkins => "Hawkins Hall",
            HousingId::Fuse => "Fuse Apartments",
            HousingId::Aspire => "Aspire at Discovery Park",
            HousingId::ThirdAndWest => "3rd and West",
            HousingId::BenchmarkII => "Benchmark II",
            HousingId::Grant333 => "Grant Street Station 333",
            HousingId::Provenance => "Provenance Apartments",
            HousingId::Russell414 => "414 Russell Street",
            HousingId::Steely410 => "410 Steely Street",
            HousingId::Waldron125 => "125 Waldron Street",
            HousingId::Waldron19 => "19 Waldron Street",
            HousingId::WaldronSquare => "Waldron Square",
            HousingId::HonorsCollegeResidences => "Honors College Residences",
            HousingId::Hub => "Hub on Campus",
            HousingId::Rise => "Rise on Chauncey",
            HousingId::Chauncey => "Chauncey Square Apartments",
            HousingId::Lark => "Lark West Lafayette",
            HousingId::Allight => "Alight West Lafayette",
            HousingId::Redpoint => "Redpoint West Lafayette",
            HousingId::Verve => "Verve West Lafayette",
            HousingId::River => "River Market Apartments",
            HousingId::Morris => "Morris Rentals",
        }
    }

    pub fn campus_type(&self) -> CampusType {
        match self {
            HousingId::Hub
            | HousingId::Rise
            | HousingId::Chauncey
            | HousingId::Lark
            | HousingId::Allight
            | HousingId::Redpoint
            | HousingId::Verve
            | HousingId::River
            | HousingId::Morris => CampusType::OffCampus,
            _ => CampusType::OnCampus,
        }
    }
}

labeled_enum! {
    pub enum HousingSort: "housing sort" {
        OverallRating => "overall_rating",
        WalkTimeMins => "walk_time_mins",
        CostMin => "cost_min",
        CostMax => "cost_max",
        ReviewCount => "review_count",
    }
}

impl HousingSort {
    pub fn label(&self) -> &'static str {
        match self {
            HousingSort::OverallRating => "Rating",
            HousingSort::WalkTimeMins => "Walking Distance to Campus",
            HousingSort::CostMin => "Lowest Cost",
            HousingSort::CostMax => "Highest Cost",
            HousingSort::ReviewCount => "Number of Reviews",
        }
    }

    pub fn direction_label(direction: SortDirection) -> &'static str {
        match direction {
            SortDirection::Asc => "Low to High",
            SortDirection::Desc => "High to Low",
        }
    }
}

impl SortField for HousingSort {
    fn as_str(&self) -> &'static str {
        HousingSort::as_str(self)
    }
}

/// A residence as stored in the housing index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Housing {
    pub id: HousingId,
    /// 0..=500, divide by 100 for stars.
    pub overall_rating: u16,
    pub ratings: Ratings<u16>,
    pub review_count: u32,
    pub housing_type: HousingType,
    pub campus_type: CampusType,
    pub walk_time_mins: u16,
    /// Thousands per year, 1..=255.
    pub cost_min: u8,
    /// Thousands per year, 1..=255.
    pub cost_max: u8,
    pub cost_symbol: CostSymbol,
    pub address: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HousingFilters {
    pub housing_type: Option<HousingType>,
    pub campus_type: Option<CampusType>,
    pub cost_symbol: Option<CostSymbol>,
}

/// A change to one housing filter dimension; `None` clears it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HousingFilter {
    HousingType(Option<HousingType>),
    CampusType(Option<CampusType>),
    CostSymbol(Option<CostSymbol>),
}

impl FilterSet for HousingFilters {
    type Update = HousingFilter;

    fn apply(&mut self, update: HousingFilter) {
        match update {
            HousingFilter::HousingType(value) => self.housing_type = value,
            HousingFilter::CampusType(value) => self.campus_type = value,
            HousingFilter::CostSymbol(value) => self.cost_symbol = value,
        }
    }

    fn parse_update(field: &str, value: &str) -> Result<HousingFilter, ValidationError> {
        match field {
            fields::HOUSING_TYPE => Ok(HousingFilter::HousingType(HousingType::parse_filter(
                value,
            )?)),
            fields::CAMPUS_TYPE => Ok(HousingFilter::CampusType(CampusType::parse_filter(
                value,
            )?)),
            fields::COST_SYMBOL => Ok(HousingFilter::CostSymbol(CostSymbol::parse_filter(
                value,
            )?)),
            _ => Err(ValidationError::UnknownValue {
                kind: "housing filter",
                value: field.to_string(),
            }),
        }
    }

    fn expressions(&self) -> Vec<String> {
        let mut filters = Vec::new();

        if let Some(housing_type) = self.housing_type {
            filters.push(filter_expression(fields::HOUSING_TYPE, housing_type));
        }

        if let Some(campus_type) = self.campus_type {
            filters.push(filter_expression(fields::CAMPUS_TYPE, campus_type));
        }

        if let Some(cost_symbol) = self.cost_symbol {
            filters.push(filter_expression(fields::COST_SYMBOL, cost_symbol));
        }

        filters
    }
}

/// The housing-listings search domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Listings;

impl Domain for Listings {
    type Record = Housing;
    type Filters = HousingFilters;
    type SortField = HousingSort;
    type Scope = ();

    const HIGHLIGHT: &'static [&'static str] = &[fields::ID];

    fn index(_scope: &()) -> String {
        HOUSING_INDEX.to_string()
    }

    /// Most-reviewed first.
    fn default_sort() -> Option<SortBy<HousingSort>> {
        Some(SortBy::new(HousingSort::ReviewCount, SortDirection::Desc))
    }
}
