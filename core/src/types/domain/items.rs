//! Marketplace items.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::filter_expression;
use crate::error::ValidationError;
use crate::query::{Domain, FilterSet};
use crate::types::sort::{SortBy, Unsorted};

pub const ITEMS_INDEX: &str = "items";

/// Attribute names in the items index.
pub mod fields {
    pub const ITEM_ID: &str = "item_id";
    pub const ITEM_TYPE: &str = "item_type";
    pub const TITLE: &str = "title";
    pub const CONDITION: &str = "condition";
    pub const LOCATION: &str = "location";
    pub const DESCRIPTION: &str = "description";
    pub const EMOJI: &str = "emoji";
    pub const EXPIRATION_DATE: &str = "expiration_date";
    pub const FORMATTED: &str = "_formatted";
}

labeled_enum! {
    pub enum ItemType: "item type" {
        Furniture => "Furniture",
        Electronics => "Electronics",
        Books => "Books",
        Kitchen => "Kitchen",
        Clothing => "Clothing",
        Decor => "Decor",
        Other => "Other",
    }
}

labeled_enum! {
    pub enum Condition: "condition" {
        Excellent => "Excellent",
        Good => "Good",
        Fair => "Fair",
    }
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Excellent => "Excellent - Like new, minimal wear",
            Condition::Good => "Good - Some wear but fully functional",
            Condition::Fair => "Fair - Noticeable wear but still usable",
        }
    }
}

labeled_enum! {
    /// Pickup location (residence hall).
    pub enum Location: "location" {
        CaryQuadEast => "CaryQuadEast",
        WileyHall => "WileyHall",
        HarrisonHall => "HarrisonHall",
        EarhartHall => "EarhartHall",
        HillenbrandHall => "HillenbrandHall",
        ThirdStreetSuites => "ThirdStreetSuites",
    }
}

impl Location {
    pub fn label(&self) -> &'static str {
        match self {
            Location::CaryQuadEast => "Cary Quad - East",
            Location::WileyHall => "Wiley Hall",
            Location::HarrisonHall => "Harrison Hall",
            Location::EarhartHall => "Earhart Hall",
            Location::HillenbrandHall => "Hillenbrand Hall",
            Location::ThirdStreetSuites => "Third Street Suites",
        }
    }
}

labeled_enum! {
    pub enum Emoji: "emoji" {
        Chair => "Chair",
        Snowflake => "Snowflake",
        Books => "Books",
        Pan => "Pan",
        Monitor => "Monitor",
        Decor => "Decor",
    }
}

impl Emoji {
    pub fn glyph(&self) -> &'static str {
        match self {
            Emoji::Chair => "\u{1FA91}",
            Emoji::Snowflake => "\u{2744}\u{FE0F}",
            Emoji::Books => "\u{1F4DA}",
            Emoji::Pan => "\u{1F373}",
            Emoji::Monitor => "\u{1F5A5}\u{FE0F}",
            Emoji::Decor => "\u{1F3A8}",
        }
    }
}

/// A marketplace listing as stored in the items index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    pub item_type: ItemType,
    pub title: String,
    pub condition: Condition,
    pub location: Location,
    pub description: String,
    pub emoji: Emoji,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    /// Highlighted copies of matched attributes.
    #[serde(rename = "_formatted", default, skip_serializing_if = "Option::is_none")]
    pub formatted: Option<Map<String, Value>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemFilters {
    pub item_type: Option<ItemType>,
    pub location: Option<Location>,
    pub condition: Option<Condition>,
}

/// A change to one item filter dimension; `None` clears it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemFilter {
    ItemType(Option<ItemType>),
    Location(Option<Location>),
    Condition(Option<Condition>),
}

impl FilterSet for ItemFilters {
    type Update = ItemFilter;

    fn apply(&mut self, update: ItemFilter) {
        match update {
            ItemFilter::ItemType(value) => self.item_type = value,
            ItemFilter::Location(value) => self.location = value,
            ItemFilter::Condition(value) => self.condition = value,
        }
    }

    fn parse_update(field: &str, value: &str) -> Result<ItemFilter, ValidationError> {
        match field {
            fields::ITEM_TYPE => Ok(ItemFilter::ItemType(ItemType::parse_filter(value)?)),
            fields::LOCATION => Ok(ItemFilter::Location(Location::parse_filter(value)?)),
            fields::CONDITION => Ok(ItemFilter::Condition(Condition::parse_filter(value)?)),
            _ => Err(ValidationError::UnknownValue {
                kind: "item filter",
                value: field.to_string(),
            }),
        }
    }

    fn expressions(&self) -> Vec<String> {
        let mut filters = Vec::new();

        if let Some(item_type) = self.item_type {
            filters.push(filter_expression(fields::ITEM_TYPE, item_type));
        }

        if let Some(location) = self.location {
            filters.push(filter_expression(fields::LOCATION, location));
        }

        if let Some(condition) = self.condition {
            filters.push(filter_expression(fields::CONDITION, condition));
        }

        filters
    }
}

/// The marketplace search domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Items;

impl Domain for Items {
    type Record = Item;
    type Filters = ItemFilters;
    type SortField = Unsorted;
    type Scope = ();

    const HIGHLIGHT: &'static [&'static str] = &[fields::TITLE, fields::DESCRIPTION];

    fn index(_scope: &()) -> String {
        ITEMS_INDEX.to_string()
    }

    fn default_sort() -> Option<SortBy<Unsorted>> {
        None
    }
}
