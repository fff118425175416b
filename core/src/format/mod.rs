//! Display helpers for ratings, costs, dates and map links.

use chrono::{DateTime, NaiveDate};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::types::domain::ReviewRating;

/// Characters left as-is in a URL query component.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const MAX_RATING: u16 = 500;
const MIN_COST: u8 = 1;
const MAX_COST: u8 = 255;

/// Stored ratings run 0..=500; shown as 0.0..=5.0.
pub fn rating_to_base5(rating: u16) -> f64 {
    f64::from(rating.min(MAX_RATING)) / 100.0
}

/// Star count picked in a form, 0 meaning unset.
pub fn stars_to_rating(stars: u8) -> Option<ReviewRating> {
    ReviewRating::try_from(u16::from(stars.min(5)) * 100).ok()
}

/// e.g. `"4.20"`.
pub fn housing_rating_label(rating: u16) -> String {
    format!("{:.2}", rating_to_base5(rating))
}

/// Whole stars, e.g. `"4"`.
pub fn review_rating_label(rating: u16) -> String {
    format!("{}", rating_to_base5(rating).round())
}

/// Yearly cost in thousands, e.g. `"Around $8,000 - $10,000 per year"`.
pub fn cost_label(cost_min: u8, cost_max: u8) -> String {
    let low = cost_min.min(cost_max).clamp(MIN_COST, MAX_COST);
    let high = cost_min.max(cost_max).clamp(MIN_COST, MAX_COST);

    if low == high {
        format!("Around ${low},000 per year")
    } else {
        format!("Around ${low},000 - ${high},000 per year")
    }
}

/// Walking directions from `address` to WALC.
pub fn walk_link(address: &str) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&origin={}&destination=WALC,+West+Lafayette,+IN&travelmode=walking",
        utf8_percent_encode(address, COMPONENT)
    )
}

/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(date)
        .map(|timestamp| timestamp.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(date, "%Y-%m-%d"))
        .ok()
}

/// e.g. `"March 2025"`.
pub fn review_date_label(date: &str) -> Option<String> {
    parse_date(date).map(|date| date.format("%B %Y").to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpirationColor {
    Red,
    Yellow,
    Green,
}

impl ExpirationColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpirationColor::Red => "red",
            ExpirationColor::Yellow => "yellow",
            ExpirationColor::Green => "green",
        }
    }
}

/// Countdown shown on a marketplace item. Past dates count as today.
pub fn expiry_label(expires: NaiveDate, today: NaiveDate) -> (String, ExpirationColor) {
    match (expires - today).num_days().max(0) {
        0 => ("Expires today!".to_string(), ExpirationColor::Red),
        1 => ("Expires tommorow!".to_string(), ExpirationColor::Yellow),
        days => (format!("Expires in {days} days."), ExpirationColor::Green),
    }
}

#[cfg(test)]
mod tests;
