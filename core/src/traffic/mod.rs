//! Home-page traffic chart data.

use std::fmt;

use crate::state::Notify;
use crate::types::domain::ChartData;

pub const VISITORS_PATH: &str = "/visitors";

/// Latest visitor counts, busiest site first.
#[derive(Default)]
pub struct TrafficState {
    data: Vec<ChartData>,
    notify: Option<Notify>,
}

impl fmt::Debug for TrafficState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrafficState")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl TrafficState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notify(mut self, notify: Notify) -> Self {
        self.notify = Some(notify);
        self
    }

    pub fn data(&self) -> &[ChartData] {
        &self.data
    }

    /// Replaces the chart data, ordered by visitors descending. Sites with
    /// equal counts keep the order the backend sent them in.
    pub fn set_data(&mut self, mut data: Vec<ChartData>) {
        data.sort_by(|a, b| b.visitors.cmp(&a.visitors));
        tracing::debug!("traffic chart updated with {} sites", data.len());
        self.data = data;
        if let Some(notify) = &self.notify {
            notify();
        }
    }
}

/// Compact count label: `999`, `1.0K`, `3.4M`, `5.6B`.
///
/// One decimal, rounded half up.
pub fn format_count(count: u64) -> String {
    const UNITS: [(u64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

    for (unit, suffix) in UNITS {
        if count >= unit {
            let tenths = (u128::from(count) * 10 + u128::from(unit) / 2) / u128::from(unit);
            return format!("{}.{}{suffix}", tenths / 10, tenths % 10);
        }
    }
    count.to_string()
}

#[cfg(test)]
mod tests;
