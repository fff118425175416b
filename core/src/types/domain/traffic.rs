//! Visitor counts across the sibling sites shown on the home page.

use serde::{Deserialize, Serialize};

labeled_enum! {
    pub enum Website: "website" {
        BoilerSwap => "BoilerSwap",
        BoilerCuts => "BoilerCuts",
        Voting => "Voting",
        Home => "Home",
    }
}

/// One bar of the traffic chart as the home backend reports it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    pub website: Website,
    pub visitors: u64,
    pub color: String,
}
