//! Per-tool payload types, validators, agronomy tables, and arithmetic.
//! Each tool owns a stream preset (name, capacity, display limit) matching
//! the retention the field apps always used.

pub mod calendar;
pub mod fertilizer;
pub mod irrigation;
pub mod loan;
pub mod mandi;
pub mod moisture;
pub mod soil;
pub mod weather;
pub mod yields;

use serde::{Deserialize, Serialize};

/// Crops the advisory tables cover. Individual tables support a subset;
/// lookups return `None` (or fall back, where the tool always did) for the
/// rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Wheat,
    Rice,
    Maize,
    Sugarcane,
    Potato,
    Tomato,
    Mustard,
    Cotton,
    Vegetables,
}

impl Crop {
    pub fn label(&self) -> &'static str {
        match self {
            Crop::Wheat => "wheat",
            Crop::Rice => "rice",
            Crop::Maize => "maize",
            Crop::Sugarcane => "sugarcane",
            Crop::Potato => "potato",
            Crop::Tomato => "tomato",
            Crop::Mustard => "mustard",
            Crop::Cotton => "cotton",
            Crop::Vegetables => "vegetables",
        }
    }
}
