//! Mandi (market) price board simulation and price alerts.

use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::store::{InvalidPayload, ListOrder, Payload, Record, RecordLog, Storage, StreamConfig};

pub const ALERT_STREAM: &str = "price_alerts";
pub const ALERT_CAPACITY: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Grains,
    Vegetables,
    Pulses,
    Oilseeds,
}

/// A traded commodity with its reference price in rupees per quintal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commodity {
    pub name: &'static str,
    pub category: Category,
    pub base_price: u32,
}

pub const COMMODITIES: &[Commodity] = &[
    Commodity { name: "Wheat", category: Category::Grains, base_price: 2200 },
    Commodity { name: "Rice (Paddy)", category: Category::Grains, base_price: 2100 },
    Commodity { name: "Maize", category: Category::Grains, base_price: 1850 },
    Commodity { name: "Barley", category: Category::Grains, base_price: 1750 },
    Commodity { name: "Bajra", category: Category::Grains, base_price: 2250 },
    Commodity { name: "Potato", category: Category::Vegetables, base_price: 1200 },
    Commodity { name: "Onion", category: Category::Vegetables, base_price: 1800 },
    Commodity { name: "Tomato", category: Category::Vegetables, base_price: 2500 },
    Commodity { name: "Cauliflower", category: Category::Vegetables, base_price: 1500 },
    Commodity { name: "Cabbage", category: Category::Vegetables, base_price: 800 },
    Commodity { name: "Chana", category: Category::Pulses, base_price: 5200 },
    Commodity { name: "Moong", category: Category::Pulses, base_price: 7500 },
    Commodity { name: "Urad", category: Category::Pulses, base_price: 6800 },
    Commodity { name: "Masoor", category: Category::Pulses, base_price: 5500 },
    Commodity { name: "Arhar", category: Category::Pulses, base_price: 6500 },
    Commodity { name: "Mustard", category: Category::Oilseeds, base_price: 5000 },
    Commodity { name: "Groundnut", category: Category::Oilseeds, base_price: 5500 },
    Commodity { name: "Soybean", category: Category::Oilseeds, base_price: 4200 },
    Commodity { name: "Sunflower", category: Category::Oilseeds, base_price: 5800 },
];

pub fn by_category(category: Category) -> impl Iterator<Item = &'static Commodity> {
    COMMODITIES.iter().filter(move |c| c.category == category)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum District {
    Lucknow,
    Kanpur,
    Agra,
    Varanasi,
    Allahabad,
    Meerut,
    Gorakhpur,
    Bareilly,
}

impl District {
    pub fn multiplier(&self) -> f64 {
        match self {
            District::Lucknow => 1.02,
            District::Kanpur => 0.98,
            District::Agra => 1.01,
            District::Varanasi => 0.97,
            District::Allahabad => 1.0,
            District::Meerut => 1.03,
            District::Gorakhpur => 0.96,
            District::Bareilly => 0.99,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub commodity: &'static Commodity,
    pub price: u32,
    /// Day-over-day movement in rupees.
    pub change: i32,
}

/// Simulated market refresh: every commodity lands within +-5% of its
/// district-adjusted base, with a movement of up to +-100 rupees.
pub fn quote_board<R: Rng>(district: District, rng: &mut R) -> Vec<Quote> {
    COMMODITIES
        .iter()
        .map(|commodity| {
            let jitter = 0.95 + rng.random::<f64>() * 0.1;
            let price =
                (f64::from(commodity.base_price) * district.multiplier() * jitter).round() as u32;
            let change = ((rng.random::<f64>() - 0.5) * 200.0).round() as i32;
            Quote {
                commodity,
                price,
                change,
            }
        })
        .collect()
}

/// A saved watch: notify when the crop trades at or above the threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceAlert {
    pub crop: String,
    pub threshold_rupees: u32,
}

impl PriceAlert {
    pub fn new(crop: impl Into<String>, threshold_rupees: u32) -> Self {
        Self {
            crop: crop.into(),
            threshold_rupees,
        }
    }
}

impl Payload for PriceAlert {
    fn validate(&self) -> Result<(), InvalidPayload> {
        if self.crop.trim().is_empty() {
            return Err(InvalidPayload::new("alert crop must not be empty"));
        }
        if self.threshold_rupees == 0 {
            return Err(InvalidPayload::new("alert price must be positive"));
        }
        Ok(())
    }

    fn metric(&self) -> Option<f64> {
        Some(f64::from(self.threshold_rupees))
    }
}

/// Alerts firing against the current board: the first commodity whose name
/// contains the alert text (case-insensitive), at or above the threshold.
pub fn triggered<'a>(
    alerts: &'a RecordLog<PriceAlert>,
    board: &'a [Quote],
) -> Vec<(&'a Record<PriceAlert>, &'a Quote)> {
    alerts
        .list(None, ListOrder::OldestFirst)
        .filter_map(|record| {
            let needle = record.payload.crop.to_lowercase();
            board
                .iter()
                .find(|quote| quote.commodity.name.to_lowercase().contains(&needle))
                .filter(|quote| quote.price >= record.payload.threshold_rupees)
                .map(|quote| (record, quote))
        })
        .collect()
}

pub fn open_alerts(storage: Arc<dyn Storage>) -> RecordLog<PriceAlert> {
    RecordLog::open(StreamConfig::new(ALERT_STREAM, ALERT_CAPACITY), storage)
}
