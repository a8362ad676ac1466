//! Full soil analysis: simulated probe, per-crop optima, recommendations.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::store::{InvalidPayload, Payload, RecordLog, Storage, StreamConfig};

use super::Crop;

pub const STREAM: &str = "soilsense_readings";
pub const CAPACITY: usize = 20;
pub const DISPLAY_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// One analysis cycle: NPK in kg/ha, moisture at the surface and at three
/// probe depths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilScan {
    pub moisture: u8,
    pub ph: f64,
    pub nitrogen: u16,
    pub phosphorus: u16,
    pub potassium: u16,
    pub depth_moisture: [u8; 3],
    pub location: Option<GeoPoint>,
}

impl Payload for SoilScan {
    fn validate(&self) -> Result<(), InvalidPayload> {
        if self.moisture > 100 || self.depth_moisture.iter().any(|&m| m > 100) {
            return Err(InvalidPayload::new(
                "moisture must be between 0 and 100 percent",
            ));
        }
        if !(0.0..=14.0).contains(&self.ph) {
            return Err(InvalidPayload::new("pH must be on the 0-14 scale"));
        }
        Ok(())
    }

    fn metric(&self) -> Option<f64> {
        Some(f64::from(self.moisture))
    }
}

/// Simulated probe. Value ranges match the field hardware the readings
/// stand in for.
pub struct SoilProbe<R: Rng> {
    rng: R,
    latency: Duration,
    location: Option<GeoPoint>,
}

impl<R: Rng> SoilProbe<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            latency: Duration::from_millis(2500),
            location: None,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Tags subsequent scans with a saved GPS position.
    pub fn set_location(&mut self, location: GeoPoint) {
        self.location = Some(location);
    }

    /// One measurement cycle: waits out the probe latency, then reads.
    pub async fn sample(&mut self) -> SoilScan {
        tokio::time::sleep(self.latency).await;
        self.generate()
    }

    pub fn generate(&mut self) -> SoilScan {
        SoilScan {
            moisture: self.rng.random_range(20..80),
            ph: f64::from(self.rng.random_range(45u32..85)) / 10.0,
            nitrogen: self.rng.random_range(50..200),
            phosphorus: self.rng.random_range(20..120),
            potassium: self.rng.random_range(30..150),
            depth_moisture: [
                self.rng.random_range(40..80),
                self.rng.random_range(35..70),
                self.rng.random_range(25..55),
            ],
            location: self.location,
        }
    }
}

/// Optimal growing ranges per crop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimalRange {
    pub ph: (f64, f64),
    pub nitrogen: (u16, u16),
    pub phosphorus: (u16, u16),
    pub potassium: (u16, u16),
    pub moisture: (u8, u8),
}

pub fn optimal_for(crop: Crop) -> Option<&'static OptimalRange> {
    match crop {
        Crop::Wheat => Some(&OptimalRange {
            ph: (6.0, 7.5),
            nitrogen: (120, 150),
            phosphorus: (60, 80),
            potassium: (40, 60),
            moisture: (50, 70),
        }),
        Crop::Rice => Some(&OptimalRange {
            ph: (5.5, 7.0),
            nitrogen: (100, 140),
            phosphorus: (50, 70),
            potassium: (60, 80),
            moisture: (70, 90),
        }),
        Crop::Sugarcane => Some(&OptimalRange {
            ph: (6.0, 7.5),
            nitrogen: (150, 200),
            phosphorus: (80, 100),
            potassium: (80, 120),
            moisture: (60, 80),
        }),
        Crop::Potato => Some(&OptimalRange {
            ph: (5.5, 6.5),
            nitrogen: (100, 130),
            phosphorus: (100, 120),
            potassium: (120, 150),
            moisture: (60, 80),
        }),
        Crop::Mustard => Some(&OptimalRange {
            ph: (6.0, 7.0),
            nitrogen: (80, 100),
            phosphorus: (40, 60),
            potassium: (40, 50),
            moisture: (40, 60),
        }),
        Crop::Vegetables => Some(&OptimalRange {
            ph: (6.0, 7.0),
            nitrogen: (100, 150),
            phosphorus: (60, 100),
            potassium: (80, 120),
            moisture: (60, 75),
        }),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub title: &'static str,
    pub advice: String,
}

/// Corrective actions for a scan against the crop's optima. Crops with no
/// optima table get no recommendations.
pub fn recommendations(scan: &SoilScan, crop: Crop) -> Vec<Recommendation> {
    let Some(optimal) = optimal_for(crop) else {
        return Vec::new();
    };
    let mut out = Vec::new();

    if scan.ph < optimal.ph.0 {
        out.push(Recommendation {
            title: "pH correction",
            advice: "Add agricultural lime (2-3 kg per bigha) to raise pH.".to_string(),
        });
    } else if scan.ph > optimal.ph.1 {
        out.push(Recommendation {
            title: "pH correction",
            advice: "Add sulfur or gypsum to lower pH.".to_string(),
        });
    }

    if scan.nitrogen < optimal.nitrogen.0 {
        let urea_kg = (f64::from(optimal.nitrogen.0 - scan.nitrogen) / 2.0).ceil() as u16;
        out.push(Recommendation {
            title: "Nitrogen deficiency",
            advice: format!("Apply urea ({urea_kg} kg/bigha) or DAP fertilizer."),
        });
    }

    if scan.phosphorus < optimal.phosphorus.0 {
        out.push(Recommendation {
            title: "Phosphorus deficiency",
            advice: "Apply SSP or DAP fertilizer for phosphorus.".to_string(),
        });
    }

    if scan.potassium < optimal.potassium.0 {
        out.push(Recommendation {
            title: "Potassium deficiency",
            advice: "Apply MOP (muriate of potash) fertilizer.".to_string(),
        });
    }

    if scan.moisture < optimal.moisture.0 {
        out.push(Recommendation {
            title: "Irrigation needed",
            advice: format!(
                "Irrigate within 24-48 hours for optimal {} growth.",
                crop.label()
            ),
        });
    } else if scan.moisture > optimal.moisture.1 {
        out.push(Recommendation {
            title: "Excess moisture",
            advice: "Ensure proper drainage. Avoid watering for 2-3 days.".to_string(),
        });
    }

    if out.is_empty() {
        out.push(Recommendation {
            title: "Soil health good",
            advice: format!(
                "Conditions are optimal for {}. Continue current practices.",
                crop.label()
            ),
        });
    }

    out
}

pub fn open_log(storage: Arc<dyn Storage>) -> RecordLog<SoilScan> {
    RecordLog::open(StreamConfig::new(STREAM, CAPACITY).rounded_mean(), storage)
}
