//! Soil moisture probe readings.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::store::{InvalidPayload, Payload, RecordLog, Storage, StreamConfig};

pub const STREAM: &str = "soilMoistureReadings";
pub const CAPACITY: usize = 50;
/// The readings view shows the latest 10.
pub const DISPLAY_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoistureReading {
    pub percent: u8,
}

impl MoistureReading {
    pub fn new(percent: u8) -> Self {
        Self { percent }
    }

    pub fn band(&self) -> MoistureBand {
        MoistureBand::of(self.percent)
    }
}

impl Payload for MoistureReading {
    fn validate(&self) -> Result<(), InvalidPayload> {
        if self.percent > 100 {
            return Err(InvalidPayload::new(
                "moisture must be between 0 and 100 percent",
            ));
        }
        Ok(())
    }

    fn metric(&self) -> Option<f64> {
        Some(f64::from(self.percent))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoistureBand {
    VeryDry,
    Low,
    Good,
    Wet,
}

impl MoistureBand {
    pub fn of(percent: u8) -> Self {
        match percent {
            0..=19 => MoistureBand::VeryDry,
            20..=39 => MoistureBand::Low,
            40..=70 => MoistureBand::Good,
            _ => MoistureBand::Wet,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoistureBand::VeryDry => "very dry - water needed",
            MoistureBand::Low => "low moisture",
            MoistureBand::Good => "good moisture",
            MoistureBand::Wet => "very wet",
        }
    }
}

/// Opens the probe's reading stream with its retention policy. The average
/// is shown as a whole percent.
pub fn open_log(storage: Arc<dyn Storage>) -> RecordLog<MoistureReading> {
    RecordLog::open(StreamConfig::new(STREAM, CAPACITY).rounded_mean(), storage)
}
