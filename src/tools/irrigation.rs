//! Irrigation water tracking.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::store::{InvalidPayload, ListOrder, Payload, RecordLog, Storage, StreamConfig};

pub const STREAM: &str = "water_logs";
pub const CAPACITY: usize = 50;
pub const DISPLAY_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterSource {
    Tubewell,
    Canal,
    Pond,
}

impl WaterSource {
    /// Liters delivered per hour of running.
    pub fn flow_rate(&self) -> u32 {
        match self {
            WaterSource::Tubewell => 500,
            WaterSource::Canal => 200,
            WaterSource::Pond => 100,
        }
    }

    /// Running cost in rupees per hour.
    pub fn cost_rate(&self) -> u32 {
        match self {
            WaterSource::Tubewell => 50,
            WaterSource::Canal => 20,
            WaterSource::Pond => 10,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WaterSource::Tubewell => "tubewell",
            WaterSource::Canal => "canal",
            WaterSource::Pond => "pond",
        }
    }
}

/// One irrigation session. Water volume and cost derive from the source
/// rates at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrrigationLog {
    pub field: String,
    pub source: WaterSource,
    pub duration_hours: f64,
    pub water_liters: u32,
    pub cost_rupees: u32,
}

impl IrrigationLog {
    pub fn new(field: impl Into<String>, source: WaterSource, duration_hours: f64) -> Self {
        let water_liters = (duration_hours * f64::from(source.flow_rate())).round() as u32;
        let cost_rupees = (duration_hours * f64::from(source.cost_rate())).round() as u32;
        Self {
            field: field.into(),
            source,
            duration_hours,
            water_liters,
            cost_rupees,
        }
    }
}

impl Payload for IrrigationLog {
    fn validate(&self) -> Result<(), InvalidPayload> {
        if self.field.trim().is_empty() {
            return Err(InvalidPayload::new("field name must not be empty"));
        }
        if !self.duration_hours.is_finite() || self.duration_hours <= 0.0 {
            return Err(InvalidPayload::new("duration must be a positive number of hours"));
        }
        Ok(())
    }

    fn metric(&self) -> Option<f64> {
        Some(f64::from(self.water_liters))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UsageSummary {
    pub total_water_liters: u64,
    pub total_cost_rupees: u64,
    /// Total water divided by the number of distinct calendar days logged
    /// (at least one, so an empty stream reads as zero).
    pub avg_daily_liters: u64,
}

pub fn summarize(log: &RecordLog<IrrigationLog>) -> UsageSummary {
    let mut total_water = 0u64;
    let mut total_cost = 0u64;
    let mut days = HashSet::new();

    for record in log.list(None, ListOrder::OldestFirst) {
        total_water += u64::from(record.payload.water_liters);
        total_cost += u64::from(record.payload.cost_rupees);
        days.insert(record.timestamp.date_naive());
    }

    let day_count = days.len().max(1) as u64;
    UsageSummary {
        total_water_liters: total_water,
        total_cost_rupees: total_cost,
        avg_daily_liters: (total_water as f64 / day_count as f64).round() as u64,
    }
}

pub fn open_log(storage: Arc<dyn Storage>) -> RecordLog<IrrigationLog> {
    RecordLog::open(StreamConfig::new(STREAM, CAPACITY), storage)
}
