//! Fertilizer dose planning: crop nutrient demand to commercial product
//! quantities, application schedule, and cost.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::store::{InvalidPayload, Payload, RecordLog, Storage, StreamConfig};

use super::Crop;

pub const STREAM: &str = "fertilizer_history";
pub const CAPACITY: usize = 10;
pub const DISPLAY_LIMIT: usize = 5;

// Nutrient content fractions of the commercial products.
const DAP_P2O5: f64 = 0.46;
const DAP_N: f64 = 0.18;
const UREA_N: f64 = 0.46;
const MOP_K2O: f64 = 0.60;

/// Retail prices in rupees per kilogram.
pub const UREA_PRICE: u32 = 6;
pub const DAP_PRICE: u32 = 27;
pub const MOP_PRICE: u32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Alluvial,
    Clay,
    Sandy,
    Loamy,
}

impl SoilType {
    /// Per-nutrient adjustment (N, P, K).
    fn factors(&self) -> (f64, f64, f64) {
        match self {
            SoilType::Alluvial => (1.0, 1.0, 1.0),
            SoilType::Clay => (0.9, 1.1, 0.9),
            SoilType::Sandy => (1.2, 0.9, 1.2),
            SoilType::Loamy => (0.95, 1.0, 0.95),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YieldTarget {
    Low,
    Medium,
    High,
}

impl YieldTarget {
    fn factor(&self) -> f64 {
        match self {
            YieldTarget::Low => 0.7,
            YieldTarget::Medium => 1.0,
            YieldTarget::High => 1.3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaUnit {
    Bigha,
    Acre,
    Hectare,
}

impl AreaUnit {
    pub fn to_hectares(&self, area: f64) -> f64 {
        let per_unit = match self {
            AreaUnit::Bigha => 0.25,
            AreaUnit::Acre => 0.4047,
            AreaUnit::Hectare => 1.0,
        };
        area * per_unit
    }

    pub fn label(&self) -> &'static str {
        match self {
            AreaUnit::Bigha => "bigha",
            AreaUnit::Acre => "acre",
            AreaUnit::Hectare => "hectare",
        }
    }
}

/// Application stages a crop's dose is split across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Basal,
    Tillering,
    Heading,
    Panicle,
    Planting,
    FirstEarthing,
    SecondEarthing,
    Earthing,
    FirstIrrigation,
    KneeHigh,
    Tasseling,
    Growth,
    Fruiting,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Basal => "at sowing",
            Stage::Tillering => "at tillering",
            Stage::Heading => "at heading",
            Stage::Panicle => "at panicle",
            Stage::Planting => "at planting",
            Stage::FirstEarthing => "first earthing",
            Stage::SecondEarthing => "second earthing",
            Stage::Earthing => "at earthing",
            Stage::FirstIrrigation => "first irrigation",
            Stage::KneeHigh => "knee high stage",
            Stage::Tasseling => "at tasseling",
            Stage::Growth => "active growth",
            Stage::Fruiting => "at fruiting",
        }
    }
}

/// Base nutrient demand in kg per hectare plus the application stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientProfile {
    pub n: f64,
    pub p: f64,
    pub k: f64,
    pub stages: &'static [Stage],
}

pub fn profile(crop: Crop) -> Option<&'static NutrientProfile> {
    use Stage::*;
    match crop {
        Crop::Wheat => Some(&NutrientProfile {
            n: 120.0,
            p: 60.0,
            k: 40.0,
            stages: &[Basal, Tillering, Heading],
        }),
        Crop::Rice => Some(&NutrientProfile {
            n: 100.0,
            p: 50.0,
            k: 50.0,
            stages: &[Basal, Tillering, Panicle],
        }),
        Crop::Sugarcane => Some(&NutrientProfile {
            n: 150.0,
            p: 80.0,
            k: 60.0,
            stages: &[Planting, FirstEarthing, SecondEarthing],
        }),
        Crop::Potato => Some(&NutrientProfile {
            n: 180.0,
            p: 100.0,
            k: 150.0,
            stages: &[Planting, Earthing],
        }),
        Crop::Mustard => Some(&NutrientProfile {
            n: 80.0,
            p: 40.0,
            k: 40.0,
            stages: &[Basal, FirstIrrigation],
        }),
        Crop::Maize => Some(&NutrientProfile {
            n: 120.0,
            p: 60.0,
            k: 40.0,
            stages: &[Basal, KneeHigh, Tasseling],
        }),
        Crop::Vegetables => Some(&NutrientProfile {
            n: 100.0,
            p: 50.0,
            k: 50.0,
            stages: &[Basal, Growth, Fruiting],
        }),
        _ => None,
    }
}

/// Adjusted field-level demand in whole kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientNeed {
    pub n: u32,
    pub p: u32,
    pub k: u32,
}

pub fn nutrient_need(
    crop: Crop,
    soil: SoilType,
    target: YieldTarget,
    area: f64,
    unit: AreaUnit,
) -> Option<NutrientNeed> {
    let profile = profile(crop)?;
    let hectares = unit.to_hectares(area);
    let (n_f, p_f, k_f) = soil.factors();
    let y_f = target.factor();
    Some(NutrientNeed {
        n: (profile.n * n_f * y_f * hectares).round() as u32,
        p: (profile.p * p_f * y_f * hectares).round() as u32,
        k: (profile.k * k_f * y_f * hectares).round() as u32,
    })
}

/// Commercial product quantities in whole kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DosePlan {
    pub urea_kg: u32,
    pub dap_kg: u32,
    pub mop_kg: u32,
}

/// Converts nutrient demand into product quantities: DAP covers P and
/// contributes N, urea covers the remaining N, MOP covers K. Out-of-range
/// intermediates clamp to zero.
pub fn dose_plan(need: NutrientNeed) -> DosePlan {
    let dap = (f64::from(need.p) / DAP_P2O5).round();
    let nitrogen_from_dap = dap * DAP_N;
    let urea = ((f64::from(need.n) - nitrogen_from_dap) / UREA_N).round();
    let mop = (f64::from(need.k) / MOP_K2O).round();
    DosePlan {
        urea_kg: urea.max(0.0) as u32,
        dap_kg: dap.max(0.0) as u32,
        mop_kg: mop.max(0.0) as u32,
    }
}

pub fn plan_cost(plan: DosePlan) -> u32 {
    plan.urea_kg * UREA_PRICE + plan.dap_kg * DAP_PRICE + plan.mop_kg * MOP_PRICE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub stage: Stage,
    pub urea_kg: u32,
    pub dap_kg: u32,
    pub mop_kg: u32,
}

/// Splits the plan across the crop's stages. DAP and MOP all go in at the
/// first stage; urea splits 50/25/25 over three stages, 60/40 over two.
pub fn schedule(crop: Crop, plan: DosePlan) -> Vec<ScheduleEntry> {
    let Some(profile) = profile(crop) else {
        return Vec::new();
    };
    let ratios: &[f64] = if profile.stages.len() == 3 {
        &[0.5, 0.25, 0.25]
    } else {
        &[0.6, 0.4]
    };
    profile
        .stages
        .iter()
        .zip(ratios)
        .enumerate()
        .map(|(i, (stage, ratio))| ScheduleEntry {
            stage: *stage,
            urea_kg: (f64::from(plan.urea_kg) * ratio).round() as u32,
            dap_kg: if i == 0 { plan.dap_kg } else { 0 },
            mop_kg: if i == 0 { plan.mop_kg } else { 0 },
        })
        .collect()
}

/// One saved calculation in the history stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub crop: Crop,
    pub area: f64,
    pub unit: AreaUnit,
    pub need: NutrientNeed,
    pub cost_rupees: u32,
}

impl PlanRecord {
    pub fn new(crop: Crop, area: f64, unit: AreaUnit, need: NutrientNeed, cost_rupees: u32) -> Self {
        Self {
            crop,
            area,
            unit,
            need,
            cost_rupees,
        }
    }
}

impl Payload for PlanRecord {
    fn validate(&self) -> Result<(), InvalidPayload> {
        if !self.area.is_finite() || self.area <= 0.0 {
            return Err(InvalidPayload::new("field area must be positive"));
        }
        Ok(())
    }

    fn metric(&self) -> Option<f64> {
        Some(f64::from(self.cost_rupees))
    }
}

pub fn open_log(storage: Arc<dyn Storage>) -> RecordLog<PlanRecord> {
    RecordLog::open(StreamConfig::new(STREAM, CAPACITY), storage)
}
