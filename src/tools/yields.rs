//! Harvest yield and profit estimation.

use super::Crop;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoilQuality {
    Poor,
    Average,
    Good,
}

impl SoilQuality {
    fn factor(&self) -> f64 {
        match self {
            SoilQuality::Poor => 0.7,
            SoilQuality::Average => 1.0,
            SoilQuality::Good => 1.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrrigationCover {
    Rainfed,
    Partial,
    Full,
}

impl IrrigationCover {
    fn factor(&self) -> f64 {
        match self {
            IrrigationCover::Rainfed => 0.6,
            IrrigationCover::Partial => 0.85,
            IrrigationCover::Full => 1.0,
        }
    }
}

/// Reference economics per bigha: base yield in quintals, sale price per
/// quintal, input cost per bigha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldProfile {
    pub base_yield: f64,
    pub price: u32,
    pub input_cost: u32,
}

pub fn profile(crop: Crop) -> Option<&'static YieldProfile> {
    match crop {
        Crop::Wheat => Some(&YieldProfile { base_yield: 5.5, price: 2200, input_cost: 8000 }),
        Crop::Rice => Some(&YieldProfile { base_yield: 6.0, price: 2100, input_cost: 10_000 }),
        Crop::Sugarcane => Some(&YieldProfile { base_yield: 90.0, price: 350, input_cost: 15_000 }),
        Crop::Potato => Some(&YieldProfile { base_yield: 35.0, price: 1200, input_cost: 25_000 }),
        Crop::Mustard => Some(&YieldProfile { base_yield: 2.5, price: 5000, input_cost: 5000 }),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldEstimate {
    pub total_quintals: f64,
    pub per_bigha_quintals: f64,
    pub market_value_rupees: u32,
    pub input_cost_rupees: u32,
    /// May be negative; a loss is reported, not clamped.
    pub net_profit_rupees: i64,
}

/// Estimates the harvest for a field. `None` for non-positive areas and
/// crops without a reference profile.
pub fn estimate(
    crop: Crop,
    area_bigha: f64,
    soil: SoilQuality,
    irrigation: IrrigationCover,
) -> Option<YieldEstimate> {
    if !area_bigha.is_finite() || area_bigha <= 0.0 {
        return None;
    }
    let profile = profile(crop)?;

    let adjusted = profile.base_yield * soil.factor() * irrigation.factor();
    let total = (adjusted * area_bigha * 10.0).round() / 10.0;
    let per_bigha = (adjusted * 10.0).round() / 10.0;
    let market_value = (total * f64::from(profile.price)).round() as u32;
    let input_cost = (f64::from(profile.input_cost) * area_bigha).round() as u32;

    Some(YieldEstimate {
        total_quintals: total,
        per_bigha_quintals: per_bigha,
        market_value_rupees: market_value,
        input_cost_rupees: input_cost,
        net_profit_rupees: i64::from(market_value) - i64::from(input_cost),
    })
}
