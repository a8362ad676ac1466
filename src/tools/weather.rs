//! Synthetic weather conditions and the irrigation advice derived from
//! them. All data is generated locally; there is no feed.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    LightRain,
    Rain,
    Thunderstorm,
    Fog,
    Haze,
}

const CONDITIONS: [Condition; 8] = [
    Condition::Sunny,
    Condition::PartlyCloudy,
    Condition::Cloudy,
    Condition::LightRain,
    Condition::Rain,
    Condition::Thunderstorm,
    Condition::Fog,
    Condition::Haze,
];

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Sunny => "sunny",
            Condition::PartlyCloudy => "partly cloudy",
            Condition::Cloudy => "cloudy",
            Condition::LightRain => "light rain",
            Condition::Rain => "rain",
            Condition::Thunderstorm => "thunderstorm",
            Condition::Fog => "fog",
            Condition::Haze => "haze",
        }
    }

    /// Actively raining. A thunderstorm suppresses irrigation but carries
    /// no measured rainfall here.
    pub fn is_rainy(&self) -> bool {
        matches!(self, Condition::LightRain | Condition::Rain)
    }

    pub fn irrigation_demand(&self) -> IrrigationDemand {
        match self {
            Condition::Sunny => IrrigationDemand::High,
            Condition::PartlyCloudy | Condition::Haze => IrrigationDemand::Medium,
            Condition::Cloudy | Condition::Fog => IrrigationDemand::Low,
            Condition::LightRain | Condition::Rain | Condition::Thunderstorm => {
                IrrigationDemand::NotNeeded
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrrigationDemand {
    NotNeeded,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherNow {
    pub condition: Condition,
    pub temp_c: i32,
    pub humidity_pct: u32,
    pub wind_kmh: u32,
    pub rainfall_mm: u32,
}

pub fn simulate<R: Rng>(rng: &mut R) -> WeatherNow {
    let condition = CONDITIONS[rng.random_range(0..CONDITIONS.len())];
    WeatherNow {
        condition,
        temp_c: rng.random_range(20..40),
        humidity_pct: rng.random_range(40..80),
        wind_kmh: rng.random_range(5..35),
        rainfall_mm: if condition.is_rainy() {
            rng.random_range(0..30)
        } else {
            0
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastDay {
    pub condition: Condition,
    pub high_c: i32,
    pub low_c: i32,
    pub rain_chance_pct: u32,
}

pub fn forecast<R: Rng>(rng: &mut R, days: usize) -> Vec<ForecastDay> {
    (0..days)
        .map(|_| {
            let condition = CONDITIONS[rng.random_range(0..CONDITIONS.len())];
            let high_c = rng.random_range(25..40);
            let low_c = high_c - rng.random_range(5..15);
            let rain_chance_pct = if condition.is_rainy() {
                rng.random_range(50..100)
            } else {
                rng.random_range(0..30)
            };
            ForecastDay {
                condition,
                high_c,
                low_c,
                rain_chance_pct,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrrigationAdvice {
    /// Rain expected; next irrigation after 2-3 days.
    Skip,
    /// Hot and dry; irrigate in the cool hours, 5-6 cm of water.
    Urgent,
    /// Light irrigation in the evening.
    Light,
    /// Normal schedule; check soil moisture first.
    Normal,
}

pub fn irrigation_advice(now: &WeatherNow) -> IrrigationAdvice {
    if now.rainfall_mm > 10 || now.condition.irrigation_demand() == IrrigationDemand::NotNeeded {
        IrrigationAdvice::Skip
    } else if now.temp_c >= 35 && now.humidity_pct < 50 {
        IrrigationAdvice::Urgent
    } else if now.condition.irrigation_demand() == IrrigationDemand::High {
        IrrigationAdvice::Light
    } else {
        IrrigationAdvice::Normal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipCategory {
    Hot,
    Rainy,
    Cold,
    Normal,
}

pub fn tip_category(now: &WeatherNow) -> TipCategory {
    if now.temp_c >= 38 {
        TipCategory::Hot
    } else if now.condition.is_rainy() {
        TipCategory::Rainy
    } else if now.temp_c <= 10 {
        TipCategory::Cold
    } else {
        TipCategory::Normal
    }
}
