use std::sync::Arc;

use farmkit::store::{MemoryStorage, Payload};
use farmkit::tools::calendar::{self, Reminder, TaskKind};
use farmkit::tools::irrigation::{self, IrrigationLog, WaterSource};
use farmkit::tools::moisture::{MoistureBand, MoistureReading};
use farmkit::tools::soil::{self, SoilScan};
use farmkit::tools::weather::{self, Condition, IrrigationAdvice, TipCategory, WeatherNow};
use farmkit::tools::yields::{self, IrrigationCover, SoilQuality};
use farmkit::tools::Crop;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn moisture_bands_follow_the_thresholds() {
    assert_eq!(MoistureBand::of(19), MoistureBand::VeryDry);
    assert_eq!(MoistureBand::of(20), MoistureBand::Low);
    assert_eq!(MoistureBand::of(39), MoistureBand::Low);
    assert_eq!(MoistureBand::of(40), MoistureBand::Good);
    assert_eq!(MoistureBand::of(70), MoistureBand::Good);
    assert_eq!(MoistureBand::of(71), MoistureBand::Wet);
}

#[test]
fn moisture_validation_bounds() {
    assert!(MoistureReading::new(0).validate().is_ok());
    assert!(MoistureReading::new(100).validate().is_ok());
    assert!(MoistureReading::new(101).validate().is_err());
}

#[test]
fn irrigation_log_derives_water_and_cost() {
    let log = IrrigationLog::new("north field", WaterSource::Tubewell, 2.0);
    assert_eq!(log.water_liters, 1000);
    assert_eq!(log.cost_rupees, 100);

    let log = IrrigationLog::new("south field", WaterSource::Canal, 1.5);
    assert_eq!(log.water_liters, 300);
    assert_eq!(log.cost_rupees, 30);
}

#[test]
fn irrigation_rejects_bad_input() {
    assert!(IrrigationLog::new("f", WaterSource::Pond, 0.0).validate().is_err());
    assert!(IrrigationLog::new("f", WaterSource::Pond, -1.0).validate().is_err());
    assert!(IrrigationLog::new("f", WaterSource::Pond, f64::NAN).validate().is_err());
    assert!(IrrigationLog::new("  ", WaterSource::Pond, 1.0).validate().is_err());
}

#[test]
fn irrigation_summary_totals_same_day_logs() {
    let mut log = irrigation::open_log(Arc::new(MemoryStorage::new()));
    log.append(IrrigationLog::new("f1", WaterSource::Tubewell, 2.0))
        .unwrap();
    log.append(IrrigationLog::new("f2", WaterSource::Pond, 1.0))
        .unwrap();

    let usage = irrigation::summarize(&log);
    assert_eq!(usage.total_water_liters, 1100);
    assert_eq!(usage.total_cost_rupees, 110);
    // Both logs land on the same calendar day.
    assert_eq!(usage.avg_daily_liters, 1100);
}

#[test]
fn empty_irrigation_summary_is_zero() {
    let log = irrigation::open_log(Arc::new(MemoryStorage::new()));
    let usage = irrigation::summarize(&log);
    assert_eq!(usage.total_water_liters, 0);
    assert_eq!(usage.avg_daily_liters, 0);
}

#[test]
fn reminders_need_text_and_a_real_date() {
    assert!(Reminder::parse("spray aphids", "2026-02-10").is_ok());
    assert!(Reminder::parse("spray aphids", "tomorrow").is_err());
    assert!(Reminder::parse("spray aphids", "2026-13-40").is_err());
    assert!(Reminder::parse("   ", "2026-02-10").is_err());
}

#[test]
fn calendar_tasks_by_month() {
    let november = calendar::tasks(Crop::Wheat, 11);
    assert_eq!(november.len(), 2);
    assert_eq!(november[0].kind, TaskKind::Sowing);

    let april = calendar::tasks(Crop::Wheat, 4);
    assert_eq!(april.len(), 1);
    assert_eq!(april[0].kind, TaskKind::Harvest);

    assert!(calendar::tasks(Crop::Wheat, 5).is_empty(), "off-season month");
    assert!(calendar::tasks(Crop::Cotton, 5).is_empty(), "no calendar for cotton");
    assert!(calendar::tasks(Crop::Wheat, 13).is_empty(), "out-of-range month");
}

#[test]
fn yield_estimate_wheat_two_bigha() {
    let estimate = yields::estimate(Crop::Wheat, 2.0, SoilQuality::Average, IrrigationCover::Full)
        .expect("wheat has a profile");
    assert_eq!(estimate.total_quintals, 11.0);
    assert_eq!(estimate.per_bigha_quintals, 5.5);
    assert_eq!(estimate.market_value_rupees, 24_200);
    assert_eq!(estimate.input_cost_rupees, 16_000);
    assert_eq!(estimate.net_profit_rupees, 8_200);
}

#[test]
fn yield_estimate_can_report_a_loss() {
    // Poor rain-fed potato: 14.7 q at Rs 1200 = 17,640 against 25,000 input.
    let estimate = yields::estimate(Crop::Potato, 1.0, SoilQuality::Poor, IrrigationCover::Rainfed)
        .expect("potato has a profile");
    assert!(estimate.net_profit_rupees < 0);
}

#[test]
fn yield_estimate_rejects_bad_area_and_unknown_crop() {
    assert!(yields::estimate(Crop::Wheat, 0.0, SoilQuality::Good, IrrigationCover::Full).is_none());
    assert!(yields::estimate(Crop::Cotton, 1.0, SoilQuality::Good, IrrigationCover::Full).is_none());
}

#[test]
fn weather_advice_branches() {
    let raining = WeatherNow {
        condition: Condition::Rain,
        temp_c: 28,
        humidity_pct: 70,
        wind_kmh: 10,
        rainfall_mm: 15,
    };
    assert_eq!(weather::irrigation_advice(&raining), IrrigationAdvice::Skip);

    let thunderstorm = WeatherNow {
        condition: Condition::Thunderstorm,
        temp_c: 30,
        humidity_pct: 60,
        wind_kmh: 35,
        rainfall_mm: 0,
    };
    assert_eq!(weather::irrigation_advice(&thunderstorm), IrrigationAdvice::Skip);

    let scorching = WeatherNow {
        condition: Condition::Haze,
        temp_c: 36,
        humidity_pct: 40,
        wind_kmh: 10,
        rainfall_mm: 0,
    };
    assert_eq!(weather::irrigation_advice(&scorching), IrrigationAdvice::Urgent);

    let sunny = WeatherNow {
        condition: Condition::Sunny,
        temp_c: 30,
        humidity_pct: 60,
        wind_kmh: 10,
        rainfall_mm: 0,
    };
    assert_eq!(weather::irrigation_advice(&sunny), IrrigationAdvice::Light);

    let cloudy = WeatherNow {
        condition: Condition::Cloudy,
        temp_c: 25,
        humidity_pct: 60,
        wind_kmh: 10,
        rainfall_mm: 0,
    };
    assert_eq!(weather::irrigation_advice(&cloudy), IrrigationAdvice::Normal);
}

#[test]
fn weather_tip_categories() {
    let mut now = WeatherNow {
        condition: Condition::Sunny,
        temp_c: 38,
        humidity_pct: 50,
        wind_kmh: 10,
        rainfall_mm: 0,
    };
    assert_eq!(weather::tip_category(&now), TipCategory::Hot);

    now.temp_c = 25;
    now.condition = Condition::LightRain;
    assert_eq!(weather::tip_category(&now), TipCategory::Rainy);

    now.condition = Condition::Fog;
    now.temp_c = 5;
    assert_eq!(weather::tip_category(&now), TipCategory::Cold);

    now.temp_c = 25;
    assert_eq!(weather::tip_category(&now), TipCategory::Normal);
}

#[test]
fn simulated_weather_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let now = weather::simulate(&mut rng);
        assert!((20..40).contains(&now.temp_c));
        assert!((40..80).contains(&now.humidity_pct));
        assert!((5..35).contains(&now.wind_kmh));
        if !now.condition.is_rainy() {
            assert_eq!(now.rainfall_mm, 0);
        }
    }
}

#[test]
fn soil_probe_output_is_valid_and_in_range() {
    let mut probe = soil::SoilProbe::new(StdRng::seed_from_u64(11));
    for _ in 0..50 {
        let scan = probe.generate();
        assert!(scan.validate().is_ok());
        assert!((20..80).contains(&scan.moisture));
        assert!((4.5..8.5).contains(&scan.ph));
        assert!((50..200).contains(&scan.nitrogen));
        assert!((20..120).contains(&scan.phosphorus));
        assert!((30..150).contains(&scan.potassium));
    }
}

#[test]
fn soil_recommendations_flag_deficiencies() {
    let scan = SoilScan {
        moisture: 30,
        ph: 5.0,
        nitrogen: 100,
        phosphorus: 40,
        potassium: 30,
        depth_moisture: [50, 45, 40],
        location: None,
    };
    let recs = soil::recommendations(&scan, Crop::Wheat);
    let titles: Vec<&str> = recs.iter().map(|r| r.title).collect();

    assert!(titles.contains(&"pH correction"));
    assert!(titles.contains(&"Nitrogen deficiency"));
    assert!(titles.contains(&"Phosphorus deficiency"));
    assert!(titles.contains(&"Potassium deficiency"));
    assert!(titles.contains(&"Irrigation needed"));

    // Urea quantity is half the nitrogen deficit, rounded up.
    let nitrogen = recs.iter().find(|r| r.title == "Nitrogen deficiency").unwrap();
    assert!(nitrogen.advice.contains("10 kg/bigha"), "{}", nitrogen.advice);
}

#[test]
fn healthy_soil_gets_the_all_good_recommendation() {
    let scan = SoilScan {
        moisture: 60,
        ph: 6.5,
        nitrogen: 130,
        phosphorus: 70,
        potassium: 50,
        depth_moisture: [60, 55, 50],
        location: None,
    };
    let recs = soil::recommendations(&scan, Crop::Wheat);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].title, "Soil health good");
}
