use std::sync::Arc;

use farmkit::store::{MemoryStorage, Payload};
use farmkit::tools::fertilizer::{
    self, AreaUnit, DosePlan, NutrientNeed, PlanRecord, SoilType, YieldTarget,
};
use farmkit::tools::loan::{self, LoanProduct};
use farmkit::tools::Crop;

#[test]
fn wheat_hectare_dose_plan() {
    let need = fertilizer::nutrient_need(
        Crop::Wheat,
        SoilType::Alluvial,
        YieldTarget::Medium,
        1.0,
        AreaUnit::Hectare,
    )
    .expect("wheat has a profile");
    assert_eq!(need, NutrientNeed { n: 120, p: 60, k: 40 });

    let plan = fertilizer::dose_plan(need);
    assert_eq!(plan.dap_kg, 130);
    assert_eq!(plan.urea_kg, 210);
    assert_eq!(plan.mop_kg, 67);

    assert_eq!(fertilizer::plan_cost(plan), 5976);
}

#[test]
fn soil_and_yield_factors_scale_the_need() {
    let sandy_high = fertilizer::nutrient_need(
        Crop::Wheat,
        SoilType::Sandy,
        YieldTarget::High,
        1.0,
        AreaUnit::Hectare,
    )
    .unwrap();
    // N: 120 * 1.2 * 1.3, P: 60 * 0.9 * 1.3, K: 40 * 1.2 * 1.3.
    assert_eq!(sandy_high, NutrientNeed { n: 187, p: 70, k: 62 });
}

#[test]
fn area_units_convert_to_hectares() {
    assert_eq!(AreaUnit::Bigha.to_hectares(4.0), 1.0);
    assert_eq!(AreaUnit::Hectare.to_hectares(2.5), 2.5);
    assert!((AreaUnit::Acre.to_hectares(1.0) - 0.4047).abs() < 1e-9);
}

#[test]
fn negative_urea_clamps_to_zero() {
    // Enough DAP-borne nitrogen to overshoot the demand.
    let plan = fertilizer::dose_plan(NutrientNeed { n: 10, p: 200, k: 0 });
    assert_eq!(plan.urea_kg, 0, "negative intermediate clamps silently");
    assert!(plan.dap_kg > 0);
    assert_eq!(plan.mop_kg, 0);
}

#[test]
fn schedule_splits_urea_and_front_loads_the_rest() {
    let plan = DosePlan { urea_kg: 210, dap_kg: 130, mop_kg: 67 };
    let entries = fertilizer::schedule(Crop::Wheat, plan);
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0].urea_kg, 105);
    assert_eq!(entries[1].urea_kg, 53);
    assert_eq!(entries[2].urea_kg, 53);

    assert_eq!(entries[0].dap_kg, 130);
    assert_eq!(entries[0].mop_kg, 67);
    assert_eq!(entries[1].dap_kg, 0);
    assert_eq!(entries[2].mop_kg, 0);
}

#[test]
fn two_stage_crops_split_sixty_forty() {
    let plan = DosePlan { urea_kg: 100, dap_kg: 50, mop_kg: 20 };
    let entries = fertilizer::schedule(Crop::Mustard, plan);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].urea_kg, 60);
    assert_eq!(entries[1].urea_kg, 40);
}

#[test]
fn unknown_crop_has_no_fertilizer_profile() {
    assert!(fertilizer::nutrient_need(
        Crop::Cotton,
        SoilType::Alluvial,
        YieldTarget::Medium,
        1.0,
        AreaUnit::Hectare
    )
    .is_none());
}

#[test]
fn plan_history_stream_aggregates_cost() {
    let mut history = fertilizer::open_log(Arc::new(MemoryStorage::new()));
    let need = NutrientNeed { n: 120, p: 60, k: 40 };
    let cost = fertilizer::plan_cost(fertilizer::dose_plan(need));
    history
        .append(PlanRecord::new(Crop::Wheat, 1.0, AreaUnit::Hectare, need, cost))
        .unwrap();

    let stats = history.stats().unwrap();
    assert_eq!(stats.count, 1);
    assert_eq!(stats.mean, 5976.0);
}

#[test]
fn plan_record_rejects_bad_area() {
    let need = NutrientNeed { n: 1, p: 1, k: 1 };
    let record = PlanRecord::new(Crop::Wheat, 0.0, AreaUnit::Bigha, need, 100);
    assert!(record.validate().is_err());
}

#[test]
fn kcc_loan_quote() {
    let quote = loan::quote(LoanProduct::Kcc, 100_000.0, 7.0, 12).unwrap();
    assert_eq!(quote.emi_rupees, 8653);
    assert_eq!(quote.total_payable_rupees, 103_832);
    assert_eq!(quote.total_interest_rupees, 3832);

    // Subsidy at 4% always beats the 7% standard rate.
    assert!(quote.subsidized_emi_rupees < quote.emi_rupees);
    assert!(quote.subsidy_savings_rupees > 0);
}

#[test]
fn emi_times_tenure_matches_total_payable() {
    let quote = loan::quote(LoanProduct::Equipment, 500_000.0, 10.0, 60).unwrap();
    let rebuilt = i64::from(quote.emi_rupees) * i64::from(quote.tenure_months);
    let diff = (rebuilt - i64::from(quote.total_payable_rupees)).abs();
    assert!(diff <= i64::from(quote.tenure_months), "only rounding may differ");
}

#[test]
fn loan_limits_are_enforced() {
    assert!(loan::quote(LoanProduct::Kcc, 400_000.0, 7.0, 12).is_err());
    assert!(loan::quote(LoanProduct::Kcc, 0.0, 7.0, 12).is_err());
    assert!(loan::quote(LoanProduct::Kcc, 100_000.0, 7.0, 0).is_err());
    assert!(loan::quote(LoanProduct::Kcc, 100_000.0, 0.0, 12).is_err());
}

#[test]
fn loan_history_keeps_the_latest_ten() {
    let mut history = loan::open_log(Arc::new(MemoryStorage::new()));
    for month in 1..=12u32 {
        let quote = loan::quote(LoanProduct::Crop, 50_000.0, 9.0, month * 6).unwrap();
        history.append(quote).unwrap();
    }
    assert_eq!(history.len(), 10);
}
