//! Agricultural loan EMI and subsidy comparison.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::store::{InvalidPayload, Payload, RecordLog, Storage, StreamConfig};

pub const STREAM: &str = "loan_history";
pub const CAPACITY: usize = 10;
pub const DISPLAY_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanProduct {
    Kcc,
    Crop,
    Equipment,
}

impl LoanProduct {
    pub fn default_rate(&self) -> f64 {
        match self {
            LoanProduct::Kcc => 7.0,
            LoanProduct::Crop => 9.0,
            LoanProduct::Equipment => 10.0,
        }
    }

    /// Rate after the interest subvention scheme.
    pub fn subsidy_rate(&self) -> f64 {
        match self {
            LoanProduct::Kcc => 4.0,
            LoanProduct::Crop => 7.0,
            LoanProduct::Equipment => 8.0,
        }
    }

    pub fn max_amount(&self) -> u32 {
        match self {
            LoanProduct::Kcc => 300_000,
            LoanProduct::Crop => 500_000,
            LoanProduct::Equipment => 1_000_000,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoanProduct::Kcc => "KCC",
            LoanProduct::Crop => "crop loan",
            LoanProduct::Equipment => "equipment loan",
        }
    }
}

/// Standard amortization: `P * r * (1+r)^n / ((1+r)^n - 1)` with a monthly
/// rate. Callers must ensure rate > 0.
pub fn emi(principal: f64, annual_rate_pct: f64, tenure_months: u32) -> f64 {
    let r = annual_rate_pct / 12.0 / 100.0;
    let growth = (1.0 + r).powi(tenure_months as i32);
    principal * r * growth / (growth - 1.0)
}

/// A quoted loan at the requested rate plus its subsidized counterpart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanQuote {
    pub product: LoanProduct,
    pub principal: f64,
    pub annual_rate_pct: f64,
    pub tenure_months: u32,
    pub emi_rupees: u32,
    pub total_interest_rupees: u32,
    pub total_payable_rupees: u32,
    pub subsidized_emi_rupees: u32,
    /// Negative when the requested rate undercuts the subsidy rate.
    pub subsidy_savings_rupees: i64,
}

pub fn quote(
    product: LoanProduct,
    principal: f64,
    annual_rate_pct: f64,
    tenure_months: u32,
) -> Result<LoanQuote, InvalidPayload> {
    if !principal.is_finite() || principal <= 0.0 {
        return Err(InvalidPayload::new("loan principal must be positive"));
    }
    if principal > f64::from(product.max_amount()) {
        return Err(InvalidPayload::new(format!(
            "{} principal is capped at {} rupees",
            product.label(),
            product.max_amount()
        )));
    }
    if tenure_months == 0 {
        return Err(InvalidPayload::new("tenure must be at least one month"));
    }
    if !annual_rate_pct.is_finite() || annual_rate_pct <= 0.0 {
        return Err(InvalidPayload::new("interest rate must be positive"));
    }

    let monthly = emi(principal, annual_rate_pct, tenure_months);
    let total = monthly * f64::from(tenure_months);
    let interest = total - principal;

    let subsidized = emi(principal, product.subsidy_rate(), tenure_months);
    let subsidized_total = subsidized * f64::from(tenure_months);
    let savings = total - subsidized_total;

    Ok(LoanQuote {
        product,
        principal,
        annual_rate_pct,
        tenure_months,
        emi_rupees: monthly.round() as u32,
        total_interest_rupees: interest.round() as u32,
        total_payable_rupees: total.round() as u32,
        subsidized_emi_rupees: subsidized.round() as u32,
        subsidy_savings_rupees: savings.round() as i64,
    })
}

impl Payload for LoanQuote {
    fn validate(&self) -> Result<(), InvalidPayload> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(InvalidPayload::new("loan principal must be positive"));
        }
        if self.tenure_months == 0 {
            return Err(InvalidPayload::new("tenure must be at least one month"));
        }
        Ok(())
    }

    fn metric(&self) -> Option<f64> {
        Some(f64::from(self.emi_rupees))
    }
}

pub fn open_log(storage: Arc<dyn Storage>) -> RecordLog<LoanQuote> {
    RecordLog::open(StreamConfig::new(STREAM, CAPACITY), storage)
}
