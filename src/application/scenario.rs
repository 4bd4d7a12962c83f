//! Parameterized TCO/ROI scenario runs. Missing parameters fall back to
//! documented defaults; explicit zero counts or horizons are rejected
//! before they can reach the cost-per-hour division.

use crate::domain::error::DomainError;
use crate::domain::values::roi::{compute_roi, RoiResult};
use crate::domain::values::tco::{compute_tco, TcoResult};
use crate::infrastructure::knowledge::KnowledgeBase;
use serde::Deserialize;
use std::sync::Arc;

pub struct ScenarioUseCase {
    kb: Arc<KnowledgeBase>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TcoParams {
    pub gpu_type: Option<String>,
    pub num_gpus: Option<u32>,
    pub power_rate: Option<f64>,
    pub years: Option<u32>,
    /// Per-call assumption overrides.
    pub pue: Option<f64>,
    pub maintenance_fraction: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoiParams {
    pub investment: Option<f64>,
    pub hourly_rate: Option<f64>,
    pub utilization: Option<f64>,
    pub num_gpus: Option<u32>,
}

impl ScenarioUseCase {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }

    pub fn tco(&self, params: &TcoParams) -> Result<TcoResult, DomainError> {
        let defaults = self.kb.assumptions();

        let gpu_type = params.gpu_type.as_deref().unwrap_or("H100");
        let num_gpus = params.num_gpus.unwrap_or(8);
        let power_rate = params.power_rate.unwrap_or(defaults.power_cost_per_kwh);
        let years = params.years.unwrap_or(defaults.depreciation_years);

        if num_gpus < 1 {
            return Err(DomainError::InvalidInput("num_gpus must be at least 1".into()));
        }
        if years < 1 {
            return Err(DomainError::InvalidInput("years must be at least 1".into()));
        }
        if power_rate < 0.0 {
            return Err(DomainError::InvalidInput("power_rate must not be negative".into()));
        }

        let mut assumptions = defaults.clone();
        if let Some(pue) = params.pue {
            assumptions.pue = pue;
        }
        if let Some(maintenance) = params.maintenance_fraction {
            assumptions.maintenance_fraction = maintenance;
        }

        // Unknown GPU types substitute the documented default spec rather
        // than failing.
        let spec = self.kb.gpu_or_default(gpu_type);
        Ok(compute_tco(&spec, num_gpus, power_rate, years, &assumptions))
    }

    pub fn roi(&self, params: &RoiParams) -> Result<RoiResult, DomainError> {
        let investment = params.investment.unwrap_or(240000.0);
        let hourly_rate = params.hourly_rate.unwrap_or(3.5);
        let utilization = params
            .utilization
            .unwrap_or(self.kb.assumptions().target_utilization);
        let num_gpus = params.num_gpus.unwrap_or(8);

        if investment <= 0.0 {
            return Err(DomainError::InvalidInput("investment must be positive".into()));
        }
        if num_gpus < 1 {
            return Err(DomainError::InvalidInput("num_gpus must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&utilization) {
            return Err(DomainError::InvalidInput(
                "utilization must be between 0.0 and 1.0".into(),
            ));
        }

        Ok(compute_roi(investment, hourly_rate, utilization, num_gpus))
    }
}
