use serde::{Deserialize, Serialize};

/// Default cost-model assumptions for datacenter TCO calculations.
/// Any field may be overridden per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcoAssumptions {
    /// Electricity rate in USD per kWh.
    pub power_cost_per_kwh: f64,
    /// Power Usage Effectiveness: facility power / IT-equipment power.
    pub pue: f64,
    /// Cooling overhead as a fraction of IT power (informational; already
    /// folded into PUE for the power-cost formula).
    pub cooling_overhead: f64,
    /// Annual maintenance as a fraction of capex.
    pub maintenance_fraction: f64,
    /// Depreciation horizon in years.
    pub depreciation_years: u32,
    /// Target utilization fraction for revenue modeling.
    pub target_utilization: f64,
}

impl Default for TcoAssumptions {
    fn default() -> Self {
        Self {
            power_cost_per_kwh: 0.08,
            pue: 1.3,
            cooling_overhead: 0.15,
            maintenance_fraction: 0.08,
            depreciation_years: 3,
            target_utilization: 0.85,
        }
    }
}
