//! Total cost of ownership model for GPU clusters.
//!
//! TCO = capex + (annual power + annual maintenance) × years, where
//! annual power runs the full year at TDP scaled by facility PUE:
//! `(tdp_w × gpus × 8760 / 1000) × pue × rate`.

use crate::domain::entities::gpu_spec::GpuSpec;
use crate::domain::values::assumptions::TcoAssumptions;
use serde::Serialize;

pub const HOURS_PER_YEAR: f64 = 8760.0;

/// Derived cost breakdown for one cluster scenario. Never stored.
#[derive(Debug, Clone, Serialize)]
pub struct TcoResult {
    pub gpu_type: String,
    pub gpu_count: u32,
    pub capex: f64,
    pub annual_power_cost: f64,
    pub annual_maintenance: f64,
    pub total_tco: f64,
    pub cost_per_gpu_hour: f64,
}

/// Compute the cost breakdown for `gpu_count` units of `spec` over `years`.
///
/// Callers must guarantee `gpu_count >= 1` and `years >= 1`; the division
/// for cost-per-GPU-hour relies on it.
pub fn compute_tco(
    spec: &GpuSpec,
    gpu_count: u32,
    power_rate_per_kwh: f64,
    years: u32,
    assumptions: &TcoAssumptions,
) -> TcoResult {
    let gpus = gpu_count as f64;
    let capex = spec.price_usd * gpus;

    let annual_power_cost =
        (spec.tdp_watts * gpus * HOURS_PER_YEAR * assumptions.pue / 1000.0) * power_rate_per_kwh;
    let annual_maintenance = capex * assumptions.maintenance_fraction;

    let total_tco = capex + (annual_power_cost + annual_maintenance) * years as f64;
    let cost_per_gpu_hour = total_tco / (gpus * HOURS_PER_YEAR * years as f64);

    TcoResult {
        gpu_type: spec.name.clone(),
        gpu_count,
        capex,
        annual_power_cost,
        annual_maintenance,
        total_tco,
        cost_per_gpu_hour,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h100() -> GpuSpec {
        GpuSpec::new("H100", "NVIDIA", "4nm", "80GB HBM3", 700.0, 1979.0, 30000.0)
    }

    #[test]
    fn test_h100_cluster_breakdown() {
        // capex = 30000 * 8 = 240000
        // power = 700 * 8 * 8760 * 1.3 / 1000 * 0.08 = 5101.824
        // maintenance = 240000 * 0.08 = 19200
        // total = 240000 + (5101.824 + 19200) * 3 = 312905.472
        // per gpu-hour = 312905.472 / (8 * 8760 * 3) = 1.48833...
        let result = compute_tco(&h100(), 8, 0.08, 3, &TcoAssumptions::default());

        assert_eq!(result.capex, 240000.0);
        assert!((result.annual_power_cost - 5101.824).abs() < 1e-6);
        assert_eq!(result.annual_maintenance, 19200.0);
        assert!((result.total_tco - 312905.472).abs() < 1e-6);
        assert!((result.cost_per_gpu_hour - 1.4883).abs() < 1e-3);
    }

    #[test]
    fn test_single_gpu_single_year() {
        let result = compute_tco(&h100(), 1, 0.08, 1, &TcoAssumptions::default());

        assert_eq!(result.capex, 30000.0);
        // 700 * 8760 * 1.3 / 1000 * 0.08 = 637.728
        assert!((result.annual_power_cost - 637.728).abs() < 1e-6);
        assert!((result.total_tco - (30000.0 + 637.728 + 2400.0)).abs() < 1e-6);
    }

    #[test]
    fn test_power_cost_scales_with_rate() {
        let cheap = compute_tco(&h100(), 8, 0.04, 3, &TcoAssumptions::default());
        let dear = compute_tco(&h100(), 8, 0.08, 3, &TcoAssumptions::default());

        assert!((dear.annual_power_cost / cheap.annual_power_cost - 2.0).abs() < 1e-9);
        // Capex is rate-independent
        assert_eq!(cheap.capex, dear.capex);
    }

    #[test]
    fn test_pue_override() {
        let mut assumptions = TcoAssumptions::default();
        assumptions.pue = 1.5;
        let result = compute_tco(&h100(), 8, 0.08, 3, &assumptions);

        // 700 * 8 * 8760 * 1.5 / 1000 * 0.08 = 5886.72
        assert!((result.annual_power_cost - 5886.72).abs() < 1e-6);
    }
}
