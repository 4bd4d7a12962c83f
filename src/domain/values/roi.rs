//! Return-on-investment model for GPU rental.
//!
//! Revenue assumes every GPU rents at the hourly rate for the utilized share
//! of the year. Operating cost is a fixed 40% of invested capital per year,
//! a deliberate simplification of the source model.

use crate::domain::values::tco::HOURS_PER_YEAR;
use serde::Serialize;

/// Annual operating cost as a fraction of invested capital. Not configurable.
const OPEX_FRACTION: f64 = 0.4;

/// Payback horizon. `Unbounded` marks scenarios that never recoup the
/// investment (annual profit ≤ 0); an explicit variant keeps the JSON
/// representation well-defined instead of serializing an infinite float.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Payback {
    Months(f64),
    Unbounded,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoiResult {
    pub investment: f64,
    pub annual_revenue: f64,
    pub annual_cost: f64,
    pub annual_profit: f64,
    pub roi_percent: f64,
    pub payback: Payback,
}

/// Compute ROI for renting out `gpu_count` GPUs at `hourly_rate` with the
/// given utilization fraction. Callers must guarantee `investment > 0`.
pub fn compute_roi(
    investment: f64,
    hourly_rate: f64,
    utilization: f64,
    gpu_count: u32,
) -> RoiResult {
    let annual_revenue = hourly_rate * gpu_count as f64 * HOURS_PER_YEAR * utilization;
    let annual_cost = investment * OPEX_FRACTION;
    let annual_profit = annual_revenue - annual_cost;
    let roi_percent = annual_profit / investment * 100.0;

    let payback = if annual_profit > 0.0 {
        Payback::Months(investment / annual_profit * 12.0)
    } else {
        Payback::Unbounded
    };

    RoiResult {
        investment,
        annual_revenue,
        annual_cost,
        annual_profit,
        roi_percent,
        payback,
    }
}
