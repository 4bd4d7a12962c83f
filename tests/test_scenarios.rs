mod common;

use common::setup;
use gpuintel::application::scenario::{RoiParams, TcoParams};
use gpuintel::domain::error::DomainError;
use gpuintel::domain::values::roi::Payback;

fn tco_params(gpu_type: &str) -> TcoParams {
    TcoParams {
        gpu_type: Some(gpu_type.to_string()),
        num_gpus: Some(8),
        power_rate: Some(0.08),
        years: Some(3),
        ..TcoParams::default()
    }
}

#[test]
fn test_tco_all_known_gpus_hand_computed() {
    let app = setup();

    // capex = price * 8
    // power = tdp * 8 * 8760 * 1.3 / 1000 * 0.08
    // maintenance = capex * 0.08
    // total = capex + (power + maintenance) * 3
    let cases = [
        ("H100", 240000.0, 5101.824, 19200.0, 312905.472),
        ("H200", 320000.0, 5101.824, 25600.0, 412105.472),
        ("MI300X", 120000.0, 5466.24, 9600.0, 165198.72),
        ("B200", 320000.0, 7288.32, 25600.0, 418664.96),
    ];

    for (name, capex, power, maintenance, total) in cases {
        let result = app.tco_scenario(&tco_params(name)).unwrap();
        assert_eq!(result.gpu_type, name);
        assert_eq!(result.gpu_count, 8);
        assert!((result.capex - capex).abs() < 1e-6, "{name} capex");
        assert!((result.annual_power_cost - power).abs() < 1e-6, "{name} power");
        assert!((result.annual_maintenance - maintenance).abs() < 1e-6, "{name} maintenance");
        assert!((result.total_tco - total).abs() < 1e-6, "{name} total");
        let per_hour = total / (8.0 * 8760.0 * 3.0);
        assert!((result.cost_per_gpu_hour - per_hour).abs() < 1e-9, "{name} per-hour");
    }
}

#[test]
fn test_tco_defaults_match_h100_reference() {
    let app = setup();
    let result = app.tco_scenario(&TcoParams::default()).unwrap();

    assert_eq!(result.gpu_type, "H100");
    assert_eq!(result.gpu_count, 8);
    assert!((result.total_tco - 312905.472).abs() < 1e-6);
}

#[test]
fn test_tco_unknown_gpu_uses_default_spec() {
    let app = setup();
    let result = app.tco_scenario(&tco_params("RTX-9090")).unwrap();

    // Substituted spec: $30,000 / 700 W, same as the H100 numbers.
    assert_eq!(result.gpu_type, "RTX-9090");
    assert!((result.total_tco - 312905.472).abs() < 1e-6);
}

#[test]
fn test_tco_assumption_overrides() {
    let app = setup();
    let params = TcoParams {
        pue: Some(1.5),
        maintenance_fraction: Some(0.05),
        ..tco_params("H100")
    };
    let result = app.tco_scenario(&params).unwrap();

    // power = 700 * 8 * 8760 * 1.5 / 1000 * 0.08 = 5886.72
    // maintenance = 240000 * 0.05 = 12000
    assert!((result.annual_power_cost - 5886.72).abs() < 1e-6);
    assert!((result.annual_maintenance - 12000.0).abs() < 1e-6);
}

#[test]
fn test_tco_rejects_zero_counts() {
    let app = setup();

    let zero_gpus = TcoParams {
        num_gpus: Some(0),
        ..TcoParams::default()
    };
    assert!(matches!(
        app.tco_scenario(&zero_gpus),
        Err(DomainError::InvalidInput(_))
    ));

    let zero_years = TcoParams {
        years: Some(0),
        ..TcoParams::default()
    };
    assert!(matches!(
        app.tco_scenario(&zero_years),
        Err(DomainError::InvalidInput(_))
    ));
}

#[test]
fn test_roi_reference_scenario() {
    let app = setup();
    let result = app
        .roi_scenario(&RoiParams {
            investment: Some(240000.0),
            hourly_rate: Some(3.5),
            utilization: Some(0.85),
            num_gpus: Some(8),
        })
        .unwrap();

    // revenue = 3.5 * 8 * 8760 * 0.85 = 208488
    assert!((result.annual_revenue - 208488.0).abs() < 1e-9);
    assert_eq!(result.annual_cost, 96000.0);
    assert!((result.annual_profit - 112488.0).abs() < 1e-9);
    assert!((result.roi_percent - 46.87).abs() < 1e-2);
    match result.payback {
        Payback::Months(m) => assert!((m - 25.602).abs() < 1e-3),
        Payback::Unbounded => panic!("expected finite payback"),
    }
}

#[test]
fn test_roi_defaults_match_reference_scenario() {
    let app = setup();
    let defaulted = app.roi_scenario(&RoiParams::default()).unwrap();
    assert!((defaulted.annual_revenue - 208488.0).abs() < 1e-9);
    assert_eq!(defaulted.annual_cost, 96000.0);
}

#[test]
fn test_roi_unprofitable_payback_is_unbounded() {
    let app = setup();
    let result = app
        .roi_scenario(&RoiParams {
            investment: Some(240000.0),
            hourly_rate: Some(0.25),
            utilization: Some(0.5),
            num_gpus: Some(8),
        })
        .unwrap();

    assert!(result.annual_profit < 0.0);
    assert_eq!(result.payback, Payback::Unbounded);
}

#[test]
fn test_roi_rejects_nonpositive_investment() {
    let app = setup();
    for investment in [0.0, -5000.0] {
        let result = app.roi_scenario(&RoiParams {
            investment: Some(investment),
            ..RoiParams::default()
        });
        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
    }
}

#[test]
fn test_roi_rejects_bad_utilization() {
    let app = setup();
    let result = app.roi_scenario(&RoiParams {
        utilization: Some(1.5),
        ..RoiParams::default()
    });
    assert!(matches!(result, Err(DomainError::InvalidInput(_))));
}
