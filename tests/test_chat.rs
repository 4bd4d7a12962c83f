mod common;

use common::setup;
use gpuintel::domain::values::intent::Intent;

#[test]
fn test_tco_message_routes_to_tco_generator() {
    let app = setup();
    let reply = app.chat("What's the TCO for 8 GPUs?", &[]);

    assert_eq!(reply.intent, Intent::TcoCalculation);
    assert!(reply.response.contains("8x H100"));

    // The illustrative scenario ignores any numbers in the message and
    // always runs 8x H100 under default assumptions.
    assert_eq!(reply.data["capex"], 240000.0);
    assert!((reply.data["annual_power"].as_f64().unwrap() - 5101.824).abs() < 1e-6);
    assert_eq!(reply.data["annual_maintenance"], 19200.0);
    assert!((reply.data["total_tco"].as_f64().unwrap() - 312905.472).abs() < 1e-6);
}

#[test]
fn test_tco_scenario_is_fixed_regardless_of_message_numbers() {
    let app = setup();
    let a = app.chat("What would 128 GPUs cost?", &[]);
    let b = app.chat("tco for 2 gpus please", &[]);

    assert_eq!(a.intent, Intent::TcoCalculation);
    assert_eq!(a.data, b.data);
}

#[test]
fn test_comparison_message_routes_to_comparison() {
    let app = setup();
    let reply = app.chat("Compare H100 vs MI300X", &[]);

    assert_eq!(reply.intent, Intent::GpuComparison);
    let rows = reply.data.as_array().expect("comparison data is a list");
    assert_eq!(rows.len(), 4);
}

#[test]
fn test_comparison_sorted_by_perf_per_dollar() {
    let app = setup();
    let table = app.gpu_comparison();

    let names: Vec<&str> = table.iter().map(|r| r.name.as_str()).collect();
    // B200 4500/40 = 112.5, MI300X 1307/15 = 87.13,
    // H100 1979/30 = 65.97, H200 1979/40 = 49.48
    assert_eq!(names, vec!["B200", "MI300X", "H100", "H200"]);
    assert_eq!(table[0].perf_per_dollar, 112.5);
    assert_eq!(table[1].perf_per_dollar, 87.13);
    assert_eq!(table[2].perf_per_dollar, 65.97);
    assert_eq!(table[3].perf_per_dollar, 49.48);
}

#[test]
fn test_comparison_markdown_orders_rows() {
    let app = setup();
    let reply = app.chat("which gpu is better?", &[]);

    let b200 = reply.response.find("| B200 |").unwrap();
    let h200 = reply.response.find("| H200 |").unwrap();
    assert!(b200 < h200);
}

#[test]
fn test_market_message_returns_ticker_lists() {
    let app = setup();
    let reply = app.chat("NVDA stock price", &[]);

    assert_eq!(reply.intent, Intent::MarketData);
    let gpu_tickers = reply.data["gpu_tickers"].as_array().unwrap();
    assert_eq!(gpu_tickers.len(), 5);
    assert_eq!(gpu_tickers[0], "NVDA");
    assert_eq!(reply.data["datacenter_tickers"].as_array().unwrap().len(), 4);
}

#[test]
fn test_neocloud_message_lists_providers() {
    let app = setup();
    let reply = app.chat("Tell me about CoreWeave", &[]);

    assert_eq!(reply.intent, Intent::NeocloudAnalysis);
    assert!(reply.response.contains("CoreWeave"));
    assert!(reply.response.contains("Crusoe"));
    let providers = reply.data.as_array().unwrap();
    assert_eq!(providers.len(), 4);
}

#[test]
fn test_general_fallback() {
    let app = setup();
    let reply = app.chat("Hello", &[]);

    assert_eq!(reply.intent, Intent::General);
    assert!(reply.response.contains("TCO Calculations"));
}

#[test]
fn test_context_is_accepted_but_ignored() {
    use gpuintel::application::chat::ChatTurn;

    let app = setup();
    let context = vec![ChatTurn {
        role: "user".into(),
        content: "compare everything".into(),
    }];

    // Prior turns never influence classification of the current message.
    let reply = app.chat("Hello", &context);
    assert_eq!(reply.intent, Intent::General);
}
