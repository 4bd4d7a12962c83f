//! Rule-based chat responder. Classifies the message intent and dispatches
//! to one of five deterministic generators over the knowledge base. No
//! generator can fail on valid input.

use crate::domain::values::intent::{self, Intent};
use crate::domain::values::tco::compute_tco;
use crate::infrastructure::knowledge::KnowledgeBase;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

pub struct ChatUseCase {
    kb: Arc<KnowledgeBase>,
}

/// One prior conversation turn. Accepted on every request but not consulted
/// by the deterministic generators; kept so the request shape survives a
/// future language-model backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub data: serde_json::Value,
    pub intent: Intent,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub name: String,
    pub memory: String,
    pub tdp: f64,
    pub fp16_tflops: f64,
    pub price: f64,
    pub perf_per_dollar: f64,
}

pub const GPU_TICKERS: &[&str] = &["NVDA", "AMD", "INTC", "TSM", "AVGO"];
pub const DATACENTER_TICKERS: &[&str] = &["EQIX", "DLR", "AMT", "CCI"];

impl ChatUseCase {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }

    pub fn chat(&self, message: &str, _context: &[ChatTurn]) -> ChatReply {
        match intent::classify(message) {
            Intent::TcoCalculation => self.tco_reply(),
            Intent::GpuComparison => self.comparison_reply(),
            Intent::MarketData => self.market_reply(),
            Intent::NeocloudAnalysis => self.neocloud_reply(),
            Intent::General => self.general_reply(),
        }
    }

    /// Illustrative 8x H100 scenario under default assumptions. The message
    /// text is never parsed for parameters; custom numbers go through the
    /// scenario endpoint.
    fn tco_reply(&self) -> ChatReply {
        let assumptions = self.kb.assumptions();
        let spec = self.kb.gpu_or_default("H100");
        let result = compute_tco(
            &spec,
            8,
            assumptions.power_cost_per_kwh,
            assumptions.depreciation_years,
            assumptions,
        );

        let response = format!(
            "Based on our TCO model, here's a breakdown for an 8x H100 cluster:\n\n\
             **Capital Expenditure:** ${}\n\
             **Annual Power Cost:** ${} (at ${}/kWh, PUE {})\n\
             **Annual Maintenance:** ${} ({}% of CAPEX)\n\n\
             **{}-Year Total TCO:** ${}\n\
             **Cost per GPU-Hour:** ${:.2}\n\n\
             Key assumptions:\n\
             - {}-year depreciation\n\
             - {}% utilization target\n\
             - {}W TDP per H100\n\n\
             Want me to adjust any parameters for a custom scenario?",
            fmt_usd(result.capex),
            fmt_usd(result.annual_power_cost),
            assumptions.power_cost_per_kwh,
            assumptions.pue,
            fmt_usd(result.annual_maintenance),
            assumptions.maintenance_fraction * 100.0,
            assumptions.depreciation_years,
            fmt_usd(result.total_tco),
            result.cost_per_gpu_hour,
            assumptions.depreciation_years,
            assumptions.target_utilization * 100.0,
            spec.tdp_watts,
        );

        ChatReply {
            response,
            data: json!({
                "capex": result.capex,
                "annual_power": result.annual_power_cost,
                "annual_maintenance": result.annual_maintenance,
                "total_tco": result.total_tco,
                "cost_per_gpu_hour": result.cost_per_gpu_hour,
            }),
            intent: Intent::TcoCalculation,
        }
    }

    fn comparison_reply(&self) -> ChatReply {
        let table = self.comparison_table();

        let mut response = String::from("**GPU Comparison for AI Training:**\n\n");
        response.push_str("| GPU | Memory | TDP | FP16 TFLOPS | Est. Price | Perf/$ |\n");
        response.push_str("|-----|--------|-----|-------------|------------|--------|\n");
        for gpu in &table {
            response.push_str(&format!(
                "| {} | {} | {}W | {} | ${} | {} |\n",
                gpu.name,
                gpu.memory,
                gpu.tdp,
                gpu.fp16_tflops,
                fmt_usd(gpu.price),
                gpu.perf_per_dollar,
            ));
        }
        response.push_str("\n*Performance per dollar = FP16 TFLOPS per $1000*");

        let data = serde_json::to_value(&table).unwrap_or_default();
        ChatReply {
            response,
            data,
            intent: Intent::GpuComparison,
        }
    }

    /// Comparison rows sorted descending by performance per dollar. The sort
    /// is stable, so ties keep knowledge-base declaration order.
    pub fn comparison_table(&self) -> Vec<ComparisonRow> {
        let mut table: Vec<ComparisonRow> = self
            .kb
            .gpus()
            .iter()
            .map(|g| ComparisonRow {
                name: g.name.clone(),
                memory: g.memory.clone(),
                tdp: g.tdp_watts,
                fp16_tflops: g.fp16_tflops,
                price: g.price_usd,
                perf_per_dollar: (g.perf_per_dollar() * 100.0).round() / 100.0,
            })
            .collect();
        table.sort_by(|a, b| {
            b.perf_per_dollar
                .partial_cmp(&a.perf_per_dollar)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        table
    }

    fn market_reply(&self) -> ChatReply {
        let response = "For real-time market data, please ensure the market data gateway is \
                        configured.\n\n\
                        You can access:\n\
                        - **GPU Companies:** NVDA, AMD, INTC, TSM, AVGO\n\
                        - **Datacenter REITs:** EQIX, DLR, AMT, CCI\n\n\
                        Use the market API endpoints to fetch current prices, market caps, and \
                        financial metrics.\n\n\
                        Would you like me to explain how to set up the gateway connection?"
            .to_string();

        ChatReply {
            response,
            data: json!({
                "gpu_tickers": GPU_TICKERS,
                "datacenter_tickers": DATACENTER_TICKERS,
            }),
            intent: Intent::MarketData,
        }
    }

    fn neocloud_reply(&self) -> ChatReply {
        let mut response = String::from("**Neocloud Provider Overview:**\n\n");
        for provider in self.kb.providers() {
            response.push_str(&format!("**{}**\n", provider.name));
            response.push_str(&format!("- Focus: {}\n", provider.focus));
            response.push_str(&format!(
                "- Available GPUs: {}\n\n",
                provider.gpu_types.join(", ")
            ));
        }
        response.push_str(
            "\n**Key Differentiators:**\n\
             - CoreWeave: Kubernetes-native, competitive pricing\n\
             - Lambda Labs: Developer-focused, simple API\n\
             - Together AI: Optimized for inference workloads\n\
             - Crusoe: Sustainable energy focus\n\n\
             Would you like a detailed pricing comparison or availability analysis?",
        );

        let data = serde_json::to_value(self.kb.providers()).unwrap_or_default();
        ChatReply {
            response,
            data,
            intent: Intent::NeocloudAnalysis,
        }
    }

    fn general_reply(&self) -> ChatReply {
        let response = "I can help you with:\n\n\
                        1. **TCO Calculations** - Calculate total cost of ownership for GPU clusters\n\
                        2. **GPU Comparisons** - Compare H100, H200, MI300X, B200 specifications\n\
                        3. **Market Data** - Access market data for GPU and datacenter stocks\n\
                        4. **Neocloud Analysis** - Analyze cloud GPU providers\n\n\
                        What would you like to explore?"
            .to_string();

        ChatReply {
            response,
            data: json!({}),
            intent: Intent::General,
        }
    }
}

/// Whole-dollar figure with thousands separators, e.g. 312905.472 -> 312,905.
fn fmt_usd(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if whole < 0 {
        format!("-{out}")
    } else {
        out
    }
}
