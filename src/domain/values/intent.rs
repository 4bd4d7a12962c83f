use serde::{Deserialize, Serialize};
use std::fmt;

/// What a chat message is asking for. First matching keyword set wins,
/// checked in declaration order; anything else is General.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    TcoCalculation,
    GpuComparison,
    MarketData,
    NeocloudAnalysis,
    General,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::TcoCalculation => write!(f, "tco_calculation"),
            Intent::GpuComparison => write!(f, "gpu_comparison"),
            Intent::MarketData => write!(f, "market_data"),
            Intent::NeocloudAnalysis => write!(f, "neocloud_analysis"),
            Intent::General => write!(f, "general"),
        }
    }
}

const TCO_KEYWORDS: &[&str] = &["tco", "cost", "expense", "budget", "pricing"];
const COMPARISON_KEYWORDS: &[&str] = &["compare", "vs", "versus", "difference", "better"];
const MARKET_KEYWORDS: &[&str] = &["market", "stock", "price", "ticker", "equity"];
const NEOCLOUD_KEYWORDS: &[&str] = &["neocloud", "coreweave", "lambda", "together", "cloud provider"];

/// Classify a free-text message. Keyword matching is substring containment
/// over the lower-cased message; no scoring, no overlap resolution beyond
/// the fixed priority order.
pub fn classify(message: &str) -> Intent {
    let lower = message.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if contains_any(TCO_KEYWORDS) {
        Intent::TcoCalculation
    } else if contains_any(COMPARISON_KEYWORDS) {
        Intent::GpuComparison
    } else if contains_any(MARKET_KEYWORDS) {
        Intent::MarketData
    } else if contains_any(NEOCLOUD_KEYWORDS) {
        Intent::NeocloudAnalysis
    } else {
        Intent::General
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tco_intent() {
        assert_eq!(classify("What's the TCO for 8 GPUs?"), Intent::TcoCalculation);
        assert_eq!(classify("how much does a cluster cost"), Intent::TcoCalculation);
    }

    #[test]
    fn test_comparison_intent() {
        assert_eq!(classify("Compare H100 vs MI300X"), Intent::GpuComparison);
        assert_eq!(classify("which is better, H200 or B200"), Intent::GpuComparison);
    }

    #[test]
    fn test_market_intent() {
        assert_eq!(classify("NVDA stock price"), Intent::MarketData);
    }

    #[test]
    fn test_neocloud_intent() {
        assert_eq!(classify("Tell me about CoreWeave"), Intent::NeocloudAnalysis);
    }

    #[test]
    fn test_general_fallback() {
        assert_eq!(classify("Hello"), Intent::General);
        assert_eq!(classify(""), Intent::General);
    }

    #[test]
    fn test_priority_order_tco_wins() {
        // "pricing" (tco) and "compare" (comparison) both present; tco is
        // checked first.
        assert_eq!(classify("compare pricing across clouds"), Intent::TcoCalculation);
    }
}
