use serde::{Deserialize, Serialize};

/// Datacenter GPU model specification. Immutable once loaded into the
/// knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpuSpec {
    pub name: String,
    pub manufacturer: String,
    pub process_node: String,
    pub memory: String,
    pub tdp_watts: f64,
    pub fp16_tflops: f64,
    pub price_usd: f64,
}

impl GpuSpec {
    pub fn new(
        name: &str,
        manufacturer: &str,
        process_node: &str,
        memory: &str,
        tdp_watts: f64,
        fp16_tflops: f64,
        price_usd: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            manufacturer: manufacturer.to_string(),
            process_node: process_node.to_string(),
            memory: memory.to_string(),
            tdp_watts,
            fp16_tflops,
            price_usd,
        }
    }

    /// FP16 TFLOPS per $1000 of list price.
    pub fn perf_per_dollar(&self) -> f64 {
        self.fp16_tflops / (self.price_usd / 1000.0)
    }
}
