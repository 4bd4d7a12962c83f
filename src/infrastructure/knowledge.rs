//! Built-in domain knowledge: GPU model specs, TCO assumption defaults, and
//! neocloud provider metadata. Read-only after construction.

use crate::domain::entities::gpu_spec::GpuSpec;
use crate::domain::entities::provider::NeocloudProvider;
use crate::domain::values::assumptions::TcoAssumptions;
use serde::Serialize;

/// Fallback for GPU models the table does not know: priced like an H100.
pub const DEFAULT_GPU_PRICE_USD: f64 = 30000.0;
pub const DEFAULT_GPU_TDP_WATTS: f64 = 700.0;

#[derive(Debug, Serialize)]
pub struct KnowledgeBase {
    gpus: Vec<GpuSpec>,
    assumptions: TcoAssumptions,
    providers: Vec<NeocloudProvider>,
}

impl KnowledgeBase {
    /// GPU entries keep declaration order (H100, H200, MI300X, B200) so
    /// iteration and sort tie-breaks are reproducible.
    pub fn builtin() -> Self {
        Self {
            gpus: vec![
                GpuSpec::new("H100", "NVIDIA", "4nm", "80GB HBM3", 700.0, 1979.0, 30000.0),
                GpuSpec::new("H200", "NVIDIA", "4nm", "141GB HBM3e", 700.0, 1979.0, 40000.0),
                GpuSpec::new("MI300X", "AMD", "5nm", "192GB HBM3", 750.0, 1307.0, 15000.0),
                GpuSpec::new("B200", "NVIDIA", "4nm", "192GB HBM3e", 1000.0, 4500.0, 40000.0),
            ],
            assumptions: TcoAssumptions::default(),
            providers: vec![
                NeocloudProvider::new("CoreWeave", "GPU cloud", &["H100", "A100"]),
                NeocloudProvider::new("Lambda Labs", "ML cloud", &["H100", "A100"]),
                NeocloudProvider::new("Together AI", "Inference", &["H100"]),
                NeocloudProvider::new("Crusoe", "Clean energy", &["H100", "A100"]),
            ],
        }
    }

    pub fn gpu(&self, name: &str) -> Option<&GpuSpec> {
        self.gpus.iter().find(|g| g.name == name)
    }

    pub fn gpus(&self) -> &[GpuSpec] {
        &self.gpus
    }

    pub fn providers(&self) -> &[NeocloudProvider] {
        &self.providers
    }

    pub fn assumptions(&self) -> &TcoAssumptions {
        &self.assumptions
    }

    /// Spec for an unknown model name, substituting the documented default
    /// price and TDP instead of failing the calculation.
    pub fn gpu_or_default(&self, name: &str) -> GpuSpec {
        self.gpu(name).cloned().unwrap_or_else(|| {
            GpuSpec::new(
                name,
                "Unknown",
                "unknown",
                "unknown",
                DEFAULT_GPU_TDP_WATTS,
                0.0,
                DEFAULT_GPU_PRICE_USD,
            )
        })
    }
}
