//! Shared test helpers.

use gpuintel::infrastructure::feeds::fixture::FixtureFeed;
use gpuintel::GpuIntel;
use std::sync::Arc;

pub fn setup() -> GpuIntel {
    GpuIntel::with_feed(Arc::new(FixtureFeed::with_seed(42)))
}
