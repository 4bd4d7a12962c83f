use serde::{Deserialize, Serialize};

/// A cloud provider specialized in GPU/AI infrastructure rental.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeocloudProvider {
    pub name: String,
    pub focus: String,
    pub gpu_types: Vec<String>,
}

impl NeocloudProvider {
    pub fn new(name: &str, focus: &str, gpu_types: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            focus: focus.to_string(),
            gpu_types: gpu_types.iter().map(|g| g.to_string()).collect(),
        }
    }
}
