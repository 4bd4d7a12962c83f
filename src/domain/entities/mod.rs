pub mod gpu_spec;
pub mod provider;
pub mod training;
