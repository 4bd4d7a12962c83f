pub mod assumptions;
pub mod intent;
pub mod roi;
pub mod tco;
