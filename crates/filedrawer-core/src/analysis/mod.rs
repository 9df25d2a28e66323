//! Closed-form companions to the simulation.
//!
//! - **Power** (`power`): known-variance approximation of the detection rate
//! - **MDE** (`mde`): smallest true mean detected half of the time

pub mod mde;
pub mod power;

pub use mde::minimum_detectable_effect;
pub use power::{approximate_power, conditional_miscoverage_under_null};
