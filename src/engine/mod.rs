// ============================================================================
// Engine Module
// Contains the share computation stages and the pipeline that runs them
// ============================================================================

pub mod aggregator;
pub mod asabah;
pub mod awwal;
mod calculator;
pub mod fixed_share;
pub mod radd;

pub mod factory;

pub use calculator::{calculate_inheritance, InheritanceCalculator};
pub use factory::{create_from_config, InheritanceCalculatorBuilder};
