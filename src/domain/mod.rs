// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod family;
pub mod heir;
pub mod result;
pub mod share;

pub use config::{CalculatorConfig, DEFAULT_DUST_EPSILON};
pub use family::FamilyComposition;
pub use heir::{Gender, HeirClass, UnknownHeirClass};
pub use result::{Analysis, CalculationId, HeirShare, InheritanceResult};
pub use share::{ResiduaryBranch, ShareEntry, ShareTable};
