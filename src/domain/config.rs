// ============================================================================
// Calculator Configuration
// Tunables for the floating-point stage of a calculation
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Amounts at or below this magnitude are treated as representation noise.
pub const DEFAULT_DUST_EPSILON: f64 = 1e-6;

/// Configuration for an inheritance calculator
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Shares whose amount is at or below this are hidden, and an unallocated
    /// amount within it is reported as exactly zero
    pub dust_epsilon: f64,
}

impl CalculatorConfig {
    pub fn new(dust_epsilon: f64) -> Self {
        Self { dust_epsilon }
    }

    /// Builder method: Set the dust threshold
    pub fn with_dust_epsilon(mut self, dust_epsilon: f64) -> Self {
        self.dust_epsilon = dust_epsilon;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.dust_epsilon.is_finite() {
            return Err("Dust epsilon must be finite".to_string());
        }

        if self.dust_epsilon < 0.0 {
            return Err("Dust epsilon cannot be negative".to_string());
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Default threshold of one millionth of a currency unit
    pub fn standard() -> Self {
        Self::new(DEFAULT_DUST_EPSILON)
    }

    /// No dust suppression: every non-zero amount is reported as computed
    pub fn strict() -> Self {
        Self::new(0.0)
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::standard()
    }
}
