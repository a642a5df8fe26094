// ============================================================================
// Calculator Factory
// Creates inheritance calculators with proper configuration
// ============================================================================

use crate::domain::CalculatorConfig;
use crate::engine::InheritanceCalculator;
use crate::interfaces::{EventHandler, LoggingEventHandler, NoOpEventHandler};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `event_handler` - Event handler for calculation events
///
/// # Returns
/// * `Result<InheritanceCalculator, String>` - Configured calculator or error
///
/// # Example
/// ```
/// use faraid_engine::prelude::*;
/// use faraid_engine::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::standard();
/// let calculator = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<InheritanceCalculator, String> {
    // Validate configuration first
    config.validate()?;

    Ok(InheritanceCalculator::new(config, event_handler))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use faraid_engine::prelude::*;
/// use faraid_engine::engine::factory::InheritanceCalculatorBuilder;
///
/// let calculator = InheritanceCalculatorBuilder::new()
///     .with_dust_epsilon(0.005)
///     .logging_events()
///     .build()
///     .unwrap();
/// assert_eq!(calculator.config().dust_epsilon, 0.005);
/// ```
pub struct InheritanceCalculatorBuilder {
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
}

impl InheritanceCalculatorBuilder {
    /// Create a new builder with the standard configuration
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::standard(),
            event_handler: Arc::new(NoOpEventHandler),
        }
    }

    /// Set the dust threshold for amounts
    pub fn with_dust_epsilon(mut self, dust_epsilon: f64) -> Self {
        self.config.dust_epsilon = dust_epsilon;
        self
    }

    /// Report every computed amount, however small
    pub fn strict(mut self) -> Self {
        self.config = CalculatorConfig::strict();
        self
    }

    /// Use a custom event handler
    pub fn with_event_handler(mut self, event_handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = event_handler;
        self
    }

    /// Forward events to `tracing`
    pub fn logging_events(self) -> Self {
        self.with_event_handler(Arc::new(LoggingEventHandler))
    }

    /// Build the calculator
    pub fn build(self) -> Result<InheritanceCalculator, String> {
        create_from_config(self.config, self.event_handler)
    }
}

impl Default for InheritanceCalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
