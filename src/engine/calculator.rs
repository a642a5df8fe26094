// ============================================================================
// Inheritance Calculator
// Runs the share pipeline for one family and estate
// ============================================================================

use crate::domain::{
    Analysis, CalculationId, CalculatorConfig, FamilyComposition, InheritanceResult,
};
use crate::engine::{aggregator, asabah, awwal, fixed_share, radd};
use crate::interfaces::{CalculationEvent, EventHandler, NoOpEventHandler};
use crate::numeric::{Fraction, NumericResult};
use chrono::Utc;
use std::sync::Arc;

/// Fara'id calculator with a pluggable event handler
///
/// ```text
/// fixed shares -> awwal (if > 1) -> asabah -> radd (if nobody residuary) -> amounts
/// ```
///
/// Holds no per-call state; one instance can serve any number of threads.
pub struct InheritanceCalculator {
    config: CalculatorConfig,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl InheritanceCalculator {
    /// Create a new calculator
    pub fn new(config: CalculatorConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    /// Compute the distribution of `estate` among `family`.
    ///
    /// A non-positive (or NaN) estate yields the invalid-estate result, not
    /// an error.
    ///
    /// # Errors
    /// A `NumericError` means an arithmetic invariant broke; the rule set
    /// never produces one for valid input.
    pub fn calculate(
        &self,
        family: &FamilyComposition,
        estate: f64,
    ) -> NumericResult<InheritanceResult> {
        self.calculate_with_events(family, estate)
            .map(|(result, _)| result)
    }

    /// Like [`calculate`](Self::calculate), also returning the events that
    /// were delivered to the handler.
    pub fn calculate_with_events(
        &self,
        family: &FamilyComposition,
        estate: f64,
    ) -> NumericResult<(InheritanceResult, Vec<CalculationEvent>)> {
        let calculation_id = CalculationId::new();
        let mut events = Vec::new();

        // Event: Calculation started
        events.push(CalculationEvent::CalculationStarted {
            calculation_id,
            estate,
            timestamp: Utc::now(),
        });

        if estate.is_nan() || estate <= 0.0 {
            tracing::debug!(estate, "rejecting non-positive estate");
            events.push(CalculationEvent::EstateRejected {
                calculation_id,
                estate,
                timestamp: Utc::now(),
            });
            self.event_handler.on_events(events.clone());
            return Ok((InheritanceResult::invalid_estate(), events));
        }

        let mut analysis = None;

        // Fixed shares
        let fixed = fixed_share::resolve(family)?;
        let fixed_sum = fixed.total()?;
        events.push(CalculationEvent::FixedSharesResolved {
            calculation_id,
            heir_classes: fixed.len(),
            total: fixed_sum,
            timestamp: Utc::now(),
        });

        // Awwal
        let abated = awwal::apply(&fixed)?;
        if let Some(total_fraction) = abated.abated_from {
            analysis = Some(Analysis::Awwal { total_fraction });
            events.push(CalculationEvent::AbatementApplied {
                calculation_id,
                total_fraction,
                timestamp: Utc::now(),
            });
        }

        // Asabah
        let residuary = asabah::allocate(&abated.shares, family, abated.fixed_total)?;
        if let Some(branch) = residuary.branch {
            events.push(CalculationEvent::ResiduaryAllocated {
                calculation_id,
                branch,
                remainder: Fraction::ONE.checked_sub(abated.fixed_total)?,
                timestamp: Utc::now(),
            });
        }

        // Radd, only when nobody is residuary
        let (shares, remaining) = if residuary.branch.is_none() {
            let returned = radd::apply(&residuary.shares, residuary.remaining)?;
            if returned.returned {
                analysis = Some(Analysis::Radd);
                events.push(CalculationEvent::SurplusReturned {
                    calculation_id,
                    surplus: residuary.remaining,
                    timestamp: Utc::now(),
                });
            }
            (returned.shares, returned.remaining)
        } else {
            (residuary.shares, residuary.remaining)
        };

        if remaining.is_positive() {
            events.push(CalculationEvent::RemainderUnallocated {
                calculation_id,
                remainder: remaining,
                timestamp: Utc::now(),
            });
        }

        // Amounts
        let aggregation = aggregator::aggregate(&shares, estate, self.config.dust_epsilon);
        events.push(CalculationEvent::CalculationCompleted {
            calculation_id,
            total_distributed: aggregation.total_distributed,
            unallocated_amount: aggregation.unallocated_amount,
            timestamp: Utc::now(),
        });

        tracing::debug!(
            calculation_id = %calculation_id.as_uuid(),
            heirs = aggregation.shares.len(),
            analysis = analysis.as_ref().map(Analysis::key),
            "inheritance calculated"
        );

        let result = InheritanceResult {
            shares: aggregation.shares,
            unallocated_amount: aggregation.unallocated_amount,
            total_distributed: aggregation.total_distributed,
            analysis,
        };

        // Emit events
        self.event_handler.on_events(events.clone());

        Ok((result, events))
    }

    /// Get the active configuration
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}

impl Default for InheritanceCalculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default(), Arc::new(NoOpEventHandler))
    }
}

/// Compute with the default configuration and no event handler.
pub fn calculate_inheritance(
    family: &FamilyComposition,
    estate: f64,
) -> NumericResult<InheritanceResult> {
    InheritanceCalculator::default().calculate(family, estate)
}
