// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculation stages
// ============================================================================

use crate::domain::{CalculationId, ResiduaryBranch};
use crate::numeric::Fraction;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted while a calculation moves through its stages
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculationEvent {
    /// Calculation received with the given estate value
    CalculationStarted {
        calculation_id: CalculationId,
        estate: f64,
        timestamp: DateTime<Utc>,
    },

    /// Estate was not positive, no stage ran
    EstateRejected {
        calculation_id: CalculationId,
        estate: f64,
        timestamp: DateTime<Utc>,
    },

    /// Fixed (fard) shares resolved
    FixedSharesResolved {
        calculation_id: CalculationId,
        heir_classes: usize,
        total: Fraction,
        timestamp: DateTime<Utc>,
    },

    /// Fixed shares exceeded the estate and were scaled down
    AbatementApplied {
        calculation_id: CalculationId,
        total_fraction: Fraction,
        timestamp: DateTime<Utc>,
    },

    /// Remainder handed to residuary heirs
    ResiduaryAllocated {
        calculation_id: CalculationId,
        branch: ResiduaryBranch,
        remainder: Fraction,
        timestamp: DateTime<Utc>,
    },

    /// Surplus returned to non-spouse fixed-share heirs
    SurplusReturned {
        calculation_id: CalculationId,
        surplus: Fraction,
        timestamp: DateTime<Utc>,
    },

    /// Remainder with no eligible recipient
    RemainderUnallocated {
        calculation_id: CalculationId,
        remainder: Fraction,
        timestamp: DateTime<Utc>,
    },

    /// Amounts computed, result ready
    CalculationCompleted {
        calculation_id: CalculationId,
        total_distributed: f64,
        unallocated_amount: f64,
        timestamp: DateTime<Utc>,
    },
}

impl CalculationEvent {
    pub fn calculation_id(&self) -> CalculationId {
        match self {
            CalculationEvent::CalculationStarted { calculation_id, .. }
            | CalculationEvent::EstateRejected { calculation_id, .. }
            | CalculationEvent::FixedSharesResolved { calculation_id, .. }
            | CalculationEvent::AbatementApplied { calculation_id, .. }
            | CalculationEvent::ResiduaryAllocated { calculation_id, .. }
            | CalculationEvent::SurplusReturned { calculation_id, .. }
            | CalculationEvent::RemainderUnallocated { calculation_id, .. }
            | CalculationEvent::CalculationCompleted { calculation_id, .. } => *calculation_id,
        }
    }
}

/// Event handler trait for processing calculation events
/// Implementations can handle logging, auditing, metrics, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculation event
    fn on_event(&self, event: CalculationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculationEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        tracing::debug!("Inheritance calculation event: {:?}", event);
    }
}

/// Keeps every event it receives, for audit trails and tests.
#[derive(Default)]
pub struct CollectingEventHandler {
    events: Mutex<Vec<CalculationEvent>>,
}

impl CollectingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far
    pub fn events(&self) -> Vec<CalculationEvent> {
        self.events.lock().clone()
    }

    /// Remove and return the events received so far
    pub fn drain(&self) -> Vec<CalculationEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventHandler for CollectingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<CalculationEvent>) {
        self.events.lock().extend(events);
    }
}
