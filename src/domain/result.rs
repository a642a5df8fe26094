// ============================================================================
// Inheritance Result
// Output records handed to presentation layers
// ============================================================================

use super::heir::HeirClass;
use crate::numeric::Fraction;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// Identifier attached to the events of one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculationId(Uuid);

impl CalculationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CalculationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Which corrective rule shaped the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Analysis {
    /// Estate was zero, negative or not a number
    InvalidEstate,
    /// Fixed shares summed to `total_fraction` > 1 and were scaled down
    Awwal { total_fraction: Fraction },
    /// Surplus was returned to the non-spouse fixed-share heirs
    Radd,
}

impl Analysis {
    /// Message key for the string table.
    pub const fn key(&self) -> &'static str {
        match self {
            Analysis::InvalidEstate => "analysis_positive_estate",
            Analysis::Awwal { .. } => "analysis_awwal",
            Analysis::Radd => "analysis_radd",
        }
    }

    /// Named message parameters, e.g. `totalFraction` for Awwal.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Analysis::Awwal { total_fraction } => {
                vec![("totalFraction", total_fraction.to_string())]
            },
            Analysis::InvalidEstate | Analysis::Radd => Vec::new(),
        }
    }
}

/// One heir class's final share, in money.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeirShare {
    pub heir: HeirClass,
    pub count: u32,
    pub share_fraction: Fraction,
    /// Total for the whole class
    pub share_amount: f64,
    pub share_per_individual: f64,
}

/// Outcome of one calculation. Pure value, never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InheritanceResult {
    pub shares: Vec<HeirShare>,
    pub unallocated_amount: f64,
    pub total_distributed: f64,
    pub analysis: Option<Analysis>,
}

impl InheritanceResult {
    /// Uniform answer for a non-positive estate.
    pub fn invalid_estate() -> Self {
        Self {
            shares: Vec::new(),
            unallocated_amount: 0.0,
            total_distributed: 0.0,
            analysis: Some(Analysis::InvalidEstate),
        }
    }

    pub fn share(&self, heir: HeirClass) -> Option<&HeirShare> {
        self.shares.iter().find(|share| share.heir == heir)
    }

    /// Sum of the visible share fractions.
    pub fn allocated_fraction(&self) -> Option<Fraction> {
        Fraction::sum(self.shares.iter().map(|share| share.share_fraction)).ok()
    }

    #[inline]
    pub fn is_fully_distributed(&self) -> bool {
        self.unallocated_amount == 0.0
    }

    /// Serialize for API consumers.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
