// ============================================================================
// Abatement (Awwal)
// Proportional reduction when fixed shares exceed the estate
// ============================================================================

use crate::domain::ShareTable;
use crate::numeric::{Fraction, NumericResult};

/// Fixed shares after the abatement check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbatementOutcome {
    pub shares: ShareTable,
    /// Sum of `shares`; exactly one whenever abatement fired
    pub fixed_total: Fraction,
    /// Original sum when it exceeded one
    pub abated_from: Option<Fraction>,
}

/// Scale every fixed share by `1 / total` when the total exceeds the estate.
///
/// ```text
/// wife 1/8, mother 1/6, father 1/6, daughters 2/3  => total 27/24
/// wife 3/27, mother 4/27, father 4/27, daughters 16/27
/// ```
pub fn apply(shares: &ShareTable) -> NumericResult<AbatementOutcome> {
    let total = shares.total()?;

    if total <= Fraction::ONE {
        return Ok(AbatementOutcome {
            shares: shares.clone(),
            fixed_total: total,
            abated_from: None,
        });
    }

    tracing::debug!(total = %total, "fixed shares exceed the estate, applying awwal");

    // total > 1 so the divisor is never zero
    let abated = shares.map_fractions(|entry| entry.fraction.checked_div(total))?;

    Ok(AbatementOutcome {
        shares: abated,
        fixed_total: Fraction::ONE,
        abated_from: Some(total),
    })
}
