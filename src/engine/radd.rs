// ============================================================================
// Return (Radd)
// Surplus handed back to fixed-share heirs when nobody is residuary
// ============================================================================

use crate::domain::ShareTable;
use crate::numeric::{Fraction, NumericResult};

/// Shares after the return check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnOutcome {
    pub shares: ShareTable,
    /// Left unallocated; zero whenever the surplus was returned
    pub remaining: Fraction,
    pub returned: bool,
}

/// Return `remaining` to every non-spouse heir in proportion to their share.
///
/// Spouses keep their fixed share unchanged. With no eligible heir the
/// surplus stays unallocated.
///
/// ```text
/// mother 1/6, daughter 1/2, remaining 1/3
///   mother   1/6 + 1/3 * (1/6 / 2/3) = 1/4
///   daughter 1/2 + 1/3 * (1/2 / 2/3) = 3/4
/// ```
pub fn apply(shares: &ShareTable, remaining: Fraction) -> NumericResult<ReturnOutcome> {
    let unchanged = || ReturnOutcome {
        shares: shares.clone(),
        remaining,
        returned: false,
    };

    if !remaining.is_positive() {
        return Ok(unchanged());
    }

    let candidate_total = Fraction::sum(
        shares
            .iter()
            .filter(|entry| !entry.heir.is_spouse())
            .map(|entry| entry.fraction),
    )?;

    if candidate_total.is_zero() {
        tracing::debug!(remaining = %remaining, "no heir eligible for radd, remainder unallocated");
        return Ok(unchanged());
    }

    tracing::debug!(remaining = %remaining, candidates = %candidate_total, "applying radd");

    let returned = shares.map_fractions(|entry| {
        if entry.heir.is_spouse() {
            return Ok(entry.fraction);
        }
        let top_up = remaining.checked_mul(entry.fraction.checked_div(candidate_total)?)?;
        entry.fraction.checked_add(top_up)
    })?;

    Ok(ReturnOutcome {
        shares: returned,
        remaining: Fraction::ZERO,
        returned: true,
    })
}
