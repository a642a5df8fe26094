// ============================================================================
// Share Aggregator
// Exact fractions to estate amounts
// ============================================================================

use crate::domain::{HeirShare, ShareTable};

/// Amounts derived from a final share table.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    /// Rows above the dust threshold, in table order
    pub shares: Vec<HeirShare>,
    /// Sum of every row's amount, hidden rows included
    pub total_distributed: f64,
    pub unallocated_amount: f64,
}

/// Convert each share to money and total it up.
///
/// Totals are summed from the amounts themselves so float error from one
/// row cannot be amplified by another stage.
pub fn aggregate(shares: &ShareTable, estate: f64, dust_epsilon: f64) -> Aggregation {
    let rows: Vec<HeirShare> = shares
        .iter()
        .map(|entry| {
            let share_amount = entry.fraction.of_amount(estate);
            let share_per_individual = if entry.count > 0 {
                share_amount / f64::from(entry.count)
            } else {
                0.0
            };
            HeirShare {
                heir: entry.heir,
                count: entry.count,
                share_fraction: entry.fraction,
                share_amount,
                share_per_individual,
            }
        })
        .collect();

    let total_distributed: f64 = rows.iter().map(|row| row.share_amount).sum();

    let unallocated = estate - total_distributed;
    let unallocated_amount = if unallocated.abs() > dust_epsilon {
        unallocated
    } else {
        0.0
    };

    let visible: Vec<HeirShare> = rows
        .into_iter()
        .filter(|row| row.share_amount > dust_epsilon)
        .collect();

    tracing::trace!(
        rows = visible.len(),
        total_distributed,
        unallocated_amount,
        "shares aggregated"
    );

    Aggregation {
        shares: visible,
        total_distributed,
        unallocated_amount,
    }
}
