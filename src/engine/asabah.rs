// ============================================================================
// Residuary Allocation (Asabah)
// Weighted distribution of what the fixed shares leave over
// ============================================================================

use crate::domain::{FamilyComposition, HeirClass, ResiduaryBranch, ShareEntry, ShareTable};
use crate::numeric::{Fraction, NumericResult};
use arrayvec::ArrayVec;

/// One heir class taking part in the residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResiduaryPart {
    pub heir: HeirClass,
    pub count: u32,
    /// Parts for the whole class: per-head weight times headcount
    pub weight: i64,
}

impl ResiduaryPart {
    fn new(heir: HeirClass, count: u32, weight_per_head: i64) -> Self {
        Self {
            heir,
            count,
            weight: i64::from(count) * weight_per_head,
        }
    }
}

/// Shares after residuary allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResiduaryOutcome {
    pub shares: ShareTable,
    /// Branch that matched, even if there was nothing left to hand out
    pub branch: Option<ResiduaryBranch>,
    /// Zero whenever a branch matched
    pub remaining: Fraction,
}

/// Pick the residuary branch for a family, first match wins.
///
/// Males take two parts per head, females one.
pub fn select_branch(
    family: &FamilyComposition,
    fixed: &ShareTable,
) -> Option<(ResiduaryBranch, ArrayVec<ResiduaryPart, 2>)> {
    let mut parts = ArrayVec::new();

    let branch = if family.sons > 0 {
        parts.push(ResiduaryPart::new(HeirClass::Son, family.sons, 2));
        if family.daughters > 0 && !fixed.contains(HeirClass::Daughter) {
            parts.push(ResiduaryPart::new(HeirClass::Daughter, family.daughters, 1));
        }
        ResiduaryBranch::Children
    } else if family.has_father && !family.has_children() {
        parts.push(ResiduaryPart::new(HeirClass::Father, 1, 1));
        ResiduaryBranch::Father
    } else if family.is_kalalah() && family.brothers > 0 {
        parts.push(ResiduaryPart::new(HeirClass::Brother, family.brothers, 2));
        if family.sisters > 0 {
            parts.push(ResiduaryPart::new(HeirClass::Sister, family.sisters, 1));
        }
        ResiduaryBranch::Siblings
    } else if family.is_kalalah()
        && family.daughters > 0
        && family.brothers == 0
        && family.sisters > 0
    {
        parts.push(ResiduaryPart::new(HeirClass::Sister, family.sisters, 1));
        ResiduaryBranch::SistersWithDaughters
    } else {
        return None;
    };

    Some((branch, parts))
}

/// Hand `1 - fixed_total` to the residuary heirs.
///
/// A class that already holds a fixed share has its residuary portion added
/// to that entry rather than getting a second row.
pub fn allocate(
    shares: &ShareTable,
    family: &FamilyComposition,
    fixed_total: Fraction,
) -> NumericResult<ResiduaryOutcome> {
    let remaining = Fraction::ONE.checked_sub(fixed_total)?;

    let Some((branch, parts)) = select_branch(family, shares) else {
        return Ok(ResiduaryOutcome {
            shares: shares.clone(),
            branch: None,
            remaining,
        });
    };

    if !remaining.is_positive() {
        return Ok(ResiduaryOutcome {
            shares: shares.clone(),
            branch: Some(branch),
            remaining,
        });
    }

    let total_weight: i64 = parts.iter().map(|part| part.weight).sum();
    tracing::debug!(
        branch = branch.key(),
        remaining = %remaining,
        total_weight,
        "allocating residue"
    );

    let mut allocated = shares.clone();
    for part in &parts {
        let portion = remaining.checked_mul(Fraction::new(part.weight, total_weight)?)?;
        tracing::trace!(heir = %part.heir, portion = %portion, "residuary portion");
        allocated = allocated.with_entry(ShareEntry::new(part.heir, portion, part.count))?;
    }

    Ok(ResiduaryOutcome {
        shares: allocated,
        branch: Some(branch),
        remaining: Fraction::ZERO,
    })
}
