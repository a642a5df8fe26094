// ============================================================================
// Fixed-Share Resolver
// Quranic fixed shares (fard) for a family composition
// ============================================================================

use crate::domain::{FamilyComposition, Gender, HeirClass, ShareEntry, ShareTable};
use crate::numeric::{Fraction, NumericResult};

/// Resolve the fixed shares of a family.
///
/// Each rule is checked independently and appends at most one entry, in this
/// order: spouse, mother, father, daughters, kalalah sisters. Sons, brothers
/// and a father without children get nothing here; they are residuary only.
///
/// ```text
/// Wife, father, mother, two daughters:
///   wife       1/8   (children present)
///   mother     1/6   (children present)
///   father     1/6   (children present)
///   daughters  2/3   (two or more, no son)
/// ```
pub fn resolve(family: &FamilyComposition) -> NumericResult<ShareTable> {
    let has_children = family.has_children();
    let mut table = ShareTable::new();

    // Spouse
    let spouse_share = spouse_share(family)?;
    if let (Some(heir), Some(fraction)) = (family.spouse_class(), spouse_share) {
        table = table.with_entry(ShareEntry::new(heir, fraction, 1))?;
    }

    // Mother
    if family.has_mother {
        let fraction = match spouse_share {
            // Umariyyatayn: a third of what the spouse leaves
            Some(spouse) if !has_children && family.has_father => {
                Fraction::ONE
                    .checked_sub(spouse)?
                    .checked_mul(Fraction::new(1, 3)?)?
            },
            _ if has_children || family.sibling_count() >= 2 => Fraction::new(1, 6)?,
            _ => Fraction::new(1, 3)?,
        };
        table = table.with_entry(ShareEntry::new(HeirClass::Mother, fraction, 1))?;
    }

    // Father with children
    if family.has_father && has_children {
        table = table.with_entry(ShareEntry::new(HeirClass::Father, Fraction::new(1, 6)?, 1))?;
    }

    // Daughters without a son
    if family.sons == 0 && family.daughters > 0 {
        let fraction = half_or_two_thirds(family.daughters)?;
        table = table.with_entry(ShareEntry::new(HeirClass::Daughter, fraction, family.daughters))?;
    }

    // Kalalah sisters with no brother and no daughter
    if family.is_kalalah() && family.brothers == 0 && family.sisters > 0 && family.daughters == 0 {
        let fraction = half_or_two_thirds(family.sisters)?;
        table = table.with_entry(ShareEntry::new(HeirClass::Sister, fraction, family.sisters))?;
    }

    tracing::trace!(heir_classes = table.len(), "fixed shares resolved");
    Ok(table)
}

/// The surviving spouse's fixed share, if there is a spouse.
fn spouse_share(family: &FamilyComposition) -> NumericResult<Option<Fraction>> {
    if !family.has_spouse {
        return Ok(None);
    }

    let fraction = match (family.deceased_gender, family.has_children()) {
        (Gender::Male, true) => Fraction::new(1, 8)?,
        (Gender::Male, false) => Fraction::new(1, 4)?,
        (Gender::Female, true) => Fraction::new(1, 4)?,
        (Gender::Female, false) => Fraction::new(1, 2)?,
    };
    Ok(Some(fraction))
}

/// One heir takes a half, two or more share two thirds.
fn half_or_two_thirds(count: u32) -> NumericResult<Fraction> {
    if count == 1 {
        Fraction::new(1, 2)
    } else {
        Fraction::new(2, 3)
    }
}
