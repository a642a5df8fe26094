// ============================================================================
// Family Composition
// The surviving relatives of the deceased
// ============================================================================

use super::heir::{Gender, HeirClass};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Surviving family of the deceased.
///
/// Counts are unsigned, so a negative headcount cannot be expressed.
/// Siblings are full siblings only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FamilyComposition {
    pub deceased_gender: Gender,
    pub has_spouse: bool,
    pub has_father: bool,
    pub has_mother: bool,
    pub sons: u32,
    pub daughters: u32,
    pub brothers: u32,
    pub sisters: u32,
}

impl FamilyComposition {
    /// A deceased with no surviving relatives.
    pub fn new(deceased_gender: Gender) -> Self {
        Self {
            deceased_gender,
            has_spouse: false,
            has_father: false,
            has_mother: false,
            sons: 0,
            daughters: 0,
            brothers: 0,
            sisters: 0,
        }
    }

    /// Builder method: Set whether a spouse survives
    pub fn with_spouse(mut self, has_spouse: bool) -> Self {
        self.has_spouse = has_spouse;
        self
    }

    /// Builder method: Set whether the father survives
    pub fn with_father(mut self, has_father: bool) -> Self {
        self.has_father = has_father;
        self
    }

    /// Builder method: Set whether the mother survives
    pub fn with_mother(mut self, has_mother: bool) -> Self {
        self.has_mother = has_mother;
        self
    }

    pub fn with_sons(mut self, sons: u32) -> Self {
        self.sons = sons;
        self
    }

    pub fn with_daughters(mut self, daughters: u32) -> Self {
        self.daughters = daughters;
        self
    }

    pub fn with_brothers(mut self, brothers: u32) -> Self {
        self.brothers = brothers;
        self
    }

    pub fn with_sisters(mut self, sisters: u32) -> Self {
        self.sisters = sisters;
        self
    }

    // ========================================================================
    // Derived predicates
    // ========================================================================

    #[inline]
    pub fn has_children(&self) -> bool {
        self.sons > 0 || self.daughters > 0
    }

    /// Kalalah: no children and no father.
    #[inline]
    pub fn is_kalalah(&self) -> bool {
        !self.has_children() && !self.has_father
    }

    #[inline]
    pub fn sibling_count(&self) -> u64 {
        u64::from(self.brothers) + u64::from(self.sisters)
    }

    /// The spouse's heir class, if a spouse survives.
    pub fn spouse_class(&self) -> Option<HeirClass> {
        self.has_spouse
            .then(|| HeirClass::spouse_of(self.deceased_gender))
    }
}

impl Default for FamilyComposition {
    /// Reference household: male deceased survived by wife, both parents,
    /// one son and one daughter.
    fn default() -> Self {
        Self::new(Gender::Male)
            .with_spouse(true)
            .with_father(true)
            .with_mother(true)
            .with_sons(1)
            .with_daughters(1)
    }
}
