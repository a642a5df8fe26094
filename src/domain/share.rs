// ============================================================================
// Share Table
// Exact per-heir-class fractions flowing between engine stages
// ============================================================================

use super::heir::HeirClass;
use crate::numeric::{Fraction, NumericResult};
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One heir class's exact portion of the estate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShareEntry {
    pub heir: HeirClass,
    pub fraction: Fraction,
    /// Headcount the fraction is split between
    pub count: u32,
}

impl ShareEntry {
    pub fn new(heir: HeirClass, fraction: Fraction, count: u32) -> Self {
        Self {
            heir,
            fraction,
            count,
        }
    }
}

/// Insertion-ordered table holding at most one entry per heir class.
///
/// Stages never mutate a table they were handed; they derive a new one.
/// Adding a fraction for a class that is already present merges additively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShareTable {
    entries: SmallVec<[ShareEntry; 8]>,
}

impl ShareTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShareEntry> {
        self.entries.iter()
    }

    pub fn get(&self, heir: HeirClass) -> Option<&ShareEntry> {
        self.entries.iter().find(|entry| entry.heir == heir)
    }

    #[inline]
    pub fn contains(&self, heir: HeirClass) -> bool {
        self.get(heir).is_some()
    }

    /// Sum of every entry's fraction.
    pub fn total(&self) -> NumericResult<Fraction> {
        Fraction::sum(self.entries.iter().map(|entry| entry.fraction))
    }

    /// Return a new table with `entry` merged in.
    ///
    /// An existing entry for the same class keeps its position and count and
    /// has the new fraction added to it.
    pub fn with_entry(&self, entry: ShareEntry) -> NumericResult<Self> {
        let mut entries = self.entries.clone();
        let position = entries.iter().position(|existing| existing.heir == entry.heir);
        match position {
            Some(index) => {
                let existing = &mut entries[index];
                existing.fraction = existing.fraction.checked_add(entry.fraction)?;
            },
            None => entries.push(entry),
        }
        Ok(Self { entries })
    }

    /// Return a new table whose fractions are produced by `f`.
    pub fn map_fractions<F>(&self, mut f: F) -> NumericResult<Self>
    where
        F: FnMut(&ShareEntry) -> NumericResult<Fraction>,
    {
        let entries = self
            .entries
            .iter()
            .map(|entry| -> NumericResult<ShareEntry> {
                Ok(ShareEntry {
                    fraction: f(entry)?,
                    ..*entry
                })
            })
            .collect::<NumericResult<SmallVec<[ShareEntry; 8]>>>()?;
        Ok(Self { entries })
    }
}

/// Which residuary rule took the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResiduaryBranch {
    /// Sons, with daughters who hold no fixed share
    Children,
    /// A father with no children
    Father,
    /// Brothers in kalalah, with any sisters
    Siblings,
    /// Sisters alongside daughters' fixed share
    SistersWithDaughters,
}

impl ResiduaryBranch {
    pub const fn key(self) -> &'static str {
        match self {
            ResiduaryBranch::Children => "children",
            ResiduaryBranch::Father => "father",
            ResiduaryBranch::Siblings => "siblings",
            ResiduaryBranch::SistersWithDaughters => "sisters_with_daughters",
        }
    }
}

impl<'a> IntoIterator for &'a ShareTable {
    type Item = &'a ShareEntry;
    type IntoIter = std::slice::Iter<'a, ShareEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(num: i64, den: i64) -> Fraction {
        Fraction::new(num, den).unwrap()
    }

    #[test]
    fn test_with_entry_appends_in_order() {
        let table = ShareTable::new()
            .with_entry(ShareEntry::new(HeirClass::Wife, frac(1, 8), 1))
            .unwrap()
            .with_entry(ShareEntry::new(HeirClass::Mother, frac(1, 6), 1))
            .unwrap();

        let heirs: Vec<_> = table.iter().map(|e| e.heir).collect();
        assert_eq!(heirs, vec![HeirClass::Wife, HeirClass::Mother]);
        assert_eq!(table.total().unwrap(), frac(7, 24));
    }

    #[test]
    fn test_with_entry_merges_existing_class() {
        // A fixed share topped up by a residuary portion stays a single row
        let fixed = ShareTable::new()
            .with_entry(ShareEntry::new(HeirClass::Father, frac(1, 6), 1))
            .unwrap();
        let merged = fixed
            .with_entry(ShareEntry::new(HeirClass::Father, frac(1, 3), 1))
            .unwrap();

        assert_eq!(merged.len(), 1);
        assert_eq!(merged.get(HeirClass::Father).unwrap().fraction, frac(1, 2));

        // The original table is untouched
        assert_eq!(fixed.get(HeirClass::Father).unwrap().fraction, frac(1, 6));
    }

    #[test]
    fn test_merge_keeps_first_count() {
        let table = ShareTable::new()
            .with_entry(ShareEntry::new(HeirClass::Sister, frac(1, 2), 2))
            .unwrap()
            .with_entry(ShareEntry::new(HeirClass::Sister, frac(1, 4), 5))
            .unwrap();

        let sister = table.get(HeirClass::Sister).unwrap();
        assert_eq!(sister.count, 2);
        assert_eq!(sister.fraction, frac(3, 4));
    }

    #[test]
    fn test_map_fractions() {
        let table = ShareTable::new()
            .with_entry(ShareEntry::new(HeirClass::Daughter, frac(2, 3), 2))
            .unwrap();
        let halved = table.map_fractions(|e| e.fraction.checked_mul(frac(1, 2))).unwrap();

        let daughters = halved.get(HeirClass::Daughter).unwrap();
        assert_eq!(daughters.fraction, frac(1, 3));
        assert_eq!(daughters.count, 2);
    }

    #[test]
    fn test_empty_table() {
        let table = ShareTable::new();
        assert!(table.is_empty());
        assert_eq!(table.total().unwrap(), Fraction::ZERO);
        assert!(!table.contains(HeirClass::Son));
    }
}
