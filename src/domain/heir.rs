// ============================================================================
// Heir Domain Model
// ============================================================================

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// Closed set of heir classes recognised by the engine.
///
/// Full siblings only; grandparents, grandchildren and half-siblings are not
/// modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HeirClass {
    Wife,
    Husband,
    Father,
    Mother,
    Son,
    Daughter,
    Brother,
    Sister,
}

impl HeirClass {
    /// Every heir class, in declaration order.
    pub const ALL: [HeirClass; 8] = [
        HeirClass::Wife,
        HeirClass::Husband,
        HeirClass::Father,
        HeirClass::Mother,
        HeirClass::Son,
        HeirClass::Daughter,
        HeirClass::Brother,
        HeirClass::Sister,
    ];

    /// Stable key used by presentation layers for label lookup.
    pub const fn key(self) -> &'static str {
        match self {
            HeirClass::Wife => "wife",
            HeirClass::Husband => "husband",
            HeirClass::Father => "father",
            HeirClass::Mother => "mother",
            HeirClass::Son => "son",
            HeirClass::Daughter => "daughter",
            HeirClass::Brother => "brother",
            HeirClass::Sister => "sister",
        }
    }

    /// Spouses never take part in Radd.
    pub const fn is_spouse(self) -> bool {
        matches!(self, HeirClass::Wife | HeirClass::Husband)
    }

    /// The surviving spouse's class for a deceased of the given gender.
    pub const fn spouse_of(deceased: Gender) -> HeirClass {
        match deceased {
            Gender::Male => HeirClass::Wife,
            Gender::Female => HeirClass::Husband,
        }
    }
}

impl fmt::Display for HeirClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when parsing an unknown heir key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHeirClass(pub String);

impl fmt::Display for UnknownHeirClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown heir class: {:?}", self.0)
    }
}

impl std::error::Error for UnknownHeirClass {}

impl FromStr for HeirClass {
    type Err = UnknownHeirClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        HeirClass::ALL
            .iter()
            .copied()
            .find(|heir| heir.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| UnknownHeirClass(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for heir in HeirClass::ALL {
            assert_eq!(heir.key().parse::<HeirClass>().unwrap(), heir);
        }
        assert_eq!("Daughter".parse::<HeirClass>().unwrap(), HeirClass::Daughter);
    }

    #[test]
    fn test_unknown_key() {
        let err = "grandfather".parse::<HeirClass>().unwrap_err();
        assert_eq!(err.to_string(), "unknown heir class: \"grandfather\"");
    }

    #[test]
    fn test_spouse_classes() {
        assert!(HeirClass::Wife.is_spouse());
        assert!(HeirClass::Husband.is_spouse());
        assert!(!HeirClass::Mother.is_spouse());
        assert_eq!(HeirClass::spouse_of(Gender::Male), HeirClass::Wife);
        assert_eq!(HeirClass::spouse_of(Gender::Female), HeirClass::Husband);
    }
}
