//! Closed enumerations for the proficiency and importance vocabularies.
//!
//! The datasets carry these as words ("Beginner", "High", ...). Parsing is
//! strict: any word outside the closed set is a data-integrity error, never
//! a silent default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown proficiency level '{0}' (expected Beginner, Intermediate or Expert)")]
pub struct UnknownProficiency(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown importance level '{0}' (expected Low, Medium or High)")]
pub struct UnknownImportance(pub String);

/// Ordinal proficiency level: 1=Beginner, 2=Intermediate, 3=Expert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Expert,
}

impl Proficiency {
    pub fn weight(self) -> i32 {
        match self {
            Proficiency::Beginner => 1,
            Proficiency::Intermediate => 2,
            Proficiency::Expert => 3,
        }
    }
}

impl FromStr for Proficiency {
    type Err = UnknownProficiency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Beginner" => Ok(Proficiency::Beginner),
            "Intermediate" => Ok(Proficiency::Intermediate),
            "Expert" => Ok(Proficiency::Expert),
            other => Err(UnknownProficiency(other.to_string())),
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Proficiency::Beginner => "Beginner",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Expert => "Expert",
        };
        f.write_str(word)
    }
}

/// Ordinal forecast relevance of a skill: 1=Low, 2=Medium, 3=High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Importance {
    Low,
    Medium,
    High,
}

impl Importance {
    pub fn weight(self) -> i32 {
        match self {
            Importance::Low => 1,
            Importance::Medium => 2,
            Importance::High => 3,
        }
    }
}

impl FromStr for Importance {
    type Err = UnknownImportance;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Low" => Ok(Importance::Low),
            "Medium" => Ok(Importance::Medium),
            "High" => Ok(Importance::High),
            other => Err(UnknownImportance(other.to_string())),
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Importance::Low => "Low",
            Importance::Medium => "Medium",
            Importance::High => "High",
        };
        f.write_str(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proficiency_words_map_to_ordinals() {
        assert_eq!("Beginner".parse::<Proficiency>().unwrap().weight(), 1);
        assert_eq!("Intermediate".parse::<Proficiency>().unwrap().weight(), 2);
        assert_eq!("Expert".parse::<Proficiency>().unwrap().weight(), 3);
    }

    #[test]
    fn test_importance_words_map_to_ordinals() {
        assert_eq!("Low".parse::<Importance>().unwrap().weight(), 1);
        assert_eq!("Medium".parse::<Importance>().unwrap().weight(), 2);
        assert_eq!("High".parse::<Importance>().unwrap().weight(), 3);
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        assert_eq!(" Expert ".parse::<Proficiency>(), Ok(Proficiency::Expert));
        assert_eq!(" High".parse::<Importance>(), Ok(Importance::High));
    }

    #[test]
    fn test_unknown_proficiency_word_fails_loudly() {
        let err = "Wizard".parse::<Proficiency>().unwrap_err();
        assert_eq!(err, UnknownProficiency("Wizard".to_string()));
    }

    #[test]
    fn test_unknown_importance_word_fails_loudly() {
        let err = "Critical".parse::<Importance>().unwrap_err();
        assert_eq!(err, UnknownImportance("Critical".to_string()));
    }

    #[test]
    fn test_case_is_not_normalized() {
        // "beginner" is not in the closed set; defaulting it silently would
        // hide corrupt reference data.
        assert!("beginner".parse::<Proficiency>().is_err());
    }
}
