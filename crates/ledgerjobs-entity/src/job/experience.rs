//! Experience bracket enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Experience brackets used to classify listings and filter searches.
///
/// Stored as plain text on listings; this enum canonicalises the values
/// accepted from clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    /// Newly qualified or part-qualified roles.
    Entry,
    /// Roles requiring a few years post-qualification.
    Mid,
    /// Senior and managerial roles.
    Senior,
    /// Director and partner-track roles.
    Director,
}

impl ExperienceLevel {
    /// Return the level as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Mid => "mid",
            Self::Senior => "senior",
            Self::Director => "director",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = ledgerjobs_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "entry" => Ok(Self::Entry),
            "mid" => Ok(Self::Mid),
            "senior" => Ok(Self::Senior),
            "director" => Ok(Self::Director),
            _ => Err(ledgerjobs_core::AppError::validation(format!(
                "Invalid experience level: '{s}'. Expected one of: entry, mid, senior, director"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "senior".parse::<ExperienceLevel>().unwrap(),
            ExperienceLevel::Senior
        );
        assert_eq!(
            "ENTRY".parse::<ExperienceLevel>().unwrap(),
            ExperienceLevel::Entry
        );
        assert!("principal".parse::<ExperienceLevel>().is_err());
    }
}
