//! The closed set of protected-attribute categories.
//!
//! Variant declaration order is significant: it is the order categories are
//! evaluated in, and therefore the tie-break when a text matches several of
//! them. `Ord` is derived so sorted containers follow the same order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtectedCategory {
    RaceEthnicity,
    Gender,
    SexualOrientation,
    Religion,
    Disability,
    Age,
    Nationality,
}

impl ProtectedCategory {
    /// All categories in declaration order.
    pub const ALL: [ProtectedCategory; 7] = [
        ProtectedCategory::RaceEthnicity,
        ProtectedCategory::Gender,
        ProtectedCategory::SexualOrientation,
        ProtectedCategory::Religion,
        ProtectedCategory::Disability,
        ProtectedCategory::Age,
        ProtectedCategory::Nationality,
    ];

    /// The snake_case name used in configuration files and output columns.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtectedCategory::RaceEthnicity => "race_ethnicity",
            ProtectedCategory::Gender => "gender",
            ProtectedCategory::SexualOrientation => "sexual_orientation",
            ProtectedCategory::Religion => "religion",
            ProtectedCategory::Disability => "disability",
            ProtectedCategory::Age => "age",
            ProtectedCategory::Nationality => "nationality",
        }
    }
}

impl fmt::Display for ProtectedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Unknown category '{}'; expected one of: race_ethnicity, gender, sexual_orientation, \
            religion, disability, age, nationality.",
            self.0
        )
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for ProtectedCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ProtectedCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}
