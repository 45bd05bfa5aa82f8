use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{CRITICAL_THRESHOLD, MAJOR_THRESHOLD, MINOR_THRESHOLD, MODERATE_THRESHOLD};

/// Milestone significance tier. Ordered `Trivial < Minor < Moderate < Major < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    Trivial,
    Minor,
    Moderate,
    Major,
    Critical,
}

impl Classification {
    /// Step function over the milestone score. Lower bounds are inclusive.
    pub fn from_score(score: u8) -> Self {
        if score >= CRITICAL_THRESHOLD {
            Self::Critical
        } else if score >= MAJOR_THRESHOLD {
            Self::Major
        } else if score >= MODERATE_THRESHOLD {
            Self::Moderate
        } else if score >= MINOR_THRESHOLD {
            Self::Minor
        } else {
            Self::Trivial
        }
    }

    /// Whether this tier warrants any restore point at all.
    pub fn requires_backup(self) -> bool {
        self >= Self::Moderate
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trivial => "TRIVIAL",
            Self::Minor => "MINOR",
            Self::Moderate => "MODERATE",
            Self::Major => "MAJOR",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TRIVIAL" => Ok(Self::Trivial),
            "MINOR" => Ok(Self::Minor),
            "MODERATE" => Ok(Self::Moderate),
            "MAJOR" => Ok(Self::Major),
            "CRITICAL" => Ok(Self::Critical),
            other => Err(format!("unknown classification: {other}")),
        }
    }
}

/// Three-level label used by feasibility, approach risk, and uncertainty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LevelAssessment {
    Low,
    Moderate,
    High,
}

impl LevelAssessment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for LevelAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LevelAssessment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LOW" => Ok(Self::Low),
            "MODERATE" => Ok(Self::Moderate),
            "HIGH" => Ok(Self::High),
            other => Err(format!("unknown level: {other}")),
        }
    }
}
