use std::fmt;

use serde::{Deserialize, Serialize};

use super::Classification;

/// Kind of backup taken around a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BackupType {
    None,
    Incremental,
    Full,
}

impl fmt::Display for BackupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "NONE",
            Self::Incremental => "INCREMENTAL",
            Self::Full => "FULL",
        })
    }
}

/// Restore-point plan derived from the classification alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestorePointStrategy {
    pub pre_mission: bool,
    pub post_mission: bool,
    pub backup_type: BackupType,
    pub backups: u8,
    pub description: String,
}

impl RestorePointStrategy {
    fn row(
        pre_mission: bool,
        post_mission: bool,
        backup_type: BackupType,
        backups: u8,
        description: &str,
    ) -> Self {
        Self {
            pre_mission,
            post_mission,
            backup_type,
            backups,
            description: description.to_string(),
        }
    }

    /// Fixed lookup table, one row per classification.
    pub fn for_classification(classification: Classification) -> Self {
        match classification {
            Classification::Critical => Self::row(
                true,
                true,
                BackupType::Full,
                2,
                "Full restore points before and after mission (critical milestone)",
            ),
            Classification::Major => Self::row(
                true,
                true,
                BackupType::Full,
                2,
                "Full restore points before and after mission",
            ),
            Classification::Moderate => Self::row(
                false,
                true,
                BackupType::Incremental,
                1,
                "Incremental restore point after mission",
            ),
            Classification::Minor => Self::row(
                false,
                false,
                BackupType::None,
                0,
                "No restore point needed for minor change",
            ),
            Classification::Trivial => Self::row(
                false,
                false,
                BackupType::None,
                0,
                "No restore point needed for trivial change",
            ),
        }
    }

    /// Look up by classification label. Unrecognized labels get the MODERATE row.
    pub fn for_label(label: &str) -> Self {
        let classification = label.parse().unwrap_or(Classification::Moderate);
        Self::for_classification(classification)
    }
}
