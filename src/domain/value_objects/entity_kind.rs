//! EntityKind value object - which entity owns a staged file

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StageError;

/// Kind of entity a staged file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum EntityKind {
    /// An application installed for the job
    Application,
    /// The command the job runs
    Command,
    /// The cluster the job runs on
    Cluster,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Application,
        EntityKind::Command,
        EntityKind::Cluster,
    ];

    /// Directory name under the workspace root.
    ///
    /// Only applications are pluralized. Consumers of staged files read
    /// these exact names, so they must not be normalized.
    pub fn directory_name(&self) -> &'static str {
        match self {
            EntityKind::Application => "applications",
            EntityKind::Command => "command",
            EntityKind::Cluster => "cluster",
        }
    }

    /// Canonical upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Application => "APPLICATION",
            EntityKind::Command => "COMMAND",
            EntityKind::Cluster => "CLUSTER",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = StageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "APPLICATION" => Ok(EntityKind::Application),
            "COMMAND" => Ok(EntityKind::Command),
            "CLUSTER" => Ok(EntityKind::Cluster),
            _ => Err(StageError::UnsupportedKind {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for EntityKind {
    type Error = StageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
