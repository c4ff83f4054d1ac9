//! FileCategory value object - the purpose of a staged file

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StageError;

/// Purpose of a staged file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum FileCategory {
    /// Configuration file
    Config,
    /// Setup script sourced before the job runs
    Setup,
    /// Dependency (jar, archive, binary...)
    Dependencies,
}

impl FileCategory {
    pub const ALL: [FileCategory; 3] = [
        FileCategory::Config,
        FileCategory::Setup,
        FileCategory::Dependencies,
    ];

    /// Directory name under the entity directory
    pub fn directory_name(&self) -> &'static str {
        match self {
            FileCategory::Config => "config",
            FileCategory::Setup => "setup_file",
            FileCategory::Dependencies => "dependencies",
        }
    }

    /// Canonical upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Config => "CONFIG",
            FileCategory::Setup => "SETUP",
            FileCategory::Dependencies => "DEPENDENCIES",
        }
    }
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FileCategory {
    type Err = StageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CONFIG" => Ok(FileCategory::Config),
            "SETUP" => Ok(FileCategory::Setup),
            "DEPENDENCIES" => Ok(FileCategory::Dependencies),
            _ => Err(StageError::UnsupportedCategory {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for FileCategory {
    type Error = StageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
