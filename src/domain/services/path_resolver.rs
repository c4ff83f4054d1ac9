//! Path Resolver
//!
//! Maps a remote resource reference to the place it is staged inside a job
//! workspace:
//!
//! ```text
//! {workspace_root}/{entity_dir}/{entity_id}/{category_dir}/{file_name}
//! ```
//!
//! Everything here is a pure string/path computation. Nothing touches the
//! file system; creating directories is the caller's job.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{EntityKind, FileCategory};
use crate::error::{StageError, StageResult};

/// Last non-empty `/`-separated token of `reference`.
///
/// No scheme handling: `fs://foo/bar/name` yields `name`, and a trailing
/// `/` is ignored.
pub fn last_segment(reference: &str) -> StageResult<&str> {
    reference
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .ok_or_else(|| StageError::InvalidReference {
            reference: reference.to_string(),
        })
}

/// Local path a file referenced by `source_reference` is staged at.
pub fn build_local_path(
    workspace_root: impl AsRef<Path>,
    entity_id: &str,
    source_reference: &str,
    category: FileCategory,
    kind: EntityKind,
) -> StageResult<PathBuf> {
    let file_name = last_segment(source_reference)?;
    if is_relative_component(file_name) {
        return Err(StageError::InvalidReference {
            reference: source_reference.to_string(),
        });
    }
    validate_entity_id(entity_id)?;

    Ok(workspace_root
        .as_ref()
        .join(kind.directory_name())
        .join(entity_id)
        .join(category.directory_name())
        .join(file_name))
}

fn validate_entity_id(entity_id: &str) -> StageResult<()> {
    if entity_id.is_empty() || entity_id.contains('/') || is_relative_component(entity_id) {
        return Err(StageError::InvalidEntityId {
            entity_id: entity_id.to_string(),
        });
    }
    Ok(())
}

// "." and ".." would move the staged file out of its slot
fn is_relative_component(segment: &str) -> bool {
    segment == "." || segment == ".."
}

/// Everything needed to place one staged file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFileRequest {
    pub workspace_root: PathBuf,
    pub entity_id: String,
    pub source_reference: String,
    pub category: FileCategory,
    pub kind: EntityKind,
}

impl LocalFileRequest {
    pub fn new(
        workspace_root: impl Into<PathBuf>,
        entity_id: impl Into<String>,
        source_reference: impl Into<String>,
        category: FileCategory,
        kind: EntityKind,
    ) -> Self {
        Self {
            workspace_root: workspace_root.into(),
            entity_id: entity_id.into(),
            source_reference: source_reference.into(),
            category,
            kind,
        }
    }

    /// File name the staged copy will have
    pub fn file_name(&self) -> StageResult<&str> {
        last_segment(&self.source_reference)
    }

    pub fn resolve(&self) -> StageResult<PathBuf> {
        build_local_path(
            &self.workspace_root,
            &self.entity_id,
            &self.source_reference,
            self.category,
            self.kind,
        )
    }
}
