use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::ArtifactError;
use crate::model::catalog::GenerationRequest;

/// Catalog entries whose file is not present in `output_dir`, in catalog
/// order. A missing directory means everything is missing.
pub fn plan_missing(
    catalog: &[GenerationRequest],
    output_dir: &Path,
) -> Result<Vec<GenerationRequest>, ArtifactError> {
    let existing = existing_files(output_dir)?;

    Ok(catalog
        .iter()
        .filter(|r| !existing.contains(r.destination_filename))
        .copied()
        .collect())
}

fn existing_files(dir: &Path) -> Result<HashSet<String>, ArtifactError> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashSet::new()),
        Err(e) => return Err(ArtifactError::io(dir, e)),
    };

    let mut names = HashSet::new();
    for entry in entries.flatten() {
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        // Empty files are leftovers of an interrupted run.
        let non_empty = entry.metadata().map(|m| m.len() > 0).unwrap_or(false);
        if is_file && non_empty {
            if let Some(name) = entry.file_name().to_str() {
                names.insert(name.to_string());
            }
        }
    }
    Ok(names)
}
