use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GenerationResult {
    pub name: String,
    pub succeeded: bool,
    pub saved_path: Option<PathBuf>,
    pub error: Option<String>,
    /// Hex SHA-256 of the bytes written.
    pub sha256: Option<String>,
}

impl GenerationResult {
    pub fn saved(name: &str, path: PathBuf, sha256: String) -> Self {
        GenerationResult {
            name: name.to_string(),
            succeeded: true,
            saved_path: Some(path),
            error: None,
            sha256: Some(sha256),
        }
    }

    pub fn failed(name: &str, error: impl ToString) -> Self {
        GenerationResult {
            name: name.to_string(),
            succeeded: false,
            saved_path: None,
            error: Some(error.to_string()),
            sha256: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct BatchSummary {
    pub success_count: usize,
    pub failure_count: usize,
}

impl BatchSummary {
    pub fn record(&mut self, result: &GenerationResult) {
        if result.succeeded {
            self.success_count += 1;
        } else {
            self.failure_count += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.success_count + self.failure_count
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub summary: BatchSummary,
    pub items: Vec<GenerationResult>,
}

impl BatchReport {
    pub fn push(&mut self, result: GenerationResult) {
        self.summary.record(&result);
        self.items.push(result);
    }

    pub fn failed(&self) -> impl Iterator<Item = &GenerationResult> {
        self.items.iter().filter(|r| !r.succeeded)
    }
}
