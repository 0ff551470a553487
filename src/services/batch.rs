use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::{ArtifactError, GenerationFailure, RemoteError};
use crate::model::catalog::GenerationRequest;
use crate::model::report::{BatchReport, GenerationResult};
use crate::services::ai::{is_transient, GenerativeModel};
use crate::services::ai_types::ContentRequest;
use crate::services::store;

/// Waits between consecutive remote calls.
pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

pub struct BatchConfig<'a> {
    pub model: &'a str,
    pub output_dir: &'a Path,
    /// Applied after every entry, success or not.
    pub delay: Duration,
}

/// Generates every request in order. Per-entry failures are recorded and the
/// batch moves on; only a failure to create the output directory stops it.
pub fn generate_all(
    client: &dyn GenerativeModel,
    requests: &[GenerationRequest],
    cfg: &BatchConfig,
    pacer: &mut dyn Pacer,
) -> Result<BatchReport, ArtifactError> {
    store::ensure_dir(cfg.output_dir)?;
    info!(dir = %cfg.output_dir.display(), count = requests.len(), "generating icons");

    let mut report = BatchReport::default();

    for req in requests {
        info!(icon = req.name, "generating");

        let result = match generate_one(client, req, cfg) {
            Ok((path, sha256)) => {
                info!(icon = req.name, path = %path.display(), "saved");
                GenerationResult::saved(req.name, path, sha256)
            }
            Err(e) => {
                warn!(icon = req.name, error = %e, transient = worth_retrying(&e), "icon failed");
                GenerationResult::failed(req.name, &e)
            }
        };
        report.push(result);

        pacer.pause(cfg.delay);
    }

    info!(
        total = report.summary.total(),
        succeeded = report.summary.success_count,
        failed = report.summary.failure_count,
        "icon generation complete"
    );

    Ok(report)
}

/// Transport errors and 408/429/5xx usually clear up on a later run.
fn worth_retrying(failure: &GenerationFailure) -> bool {
    match failure {
        GenerationFailure::Remote(RemoteError::Status { status, .. }) => is_transient(*status),
        GenerationFailure::Remote(RemoteError::Http(_)) => true,
        _ => false,
    }
}

fn generate_one(
    client: &dyn GenerativeModel,
    req: &GenerationRequest,
    cfg: &BatchConfig,
) -> Result<(PathBuf, String), GenerationFailure> {
    let response = client.generate(&ContentRequest::image(cfg.model, req.prompt))?;

    let (_mime, data) = response
        .first_inline_data()
        .ok_or(GenerationFailure::NoImage)?;

    let path = cfg.output_dir.join(req.destination_filename);
    store::write_atomic(&path, data)?;

    Ok((path, store::sha256_hex(data)))
}
