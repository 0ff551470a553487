use std::path::PathBuf;

use serde::Serialize;
use tracing::{error, info};

use crate::config::Settings;
use crate::error::RevampError;
use crate::model::catalog::{GenerationRequest, CATALOG_VERSION};
use crate::model::report::BatchReport;
use crate::services::ai::GenerativeModel;
use crate::services::batch::{self, BatchConfig, Pacer};
use crate::services::{advisory, emitter, missing};

#[derive(Debug, Serialize)]
pub struct PipelineReport {
    /// Set when a suggestions file was written.
    pub advisory_saved: Option<PathBuf>,
    pub icons_dir: PathBuf,
    pub batch: BatchReport,
    pub component_path: PathBuf,
}

/// Advisory (best effort), then every catalog icon, then the component.
pub fn run(
    client: &dyn GenerativeModel,
    settings: &Settings,
    catalog: &[GenerationRequest],
    pacer: &mut dyn Pacer,
) -> Result<PipelineReport, RevampError> {
    info!(catalog_version = CATALOG_VERSION, icons = catalog.len(), "starting UI revamp");
    let advisory_saved = run_advisory(client, settings);

    let icons_dir = settings.icons_dir();
    let cfg = BatchConfig {
        model: &settings.image_model,
        output_dir: &icons_dir,
        delay: settings.item_delay,
    };
    let batch = batch::generate_all(client, catalog, &cfg, pacer)?;

    let component_path = settings.component_path();
    emitter::emit_component(catalog, &component_path)?;

    Ok(PipelineReport {
        advisory_saved,
        icons_dir,
        batch,
        component_path,
    })
}

/// Only the catalog entries with no file in the icons directory.
pub fn run_missing(
    client: &dyn GenerativeModel,
    settings: &Settings,
    catalog: &[GenerationRequest],
    pacer: &mut dyn Pacer,
) -> Result<BatchReport, RevampError> {
    let icons_dir = settings.icons_dir();
    let todo = missing::plan_missing(catalog, &icons_dir)?;

    if todo.is_empty() {
        info!(dir = %icons_dir.display(), "all icons present, nothing to generate");
        return Ok(BatchReport::default());
    }
    info!(missing = todo.len(), of = catalog.len(), "generating missing icons");

    let cfg = BatchConfig {
        model: &settings.image_model,
        output_dir: &icons_dir,
        delay: settings.item_delay,
    };
    Ok(batch::generate_all(client, &todo, &cfg, pacer)?)
}

fn run_advisory(client: &dyn GenerativeModel, settings: &Settings) -> Option<PathBuf> {
    let source = settings.source_path();
    let report = match advisory::request_suggestions(client, &settings.text_model, &source) {
        Ok(r) => r,
        Err(e) => {
            error!(error = %e, "error getting UI suggestions");
            return None;
        }
    };

    let path = settings.report_path();
    match advisory::save_report(&report, &path) {
        Ok(()) => {
            info!(path = %path.display(), "saved suggestions");
            Some(path)
        }
        Err(e) => {
            error!(error = %e, "failed to save UI suggestions");
            None
        }
    }
}
