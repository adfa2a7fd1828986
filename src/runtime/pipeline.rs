use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Settings;
use crate::error::Result;
use crate::library::{Totals, aggregate, load_manifest};
use crate::output::{assemble, emit};

/// Everything a finished run reports.
#[derive(Debug)]
pub struct RunSummary {
    pub output: PathBuf,
    pub totals: Totals,
}

/// One full pass: manifest, scan, build, sort, assemble, emit.
pub fn build_catalog(root: &Path, settings: &Settings) -> Result<RunSummary> {
    let manifest = root.join(&settings.catalog.manifest);
    info!(manifest = %manifest.display(), "loading sections");
    let descriptors = load_manifest(&manifest, settings.catalog.association)?;

    let catalog = aggregate(root, &descriptors, settings)?;
    let model = assemble(catalog.sections, settings.catalog.output);
    let output = emit(&model, root, &settings.catalog)?;

    Ok(RunSummary {
        output,
        totals: catalog.totals,
    })
}
