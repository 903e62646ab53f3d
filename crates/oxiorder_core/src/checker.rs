use anyhow::{Result, anyhow};
use log::{debug, info, trace, warn};
use rayon::prelude::*;
use std::{path::Path, thread};

use crate::{
    collector::{CollectorConfig, collect_files},
    config::Config,
    manifest::ManifestCache,
    parser::parse_file,
    rule::{PackageSet, Rule},
    source::SourceCode,
    types::{CheckResult, Diagnostic, FileReport},
};

/// Run `rules` over every collected file under the configured root.
pub fn run_check(mut cfg: Config, rules: &[&dyn Rule]) -> Result<CheckResult> {
    info!("Starting check with {} rules", rules.len());
    cfg.initialize()?;
    let root = cfg.root()?.clone();

    debug!("Collecting files with glob: {:?}", cfg.entry_glob);
    let collector = CollectorConfig { root: root.clone(), entry_glob: cfg.entry_glob.clone() };
    let files = collect_files(&collector)?;
    if files.is_empty() {
        warn!("No source files found under {}", root.display());
        return Err(anyhow!("No source files found under {}", root.display()));
    }
    info!("Found {} source files", files.len());

    let known = cfg.loaded_settings.known_packages();
    let manifests = (!cfg.no_manifest).then(|| ManifestCache::new(&root));

    info!("Processing {} files in parallel", files.len());
    let checked: Vec<Option<FileReport>> = files
        .par_iter()
        .map(|file| {
            debug!("Thread {:?} processing: {}", thread::current().id(), file.display());

            let source = match parse_file(file) {
                Ok(source) => source,
                Err(e) => {
                    warn!("Skipping {}: {:#}", file.display(), e);
                    return None;
                }
            };

            let packages = match &manifests {
                Some(cache) => {
                    let mut packages = known.clone();
                    packages.extend(cache.packages_for(file).iter().cloned());
                    packages
                }
                None => known.clone(),
            };

            let diagnostics = check_source(&source, rules, &packages);
            trace!("{} diagnostics in {}", diagnostics.len(), file.display());
            Some(FileReport { path: relative_path(&root, file), diagnostics })
        })
        .collect();

    let files_analyzed = checked.iter().filter(|r| r.is_some()).count();
    let mut reports: Vec<FileReport> =
        checked.into_iter().flatten().filter(|r| !r.diagnostics.is_empty()).collect();
    reports.sort_by(|a, b| a.path.cmp(&b.path));

    if let Some(cache) = &manifests {
        debug!("Manifest cache holds {} directories", cache.len());
    }
    info!("Analyzed {} files, {} with issues", files_analyzed, reports.len());

    Ok(CheckResult { root, reports, files_analyzed })
}

/// All diagnostics of `rules` for one file, in document order.
pub fn check_source(
    source: &dyn SourceCode,
    rules: &[&dyn Rule],
    packages: &PackageSet,
) -> Vec<Diagnostic> {
    let mut diagnostics: Vec<Diagnostic> = rules
        .iter()
        .flat_map(|rule| {
            trace!("Running rule {}", rule.name());
            rule.check(source, packages)
        })
        .collect();
    diagnostics.sort_by_key(|d| (d.span.start, d.span.end));
    diagnostics
}

fn relative_path(root: &Path, file: &Path) -> String {
    file.strip_prefix(root).unwrap_or(file).to_string_lossy().replace('\\', "/")
}
