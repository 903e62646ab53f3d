//! Declared dependencies from the nearest `package.json`.

use anyhow::{Context, Result};
use dashmap::DashMap;
use log::{debug, trace, warn};
use serde::Deserialize;
use serde_json::Value;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::constants::MANIFEST_FILE;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Manifest {
    dependencies: Option<BTreeMap<String, Value>>,
    dev_dependencies: Option<BTreeMap<String, Value>>,
}

/// Names listed under `dependencies` and `devDependencies`, in that order.
pub fn read_manifest_packages(path: &Path) -> Result<Vec<String>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let manifest: Manifest = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let packages: Vec<String> = manifest
        .dependencies
        .into_iter()
        .chain(manifest.dev_dependencies)
        .flat_map(|deps| deps.into_keys())
        .collect();
    debug!("Found {} declared packages in {}", packages.len(), path.display());
    Ok(packages)
}

/// Per-directory cache of the nearest manifest's packages, shared across threads.
pub struct ManifestCache {
    root: PathBuf,
    by_dir: DashMap<PathBuf, Arc<Vec<String>>>,
}

impl ManifestCache {
    pub fn new(root: &Path) -> Self {
        Self { root: root.to_path_buf(), by_dir: DashMap::new() }
    }

    /// Packages of the closest `package.json` at or above `file`, stopping at the root.
    pub fn packages_for(&self, file: &Path) -> Arc<Vec<String>> {
        let start = file.parent().unwrap_or(&self.root);
        if let Some(cached) = self.by_dir.get(start) {
            trace!("Cache hit for manifest lookup: {}", start.display());
            return Arc::clone(cached.value());
        }

        let packages = Arc::new(self.lookup(start));
        self.by_dir.insert(start.to_path_buf(), Arc::clone(&packages));
        packages
    }

    fn lookup(&self, start: &Path) -> Vec<String> {
        let mut current = start;
        loop {
            let candidate = current.join(MANIFEST_FILE);
            if candidate.is_file() {
                trace!("Using manifest {}", candidate.display());
                return read_manifest_packages(&candidate).unwrap_or_else(|e| {
                    warn!("Ignoring manifest {}: {:#}", candidate.display(), e);
                    Vec::new()
                });
            }
            if current == self.root {
                return Vec::new();
            }
            match current.parent() {
                Some(parent) => current = parent,
                None => return Vec::new(),
            }
        }
    }

    pub fn len(&self) -> usize {
        self.by_dir.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_dir.is_empty()
    }
}
