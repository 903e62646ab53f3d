use anyhow::Result;
use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::PathBuf;

use crate::constants::{JS_TS_EXTENSIONS, SKIPPED_DIRS};

pub struct CollectorConfig {
    pub root: PathBuf,
    pub entry_glob: Option<String>,
}

/// All JS/TS files under the root, honouring `.gitignore`, sorted by path.
pub fn collect_files(cfg: &CollectorConfig) -> Result<Vec<PathBuf>> {
    debug!("Collecting source files");
    let mut files: Vec<PathBuf> = Vec::new();
    let root = &cfg.root;
    debug!("Walking directory tree from root: {}", root.display());
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .ignore(true)
        .git_ignore(true)
        .filter_entry(|entry| {
            let name = entry.file_name().to_string_lossy();
            !SKIPPED_DIRS.contains(&name.as_ref())
        })
        .build();

    for res in walker {
        let dent = res?;
        let p = dent.path();
        if !p.is_file() {
            continue;
        }

        let Some(ext) = p.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !JS_TS_EXTENSIONS.contains(&ext) {
            continue;
        }

        // If entry_glob is set, the relative path from root must contain the pattern
        if let Some(gl) = &cfg.entry_glob {
            let rel_str = p.strip_prefix(root).unwrap_or(p).to_string_lossy();
            if !rel_str.contains(gl.as_str()) {
                trace!("Skipping file not matching '{}': {}", gl, rel_str);
                continue;
            }
        }

        trace!("Found source file: {}", p.display());
        files.push(p.to_path_buf());
    }

    files.sort();
    debug!("Collected {} source files", files.len());
    Ok(files)
}
