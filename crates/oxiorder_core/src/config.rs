use anyhow::{Result, anyhow};
use clap::Parser;
use log::{debug, info, trace};
use std::{env, path::PathBuf};

use crate::{constants::SETTINGS_FILE, settings::Settings};

#[derive(Debug, Clone, Parser)]
pub struct Config {
    /// Root directory of the project (defaults to git root)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Only check files whose path relative to the root contains this pattern
    #[arg(long)]
    pub entry_glob: Option<String>,

    /// Settings file (defaults to .oxiorder.json in the root, when present)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Don't treat package.json dependencies as known packages
    #[arg(long)]
    pub no_manifest: bool,

    #[clap(skip)]
    pub loaded_settings: Settings,
}

impl Config {
    /// Resolve the root directory and load settings.
    pub fn initialize(&mut self) -> Result<()> {
        let root = if let Some(r) = self.root.take() {
            debug!("Using provided root directory: {:?}", r);
            r.canonicalize().unwrap_or(r)
        } else {
            debug!("No root provided, searching for git root");
            find_git_root()?
        };
        info!("Using root directory: {}", root.display());

        let settings_path = match &self.settings {
            Some(path) => Some(path.clone()),
            None => {
                let default = root.join(SETTINGS_FILE);
                trace!("Looking for default settings at {}", default.display());
                default.is_file().then_some(default)
            }
        };
        if let Some(path) = settings_path {
            self.loaded_settings = Settings::load(&path)?;
        }

        self.root = Some(root);
        Ok(())
    }

    pub fn root(&self) -> Result<&PathBuf> {
        self.root.as_ref().ok_or_else(|| anyhow!("Config used before initialize()"))
    }
}

pub fn find_git_root() -> Result<PathBuf> {
    debug!("Searching for git root");
    let mut current_dir = env::current_dir()?;
    trace!("Starting search from: {:?}", current_dir);

    loop {
        let git_dir = current_dir.join(".git");
        trace!("Checking for .git at: {:?}", git_dir);
        if git_dir.exists() {
            debug!("Found git root at: {:?}", current_dir);
            return Ok(current_dir);
        }

        // Try to move up to parent directory
        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => {
                debug!("Could not find .git directory in any parent folder");
                return Err(anyhow!("Could not find .git directory in any parent folder"));
            }
        }
    }
}
