//! Shared machinery for the oxiorder rules.
//!
//! This crate turns JavaScript/TypeScript files into the flat statement view
//! the ordering rules work on, and provides everything around them:
//! - Parsing with oxc into a [`SourceCode`] (statements, comments, token probes)
//! - Classifying statements into ordered [`Category`] ranks
//! - Extending statement ranges over attached comments and line endings
//! - Fixes, and applying them until the output is stable
//! - Settings, `package.json` dependencies, file collection and reporting

mod category;
mod checker;
mod collector;
mod config;
mod constants;
mod fix;
mod manifest;
mod parser;
mod range;
mod reporter;
mod rule;
mod settings;
mod source;
mod tokens;
mod types;

// Re-export public API
pub use category::{Category, classify, import_source};
pub use checker::{check_source, run_check};
pub use collector::{CollectorConfig, collect_files};
pub use config::{Config, find_git_root};
pub use constants::{JS_TS_EXTENSIONS, MANIFEST_FILE, SETTINGS_FILE, SKIPPED_DIRS};
pub use fix::{DEFAULT_MAX_PASSES, Edit, Fix, FixOutcome, StableFix, apply_fixes, fix_until_stable};
pub use manifest::{ManifestCache, read_manifest_packages};
pub use parser::{parse_file, parse_source, source_type_for};
pub use range::{ExtendedRange, extend_range};
pub use reporter::{print_diagnostics_tree, print_no_issues_message};
pub use rule::{PackageSet, Rule};
pub use settings::{BUILTINS_KEY, PACKAGES_KEY, Settings};
pub use source::{LineIndex, ParsedSource, SourceCode};
pub use tokens::TokenKind;
pub use types::{
    CheckResult, Diagnostic, FileReport, ImportExportKind, Location, Position, Statement,
    StatementKind,
};
