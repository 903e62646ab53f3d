use oxc_span::Span;
use std::path::PathBuf;

use crate::{fix::Fix, source::SourceCode};

/// Syntactic shape of a top-level statement, as far as ordering cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Import,
    ExportNamed { has_declaration: bool },
    ExportAll,
    Other,
}

/// The `type` modifier of an import or export (`import type ...`, `export type ...`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImportExportKind {
    #[default]
    Value,
    Type,
}

impl ImportExportKind {
    pub fn is_type(self) -> bool {
        matches!(self, ImportExportKind::Type)
    }
}

/// A top-level statement flattened out of the host AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub kind: StatementKind,
    pub specifier_count: usize,
    pub import_export_kind: ImportExportKind,
    /// Literal module path for imports, re-exports and `export *`.
    pub source: Option<String>,
    pub span: Span,
}

impl Statement {
    pub fn other(span: Span) -> Self {
        Self {
            kind: StatementKind::Other,
            specifier_count: 0,
            import_export_kind: ImportExportKind::Value,
            source: None,
            span,
        }
    }
}

/// 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub rule: &'static str,
    pub message_id: &'static str,
    pub message: &'static str,
    pub span: Span,
    pub location: Location,
    pub fix: Option<Fix>,
}

impl Diagnostic {
    pub fn new(
        source: &dyn SourceCode,
        rule: &'static str,
        message_id: &'static str,
        message: &'static str,
        span: Span,
        fix: Option<Fix>,
    ) -> Self {
        Self { rule, message_id, message, span, location: source.location(span), fix }
    }

    pub fn is_fixable(&self) -> bool {
        self.fix.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct FileReport {
    /// Path relative to the project root
    pub path: String,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Root the report paths are relative to
    pub root: PathBuf,
    pub reports: Vec<FileReport>,
    pub files_analyzed: usize,
}

impl CheckResult {
    pub fn total_diagnostics(&self) -> usize {
        self.reports.iter().map(|r| r.diagnostics.len()).sum()
    }
}
