use anyhow::{Context, Result, anyhow};
use log::{debug, trace};
use oxc_allocator::Allocator;
use oxc_ast::ast::{ImportOrExportKind, Program, Statement as AstStatement};
use oxc_parser::{Parser as OxcParser, ParserReturn};
use oxc_span::{GetSpan, SourceType, Span};
use std::{fs, path::Path};

use crate::{
    source::ParsedSource,
    types::{ImportExportKind, Statement, StatementKind},
};

pub fn parse_file(file: &Path) -> Result<ParsedSource> {
    trace!("Parsing file: {}", file.display());
    let src =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    parse_source(src, source_type_for(file))
        .with_context(|| format!("Failed to parse {}", file.display()))
}

pub fn parse_source(text: String, source_type: SourceType) -> Result<ParsedSource> {
    let allocator = Allocator::default();
    let ParserReturn { program, errors, panicked, .. } =
        OxcParser::new(&allocator, &text, source_type).parse();

    if panicked || !errors.is_empty() {
        let first = errors.first().map(|e| e.to_string()).unwrap_or_default();
        return Err(anyhow!("{} syntax error(s): {}", errors.len().max(1), first));
    }

    let statements = collect_statements(&program);
    let mut comments: Vec<Span> = program.comments.iter().map(|c| c.span).collect();
    if let Some(hashbang) = &program.hashbang {
        comments.push(hashbang.span);
    }
    debug!("Parsed {} top-level statements and {} comments", statements.len(), comments.len());

    Ok(ParsedSource::new(text, statements, comments))
}

fn collect_statements(program: &Program<'_>) -> Vec<Statement> {
    // Directives like 'use strict' are ordinary statements as far as ordering goes
    let mut statements: Vec<Statement> =
        program.directives.iter().map(|d| Statement::other(d.span)).collect();

    for stmt in &program.body {
        let statement = match stmt {
            AstStatement::ImportDeclaration(decl) => Statement {
                kind: StatementKind::Import,
                specifier_count: decl.specifiers.as_ref().map_or(0, |s| s.len()),
                import_export_kind: kind_of(decl.import_kind),
                source: Some(decl.source.value.to_string()),
                span: decl.span,
            },
            AstStatement::ExportNamedDeclaration(decl) => Statement {
                kind: StatementKind::ExportNamed { has_declaration: decl.declaration.is_some() },
                specifier_count: decl.specifiers.len(),
                import_export_kind: kind_of(decl.export_kind),
                source: decl.source.as_ref().map(|s| s.value.to_string()),
                span: decl.span,
            },
            AstStatement::ExportAllDeclaration(decl) => Statement {
                kind: StatementKind::ExportAll,
                specifier_count: 0,
                import_export_kind: kind_of(decl.export_kind),
                source: Some(decl.source.value.to_string()),
                span: decl.span,
            },
            other => Statement::other(other.span()),
        };
        trace!("Statement {:?} at {}..{}", statement.kind, statement.span.start, statement.span.end);
        statements.push(statement);
    }

    statements.sort_by_key(|s| s.span.start);
    statements
}

fn kind_of(kind: ImportOrExportKind) -> ImportExportKind {
    if kind.is_type() { ImportExportKind::Type } else { ImportExportKind::Value }
}

pub fn source_type_for(path: &Path) -> SourceType {
    let ext = path.extension().and_then(|e| e.to_str());

    // Everything but explicit CommonJS is treated as an ES module
    SourceType::default()
        .with_jsx(matches!(ext, Some("tsx") | Some("jsx")))
        .with_typescript(matches!(ext, Some("ts") | Some("tsx") | Some("mts") | Some("cts")))
        .with_module(!matches!(ext, Some("cjs") | Some("cts")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceCode;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn parse_ts(text: &str) -> ParsedSource {
        parse_source(text.to_string(), source_type_for(Path::new("input.ts"))).unwrap()
    }

    fn create_test_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let file_path = dir.join(name);
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    #[test]
    fn test_side_effect_import_has_no_specifiers() {
        let src = parse_ts("import './polyfills';");
        let stmt = &src.statements()[0];
        assert_eq!(stmt.kind, StatementKind::Import);
        assert_eq!(stmt.specifier_count, 0);
        assert_eq!(stmt.source.as_deref(), Some("./polyfills"));
    }

    #[test]
    fn test_type_import() {
        let src = parse_ts("import type { Foo, Bar } from './types';");
        let stmt = &src.statements()[0];
        assert_eq!(stmt.specifier_count, 2);
        assert!(stmt.import_export_kind.is_type());
    }

    #[test]
    fn test_export_shapes() {
        let src = parse_ts(
            "export { a } from 'a';\nexport * from 'b';\nexport const c = 1;\nexport { c as d };\n",
        );
        let kinds: Vec<_> = src.statements().iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                StatementKind::ExportNamed { has_declaration: false },
                StatementKind::ExportAll,
                StatementKind::ExportNamed { has_declaration: true },
                StatementKind::ExportNamed { has_declaration: false },
            ]
        );
        assert_eq!(src.statements()[0].source.as_deref(), Some("a"));
        assert_eq!(src.statements()[1].source.as_deref(), Some("b"));
        assert_eq!(src.statements()[3].source, None);
    }

    #[test]
    fn test_directives_are_statements() {
        let src = parse_ts("'use strict';\nimport 'a';\n");
        assert_eq!(src.statements().len(), 2);
        assert_eq!(src.statements()[0].kind, StatementKind::Other);
        assert_eq!(src.statements()[0].span.start, 0);
        assert!(src.slice(src.statements()[0].span).starts_with("'use strict'"));
    }

    #[test]
    fn test_comments_and_hashbang_collected() {
        let src = parse_ts("#!/usr/bin/env node\n// a\n/* b */ 1;\n");
        assert_eq!(src.comments().len(), 3);
        assert_eq!(src.comments()[0].start, 0);
        assert_eq!(src.slice(src.comments()[1]), "// a");
        assert_eq!(src.slice(src.comments()[2]), "/* b */");
    }

    #[test]
    fn test_syntax_error_is_rejected() {
        let result = parse_source("import { from 'a';".to_string(), SourceType::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = create_test_file(temp_dir.path(), "test.tsx", "import React from 'react';\n");
        let src = parse_file(&file).unwrap();
        assert_eq!(src.statements().len(), 1);
        assert_eq!(src.statements()[0].source.as_deref(), Some("react"));
    }

    #[test]
    fn test_parse_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        assert!(parse_file(&temp_dir.path().join("missing.ts")).is_err());
    }

    #[test]
    fn test_source_type_for_extensions() {
        assert!(source_type_for(Path::new("a.ts")).is_typescript());
        assert!(source_type_for(Path::new("a.tsx")).is_jsx());
        assert!(source_type_for(Path::new("a.mjs")).is_module());
        assert!(!source_type_for(Path::new("a.cjs")).is_module());
    }
}
