//! Text edits attached to diagnostics, and how they combine.
//!
//! A fix is a list of edits that must be applied together. When several fixes
//! are applied in one pass, each is first merged into a single replacement;
//! a fix whose replacement starts at or before the end of the previously
//! applied one is left for the next pass.
//!
//! [`fix_until_stable`] settles rules one at a time, in the order given: a
//! pass only applies fixes from the first rule that still has one to apply.
//! Layout fixes listed last therefore never run against statements that are
//! about to move.

use anyhow::Result;
use log::{debug, trace};
use oxc_span::{SourceType, Span};

use crate::{
    parser::parse_source,
    rule::{PackageSet, Rule},
    source::SourceCode,
    types::Diagnostic,
};

/// Passes made by [`fix_until_stable`] unless told otherwise.
pub const DEFAULT_MAX_PASSES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub span: Span,
    pub text: String,
}

impl Edit {
    pub fn remove(span: Span) -> Self {
        Self { span, text: String::new() }
    }

    pub fn insert_at(offset: u32, text: impl Into<String>) -> Self {
        Self { span: Span::new(offset, offset), text: text.into() }
    }

    pub fn replace(span: Span, text: impl Into<String>) -> Self {
        Self { span, text: text.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fix {
    pub edits: Vec<Edit>,
}

impl Fix {
    pub fn new(edits: Vec<Edit>) -> Self {
        Self { edits }
    }

    /// Cut `range` out and paste its text at `insert_at`.
    pub fn relocate(source: &dyn SourceCode, range: Span, insert_at: u32) -> Self {
        let moved = source.slice(range).to_string();
        Self::new(vec![Edit::remove(range), Edit::insert_at(insert_at, moved)])
    }

    /// Collapse all edits into one replacement over the original `text`.
    ///
    /// Returns `None` when the edits overlap each other.
    pub fn merged(&self, text: &str) -> Option<Edit> {
        let mut edits: Vec<&Edit> = self.edits.iter().collect();
        edits.sort_by_key(|e| (e.span.start, e.span.end));
        let first = edits.first()?;
        let start = first.span.start;
        let end = edits.iter().map(|e| e.span.end).max().unwrap_or(start);

        let mut replacement = String::new();
        let mut cursor = start;
        for edit in edits {
            if edit.span.start < cursor {
                return None;
            }
            replacement.push_str(&text[cursor as usize..edit.span.start as usize]);
            replacement.push_str(&edit.text);
            cursor = edit.span.end;
        }
        replacement.push_str(&text[cursor as usize..end as usize]);
        Some(Edit::replace(Span::new(start, end), replacement))
    }
}

#[derive(Debug, Clone)]
pub struct FixOutcome {
    pub output: String,
    pub applied: usize,
    pub skipped: usize,
}

/// Apply every non-conflicting fix carried by `diagnostics` to `text`.
pub fn apply_fixes(text: &str, diagnostics: &[Diagnostic]) -> FixOutcome {
    let mut merged: Vec<Edit> =
        diagnostics.iter().filter_map(|d| d.fix.as_ref()).filter_map(|f| f.merged(text)).collect();
    let invalid = diagnostics.iter().filter(|d| d.fix.is_some()).count() - merged.len();
    merged.sort_by_key(|e| (e.span.start, e.span.end));

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0u32;
    let mut last_end: Option<u32> = None;
    let mut applied = 0;
    let mut skipped = invalid;

    for edit in merged {
        if last_end.is_some_and(|end| end >= edit.span.start) {
            trace!("Skipping overlapping fix at {}..{}", edit.span.start, edit.span.end);
            skipped += 1;
            continue;
        }
        output.push_str(&text[cursor as usize..edit.span.start as usize]);
        output.push_str(&edit.text);
        cursor = edit.span.end;
        last_end = Some(edit.span.end);
        applied += 1;
    }
    output.push_str(&text[cursor as usize..]);

    FixOutcome { output, applied, skipped }
}

#[derive(Debug, Clone)]
pub struct StableFix {
    pub output: String,
    pub passes: usize,
    /// Diagnostics still reported by the final pass
    pub remaining: Vec<Diagnostic>,
}

/// Check, fix, and re-check `text` until no fix applies or `max_passes` is reached.
pub fn fix_until_stable(
    text: &str,
    source_type: SourceType,
    rules: &[&dyn Rule],
    packages: &PackageSet,
    max_passes: usize,
) -> Result<StableFix> {
    let mut current = text.to_string();
    let mut passes = 0;

    loop {
        let source = parse_source(current.clone(), source_type)?;
        let diagnostics: Vec<Diagnostic> =
            rules.iter().flat_map(|rule| rule.check(&source, packages)).collect();

        if passes == max_passes || diagnostics.iter().all(|d| d.fix.is_none()) {
            debug!("Stopped fixing after {} passes, {} diagnostics left", passes, diagnostics.len());
            return Ok(StableFix { output: current, passes, remaining: diagnostics });
        }

        let leading = rules.iter().find_map(|rule| {
            let own: Vec<Diagnostic> =
                diagnostics.iter().filter(|d| d.rule == rule.name()).cloned().collect();
            let outcome = apply_fixes(&current, &own);
            (outcome.applied > 0).then_some((rule.name(), outcome))
        });
        let Some((rule, outcome)) = leading else {
            return Ok(StableFix { output: current, passes, remaining: diagnostics });
        };
        trace!("Pass {} applied {} {} fixes", passes + 1, outcome.applied, rule);
        current = outcome.output;
        passes += 1;
    }
}
