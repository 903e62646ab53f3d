use log::debug;
use oxc_span::Span;
use oxiorder_core::{
    Diagnostic, Edit, Fix, PackageSet, Rule, SourceCode, classify, extend_range, import_source,
};

use crate::group::{Group, group_of};

pub const RULE_NAME: &str = "import-newlines";

const REMOVE_NEWLINE: &str = "removeNewline";
const REMOVE_NEWLINE_MESSAGE: &str = "Remove the extra newline between imports";
const INSERT_NEWLINE: &str = "insertNewline";
const INSERT_NEWLINE_MESSAGE: &str = "Add the missing newline between imports";

#[derive(Debug, Clone, Copy, Default)]
pub struct ImportNewlines;

impl Rule for ImportNewlines {
    fn name(&self) -> &'static str {
        RULE_NAME
    }

    fn check(&self, source: &dyn SourceCode, packages: &PackageSet) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut previous: Option<(Option<Group>, Span)> = None;

        for statement in source.statements() {
            let category = classify(source, statement);
            let group = group_of(category, import_source(statement), packages);
            let range = extend_range(source, statement.span).without_whitespace;

            if let Some((Some(previous_group), previous_range)) = previous
                && let Some(group) = group
            {
                let blank_lines = blank_lines_between(source, previous_range, range);
                if group == previous_group && blank_lines >= 1 {
                    diagnostics.push(report(
                        source,
                        REMOVE_NEWLINE,
                        REMOVE_NEWLINE_MESSAGE,
                        range,
                        remove_newline_fix(source, previous_range, range),
                    ));
                } else if group != previous_group && blank_lines == 0 {
                    diagnostics.push(report(
                        source,
                        INSERT_NEWLINE,
                        INSERT_NEWLINE_MESSAGE,
                        range,
                        insert_newline_fix(source, previous_range, range),
                    ));
                }
            }

            previous = Some((group, range));
        }

        diagnostics
    }
}

fn report(
    source: &dyn SourceCode,
    message_id: &'static str,
    message: &'static str,
    range: Span,
    fix: Option<Fix>,
) -> Diagnostic {
    debug!("{} before offset {}", message_id, range.start);
    let at = Span::new(range.start, range.start);
    Diagnostic::new(source, RULE_NAME, message_id, message, at, fix)
}

/// Blank lines between the end of `left` and the start of `right`.
///
/// Lines taken up by comments in between are not blank.
pub fn blank_lines_between(source: &dyn SourceCode, left: Span, right: Span) -> u32 {
    let line_of = |offset: u32| source.position(offset).line;
    let last_line = line_of(left.end);
    let first_line = line_of(right.start);
    if first_line <= last_line + 1 {
        return 0;
    }

    let mut blank = 0;
    let mut line = last_line;
    for comment in comments_between(source, left, right) {
        blank += line_of(comment.start).saturating_sub(line + 1);
        line = line_of(comment.end);
    }
    blank + first_line.saturating_sub(line + 1)
}

fn comments_between(source: &dyn SourceCode, left: Span, right: Span) -> Vec<Span> {
    source
        .comments()
        .iter()
        .filter(|c| c.start >= left.end && c.end <= right.start)
        .copied()
        .collect()
}

fn gap(source: &dyn SourceCode, left: Span, right: Span) -> Option<Span> {
    if left.end > right.start || !comments_between(source, left, right).is_empty() {
        return None;
    }
    Some(Span::new(left.end, right.start))
}

/// Line terminator used in `gap`, falling back to the file's first one.
fn line_break(source: &dyn SourceCode, gap: Span) -> &'static str {
    let in_gap = source.slice(gap);
    let sample = if in_gap.contains('\n') { in_gap } else { source.text() };
    if sample.find('\n').is_some_and(|i| sample[..i].ends_with('\r')) { "\r\n" } else { "\n" }
}

/// Collapse the gap to a single line break, keeping the second statement's indentation.
fn remove_newline_fix(source: &dyn SourceCode, left: Span, right: Span) -> Option<Fix> {
    let gap = gap(source, left, right)?;
    let line_start = source.line_start(right.start).max(gap.start);
    let indentation = &source.text()[line_start as usize..right.start as usize];
    let text = format!("{}{}", line_break(source, gap), indentation);
    Some(Fix::new(vec![Edit::replace(gap, text)]))
}

fn insert_newline_fix(source: &dyn SourceCode, left: Span, right: Span) -> Option<Fix> {
    let gap = gap(source, left, right)?;
    let line_start = source.line_start(right.start);
    let newline = line_break(source, gap);
    let edit = if line_start > gap.start {
        Edit::insert_at(line_start, newline)
    } else {
        Edit::replace(gap, newline.repeat(2))
    };
    Some(Fix::new(vec![edit]))
}
