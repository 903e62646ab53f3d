use log::debug;
use oxc_span::Span;
use oxiorder_core::{
    Category, Diagnostic, Fix, PackageSet, Rule, SourceCode, classify, extend_range,
};

use crate::violation::OrderViolation;

pub const RULE_NAME: &str = "statement-order";

/// Reports statements that come after a statement of a higher category.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatementOrder;

impl Rule for StatementOrder {
    fn name(&self) -> &'static str {
        RULE_NAME
    }

    fn check(&self, source: &dyn SourceCode, _packages: &PackageSet) -> Vec<Diagnostic> {
        // Every statement is recorded, violating or not
        let mut seen: Vec<(Category, Span)> = Vec::with_capacity(source.statements().len());
        let mut diagnostics = Vec::new();

        for statement in source.statements() {
            let category = classify(source, statement);
            if let Some(&(last, _)) = seen.last()
                && let Some(violation) = OrderViolation::between(last, category)
            {
                let range = extend_range(source, statement.span).with_whitespace;
                let target = insertion_point(source, &seen, category);
                debug!(
                    "{} at {}..{}, moving to {}",
                    violation.id(),
                    range.start,
                    range.end,
                    target
                );
                diagnostics.push(Diagnostic::new(
                    source,
                    RULE_NAME,
                    violation.id(),
                    violation.message(),
                    range,
                    Some(Fix::relocate(source, range, target)),
                ));
            }
            seen.push((category, statement.span));
        }

        diagnostics
    }
}

/// End of the last already-seen statement that `category` may follow, or the start of the file.
///
/// The start of the file is the line after a hashbang when there is one.
fn insertion_point(source: &dyn SourceCode, seen: &[(Category, Span)], category: Category) -> u32 {
    seen.iter()
        .rev()
        .find(|(seen_category, _)| seen_category.rank() <= category.rank())
        .map(|&(_, span)| extend_range(source, span).with_whitespace.end)
        .or_else(|| source.hashbang().map(|hashbang| source.after_line_break(hashbang.end)))
        .unwrap_or(0)
}
