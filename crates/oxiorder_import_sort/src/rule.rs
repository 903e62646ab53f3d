use log::{debug, trace};
use oxc_span::Span;
use oxiorder_core::{
    Category, Diagnostic, Fix, PackageSet, Rule, SourceCode, classify, extend_range,
    import_source,
};

use crate::compare::compare_paths;

pub const RULE_NAME: &str = "import-sort";

const WRONG_ORDER: &str = "wrongOrder";
const WRONG_ORDER_MESSAGE: &str = "Imports and exports should be sorted by path";

/// Reports the first statement in each group that is out of path order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportSort;

impl Rule for ImportSort {
    fn name(&self) -> &'static str {
        RULE_NAME
    }

    fn check(&self, source: &dyn SourceCode, packages: &PackageSet) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut run: Vec<(&str, Span)> = Vec::new();
        let mut current: Option<Category> = None;

        for statement in source.statements() {
            let category = classify(source, statement);
            if current != Some(category) {
                diagnostics.extend(check_run(source, packages, &run));
                run.clear();
                current = Some(category);
            }
            // Statements without a path still break runs above
            if let Some(path) = import_source(statement) {
                run.push((path, statement.span));
            }
        }
        diagnostics.extend(check_run(source, packages, &run));

        diagnostics
    }
}

fn check_run(
    source: &dyn SourceCode,
    packages: &PackageSet,
    run: &[(&str, Span)],
) -> Option<Diagnostic> {
    if run.len() < 2 {
        return None;
    }
    trace!("Checking run of {} statements starting at {}", run.len(), run[0].1.start);

    let mut sorted = run.to_vec();
    sorted.sort_by(|(a, _), (b, _)| compare_paths(packages, a, b));

    let (&(_, actual), &(path, expected)) =
        run.iter().zip(&sorted).find(|((_, actual), (_, expected))| actual != expected)?;

    let range = extend_range(source, expected).with_whitespace;
    let target = extend_range(source, actual).with_whitespace.start;
    debug!("'{}' at {}..{} belongs before offset {}", path, range.start, range.end, target);

    Some(Diagnostic::new(
        source,
        RULE_NAME,
        WRONG_ORDER,
        WRONG_ORDER_MESSAGE,
        range,
        Some(Fix::relocate(source, range, target)),
    ))
}
