use std::{
    collections::BTreeMap,
    env,
    io::{self, Write},
    path::{Component, Path, PathBuf},
};

use colored::Colorize;
use log::{debug, trace};

use crate::types::{CheckResult, Diagnostic};

/// Show a root-relative report path relative to the working directory, so terminals can link it.
fn relativize_to_cwd(root: &Path, relative_to_root: &str) -> String {
    let Ok(cwd) = env::current_dir() else {
        debug!("Failed to get current directory");
        return relative_to_root.to_string();
    };

    let shown = make_relative(&root.join(relative_to_root), &cwd)
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_else(|| relative_to_root.to_string());
    trace!("Showing '{}' as '{}' from {:?}", relative_to_root, shown, cwd);
    shown
}

/// Path leading from directory `base` to `target`, or `None` when they share no root.
fn make_relative(target: &Path, base: &Path) -> Option<PathBuf> {
    if target.components().next() != base.components().next() {
        return None;
    }
    let common = target.components().zip(base.components()).take_while(|(t, b)| t == b).count();

    let mut relative: PathBuf = base.components().skip(common).map(|_| Component::ParentDir).collect();
    for component in target.components().skip(common) {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::ParentDir => relative.push(".."),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    if relative.as_os_str().is_empty() { Some(PathBuf::from(".")) } else { Some(relative) }
}

pub fn print_no_issues_message<W: Write>(writer: &mut W, files_analyzed: usize) -> io::Result<()> {
    debug!("No issues detected");
    writeln!(
        writer,
        "{} Imports and exports are in order. Files checked: {}",
        "✓".green().bold(),
        files_analyzed
    )?;
    writer.flush()?;
    Ok(())
}

pub fn print_diagnostics_tree<W: Write>(writer: &mut W, result: &CheckResult) -> io::Result<()> {
    let total = result.total_diagnostics();
    debug!("Printing diagnostics tree for {} files", result.reports.len());

    writeln!(
        writer,
        "{} Import order issues detected ({} problems)\n",
        "⚠".yellow().bold(),
        total.to_string().yellow()
    )?;

    for report in &result.reports {
        trace!("Processing file: {} with {} diagnostics", report.path, report.diagnostics.len());

        // Relativize the file path to cwd for clickable links
        let display_path = relativize_to_cwd(&result.root, &report.path);
        writeln!(writer, "{}", display_path.bright_white().bold())?;

        for (idx, diagnostic) in report.diagnostics.iter().enumerate() {
            let is_last = idx == report.diagnostics.len() - 1;
            let prefix = if is_last { "└──" } else { "├──" };
            writeln!(writer, "{}  {}", prefix.dimmed(), format_diagnostic(diagnostic))?;
        }

        writeln!(writer)?;
    }

    print_summary(writer, result)?;

    writer.flush()?;
    Ok(())
}

fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    let start = diagnostic.location.start;
    let position = format!("{:>5}", format!("{}:{}", start.line, start.column));
    let id = format!("{}/{}", diagnostic.rule, diagnostic.message_id);
    let mut line = format!("{}  {}  {}", position.dimmed(), diagnostic.message, id.dimmed());
    if diagnostic.is_fixable() {
        line.push_str(&format!("  {}", "(fixable)".green()));
    }
    line
}

fn print_summary<W: Write>(writer: &mut W, result: &CheckResult) -> io::Result<()> {
    let total = result.total_diagnostics();
    if total == 0 {
        return Ok(());
    }

    let all = || result.reports.iter().flat_map(|r| &r.diagnostics);
    let fixable = all().filter(|d| d.is_fixable()).count();
    let mut by_rule: BTreeMap<&str, usize> = BTreeMap::new();
    for diagnostic in all() {
        *by_rule.entry(diagnostic.rule).or_default() += 1;
    }

    writeln!(writer, "{}", "─".repeat(60).dimmed())?;
    writeln!(writer, "{}", "Summary".bold())?;
    writeln!(
        writer,
        "  Total problems: {} ({} fixable)",
        total.to_string().yellow().bold(),
        fixable.to_string().green()
    )?;
    writeln!(writer, "  Files with problems: {}", result.reports.len().to_string().yellow())?;
    writeln!(writer, "  By rule:")?;
    for (rule, count) in by_rule {
        writeln!(writer, "    {}: {}", rule, count.to_string().red())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fix::Fix,
        types::{FileReport, Location, Position},
    };
    use oxc_span::Span;

    #[test]
    fn test_make_relative_down_and_up() {
        let relative = |target: &str, base: &str| make_relative(Path::new(target), Path::new(base));

        assert_eq!(relative("/project/src/a.ts", "/project/src"), Some(PathBuf::from("a.ts")));
        assert_eq!(relative("/project/src/ui/b.tsx", "/project/src"), Some(PathBuf::from("ui/b.tsx")));
        assert_eq!(relative("/project/a.ts", "/project/apps/web/src"), Some(PathBuf::from("../../../a.ts")));
        assert_eq!(relative("/project/apps/web/a.ts", "/project/apps/api"), Some(PathBuf::from("../web/a.ts")));
        assert_eq!(relative("/project/src", "/project/src"), Some(PathBuf::from(".")));
    }

    #[test]
    fn test_make_relative_to_enclosing_dir() {
        let result = make_relative(Path::new("/project"), Path::new("/project/apps/web"));
        assert_eq!(result, Some(PathBuf::from("../..")));
    }

    fn sample_result() -> CheckResult {
        let position = Position::new(4, 1);
        let diagnostic = |rule, message_id, fix: Option<Fix>| Diagnostic {
            rule,
            message_id,
            message: "Imports should come before the code",
            span: Span::new(10, 21),
            location: Location { start: position, end: Position::new(4, 12) },
            fix,
        };
        CheckResult {
            root: PathBuf::from("/project"),
            reports: vec![FileReport {
                path: "src/a.ts".to_string(),
                diagnostics: vec![
                    diagnostic("statement-order", "importAfterStatement", Some(Fix::default())),
                    diagnostic("import-sort", "wrongOrder", None),
                ],
            }],
            files_analyzed: 3,
        }
    }

    #[test]
    fn test_diagnostics_tree_lists_each_problem() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_diagnostics_tree(&mut out, &sample_result()).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("(2 problems)"));
        assert!(out.contains("src/a.ts\n"));
        assert!(out.contains("├──    4:1  Imports should come before the code  statement-order/importAfterStatement  (fixable)"));
        assert!(out.contains("└──    4:1  Imports should come before the code  import-sort/wrongOrder\n"));
        assert!(out.contains("Total problems: 2 (1 fixable)"));
        assert!(out.contains("    import-sort: 1\n    statement-order: 1"));
    }

    #[test]
    fn test_no_issues_message() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_no_issues_message(&mut out, 12).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Files checked: 12"));
    }
}
