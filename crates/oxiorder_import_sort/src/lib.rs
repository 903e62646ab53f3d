//! Path ordering of imports and exports within a group.
//!
//! Consecutive statements of the same [`Category`] form a group, and each
//! group is expected to be sorted by its module paths: known scoped packages,
//! known packages, other scoped modules, other bare modules, absolute paths and
//! finally relative paths, the ones reaching further up the tree first. Ties
//! are broken by a case-insensitive comparison that orders digit runs by value.
//!
//! Only the first misplaced statement of each group is reported per pass, so
//! fixes within a group never conflict.
//!
//! # Examples
//!
//! ```no_run
//! use oxiorder_core::{PackageSet, Rule, apply_fixes, parse_source, source_type_for};
//! use oxiorder_import_sort::ImportSort;
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let text = "import 'c';\nimport 'b';\nimport 'a';\n";
//! let source = parse_source(text.to_string(), source_type_for(Path::new("input.ts")))?;
//! let diagnostics = ImportSort.check(&source, &PackageSet::new());
//! assert_eq!(apply_fixes(text, &diagnostics).output, "import 'a';\nimport 'c';\nimport 'b';\n");
//! # Ok(())
//! # }
//! ```
//!
//! [`Category`]: oxiorder_core::Category

mod collate;
mod compare;
mod rule;

// Re-export public API
pub use collate::natural_cmp;
pub use compare::{compare_paths, nesting_index, package_tier};
pub use rule::{ImportSort, RULE_NAME};
