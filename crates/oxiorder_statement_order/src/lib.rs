//! Global ordering of top-level imports and exports.
//!
//! A file is expected to list its statements by [`Category`] rank: module
//! imports, type imports, value imports, type re-exports, value re-exports,
//! type exports, value exports and finally everything else. Each statement
//! that breaks this order is reported with a fix that moves it, together with
//! its attached comments, right after the last statement it may follow.
//!
//! # Examples
//!
//! ```no_run
//! use oxiorder_core::{PackageSet, Rule, parse_source, source_type_for};
//! use oxiorder_statement_order::StatementOrder;
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let text = "1;\nimport 'a';\n".to_string();
//! let source = parse_source(text, source_type_for(Path::new("input.ts")))?;
//! let diagnostics = StatementOrder.check(&source, &PackageSet::new());
//! assert_eq!(diagnostics[0].message_id, "importAfterStatement");
//! # Ok(())
//! # }
//! ```
//!
//! [`Category`]: oxiorder_core::Category

mod rule;
mod violation;

// Re-export public API
pub use rule::{RULE_NAME, StatementOrder};
pub use violation::OrderViolation;
