//! Blank lines between groups of imports and exports.
//!
//! Statements within one group sit on consecutive lines; different groups are
//! separated by at least one blank line. Comment lines between two statements
//! don't count as blank.

mod group;
mod rule;

// Re-export public API
pub use group::{Group, group_of};
pub use rule::{ImportNewlines, RULE_NAME, blank_lines_between};
