//! Classification of top-level statements into ordering categories.
//!
//! The categories are totally ordered; a well-formed file lists them in
//! ascending rank:
//!
//! | Rank | Category        | Example                          |
//! |------|-----------------|----------------------------------|
//! | 0    | `ModuleImport`  | `import 'polyfill';`             |
//! | 1    | `TypeImport`    | `import type { A } from 'a';`    |
//! | 2    | `ValueImport`   | `import { a } from 'a';`         |
//! | 3    | `TypeReexport`  | `export type { A } from 'a';`    |
//! | 4    | `ValueReexport` | `export * from 'a';`             |
//! | 5    | `TypeExport`    | `export type { A };`             |
//! | 6    | `ValueExport`   | `export { a };`                  |
//! | 7    | `Plain`         | anything else                    |

use log::trace;

use crate::{
    source::SourceCode,
    tokens::TokenKind,
    types::{Statement, StatementKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Category {
    ModuleImport = 0,
    TypeImport = 1,
    ValueImport = 2,
    TypeReexport = 3,
    ValueReexport = 4,
    TypeExport = 5,
    ValueExport = 6,
    Plain = 7,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::ModuleImport,
        Category::TypeImport,
        Category::ValueImport,
        Category::TypeReexport,
        Category::ValueReexport,
        Category::TypeExport,
        Category::ValueExport,
        Category::Plain,
    ];

    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn is_import(self) -> bool {
        matches!(self, Category::ModuleImport | Category::TypeImport | Category::ValueImport)
    }

    /// Local exports (`export { a };`), not re-exports.
    pub fn is_export(self) -> bool {
        matches!(self, Category::TypeExport | Category::ValueExport)
    }

    pub fn is_reexport(self) -> bool {
        matches!(self, Category::TypeReexport | Category::ValueReexport)
    }

    pub fn is_any_export(self) -> bool {
        self.is_export() || self.is_reexport()
    }
}

pub fn classify(source: &dyn SourceCode, statement: &Statement) -> Category {
    let is_type = statement.import_export_kind.is_type();
    let category = match statement.kind {
        StatementKind::Import if is_module_import(source, statement) => Category::ModuleImport,
        StatementKind::Import if is_type => Category::TypeImport,
        StatementKind::Import => Category::ValueImport,
        StatementKind::ExportNamed { has_declaration: false } | StatementKind::ExportAll => {
            match (statement.source.is_some(), is_type) {
                (true, true) => Category::TypeReexport,
                (true, false) => Category::ValueReexport,
                (false, true) => Category::TypeExport,
                (false, false) => Category::ValueExport,
            }
        }
        StatementKind::ExportNamed { has_declaration: true } | StatementKind::Other => {
            Category::Plain
        }
    };
    trace!("Classified statement at {} as {:?}", statement.span.start, category);
    category
}

/// `import 'x'` has no bindings; `import {} from 'x'` has an empty brace list
/// that only the token after `import` (or `import type`) gives away.
fn is_module_import(source: &dyn SourceCode, statement: &Statement) -> bool {
    if statement.specifier_count > 0 {
        return false;
    }
    let probe = if statement.import_export_kind.is_type() { 2 } else { 1 };
    source.token_at(statement.span, probe) != Some(TokenKind::Punctuator)
}

/// Module path referenced by an import, re-export or `export *`.
pub fn import_source(statement: &Statement) -> Option<&str> {
    match statement.kind {
        StatementKind::Import | StatementKind::ExportNamed { .. } | StatementKind::ExportAll => {
            statement.source.as_deref()
        }
        StatementKind::Other => None,
    }
}
