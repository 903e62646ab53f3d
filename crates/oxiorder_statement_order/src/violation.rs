use oxiorder_core::Category;

/// Ways an incoming statement can break the global order, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderViolation {
    ImportAfterStatement,
    ImportAfterExport,
    TypeImportAfterValueImport,
    ModuleImportAfterOtherImport,
    ExportAfterStatement,
    ReexportAfterExport,
    TypeExportAfterValueExport,
    TypeReexportAfterValueReexport,
}

impl OrderViolation {
    /// Violation caused by `next` directly following `last`, first match wins.
    pub fn between(last: Category, next: Category) -> Option<Self> {
        use Category::*;

        let violation = if last == Plain && next.is_import() {
            Self::ImportAfterStatement
        } else if last.is_any_export() && next.is_import() {
            Self::ImportAfterExport
        } else if last == ValueImport && next == TypeImport {
            Self::TypeImportAfterValueImport
        } else if last.is_import() && last != ModuleImport && next == ModuleImport {
            Self::ModuleImportAfterOtherImport
        } else if last == Plain && next.is_any_export() {
            Self::ExportAfterStatement
        } else if last.is_export() && next.is_reexport() {
            Self::ReexportAfterExport
        } else if last == ValueExport && next == TypeExport {
            Self::TypeExportAfterValueExport
        } else if last == ValueReexport && next == TypeReexport {
            Self::TypeReexportAfterValueReexport
        } else {
            return None;
        };
        Some(violation)
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::ImportAfterStatement => "importAfterStatement",
            Self::ImportAfterExport => "importAfterExport",
            Self::TypeImportAfterValueImport => "importTypeAfterImport",
            Self::ModuleImportAfterOtherImport => "importModuleAfterImport",
            Self::ExportAfterStatement => "exportAfterStatement",
            Self::ReexportAfterExport => "reexportAfterExport",
            Self::TypeExportAfterValueExport => "exportTypeAfterExport",
            Self::TypeReexportAfterValueReexport => "reexportTypeAfterReexport",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::ImportAfterStatement => "Imports should come before the code",
            Self::ImportAfterExport => "Imports should come before exports",
            Self::TypeImportAfterValueImport => "Types should be imported before values",
            Self::ModuleImportAfterOtherImport => {
                "Modules with side effects should be imported first"
            }
            Self::ExportAfterStatement => "Exports should come before the code",
            Self::ReexportAfterExport => "Re-exports should come before exports",
            Self::TypeExportAfterValueExport => "Types should be exported before values",
            Self::TypeReexportAfterValueReexport => "Types should be re-exported before values",
        }
    }
}
