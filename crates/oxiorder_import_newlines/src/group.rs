use oxiorder_core::{Category, PackageSet};

/// Blank-line separated block a statement belongs to.
///
/// Type and value imports share a group, as do type and value re-exports;
/// known packages are split from everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Group {
    ModuleImport,
    PackageImport,
    Import,
    PackageReexport,
    Reexport,
    Export,
}

/// `None` for ordinary statements, which don't take part in grouping.
pub fn group_of(category: Category, path: Option<&str>, packages: &PackageSet) -> Option<Group> {
    let known = path.is_some_and(|p| packages.contains(p));
    let group = match category {
        Category::Plain => return None,
        Category::ModuleImport => Group::ModuleImport,
        Category::TypeImport | Category::ValueImport if known => Group::PackageImport,
        Category::TypeImport | Category::ValueImport => Group::Import,
        Category::TypeReexport | Category::ValueReexport if known => Group::PackageReexport,
        Category::TypeReexport | Category::ValueReexport => Group::Reexport,
        Category::TypeExport | Category::ValueExport => Group::Export,
    };
    Some(group)
}
