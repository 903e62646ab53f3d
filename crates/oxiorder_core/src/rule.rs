use std::collections::HashSet;

use crate::{source::SourceCode, types::Diagnostic};

/// Module names treated as known packages (builtins plus declared dependencies).
pub type PackageSet = HashSet<String>;

pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;

    fn check(&self, source: &dyn SourceCode, packages: &PackageSet) -> Vec<Diagnostic>;
}
