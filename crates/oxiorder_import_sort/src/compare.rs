use oxiorder_core::PackageSet;
use path_clean::clean;
use std::{cmp::Ordering, path::MAIN_SEPARATOR, path::Path};

use crate::collate::natural_cmp;

/// Coarse bucket a module path sorts into, lowest first.
///
/// - `0`: known package, scoped (`@scope/pkg`)
/// - `1`: known package
/// - `2`: other bare specifier, scoped
/// - `3`: other bare specifier
/// - `4`: absolute path
/// - `5`: relative path
pub fn package_tier(packages: &PackageSet, path: &str) -> u8 {
    let scoped = path.starts_with('@');
    if packages.contains(path) {
        return if scoped { 0 } else { 1 };
    }
    let absolute = path.starts_with('/') || Path::new(path).is_absolute();
    let local = path.starts_with('.');
    match (absolute, local) {
        (false, false) if scoped => 2,
        (false, false) => 3,
        (true, _) => 4,
        (false, true) => 5,
    }
}

/// `-(leading "../" segments) - 1` for dot-prefixed paths, `0` otherwise.
///
/// Paths reaching further up the tree get smaller values. The count is taken on
/// the normalized path, so `./../a` is one level up.
pub fn nesting_index(path: &str) -> i32 {
    if !path.starts_with('.') {
        return 0;
    }

    let mut normalized = clean(path).to_string_lossy().into_owned();
    if path.ends_with('/') && !normalized.ends_with(MAIN_SEPARATOR) {
        normalized.push(MAIN_SEPARATOR);
    }
    let parent = format!("..{}", MAIN_SEPARATOR);

    let mut rest = normalized.as_str();
    let mut up_segments = 0;
    while let Some(stripped) = rest.strip_prefix(parent.as_str()) {
        up_segments += 1;
        rest = stripped;
    }
    -up_segments - 1
}

pub fn compare_paths(packages: &PackageSet, a: &str, b: &str) -> Ordering {
    package_tier(packages, a)
        .cmp(&package_tier(packages, b))
        .then_with(|| nesting_index(a).cmp(&nesting_index(b)))
        .then_with(|| natural_cmp(a, b))
}
