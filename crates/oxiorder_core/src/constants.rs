//! File names and extensions shared by collection, settings and manifests.
//!
//! - **TypeScript**: `.ts`, `.tsx`, `.mts` (ES module), `.cts` (CommonJS)
//! - **JavaScript**: `.js`, `.jsx`, `.mjs` (ES module), `.cjs` (CommonJS)

/// File extensions for JavaScript/TypeScript files that should be checked
pub const JS_TS_EXTENSIONS: &[&str] = &[
    "ts",  // TypeScript
    "tsx", // TypeScript with JSX
    "mts", // TypeScript module
    "cts", // TypeScript CommonJS
    "js",  // JavaScript
    "jsx", // JavaScript with JSX
    "mjs", // JavaScript module
    "cjs", // JavaScript CommonJS
];

/// Settings file looked up at the project root
pub const SETTINGS_FILE: &str = ".oxiorder.json";

/// Package manifest whose dependencies count as known packages
pub const MANIFEST_FILE: &str = "package.json";

/// Directories never descended into, even when not gitignored
pub const SKIPPED_DIRS: &[&str] = &["node_modules", ".git"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_ts_extensions_includes_all_variants() {
        for ext in ["ts", "tsx", "mts", "cts", "js", "jsx", "mjs", "cjs"] {
            assert!(JS_TS_EXTENSIONS.contains(&ext), "missing extension '{}'", ext);
        }
        assert_eq!(JS_TS_EXTENSIONS.len(), 8);
    }
}
