//! Shared test helpers for `decomment_core` integration tests.

#![allow(unreachable_pub)]

use std::fs;
use std::path::Path;

/// Write `content` to `root/rel`, creating parent directories.
pub fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Read `root/rel` as text.
#[allow(dead_code)]
pub fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

/// A small project: two files with comments, one without, and files in
/// directories that must never be touched.
pub fn sample_project() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(
        root,
        "src/app.tsx",
        "/// <reference types=\"react\" />\n\
         // App entry\n\
         export const App = () => (\n  <main>\n    {/* header goes here */}\n    <h1>Hi</h1>\n  </main>\n);\n",
    );
    write(
        root,
        "src/util.js",
        "/**\n * Adds.\n */\nexport function add(a, b) {\n  return a + b; // sum\n}\n",
    );
    write(root, "src/clean.ts", "export const url = \"http://x.dev/*keep*/\";\n");
    write(root, "node_modules/dep/index.js", "// vendored\nmodule.exports = 1;\n");
    write(root, "dist/out.js", "/* built */\n");
    write(root, "README.md", "// not code\n");
    dir
}
