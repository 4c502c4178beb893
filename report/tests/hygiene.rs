//! Source hygiene budgets, enforced at test time.
//!
//! Scans the crate's production sources for patterns that have no place in
//! library code (panicking shortcuts, silently dropped errors) and fails
//! when any budget is exceeded. Budgets only ratchet down: to add an
//! occurrence somewhere, remove one somewhere else first.

use std::fs;
use std::path::{Path, PathBuf};

/// Banned pattern and how many occurrences the sources may still carry.
const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("dbg!(", 0),
    ("let _ =", 0),
    (".ok()", 0),
    ("#[allow(dead_code)]", 0),
];

/// Production `.rs` files under `src/`, excluding `*_test.rs` siblings.
fn production_sources() -> Vec<(PathBuf, String)> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs")
            && !path.to_string_lossy().ends_with("_test.rs")
        {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

#[test]
fn hygiene_budgets_hold() {
    let files = production_sources();
    assert!(!files.is_empty(), "no sources found; must run from the crate root");

    let mut violations = Vec::new();
    for (pattern, budget) in BUDGETS {
        let mut count = 0;
        let mut locations = Vec::new();
        for (path, content) in &files {
            let hits = content.lines().filter(|line| line.contains(pattern)).count();
            if hits > 0 {
                count += hits;
                locations.push(format!("{}: {hits}", path.display()));
            }
        }
        if count > *budget {
            violations.push(format!(
                "`{pattern}` over budget ({count} > {budget})\n  {}",
                locations.join("\n  ")
            ));
        }
    }
    assert!(violations.is_empty(), "hygiene budgets exceeded:\n{}", violations.join("\n"));
}
