//! Source hygiene checks for the pillsplit crate.
//!
//! Scans production files under `src/` (sibling `*_test.rs` files are skipped)
//! for patterns that panic or throw errors away. Every budget is zero; a new
//! hit has to be fixed, not budgeted.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    walk(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    files
}

fn walk(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: name, content });
        }
    }
}

/// Assert that no production line contains `pattern`.
fn assert_absent(pattern: &str, why: &str) {
    let hits: Vec<String> = source_files()
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(|(n, line)| format!("  {}:{}: {}", file.path, n + 1, line.trim()))
                .collect::<Vec<_>>()
        })
        .collect();
    assert!(hits.is_empty(), "`{pattern}` found ({why}):\n{}", hits.join("\n"));
}

// =============================================================
// Panics
// =============================================================

#[test]
fn no_unwrap() {
    assert_absent(".unwrap()", "propagate or handle the None/Err");
}

#[test]
fn no_expect() {
    assert_absent(".expect(", "propagate or handle the None/Err");
}

#[test]
fn no_panic() {
    assert_absent("panic!(", "return an error instead");
}

#[test]
fn no_unreachable() {
    assert_absent("unreachable!(", "make the state unrepresentable");
}

#[test]
fn no_todo_or_unimplemented() {
    assert_absent("todo!(", "finish the stub");
    assert_absent("unimplemented!(", "finish the stub");
}

// =============================================================
// Silent loss
// =============================================================

#[test]
fn no_silent_discard() {
    assert_absent("let _ =", "inspect the value");
}

#[test]
fn no_dot_ok() {
    assert_absent(".ok()", "map the error instead of dropping it");
}

#[test]
fn no_allow_dead_code() {
    assert_absent("#[allow(dead_code)]", "delete unused code");
}
