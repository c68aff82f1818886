//! Structural tests for architectural boundary enforcement.
//!
//! These tests scan source files to verify that the layer boundaries hold:
//! domain is pure, application talks to infrastructure only through ports,
//! and infrastructure never prints.

use std::path::{Path, PathBuf};

/// Collect all `.rs` files under a directory recursively.
fn collect_rs_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(collect_rs_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files
}

/// Read a file and strip comment lines to avoid false positives.
fn read_non_comment_lines(path: &Path) -> Vec<String> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    content
        .lines()
        .filter(|l| {
            let trimmed = l.trim();
            !trimmed.starts_with("//") && !trimmed.starts_with("/*") && !trimmed.starts_with('*')
        })
        .map(String::from)
        .collect()
}

/// Lines before the first `#[cfg(test)]`; test modules sit at the end of a file.
fn production_lines(path: &Path) -> Vec<String> {
    read_non_comment_lines(path)
        .into_iter()
        .take_while(|l| !l.contains("#[cfg(test)]"))
        .collect()
}

fn layer_dir(layer: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join(layer)
}

/// Every `needle` occurrence in production code under `layer`, as `file:line: text`.
fn violations(layer: &str, needles: &[&str]) -> Vec<String> {
    let mut found = Vec::new();
    for file in collect_rs_files(&layer_dir(layer)) {
        let rel = file
            .strip_prefix(env!("CARGO_MANIFEST_DIR"))
            .unwrap_or(&file)
            .display()
            .to_string();
        for (i, line) in production_lines(&file).iter().enumerate() {
            if needles.iter().any(|n| line.contains(n)) {
                found.push(format!("{rel}:{}: {}", i + 1, line.trim()));
            }
        }
    }
    found
}

#[test]
fn domain_is_free_of_io_and_outer_layers() {
    let found = violations(
        "domain",
        &[
            "crate::application",
            "crate::infra",
            "crate::commands",
            "std::fs",
            "std::process",
            "std::net",
            "tokio",
        ],
    );
    assert!(found.is_empty(), "domain/ must stay pure:\n{}", found.join("\n"));
}

#[test]
fn application_has_no_imports_from_infra_or_commands() {
    let found = violations("application", &["crate::infra", "crate::commands"]);
    assert!(
        found.is_empty(),
        "application/ must go through ports:\n{}",
        found.join("\n")
    );
}

#[test]
fn infra_has_no_imports_from_commands() {
    let found = violations("infra", &["crate::commands"]);
    assert!(found.is_empty(), "forbidden import in infra/:\n{}", found.join("\n"));
}

#[test]
fn infra_has_no_print_macros_outside_tests() {
    let found = violations("infra", &["println!", "eprintln!", "print!("]);
    assert!(
        found.is_empty(),
        "infra/ must report through tracing, not stdout:\n{}",
        found.join("\n")
    );
}

#[test]
fn every_layer_was_scanned() {
    for layer in ["domain", "application", "infra", "commands"] {
        assert!(
            !collect_rs_files(&layer_dir(layer)).is_empty(),
            "no sources found under src/{layer}"
        );
    }
}
