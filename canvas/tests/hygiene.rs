//! Hygiene: source-level checks run as tests.
//!
//! Scans the production sources under `src/` (sibling `*_test.rs` files are
//! excluded) for patterns that crash, silently drop errors, or leak concerns
//! across module boundaries. Budgets only go down.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// A forbidden pattern and how many lines may contain it.
struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "panics on None/Err" },
    Budget { pattern: ".expect(", max: 0, why: "panics on None/Err" },
    Budget { pattern: "panic!(", max: 0, why: "crashes the host page" },
    Budget { pattern: "unreachable!(", max: 0, why: "crashes the host page" },
    Budget { pattern: "todo!(", max: 0, why: "unfinished stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "unfinished stub" },
    Budget { pattern: "let _ =", max: 0, why: "discards a value without inspecting it" },
    Budget { pattern: ".ok()", max: 0, why: "drops the error" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code instead" },
    Budget { pattern: "println!(", max: 0, why: "log through tracing" },
    Budget { pattern: "eprintln!(", max: 0, why: "log through tracing" },
    Budget { pattern: "dbg!(", max: 0, why: "debug leftover" },
];

/// Modules allowed to name browser types directly.
const BROWSER_MODULES: &[&str] = &["engine.rs", "render.rs"];

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("engine.rs")), "run from the crate root");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let hits = count_in_source(&files, budget.pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            failures.push(format!(
                "`{}` budget exceeded ({}): found {count}, max {}.\n{}",
                budget.pattern,
                budget.why,
                budget.max,
                format_hits(&hits)
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn browser_types_stay_in_engine_and_render() {
    let files = source_files();
    let offenders: Vec<&str> = files
        .iter()
        .filter(|f| !BROWSER_MODULES.iter().any(|m| f.path.ends_with(m)))
        .filter(|f| f.content.contains("web_sys::"))
        .map(|f| f.path.as_str())
        .collect();
    assert!(offenders.is_empty(), "web_sys used outside engine/render: {offenders:?}");
}

#[test]
fn sibling_tests_are_wired() {
    let Ok(entries) = fs::read_dir("src") else {
        return;
    };
    let mut unwired = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        let Some(module) = name.strip_suffix("_test.rs") else {
            continue;
        };
        let parent = Path::new("src").join(format!("{module}.rs"));
        let wired = fs::read_to_string(&parent).is_ok_and(|c| c.contains(&format!("#[path = \"{name}\"]")));
        if !wired {
            unwired.push(name);
        }
    }
    assert!(unwired.is_empty(), "test files not referenced by their module: {unwired:?}");
}
