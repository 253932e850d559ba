//! Hygiene checks enforcing coding standards at test time.
//!
//! Scans the production sources under `src/` for antipatterns. Each pattern
//! has a budget; if you must add one, remove an existing one first so the
//! budget never grows.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

// Panics crash the WASM module and leave a blank page.
const UNWRAP: Budget = Budget { pattern: ".unwrap()", max: 0, why: "propagate or handle the error" };
const EXPECT: Budget = Budget { pattern: ".expect(", max: 0, why: "propagate or handle the error" };
const PANIC: Budget = Budget { pattern: "panic!(", max: 0, why: "return an error instead" };
const UNREACHABLE: Budget = Budget { pattern: "unreachable!(", max: 0, why: "model the case in the type" };
const TODO: Budget = Budget { pattern: "todo!(", max: 0, why: "finish the stub" };
const UNIMPLEMENTED: Budget = Budget { pattern: "unimplemented!(", max: 0, why: "finish the stub" };

// Silent loss. Current discards are the SSR stubs in `BrowserStore::set` and
// `BrowserTransport::send`.
const SILENT_DISCARD: Budget = Budget { pattern: "let _ =", max: 2, why: "inspect or log the value" };
// Regex compilation, token payload decoding, and `window.confirm`.
const DOT_OK: Budget = Budget { pattern: ".ok()", max: 5, why: "inspect or log the error" };

// Output goes through `log` / `leptos::logging`.
const PRINTLN: Budget = Budget { pattern: "println!(", max: 0, why: "use the log facade" };
const EPRINTLN: Budget = Budget { pattern: "eprintln!(", max: 0, why: "use the log facade" };
const DBG: Budget = Budget { pattern: "dbg!(", max: 0, why: "remove debugging output" };

// The bundle is served statically, so nothing renders on a server first.
const HYDRATE_BODY: Budget = Budget { pattern: "hydrate_body(", max: 0, why: "mount with mount_to_body" };
const HYDRATION_SCRIPTS: Budget = Budget { pattern: "HydrationScripts", max: 0, why: "no server-rendered shell" };

const ALLOW_DEAD_CODE: Budget = Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete the unused code" };

/// Production `.rs` files under `src/`, skipping `_test.rs` companions.
fn source_files() -> Vec<(PathBuf, String)> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            collect(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs")
            && !path.to_string_lossy().ends_with("_test.rs")
        {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

fn check(budget: &Budget) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let hits: Vec<(String, usize)> = files
        .iter()
        .filter_map(|(path, content)| {
            let count = content.lines().filter(|line| line.contains(budget.pattern)).count();
            (count > 0).then(|| (path.display().to_string(), count))
        })
        .collect();
    let found: usize = hits.iter().map(|(_, c)| c).sum();
    let listing = hits
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");

    assert!(
        found <= budget.max,
        "`{}` budget exceeded: found {found}, max {} ({}).\n{listing}",
        budget.pattern,
        budget.max,
        budget.why
    );
}

#[test]
fn unwrap_budget() {
    check(&UNWRAP);
}

#[test]
fn expect_budget() {
    check(&EXPECT);
}

#[test]
fn panic_budget() {
    check(&PANIC);
}

#[test]
fn unreachable_budget() {
    check(&UNREACHABLE);
}

#[test]
fn todo_budget() {
    check(&TODO);
}

#[test]
fn unimplemented_budget() {
    check(&UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    check(&SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    check(&DOT_OK);
}

#[test]
fn print_budget() {
    check(&PRINTLN);
    check(&EPRINTLN);
    check(&DBG);
}

#[test]
fn allow_dead_code_budget() {
    check(&ALLOW_DEAD_CODE);
}

#[test]
fn client_side_mount_only() {
    check(&HYDRATE_BODY);
    check(&HYDRATION_SCRIPTS);

    let manifest = fs::read_to_string("Cargo.toml").unwrap_or_default();
    assert!(manifest.contains("\"leptos/csr\""), "browser feature must enable leptos/csr");
    for server_feature in ["leptos/ssr", "leptos/hydrate"] {
        assert!(!manifest.contains(server_feature), "Cargo.toml enables {server_feature}");
    }
}
