//! Custom cargo commands for the udd crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (default features only)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz <target> [seconds] - Run a fuzz target

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Feature sets the core must build and pass tests under.
const FEATURE_MATRIX: &[(&str, &[&str])] = &[
    ("default", &[]),
    ("scan matcher", &["--no-default-features"]),
    ("regex only", &["--no-default-features", "--features", "regex"]),
];

const FUZZ_TARGETS: &[&str] = &["tokenize_queries", "rendering_plan", "extract_snippets"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next(), args.next())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (feature matrix + clippy + wasm build)
  test      Run all Rust tests
  check     Quick check (cargo test + clippy, default features)
  bench     Run benchmarks
  fuzz      Run a fuzz target: cargo xtask fuzz <target> [seconds]
            Targets: {}
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("udd Verification Suite");
    println!("==========================================\n");

    let steps = FEATURE_MATRIX.len() + 2;

    for (i, (name, flags)) in FEATURE_MATRIX.iter().enumerate() {
        println!("[{}/{}] Running tests ({})...", i + 1, steps, name);
        let mut args = vec!["test", "--quiet"];
        args.extend_from_slice(flags);
        run_cargo(&args)?;
        println!("✓ Tests passed ({})\n", name);
    }

    println!("[{}/{}] Running clippy...", steps - 1, steps);
    run_cargo(&["clippy", "--all-targets", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[{}/{}] Checking wasm build...", steps, steps);
    wasm_check()?;
    println!("✓ wasm build checks\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// The browser bindings without the native client stack.
fn wasm_check() -> Result<()> {
    run_cargo(&[
        "check",
        "--lib",
        "--target",
        "wasm32-unknown-unknown",
        "--no-default-features",
        "--features",
        "wasm,regex",
    ])
}

/// Run one fuzz target for a bounded time (requires cargo-fuzz and nightly).
fn fuzz(target: Option<String>, seconds: Option<String>) -> Result<()> {
    let Some(target) = target else {
        bail!("Missing fuzz target. Available: {}", FUZZ_TARGETS.join(", "));
    };
    if !FUZZ_TARGETS.contains(&target.as_str()) {
        bail!(
            "Unknown fuzz target '{}'. Available: {}",
            target,
            FUZZ_TARGETS.join(", ")
        );
    }
    let seconds = seconds.unwrap_or_else(|| "60".to_string());
    let max_time = format!("-max_total_time={}", seconds);

    run_cargo(&["+nightly", "fuzz", "run", &target, "--", &max_time])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
