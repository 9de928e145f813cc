//! Custom cargo commands for pipekit.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (default features only)
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (contracts + both feature sets + clippy)
  test      Run all Rust tests
  check     Quick check (cargo test + clippy, default features)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("pipekit Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking contract markers...");
    check_contract_markers()?;
    println!("✓ Contract checks present\n");

    println!("[2/4] Running tests (parallel)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All tests passed\n");

    println!("[3/4] Running tests (sequential fallback)...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Sequential fallback passed\n");

    println!("[4/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

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

/// Every collector contract must still be checked from somewhere.
fn check_contract_markers() -> Result<()> {
    let root = project_root()?;
    let contracts = std::fs::read_to_string(root.join("src/contracts.rs"))
        .context("Failed to read contracts.rs")?;
    let collect = std::fs::read_to_string(root.join("src/collect.rs"))
        .context("Failed to read collect.rs")?;

    let count = contracts.matches("Contract violation").count();
    if count < 4 {
        bail!(
            "Expected at least 4 contract assertions, found {}. Someone may have removed checks!",
            count
        );
    }

    for check in [
        "check_length_preserved",
        "check_sorted_by_key",
        "check_sum_preserved",
        "check_partition",
    ] {
        if !collect.contains(check) {
            bail!("{} is no longer called from collect.rs", check);
        }
    }

    Ok(())
}
