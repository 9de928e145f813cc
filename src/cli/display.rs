// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the pipekit CLI.
//!
//! Section boxes, pass/fail badges, and a little color. Colors are only emitted
//! when stdout is a terminal and `NO_COLOR` is unset, so piped output stays
//! plain text that tests and scripts can match on.

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

pub use colors::*;

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply styles if colors are enabled, otherwise return plain text
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

fn border(text: &str) -> String {
    styled(&[GRAY], text)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let line = format!(" {}", content);
    let pad = BOX_WIDTH.saturating_sub(visible_len(&line));
    println!("{}{}{}{}", border("│"), line, " ".repeat(pad), border("│"));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", styled(&[CYAN, BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// `[ok]` or `[mismatch]`, colored when enabled
pub fn agreement_badge(agree: bool) -> String {
    if agree {
        styled(&[GREEN, BOLD], "[ok]")
    } else {
        styled(&[RED, BOLD], "[mismatch]")
    }
}

pub fn label(text: &str) -> String {
    styled(&[YELLOW], text)
}

pub fn dim(text: &str) -> String {
    styled(&[DIM], text)
}

/// Print an error line to stderr: `error: ...`
pub fn error(message: &str) {
    eprintln!("{} {}", styled(&[RED, BOLD], "error:"), message);
}
