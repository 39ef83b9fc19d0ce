// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the udd CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `UDD_THEME` first (for explicit control), then `COLORFGBG` (set by some
//! terminals), then defaults to dark. Respects `NO_COLOR` and non-TTY
//! detection for pipelines; without colors, emphasized text is wrapped in
//! `**` so highlights survive a pipe.
//!
//! # Theme detection order
//!
//! 1. `UDD_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;
use udd::highlight::highlight_field;
use udd::{ParsedDocument, SearchHit, Segment};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

/// Width of the field label column inside a result box.
const LABEL_WIDTH: usize = 20;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override via UDD_THEME
    if let Ok(theme) = std::env::var("UDD_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // 2. COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                // Colors 0-6 are typically dark, 7+ are light
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
}

pub use colors::*;

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (255, 215, 0);
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (152, 104, 1);
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_YELLOW);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
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

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = border_color();
    let len = visible_len(content);
    let pad = BOX_WIDTH.saturating_sub(len);
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset(),
        content,
        " ".repeat(pad),
        border,
        reset()
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = border_color();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border_color(), "─".repeat(BOX_WIDTH), reset());
}

fn border_color() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// RENDERING PLANS
// ═══════════════════════════════════════════════════════════════════════════

/// Style one emphasized span.
pub fn emphasis(text: &str) -> String {
    if use_colors() {
        themed(BRIGHT_YELLOW, &[BOLD], text)
    } else {
        format!("**{}**", text)
    }
}

/// Render a plan as one styled string.
pub fn render_plan(plan: &[Segment]) -> String {
    plan.iter()
        .map(|segment| {
            if segment.emphasized {
                emphasis(&segment.content)
            } else {
                segment.content.clone()
            }
        })
        .collect()
}

/// Greedy word wrap that keeps emphasis intact across line breaks.
///
/// Breaks after spaces; a word wider than `width` is split by characters.
/// Newlines in the text force a break. Trailing spaces at a break are dropped.
pub fn wrap_plan(plan: &[Segment], width: usize) -> Vec<Vec<Segment>> {
    let width = width.max(1);
    let mut lines: Vec<Vec<Segment>> = vec![Vec::new()];
    let mut used = 0;

    for segment in plan {
        for (i, paragraph) in segment.content.split('\n').enumerate() {
            if i > 0 {
                lines.push(Vec::new());
                used = 0;
            }
            for word in paragraph.split_inclusive(' ') {
                let text = word.trim_end_matches(' ');
                let spaces = &word[text.len()..];

                let mut rest = text;
                while !rest.is_empty() {
                    if used > 0 && used + rest.chars().count() > width {
                        trim_line_end(lines.last_mut());
                        lines.push(Vec::new());
                        used = 0;
                    }
                    let (piece, tail) = split_at_chars(rest, width - used);
                    push_piece(lines.last_mut(), piece, segment.emphasized);
                    used += piece.chars().count();
                    rest = tail;
                }

                let kept = spaces.len().min(width - used);
                push_piece(lines.last_mut(), &spaces[..kept], segment.emphasized);
                used += kept;
            }
        }
    }

    for line in &mut lines {
        line.retain(|s| !s.content.is_empty());
    }
    lines
}

fn split_at_chars(s: &str, n: usize) -> (&str, &str) {
    match s.char_indices().nth(n) {
        Some((idx, _)) => s.split_at(idx),
        None => (s, ""),
    }
}

fn push_piece(line: Option<&mut Vec<Segment>>, piece: &str, emphasized: bool) {
    let Some(line) = line else { return };
    match line.last_mut() {
        Some(last) if last.emphasized == emphasized => last.content.push_str(piece),
        _ => line.push(Segment {
            content: piece.to_string(),
            emphasized,
        }),
    }
}

fn trim_line_end(line: Option<&mut Vec<Segment>>) {
    if let Some(last) = line.and_then(|l| l.last_mut()) {
        let trimmed = last.content.trim_end_matches(' ').len();
        last.content.truncate(trimmed);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Print a labelled field inside a box, wrapping the value under the label.
fn field_row(label: &str, plan: &[Segment]) {
    let value_width = BOX_WIDTH - 1 - LABEL_WIDTH;
    let lines = wrap_plan(plan, value_width);
    for (i, line) in lines.iter().enumerate() {
        let label_cell = if i == 0 {
            pad_right(&themed(GRAY, &[], &format!("{}:", label)), LABEL_WIDTH)
        } else {
            " ".repeat(LABEL_WIDTH)
        };
        row(&format!(" {}{}", label_cell, render_plan(line)));
    }
}

/// Print one search hit. Every field the backend highlighted is rendered emphasized.
pub fn print_hit(hit: &SearchHit) {
    let incident = &hit.index;
    let title = if incident.filename.is_empty() {
        format!("Incident {}", incident.id)
    } else {
        format!("Incident {} ({})", incident.id, incident.filename)
    };
    section_top(&title);

    let mut fields = vec![
        ("Employee", "employeeName", incident.employee_name.as_str()),
        ("Organization", "organizationName", incident.organization_name.as_str()),
        (
            "Affected Org",
            "affectedOrganizationName",
            incident.affected_organization_name.as_str(),
        ),
        ("Severity", "incidentSeverity", incident.incident_severity.as_str()),
    ];
    if !incident.incident_description_sr.is_empty() {
        fields.push((
            "Description (SR)",
            "incidentDescriptionSr",
            incident.incident_description_sr.as_str(),
        ));
    }
    if !incident.incident_description_en.is_empty() {
        fields.push((
            "Description (EN)",
            "incidentDescriptionEn",
            incident.incident_description_en.as_str(),
        ));
    }

    for (label, key, value) in fields {
        field_row(label, &highlight_field(value, &hit.highlights, key));
    }
    section_bot();
}

/// Print search hits, or a notice when there are none.
pub fn print_hits(hits: &[SearchHit]) {
    if hits.is_empty() {
        println!("{}", themed(GRAY, &[], "No incidents found."));
        return;
    }
    for hit in hits {
        print_hit(hit);
    }
    println!("{}", themed(GRAY, &[], &format!("{} incident(s)", hits.len())));
}

/// Print parsed fields for review before indexing.
pub fn print_parsed(document: &ParsedDocument, title: &str) {
    section_top(title);
    for (name, value) in document.fields() {
        field_row(name, &[Segment::plain(value)]);
    }
    section_bot();
}

pub fn success(message: &str) {
    println!("{} {}", themed(GREEN, &[BOLD], "✓"), message);
}

pub fn failure(message: &str) {
    eprintln!("{} {}", themed(RED, &[BOLD], "✗"), message);
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
