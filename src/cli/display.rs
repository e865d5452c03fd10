// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the wordtrie CLI.
//!
//! OneDark on dark terminals, One Light on light ones. Output is plain text when
//! `NO_COLOR` is set or stdout is not a TTY, so piping into `grep` or a file
//! never picks up escape codes.
//!
//! # Theme detection order
//!
//! 1. `WORDTRIE_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

/// Width between the left and right box borders.
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

type Rgb = (u8, u8, u8);

/// The handful of colors the CLI actually uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub red: Rgb,
    pub green: Rgb,
    pub blue: Rgb,
    pub cyan: Rgb,
    pub gray: Rgb,
}

// OneDark: https://github.com/joshdick/onedark.vim
const ONEDARK: Palette = Palette {
    red: (224, 108, 117),   // #e06c75
    green: (152, 195, 121), // #98c379
    blue: (97, 175, 239),
    cyan: (86, 182, 194),
    gray: (92, 99, 112),
};

// One Light: https://github.com/sonph/onehalf
const ONELIGHT: Palette = Palette {
    red: (228, 86, 73), // #e45649
    green: (80, 161, 79),
    blue: (64, 120, 242),
    cyan: (1, 132, 188),
    gray: (160, 161, 167),
};

static THEME: OnceLock<Theme> = OnceLock::new();

fn theme_from(explicit: Option<&str>, colorfgbg: Option<&str>) -> Theme {
    if let Some(theme) = explicit {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": backgrounds 7 and up are light, except 8 (dark gray)
    if let Some(bg) = colorfgbg.and_then(|v| v.split(';').next_back()) {
        if let Ok(bg) = bg.parse::<u8>() {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

/// Detected theme, cached for the life of the process.
pub fn theme() -> Theme {
    *THEME.get_or_init(|| {
        theme_from(
            std::env::var("WORDTRIE_THEME").ok().as_deref(),
            std::env::var("COLORFGBG").ok().as_deref(),
        )
    })
}

pub fn palette() -> &'static Palette {
    match theme() {
        Theme::Dark => &ONEDARK,
        Theme::Light => &ONELIGHT,
    }
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

fn rgb((r, g, b): Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Whether stdout should get escape codes.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// `text` in `color`, optionally bold. Plain when colors are off.
pub fn paint(color: Rgb, bold: bool, text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    format!("{}{}{}{}", if bold { BOLD } else { "" }, rgb(color), text, RESET)
}

/// Length as seen on screen, ignoring ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            in_escape = c != 'm';
        } else {
            len += 1;
        }
    }
    len
}

pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", " ".repeat(pad), s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(pad))
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(s: &str) -> String {
    paint(palette().gray, false, s)
}

/// ╔═══╗ / ║ TITLE ║ / ╚═══╝
pub fn banner(text: &str) {
    let edge = |l: &str, r: &str| paint(palette().blue, false, &format!("{}{}{}", l, "═".repeat(BOX_WIDTH), r));
    let label = paint(palette().cyan, true, text);
    let total = BOX_WIDTH.saturating_sub(visible_len(&label));
    let side = paint(palette().blue, false, "║");
    println!("{}", edge("╔", "╗"));
    println!(
        "{}{}{}{}{}",
        side,
        " ".repeat(total / 2),
        label,
        " ".repeat(total - total / 2),
        side
    );
    println!("{}", edge("╚", "╝"));
}

/// ┌─ LABEL ─────┐
pub fn section_top(label: &str) {
    let label = format!("─ {} ", paint(palette().cyan, true, label));
    let rest = BOX_WIDTH.saturating_sub(visible_len(&label));
    println!("{}{}{}", border("┌"), label, border(&format!("{}┐", "─".repeat(rest))));
}

/// │ content     │
pub fn row(content: &str) {
    println!("{}{}{}", border("│"), pad_right(content, BOX_WIDTH), border("│"));
}

/// └─────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Human-readable byte count.
pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Percentage saved going from `raw` to `compressed` bytes.
pub fn savings_colored(raw: usize, compressed: usize) -> String {
    if raw == 0 {
        return paint(palette().gray, false, "  N/A");
    }
    let saved = (1.0 - compressed as f64 / raw as f64) * 100.0;
    if saved.abs() < 0.5 {
        paint(palette().gray, false, "   0%")
    } else if saved > 0.0 {
        paint(palette().green, true, &format!("{:>4.0}%", saved))
    } else {
        paint(palette().red, true, &format!("{:>+4.0}%", saved))
    }
}

/// Outcome of one membership query.
pub fn presence(outcome: &wordtrie::Result<bool>) -> String {
    let p = palette();
    match outcome {
        Ok(true) => paint(p.green, true, "present"),
        Ok(false) => paint(p.gray, false, "absent"),
        Err(e) => paint(p.red, true, &format!("error: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_len() {
        assert_eq!(visible_len("hello"), 5);
        assert_eq!(visible_len(""), 0);
        assert_eq!(visible_len("\x1b[1m\x1b[38;2;1;2;3mhi\x1b[0m"), 2);
    }

    #[test]
    fn test_theme_detection() {
        assert_eq!(theme_from(Some("light"), None), Theme::Light);
        assert_eq!(theme_from(Some("D"), Some("0;15")), Theme::Dark);
        assert_eq!(theme_from(None, Some("0;15")), Theme::Light);
        assert_eq!(theme_from(None, Some("15;8")), Theme::Dark);
        assert_eq!(theme_from(Some("weird"), Some("bogus")), Theme::Dark);
        assert_eq!(theme_from(None, None), Theme::Dark);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn test_padding_ignores_escapes() {
        let s = "\x1b[1mab\x1b[0m";
        assert_eq!(visible_len(&pad_left(s, 5)), 5);
        assert_eq!(visible_len(&pad_right(s, 1)), 2);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(ONEDARK, ONELIGHT);
    }
}
