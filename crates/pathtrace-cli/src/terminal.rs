//! Terminal styling and color utilities.
//!
//! ANSI escape codes for trace highlighting and detection of whether the
//! terminal should receive them at all.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for settled nodes.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary lines (rejected relaxations, neighbour lists).
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for the final path summary.
    pub const CYAN: &str = "\x1b[36m";
    /// Green for successful relaxations.
    pub const GREEN: &str = "\x1b[32m";
    /// Red for unreachable notices.
    pub const RED: &str = "\x1b[31m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
            red: colors::RED,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            white_bold: "",
            gray: "",
            cyan: "",
            green: "",
            red: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Wrap `text` in `color` followed by a reset, if colors are enabled.
    pub fn paint(&self, color: &str, text: &str) -> String {
        if color.is_empty() {
            text.to_string()
        } else {
            format!("{color}{text}{}", self.reset)
        }
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    /// Environment variables are process-global, so tests modifying them
    /// must not run in parallel.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn with_env_vars<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let saved: Vec<_> = vars.iter().map(|(k, _)| (*k, env::var_os(k))).collect();
        for (key, value) in vars {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }

        let result = f();

        for (key, value) in saved {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }

        result
    }

    #[test]
    fn plain_palette_paints_nothing() {
        let p = ColorPalette::plain();
        assert_eq!(p.paint(p.green, "A"), "A");
    }

    #[test]
    fn colored_palette_wraps_and_resets() {
        let p = ColorPalette::colored();
        assert_eq!(p.paint(p.red, "x"), "\x1b[31mx\x1b[0m");
    }

    #[test]
    fn no_color_disables_colors() {
        with_env_vars(&[("NO_COLOR", Some("1")), ("TERM", None)], || {
            assert!(!supports_color(), "NO_COLOR=1 should disable colors");
            assert_eq!(ColorPalette::detect(), ColorPalette::plain());
        });
    }

    #[test]
    fn term_dumb_disables_colors() {
        with_env_vars(&[("NO_COLOR", None), ("TERM", Some("dumb"))], || {
            assert!(!supports_color(), "TERM=dumb should disable colors");
        });
    }

    #[test]
    fn normal_terminal_supports_colors() {
        with_env_vars(
            &[("NO_COLOR", None), ("TERM", Some("xterm-256color"))],
            || {
                assert!(supports_color(), "Normal terminal should support colors");
            },
        );
    }
}
