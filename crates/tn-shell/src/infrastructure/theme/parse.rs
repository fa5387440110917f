//! Parsers for theme command output.

/// Parses `reg query ... /v AppsUseLightTheme` output.
///
/// The value line looks like `    AppsUseLightTheme    REG_DWORD    0x0`.
/// Returns `Some(true)` when apps use the light theme, `Some(false)` for
/// dark, `None` when the value line is absent or malformed.
pub fn apps_use_light_theme(reg_output: &str) -> Option<bool> {
    let line = reg_output
        .lines()
        .find(|line| line.contains("AppsUseLightTheme"))?;
    let raw = line.split_whitespace().last()?;
    let hex = raw.strip_prefix("0x").unwrap_or(raw);
    u32::from_str_radix(hex, 16).ok().map(|value| value != 0)
}

/// Parses the `osascript` answer to "return dark mode".
pub fn osascript_dark_mode(output: &str) -> bool {
    output.trim() == "true"
}

/// Case-insensitive check for "dark" in a theme name or settings file.
pub fn mentions_dark(text: &str) -> bool {
    text.to_lowercase().contains("dark")
}

/// Interprets `COLORFGBG` (`"fg;bg"` or `"fg;default;bg"`).
///
/// The background is the last field.  ANSI colours 0-6 and 8 are dark.
///
/// The field is parsed as a number.  A string comparison against `"10"`
/// would call `"7"` dark and `"0"` light, which is backwards.
pub fn colorfgbg_is_dark(value: &str) -> bool {
    let parts: Vec<&str> = value.split(';').collect();
    let [.., bg] = parts.as_slice() else {
        return false;
    };
    if parts.len() < 2 {
        return false;
    }
    matches!(bg.trim().parse::<u8>(), Ok(0..=6 | 8))
}
