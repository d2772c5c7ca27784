//! Color-scheme capability.
//!
//! Panels ask once per render whether the host prefers a dark palette and
//! pick the dark or light variant of their images accordingly.

use std::env;

/// Environment variable forcing the scheme: `dark` or `light`.
pub const SCHEME_OVERRIDE_VAR: &str = "FOLIO_COLOR_SCHEME";

/// Environment variable set by many terminals as `"<fg>;<bg>"` palette indices.
pub const COLORFGBG_VAR: &str = "COLORFGBG";

/// Answers whether the host prefers a dark color scheme.
pub trait ColorScheme {
    /// `true` for a dark scheme.
    fn prefers_dark(&self) -> bool;
}

impl ColorScheme for bool {
    fn prefers_dark(&self) -> bool {
        *self
    }
}

impl<F> ColorScheme for F
where
    F: Fn() -> bool,
{
    fn prefers_dark(&self) -> bool {
        self()
    }
}

/// Color scheme read from the process environment.
///
/// `FOLIO_COLOR_SCHEME` wins when it holds `dark` or `light`. Otherwise the
/// background index of `COLORFGBG` decides: the standard dark palette entries
/// (0-6 and 8) mean dark. Without either hint the scheme is dark.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvColorScheme {
    dark: bool,
}

impl EnvColorScheme {
    /// Read the environment now.
    #[must_use]
    pub fn from_env() -> Self {
        let forced = env::var(SCHEME_OVERRIDE_VAR).ok();
        let colorfgbg = env::var(COLORFGBG_VAR).ok();
        Self::from_values(forced.as_deref(), colorfgbg.as_deref())
    }

    /// Decide from explicit values of the two variables.
    #[must_use]
    pub fn from_values(forced: Option<&str>, colorfgbg: Option<&str>) -> Self {
        let dark = forced
            .and_then(parse_override)
            .or_else(|| colorfgbg.and_then(parse_colorfgbg))
            .unwrap_or(true);
        Self { dark }
    }
}

impl Default for EnvColorScheme {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ColorScheme for EnvColorScheme {
    fn prefers_dark(&self) -> bool {
        self.dark
    }
}

fn parse_override(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

/// `"15;0"` and `"15;default;0"` both name the background last.
fn parse_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(bg, 0..=6 | 8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_and_closure_schemes() {
        assert!(true.prefers_dark());
        assert!(!false.prefers_dark());

        let scheme = || false;
        assert!(!scheme.prefers_dark());
    }

    #[test]
    fn test_override_wins() {
        let scheme = EnvColorScheme::from_values(Some("light"), Some("15;0"));
        assert!(!scheme.prefers_dark());
        let scheme = EnvColorScheme::from_values(Some(" DARK "), Some("0;15"));
        assert!(scheme.prefers_dark());
    }

    #[test]
    fn test_colorfgbg_background_index() {
        assert!(EnvColorScheme::from_values(None, Some("15;0")).prefers_dark());
        assert!(!EnvColorScheme::from_values(None, Some("0;15")).prefers_dark());
        assert!(!EnvColorScheme::from_values(None, Some("0;default;7")).prefers_dark());
        assert!(EnvColorScheme::from_values(None, Some("7;8")).prefers_dark());
    }

    #[test]
    fn test_unknown_values_fall_back_to_dark() {
        assert!(EnvColorScheme::from_values(Some("sepia"), None).prefers_dark());
        assert!(EnvColorScheme::from_values(None, Some("garbage")).prefers_dark());
        assert!(EnvColorScheme::from_values(None, None).prefers_dark());
    }
}
