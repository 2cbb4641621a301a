//! Environment-driven defaults
//!
//! Values are read once per process and cached. Explicit values passed to
//! [`TilerConfig::new`] always win over the environment.

use std::sync::OnceLock;

use crate::tiler::Axis;

/// Margin used when none is configured
pub const DEFAULT_MARGIN: usize = 5;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_axis(value: &str) -> Option<Axis> {
    match value.trim().to_ascii_lowercase().as_str() {
        "horizontal" | "h" | "cols" => Some(Axis::Horizontal),
        "vertical" | "v" | "rows" => Some(Axis::Vertical),
        _ => None,
    }
}

fn parse_env_axis(name: &str, default: Axis) -> Axis {
    std::env::var(name)
        .ok()
        .and_then(|v| parse_axis(&v))
        .unwrap_or(default)
}

static MARGIN: OnceLock<usize> = OnceLock::new();

/// Margin from `TILER_MARGIN`, default 5
pub fn default_margin() -> usize {
    *MARGIN.get_or_init(|| parse_env_usize("TILER_MARGIN", DEFAULT_MARGIN))
}

static AXIS: OnceLock<Axis> = OnceLock::new();

/// Axis from `TILER_AXIS` (`horizontal` or `vertical`), default horizontal
pub fn default_axis() -> Axis {
    *AXIS.get_or_init(|| parse_env_axis("TILER_AXIS", Axis::Horizontal))
}

/// Settings shared by a split and the merge that undoes it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilerConfig {
    /// Split direction
    pub axis: Axis,
    /// Overlap added on each side of every strip boundary
    pub margin: usize,
}

impl TilerConfig {
    /// Explicit settings
    pub fn new(axis: Axis, margin: usize) -> Self {
        Self { axis, margin }
    }
}

impl Default for TilerConfig {
    fn default() -> Self {
        Self::new(default_axis(), default_margin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_axis() {
        assert_eq!(parse_axis(" Vertical "), Some(Axis::Vertical));
        assert_eq!(parse_axis("h"), Some(Axis::Horizontal));
        assert_eq!(parse_axis("diagonal"), None);
    }

    #[test]
    fn test_unset_env_falls_back() {
        assert_eq!(parse_env_usize("TILER_TEST_UNSET_MARGIN", 7), 7);
        assert_eq!(
            parse_env_axis("TILER_TEST_UNSET_AXIS", Axis::Vertical),
            Axis::Vertical
        );
    }

    #[test]
    fn test_explicit_config() {
        let config = TilerConfig::new(Axis::Vertical, 12);
        assert_eq!(config.axis, Axis::Vertical);
        assert_eq!(config.margin, 12);
    }
}
