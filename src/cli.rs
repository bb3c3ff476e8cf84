//! Command-line arguments for the toolbar demo
//!
//! The demo replays a scripted focus/blur/format session against two
//! in-memory inputs and prints every published state.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::ToolbarSettings;

/// Replay a formatting-toolbar session
#[derive(Parser, Debug)]
#[command(name = "toolbar-demo", version, about = "Replay a formatting-toolbar session")]
pub struct CliArgs {
    /// Initial text of the first input
    #[arg(long, default_value = "hello world")]
    pub text: String,

    /// Selection in the first input, as START..END (char offsets)
    #[arg(long, value_name = "START..END", value_parser = parse_range)]
    pub select: Option<(usize, usize)>,

    /// Transform applied from the toolbar
    #[arg(long, value_enum, default_value_t = Transform::Upper)]
    pub transform: Transform,

    /// Override the configured hide delay
    #[arg(long, value_name = "MS")]
    pub hide_delay_ms: Option<u64>,

    /// Read settings from this file instead of the default config
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Sample transforms offered by the demo toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transform {
    Upper,
    Lower,
    Reverse,
    Trim,
}

impl Transform {
    pub fn apply(&self, text: &str) -> String {
        match self {
            Transform::Upper => text.to_uppercase(),
            Transform::Lower => text.to_lowercase(),
            Transform::Reverse => text.chars().rev().collect(),
            Transform::Trim => text.trim().to_string(),
        }
    }
}

/// Parse `START..END` into char offsets
pub fn parse_range(s: &str) -> Result<(usize, usize), String> {
    let (start, end) = s
        .split_once("..")
        .ok_or_else(|| format!("expected START..END, got '{}'", s))?;
    let start = start
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid start '{}': {}", start, e))?;
    let end = end
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid end '{}': {}", end, e))?;
    Ok((start, end))
}

/// Demo configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub text: String,
    /// Selection as (anchor, head); `None` leaves the caret at the end
    pub selection: Option<(usize, usize)>,
    pub transform: Transform,
    pub settings: ToolbarSettings,
}

impl CliArgs {
    /// Resolve settings (file, then flag overrides) into a demo configuration
    pub fn into_config(self) -> anyhow::Result<DemoConfig> {
        let mut settings = match &self.config {
            Some(path) => ToolbarSettings::load_from(path)?,
            None => ToolbarSettings::load(),
        };
        if let Some(ms) = self.hide_delay_ms {
            settings.hide_delay_ms = ms;
        }

        Ok(DemoConfig {
            text: self.text,
            selection: self.select,
            transform: self.transform,
            settings,
        })
    }
}

impl DemoConfig {
    pub fn hide_delay(&self) -> Duration {
        self.settings.hide_delay()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("0..5"), Ok((0, 5)));
        assert_eq!(parse_range(" 3 .. 8 "), Ok((3, 8)));
        assert!(parse_range("5").is_err());
        assert!(parse_range("a..3").is_err());
        assert!(parse_range("1..-2").is_err());
    }

    #[test]
    fn test_transforms() {
        assert_eq!(Transform::Upper.apply("abc"), "ABC");
        assert_eq!(Transform::Lower.apply("ABC"), "abc");
        assert_eq!(Transform::Reverse.apply("abc"), "cba");
        assert_eq!(Transform::Trim.apply("  abc "), "abc");
    }

    #[test]
    fn test_args_parse() {
        let args = CliArgs::parse_from([
            "toolbar-demo",
            "--text",
            "foo bar",
            "--select",
            "4..7",
            "--transform",
            "reverse",
            "--hide-delay-ms",
            "0",
        ]);
        assert_eq!(args.text, "foo bar");
        assert_eq!(args.select, Some((4, 7)));
        assert_eq!(args.transform, Transform::Reverse);
        assert_eq!(args.hide_delay_ms, Some(0));
    }

    #[test]
    fn test_into_config_reads_settings_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "hide_delay_ms: 250\nprevent_close_on_click: false\n").unwrap();

        let args = CliArgs::parse_from([
            "toolbar-demo",
            "--config",
            path.to_str().unwrap(),
            "--hide-delay-ms",
            "75",
        ]);
        let config = args.into_config().unwrap();
        assert_eq!(config.hide_delay(), Duration::from_millis(75));
        assert!(!config.settings.prevent_close_on_click);
    }

    #[test]
    fn test_into_config_missing_file_is_error() {
        let args = CliArgs::parse_from(["toolbar-demo", "--config", "/nonexistent/toolbar.yaml"]);
        assert!(args.into_config().is_err());
    }
}
