//! composer-bar - Entry Point

use clap::Parser;
use composer_bar::config::ResolvedConfig;
use composer_bar::model::{AppError, Height};
use composer_bar::replay::{self, OutputFormat};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// Chat composer bar input-mode demo
#[derive(Parser, Debug)]
#[command(name = "composer-bar")]
#[command(version)]
#[command(about = "Drive a chat composer bar's keyboard, voice, emoji and attachment modes")]
pub struct Args {
    /// Replay a JSONL input script headless (`-` reads stdin)
    #[arg(long, value_name = "FILE")]
    pub replay: Option<PathBuf>,

    /// Print one JSON report per replayed input
    #[arg(long, requires = "replay")]
    pub json: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Height reported by the simulated keyboard, in points
    #[arg(long, value_parser = parse_height)]
    pub keyboard_height: Option<Height>,

    /// Bottom safe-area inset, in points
    #[arg(long, value_parser = parse_height)]
    pub safe_area_inset: Option<Height>,
}

fn parse_height(raw: &str) -> Result<Height, String> {
    let value: f64 = raw.trim().parse().map_err(|e| format!("{e}"))?;
    Height::new(value).map_err(|e| e.to_string())
}

fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config_file = composer_bar::config::load_config_with_precedence(args.config.clone())?;
    let merged = composer_bar::config::merge_config(config_file)?;
    let with_env = composer_bar::config::apply_env_overrides(merged);
    Ok(composer_bar::config::apply_cli_overrides(
        with_env,
        args.keyboard_height,
        args.safe_area_inset,
    ))
}

fn run_replay(script: PathBuf, json: bool, config: &ResolvedConfig) -> Result<(), AppError> {
    let mut source = composer_bar::source::detect_input_source(Some(script))?;
    let entries = source.read_entries()?;
    info!(source = %source.describe(), lines = entries.len(), "replaying script");

    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = replay::replay(&entries, config.metrics(), format, &mut out)?;
    out.flush()?;

    info!(?summary, "replay complete");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = resolve_config(&args)?;

    composer_bar::logging::init(&config.log_file_path).map_err(AppError::from)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    match args.replay {
        Some(script) => run_replay(script, args.json, &config)?,
        None => composer_bar::view::run(&config).map_err(AppError::from)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["composer-bar", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["composer-bar", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["composer-bar"]);
        assert_eq!(args.replay, None);
        assert!(!args.json);
        assert_eq!(args.config, None);
        assert_eq!(args.keyboard_height, None);
        assert_eq!(args.safe_area_inset, None);
    }

    #[test]
    fn test_replay_path() {
        let args = Args::parse_from(["composer-bar", "--replay", "script.jsonl"]);
        assert_eq!(args.replay, Some(PathBuf::from("script.jsonl")));
    }

    #[test]
    fn test_replay_stdin_dash() {
        let args = Args::parse_from(["composer-bar", "--replay", "-", "--json"]);
        assert_eq!(args.replay, Some(PathBuf::from("-")));
        assert!(args.json);
    }

    #[test]
    fn test_json_requires_replay() {
        let result = Args::try_parse_from(["composer-bar", "--json"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_keyboard_height_parses() {
        let args = Args::parse_from(["composer-bar", "--keyboard-height", "336"]);
        assert_eq!(args.keyboard_height, Some(Height::new(336.0).unwrap()));
    }

    #[test]
    fn test_safe_area_inset_accepts_zero() {
        let args = Args::parse_from(["composer-bar", "--safe-area-inset", "0"]);
        assert_eq!(args.safe_area_inset, Some(Height::ZERO));
    }

    #[test]
    fn test_negative_height_rejected() {
        let result = Args::try_parse_from(["composer-bar", "--keyboard-height=-10"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ValueValidation
        );
    }

    #[test]
    fn test_non_numeric_height_rejected() {
        let result = Args::try_parse_from(["composer-bar", "--safe-area-inset", "tall"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["composer-bar", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "composer-bar",
            "--replay",
            "s.jsonl",
            "--json",
            "--keyboard-height",
            "300",
            "--safe-area-inset",
            "20",
        ]);
        assert_eq!(args.replay, Some(PathBuf::from("s.jsonl")));
        assert!(args.json);
        assert_eq!(args.keyboard_height, Some(Height::new(300.0).unwrap()));
        assert_eq!(args.safe_area_inset, Some(Height::new(20.0).unwrap()));
    }
}
