mod report;
mod source;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::services::{logging, Settings, ThemeChoice};
use crate::tui::{self, app::load_content, widgets::layout::GridLayout, Theme};

pub use report::{render_text, JsonReport};
pub use source::SourceArgs;

/// Terminal heatmap of a user's weekly review rhythm
#[derive(Parser)]
#[command(name = "rhythmview")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    source: SourceArgs,

    /// Label every n-th hour on the x axis (1-24)
    #[arg(long, value_name = "N", global = true, value_parser = clap::value_parser!(u8).range(1..=24))]
    hour_stride: Option<u8>,

    /// Colour theme
    #[arg(long, value_enum, global = true)]
    theme: Option<ThemeChoice>,

    /// Settings file (default: ~/.rhythmview/config.json)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Launch interactive TUI (default)
    Tui,

    /// Print the heatmap once as plain text
    Show,

    /// Print the dense grid as JSON
    Json {
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
}

impl Cli {
    /// Settings from file with command-line overrides applied
    fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load_from(path)?,
            None => Settings::load()?,
        };
        if let Some(stride) = self.hour_stride {
            settings.hour_stride = stride;
        }
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        settings.validate()?;
        Ok(settings)
    }

    pub fn run(self) -> anyhow::Result<()> {
        let command = self.command.unwrap_or(Commands::Tui);
        match command {
            Commands::Tui => {
                if let Ok(dir) = Settings::app_dir() {
                    logging::init_file(&dir.join("rhythmview.log"), self.verbose)?;
                }
            }
            Commands::Show | Commands::Json { .. } => logging::init_stderr(self.verbose),
        }

        let settings = self.settings()?;
        let layout = GridLayout::default().with_hour_stride(settings.hour_stride);
        let source = self.source.resolve(&settings)?;

        match command {
            Commands::Tui => {
                // Detect before raw mode is entered
                let theme = Theme::from_choice(settings.theme);
                tui::run(source, layout, theme)
            }
            Commands::Show => {
                let content = load_content(&source).map_err(anyhow::Error::msg)?;
                println!("{}", render_text(&content, layout, &source.describe()));
                Ok(())
            }
            Commands::Json { pretty } => {
                let content = load_content(&source).map_err(anyhow::Error::msg)?;
                let report = JsonReport::from_content(&content);
                let out = if pretty {
                    serde_json::to_string_pretty(&report)?
                } else {
                    serde_json::to_string(&report)?
                };
                println!("{}", out);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_from(["rhythmview"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parse_show_with_file() {
        let cli = Cli::try_parse_from(["rhythmview", "show", "--file", "r.json"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Show));
        assert_eq!(cli.source.file, Some(PathBuf::from("r.json")));
    }

    #[test]
    fn test_cli_parse_json_pretty() {
        let cli = Cli::try_parse_from(["rhythmview", "json", "--pretty", "--stdin"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Json { pretty: true }));
        assert!(cli.source.stdin);
    }

    #[test]
    fn test_cli_parse_user_and_overrides() {
        let cli = Cli::try_parse_from([
            "rhythmview",
            "--user",
            "u-abc",
            "--api",
            "http://api.test",
            "--hour-stride",
            "6",
            "--theme",
            "light",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.source.user.as_deref(), Some("u-abc"));
        assert_eq!(cli.hour_stride, Some(6));
        assert_eq!(cli.theme, Some(ThemeChoice::Light));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_rejects_bad_stride() {
        assert!(Cli::try_parse_from(["rhythmview", "--hour-stride", "0"]).is_err());
        assert!(Cli::try_parse_from(["rhythmview", "--hour-stride", "25"]).is_err());
    }

    #[test]
    fn test_settings_overrides_applied() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"hour_stride": 4, "theme": "dark"}"#).unwrap();

        let cli = Cli::try_parse_from([
            "rhythmview",
            "--config",
            path.to_str().unwrap(),
            "--theme",
            "light",
        ])
        .unwrap();
        let settings = cli.settings().unwrap();
        assert_eq!(settings.hour_stride, 4);
        assert_eq!(settings.theme, ThemeChoice::Light);
    }
}
