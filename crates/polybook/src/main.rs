//! PolyBook CLI
//!
//! Browse the Polygon UI design tokens and export component stylesheets.
//!
//! Usage:
//!   polybook families --swatches
//!   polybook color blue 5 --scheme dark
//!   polybook export button --width 480 --out qss/

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polybook::{commands, PolybookConfig};
use polygon_theme::ColorScheme;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "polybook")]
#[command(author, version, about = "Polygon UI theme catalog", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./polybook.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Theme settings JSON (overrides the config file)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Color scheme override (light, dark)
    #[arg(long, global = true)]
    scheme: Option<ColorScheme>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List color families and aliases
    Families {
        /// Show every shade of every family
        #[arg(long)]
        swatches: bool,
    },

    /// Look up one shade
    Color {
        family: String,
        shade: usize,
    },

    /// Report shade pairs below WCAG AA contrast
    Contrast {
        /// Exit with an error if any pair fails
        #[arg(long)]
        strict: bool,
    },

    /// List catalog components and their default props
    Components,

    /// Print the global theme stylesheet
    Theme,

    /// Write stylesheets for the catalog
    Export {
        /// Only this component
        component: Option<String>,

        /// Viewport width to resolve responsive props at
        #[arg(long)]
        width: Option<u32>,

        /// Output directory
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Create or validate a settings file
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Write the default settings
    Init {
        file: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate a settings file
    Check { file: PathBuf },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    run(cli)
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => PolybookConfig::load(path)?,
        None => PolybookConfig::load_from_dir(
            &std::env::current_dir().context("Cannot read the working directory")?,
        )?,
    };
    let settings = cli.settings.as_deref().or(config.settings.as_deref());
    let load = || commands::load_theme(settings, cli.scheme);

    match cli.command {
        Commands::Families { swatches } => {
            let theme = load()?;
            print!("{}", commands::families(&theme, swatches));
        }
        Commands::Color { family, shade } => {
            let theme = load()?;
            print!("{}", commands::color(&theme, &family, shade)?);
        }
        Commands::Contrast { strict } => {
            let theme = load()?;
            let report = commands::contrast(&theme);
            print!("{}", report.text);
            if strict && report.issues > 0 {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Components => print!("{}", commands::components()?),
        Commands::Theme => {
            let theme = load()?;
            print!("{}", commands::theme_sheet(&theme));
        }
        Commands::Export {
            component,
            width,
            out,
        } => {
            let theme = load()?;
            let width = width.unwrap_or(config.export.width);
            let out = out.unwrap_or_else(|| config.export.dir.clone());
            for path in commands::export(&theme, component.as_deref(), width, &out)? {
                println!("{}", path.display());
            }
        }
        Commands::Settings { action } => match action {
            SettingsAction::Init { file, force } => {
                commands::settings_init(&file, force)?;
                println!("Wrote {}", file.display());
            }
            SettingsAction::Check { file } => print!("{}", commands::settings_check(&file)?),
        },
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("polybook").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn theme_commands_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("polybook.toml");
        std::fs::write(&config, "").unwrap();
        let config = config.to_str().unwrap();

        for args in [
            vec!["families"],
            vec!["color", "blue", "5", "--scheme", "dark"],
            vec!["contrast"],
            vec!["components"],
            vec!["theme"],
        ] {
            let args: Vec<&str> = args.into_iter().chain(["--config", config]).collect();
            run(cli(&args)).unwrap_or_else(|err| panic!("{args:?}: {err:#}"));
        }
    }

    #[test]
    fn export_uses_saved_settings() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("polybook.toml");
        std::fs::write(&config, "").unwrap();
        let settings = dir.path().join("theme.json");
        let out = dir.path().join("qss");
        let [config, settings, out] = [&config, &settings, &out].map(|p| p.to_str().unwrap());

        let init = cli(&["settings", "init", settings, "--config", config]);
        run(init).unwrap();

        let export = cli(&["export", "card", "--out", out, "--settings", settings, "--config", config]);
        run(export).unwrap();
        assert!(dir.path().join("qss/card.qss").exists());
        assert!(dir.path().join("qss/theme.qss").exists());
    }

    #[test]
    fn unknown_family_is_an_error() {
        assert!(run(cli(&["color", "magenta", "5"])).is_err());
    }
}
