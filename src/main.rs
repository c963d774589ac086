//! nycschools - NYC High School Browser
//!
//! Lists the city's public high schools and shows SAT averages for the selected one.

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use nycschools::data::{DataSource, HttpSource};
use nycschools::render::ui::{ColorTheme, TerminalUI, ThemeName};
use nycschools::{Application, Config};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Command::new("nycschools")
        .version(nycschools::VERSION)
        .about("Browse New York City high schools and their SAT averages")
        .long_about(
            "nycschools fetches the NYC DOE high school directory and SAT results from \
             the city's open-data portal and shows them in a scrollable terminal list.",
        )
        .arg(
            Arg::new("schools-url")
                .long("schools-url")
                .value_name("URL")
                .help("Override the school directory endpoint"),
        )
        .arg(
            Arg::new("scores-url")
                .long("scores-url")
                .value_name("URL")
                .help("Override the SAT results endpoint"),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .value_parser(value_parser!(ThemeName))
                .help("Color theme"),
        )
        .arg(
            Arg::new("no-mouse")
                .long("no-mouse")
                .action(ArgAction::SetTrue)
                .help("Disable mouse capture"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Configuration file (TOML)"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Write logs to this file"),
        )
        .get_matches();

    init_logging(matches.get_one::<PathBuf>("log-file").map(PathBuf::as_path))?;

    let mut config = Config::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    if let Some(url) = matches.get_one::<String>("schools-url") {
        config.schools_url = url.clone();
    }
    if let Some(url) = matches.get_one::<String>("scores-url") {
        config.scores_url = url.clone();
    }
    if let Some(theme) = matches.get_one::<ThemeName>("theme") {
        config.theme = *theme;
    }
    if matches.get_flag("no-mouse") {
        config.mouse = false;
    }
    config.validate()?;

    let source: Arc<dyn DataSource> = Arc::new(HttpSource::new(config.endpoints())?);
    let ui_renderer = Box::new(
        TerminalUI::with_theme(ColorTheme::from_name(config.theme))?.with_mouse(config.mouse),
    );

    let mut app = Application::new(source, ui_renderer);
    app.run().await?;

    Ok(())
}

/// The terminal is in raw alternate-screen mode while running, so logs only go to a
/// file unless RUST_LOG explicitly asks for stderr.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let default_filter = if log_file.is_some() { "info" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if let Some(path) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("cannot open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}
