use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use clinidash::config::Config;
use clinidash::logger::{setup_file_logging, Logger};
use clinidash::seed::SeedData;
use clinidash::ui::{run_app, AppComponent};
use clinidash::utils::datetime::local_now;

#[derive(Parser)]
#[command(name = "clinidash")]
#[command(about = "Terminal clinical dashboard: patient directory and to-do panel")]
struct Cli {
    /// Config file to use instead of ./clinidash.toml or the XDG config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Section to open first (today, inbox, upcoming, project-<id>, label-<id>, ...)
    #[arg(short, long)]
    section: Option<String>,

    /// JSON fixture to load instead of the built-in caseload
    #[arg(short, long)]
    fixture: Option<PathBuf>,

    /// Write a default config file (to the given path or the XDG location) and exit
    #[arg(long, value_name = "PATH")]
    generate_config: Option<Option<PathBuf>>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(target) = cli.generate_config {
        let path = match target {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    if let Some(section) = cli.section {
        config.ui.default_section = section;
    }

    if let Some(path) = setup_file_logging(&config.logging)? {
        log::info!("Logging to {}", path.display());
    }

    let seed = match cli.fixture.or_else(|| config.data.fixture_path.clone()) {
        Some(path) => SeedData::load_from_file(&path)
            .with_context(|| format!("Failed to load fixture {}", path.display()))?,
        None => SeedData::builtin(local_now().date()),
    };
    let (session, directory) = seed.into_session(config.upcoming_window())?;

    let app = AppComponent::new(session, directory, &config, Logger::new());
    run_app(app, config.ui.mouse_enabled).await
}
