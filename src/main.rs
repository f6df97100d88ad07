use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use userdeck::config::Config;
use userdeck::logging::init_tracing;
use userdeck::ui::app::Tab;

#[derive(Parser, Debug)]
#[command(name = "userdeck", version, about = "Browse users and countries in the terminal")]
struct Cli {
    /// Config file (default: ~/.config/userdeck/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the user listing base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Value for the app-id header
    #[arg(long)]
    app_id: Option<String>,

    /// Tab shown on startup
    #[arg(long, value_enum, default_value_t = Tab::Cards)]
    tab: Tab,

    /// Log file (default: <cache dir>/userdeck/userdeck.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    if let Some(app_id) = cli.app_id {
        config.api.app_id = Some(app_id);
    }
    if let Some(log_file) = cli.log_file {
        config.logging.file = Some(log_file);
    }
    config.validate()?;

    init_tracing(&config.logging.level, &config.logging.resolved_file())?;
    tracing::info!(config = %config_path.display(), "starting userdeck");

    userdeck::ui::runtime::run(config, cli.tab)
}
