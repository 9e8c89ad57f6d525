mod app;
mod clipboard;
mod config;
mod input;
mod openai;
mod palette;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "brandhue", version, about = "Brand color palettes from a language model")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Chat-completion API key. Kept in memory only.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Override the model from the config file.
    #[arg(long)]
    model: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Fetch a palette once and print it (headless).
    Fetch {
        company: String,
        /// Print a JSON array instead of one color per line.
        #[arg(long)]
        json: bool,
    },
    /// Inspect the config file.
    Config {
        #[command(subcommand)]
        cmd: ConfigCommand,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Print the config file location.
    Path,
    /// Print the effective config.
    Show,
}

enum LogTarget {
    File(PathBuf),
    Stderr,
}

fn init_logging(level: &str, target: LogTarget) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match target {
        // The terminal belongs to the UI; logs go to a file instead.
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create dir {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("open {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        LogTarget::Stderr => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut cfg = config::load(cli.config.as_deref()).context("load config")?;
    if let Some(model) = cli.model.clone() {
        cfg.openai.model = model;
    }

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            init_logging(
                &cfg.log.level,
                LogTarget::File(cfg.paths.data_dir.join("brandhue.log")),
            )?;
            tracing::info!(model = %cfg.openai.model, "starting tui");

            let mouse = cfg.input.mouse;
            let mut app = app::App::new(cfg, cli.api_key)?;
            let mut terminal = tui::TerminalGuard::enter(mouse).context("init terminal")?;
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Fetch { company, json } => {
            init_logging(&cfg.log.level, LogTarget::Stderr)?;

            let client = openai::OpenAiClient::new(&cfg.openai.base_url, &cfg.openai.model)?;
            tracing::debug!(model = client.model(), "fetching palette");

            let mut session = app::session::PaletteSession::new(company);
            if let Some(key) = cli.api_key {
                session.set_api_key(key);
            }
            let colors = session
                .request_palette(&client)
                .await
                .context("fetch palette")?;

            if json {
                println!("{}", serde_json::to_string(&colors)?);
            } else {
                for color in colors {
                    println!("{color}");
                }
            }
        }
        Command::Config { cmd } => match cmd {
            ConfigCommand::Path => {
                let path = match cli.config {
                    Some(p) => p,
                    None => config::default_config_path()?,
                };
                println!("{}", path.display());
            }
            ConfigCommand::Show => {
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}
