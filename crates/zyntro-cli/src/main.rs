mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::{CliContext, ContextOptions};
use tracing_subscriber::EnvFilter;
use zyntro_core::AppConfig;

fn init_tracing() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("ZYNTRO_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        // stdout carries the JSON responses
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        tracing::debug!(error = ?err, "Command failed");
        output::output_error(&format!("{err:#}"));
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let options = ContextOptions {
        file: cli.file,
        actor: cli.actor,
        storage: cli.storage,
    };

    match cli.command {
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "zyntro", &mut std::io::stdout());
        }
        Commands::TimeLeft(args) => {
            handlers::time::handle(args)?;
        }
        Commands::Project(project_cmd) => {
            let ctx = CliContext::load(options, &AppConfig::load()).await?;
            handlers::project::handle(&ctx, project_cmd.action).await?;
        }
        Commands::Backlog(args) => {
            let ctx = CliContext::load(options, &AppConfig::load()).await?;
            handlers::backlog::handle(&ctx, args).await?;
        }
        Commands::Dashboard => {
            let ctx = CliContext::load(options, &AppConfig::load()).await?;
            handlers::dashboard::handle(&ctx).await?;
        }
    }

    Ok(())
}
