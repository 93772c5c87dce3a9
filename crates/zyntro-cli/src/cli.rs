use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("ZYNTRO_COMMIT_HASH"),
    ")"
);

#[derive(Parser)]
#[command(name = "zyntro")]
#[command(about = "Project backlog and dashboard client", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    /// Workspace file with projects, sprints and issues (or set ZYNTRO_FILE)
    #[arg(long, value_name = "FILE", env = "ZYNTRO_FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Actor whose projects are in scope (or set ZYNTRO_ACTOR)
    #[arg(long, value_name = "USER_ID", env = "ZYNTRO_ACTOR", global = true)]
    pub actor: Option<String>,

    /// Key-value file remembering the active project (or set ZYNTRO_STORAGE)
    #[arg(long, value_name = "PATH", env = "ZYNTRO_STORAGE", global = true)]
    pub storage: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Project scope operations
    Project(ProjectCommand),
    /// Show the backlog task tree of the active project
    Backlog(BacklogArgs),
    /// Summaries for the active project
    Dashboard,
    /// Days and months left until a date
    TimeLeft(TimeLeftArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct ProjectCommand {
    #[command(subcommand)]
    pub action: ProjectAction,
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// List projects visible to the actor
    List,
    /// Show the active project
    Active,
    /// Make another project active
    Switch {
        #[arg(long)]
        id: String,
    },
}

#[derive(Args)]
pub struct BacklogArgs {
    /// Case-insensitive search over sprint and task titles
    #[arg(long, short, default_value = "")]
    pub query: String,

    /// Sprint groups to show expanded (repeatable)
    #[arg(long = "expand", value_name = "SPRINT_ID")]
    pub expand: Vec<String>,
}

#[derive(Args)]
pub struct TimeLeftArgs {
    /// Target date (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub date: String,

    /// Reference time instead of the current time
    #[arg(long)]
    pub now: Option<String>,
}
