use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "dayboard-cli", version, about = "Dayboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Profile listing
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Event listing and filtering
    Event {
        #[command(subcommand)]
        action: commands::event::EventAction,
    },
    /// Summary generation
    Summary {
        #[command(subcommand)]
        action: commands::summary::SummaryAction,
    },
    /// School-hours window status
    School {
        #[command(subcommand)]
        action: commands::school::SchoolAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Full dashboard snapshot
    Dashboard {
        #[command(subcommand)]
        action: commands::dashboard::DashboardAction,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Event { action } => commands::event::run(action),
        Commands::Summary { action } => commands::summary::run(action).await,
        Commands::School { action } => commands::school::run(action).await,
        Commands::Config { action } => commands::config::run(action),
        Commands::Dashboard { action } => commands::dashboard::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
