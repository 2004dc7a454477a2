//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{self, ServeOverrides};
use skillpulse::config::Config;
use skillpulse::output::OutputMode;

/// skillpulse - Skill-based task assignment and contributor behavior scoring
#[derive(Parser, Debug)]
#[command(
    name = "skillpulse",
    version,
    about = "Skill-based task assignment and contributor behavior scoring",
    long_about = "Match tasks to the users whose skills cover them best.\n\n\
                  Behavior records (commits, last commit time, file edits) are turned\n\
                  into activity metrics, alerts and a leaderboard."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ~/.config/skillpulse/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// JSON file holding behavior records
        #[arg(long = "data-file")]
        data_file: Option<PathBuf>,
    },

    /// Show behavior metrics for a user
    Metrics {
        /// User ID
        user: String,

        /// Status of the user's task: todo, in_progress, done
        #[arg(short = 's', long = "task-status")]
        task_status: Option<String>,
    },

    /// Show the top users by behavior score
    Leaderboard,

    /// Show who the matcher would pick for a set of skills
    Suggest {
        /// Required skills
        #[arg(long, value_delimiter = ',', required = true)]
        skills: Vec<String>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = OutputMode::from_json_flag(cli.json);

    match cli.command {
        Some(Command::Version) => {
            print_version(output_mode);
            Ok(())
        },
        Some(command) => {
            let config = Config::load(cli.config.as_deref())?;
            log::debug!("Matching threshold {}", config.matching.threshold);
            match command {
                Command::Serve {
                    host,
                    port,
                    data_file,
                } => commands::serve(
                    config,
                    ServeOverrides {
                        host,
                        port,
                        data_file,
                    },
                ),
                Command::Metrics { user, task_status } => {
                    commands::metrics(&config, &user, task_status.as_deref(), output_mode)
                },
                Command::Leaderboard => commands::leaderboard(&config, output_mode),
                Command::Suggest { skills } => commands::suggest(&config, &skills, output_mode),
                Command::Version => {
                    print_version(output_mode);
                    Ok(())
                },
            }
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": skillpulse::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("skillpulse v{}", skillpulse::VERSION);
                println!("\nRun 'skillpulse --help' for usage");
                println!("Run 'skillpulse serve' to start the API");
            }
            Ok(())
        },
    }
}

fn print_version(output_mode: OutputMode) {
    if output_mode == OutputMode::Json {
        println!("{}", serde_json::json!({ "version": skillpulse::VERSION }));
    } else {
        println!("skillpulse v{}", skillpulse::VERSION);
    }
}
