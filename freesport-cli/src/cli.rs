use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(
    name = "freesport",
    version,
    about = "Operator CLI for the Freesport site: update the stream, manage the schedule and news"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to an alternate config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Resource API endpoint (overrides the config file)
    #[arg(long, global = true, env = "FREESPORT_API_URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite a stream link into its embeddable player URL (no network)
    Resolve {
        /// Raw stream link as pasted from the browser
        url: String,

        /// Parent hostname for Twitch embeds (overrides the config file)
        #[arg(long)]
        parent: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
        output: OutputFormat,
    },

    /// Load the public page data: stream, then schedule, then news
    Show {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
        output: OutputFormat,
    },

    /// Inspect or replace the current stream
    #[command(subcommand)]
    Stream(StreamCommand),

    /// Manage schedule events
    #[command(subcommand)]
    Schedule(ScheduleCommand),

    /// Manage news posts
    #[command(subcommand)]
    News(NewsCommand),

    /// Store the admin password (prompts when not given)
    Login {
        password: Option<String>,
    },

    /// Forget the stored admin password
    Logout,

    /// Inspect or reset the config file
    Config {
        /// Display the current configuration
        #[arg(long)]
        show: bool,

        /// Reset the configuration to defaults
        #[arg(long)]
        reset: bool,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum StreamCommand {
    /// Show the current stream record
    Show {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
        output: OutputFormat,
    },

    /// Normalize a stream link and make it the current stream
    Set {
        /// Raw stream link; rewritten to an embed URL before upload
        url: String,

        /// Stream title shown on the site
        #[arg(long, default_value = "Прямая трансляция")]
        title: String,

        /// Sport label shown on the site
        #[arg(long, default_value = "Биатлон")]
        sport: String,

        /// Mark the stream as not live
        #[arg(long)]
        offline: bool,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
        output: OutputFormat,
    },
}

#[derive(Subcommand)]
pub enum ScheduleCommand {
    /// List schedule events
    List {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
        output: OutputFormat,
    },

    /// Add a schedule event
    Add {
        #[arg(long)]
        title: String,

        /// Event date (as displayed, e.g. 2026-02-14)
        #[arg(long)]
        date: String,

        /// Event time (as displayed, e.g. 18:30)
        #[arg(long)]
        time: String,

        #[arg(long)]
        sport: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Delete a schedule event by id
    Remove {
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum NewsCommand {
    /// List news posts
    List {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
        output: OutputFormat,
    },

    /// Add a news post
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        content: String,

        #[arg(long)]
        image_url: String,
    },

    /// Delete a news post by id
    Remove {
        id: i64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
    JsonCompact,
    Table,
}

impl Commands {
    /// Output format selected by the command, when it has one. Drives the
    /// shape of top-level error reporting.
    pub fn output_format(&self) -> Option<OutputFormat> {
        match self {
            Commands::Resolve { output, .. } | Commands::Show { output } => Some(*output),
            Commands::Stream(StreamCommand::Show { output })
            | Commands::Stream(StreamCommand::Set { output, .. }) => Some(*output),
            Commands::Schedule(ScheduleCommand::List { output }) => Some(*output),
            Commands::News(NewsCommand::List { output }) => Some(*output),
            _ => None,
        }
    }
}
