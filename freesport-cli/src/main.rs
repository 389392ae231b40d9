mod cli;
mod commands;
mod config;
mod error;
mod output;

use std::io::IsTerminal;
use std::process;

use clap::Parser;
#[cfg(feature = "colored-output")]
use colored::*;
use tracing::{Level, error};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use crate::{
    cli::{Args, Commands, NewsCommand, OutputFormat, ScheduleCommand, StreamCommand},
    commands::CommandExecutor,
    config::AppConfig,
    error::Result,
};

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let output_format = args.command.output_format();

    if let Err(e) = init_logging(args.verbose, args.quiet) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    if let Err(e) = run(args).await {
        match output_format {
            Some(OutputFormat::Json) | Some(OutputFormat::JsonCompact) => {
                let error_json = serde_json::json!({
                    "status": "error",
                    "message": e.to_string(),
                });
                println!("{}", serde_json::to_string(&error_json).unwrap());
            }
            _ => {
                error!("Application error: {}", e);
                #[cfg(feature = "colored-output")]
                {
                    eprintln!("{} {}", "Error:".red().bold(), e);
                }
                #[cfg(not(feature = "colored-output"))]
                {
                    eprintln!("Error: {}", e);
                }
            }
        }
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let config_path = args.config.clone();

    match args.command {
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Args::command();
            let bin_name = cmd.get_name().to_string();
            generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
            return Ok(());
        }

        Commands::Config { show, reset } => {
            if reset {
                AppConfig::reset(config_path.as_deref())?;
                println!("✓ Configuration reset to defaults");
            } else if show {
                let config = AppConfig::load(config_path.as_deref())?;
                println!("{}", config.show()?);
            } else {
                println!(
                    "Use --show to display current configuration or --reset to reset to defaults"
                );
            }
            return Ok(());
        }

        command => {
            let mut config = AppConfig::load(config_path.as_deref())?;
            if let Some(api_url) = args.api_url {
                config.api_url = api_url;
            }
            if let Some(timeout) = args.timeout {
                config.timeout_secs = timeout;
            }

            let colored = std::io::stdout().is_terminal();
            let mut executor = CommandExecutor::new(config, config_path, colored);

            match command {
                Commands::Resolve {
                    url,
                    parent,
                    output,
                } => executor.resolve(&url, parent.as_deref(), &output)?,

                Commands::Show { output } => executor.show(&output).await?,

                Commands::Stream(StreamCommand::Show { output }) => {
                    executor.stream_show(&output).await?;
                }
                Commands::Stream(StreamCommand::Set {
                    url,
                    title,
                    sport,
                    offline,
                    output,
                }) => {
                    executor
                        .stream_set(&url, title, sport, offline, &output)
                        .await?;
                }

                Commands::Schedule(ScheduleCommand::List { output }) => {
                    executor.schedule_list(&output).await?;
                }
                Commands::Schedule(ScheduleCommand::Add {
                    title,
                    date,
                    time,
                    sport,
                    description,
                }) => {
                    executor
                        .schedule_add(title, date, time, sport, description)
                        .await?;
                }
                Commands::Schedule(ScheduleCommand::Remove { id }) => {
                    executor.schedule_remove(id).await?;
                }

                Commands::News(NewsCommand::List { output }) => {
                    executor.news_list(&output).await?;
                }
                Commands::News(NewsCommand::Add {
                    title,
                    content,
                    image_url,
                }) => {
                    executor.news_add(title, content, image_url).await?;
                }
                Commands::News(NewsCommand::Remove { id }) => {
                    executor.news_remove(id).await?;
                }

                Commands::Login { password } => executor.login(password)?,
                Commands::Logout => executor.logout()?,

                // Handled above; unreachable through this arm.
                Commands::Completions { .. } | Commands::Config { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    let subscriber = tracing_subscriber::registry().with(filter);

    subscriber
        .with(fmt::layer().with_target(false).with_level(verbose))
        .init();
    Ok(())
}
