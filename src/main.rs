//! # Study Buddy - AI Study Assistant
//!
//! Entry point: a chat TUI for studying, with quizzes and to-do lists generated
//! for the subjects you talk about, plus one-shot CLI modes.
//!
//! ## Features
//! - Interactive terminal UI (chat, to-do lists, quizzes)
//! - Single prompt mode with `-p` or `--prompt`
//! - `quiz` and `todo` subcommands
//! - Configuration from environment, `.env`, or saved settings

mod cli;
mod core;
mod run;
mod tui;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands, ConfigAction};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);
    log::info!("{} {} starting", core::app::NAME, core::app::VERSION);

    match &args.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = Args::command();
            cli::generate(*shell, &mut cmd, core::app::NAME, &mut std::io::stdout());
            return Ok(());
        }
        Some(Commands::Config { action }) => {
            let result = match action {
                Some(ConfigAction::SetApiKey { key }) => {
                    core::cli::run_config_set_api_key(key.clone())
                }
                Some(ConfigAction::SetModel { model }) => core::cli::run_config_set_model(model),
                None => {
                    core::cli::run_config(args.model.as_deref());
                    Ok(())
                }
            };
            if let Err(e) = result {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
            return Ok(());
        }
        _ => {}
    }

    // Load application configuration (print user-friendly message; exit uses Display not Debug)
    let config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let model = args.model.clone().unwrap_or_else(|| config.model_id.clone());

    let result = match (&args.command, &args.prompt) {
        (Some(Commands::Quiz { subject }), _) => run::run_quiz(subject, &config, &model).await,
        (Some(Commands::Todo { subject }), _) => run::run_todo(subject, &config, &model).await,
        (_, Some(prompt)) => run::run_single_prompt(prompt, &config, &model).await,
        _ => return run::launch_tui(config, model).await,
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
