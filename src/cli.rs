//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  study-buddy                        Launch interactive TUI
  study-buddy -p \"explain osmosis\"   Single prompt, print the plain-text reply
  study-buddy -p -                   Read prompt from stdin
  study-buddy quiz Physics           Generate a quiz and answer it in the terminal
  study-buddy todo Chemistry         Print a study to-do list
  study-buddy config                 Show config paths and status
  study-buddy config set-api-key     Save the OpenRouter API key (reads stdin)
  study-buddy config set-model ID    Save the default model
  study-buddy completions bash       Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "A study assistant: chat, quizzes and to-do lists powered by an LLM",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Send a single prompt then exit (without opening the TUI)
    #[arg(
        short = 'p',
        long,
        help = "Ask a single question and print the answer (use '-' to read from stdin)"
    )]
    pub prompt: Option<String>,

    /// Override the model for this run
    #[arg(
        short = 'm',
        long,
        global = true,
        help = "Model ID (e.g. deepseek/deepseek-r1:free)"
    )]
    pub model: Option<String>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a multiple choice quiz on a subject and take it in the terminal
    Quiz {
        /// Subject to be quizzed on
        subject: String,
    },
    /// Generate a study to-do list for a subject
    Todo {
        /// Subject to plan for
        subject: String,
    },
    /// Show config paths, model, and API key status
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Save the API key in the settings file (reads stdin when KEY is omitted)
    SetApiKey {
        key: Option<String>,
    },
    /// Save the default model in the settings file
    SetModel {
        model: String,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// True when the run opens the TUI (no prompt, no subcommand).
    pub fn is_tui(&self) -> bool {
        self.prompt.is_none() && self.command.is_none()
    }
}
