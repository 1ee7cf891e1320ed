//! CLI frontend for the Yijing divination engine.

mod commands;

use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "yj",
    about = "Yijing: I Ching divination from six digits",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that asks for an interpretation.
#[derive(Args, Debug, Clone, Default)]
pub struct LlmArgs {
    /// API key (default: $OPENAI_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Model name (default: $OPENAI_MODEL or gpt-4o-mini)
    #[arg(long)]
    pub model: Option<String>,

    /// API root (default: $OPENAI_BASE_URL or https://api.openai.com/v1)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Skip the API and print the prompt as the interpretation
    #[arg(long)]
    pub dry_run: bool,

    /// RNG seed for auto-generated digits
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a hexagram and ask for an interpretation
    Divine {
        /// Six digits to cast from (prompted if omitted)
        #[arg(short, long)]
        numbers: Option<String>,

        /// Generate the digits at random instead of prompting
        #[arg(short, long, conflicts_with = "numbers")]
        random: bool,

        /// What the divination is about (prompted if omitted)
        #[arg(short, long)]
        query: Option<String>,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        llm: LlmArgs,
    },

    /// Answer a free-text request such as "career 385962"
    Ask {
        /// The request text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        #[command(flatten)]
        llm: LlmArgs,
    },

    /// Answer requests line by line until EOF or 'quit'
    Chat {
        #[command(flatten)]
        llm: LlmArgs,
    },

    /// Show one hexagram by key (e.g. 101100) or index (1-64)
    Show {
        /// Six-character 0/1 key or index
        hexagram: String,
    },

    /// List all 64 hexagrams
    List,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Divine {
            numbers,
            random,
            query,
            json,
            llm,
        } => commands::divine::run(
            &llm,
            &commands::divine::DivineOptions {
                numbers,
                random,
                query,
                json,
            },
        ),
        Commands::Ask { text, llm } => commands::ask::run(&llm, &text.join(" ")),
        Commands::Chat { llm } => commands::chat::run(&llm),
        Commands::Show { hexagram } => commands::show::run(&hexagram),
        Commands::List => commands::list::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
