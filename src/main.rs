use anyhow::{Context, Result};
use clap::Parser;
use cliclack::input;
use console::style;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use stepwise::agent::Agent;
use stepwise::prompt::DEFAULT_QUERY;
use stepwise::providers::configs::base::ProviderConfig;
use stepwise::providers::configs::gemini::GeminiProviderConfig;
use stepwise::providers::gemini::GeminiProvider;
use stepwise::tools::{CommandPolicy, ToolRegistry};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Question to send to the model
    #[arg(short, long, default_value = DEFAULT_QUERY)]
    query: String,

    /// Ask for the question on the terminal instead
    #[arg(short, long, conflicts_with = "query")]
    interactive: bool,

    /// Model to use (can also be set via GEMINI_MODEL environment variable)
    #[arg(short, long)]
    model: Option<String>,

    /// Stop after this many model calls without a final answer
    #[arg(long)]
    max_turns: Option<usize>,

    /// Only let executeCommand run these programs (repeatable)
    #[arg(long = "allow-command", value_name = "PROGRAM")]
    allowed_commands: Vec<String>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "info,stepwise=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = GeminiProviderConfig::from_env()
        .context("GEMINI_API_KEY must be set in the environment or a .env file")?;
    if let Some(model) = cli.model {
        config.model = model;
    }
    let provider = GeminiProvider::new(config)?;

    let policy = if cli.allowed_commands.is_empty() {
        CommandPolicy::permissive()
    } else {
        CommandPolicy::allow_list(cli.allowed_commands)
    };

    let mut agent = Agent::new(
        Box::new(provider),
        ToolRegistry::with_command_policy(policy),
    );
    if let Some(max_turns) = cli.max_turns {
        agent = agent.with_max_turns(max_turns);
    }

    let query = if cli.interactive {
        input("Message:").placeholder(DEFAULT_QUERY).interact()?
    } else {
        cli.query
    };

    println!("{} {}", style("Query:").bold(), query);
    agent.reply(&query).await?;
    Ok(())
}
