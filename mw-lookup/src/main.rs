use std::{sync::Arc, time::Duration};

use anyhow::Context;
use clap::Parser;
use dictionary::{Dictionary, DictionaryConfig, ToolRegistry, TOOL_DESCRIPTION, TOOL_NAME};
use tracing_subscriber::EnvFilter;
use utilities::{input, parse_command, Command};

mod utilities;

/// Look words up in the Merriam-Webster collegiate dictionary.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Word to define. Starts an interactive prompt when omitted.
    word: Option<String>,

    /// Request timeout in seconds, overrides MW_TIMEOUT_SECS
    #[arg(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    // a missing .env is fine, the variables may come from the shell
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = DictionaryConfig::from_env().context("failed to load configuration")?;
    if let Some(seconds) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(seconds));
    }
    tracing::debug!(?config, "loaded configuration");

    let dict = Dictionary::new(config).context("failed to build the dictionary client")?;
    let mut registry = ToolRegistry::new();
    registry.register(TOOL_NAME, TOOL_DESCRIPTION, Arc::new(dict));

    if let Some(word) = cli.word {
        let definition = registry.call(TOOL_NAME, &word).await?;
        println!("*** Merriam-Webster output for '{}' ***", word.trim());
        println!("{definition}");
        return Ok(());
    }

    loop {
        let line = input(">> ")?;
        // end of input
        if line.is_empty() {
            break;
        }
        match parse_command(&line) {
            Some(Command::Exit) => break,
            Some(Command::Define(word)) => define_word(&registry, &word).await,
            Some(Command::Tools) => print_tools(&registry),
            Some(Command::Unknown(command)) => println!("Unknown command {command}."),
            None => {}
        }
    }
    Ok(())
}

async fn define_word(registry: &ToolRegistry, word: &str) {
    match registry.call(TOOL_NAME, word).await {
        Ok(definition) => println!("{definition}"),
        Err(error) => {
            println!("Encountered an error while searching for the word definition: {error}");
        }
    }
}

fn print_tools(registry: &ToolRegistry) {
    for tool in registry.describe() {
        println!("{}: {}", tool.name, tool.description);
    }
}
