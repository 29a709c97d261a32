// gitmoji command line entry point.
// Lists cached gitmoji or resolves a single code.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use gitmoji_cache::{CacheConfig, GitmojiCache, Result, find_by_code};

#[derive(Parser, Debug)]
#[command(name = "gitmoji")]
#[command(about = "Look up gitmoji from a locally cached list")]
#[command(version)]
struct Args {
    /// Cache file to use (default: ~/.config/gitmoji-cache/gitmoji.json)
    #[arg(long, global = true)]
    cache_file: Option<PathBuf>,

    /// URL to fetch the gitmoji list from
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every gitmoji
    List,
    /// Print the gitmoji for a code, e.g. `:art:` or `art`
    Show { code: String },
}

/// Initialize the tracing subscriber, controlled by RUST_LOG.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn config_from(args: &Args) -> Result<CacheConfig> {
    let mut config = match &args.cache_file {
        Some(path) => CacheConfig::new(path, gitmoji_cache::DEFAULT_SOURCE_URL),
        None => CacheConfig::from_home()?,
    };
    if let Some(url) = &args.url {
        config = config.with_source_url(url);
    }
    Ok(config)
}

async fn run(args: Args) -> Result<bool> {
    let cache = GitmojiCache::new(config_from(&args)?)?;
    let gitmoji = cache.get_entries().await?;

    match args.command.unwrap_or(Command::List) {
        Command::List => {
            for g in &gitmoji {
                println!("{}  {:<28} {}", g.emoji, g.code, g.description);
            }
            Ok(true)
        }
        Command::Show { code } => match find_by_code(&gitmoji, &code) {
            Some(g) => {
                println!("{} {} - {}", g.emoji, g.code, g.description);
                Ok(true)
            }
            None => {
                eprintln!("unknown gitmoji: {code}");
                Ok(false)
            }
        },
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run(Args::parse()).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
