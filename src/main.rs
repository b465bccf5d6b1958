use anyhow::{bail, Context, Result};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use checktoken::util::display::{print_listings, print_token_report, print_wallet_report};
use checktoken::{AnalyticsEngine, Config};

const USAGE: &str = "\
Usage: checktoken <COMMAND> [--config <PATH>] [--json]

Commands:
  token <ADDRESS>    Token profile with holder distribution and security score
  wallet <ADDRESS>   Wallet balances and recent swaps
  trending           Trending tokens
  new                Newly listed tokens";

#[derive(Debug, PartialEq)]
enum Command {
    Token(String),
    Wallet(String),
    Trending,
    NewListings,
}

#[derive(Debug, PartialEq)]
struct Cli {
    command: Command,
    config: Option<String>,
    json: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Cli> {
    let mut positional = Vec::new();
    let mut config = None;
    let mut json = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--config" => {
                config = Some(args.next().context("--config needs a path")?);
            }
            flag if flag.starts_with("--") => bail!("unknown flag {}", flag),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let command = match positional.next().as_deref() {
        Some("token") => Command::Token(positional.next().context("token needs an address")?),
        Some("wallet") => Command::Wallet(positional.next().context("wallet needs an address")?),
        Some("trending") => Command::Trending,
        Some("new") => Command::NewListings,
        Some(other) => bail!("unknown command {}", other),
        None => bail!("missing command"),
    };

    Ok(Cli { command, config, json })
}

fn init_tracing() -> Result<WorkerGuard> {
    std::fs::create_dir_all("logs")?;

    let file_appender = tracing_appender::rolling::daily("logs", "checktoken.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    // Reports go to stdout, so console logging stays on stderr
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .json()
        .with_current_span(false)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    Ok(guard)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    if !config.is_configured() {
        bail!("HELIUS_API_KEY and BIRDEYE_API_KEY must be set (environment or config file)");
    }
    let engine = AnalyticsEngine::from_config(&config)?;

    match cli.command {
        Command::Token(address) => {
            let profile = engine.token_profile(&address).await?;
            let report = AnalyticsEngine::security_report(&profile);
            if cli.json {
                print_json(&serde_json::json!({ "profile": profile, "security": report }))?;
            } else {
                print_token_report(&profile, &report);
            }
        }
        Command::Wallet(address) => {
            let profile = engine.wallet_profile(&address).await?;
            if cli.json {
                print_json(&profile)?;
            } else {
                print_wallet_report(&profile);
            }
        }
        Command::Trending => {
            let entries = engine.trending().await?;
            if cli.json {
                print_json(&entries)?;
            } else {
                print_listings("🔥 TRENDING", &entries);
            }
        }
        Command::NewListings => {
            let entries = engine.new_listings().await?;
            if cli.json {
                print_json(&entries)?;
            } else {
                print_listings("🆕 NEW LISTINGS", &entries);
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = match parse_args(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    let _guard = match init_tracing() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: failed to initialise logging: {}", e);
            std::process::exit(1);
        }
    };

    info!("🦡 CheckToken analytics");

    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_commands() {
        let cli = parse_args(args(&["token", "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263", "--json"])).unwrap();
        assert_eq!(
            cli.command,
            Command::Token("DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263".to_string())
        );
        assert!(cli.json);

        let cli = parse_args(args(&["--config", "checktoken.toml", "trending"])).unwrap();
        assert_eq!(cli.command, Command::Trending);
        assert_eq!(cli.config.as_deref(), Some("checktoken.toml"));
        assert!(!cli.json);

        assert_eq!(parse_args(args(&["new"])).unwrap().command, Command::NewListings);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["wallet"])).is_err());
        assert!(parse_args(args(&["price", "abc"])).is_err());
        assert!(parse_args(args(&["trending", "--verbose"])).is_err());
        assert!(parse_args(args(&["trending", "--config"])).is_err());
    }
}
