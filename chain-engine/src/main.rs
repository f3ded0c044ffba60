use std::sync::Arc;

use anyhow::{Context, Result, bail};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

use chain_core::Dictionary;
use chain_engine::{Config, WordChainEngine};
use chain_types::{RoomId, SessionEvent, UserId};

/// Line-oriented stand-in for the chat platform: inbound commands arrive
/// one per line, outbound session events are printed as JSON for the
/// messaging layer to deliver.
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting word-chain engine...");

    let config = Config::from_env();
    let dictionary = match Dictionary::load(&config.words_file) {
        Ok(dict) => Arc::new(dict),
        Err(e) => {
            error!("Failed to load word list '{}': {}", config.words_file, e);
            error!("Set WORDS_FILE to a newline-delimited list of Korean nouns.");
            std::process::exit(1);
        }
    };

    let engine = WordChainEngine::new(dictionary);
    info!("Ready. Commands: start <room> | begin <room> | submit <room> <user> <word> | end <room> | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" {
            break;
        }
        match dispatch(&engine, line).await {
            Ok(Some(event)) => println!("{}", serde_json::to_string(&event)?),
            Ok(None) => println!("ok"),
            Err(e) => println!("! {e}"),
        }
    }

    info!("Engine shutdown complete.");
    Ok(())
}

async fn dispatch(engine: &WordChainEngine, line: &str) -> Result<Option<SessionEvent>> {
    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or_default();
    match verb {
        "start" => {
            engine.start_command(parse_room(parts.next())?).await?;
            Ok(None)
        }
        "begin" => {
            let event = engine.start_control_pressed(parse_room(parts.next())?).await?;
            Ok(Some(event))
        }
        "submit" => {
            let room = parse_room(parts.next())?;
            let user = UserId(
                parts
                    .next()
                    .context("usage: submit <room> <user> <word>")?
                    .parse()
                    .context("user id must be a number")?,
            );
            let word = parts.next().context("usage: submit <room> <user> <word>")?;
            let event = engine.submit_word(room, user, word).await?;
            Ok(Some(event))
        }
        "end" => {
            let event = engine.manual_end(parse_room(parts.next())?).await?;
            Ok(Some(event))
        }
        other => bail!("unknown command '{other}'"),
    }
}

fn parse_room(arg: Option<&str>) -> Result<RoomId> {
    let raw = arg.context("missing room id")?;
    let id = raw
        .parse()
        .with_context(|| format!("room id '{raw}' must be a number"))?;
    Ok(RoomId(id))
}
