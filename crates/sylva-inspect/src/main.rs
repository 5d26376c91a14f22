//! `sylva-inspect`: decode, re-encode and browse Sylva wire data.
//!
//! Input is JSON lines (one wire value per line) from a file or stdin.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Map, Value};
use tracing::{debug, error, info};

use sylva_ecs::prelude::*;
use sylva_events::prelude::*;

#[derive(Parser)]
#[command(
    name = "sylva-inspect",
    version,
    about = "Sylva entity and event wire inspection tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode entities and print them keyed by property name.
    Decode {
        /// Decode as a client: drop components that fail instead of stopping.
        #[arg(long)]
        client: bool,
        /// Treat each line as a delta; cleared components print as null.
        #[arg(long)]
        delta: bool,
        /// JSON-lines input; stdin when omitted.
        input: Option<PathBuf>,
    },
    /// Decode on the server path and re-encode for a target.
    Reencode {
        /// `server` or a viewer entity id.
        #[arg(long = "for", value_name = "server|VIEWER", value_parser = parse_target)]
        target: SerializeTarget,
        /// Keep clears.
        #[arg(long)]
        delta: bool,
        /// JSON-lines input; stdin when omitted.
        input: Option<PathBuf>,
    },
    /// Decode event payloads and print them back in canonical form.
    Events {
        /// JSON-lines input; stdin when omitted.
        input: Option<PathBuf>,
    },
    /// Print the component registry.
    Registry,
}

fn parse_target(raw: &str) -> Result<SerializeTarget, String> {
    if raw.eq_ignore_ascii_case("server") {
        return Ok(SerializeTarget::Server);
    }
    raw.parse::<u64>()
        .ok()
        .and_then(EntityId::new)
        .map(SerializeTarget::client)
        .ok_or_else(|| format!("expected 'server' or a non-zero entity id, got {raw:?}"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Decode {
            client,
            delta,
            input,
        } => {
            let options = if client {
                DecodeOptions::client()
            } else {
                DecodeOptions::server()
            }
            .with_delta(delta);
            for_each_line(input, |raw| {
                let rendered = if delta {
                    render_delta(&decode_delta(raw, &options)?)
                } else {
                    render_entity(&decode_entity(raw, &options)?)
                };
                Ok(rendered)
            })
        }
        Command::Reencode {
            target,
            delta,
            input,
        } => {
            let options = DecodeOptions::server().with_delta(delta);
            for_each_line(input, |raw| {
                let slots = decode_delta(raw, &options)?;
                Ok(encode_entity(target, &slots, delta))
            })
        }
        Command::Events { input } => for_each_line(input, |raw| Ok(encode_event(&decode_event(raw)?))),
        Command::Registry => {
            print_registry();
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Line processing
// ---------------------------------------------------------------------------

/// Run `handle` over every non-blank line and print each result as one JSON
/// line. Failing lines are logged and counted; any failure fails the run.
fn for_each_line<F>(input: Option<PathBuf>, mut handle: F) -> Result<()>
where
    F: FnMut(&Value) -> Result<Value>,
{
    let reader: Box<dyn BufRead> = match &input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("open input {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut total = 0usize;
    let mut failed = 0usize;
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("read line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }
        total += 1;
        let outcome = serde_json::from_str::<Value>(&line)
            .context("parse json")
            .and_then(|raw| handle(&raw));
        match outcome {
            Ok(value) => {
                let text = serde_json::to_string(&value).context("serialize json")?;
                println!("{text}");
            }
            Err(e) => {
                failed += 1;
                error!(line = line_no, error = %format!("{e:#}"), "line failed");
            }
        }
    }
    debug!(total, failed, "input processed");

    if failed > 0 {
        bail!("{failed} of {total} lines failed");
    }
    info!(total, "done");
    Ok(())
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn render_entity(entity: &Entity) -> Value {
    let components: Map<String, Value> = entity
        .components()
        .map(|c| (c.kind().name().to_owned(), c.to_named()))
        .collect();
    json!({ "id": entity.id().to_raw(), "components": components })
}

fn render_delta(delta: &EntityDelta) -> Value {
    let components: Map<String, Value> = delta
        .slots()
        .filter_map(|(kind, slot)| match slot {
            Slot::Set(c) => Some((kind.name().to_owned(), c.to_named())),
            Slot::Cleared => Some((kind.name().to_owned(), Value::Null)),
            Slot::Unchanged => None,
        })
        .collect();
    json!({ "id": delta.id().to_raw(), "components": components })
}

fn print_registry() {
    println!("{:>5}  {:<36} {:<8} {}", "id", "name", "vis", "hfc");
    for entry in REGISTRY {
        let visibility = match entry.visibility {
            Visibility::Public => "public",
            Visibility::Owner => "owner",
            Visibility::Server => "server",
        };
        let hfc = if entry.kind.is_high_frequency() { "yes" } else { "" };
        println!("{:>5}  {:<36} {:<8} {}", entry.id, entry.name, visibility, hfc);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
