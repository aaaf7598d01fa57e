use sha256::{
    sha256::Sha256,
    source::{ByteSource, FileSource, StdinSource},
};

use anyhow::{Context, Result};
use log::warn;
use std::{env, process};

const USAGE: &str = "Usage: sha256 [FILE]...\n\nWith no FILE, or when FILE is -, read standard input.";

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return;
    }

    let mut sources: Vec<Box<dyn ByteSource>> = if args.is_empty() {
        vec![Box::new(StdinSource::stdin())]
    } else {
        args.iter()
            .map(|arg| -> Box<dyn ByteSource> {
                match arg.as_str() {
                    "-" => Box::new(StdinSource::stdin()),
                    path => Box::new(FileSource::new(path)),
                }
            })
            .collect()
    };

    let mut engine = Sha256::new();
    let mut failed = false;

    for source in sources.iter_mut() {
        match hash_source(&mut engine, source.as_mut()) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                eprintln!("sha256: {e:#}");
                failed = true;
            }
        }
    }

    if failed {
        process::exit(1);
    }
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// Fetch one message and render `<hex digest>  <name>`
fn hash_source(engine: &mut Sha256, source: &mut dyn ByteSource) -> Result<String> {
    let message = source.fetch().context("unable to read input")?;

    if message.is_empty() {
        warn!("{} is empty, hashing the empty message", source.name());
    }

    let digest = engine.hash(&message);
    Ok(format!("{digest}  {}", source.name()))
}
