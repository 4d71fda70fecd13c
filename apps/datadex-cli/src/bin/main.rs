use std::env;
use std::path::PathBuf;

use datadex_core::config::Config;
use datadex_index::{DatasetIndex, DEFAULT_TOP_K};

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);
    if args.is_empty() {
        eprintln!("Usage: {} <stats|search> [args...]", prog);
        std::process::exit(1);
    }
    let cmd = args.remove(0);
    (cmd, args)
}

fn open_index(args: &[String], config: &Config) -> anyhow::Result<DatasetIndex> {
    // precedence: --dir flag > config/env
    let dir = args
        .iter()
        .position(|a| a == "--dir")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from)
        .unwrap_or_else(|| config.datasets_dir());
    let mut index = DatasetIndex::new(dir);
    index.load()?;
    Ok(index)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    let (cmd, args) = parse_args();
    match cmd.as_str() {
        "stats" => {
            let index = open_index(&args, &config)?;
            println!("{}", serde_json::to_string_pretty(&index.stats())?);
        }
        "search" => {
            let mut query = String::new();
            let mut top_k = DEFAULT_TOP_K;
            let mut i = 0;
            while i < args.len() {
                match args[i].as_str() {
                    "--dir" | "--k" if i + 1 >= args.len() => {
                        eprintln!("{} requires a value", args[i]);
                        std::process::exit(2);
                    }
                    "--dir" => i += 2,
                    "--k" => {
                        top_k = args[i + 1].parse().unwrap_or(top_k);
                        i += 2;
                    }
                    s if s.starts_with('-') => {
                        eprintln!("Unknown flag: {}", s);
                        std::process::exit(2);
                    }
                    s => {
                        if query.is_empty() {
                            query = s.to_string();
                        }
                        i += 1;
                    }
                }
            }
            if query.is_empty() {
                eprintln!("Usage: datadex search \"<query>\" [--dir DIR] [--k N]");
                std::process::exit(1);
            }

            let index = open_index(&args, &config)?;
            let hits = index.search(&query, top_k);
            if hits.is_empty() {
                println!("No matches for '{}'.", query);
            }
            for (i, h) in hits.iter().enumerate() {
                println!("{:>2}. score={:.3} file={} length={}", i + 1, h.score, h.meta.file, h.meta.length);
                println!("    {}", h.text.split_whitespace().collect::<Vec<_>>().join(" "));
            }
        }
        other => {
            eprintln!("Unknown command: {} (expected stats|search)", other);
            std::process::exit(1);
        }
    }
    Ok(())
}
