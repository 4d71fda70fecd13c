use std::env;
use std::path::PathBuf;

// Load a dataset directory and run one ranked query against it.
// Usage:
//   cargo run -p datadex-index --example search -- "your query" \
//     [--dir ./datasets] [--limit 4]

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("Usage: cargo run -p datadex-index --example search -- <query> [--dir DIR] [--limit N]");
        std::process::exit(1);
    }
    let mut query = String::new();
    let mut data_dir: Option<PathBuf> = None;
    let mut limit: usize = datadex_index::DEFAULT_TOP_K;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--dir" => {
                if i + 1 >= args.len() { eprintln!("--dir requires a path"); std::process::exit(2); }
                data_dir = Some(PathBuf::from(&args[i + 1]));
                i += 2; continue;
            }
            "--limit" => {
                if i + 1 >= args.len() { eprintln!("--limit requires a number"); std::process::exit(2); }
                limit = args[i + 1].parse().unwrap_or(limit);
                i += 2; continue;
            }
            s if s.starts_with('-') => {
                eprintln!("Unknown flag: {}", s); std::process::exit(2);
            }
            s => {
                if query.is_empty() { query = s.to_string(); }
                i += 1; continue;
            }
        }
    }

    if query.is_empty() {
        eprintln!("Missing <query> argument");
        std::process::exit(1);
    }

    // Resolve corpus root precedence: flag > DATADEX_DATASETS_DIR > ./datasets
    let data_dir = data_dir
        .or_else(|| env::var("DATADEX_DATASETS_DIR").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("datasets"));

    println!("Dataset search\n==============");
    println!("Corpus: {}", data_dir.display());
    println!("Query : {} (limit {})\n", query, limit);

    let mut index = datadex_index::DatasetIndex::new(data_dir);
    index.load()?;
    let stats = index.stats();
    println!("{} files, {} chunks, {} terms\n", stats.num_files, stats.num_chunks, stats.vocabulary_size);

    let hits = index.search(&query, limit);
    if hits.is_empty() {
        println!("No matches.");
    }
    for (i, h) in hits.iter().enumerate() {
        println!("{:>2}. score={:.3} file={} len={}\n    {}",
            i + 1, h.score, h.meta.file, h.meta.length, preview(&h.text));
    }

    Ok(())
}

fn preview(text: &str) -> String {
    let one_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if one_line.chars().count() > 120 {
        let cut: String = one_line.chars().take(120).collect();
        format!("{cut}…")
    } else {
        one_line
    }
}
