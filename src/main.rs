use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use termdict::{
    Config, Dictionary, DictionaryData, LocalDictionary, PinnedRef, SearchOptions, ZSpec,
};

#[derive(Parser)]
#[command(name = "termdict", about = "Search a term dictionary loaded from a JSON file")]
struct Cli {
    /// JSON data file with `dictData` and `refTerms`.
    #[arg(long)]
    data: PathBuf,

    /// Config file; defaults to ~/.config/termdict/config.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    page: Option<i64>,

    #[arg(long)]
    per_page: Option<i64>,

    /// Only match entries of this dictID (repeatable).
    #[arg(long = "dict-id")]
    dict_ids: Vec<String>,

    /// Rank matches of this dictID first (repeatable).
    #[arg(long)]
    prefer: Vec<String>,

    /// Pin an entry's first term (`ID`) or a given term (`ID=STR`).
    #[arg(long)]
    pin: Vec<String>,

    /// Keep this payload key in the output (repeatable).
    #[arg(long, conflicts_with = "z_all")]
    z: Vec<String>,

    /// Keep the whole payload in the output.
    #[arg(long)]
    z_all: bool,

    /// Print the result as JSON instead of one line per match.
    #[arg(long)]
    json: bool,

    /// Log to stderr (filter with RUST_LOG).
    #[arg(long)]
    debug: bool,

    query: String,
}

fn parse_pin(s: &str) -> PinnedRef {
    match s.split_once('=') {
        Some((id, term)) => PinnedRef::term(id, term),
        None => PinnedRef::entry(s),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    let cfg = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading config")?;

    let raw = std::fs::read_to_string(&cli.data)
        .with_context(|| format!("reading {}", cli.data.display()))?;
    let data: DictionaryData = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", cli.data.display()))?;

    let dict = LocalDictionary::from_config(&cfg);
    dict.add_dictionary_data(data)?;

    let pins: Vec<PinnedRef> = cli.pin.iter().map(|s| parse_pin(s)).collect();
    dict.load_pinned_terms(&pins).await?;

    let mut opts = SearchOptions::default()
        .sort_dict_ids(cli.prefer)
        .pinned_refs(pins)
        .z(if cli.z_all {
            ZSpec::KeepAll
        } else if cli.z.is_empty() {
            ZSpec::Drop
        } else {
            ZSpec::Keep(cli.z)
        });
    opts.page = cli.page;
    opts.per_page = cli.per_page;
    if !cli.dict_ids.is_empty() {
        opts = opts.filter_dict_ids(cli.dict_ids);
    }

    let res = dict.search(&cli.query, &opts).await?;
    tracing::info!(matches = res.items.len(), "search done");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&res)?);
        return Ok(());
    }
    for m in &res.items {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            m.kind,
            m.str,
            m.id,
            m.dict_id,
            m.descr.as_deref().unwrap_or("")
        );
    }
    Ok(())
}
