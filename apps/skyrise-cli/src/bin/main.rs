use std::env;

use skyrise_core::config::Config;
use skyrise_core::fixtures;
use skyrise_core::traits::ClientSearch;
use skyrise_search::{QueryParser, SearchEngine, SearchOptions};

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);
    if args.is_empty() {
        eprintln!("Usage: {prog} <search|parse> \"<query>\"");
        std::process::exit(1);
    }
    let cmd = args.remove(0);
    (cmd, args)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {e}");
        e
    })?;
    let (cmd, args) = parse_args();
    match cmd.as_str() {
        "search" => {
            let query = args.first().cloned().unwrap_or_else(|| {
                eprintln!("Usage: skyrise-cli search \"<query>\"");
                std::process::exit(1)
            });
            let clients = fixtures::load_clients(&config.data.clients_path())?;
            let engine = SearchEngine::with_options(SearchOptions {
                strict_budget_range: config.search.strict_budget_range,
            })?;
            let hits = engine.search(&clients, &query);
            println!("{}", serde_json::to_string_pretty(&hits)?);
            eprintln!("{} of {} clients matched", hits.len(), clients.len());
        }
        "parse" => {
            let query = args.first().cloned().unwrap_or_else(|| {
                eprintln!("Usage: skyrise-cli parse \"<query>\"");
                std::process::exit(1)
            });
            let parser = QueryParser::new()?;
            let parsed = parser.parse(&query);
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        _ => {
            eprintln!("Unknown command: {cmd}");
            std::process::exit(1);
        }
    }
    Ok(())
}
