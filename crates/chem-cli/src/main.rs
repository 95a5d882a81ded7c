use std::sync::Arc;
use std::time::Duration;

use chem_core::{ErrorClass, InventorySearch, MatchKey, SearchError, SearchSettings};
use chem_domain::SearchRequest;
use chem_inventory::{InventorySource, DEFAULT_INVENTORY_FILE};
use chem_providers::pubchem::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use chem_providers::PubChemProvider;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "uso: chem-cli search --smiles <SMILES> [--inventory <RUTA>] [--threshold <N>] [--match-key name_or_cas|pubchem_id]";

#[derive(Debug, PartialEq, Eq)]
struct SearchArgs {
    smiles: Option<String>,
    inventory: String,
    threshold: Option<u8>,
    match_key: MatchKey,
}

/// Interpreta `search ...`; `Err` lleva el mensaje de uso a mostrar.
fn parse_args(args: &[String]) -> Result<SearchArgs, String> {
    if args.get(1).map(String::as_str) != Some("search") {
        return Err(USAGE.to_string());
    }
    let mut parsed = SearchArgs { smiles: None,
                                  inventory: std::env::var("CHEMSCAN_INVENTORY_FILE").unwrap_or_else(|_| DEFAULT_INVENTORY_FILE.to_string()),
                                  threshold: None,
                                  match_key: MatchKey::default() };
    let mut i = 2;
    while i < args.len() {
        let value = args.get(i + 1).cloned();
        match (args[i].as_str(), value) {
            ("--smiles", Some(v)) => parsed.smiles = Some(v),
            ("--inventory", Some(v)) => parsed.inventory = v,
            ("--threshold", Some(v)) => {
                let t = v.parse::<u8>().map_err(|_| format!("--threshold inválido: {v}"))?;
                parsed.threshold = Some(t);
            }
            ("--match-key", Some(v)) => parsed.match_key = v.parse()?,
            (flag, _) => return Err(format!("argumento no reconocido o sin valor: {flag}\n{USAGE}")),
        }
        i += 2;
    }
    Ok(parsed)
}

fn exit_code(err: &SearchError) -> i32 {
    match err.class() {
        ErrorClass::Input => 2,
        ErrorClass::DatasetNotFound => 4,
        ErrorClass::Upstream | ErrorClass::Unexpected => 5,
    }
}

fn fail(err: &SearchError) -> ! {
    eprintln!("{}", serde_json::json!({ "error": err.to_string() }));
    std::process::exit(exit_code(err));
}

fn main() {
    let _ = dotenvy::dotenv();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args: Vec<String> = std::env::args().collect();
    let parsed = match parse_args(&args) {
        Ok(p) => p,
        Err(usage) => { eprintln!("{usage}"); std::process::exit(2); }
    };
    // Un SMILES ausente se reporta igual que en la API.
    let request = match SearchRequest::new(parsed.smiles.unwrap_or_default()) {
        Ok(r) => r,
        Err(e) => fail(&e.into()),
    };

    let base_url = std::env::var("PUBCHEM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let timeout = std::env::var("PUBCHEM_TIMEOUT_SECS").ok()
                                                      .and_then(|v| v.parse().ok())
                                                      .map(Duration::from_secs)
                                                      .unwrap_or(DEFAULT_TIMEOUT);
    let provider = match PubChemProvider::new(&base_url, timeout) {
        Ok(p) => p,
        Err(e) => { eprintln!("[chem-cli] {e}"); std::process::exit(2); }
    };
    let mut settings = SearchSettings { match_key: parsed.match_key,
                                        ..SearchSettings::default() };
    if let Some(t) = parsed.threshold {
        settings.threshold = t;
    }
    let search = InventorySearch::new(Arc::new(provider), InventorySource::new(parsed.inventory)).with_settings(settings);

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => { eprintln!("[chem-cli] runtime error: {e}"); std::process::exit(5); }
    };
    match runtime.block_on(search.run(&request)) {
        Ok(results) => match serde_json::to_string_pretty(&results) {
            Ok(json) => println!("{json}"),
            Err(e) => fail(&SearchError::Unexpected(e.to_string())),
        },
        Err(e) => fail(&e),
    }
}
