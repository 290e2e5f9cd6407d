//! Resolves a web-search route from a JSON config file and the environment.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example resolve-config -- config.json "2024-01-01to2024-01-31"
//! ```

use dotenv::dotenv;
use tracing_subscriber::EnvFilter;
use web_search_config::{ProcessEnv, WebSearchConfig, freshness_for, resolve_search_if_enabled};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => Some(WebSearchConfig::from_json_str(&std::fs::read_to_string(path)?)?),
        None => None,
    };
    let freshness = args.next();

    let search = match resolve_search_if_enabled(config.as_ref(), &ProcessEnv) {
        Ok(Some(search)) => search,
        Ok(None) => {
            println!("web_search is disabled");
            return Ok(());
        }
        Err(e) => {
            println!("{:#}", e.to_payload());
            return Ok(());
        }
    };

    println!("provider: {}", search.provider);
    println!("route:    {:?}", search.route);
    println!("count:    {}", search.count);
    println!("timeout:  {:?}", search.timeout);

    match freshness_for(search.provider, freshness.as_deref()) {
        Ok(Some(value)) => println!("freshness: {value}"),
        Ok(None) => println!("freshness: (none)"),
        Err(e) => println!("{:#}", e.to_payload()),
    }

    Ok(())
}
