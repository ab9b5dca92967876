use log::{error, info, LevelFilter};
use ordered_collections::avl_tree::AvlSet;
use ordered_collections::{GraphvizConfig, GraphvizExport};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::env;
use std::process;

const LOG_ENV: &str = "ORDERED_COLLECTIONS_LOG";
const DEFAULT_KEYS: [i64; 9] = [10, 9, 8, 13, 12, 11, 15, 14, 16];

fn log_level() -> LevelFilter {
    env::var(LOG_ENV)
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

// Inserts each key into an avl set and prints the GraphViz form of the tree after every step.
fn main() {
    let _ = TermLogger::init(
        log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let mut keys = Vec::new();
    for arg in env::args().skip(1) {
        match arg.parse::<i64>() {
            Ok(key) => keys.push(key),
            Err(err) => {
                error!("invalid key {:?}: {}", arg, err);
                process::exit(1);
            },
        }
    }
    if keys.is_empty() {
        keys.extend_from_slice(&DEFAULT_KEYS);
    }

    let config = GraphvizConfig::default().show_height(true);
    let mut set = AvlSet::new();
    for key in keys {
        if !set.insert(key) {
            info!("skipping duplicate key {}", key);
            continue;
        }
        match set.graphviz_with(&config) {
            Ok(dot) => println!("\n\n{}", dot),
            Err(err) => {
                error!("{}", err);
                process::exit(1);
            },
        }
    }
    info!("final set {} with height {}", set, set.height());
}
