// Non-interactive picker demo.
//
// Reads candidates from stdin, types the query given as arguments and prints
// the visible window, marking the highlighted row with '>'.
//
//   seq 1 5000 | cargo run --example pick -- 4 2
//   ls | RUST_LOG=linepick=trace cargo run --example pick -- --exact src

use std::io::{self, BufRead, Write};

use linepick::{CandidateStore, Event, PickerConfig, SelectionController};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut config = PickerConfig::default();
    let mut query = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--exact" => config.fuzzy = false,
            _ => query.push(arg),
        }
    }

    let lines = io::stdin().lock().lines().collect::<io::Result<Vec<String>>>()?;
    let store = CandidateStore::build_truncated(lines, &config);
    let mut picker = SelectionController::new(store, config)?;
    picker.handle(Event::Paste(query.join(" ")));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "query: {:?} ({:?})", picker.query_text(), picker.state())?;
    for entry in picker.visible_window() {
        let marker = if entry.highlighted { '>' } else { ' ' };
        writeln!(out, "{marker} {}", entry.text)?;
    }
    Ok(())
}
