use std::{io::stdin, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use maxcliques::{
    algo::MaximalCliques,
    io::{EdgeListReader, GraphReader, SearchTreeCsvWriter},
    prelude::*,
};

/// Enumerates all maximal cliques of an undirected simple graph.
///
/// The input starts with a header line "N M", followed by M lines "U V"
/// each describing one undirected edge with 0 <= U, V < N.
#[derive(Debug, Parser)]
#[command(name = "maxcliques", version, about, ignore_errors = true)]
struct Args {
    /// Input graph file; read from stdin when omitted
    input: Option<PathBuf>,

    /// Record the search tree and export it as CSV
    #[arg(
        short = 'e',
        long = "export-tree",
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = "search_tree.csv"
    )]
    export_tree: Option<PathBuf>,
}

/// Installs a subscriber logging to stderr, respecting `RUST_LOG`. Stdout is
/// reserved for the results.
fn init_subscriber() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_subscriber();

    let args = Args::parse();

    let reader = EdgeListReader::new();
    let graph: std::io::Result<AdjArrayUndir> = match &args.input {
        Some(path) => reader.try_read_graph_file(path),
        None => reader.try_read_graph(stdin().lock()),
    };
    let mut graph = match graph {
        Ok(graph) => graph,
        Err(error) => {
            eprintln!("Error reading graph: {error}");
            return ExitCode::FAILURE;
        }
    };

    debug!(
        n = graph.number_of_nodes(),
        m = graph.number_of_edges(),
        "graph loaded"
    );

    let enumerator = MaximalCliques::new().record_search_tree(args.export_tree.is_some());
    if args.export_tree.is_some() {
        println!("Search tree tracking enabled");
    }

    let start = Instant::now();
    let result = enumerator.run(&mut graph);
    let elapsed = start.elapsed();

    println!("Clique count: {}", result.num_cliques);
    println!("Elapsed Time: {} ms", elapsed.as_secs_f64() * 1000.0);

    if let (Some(path), Some(tree)) = (&args.export_tree, &result.search_tree) {
        print!("{}", tree.stats());

        match SearchTreeCsvWriter::new().try_write_file(tree, path) {
            Ok(()) => println!(
                "Search tree exported to {} ({} nodes including virtual root)",
                path.display(),
                tree.len() + 1
            ),
            // the enumeration result has been reported, so keep the run alive
            Err(error) => eprintln!("Error: could not write {}: {error}", path.display()),
        }
    }

    ExitCode::SUCCESS
}
