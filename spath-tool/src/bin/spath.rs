//! Shortest distance between two vertices of a graph.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Error};
use clap::Parser;
use log::info;

use spath_tool::{demo_graph, parse_position, run_query, GraphFile};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let opts: Opts = Opts::parse();

    let mut graph = match &opts.graph {
        Some(path) => GraphFile::load(path)?.build()?,
        None => demo_graph()?,
    };
    info!("Loaded graph with {} vertices", graph.len());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    if opts.from.is_none() || opts.to.is_none() {
        println!("Enter a source and then a destination in the range 1 to {}", graph.len());
    }
    let from = match opts.from {
        Some(n) => n,
        None => prompt(&mut input, "source >\t")?,
    };
    let to = match opts.to {
        Some(n) => n,
        None => prompt(&mut input, "dest >\t")?,
    };

    let report = run_query(&mut graph, from, to)?;
    println!("{}", report);

    if opts.dump {
        print!("{}", graph);
    }

    Ok(())
}

fn prompt<R: BufRead>(input: &mut R, text: &str) -> Result<usize, Error> {
    print!("{}", text);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(anyhow!("unexpected end of input"));
    }
    Ok(parse_position(&line)?)
}

/// Shortest distance between two vertices of a directed weighted graph.
#[derive(Parser)]
#[clap(version = "0.1.0", author = "The spath development team")]
struct Opts {
    /// Graph file (JSON). The built-in six city graph is used when omitted
    #[clap(long = "graph")]
    graph: Option<PathBuf>,

    /// Source vertex position, starting from 1 (asked for interactively when omitted)
    #[clap(long = "from")]
    from: Option<usize>,

    /// Destination vertex position, starting from 1 (asked for interactively when omitted)
    #[clap(long = "to")]
    to: Option<usize>,

    /// Print every vertex with its final tentative distance after the query
    #[clap(long = "dump")]
    dump: bool,
}
