//! Time the iterative and recursive Euler trail algorithms on one cycle.
//!
//! Usage:
//!     cargo run --release --bin euler-compare -- --vertices 100000
//!     cargo run --release --bin euler-compare -- -n 300000 --recursion-limit 200000 --json
//!     cargo run --release --bin euler-compare -- --config harness.json --verbose

use std::path::PathBuf;
use std::process;

use euler_trail::{Harness, HarnessConfig};

#[derive(Debug)]
struct Args {
    vertices: usize,
    config: Option<PathBuf>,
    min_vertices: Option<usize>,
    max_vertices: Option<usize>,
    recursion_limit: Option<usize>,
    json: bool,
    verbose: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            vertices: 10_000,
            config: None,
            min_vertices: None,
            max_vertices: None,
            recursion_limit: None,
            json: false,
            verbose: false,
        }
    }
}

fn usage() -> ! {
    eprintln!(
        "usage: euler-compare [--vertices N] [--recursion-limit L] [--min-vertices A] \
         [--max-vertices B] [--config FILE] [--json] [--verbose]"
    );
    process::exit(2)
}

fn number(flag: &str, value: Option<String>) -> usize {
    match value.as_deref().map(str::parse::<usize>) {
        Some(Ok(n)) => n,
        Some(Err(_)) => {
            eprintln!("{} expects a non-negative integer", flag);
            usage()
        }
        None => {
            eprintln!("{} requires a value", flag);
            usage()
        }
    }
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let mut argv = std::env::args().skip(1);

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--vertices" | "-n" => args.vertices = number(&arg, argv.next()),
            "--recursion-limit" => args.recursion_limit = Some(number(&arg, argv.next())),
            "--min-vertices" => args.min_vertices = Some(number(&arg, argv.next())),
            "--max-vertices" => args.max_vertices = Some(number(&arg, argv.next())),
            "--config" | "-c" => match argv.next() {
                Some(path) => args.config = Some(PathBuf::from(path)),
                None => usage(),
            },
            "--json" => args.json = true,
            "--verbose" | "-v" => args.verbose = true,
            "--help" | "-h" => usage(),
            other => {
                eprintln!("unknown argument: {}", other);
                usage()
            }
        }
    }

    args
}

fn config(args: &Args) -> euler_trail::Result<HarnessConfig> {
    let mut config = match &args.config {
        Some(path) => HarnessConfig::from_json_file(path)?,
        None => HarnessConfig::default(),
    };
    if let Some(min) = args.min_vertices {
        config.min_vertices = min;
    }
    if let Some(max) = args.max_vertices {
        config.max_vertices = max;
    }
    if let Some(limit) = args.recursion_limit {
        config.recursion_limit = limit;
    }
    Ok(config)
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let harness = Harness::new(config(args)?)?;
    tracing::info!(
        "comparing on a cycle of {} vertices, recursion ceiling {}",
        args.vertices,
        harness.config().recursion_limit
    );
    let result = harness.compare(args.vertices)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result);
    }
    Ok(())
}

fn main() {
    let args = parse_args();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        tracing::error!("{}", e);
        process::exit(1);
    }
}
