use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use log::info;
use tracing_subscriber::filter::LevelFilter;

use ssum::{Instance, Scanner, Writer, report, table};

#[derive(Parser, Debug)]
#[command(name = "ssum")]
#[command(about = "Subset-sum report over `<weight> <label>` pairs read from stdin", long_about = None)]
struct Cli {
    /// Target sum
    target: usize,

    /// Read elements from FILE instead of stdin
    #[arg(short = 'i', long = "input")]
    input: Option<PathBuf>,

    /// Refuse to build tables with more cells than this
    #[arg(long = "max-cells", default_value_t = 1 << 25)]
    max_cells: usize,

    /// Log at debug level
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// Cells needed for `elements` x `target`, refused when above `max_cells`.
fn check_cell_budget(elements: usize, target: usize, max_cells: usize) -> anyhow::Result<usize> {
    match table::cell_count(elements, target) {
        Some(cells) if cells <= max_cells => Ok(cells),
        _ => bail!(
            "a table for {} elements and target {} exceeds the limit of {} cells (see --max-cells)",
            elements,
            target,
            max_cells
        ),
    }
}

fn main() -> anyhow::Result<()> {
    // A missing or malformed target prints usage and exits cleanly.
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            err.print()?;
            return Ok(());
        }
    };

    let level = if args.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut scanner = match &args.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            Scanner::new(BufReader::new(file))
        }
        None => Scanner::new(std::io::stdin().lock()),
    };
    let mut instance = Instance::read_from(&mut scanner).context("reading elements")?;

    let cells = check_cell_budget(instance.len(), args.target, args.max_cells)?;
    info!("solving target {} over {} elements ({} cells)", args.target, instance.len(), cells);

    let solution = instance.solve(args.target);

    let mut out = Writer::new();
    report::render(&mut out, instance.elements(), &solution);
    std::io::stdout().lock().write_all(out.as_str().as_bytes())?;
    Ok(())
}
