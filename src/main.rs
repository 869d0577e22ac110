use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use fpgrowth::{io, mine_frequent_itemsets};

/// Mine frequent itemsets from a transaction dataset with FP-Growth.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON dataset: an array of transactions, or of records with an "items" field
    input: PathBuf,

    /// Minimum support threshold as an absolute count (at least 1)
    #[arg(short = 's', long)]
    min_support: u64,

    /// Output CSV path
    #[arg(short, long, default_value = "output.csv")]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), fpgrowth::Error> {
    let transactions = io::read_transactions(&args.input)?;
    let itemsets = mine_frequent_itemsets(&transactions, args.min_support)?;
    io::write_itemsets(&args.output, &itemsets)?;
    Ok(())
}
