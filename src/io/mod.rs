//! Boundary adapters: JSON dataset input, CSV result output.
//!
//! The algorithmic core never touches files; everything here validates and
//! converts at the edge, so malformed input is rejected before any tree is
//! built.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::error::Error;
use crate::fp::FrequentItemset;

/// Separator between items of one itemset in the output artifact.
const ITEM_DELIMITER: &str = ", ";

/// Load transactions from a JSON dataset file.
///
/// The dataset must be an array. Its shape is detected from the first
/// record: an object carrying an `"items"` key selects record mode (every
/// record must then expose `"items"`); otherwise every record is itself the
/// token array. Tokens must be JSON scalars; numbers and bools are rendered
/// to their display strings.
pub fn read_transactions(path: &Path) -> Result<Vec<Vec<String>>, Error> {
    let file = File::open(path)?;
    let dataset: Value = serde_json::from_reader(BufReader::new(file))?;
    parse_dataset(&dataset)
}

/// Validate and convert an already-parsed JSON dataset.
pub fn parse_dataset(dataset: &Value) -> Result<Vec<Vec<String>>, Error> {
    let records = dataset
        .as_array()
        .ok_or_else(|| Error::InputFormat("dataset must be a JSON array".to_string()))?;

    let record_mode = matches!(
        records.first(),
        Some(Value::Object(first)) if first.contains_key("items")
    );

    records
        .iter()
        .enumerate()
        .map(|(row, record)| {
            let tokens = if record_mode {
                record
                    .as_object()
                    .and_then(|object| object.get("items"))
                    .ok_or_else(|| {
                        Error::InputFormat(format!("record {row} has no \"items\" field"))
                    })?
            } else {
                record
            };

            let tokens = tokens.as_array().ok_or_else(|| {
                Error::InputFormat(format!("transaction {row} is not an array"))
            })?;

            tokens
                .iter()
                .map(|token| scalar_token(token, row))
                .collect::<Result<Vec<String>, Error>>()
        })
        .collect()
}

fn scalar_token(token: &Value, row: usize) -> Result<String, Error> {
    match token {
        Value::String(label) => Ok(label.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(Error::InputFormat(format!(
            "transaction {row} contains a non-scalar token: {other}"
        ))),
    }
}

/// Write the mined itemsets as a CSV artifact.
///
/// The header row `Itemset,Support` is always written; an empty result
/// produces the header row only.
pub fn write_itemsets(path: &Path, itemsets: &[FrequentItemset]) -> Result<(), Error> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Itemset", "Support"])?;

    for itemset in itemsets {
        writer.write_record([
            itemset.items.join(ITEM_DELIMITER),
            itemset.support.to_string(),
        ])?;
    }
    writer.flush()?;

    if itemsets.is_empty() {
        info!(path = %path.display(), "no itemsets met the threshold, wrote header only");
    } else {
        info!(path = %path.display(), count = itemsets.len(), "wrote frequent itemsets");
    }

    Ok(())
}
