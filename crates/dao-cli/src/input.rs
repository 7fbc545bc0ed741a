//! Reading dictionaries from files or stdin.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{Context, bail};
use dao_core::DataDictionary;
use serde_json::Value;
use serde_jsonlines::BufReadExt;

fn open(path: &Path) -> anyhow::Result<Box<dyn BufRead>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Read raw JSON records: a single value, an array of values, or (with
/// `jsonl`) one value per line.
pub fn read_values(path: &Path, jsonl: bool) -> anyhow::Result<Vec<Value>> {
    let mut reader = open(path)?;

    if jsonl {
        return reader
            .json_lines::<Value>()
            .enumerate()
            .map(|(line, value)| {
                value.with_context(|| format!("{}:{}: invalid JSON line", path.display(), line + 1))
            })
            .collect();
    }

    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("{}: invalid JSON", path.display()))?;

    Ok(match value {
        Value::Array(items) => items,
        other => vec![other],
    })
}

/// Read dictionaries; every record must be a JSON object.
pub fn read_dictionaries(path: &Path, jsonl: bool) -> anyhow::Result<Vec<DataDictionary>> {
    read_values(path, jsonl)?
        .into_iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::Object(map) => Ok(map),
            other => bail!(
                "{}: record {index} is not a JSON object (found {})",
                path.display(),
                type_name(&other)
            ),
        })
        .collect()
}

/// Read exactly one dictionary.
pub fn read_dictionary(path: &Path) -> anyhow::Result<DataDictionary> {
    let mut records = read_dictionaries(path, false)?;
    if records.len() != 1 {
        bail!(
            "{}: expected a single JSON object, found {} records",
            path.display(),
            records.len()
        );
    }
    Ok(records.remove(0))
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
