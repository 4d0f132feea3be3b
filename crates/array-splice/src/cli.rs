//! Core logic behind the `array-splice` binary.
//!
//! Each command takes one JSON document and returns one JSON document:
//! - `diff`    — `{"old": [...], "current": [...]}` → splice list
//! - `project` — `{"array": [...], "records": [...]}` → splice list
//! - `apply`   — `{"previous": [...], "current": [...], "splices": [...]}` → array
//!
//! Elements are arbitrary JSON values compared structurally.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::apply::{apply_splices, ApplyError};
use crate::calc::calculate_splices;
use crate::project::{create_initial_splices, project_array_splices, ChangeRecord};
use crate::splice::Splice;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid input: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Apply(#[from] ApplyError),
    #[error("records add {count} elements at {index} but the array has {len}")]
    InconsistentRecords { index: usize, count: usize, len: usize },
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("first argument must be a command: diff, project, or apply")]
    MissingCommand,
}

// ── Inputs ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct DiffInput {
    old: Vec<Value>,
    current: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct ProjectInput {
    array: Vec<Value>,
    records: Vec<ChangeRecord<Value>>,
}

#[derive(Debug, Deserialize)]
struct ApplyInput {
    previous: Vec<Value>,
    current: Vec<Value>,
    splices: Vec<Splice<Value>>,
}

// ── Commands ──────────────────────────────────────────────────────────────

/// Splices turning `old` into `current`.
pub fn diff(json: &str) -> Result<String, CliError> {
    let input: DiffInput = serde_json::from_str(json)?;
    let splices = calculate_splices(&input.current, &input.old);
    Ok(serde_json::to_string(&splices)?)
}

/// Splices described by a stream of raw change records.
pub fn project(json: &str) -> Result<String, CliError> {
    let input: ProjectInput = serde_json::from_str(json)?;
    check_records(&input.array, &input.records)?;
    let splices = project_array_splices(&input.array, &input.records);
    Ok(serde_json::to_string(&splices)?)
}

/// Largest array length a record may describe.
const MAX_ARRAY_LEN: usize = u32::MAX as usize;

/// Reject records that could not have produced `array`.
///
/// Raw splice spans must stay within the array-length limit so merging them
/// cannot overflow, and every merged splice must add elements that exist in
/// `array`.
fn check_records(array: &[Value], records: &[ChangeRecord<Value>]) -> Result<(), CliError> {
    let inconsistent = |index: usize, count: usize| CliError::InconsistentRecords {
        index,
        count,
        len: array.len(),
    };
    let within_limit = |index: usize, count: usize| {
        index.checked_add(count).is_some_and(|end| end <= MAX_ARRAY_LEN)
    };
    for record in records {
        if let ChangeRecord::Splice {
            index,
            removed,
            added_count,
        } = record
        {
            if !within_limit(*index, *added_count) || !within_limit(*index, removed.len()) {
                return Err(inconsistent(*index, *added_count));
            }
        }
    }
    for splice in create_initial_splices(records) {
        if splice.added_end() > array.len() {
            return Err(inconsistent(splice.index, splice.added_count));
        }
    }
    Ok(())
}

/// `previous` with `splices` applied.
pub fn apply(json: &str) -> Result<String, CliError> {
    let ApplyInput {
        mut previous,
        current,
        splices,
    } = serde_json::from_str(json)?;
    apply_splices(&mut previous, &current, &splices)?;
    Ok(serde_json::to_string(&previous)?)
}

/// Dispatch `command` on `json`.
pub fn run(command: &str, json: &str) -> Result<String, CliError> {
    tracing::debug!(command, bytes = json.len(), "running command");
    match command {
        "diff" => diff(json),
        "project" => project(json),
        "apply" => apply(json),
        other => Err(CliError::UnknownCommand(other.to_string())),
    }
}
