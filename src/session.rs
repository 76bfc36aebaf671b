use std::fmt;

use chrono::{DateTime, Local};

use crate::engine::Operation;
use crate::errors::*;
use crate::value::{CalcResult, Value};

/// One completed calculation: operation, its operands, the result, and the
/// moment it was recorded. Entries are immutable after creation
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    operation: Operation,
    inputs: Vec<f64>,
    result: Value,
    timestamp: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(operation: Operation, inputs: &[f64], result: Value) -> Self {
        HistoryEntry {
            operation,
            inputs: inputs.to_vec(),
            result,
            timestamp: Local::now(),
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    pub fn result(&self) -> &Value {
        &self.result
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}

impl fmt::Display for HistoryEntry {
    // [2020-04-05 13:37:00] sin(90) = 1
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] {}(", self.timestamp.format("%Y-%m-%d %H:%M:%S"), self.operation)?;
        for (idx, arg) in self.inputs.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ") = {}", self.result)
    }
}

/// Per-process calculator state: the single-slot memory register, the
/// append-only calculation history, and the most recent result.
///
/// The session performs no calculation itself. The presentation shell calls
/// [`crate::engine::compute`] and, only on success, records an entry here;
/// a failed computation therefore never changes any session state
#[derive(Default)]
pub struct Session {
    memory: Option<Value>,
    history: Vec<HistoryEntry>,
    last_result: Option<Value>,
}

impl Session {
    pub fn new() -> Self {
        Default::default()
    }

    /// Overwrites the memory register unconditionally
    pub fn store_to_memory(&mut self, value: Value) {
        self.memory = Some(value);
    }

    /// Returns the stored value, or `EmptyMemory` if nothing has been
    /// stored since session start or the last clear
    pub fn recall_memory(&self) -> CalcResult {
        match &self.memory {
            Some(v) => Ok(v.clone()),
            None => Err(CalcError::EmptyMemory),
        }
    }

    /// Empties the memory register; idempotent
    pub fn clear_memory(&mut self) {
        self.memory = None;
    }

    /// Appends an entry to the history and remembers its result as the
    /// last one
    pub fn record(&mut self, entry: HistoryEntry) {
        self.last_result = Some(entry.result.clone());
        self.history.push(entry);
    }

    /// All recorded entries, oldest first
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Forgets all history entries; idempotent. Memory register and last
    /// result stay untouched
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Result of the most recently recorded calculation
    pub fn last_result(&self) -> Option<&Value> {
        self.last_result.as_ref()
    }
}
