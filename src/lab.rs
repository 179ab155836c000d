// src/lab.rs
//! Request flow around the engine: run one transform, then optionally
//! hand the result to the history store.

use serde::Serialize;

use crate::cipher::CipherRequest;
use crate::error::Result;
use crate::history::{HistoryRecord, HistoryStore, Identity, NewRecord};

/// Result of a lab run; `record` is set only when the operation was saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub output: String,
    pub record: Option<HistoryRecord>,
}

#[derive(Default)]
pub struct CipherLab<'a> {
    store: Option<&'a mut HistoryStore>,
}

impl<'a> CipherLab<'a> {
    /// A lab that never persists anything
    pub fn new() -> Self {
        CipherLab { store: None }
    }

    pub fn with_history(store: &'a mut HistoryStore) -> Self {
        CipherLab { store: Some(store) }
    }

    pub fn records_history(&self) -> bool {
        self.store.is_some()
    }

    pub fn run(&self, request: &CipherRequest) -> String {
        request.run()
    }

    /// Transform, then save `{method, direction, input, output}` under
    /// `identity` when a store is attached.
    pub fn run_and_record(
        &mut self,
        identity: &Identity,
        request: &CipherRequest,
    ) -> Result<Outcome> {
        let output = request.run();

        let record = match self.store.as_deref_mut() {
            Some(store) => {
                let new = NewRecord::new(
                    request.method,
                    request.direction,
                    request.text.clone(),
                    output.clone(),
                );
                Some(store.record(identity, &new)?)
            }
            None => None,
        };

        Ok(Outcome { output, record })
    }
}
