use std::collections::HashMap;

use tracing::debug;

use crate::types::{CalculationId, CalculationSpec};

/// in-memory store of calculation requests
///
/// entries keep insertion order; overwriting an id keeps its position.
#[derive(Debug, Default)]
pub struct CalculationStore {
    entries: Vec<(CalculationId, CalculationSpec)>,
    index: HashMap<CalculationId, usize>,
    next_id: CalculationId,
}

impl CalculationStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            next_id: 0,
        }
    }

    /// store `spec`, under `id` if given, else under the next auto id
    ///
    /// only auto-assigned inserts advance the counter.
    pub fn insert(&mut self, spec: CalculationSpec, id: Option<CalculationId>) -> CalculationId {
        let id = match id {
            Some(id) => id,
            None => {
                let id = self.next_id;
                self.next_id += 1;
                id
            }
        };

        match self.index.get(&id) {
            Some(&position) => {
                self.entries[position].1 = spec;
                debug!(id, "calculation overwritten");
            }
            None => {
                self.index.insert(id, self.entries.len());
                self.entries.push((id, spec));
                debug!(id, "calculation saved");
            }
        }

        id
    }

    pub fn get(&self, id: CalculationId) -> Option<&CalculationSpec> {
        self.index.get(&id).map(|&position| &self.entries[position].1)
    }

    pub fn contains(&self, id: CalculationId) -> bool {
        self.index.contains_key(&id)
    }

    /// all entries in insertion order
    pub fn list(&self) -> Vec<(CalculationId, &CalculationSpec)> {
        self.entries.iter().map(|(id, spec)| (*id, spec)).collect()
    }

    /// id the next auto-assigned insert will use
    pub fn next_id(&self) -> CalculationId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
