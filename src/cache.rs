use std::collections::HashMap;

use tracing::debug;

use crate::errors::Result;
use crate::interest::{sum_interest, AccrualEngine};
use crate::types::{AccrualRecord, CalculationSpec};

/// memoized ledgers keyed by spec value
///
/// unbounded and never invalidated; a ledger is a pure function of its
/// spec. failed computations are not cached.
#[derive(Debug, Default)]
pub struct LedgerCache {
    engine: AccrualEngine,
    ledgers: HashMap<CalculationSpec, Vec<AccrualRecord>>,
}

impl LedgerCache {
    pub fn new(engine: AccrualEngine) -> Self {
        Self {
            engine,
            ledgers: HashMap::new(),
        }
    }

    pub fn ledger(&mut self, spec: &CalculationSpec) -> Result<&[AccrualRecord]> {
        if !self.ledgers.contains_key(spec) {
            let records = self.engine.daily_ledger(spec)?;
            debug!(cached = self.ledgers.len() + 1, "ledger cache miss");
            self.ledgers.insert(spec.clone(), records);
        }
        Ok(self.ledgers.get(spec).map(Vec::as_slice).unwrap_or_default())
    }

    pub fn total_interest(&mut self, spec: &CalculationSpec, include_margin: bool) -> Result<f64> {
        let records = self.ledger(spec)?;
        Ok(sum_interest(records, include_margin))
    }

    pub fn len(&self) -> usize {
        self.ledgers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledgers.is_empty()
    }
}
