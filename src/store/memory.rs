//! In-Memory-Referenzimplementierung der Kollaborations-Verträge.
//!
//! Snapshots entstehen durch komplettes Struktur-Replay vom initialen
//! Komplex aus. Der Split-Jitter wird pro Record aus einem Seed abgeleitet,
//! damit `fetch_snapshot_at_index` eine reine Funktion von (Initialzustand,
//! Records, Index) ist — Replay auf denselben Index liefert bit-identische
//! Snapshots.

use indexmap::{IndexMap, IndexSet};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::app::op_log::{OperationPayload, OperationRecord};
use crate::core::Complex;
use crate::shared::options::SPLIT_JITTER;

use super::SightStore;

/// In-Memory-Store: initialer Komplex plus autoritative Record-Liste
pub struct MemoryStore {
    initial: Complex,
    records: Vec<OperationRecord>,
}

impl MemoryStore {
    /// Erstellt einen Store über dem gegebenen Startkomplex.
    pub fn new(initial: Complex) -> Self {
        Self {
            initial,
            records: Vec::new(),
        }
    }

    /// Read-only Sicht auf die autoritativen Records (für Tests/Diagnose).
    pub fn records(&self) -> &[OperationRecord] {
        &self.records
    }
}

impl SightStore for MemoryStore {
    fn load_initial_complex(&mut self) -> anyhow::Result<Complex> {
        Ok(self.initial.clone())
    }

    fn fetch_snapshot_at_index(&self, index: Option<usize>) -> anyhow::Result<Complex> {
        let Some(index) = index else {
            return Ok(self.initial.clone());
        };

        let mut complex = self.initial.clone();
        for (i, record) in self.records.iter().take(index + 1).enumerate() {
            match &record.payload {
                OperationPayload::InitialLoad => {}
                OperationPayload::CutNodes { point_ids, .. } => {
                    let selected: IndexSet<String> = point_ids.iter().cloned().collect();
                    if let Some(result) = complex.cut(&selected) {
                        complex = result.complex;
                    }
                }
                OperationPayload::SplitNodes {
                    original_point_ids,
                    duplicated_point_ids,
                    ..
                } => {
                    let mapping: IndexMap<String, String> = original_point_ids
                        .iter()
                        .cloned()
                        .zip(duplicated_point_ids.iter().cloned())
                        .collect();
                    // Seed pro Record: deterministisches Jitter beim Replay
                    let mut rng = SmallRng::seed_from_u64(record.timestamp_ms ^ i as u64);
                    complex = complex
                        .split_with_mapping(&mapping, SPLIT_JITTER, &mut rng)
                        .complex;
                }
            }
        }
        Ok(complex)
    }

    fn append_operation(&mut self, record: OperationRecord) -> anyhow::Result<()> {
        self.records.push(record);
        Ok(())
    }

    fn fetch_log(&self) -> anyhow::Result<Vec<OperationRecord>> {
        Ok(self.records.clone())
    }
}
