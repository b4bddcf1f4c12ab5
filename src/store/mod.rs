//! Kollaborations-Verträge zu den ausgelagerten Subsystemen.
//!
//! Der Core schreibt kein Wire-Format vor: jede Implementierung, die
//! Record-Reihenfolge, Art, Payload-Felder und Zeitstempel erhält, ist
//! konform. `MemoryStore` ist die In-Memory-Referenzimplementierung.

mod memory;

use glam::Vec2;

use crate::app::op_log::OperationRecord;
use crate::core::Complex;

pub use memory::MemoryStore;

/// Snapshot-Autorität und Operationslog-Speicher.
///
/// Aufrufe sind synchron; die Replay-Guard-Disziplin (ein ausstehender
/// Struktur-Vorgang zur Zeit) liegt beim Aufrufer.
pub trait SightStore {
    /// Liefert den Start-Strukturzustand.
    fn load_initial_complex(&mut self) -> anyhow::Result<Complex>;

    /// Liefert den Strukturzustand wie er nach Record `index` existierte
    /// (`None` = vor allen Records). Wie der Snapshot entsteht — komplettes
    /// Struktur-Replay oder Snapshotting — ist Sache der Implementierung.
    fn fetch_snapshot_at_index(&self, index: Option<usize>) -> anyhow::Result<Complex>;

    /// Hängt ein Operation-Record dauerhaft an (Single-Writer: die
    /// Log-Reihenfolge gilt als global vereinbart).
    fn append_operation(&mut self, record: OperationRecord) -> anyhow::Result<()>;

    /// Liefert die komplette Historie (für lokalen Dekorations-Neuaufbau).
    fn fetch_log(&self) -> anyhow::Result<Vec<OperationRecord>>;
}

/// Screen-Projektion des ausgelagerten Renderers; nur von der
/// Lasso-Selektion konsumiert.
pub trait ScreenProjector {
    /// Screen-Position eines Punkts (`None` = nicht projizierbar).
    fn screen_position_of(&self, point_id: &str) -> Option<Vec2>;
}

/// Projektor für Headless-Hosts: projiziert nichts.
pub struct NullProjector;

impl ScreenProjector for NullProjector {
    fn screen_position_of(&self, _point_id: &str) -> Option<Vec2> {
        None
    }
}
