//! Append-only Operationslog: die Timeline des Editors.
//!
//! Die Reihenfolge der Records ist die alleinige Quelle der Wahrheit für
//! "Geschichte" — Records werden nie umsortiert oder umgeschrieben, nur am
//! Ende angehängt. Die Guards gegen Anhängen während Replay bzw. vor dem
//! initialen Laden liegen in den Use-Cases (`AppState::can_record_operations`),
//! da Replay-Flag und Ladezustand dort leben.

use serde::{Deserialize, Serialize};

/// Art einer Operation (abgeleitet aus dem Payload).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Initiales Laden des Komplexes
    InitialLoad,
    /// Punkte samt inzidenter Simplizes entfernt
    CutNodes,
    /// Punkte dupliziert und Nachbarschaft kopiert
    SplitNodes,
}

/// Art-spezifischer Payload; trägt genug Information um Dekorationen ohne
/// Struktur-Snapshot abzuleiten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum OperationPayload {
    /// Initiales Laden (kein Payload)
    InitialLoad,
    /// Cut: entfernte Punkte, gewählte Farbe, betroffene Nachbarn
    CutNodes {
        point_ids: Vec<String>,
        color: String,
        affected_point_ids: Vec<String>,
    },
    /// Split: Originale, Duplikate, gewählte Farbe
    SplitNodes {
        original_point_ids: Vec<String>,
        duplicated_point_ids: Vec<String>,
        color: String,
    },
}

/// Ein Eintrag des Operationslogs. Unveränderlich sobald angehängt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRecord {
    /// Art und Payload der Operation
    #[serde(flatten)]
    pub payload: OperationPayload,
    /// Menschenlesbare Beschreibung für die Timeline-Anzeige
    pub description: String,
    /// Unix-Zeitstempel in Millisekunden (beim Anhängen vergeben)
    pub timestamp_ms: u64,
}

impl OperationRecord {
    /// Record für das initiale Laden.
    pub fn initial_load() -> Self {
        Self {
            payload: OperationPayload::InitialLoad,
            description: "Initial graph load".to_string(),
            timestamp_ms: unix_timestamp_ms(),
        }
    }

    /// Record für einen Cut.
    pub fn cut(point_ids: Vec<String>, color: String, affected_point_ids: Vec<String>) -> Self {
        let description = format!("Cut {} nodes", point_ids.len());
        Self {
            payload: OperationPayload::CutNodes {
                point_ids,
                color,
                affected_point_ids,
            },
            description,
            timestamp_ms: unix_timestamp_ms(),
        }
    }

    /// Record für einen Split.
    pub fn split(
        original_point_ids: Vec<String>,
        duplicated_point_ids: Vec<String>,
        color: String,
    ) -> Self {
        let description = format!("Split {} nodes", original_point_ids.len());
        Self {
            payload: OperationPayload::SplitNodes {
                original_point_ids,
                duplicated_point_ids,
                color,
            },
            description,
            timestamp_ms: unix_timestamp_ms(),
        }
    }

    /// Gibt die Art der Operation zurück.
    pub fn kind(&self) -> OperationKind {
        match self.payload {
            OperationPayload::InitialLoad => OperationKind::InitialLoad,
            OperationPayload::CutNodes { .. } => OperationKind::CutNodes,
            OperationPayload::SplitNodes { .. } => OperationKind::SplitNodes,
        }
    }
}

/// Unix-Zeit in Millisekunden (0 falls die Systemuhr vor 1970 steht).
pub fn unix_timestamp_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Geordnetes, append-only Log aller Operationen (lokale Sicht).
#[derive(Debug, Clone, Default)]
pub struct OperationLog {
    entries: Vec<OperationRecord>,
}

impl OperationLog {
    /// Erstellt ein leeres Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Hängt einen Record am Ende an.
    pub fn append(&mut self, record: OperationRecord) {
        self.entries.push(record);
    }

    /// Read-only Präfix `[0, index]`; `None` liefert das leere Präfix.
    /// Ein Index hinter dem Ende wird auf das volle Log geklemmt.
    pub fn records_up_to(&self, index: Option<usize>) -> &[OperationRecord] {
        match index {
            None => &[],
            Some(i) => {
                let end = (i + 1).min(self.entries.len());
                &self.entries[..end]
            }
        }
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[OperationRecord] {
        &self.entries
    }

    /// Gibt die Anzahl der Einträge zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Einträge vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index des letzten Eintrags (`None` bei leerem Log).
    pub fn tail_index(&self) -> Option<usize> {
        self.entries.len().checked_sub(1)
    }

    /// Ersetzt die lokale Sicht komplett (Resync mit dem autoritativen Log).
    pub fn replace_all(&mut self, entries: Vec<OperationRecord>) {
        self.entries = entries;
    }
}
