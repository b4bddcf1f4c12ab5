//! Der simpliziale Komplex als unveränderlicher Struktur-Snapshot.
//!
//! Jede Mutation (`cut`, `split`) liefert einen neuen `Complex` plus ein
//! strukturiertes Ergebnis mit den betroffenen bzw. duplizierten Punkten —
//! die Basis für Operation-Records und Dekorationen.

use anyhow::ensure;
use indexmap::{IndexMap, IndexSet};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Connection, Face, Point};

/// Struktur-Snapshot: Punkte, Verbindungen und Flächen zu einem Zeitpunkt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    /// Alle Punkte, indexiert nach ID (Einfügereihenfolge bleibt erhalten)
    pub points: IndexMap<String, Point>,
    /// Alle Verbindungen
    pub connections: Vec<Connection>,
    /// Alle Dreiecksflächen
    pub faces: Vec<Face>,
}

/// Ergebnis eines Cut: neuer Snapshot plus Buchhaltung für das Operation-Record
#[derive(Debug, Clone)]
pub struct CutResult {
    /// Snapshot nach dem Cut
    pub complex: Complex,
    /// Die tatsächlich entfernten Punkt-IDs
    pub cut_point_ids: Vec<String>,
    /// Nachbarn der entfernten Punkte (über Verbindung oder gemeinsame Fläche)
    pub affected_point_ids: IndexSet<String>,
}

/// Ergebnis eines Split: neuer Snapshot plus Original→Duplikat-Mapping
#[derive(Debug, Clone)]
pub struct SplitResult {
    /// Snapshot nach dem Split
    pub complex: Complex,
    /// IDs der neu erzeugten Duplikat-Punkte (in Selektionsreihenfolge)
    pub duplicated_point_ids: Vec<String>,
    /// Mapping Original-ID → Duplikat-ID
    pub mapping: IndexMap<String, String>,
}

impl Complex {
    /// Erstellt einen leeren Komplex.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen Punkt hinzu.
    pub fn add_point(&mut self, point: Point) {
        self.points.insert(point.id.clone(), point);
    }

    /// Fügt eine Verbindung hinzu.
    pub fn add_connection(&mut self, connection: Connection) {
        self.connections.push(connection);
    }

    /// Fügt eine Fläche hinzu.
    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// Gibt die Anzahl der Punkte zurück.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Gibt die Anzahl der Verbindungen zurück.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Gibt die Anzahl der Flächen zurück.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Prüft ob ein Punkt existiert.
    pub fn contains_point(&self, point_id: &str) -> bool {
        self.points.contains_key(point_id)
    }

    /// Prüft ob eine (ungerichtete) Verbindung zwischen zwei Punkten existiert.
    pub fn has_connection(&self, a: &str, b: &str) -> bool {
        self.connections.iter().any(|c| c.links(a, b))
    }

    /// Prüft die referenzielle Integrität: keine Verbindung und keine Fläche
    /// darf auf einen Punkt zeigen, der nicht im Punktbestand liegt.
    pub fn check_integrity(&self) -> anyhow::Result<()> {
        for conn in &self.connections {
            ensure!(
                self.points.contains_key(&conn.source_id) && self.points.contains_key(&conn.target_id),
                "Verbindung {}–{} referenziert unbekannten Punkt",
                conn.source_id,
                conn.target_id
            );
        }
        for face in &self.faces {
            for point_id in &face.point_ids {
                ensure!(
                    self.points.contains_key(point_id),
                    "Fläche {} referenziert unbekannten Punkt {}",
                    face.id,
                    point_id
                );
            }
        }
        Ok(())
    }

    /// Schneidet die Selektion auf tatsächlich vorhandene Punkte zu.
    /// Unbekannte IDs werden verworfen statt die Integrität zu gefährden.
    fn effective_selection(&self, selected: &IndexSet<String>) -> IndexSet<String> {
        selected
            .iter()
            .filter(|id| self.points.contains_key(id.as_str()))
            .cloned()
            .collect()
    }

    /// Entfernt die selektierten Punkte samt aller inzidenten Verbindungen
    /// und Flächen.
    ///
    /// `affected_point_ids` sammelt alle nicht-selektierten Nachbarn: Endpunkte
    /// von Verbindungen mit genau einem selektierten Ende sowie Eckpunkte von
    /// Flächen mit mindestens einem selektierten Eckpunkt.
    ///
    /// Gibt `None` zurück wenn die effektive Selektion leer ist (No-op, kein
    /// Fehler).
    pub fn cut(&self, selected: &IndexSet<String>) -> Option<CutResult> {
        let selected = self.effective_selection(selected);
        if selected.is_empty() {
            return None;
        }

        let mut affected: IndexSet<String> = IndexSet::new();
        for conn in &self.connections {
            let source_selected = selected.contains(conn.source_id.as_str());
            let target_selected = selected.contains(conn.target_id.as_str());
            if source_selected && !target_selected {
                affected.insert(conn.target_id.clone());
            }
            if target_selected && !source_selected {
                affected.insert(conn.source_id.clone());
            }
        }
        for face in &self.faces {
            if face.point_ids.iter().any(|id| selected.contains(id.as_str())) {
                for point_id in &face.point_ids {
                    if !selected.contains(point_id.as_str()) {
                        affected.insert(point_id.clone());
                    }
                }
            }
        }

        let points = self
            .points
            .iter()
            .filter(|(id, _)| !selected.contains(id.as_str()))
            .map(|(id, p)| (id.clone(), p.clone()))
            .collect();
        let connections = self
            .connections
            .iter()
            .filter(|c| !selected.contains(c.source_id.as_str()) && !selected.contains(c.target_id.as_str()))
            .cloned()
            .collect();
        let faces = self
            .faces
            .iter()
            .filter(|f| !f.point_ids.iter().any(|id| selected.contains(id.as_str())))
            .cloned()
            .collect();

        Some(CutResult {
            complex: Complex {
                points,
                connections,
                faces,
            },
            cut_point_ids: selected.iter().cloned().collect(),
            affected_point_ids: affected,
        })
    }

    /// Dupliziert die selektierten Punkte mit frischen IDs und leicht
    /// verschobener Position (`jitter` pro Koordinate, nur gegen exakte
    /// Überlappung).
    ///
    /// Gibt `None` zurück wenn die effektive Selektion leer ist.
    pub fn split(
        &self,
        selected: &IndexSet<String>,
        jitter: f32,
        rng: &mut impl Rng,
    ) -> Option<SplitResult> {
        let selected = self.effective_selection(selected);
        if selected.is_empty() {
            return None;
        }

        let mut mapping: IndexMap<String, String> = IndexMap::new();
        let mut taken: IndexSet<String> = IndexSet::new();
        for point_id in &selected {
            let dup_id = self.fresh_point_id(point_id, &taken);
            taken.insert(dup_id.clone());
            mapping.insert(point_id.clone(), dup_id);
        }

        Some(self.split_with_mapping(&mapping, jitter, rng))
    }

    /// Split mit vorgegebenem Original→Duplikat-Mapping (Replay-Pfad).
    ///
    /// Alle Original-Verbindungen und -Flächen bleiben unverändert erhalten;
    /// zusätzlich entstehen:
    /// - pro Verbindung mit mindestens einem selektierten Endpunkt eine Kopie,
    ///   in der jede selektierte ID durch ihr Duplikat ersetzt ist,
    /// - pro Fläche mit mindestens einem selektierten Eckpunkt eine Kopie mit
    ///   frischer ID und ersetzten Eckpunkten.
    ///
    /// Der Split verbindet Original und Duplikat NICHT miteinander — es ist
    /// eine Nachbarschafts-Duplikation, keine Kanten-Partition (bewusst so
    /// beibehalten, siehe DESIGN.md).
    pub fn split_with_mapping(
        &self,
        mapping: &IndexMap<String, String>,
        jitter: f32,
        rng: &mut impl Rng,
    ) -> SplitResult {
        // Einträge ohne existierendes Original verwerfen, sonst würden die
        // Kopien auf nie erzeugte Duplikate zeigen
        let mapping: IndexMap<String, String> = mapping
            .iter()
            .filter(|(orig_id, _)| self.points.contains_key(orig_id.as_str()))
            .map(|(o, d)| (o.clone(), d.clone()))
            .collect();

        let mut complex = self.clone();

        for (orig_id, dup_id) in &mapping {
            if let Some(original) = self.points.get(orig_id) {
                let mut duplicate = original.clone();
                duplicate.id = dup_id.clone();
                duplicate.position += glam::Vec3::new(
                    rng.random_range(-jitter..=jitter),
                    rng.random_range(-jitter..=jitter),
                    rng.random_range(-jitter..=jitter),
                );
                complex.points.insert(dup_id.clone(), duplicate);
            }
        }

        let mut rewired: Vec<Connection> = Vec::new();
        for conn in &self.connections {
            let source_dup = mapping.get(conn.source_id.as_str());
            let target_dup = mapping.get(conn.target_id.as_str());
            if source_dup.is_none() && target_dup.is_none() {
                continue;
            }
            let mut copy = conn.clone();
            if let Some(dup_id) = source_dup {
                copy.source_id = dup_id.clone();
            }
            if let Some(dup_id) = target_dup {
                copy.target_id = dup_id.clone();
            }
            rewired.push(copy);
        }
        complex.connections.extend(rewired);

        let mut face_ids_taken: IndexSet<String> =
            self.faces.iter().map(|f| f.id.clone()).collect();
        let mut duplicated_faces: Vec<Face> = Vec::new();
        for face in &self.faces {
            if !face.point_ids.iter().any(|id| mapping.contains_key(id.as_str())) {
                continue;
            }
            let point_ids = face
                .point_ids
                .clone()
                .map(|id| mapping.get(id.as_str()).cloned().unwrap_or(id));
            let dup_id = fresh_face_id(&face.id, &face_ids_taken);
            face_ids_taken.insert(dup_id.clone());
            let mut copy = face.clone();
            copy.id = dup_id;
            copy.point_ids = point_ids;
            duplicated_faces.push(copy);
        }
        complex.faces.extend(duplicated_faces);

        SplitResult {
            complex,
            duplicated_point_ids: mapping.values().cloned().collect(),
            mapping,
        }
    }

    /// Erzeugt eine frische Punkt-ID auf Basis der Original-ID.
    fn fresh_point_id(&self, base: &str, taken: &IndexSet<String>) -> String {
        let mut n = 1usize;
        loop {
            let candidate = format!("{base}_s{n}");
            if !self.points.contains_key(&candidate) && !taken.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Erzeugt eine frische Flächen-ID auf Basis der Original-ID.
fn fresh_face_id(base: &str, taken: &IndexSet<String>) -> String {
    let mut n = 1usize;
    loop {
        let candidate = format!("{base}_s{n}");
        if !taken.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
