//! Geteilte Typen zwischen Application-Layer und Host: Laufzeit-Optionen.

pub mod options;

pub use options::EditorOptions;
