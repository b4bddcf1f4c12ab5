//! Core-Domänentypen: Punkte, Verbindungen, Flächen und der Komplex-Snapshot.

pub mod complex;
pub mod connection;
pub mod face;
pub mod point;

pub use complex::{Complex, CutResult, SplitResult};
pub use connection::Connection;
pub use face::Face;
pub use point::Point;
