//! Zen Sight Editor Library.
//! Operation-gesourcter Topologie-Editor für simpliziale Komplexe
//! (Punkte, Verbindungen, Dreiecksflächen) mit Append-only-Operationslog,
//! Forward-Replay-Timeline und abgeleiteten Cut/Split-Dekorationen.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod store;

pub use app::{
    face_color, point_color, point_size, AppCommand, AppIntent, AppState, CutDecoration,
    DecorationState, EditorController, GraphView, OperationKind, OperationLog, OperationPayload,
    OperationRecord, SelectionMode, SelectionState, SplitDecoration, ViewState,
};
pub use core::{Complex, Connection, CutResult, Face, Point, SplitResult};
pub use shared::EditorOptions;
pub use store::{MemoryStore, NullProjector, ScreenProjector, SightStore};
