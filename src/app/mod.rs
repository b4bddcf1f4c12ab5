//! Application-Schicht: Controller, Events, State und Use-Cases.

pub mod controller;
pub mod decoration;
pub mod events;
pub mod handlers;
pub mod intent_mapping;
pub mod op_log;
pub mod state;
pub mod use_cases;

pub use controller::EditorController;
pub use decoration::{
    face_color, point_color, point_size, CutDecoration, DecorationState, SplitDecoration,
};
pub use events::{AppCommand, AppIntent};
pub use op_log::{OperationKind, OperationLog, OperationPayload, OperationRecord};
pub use state::{AppState, GraphView, SelectionMode, SelectionState, ViewState};
