//! Application State: Zustandscontainer, Selektion und Ansicht.

mod app_state;
mod selection;
mod view;

pub use app_state::AppState;
pub use selection::{SelectionMode, SelectionState};
pub use view::{GraphView, ViewState};
