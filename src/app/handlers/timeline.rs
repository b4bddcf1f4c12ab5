//! Handler für das Timeline-Replay.

use crate::app::use_cases;
use crate::app::AppState;
use crate::store::SightStore;

/// Spielt auf den Zustand nach Log-Record `index` zurück.
pub fn replay_to(state: &mut AppState, store: &dyn SightStore, index: usize) -> anyhow::Result<()> {
    use_cases::timeline::replay_to_index(state, store, index)
}

/// Beendet die Settling-Phase nach einem Replay.
pub fn finish_replay(state: &mut AppState) {
    use_cases::timeline::finish_replay(state);
}
