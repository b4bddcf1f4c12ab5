//! Handler für Sitzungs-Lebenszyklus und Log-Synchronisation.

use crate::app::use_cases;
use crate::app::AppState;
use crate::store::SightStore;

/// Lädt den initialen Komplex und startet das Operationslog.
pub fn load_initial(state: &mut AppState, store: &mut dyn SightStore) -> anyhow::Result<()> {
    use_cases::session::load_initial(state, store)
}

/// Synchronisiert die lokale Log-Sicht mit dem autoritativen Log.
pub fn resync_log(state: &mut AppState, store: &dyn SightStore) -> anyhow::Result<()> {
    use_cases::session::resync_log(state, store)
}
