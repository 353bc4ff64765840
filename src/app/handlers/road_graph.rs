//! Handler für Straßengraph und Optionen.

use crate::app::use_cases;
use crate::app::AppState;
use scenario_path_engine::EditorOptions;
use std::path::PathBuf;

/// Lädt einen Straßengraphen aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::road_graph::load_road_graph(state, &path)
}

/// Übernimmt geänderte Optionen.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    use_cases::road_graph::apply_options(state, options);
}
