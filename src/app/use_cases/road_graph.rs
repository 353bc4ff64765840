//! Use-Cases für Straßengraph und Optionen.

use crate::app::AppState;
use scenario_path_engine::{
    EditorOptions, PathRules, RoadGraph, RoadGraphRouter, StraightLineRouter,
};
use std::path::Path;
use std::sync::Arc;

/// Lädt einen Straßengraphen und ersetzt den aktiven Router.
///
/// Bestehende Pfade bleiben unverändert; neue Teilstücke folgen dem neuen Graphen.
pub fn load_road_graph(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    let graph = RoadGraph::load_from_file(path)?;
    log::info!(
        "Straßengraph geladen: {} Knoten, {} Verbindungen",
        graph.node_count(),
        graph.connection_count()
    );
    state.routing.graph = Some(Arc::new(RoadGraphRouter::new(
        Arc::new(graph),
        state.options.snap_radius,
        state.options.free_sample_spacing,
    )));
    Ok(())
}

/// Übernimmt neue Optionen in Router und alle Pfad-Editoren.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    let rules = PathRules::from_options(&options);
    if !state.entities.is_empty() {
        for entity in Arc::make_mut(&mut state.entities).iter_mut() {
            entity.path.set_rules(rules);
            entity.path.set_spawn_radius(options.spawn_marker_radius);
        }
    }
    state.routing.free = StraightLineRouter::new(options.free_sample_spacing);
    if let Some(router) = state.routing.graph.take() {
        state.routing.graph = Some(Arc::new(RoadGraphRouter::new(
            Arc::clone(router.graph()),
            options.snap_radius,
            options.free_sample_spacing,
        )));
    }
    state.options = options;
    log::info!("Optionen übernommen");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::entities::place_entity;
    use crate::app::EntityCategory;
    use glam::Vec2;

    #[test]
    fn apply_options_resizes_existing_spawn_markers() {
        let mut state = AppState::new();
        place_entity(&mut state, EntityCategory::Pedestrian, Vec2::ZERO);

        let options = EditorOptions {
            spawn_marker_radius: 6.0,
            ..EditorOptions::default()
        };
        apply_options(&mut state, options);

        let entity = state.entities.iter().next().expect("Entität erwartet");
        assert_eq!(entity.path.spawn().radius, 6.0);
        assert_eq!(state.options.spawn_marker_radius, 6.0);
    }
}
