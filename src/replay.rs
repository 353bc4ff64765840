//! Headless-Replay: spielt ein Intent-Skript gegen den Controller ab.
//!
//! Format (JSON):
//! ```json
//! {
//!   "road_graph": "graph.json",
//!   "intents": [
//!     { "intent": "PlaceEntityRequested", "category": "Car", "world_pos": [0.0, 0.0] },
//!     { "intent": "PointerClicked", "world_pos": [20.0, 0.0] },
//!     { "intent": "FinishPathRequested" }
//!   ]
//! }
//! ```

use crate::app::{AppController, AppIntent, AppState};
use anyhow::Context;
use scenario_path_engine::EditorOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Ein abspielbares Session-Skript.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplayScript {
    /// Straßengraph relativ zum Skript; ohne Graph wird frei geroutet
    #[serde(default)]
    pub road_graph: Option<PathBuf>,
    /// Optionen; fehlen sie, gelten die übergebenen
    #[serde(default)]
    pub options: Option<EditorOptions>,
    /// Intents in Ausführungsreihenfolge
    pub intents: Vec<AppIntent>,
}

impl ReplayScript {
    /// Parst ein Skript aus JSON.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Replay-Skript ist ungültig")
    }

    /// Lädt ein Skript aus einer Datei.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Replay-Skript nicht lesbar: {}", path.display()))?;
        Self::from_json(&content)
    }

    /// Spielt alle Intents ab und gibt den Endzustand zurück.
    ///
    /// Relative Graph-Pfade werden gegen `base_dir` aufgelöst.
    pub fn run(&self, base_dir: &Path, defaults: EditorOptions) -> anyhow::Result<AppState> {
        let options = self.options.clone().unwrap_or(defaults);
        let mut state = AppState::with_options(options);
        let mut controller = AppController::new();

        if let Some(graph) = &self.road_graph {
            controller.handle_intent(
                &mut state,
                AppIntent::RoadGraphLoadRequested {
                    path: base_dir.join(graph),
                },
            )?;
        }

        for (index, intent) in self.intents.iter().enumerate() {
            controller
                .handle_intent(&mut state, intent.clone())
                .with_context(|| format!("Intent #{} fehlgeschlagen", index + 1))?;
        }

        log::info!(
            "Replay abgeschlossen: {} Intents, {} Commands, {} Entitäten",
            self.intents.len(),
            state.command_log.total(),
            state.entity_count()
        );
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::EntityCategory;
    use glam::Vec2;

    #[test]
    fn parses_tagged_intents() {
        let script = ReplayScript::from_json(
            r#"{
                "intents": [
                    { "intent": "PlaceEntityRequested", "category": "Bike", "world_pos": [1.0, 2.0] },
                    { "intent": "FinishPathRequested" }
                ]
            }"#,
        )
        .expect("gültiges Skript");

        assert!(script.road_graph.is_none());
        assert_eq!(
            script.intents,
            vec![
                AppIntent::PlaceEntityRequested {
                    category: EntityCategory::Bike,
                    world_pos: Vec2::new(1.0, 2.0),
                },
                AppIntent::FinishPathRequested,
            ]
        );
    }

    #[test]
    fn unknown_intent_is_rejected() {
        let result = ReplayScript::from_json(r#"{ "intents": [ { "intent": "Explode" } ] }"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_road_graph_file_aborts_replay() {
        let script = ReplayScript {
            road_graph: Some(PathBuf::from("gibt_es_nicht.json")),
            ..Default::default()
        };

        let result = script.run(Path::new("/nonexistent"), EditorOptions::default());
        assert!(result.is_err());
    }
}
