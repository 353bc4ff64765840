//! Scenario Path Editor (Headless).
//!
//! Spielt ein Session-Skript gegen den Controller ab und gibt alle fertigen
//! Pfade als JSON auf stdout aus.

use anyhow::Context;
use scenario_path_editor::app::export;
use scenario_path_editor::{EditorOptions, ReplayScript};
use std::path::{Path, PathBuf};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Scenario Path Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let Some(script_path) = std::env::args().nth(1).map(PathBuf::from) else {
        anyhow::bail!("Aufruf: scenario-path-editor <session.json>");
    };

    let options = EditorOptions::load_from_file(&EditorOptions::config_path());
    let script = ReplayScript::load_from_file(&script_path)?;
    let base_dir = script_path.parent().unwrap_or(Path::new("."));
    let state = script.run(base_dir, options)?;

    if let Some(warning) = &state.last_warning {
        log::warn!("Letzte Warnung: {}", warning);
    }

    let paths = export::export_finished_paths(&state);
    let json = export::to_json(&paths).context("Export fehlgeschlagen")?;
    println!("{}", json);
    Ok(())
}
