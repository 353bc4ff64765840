//! Zentrale Konfiguration für den Scenario Path Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Snapping ────────────────────────────────────────────────────────

/// Snap-Radius (Meter): Klick innerhalb dieses Radius rastet auf einen Graph-Knoten ein.
pub const SNAP_RADIUS: f32 = 3.0;

// ── Kollision ───────────────────────────────────────────────────────

/// Radius eines Wegpunkt-Markers (Meter).
pub const MARKER_RADIUS: f32 = 1.0;
/// Radius des Spawn-Markers einer Entität (Meter).
pub const SPAWN_MARKER_RADIUS: f32 = 1.5;
/// Halbe Breite des Pfad-Umrisses für Hit-Tests (Meter).
pub const PATH_HIT_WIDTH: f32 = 0.5;

// ── Wegpunkte ───────────────────────────────────────────────────────

/// Schwelle der Standard-Distanzbedingung neuer Wegpunkte (Meter).
pub const TRIGGER_DISTANCE: f32 = 20.0;
/// Punktabstand bei freiem Routing ohne Straßengraph (Meter).
pub const FREE_SAMPLE_SPACING: f32 = 1.0;

// ── Historie ────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_DEPTH: usize = 200;

/// Laufzeit-Optionen (TOML-persistiert).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Snapping ─────────────────────────────────────────────────
    /// Snap-Radius (Meter) für Graph-Entitäten
    pub snap_radius: f32,

    // ── Kollision ────────────────────────────────────────────────
    /// Radius eines Wegpunkt-Markers
    pub marker_radius: f32,
    /// Radius des Spawn-Markers
    #[serde(default = "default_spawn_marker_radius")]
    pub spawn_marker_radius: f32,
    /// Halbe Breite des Pfad-Umrisses
    pub path_hit_width: f32,

    // ── Wegpunkte ────────────────────────────────────────────────
    /// Schwelle der Standard-Distanzbedingung
    pub trigger_distance: f32,
    /// Punktabstand bei freiem Routing
    #[serde(default = "default_free_sample_spacing")]
    pub free_sample_spacing: f32,

    // ── Historie ─────────────────────────────────────────────────
    /// Maximale Anzahl Undo-Schritte
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            snap_radius: SNAP_RADIUS,
            marker_radius: MARKER_RADIUS,
            spawn_marker_radius: SPAWN_MARKER_RADIUS,
            path_hit_width: PATH_HIT_WIDTH,
            trigger_distance: TRIGGER_DISTANCE,
            free_sample_spacing: FREE_SAMPLE_SPACING,
            history_depth: HISTORY_DEPTH,
        }
    }
}

/// Serde-Default für `spawn_marker_radius` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_spawn_marker_radius() -> f32 {
    SPAWN_MARKER_RADIUS
}

fn default_free_sample_spacing() -> f32 {
    FREE_SAMPLE_SPACING
}

fn default_history_depth() -> usize {
    HISTORY_DEPTH
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("scenario_path_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("scenario_path_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let opts = EditorOptions::default();

        assert_eq!(opts.snap_radius, SNAP_RADIUS);
        assert_eq!(opts.trigger_distance, TRIGGER_DISTANCE);
        assert_eq!(opts.history_depth, HISTORY_DEPTH);
    }

    #[test]
    fn missing_optional_fields_fall_back() {
        let toml = "snap_radius = 5.0\nmarker_radius = 2.0\npath_hit_width = 0.25\ntrigger_distance = 15.0\n";
        let opts: EditorOptions = toml::from_str(toml).expect("gültiges TOML");

        assert_eq!(opts.snap_radius, 5.0);
        assert_eq!(opts.spawn_marker_radius, SPAWN_MARKER_RADIUS);
        assert_eq!(opts.free_sample_spacing, FREE_SAMPLE_SPACING);
    }

    #[test]
    fn toml_roundtrip_through_file() {
        let dir = std::env::temp_dir().join(format!("spe_options_{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis");
        let path = dir.join("options.toml");

        let opts = EditorOptions {
            marker_radius: 4.0,
            ..EditorOptions::default()
        };
        opts.save_to_file(&path).expect("speicherbar");
        let loaded = EditorOptions::load_from_file(&path);

        assert_eq!(loaded, opts);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let loaded = EditorOptions::load_from_file(std::path::Path::new("/nonexistent/spe.toml"));
        assert_eq!(loaded, EditorOptions::default());
    }
}
