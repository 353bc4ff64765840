//! Geteilte Konfiguration für Engine und Anwendungsschicht.

pub mod options;

pub use options::EditorOptions;
pub use options::{MARKER_RADIUS, PATH_HIT_WIDTH, SNAP_RADIUS, TRIGGER_DISTANCE};
