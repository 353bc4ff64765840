//! Use-Cases der Application-Layer-Orchestrierung.

pub mod entities;
pub mod path_editing;
pub mod road_graph;
