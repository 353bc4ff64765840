//! Szenario-Entitäten (Fahrzeuge, Fußgänger) und ihre Registry.

use indexmap::IndexMap;
use scenario_path_engine::{EntityId, Location, PathEditor};
use serde::{Deserialize, Serialize};

/// Kategorie einer Entität; bestimmt, ob der Pfad dem Straßengraphen folgt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EntityCategory {
    /// PKW
    #[default]
    Car,
    /// Motorrad
    Motorcycle,
    /// Fahrrad
    Bike,
    /// Fußgänger
    Pedestrian,
}

impl EntityCategory {
    /// Fahrräder und Fußgänger bewegen sich frei, ohne Straßengraph.
    pub fn ignores_road_graph(self) -> bool {
        match self {
            EntityCategory::Car | EntityCategory::Motorcycle => false,
            EntityCategory::Bike | EntityCategory::Pedestrian => true,
        }
    }

    /// Anzeigename der Kategorie.
    pub fn label(self) -> &'static str {
        match self {
            EntityCategory::Car => "Car",
            EntityCategory::Motorcycle => "Motorcycle",
            EntityCategory::Bike => "Bike",
            EntityCategory::Pedestrian => "Pedestrian",
        }
    }
}

/// Eine platzierte Entität mit Spawn-Position und eigenem Pfad-Editor.
#[derive(Debug, Clone)]
pub struct ScenarioEntity {
    pub id: EntityId,
    /// Anzeigename (`"<Kategorie> <id>"`)
    pub name: String,
    pub category: EntityCategory,
    /// Spawn-Position (= Anker des Pfads)
    pub spawn: Location,
    /// Pfad der Entität
    pub path: PathEditor,
}

/// Alle Entitäten einer Session in Einfügereihenfolge.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    entities: IndexMap<EntityId, ScenarioEntity>,
}

impl EntityRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entity: ScenarioEntity) {
        self.entities.insert(entity.id, entity);
    }

    /// Entfernt eine Entität; die Reihenfolge der übrigen bleibt erhalten.
    pub fn remove(&mut self, id: EntityId) -> Option<ScenarioEntity> {
        self.entities.shift_remove(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&ScenarioEntity> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut ScenarioEntity> {
        self.entities.get_mut(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Iterator in Einfügereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &ScenarioEntity> {
        self.entities.values()
    }

    /// Mutabler Iterator in Einfügereihenfolge.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ScenarioEntity> {
        self.entities.values_mut()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
