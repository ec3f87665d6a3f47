// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;
use tracing::{info, warn};

use crate::config::MAX_PLAYERS;
use crate::level_description::{LevelDescription, LevelError};
use crate::level_id::LevelId;
use crate::maps::map_type::MapType;

/// Static description of a level, declared next to the map it uses:
///
/// ```
/// # use colony_terrain::maps::{MapError, map::Map, map_type::MapType};
/// # use colony_terrain::position::Position;
/// # use colony_terrain::registry::LevelDefinition;
/// fn meadow() -> Result<Map, MapError> {
///     Ok(Map::flat(16, 16, 0).with_start_points(vec![Position::new(2, 2)]))
/// }
///
/// static MEADOW: MapType = MapType::new("Meadow", meadow);
/// static FIRST_STEPS: LevelDefinition =
///     LevelDefinition::new("9a3c5d0e-2f41-4b7a-8e6d-1c2b3a4f5e60", &MEADOW, "First Steps", "Find the sugar.")
///         .players(1, 1);
///
/// assert_eq!(FIRST_STEPS.describe().unwrap().max_player_count, 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LevelDefinition {
    pub guid: &'static str,
    pub map_type: &'static MapType,
    pub name: &'static str,
    pub description: &'static str,
    pub min_player_count: i32,
    pub max_player_count: i32,
    pub hidden: bool,
}

impl LevelDefinition {
    pub const fn new(
        guid: &'static str,
        map_type: &'static MapType,
        name: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            guid,
            map_type,
            name,
            description,
            min_player_count: 0,
            max_player_count: MAX_PLAYERS as i32,
            hidden: false,
        }
    }

    pub const fn players(mut self, min: i32, max: i32) -> Self {
        self.min_player_count = min;
        self.max_player_count = max;
        self
    }

    pub const fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Builds and validates the description, map included.
    pub fn describe(&self) -> Result<LevelDescription, LevelError> {
        let mut description = LevelDescription::new(self.guid, Some(self.map_type), self.name, self.description)?;
        description.min_player_count = self.min_player_count;
        description.max_player_count = self.max_player_count;
        description.hidden = self.hidden;
        description.check_player_counts()?;
        Ok(description)
    }
}

/// Valid levels keyed by id, in registration order.
#[derive(Debug, Default)]
pub struct LevelRegistry {
    levels: Vec<LevelDescription>,
    index: HashMap<LevelId, usize>,
}

impl LevelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, description: LevelDescription) -> Result<LevelId, LevelError> {
        if let Err(err) = description.validate() {
            warn!(id = %description.id, name = %description.name, %err, "level rejected");
            return Err(err);
        }
        self.insert(description)
    }

    pub fn register_definition(&mut self, definition: &LevelDefinition) -> Result<LevelId, LevelError> {
        self.insert(describe(definition)?)
    }

    /// Adds an already validated description.
    fn insert(&mut self, description: LevelDescription) -> Result<LevelId, LevelError> {
        let id = description.id;
        if self.index.contains_key(&id) {
            warn!(%id, name = %description.name, "level id registered twice");
            return Err(LevelError::DuplicateId(id));
        }

        info!(%id, name = %description.name, hidden = description.hidden, "level registered");
        self.index.insert(id, self.levels.len());
        self.levels.push(description);
        Ok(id)
    }

    pub fn get(&self, id: &LevelId) -> Option<&LevelDescription> {
        self.index.get(id).map(|&i| &self.levels[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelDescription> {
        self.levels.iter()
    }

    /// Levels open for free play.
    pub fn playable(&self) -> impl Iterator<Item = &LevelDescription> {
        self.levels.iter().filter(|level| !level.hidden)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

fn describe(definition: &LevelDefinition) -> Result<LevelDescription, LevelError> {
    definition.describe().inspect_err(|err| {
        warn!(guid = definition.guid, name = definition.name, %err, "level rejected");
    })
}

static LEVELS: Lazy<Mutex<LevelRegistry>> = Lazy::new(|| Mutex::new(LevelRegistry::new()));

fn levels() -> MutexGuard<'static, LevelRegistry> {
    // The registry is only ever appended to after validation, so a panic
    // elsewhere cannot leave it half-updated.
    LEVELS.lock().unwrap_or_else(PoisonError::into_inner)
}

// Map factories run before the registry is locked, so a factory may look up
// levels that are already registered.

pub fn register_level(definition: &LevelDefinition) -> Result<LevelId, LevelError> {
    let description = describe(definition)?;
    levels().insert(description)
}

/// Registers `definitions` in order and stops at the first failure; levels
/// registered before it stay registered.
pub fn register_levels(definitions: &[LevelDefinition]) -> Result<usize, LevelError> {
    let mut described = Vec::with_capacity(definitions.len());
    let mut failure = None;
    for definition in definitions {
        match describe(definition) {
            Ok(description) => described.push(description),
            Err(err) => {
                failure = Some(err);
                break;
            }
        }
    }

    let mut registry = levels();
    for description in described {
        registry.insert(description)?;
    }
    match failure {
        Some(err) => Err(err),
        None => Ok(definitions.len()),
    }
}

pub fn find_level(id: &LevelId) -> Option<LevelDescription> {
    levels().get(id).cloned()
}

pub fn registered_levels() -> Vec<LevelDescription> {
    levels().iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use std::fmt;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tracing::field::{Field, Visit};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    use super::*;
    use crate::maps::MapError;
    use crate::maps::map::Map;
    use crate::position::Position;

    fn meadow() -> Result<Map, MapError> {
        Ok(Map::flat(10, 10, 0).with_start_points(vec![Position::new(1, 1), Position::new(8, 8)]))
    }

    static MEADOW: MapType = MapType::new("Meadow", meadow);

    static OPEN: LevelDefinition =
        LevelDefinition::new("33333333-3333-3333-3333-333333333333", &MEADOW, "Open", "Free play.");
    static CAMPAIGN: LevelDefinition =
        LevelDefinition::new("44444444-4444-4444-4444-444444444444", &MEADOW, "Campaign", "Story only.")
            .players(1, 1)
            .hidden();

    #[test]
    fn hidden_levels_are_not_playable() {
        let mut registry = LevelRegistry::new();
        registry.register_definition(&OPEN).unwrap();
        let campaign = registry.register_definition(&CAMPAIGN).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.playable().map(|l| l.name.as_str()).collect::<Vec<_>>(), vec!["Open"]);
        let stored = registry.get(&campaign).unwrap();
        assert!(stored.hidden);
        assert_eq!((stored.min_player_count, stored.max_player_count), (1, 1));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut registry = LevelRegistry::new();
        registry.register_definition(&OPEN).unwrap();
        assert!(matches!(registry.register_definition(&OPEN), Err(LevelError::DuplicateId(_))));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn invalid_definitions_never_register() {
        let mut registry = LevelRegistry::new();
        let crowded = OPEN.players(0, 9);
        assert!(matches!(
            registry.register_definition(&crowded),
            Err(LevelError::MaxPlayerCountOutOfRange(9))
        ));

        let mut description = OPEN.describe().unwrap();
        description.name.clear();
        assert!(matches!(registry.register(description), Err(LevelError::MissingName { .. })));
        assert!(registry.is_empty());
    }

    /// Counts the "checking map" events emitted by `Map::check_map_with`.
    #[derive(Clone, Default)]
    struct MapChecks(Arc<AtomicUsize>);

    #[derive(Default)]
    struct Message(String);

    impl Visit for Message {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{value:?}");
            }
        }
    }

    impl<S: Subscriber> Layer<S> for MapChecks {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut message = Message::default();
            event.record(&mut message);
            if message.0 == "checking map" {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn count_map_checks(register: impl FnOnce()) -> usize {
        let checks = MapChecks::default();
        let subscriber = tracing_subscriber::registry().with(checks.clone());
        tracing::subscriber::with_default(subscriber, register);
        checks.0.load(Ordering::SeqCst)
    }

    #[test]
    fn registering_a_definition_checks_its_map_once() {
        let checks = count_map_checks(|| {
            LevelRegistry::new().register_definition(&OPEN).unwrap();
        });
        assert_eq!(checks, 1);
    }

    #[test]
    fn registering_a_description_rechecks_its_map() {
        let description = OPEN.describe().unwrap();
        let checks = count_map_checks(|| {
            LevelRegistry::new().register(description).unwrap();
        });
        assert_eq!(checks, 1);
    }
}
