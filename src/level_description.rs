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

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::config::MAX_PLAYERS;
use crate::level_id::LevelId;
use crate::maps::MapError;
use crate::maps::map::Map;
use crate::maps::map_type::MapType;
use crate::resources::ResourceBundle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapTypeIssue {
    Abstract,
    NoParameterlessConstructor,
}

impl fmt::Display for MapTypeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapTypeIssue::Abstract => f.write_str("is abstract"),
            MapTypeIssue::NoParameterlessConstructor => f.write_str("has no parameterless constructor"),
        }
    }
}

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("invalid id format in level description: {0:?}")]
    InvalidIdFormat(String),
    #[error("level id cannot be empty")]
    EmptyId,
    #[error("the level description with the id {id} has no valid name")]
    MissingName { id: LevelId },
    #[error("the level description with the id {id} and name '{name}' has no valid description")]
    MissingDescription { id: LevelId, name: String },
    #[error("the level description with the name '{name}' has no valid map")]
    MissingMap { name: String },
    #[error("the level description with the name '{name}' uses map type {map_type}, which {issue}")]
    InvalidMapType {
        name: String,
        map_type: &'static str,
        issue: MapTypeIssue,
    },
    #[error("resource bundle {bundle} has no string for key {key:?}")]
    MissingResource { bundle: String, key: String },
    #[error("minimum player count {0} must be between 0 and 8")]
    MinPlayerCountOutOfRange(i32),
    #[error("maximum player count {0} must be between 0 and 8")]
    MaxPlayerCountOutOfRange(i32),
    #[error("a level with the id {0} is already registered")]
    DuplicateId(LevelId),
    #[error(transparent)]
    Map(#[from] MapError),
}

/// Everything the game needs to list and start a level: identity, texts,
/// player bounds and a checked map.
#[derive(Debug, Clone)]
pub struct LevelDescription {
    pub id: LevelId,
    pub name: String,
    pub description: String,
    pub map: Option<Map>,
    pub min_player_count: i32,
    pub max_player_count: i32,
    /// Kept out of free play, e.g. campaign-only levels.
    pub hidden: bool,
}

impl LevelDescription {
    /// Builds the map from `map_type` and checks it. Nothing is returned
    /// unless every field and the map are valid.
    pub fn new(guid: &str, map_type: Option<&MapType>, name: &str, description: &str) -> Result<Self, LevelError> {
        let id = LevelId::parse(guid).ok_or_else(|| LevelError::InvalidIdFormat(guid.to_string()))?;
        if id.is_empty() {
            return Err(LevelError::EmptyId);
        }
        if name.is_empty() {
            return Err(LevelError::MissingName { id });
        }
        if description.is_empty() {
            return Err(LevelError::MissingDescription { id, name: name.to_string() });
        }

        let map_type = map_type.ok_or_else(|| LevelError::MissingMap { name: name.to_string() })?;
        let invalid = |issue| LevelError::InvalidMapType {
            name: name.to_string(),
            map_type: map_type.name,
            issue,
        };
        if map_type.is_abstract() {
            return Err(invalid(MapTypeIssue::Abstract));
        }
        let factory = map_type
            .factory()
            .ok_or_else(|| invalid(MapTypeIssue::NoParameterlessConstructor))?;

        let map = factory()?;
        map.check_map()?;
        debug!(%id, name, map_type = map_type.name, "level description created");

        Ok(Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            map: Some(map),
            min_player_count: 0,
            max_player_count: MAX_PLAYERS as i32,
            hidden: false,
        })
    }

    /// Same as [`LevelDescription::new`], with name and description looked
    /// up in `resources`.
    pub fn from_resources(
        guid: &str,
        map_type: Option<&MapType>,
        resources: &dyn ResourceBundle,
        name_key: &str,
        description_key: &str,
    ) -> Result<Self, LevelError> {
        let lookup = |key: &str| {
            resources.get_string(key).ok_or_else(|| LevelError::MissingResource {
                bundle: resources.name().to_string(),
                key: key.to_string(),
            })
        };
        let name = lookup(name_key)?;
        let description = lookup(description_key)?;
        Self::new(guid, map_type, name, description)
    }

    /// Re-checks the current field values, stopping at the first problem.
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.id.is_empty() {
            return Err(LevelError::EmptyId);
        }
        if self.name.is_empty() {
            return Err(LevelError::MissingName { id: self.id });
        }
        if self.description.is_empty() {
            return Err(LevelError::MissingDescription { id: self.id, name: self.name.clone() });
        }

        let map = self
            .map
            .as_ref()
            .ok_or_else(|| LevelError::MissingMap { name: self.name.clone() })?;
        map.check_map()?;
        self.check_player_counts()
    }

    /// The part of [`validate`](Self::validate) that construction leaves to
    /// the caller, since `new` always starts from the defaults.
    pub(crate) fn check_player_counts(&self) -> Result<(), LevelError> {
        let players = 0..=MAX_PLAYERS as i32;
        if !players.contains(&self.min_player_count) {
            return Err(LevelError::MinPlayerCountOutOfRange(self.min_player_count));
        }
        if !players.contains(&self.max_player_count) {
            return Err(LevelError::MaxPlayerCountOutOfRange(self.max_player_count));
        }
        Ok(())
    }
}
