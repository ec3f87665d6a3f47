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

use tracing::info;

use crate::level_description::{LevelDescription, LevelError};
use crate::item::Item;
use crate::level_id::LevelId;
use crate::maps::map::Map;
use crate::maps::tile_info::TileInfo;
use crate::position::Position;

/// A running level. Owns its own copy of the map so the description it was
/// started from stays untouched.
#[derive(Debug, Clone)]
pub struct Level {
    id: LevelId,
    name: String,
    map: Map,
}

impl Level {
    pub fn new(id: LevelId, name: impl Into<String>, map: Map) -> Self {
        Self { id, name: name.into(), map }
    }

    /// Starts a level from a description, which has to validate first.
    pub fn from_description(description: &LevelDescription) -> Result<Self, LevelError> {
        description.validate()?;
        let map = description.map.clone().ok_or_else(|| LevelError::MissingMap {
            name: description.name.clone(),
        })?;
        info!(id = %description.id, name = %description.name, "starting level");
        Ok(Self::new(description.id, description.name.clone(), map))
    }

    pub fn id(&self) -> LevelId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    /// What `observer` sees of the tile at `pos`, if there is one.
    pub fn tile_info<'a>(&'a self, pos: Position, observer: &'a Item) -> Option<TileInfo<'a>> {
        let tile = self.map.tile(pos)?;
        Some(TileInfo::for_tile(self, tile, observer))
    }
}
