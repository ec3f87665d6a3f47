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

use std::collections::HashSet;

use serde::Deserialize;
use tracing::debug;

use crate::compass::Compass;
use crate::config::MapLimits;
use crate::maps::MapError;
use crate::position::Position;
use crate::tile::{MapTile, MapTileKind};
use crate::tile_map::TileMap;

/// On-disk layout: tiles are listed row by row, top row first.
#[derive(Debug, Deserialize)]
struct MapFile {
    width: usize,
    height: usize,
    tiles: Vec<MapTile>,
    #[serde(default)]
    start_points: Vec<Position>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Map {
    pub tiles: TileMap,
    pub start_points: Vec<Position>,
}

impl Map {
    pub fn new(tiles: TileMap, start_points: Vec<Position>) -> Self {
        Self { tiles, start_points }
    }

    /// A level plain of `width` x `height` flat tiles without start points.
    pub fn flat(width: usize, height: usize, height_level: u8) -> Self {
        Self::new(TileMap::filled(width, height, MapTile::flat(height_level)), Vec::new())
    }

    pub fn with_start_points(mut self, start_points: Vec<Position>) -> Self {
        self.start_points = start_points;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, MapError> {
        let file: MapFile = serde_json::from_str(json)?;
        let limits = MapLimits::default();
        let invalid_size = MapError::InvalidSize { width: file.width, height: file.height };
        if !limits.width_range().contains(&file.width) || !limits.height_range().contains(&file.height) {
            return Err(invalid_size);
        }
        let expected = file.width.checked_mul(file.height).ok_or(invalid_size)?;
        if file.tiles.len() != expected {
            return Err(MapError::TileCountMismatch { expected, found: file.tiles.len() });
        }

        let mut tiles = TileMap::filled(file.width, file.height, MapTile::default());
        for (i, tile) in file.tiles.into_iter().enumerate() {
            tiles[Position::new(i % file.width, i / file.width)] = tile;
        }
        Ok(Self::new(tiles, file.start_points))
    }

    pub fn width(&self) -> usize {
        self.tiles.width()
    }

    pub fn height(&self) -> usize {
        self.tiles.height()
    }

    pub fn tile(&self, pos: Position) -> Option<&MapTile> {
        self.tiles.get(pos)
    }

    pub fn place(&mut self, pos: Position, tile: MapTile) -> Result<(), MapError> {
        let slot = self.tiles.get_mut(pos).ok_or(MapError::OutOfBounds(pos))?;
        *slot = tile;
        Ok(())
    }

    /// The neighbour of `pos` towards `dir`, if it is on the map.
    pub fn neighbor(&self, pos: Position, dir: Compass) -> Option<(Position, &MapTile)> {
        let next = pos.step(dir)?;
        self.tiles.get(next).map(|tile| (next, tile))
    }

    pub fn check_map(&self) -> Result<(), MapError> {
        self.check_map_with(&MapLimits::default())
    }

    pub fn check_map_with(&self, limits: &MapLimits) -> Result<(), MapError> {
        debug!(width = self.width(), height = self.height(), "checking map");

        if !self.tiles.is_rectangular() {
            return Err(MapError::RaggedGrid);
        }
        if !limits.width_range().contains(&self.width()) || !limits.height_range().contains(&self.height()) {
            return Err(MapError::InvalidSize { width: self.width(), height: self.height() });
        }

        self.check_start_points(limits)?;

        for (position, tile) in self.tiles.iter() {
            tile.check().map_err(|source| MapError::Tile { position, source })?;
        }

        // East and South cover every shared edge exactly once.
        for (from, tile) in self.tiles.iter() {
            for side in [Compass::East, Compass::South] {
                let Some((to, other)) = self.neighbor(from, side) else {
                    continue;
                };
                let leaving = tile.enter_level(side).map_err(|source| MapError::Tile { position: from, source })?;
                let entering = other
                    .enter_level(side.opposite())
                    .map_err(|source| MapError::Tile { position: to, source })?;
                if let (Some(leaving), Some(entering)) = (leaving, entering) {
                    if leaving != entering {
                        return Err(MapError::EdgeMismatch { from, to, side, leaving, entering });
                    }
                }
            }
        }

        debug!(start_points = self.start_points.len(), "map is consistent");
        Ok(())
    }

    fn check_start_points(&self, limits: &MapLimits) -> Result<(), MapError> {
        let count = self.start_points.len();
        if count == 0 || count > limits.max_players {
            return Err(MapError::StartPointCount { count, max: limits.max_players });
        }

        let mut seen = HashSet::new();
        for &point in &self.start_points {
            let tile = self.tiles.get(point).ok_or(MapError::StartPointOutOfBounds(point))?;
            if !seen.insert(point) {
                return Err(MapError::DuplicateStartPoint(point));
            }
            if tile.kind != MapTileKind::Flat {
                return Err(MapError::StartPointNotFlat(point));
            }
        }
        Ok(())
    }
}
