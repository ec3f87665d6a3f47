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

use std::ops::Deref;

use crate::{
    compass::Compass,
    item::Item,
    level::Level,
    tile::{MapTile, MapTileKind, Sides, TileError},
};

/// What an observer learns about one tile. Borrows the level, the tile and
/// the observer, so it cannot be kept past the query that created it.
#[derive(Debug, Clone, Copy)]
pub struct MapTileInfo<'a> {
    level: &'a Level,
    tile: &'a MapTile,
    observer: &'a Item,
}

impl<'a> MapTileInfo<'a> {
    pub fn new(level: &'a Level, tile: &'a MapTile, observer: &'a Item) -> Self {
        Self { level, tile, observer }
    }

    pub fn level(&self) -> &'a Level {
        self.level
    }

    pub fn tile(&self) -> &'a MapTile {
        self.tile
    }

    pub fn observer(&self) -> &'a Item {
        self.observer
    }

    pub fn kind(&self) -> MapTileKind {
        self.tile.kind
    }

    pub fn height_level(&self) -> u8 {
        self.tile.height_level
    }

    pub fn enter_level(&self, side: Compass) -> Result<Option<u8>, TileError> {
        self.tile.enter_level(side)
    }

    pub fn open_sides(&self) -> Result<Sides, TileError> {
        self.tile.open_sides()
    }

    /// Sides the observer could step in from without changing height.
    pub fn enterable_sides(&self) -> Result<Sides, TileError> {
        self.sides_at(self.observer.height_level)
    }

    fn sides_at(&self, level: u8) -> Result<Sides, TileError> {
        let mut sides = Sides::NONE;
        for side in Compass::ALL {
            if self.tile.enter_level(side)? == Some(level) {
                sides |= Sides::of(side);
            }
        }
        Ok(sides)
    }
}

/// Info for any cliff tile.
#[derive(Debug, Clone, Copy)]
pub struct CliffMapTileInfo<'a> {
    base: MapTileInfo<'a>,
}

impl<'a> CliffMapTileInfo<'a> {
    fn new(level: &'a Level, tile: &'a MapTile, observer: &'a Item) -> Self {
        Self { base: MapTileInfo::new(level, tile, observer) }
    }

    pub fn lower_level(&self) -> u8 {
        self.base.height_level()
    }

    pub fn upper_level(&self) -> Result<u8, TileError> {
        self.base.tile().upper_level()
    }

    /// Sides that lead onto the plateau.
    pub fn plateau_sides(&self) -> Result<Sides, TileError> {
        self.base.sides_at(self.upper_level()?)
    }
}

impl<'a> Deref for CliffMapTileInfo<'a> {
    type Target = MapTileInfo<'a>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

/// Info for a straight cliff wall.
#[derive(Debug, Clone, Copy)]
pub struct WallCliffMapTileInfo<'a> {
    cliff: CliffMapTileInfo<'a>,
}

impl<'a> WallCliffMapTileInfo<'a> {
    pub fn new(level: &'a Level, tile: &'a MapTile, observer: &'a Item) -> Result<Self, TileError> {
        if tile.kind != MapTileKind::WallCliff {
            return Err(TileError::KindMismatch {
                expected: MapTileKind::WallCliff,
                found: tile.kind,
            });
        }
        Ok(Self { cliff: CliffMapTileInfo::new(level, tile, observer) })
    }

    /// The downhill side of the wall.
    pub fn facing(&self) -> Result<Compass, TileError> {
        self.cliff.tile().orientation()
    }
}

impl<'a> Deref for WallCliffMapTileInfo<'a> {
    type Target = CliffMapTileInfo<'a>;

    fn deref(&self) -> &Self::Target {
        &self.cliff
    }
}

#[derive(Debug, Clone, Copy)]
pub enum TileInfo<'a> {
    Flat(MapTileInfo<'a>),
    WallCliff(WallCliffMapTileInfo<'a>),
    ConcaveCliff(CliffMapTileInfo<'a>),
    ConvexCliff(CliffMapTileInfo<'a>),
}

impl<'a> TileInfo<'a> {
    /// Picks the info type matching the tile's kind.
    pub fn for_tile(level: &'a Level, tile: &'a MapTile, observer: &'a Item) -> Self {
        match tile.kind {
            MapTileKind::Flat => TileInfo::Flat(MapTileInfo::new(level, tile, observer)),
            MapTileKind::WallCliff => TileInfo::WallCliff(WallCliffMapTileInfo {
                cliff: CliffMapTileInfo::new(level, tile, observer),
            }),
            MapTileKind::ConcaveCliff => TileInfo::ConcaveCliff(CliffMapTileInfo::new(level, tile, observer)),
            MapTileKind::ConvexCliff => TileInfo::ConvexCliff(CliffMapTileInfo::new(level, tile, observer)),
        }
    }

    pub fn base(&self) -> &MapTileInfo<'a> {
        match self {
            TileInfo::Flat(info) => info,
            TileInfo::WallCliff(info) => info,
            TileInfo::ConcaveCliff(info) | TileInfo::ConvexCliff(info) => info,
        }
    }
}
