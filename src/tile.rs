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

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compass::Compass;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum TileError {
    #[error("wrong orientation: {0} is not a compass value")]
    InvalidOrientation(u8),
    #[error("height level {0} has no level above it")]
    HeightOverflow(u8),
    #[error("expected a {expected:?} tile, found {found:?}")]
    KindMismatch {
        expected: MapTileKind,
        found: MapTileKind,
    },
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Sides: u8 {
        const NONE  = 0;
        const EAST  = 0b0001;
        const SOUTH = 0b0010;
        const WEST  = 0b0100;
        const NORTH = 0b1000;
    }
}

impl Sides {
    pub fn of(dir: Compass) -> Sides {
        Sides::from_bits_truncate(1 << dir.index())
    }
}

/// What a tile side looks like to someone stepping onto it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Edge {
    /// Arrive at the tile's own height level.
    Base,
    /// Arrive on the plateau one level up.
    Raised,
    /// Cliff face, no way in.
    Blocked,
}

use Edge::{Base, Blocked, Raised};

// Rows are orientations, columns are sides, both in compass order E, S, W, N.
// Every table is one shape under four rotations: row o + 1, column s + 1 holds
// the same edge as row o, column s.
type EdgeTable = [[Edge; 4]; 4];

const FLAT: EdgeTable = [[Base; 4]; 4];

// Orientation names the downhill side.
const WALL_CLIFF: EdgeTable = [
    [Base, Blocked, Raised, Blocked],
    [Blocked, Base, Blocked, Raised],
    [Raised, Blocked, Base, Blocked],
    [Blocked, Raised, Blocked, Base],
];

//
// Orientation East:
//
// #####
// #++++
// #+
// #+
//
const CONCAVE_CLIFF: EdgeTable = [
    [Blocked, Raised, Raised, Blocked],
    [Blocked, Blocked, Raised, Raised],
    [Raised, Blocked, Blocked, Raised],
    [Raised, Raised, Blocked, Blocked],
];

const CONVEX_CLIFF: EdgeTable = [
    [Base, Blocked, Blocked, Base],
    [Base, Base, Blocked, Blocked],
    [Blocked, Base, Base, Blocked],
    [Blocked, Blocked, Base, Base],
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapTileKind {
    Flat,
    WallCliff,
    ConcaveCliff,
    ConvexCliff,
}

impl MapTileKind {
    pub const ALL: [MapTileKind; 4] = [
        MapTileKind::Flat,
        MapTileKind::WallCliff,
        MapTileKind::ConcaveCliff,
        MapTileKind::ConvexCliff,
    ];

    fn edges(self) -> &'static EdgeTable {
        match self {
            MapTileKind::Flat => &FLAT,
            MapTileKind::WallCliff => &WALL_CLIFF,
            MapTileKind::ConcaveCliff => &CONCAVE_CLIFF,
            MapTileKind::ConvexCliff => &CONVEX_CLIFF,
        }
    }

    pub fn is_cliff(self) -> bool {
        !matches!(self, MapTileKind::Flat)
    }
}

/// A single cell of the map. Orientation is kept as the raw byte from the map
/// data; it is only turned into a [`Compass`] when queried.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapTile {
    pub kind: MapTileKind,
    pub height_level: u8,
    #[serde(default)]
    orientation: u8,
}

impl MapTile {
    pub fn new(kind: MapTileKind, height_level: u8, orientation: Compass) -> Self {
        Self::from_raw(kind, height_level, orientation.into())
    }

    pub fn from_raw(kind: MapTileKind, height_level: u8, orientation: u8) -> Self {
        Self { kind, height_level, orientation }
    }

    pub fn flat(height_level: u8) -> Self {
        Self::new(MapTileKind::Flat, height_level, Compass::East)
    }

    pub fn wall_cliff(height_level: u8, facing: Compass) -> Self {
        Self::new(MapTileKind::WallCliff, height_level, facing)
    }

    pub fn concave_cliff(height_level: u8, orientation: Compass) -> Self {
        Self::new(MapTileKind::ConcaveCliff, height_level, orientation)
    }

    pub fn convex_cliff(height_level: u8, orientation: Compass) -> Self {
        Self::new(MapTileKind::ConvexCliff, height_level, orientation)
    }

    pub fn orientation(&self) -> Result<Compass, TileError> {
        Compass::try_from(self.orientation)
    }

    pub fn raw_orientation(&self) -> u8 {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Compass) {
        self.orientation = orientation.into();
    }

    /// Height of the plateau a cliff tile leads up to.
    pub fn upper_level(&self) -> Result<u8, TileError> {
        self.height_level
            .checked_add(1)
            .ok_or(TileError::HeightOverflow(self.height_level))
    }

    /// Level an agent arrives at when stepping onto this tile from `side`,
    /// or `None` when that side cannot be entered.
    pub fn enter_level(&self, side: Compass) -> Result<Option<u8>, TileError> {
        let orientation = self.orientation()?;
        match self.kind.edges()[orientation.index()][side.index()] {
            Base => Ok(Some(self.height_level)),
            Raised => self.upper_level().map(Some),
            Blocked => Ok(None),
        }
    }

    pub fn enter_level_east(&self) -> Result<Option<u8>, TileError> {
        self.enter_level(Compass::East)
    }

    pub fn enter_level_south(&self) -> Result<Option<u8>, TileError> {
        self.enter_level(Compass::South)
    }

    pub fn enter_level_west(&self) -> Result<Option<u8>, TileError> {
        self.enter_level(Compass::West)
    }

    pub fn enter_level_north(&self) -> Result<Option<u8>, TileError> {
        self.enter_level(Compass::North)
    }

    pub fn open_sides(&self) -> Result<Sides, TileError> {
        let mut sides = Sides::NONE;
        for side in Compass::ALL {
            if self.enter_level(side)?.is_some() {
                sides |= Sides::of(side);
            }
        }
        Ok(sides)
    }

    /// Runs every side query once so that bad data surfaces at load time
    /// instead of in the middle of a path search.
    pub fn check(&self) -> Result<(), TileError> {
        for side in Compass::ALL {
            self.enter_level(side)?;
        }
        Ok(())
    }
}

impl Default for MapTile {
    fn default() -> Self {
        MapTile::flat(0)
    }
}
