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

use serde::{Deserialize, Serialize};

use crate::tile::TileError;

/// One of the four directions a tile can face. The discriminant is the raw
/// byte stored in map data.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compass {
    East = 0,
    South = 1,
    West = 2,
    North = 3,
}

impl Compass {
    pub const ALL: [Compass; 4] = [Compass::East, Compass::South, Compass::West, Compass::North];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn degrees(self) -> u16 {
        self as u16 * 90
    }

    /// Next direction clockwise (E -> S -> W -> N -> E).
    pub fn rotate_cw(self) -> Compass {
        Compass::ALL[(self.index() + 1) % 4]
    }

    pub fn rotate_ccw(self) -> Compass {
        Compass::ALL[(self.index() + 3) % 4]
    }

    pub fn opposite(self) -> Compass {
        Compass::ALL[(self.index() + 2) % 4]
    }

    /// Grid offset of one step in this direction. North is towards y = 0.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Compass::East => (1, 0),
            Compass::South => (0, 1),
            Compass::West => (-1, 0),
            Compass::North => (0, -1),
        }
    }
}

impl From<Compass> for u8 {
    fn from(dir: Compass) -> u8 {
        dir as u8
    }
}

impl TryFrom<u8> for Compass {
    type Error = TileError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Compass::East),
            1 => Ok(Compass::South),
            2 => Ok(Compass::West),
            3 => Ok(Compass::North),
            other => Err(TileError::InvalidOrientation(other)),
        }
    }
}
