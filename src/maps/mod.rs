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

pub mod map;
pub mod map_type;
pub mod navigator;
pub mod tile_info;

use thiserror::Error;

use crate::compass::Compass;
use crate::position::Position;
use crate::tile::TileError;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("map columns have different lengths")]
    RaggedGrid,
    #[error("map size {width}x{height} is outside the allowed range")]
    InvalidSize { width: usize, height: usize },
    #[error("map has {count} start points, expected 1 to {max}")]
    StartPointCount { count: usize, max: usize },
    #[error("start point {0} lies outside the map")]
    StartPointOutOfBounds(Position),
    #[error("start point {0} is listed twice")]
    DuplicateStartPoint(Position),
    #[error("start point {0} is not on flat ground")]
    StartPointNotFlat(Position),
    #[error("position {0} lies outside the map")]
    OutOfBounds(Position),
    #[error("tile at {position} is broken: {source}")]
    Tile {
        position: Position,
        #[source]
        source: TileError,
    },
    #[error("edge between {from} and its {side:?} neighbour {to} does not line up ({leaving} vs {entering})")]
    EdgeMismatch {
        from: Position,
        to: Position,
        side: Compass,
        leaving: u8,
        entering: u8,
    },
    #[error("map declares {expected} tiles but lists {found}")]
    TileCountMismatch { expected: usize, found: usize },
    #[error("map data could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
}
