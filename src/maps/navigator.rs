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

use pathfinding::prelude::astar;

use crate::{
    compass::Compass,
    maps::{MapError, map::Map},
    position::Position,
};

pub struct Navigator {}

impl Navigator {
    /// Whether an agent can move from `from` to its neighbour towards `dir`.
    /// Both tiles must be open on the shared edge, at the same height.
    pub fn can_step(map: &Map, from: Position, dir: Compass) -> Result<bool, MapError> {
        let tile = map.tile(from).ok_or(MapError::OutOfBounds(from))?;
        let Some((to, next)) = map.neighbor(from, dir) else {
            return Ok(false);
        };

        let leaving = tile
            .enter_level(dir)
            .map_err(|source| MapError::Tile { position: from, source })?;
        let entering = next
            .enter_level(dir.opposite())
            .map_err(|source| MapError::Tile { position: to, source })?;

        Ok(matches!((leaving, entering), (Some(a), Some(b)) if a == b))
    }

    /// Shortest 4-neighbour path from `start` to `goal`, both included.
    /// Tiles are checked up front so the search itself cannot fail.
    pub fn find_path(map: &Map, start: Position, goal: Position) -> Result<Option<Vec<Position>>, MapError> {
        for pos in [start, goal] {
            if !map.tiles.in_bounds(pos) {
                return Err(MapError::OutOfBounds(pos));
            }
        }
        for (position, tile) in map.tiles.iter() {
            tile.check().map_err(|source| MapError::Tile { position, source })?;
        }

        let path = astar(
            &start,
            |&pos| {
                Compass::ALL
                    .iter()
                    .filter(|&&dir| Self::can_step(map, pos, dir).unwrap_or(false))
                    .filter_map(|&dir| pos.step(dir))
                    .map(|next| (next, 10usize))
                    .collect::<Vec<_>>()
            },
            |pos| 10 * pos.manhattan_distance(&goal),
            |&pos| pos == goal,
        )
        .map(|(path, _)| path);

        Ok(path)
    }
}
