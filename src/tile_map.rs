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

use crate::position::Position;
use crate::tile::MapTile;
use std::ops::{Index, IndexMut};

/// Column-major grid: `tiles[x][y]`.
#[derive(Clone, Debug, PartialEq)]
pub struct TileMap {
    tiles: Vec<Vec<MapTile>>,
}

impl TileMap {
    pub fn new(tiles: Vec<Vec<MapTile>>) -> Self {
        Self { tiles }
    }

    pub fn filled(width: usize, height: usize, tile: MapTile) -> Self {
        Self { tiles: vec![vec![tile; height]; width] }
    }

    pub fn width(&self) -> usize {
        self.tiles.len()
    }

    /// Height of the first column; [`TileMap::is_rectangular`] says whether
    /// the others agree.
    pub fn height(&self) -> usize {
        self.tiles.first().map_or(0, Vec::len)
    }

    pub fn is_rectangular(&self) -> bool {
        let height = self.height();
        self.tiles.iter().all(|column| column.len() == height)
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        self.tiles.get(pos.x).is_some_and(|column| pos.y < column.len())
    }

    pub fn get(&self, pos: Position) -> Option<&MapTile> {
        self.tiles.get(pos.x)?.get(pos.y)
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut MapTile> {
        self.tiles.get_mut(pos.x)?.get_mut(pos.y)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &MapTile)> {
        self.tiles.iter().enumerate().flat_map(|(x, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(y, tile)| (Position::new(x, y), tile))
        })
    }
}

impl Index<Position> for TileMap {
    type Output = MapTile;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.tiles[pos.x][pos.y]
    }
}

impl IndexMut<Position> for TileMap {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.tiles[pos.x][pos.y]
    }
}
