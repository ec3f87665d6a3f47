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

use serde::{Deserialize, Serialize};

use crate::compass::Compass;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The position one step towards `dir`, or `None` when that would leave
    /// the top or left edge of the grid. The right and bottom edges are the
    /// map's concern.
    pub fn step(&self, dir: Compass) -> Option<Self> {
        let (dx, dy) = dir.offset();
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    /// Cardinal neighbours paired with the direction that leads to them.
    pub fn neighbors(&self) -> Vec<(Compass, Position)> {
        Compass::ALL
            .iter()
            .filter_map(|&dir| self.step(dir).map(|pos| (dir, pos)))
            .collect()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_stops_at_top_left_edges() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Compass::North), None);
        assert_eq!(origin.step(Compass::West), None);
        assert_eq!(origin.step(Compass::East), Some(Position::new(1, 0)));
        assert_eq!(origin.step(Compass::South), Some(Position::new(0, 1)));
        assert_eq!(origin.neighbors().len(), 2);
    }

    #[test]
    fn step_stops_at_the_far_edge_of_usize() {
        let corner = Position::new(usize::MAX, usize::MAX);
        assert_eq!(corner.step(Compass::East), None);
        assert_eq!(corner.step(Compass::South), None);
        assert_eq!(corner.step(Compass::West), Some(Position::new(usize::MAX - 1, usize::MAX)));
    }

    #[test]
    fn step_and_back_returns_home() {
        let pos = Position::new(4, 7);
        for dir in Compass::ALL {
            let there = pos.step(dir).unwrap();
            assert_eq!(there.step(dir.opposite()), Some(pos));
            assert_eq!(pos.manhattan_distance(&there), 1);
        }
    }
}
