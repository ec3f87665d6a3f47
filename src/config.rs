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

/// Upper bound on players in a level, and on start points in a map.
pub const MAX_PLAYERS: usize = 8;

/// Structural limits a map has to respect before it can be played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapLimits {
    pub min_width: usize,
    pub max_width: usize,
    pub min_height: usize,
    pub max_height: usize,
    pub max_players: usize,
}

impl Default for MapLimits {
    fn default() -> Self {
        Self {
            min_width: 10,
            max_width: 200,
            min_height: 10,
            max_height: 200,
            max_players: MAX_PLAYERS,
        }
    }
}

impl MapLimits {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn width_range(&self) -> std::ops::RangeInclusive<usize> {
        self.min_width..=self.max_width
    }

    pub fn height_range(&self) -> std::ops::RangeInclusive<usize> {
        self.min_height..=self.max_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let limits = MapLimits::from_json(r#"{"max_width": 64}"#).unwrap();
        assert_eq!(limits.max_width, 64);
        assert_eq!(limits.min_width, 10);
        assert_eq!(limits.max_players, MAX_PLAYERS);
    }
}
