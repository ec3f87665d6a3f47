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

use crate::maps::MapError;
use crate::maps::map::Map;

/// Builds a fresh map; the zero-argument constructor of a map type.
pub type MapFactory = fn() -> Result<Map, MapError>;

#[derive(Clone, Copy)]
pub enum MapConstructor {
    /// A shared base other map types build on. Cannot be instantiated.
    Abstract,
    /// Needs arguments the level registry cannot supply.
    Parameterized,
    Parameterless(MapFactory),
}

/// Names a kind of map and how to build it. Level definitions refer to map
/// types rather than to map instances so each description gets its own map.
#[derive(Clone, Copy)]
pub struct MapType {
    pub name: &'static str,
    pub constructor: MapConstructor,
}

impl MapType {
    pub const fn new(name: &'static str, factory: MapFactory) -> Self {
        Self { name, constructor: MapConstructor::Parameterless(factory) }
    }

    pub const fn abstract_base(name: &'static str) -> Self {
        Self { name, constructor: MapConstructor::Abstract }
    }

    pub const fn parameterized(name: &'static str) -> Self {
        Self { name, constructor: MapConstructor::Parameterized }
    }

    pub fn is_abstract(&self) -> bool {
        matches!(self.constructor, MapConstructor::Abstract)
    }

    pub fn factory(&self) -> Option<MapFactory> {
        match self.constructor {
            MapConstructor::Parameterless(factory) => Some(factory),
            MapConstructor::Abstract | MapConstructor::Parameterized => None,
        }
    }
}

impl fmt::Debug for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let constructor = match self.constructor {
            MapConstructor::Abstract => "abstract",
            MapConstructor::Parameterized => "parameterized",
            MapConstructor::Parameterless(_) => "parameterless",
        };
        f.debug_struct("MapType")
            .field("name", &self.name)
            .field("constructor", &constructor)
            .finish()
    }
}

impl fmt::Display for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meadow() -> Result<Map, MapError> {
        Ok(Map::flat(10, 10, 0))
    }

    #[test]
    fn only_parameterless_types_have_a_factory() {
        assert!(MapType::new("Meadow", meadow).factory().is_some());
        assert!(MapType::abstract_base("Base").factory().is_none());
        assert!(MapType::abstract_base("Base").is_abstract());
        assert!(MapType::parameterized("Seeded").factory().is_none());
        assert!(!MapType::parameterized("Seeded").is_abstract());
    }
}
