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

//! End-to-end: declare maps and levels, register them, start a level and
//! look at its tiles.

use colony_terrain::compass::Compass;
use colony_terrain::item::Item;
use colony_terrain::level::Level;
use colony_terrain::level_description::{LevelDescription, LevelError};
use colony_terrain::level_id::LevelId;
use colony_terrain::logging::init_tracing_default;
use colony_terrain::maps::MapError;
use colony_terrain::maps::map::Map;
use colony_terrain::maps::map_type::MapType;
use colony_terrain::maps::navigator::Navigator;
use colony_terrain::maps::tile_info::{TileInfo, WallCliffMapTileInfo};
use colony_terrain::position::Position;
use colony_terrain::registry::{self, LevelDefinition};
use colony_terrain::tile::{MapTile, Sides};

fn test_map() -> Result<Map, MapError> {
    Ok(Map::flat(10, 10, 0).with_start_points(vec![Position::new(0, 0), Position::new(9, 9)]))
}

/// 12x10 map: lowland in columns 0..=4, wall cliffs facing west in column 5,
/// plateau at height 1 beyond.
fn ridge() -> Result<Map, MapError> {
    let mut map = Map::flat(12, 10, 0).with_start_points(vec![Position::new(1, 5), Position::new(10, 5)]);
    for y in 0..10 {
        map.place(Position::new(5, y), MapTile::wall_cliff(0, Compass::West))?;
        for x in 6..12 {
            map.place(Position::new(x, y), MapTile::flat(1))?;
        }
    }
    Ok(map)
}

static TEST_MAP: MapType = MapType::new("TestMap", test_map);
static RIDGE: MapType = MapType::new("Ridge", ridge);

static RIDGE_LEVEL: LevelDefinition =
    LevelDefinition::new("5c6d7e8f-0a1b-4c2d-9e3f-405162738495", &RIDGE, "Ridge", "Climb the ridge.").players(2, 2);
static SECRET_LEVEL: LevelDefinition =
    LevelDefinition::new("{6d7e8f90-1a2b-4c3d-8e4f-506172839405}", &TEST_MAP, "Secret", "Hidden away.").hidden();

#[test]
fn test_level_builds_and_validates() {
    init_tracing_default();

    let level = LevelDescription::new(
        "11111111-1111-1111-1111-111111111111",
        Some(&TEST_MAP),
        "Test",
        "A test level",
    )
    .unwrap();
    assert_eq!(level.min_player_count, 0);
    assert_eq!(level.max_player_count, 8);
    assert!(!level.hidden);
    level.validate().unwrap();
}

#[test]
fn bad_guid_fails_before_the_map_is_built() {
    fn exploding() -> Result<Map, MapError> {
        panic!("map must not be built for a bad guid");
    }
    let exploding_type = MapType::new("Exploding", exploding);
    assert!(matches!(
        LevelDescription::new("not-a-guid", Some(&exploding_type), "Test", "A test level"),
        Err(LevelError::InvalidIdFormat(_))
    ));
}

#[test]
fn registered_levels_can_be_found_and_started() {
    let ridge_id = registry::register_level(&RIDGE_LEVEL).unwrap();
    let secret_id = registry::register_level(&SECRET_LEVEL).unwrap();
    assert!(matches!(registry::register_level(&RIDGE_LEVEL), Err(LevelError::DuplicateId(id)) if id == ridge_id));

    let all = registry::registered_levels();
    assert!(all.iter().any(|l| l.id == ridge_id));
    assert!(all.iter().any(|l| l.id == secret_id && l.hidden));

    let description = registry::find_level(&ridge_id).unwrap();
    assert_eq!(description.name, "Ridge");
    assert_eq!((description.min_player_count, description.max_player_count), (2, 2));
    assert!(registry::find_level(&LevelId::from_bytes([0xAB; 16])).is_none());

    let level = Level::from_description(&description).unwrap();
    let ant = Item::new(1, Position::new(4, 3), 0);

    match level.tile_info(Position::new(5, 3), &ant) {
        Some(TileInfo::WallCliff(info)) => {
            assert_eq!(info.facing().unwrap(), Compass::West);
            assert_eq!(info.enterable_sides().unwrap(), Sides::WEST);
            assert_eq!(info.plateau_sides().unwrap(), Sides::EAST);
        }
        other => panic!("expected a wall cliff, got {other:?}"),
    }

    let tile = level.map().tile(Position::new(5, 3)).unwrap();
    let info = WallCliffMapTileInfo::new(&level, tile, &ant).unwrap();
    assert_eq!(info.level().name(), "Ridge");

    let path = Navigator::find_path(level.map(), Position::new(1, 5), Position::new(10, 5))
        .unwrap()
        .unwrap();
    assert_eq!(path.len(), 10);
    assert!(path.windows(2).all(|step| step[0].manhattan_distance(&step[1]) == 1));
}

#[test]
fn broken_map_type_never_registers() {
    fn cliff_on_start() -> Result<Map, MapError> {
        let mut map = test_map()?;
        map.place(Position::new(9, 9), MapTile::concave_cliff(0, Compass::North))?;
        Ok(map)
    }
    static BROKEN: MapType = MapType::new("Broken", cliff_on_start);
    static BROKEN_LEVEL: LevelDefinition =
        LevelDefinition::new("7e8f9001-2b3c-4d4e-8f50-617283940516", &BROKEN, "Broken", "Should not load.");

    assert!(matches!(
        registry::register_level(&BROKEN_LEVEL),
        Err(LevelError::Map(MapError::StartPointNotFlat(_)))
    ));
    let id = LevelId::parse(BROKEN_LEVEL.guid).unwrap();
    assert!(registry::find_level(&id).is_none());
}

#[test]
fn batch_registration_keeps_levels_before_the_first_failure() {
    static BATCH: [LevelDefinition; 3] = [
        LevelDefinition::new("8f900112-3c4d-4e5f-9061-728394a5b6c7", &TEST_MAP, "Batch One", "First."),
        LevelDefinition::new("90011223-4d5e-4f60-8172-8394a5b6c7d8", &TEST_MAP, "Batch Two", "Crowded.").players(0, 9),
        LevelDefinition::new("a1122334-5e6f-4071-8283-94a5b6c7d8e9", &TEST_MAP, "Batch Three", "Never reached."),
    ];

    assert!(matches!(registry::register_levels(&BATCH), Err(LevelError::MaxPlayerCountOutOfRange(9))));
    let [first, second, third] = BATCH.map(|definition| LevelId::parse(definition.guid).unwrap());
    assert_eq!(registry::find_level(&first).unwrap().name, "Batch One");
    assert!(registry::find_level(&second).is_none());
    assert!(registry::find_level(&third).is_none());
}

#[test]
fn map_factories_may_query_the_registry() {
    const SUGAR_GUID: &str = "b2233445-6f70-4182-9394-a5b6c7d8e9fa";

    fn sugar() -> Result<Map, MapError> {
        // Only builds the big map once the small one is registered.
        let ready = LevelId::parse(SUGAR_GUID).and_then(|id| registry::find_level(&id)).is_some();
        let width = if ready { 20 } else { 10 };
        Ok(Map::flat(width, 10, 0).with_start_points(vec![Position::new(1, 1)]))
    }
    static SUGAR: MapType = MapType::new("Sugar", sugar);
    static SMALL: LevelDefinition = LevelDefinition::new(SUGAR_GUID, &SUGAR, "Sugar", "Small.");
    static LARGE: [LevelDefinition; 1] =
        [LevelDefinition::new("c3344556-7081-4293-a4b5-b6c7d8e9fa0b", &SUGAR, "More Sugar", "Large.")];

    let small = registry::register_level(&SMALL).unwrap();
    assert_eq!(registry::register_levels(&LARGE).unwrap(), 1);

    assert_eq!(registry::find_level(&small).unwrap().map.unwrap().width(), 10);
    let large = LevelId::parse(LARGE[0].guid).unwrap();
    assert_eq!(registry::find_level(&large).unwrap().map.unwrap().width(), 20);
}

#[test]
fn map_files_load_into_levels() {
    let mut tiles = Vec::new();
    for y in 0..10 {
        for x in 0..10 {
            let tile = if x == 4 && y == 4 {
                r#"{"kind":"ConvexCliff","height_level":0,"orientation":3}"#
            } else {
                r#"{"kind":"Flat","height_level":0}"#
            };
            tiles.push(tile);
        }
    }
    let json = format!(
        r#"{{"width":10,"height":10,"tiles":[{}],"start_points":[{{"x":0,"y":0}}]}}"#,
        tiles.join(",")
    );
    let map = Map::from_json(&json).unwrap();
    map.check_map().unwrap();
    assert_eq!(map.tile(Position::new(4, 4)), Some(&MapTile::convex_cliff(0, Compass::North)));
}
