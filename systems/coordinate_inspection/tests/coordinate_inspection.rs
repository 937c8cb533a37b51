use fell_desert_core::Coordinate;
use fell_desert_system_coordinate_inspection::{inspect_coordinate, parse_coordinate};
use fell_desert_world::World;

#[test]
fn occupied_tile_lists_squaddie_status() {
    let world = World::new();

    assert_eq!(
        inspect_coordinate(&world, Coordinate::new(0, 0)),
        "(0,0): Standard\nLini\n  Hit Points: 3/3\n  Action Points: 3/3",
    );
}

#[test]
fn empty_tiles_report_terrain_name() {
    let world = World::new();

    assert_eq!(inspect_coordinate(&world, Coordinate::new(0, 2)), "(0,2): Difficult");
    assert_eq!(inspect_coordinate(&world, Coordinate::new(1, 1)), "(1,1): Pit");
    assert_eq!(inspect_coordinate(&world, Coordinate::new(1, 3)), "(1,3): Wall");
}

#[test]
fn off_map_coordinates_explain_valid_bounds() {
    let world = World::new();

    assert_eq!(
        inspect_coordinate(&world, Coordinate::new(4, 0)),
        "(4,0) is off map (rows less than 4 and columns less than 5 are valid.)",
    );
    assert_eq!(
        inspect_coordinate(&world, Coordinate::new(0, 5)),
        "(0,5) is off map (rows less than 4 and columns less than 5 are valid.)",
    );
}

#[test]
fn parsed_input_feeds_inspection() {
    let world = World::new();
    let coordinate = parse_coordinate("(3, 4)").expect("coordinate should parse");

    let report = inspect_coordinate(&world, coordinate);
    assert!(
        report.starts_with("(3,4): Standard\nSlither Demon"),
        "unexpected report: {report}",
    );
}
