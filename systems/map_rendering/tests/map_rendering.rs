use fell_desert_core::MissionEngine;
use fell_desert_system_map_rendering::{render_map, MapRenderInfo};
use fell_desert_world::World;

const FELL_DESERT_GRID: &str = "L . ~ . .\n . _ . # .\n. . . . ~\n ~ . _ . S";

#[test]
fn fell_desert_map_renders_grid_and_legend() {
    let world = World::new();
    let rendered = render_map(&world.map_overview(), None);

    assert_eq!(
        rendered,
        format!(
            "Map: 5 columns x 4 rows\n{FELL_DESERT_GRID}\n\nLegend:\n  . = Normal terrain\n  ~ = Rough terrain\n  _ = Pit (cannot stop)\n  # = Wall (impassable)\nSquaddies:\n  L = lini (0,0)\n  S = slither-demon (3,4)"
        ),
    );
}

#[test]
fn gathered_info_groups_squaddies_by_affiliation() {
    let world = World::new();
    let overview = world.map_overview();
    let info = MapRenderInfo::gather(&world, &overview);

    let rendered = render_map(&overview, Some(&info));

    assert!(
        rendered.starts_with(&format!("Turn 0\nMap: 5 columns x 4 rows\n{FELL_DESERT_GRID}")),
        "turn start has no owning affiliation: {rendered}",
    );
    assert!(
        rendered.ends_with("Squaddies:\n  Player:\n    L = lini (0,0)\n  Enemy:\n    S = slither-demon (3,4)"),
        "unexpected listing: {rendered}",
    );
}

#[test]
fn header_names_the_acting_affiliation() {
    let mut world = World::new();
    world.transition_to_next_phase();
    world.transition_to_next_phase();
    let overview = world.map_overview();

    let rendered = render_map(&overview, Some(&MapRenderInfo::gather(&world, &overview)));

    assert!(rendered.starts_with("Turn 0 - Player Phase\n"));
}
