#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Text rendering of the hex mission map.
//!
//! Rows use an odd-row offset layout: every odd row is shifted half a tile to
//! the right, which the renderer expresses by prefixing those rows with one
//! space. Squaddies are drawn with the labels allocated by [`SquaddieLabels`].

mod labels;

use std::collections::HashMap;

use fell_desert_core::{Affiliation, MapOverview, MissionEngine, TerrainKind};

pub use labels::SquaddieLabels;

/// Turn and affiliation context used to enrich the rendered map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapRenderInfo {
    /// Turn number shown in the header.
    pub turn_number: u32,
    /// Affiliation owning the current phase, if the phase belongs to one.
    pub current_affiliation: Option<Affiliation>,
    /// Affiliation of each squaddie keyed by its stable identifier.
    pub squaddie_affiliations: HashMap<String, Affiliation>,
}

impl MapRenderInfo {
    /// Collects render context for the squaddies currently on the map.
    #[must_use]
    pub fn gather(engine: &dyn MissionEngine, overview: &MapOverview) -> Self {
        let squaddie_affiliations = overview
            .squaddies()
            .filter_map(|(squaddie, _)| {
                engine.squaddie_info(squaddie).map(|info| {
                    (
                        squaddie.out_of_battle_squaddie_id().to_owned(),
                        info.affiliation,
                    )
                })
            })
            .collect();

        Self {
            turn_number: engine.current_turn_number(),
            current_affiliation: engine.current_phase().affiliation(),
            squaddie_affiliations,
        }
    }
}

/// Renders the map overview as console text.
#[must_use]
pub fn render_map(overview: &MapOverview, info: Option<&MapRenderInfo>) -> String {
    let labels = SquaddieLabels::from_overview(overview);
    let mut lines = Vec::new();

    if let Some(info) = info {
        lines.push(match info.current_affiliation {
            Some(affiliation) => format!("Turn {} - {affiliation} Phase", info.turn_number),
            None => format!("Turn {}", info.turn_number),
        });
    }

    lines.push(format!(
        "Map: {} columns x {} rows",
        overview.width(),
        overview.height()
    ));

    for (row_index, row) in overview.rows().enumerate() {
        let indent = if row_index % 2 == 1 { " " } else { "" };
        let cells: Vec<String> = row
            .iter()
            .map(|tile| {
                tile.squaddie
                    .as_ref()
                    .and_then(|squaddie| labels.label(squaddie.out_of_battle_squaddie_id()))
                    .map_or_else(|| tile.terrain.kind().symbol().to_string(), str::to_owned)
            })
            .collect();
        lines.push(format!("{indent}{}", cells.join(" ")));
    }

    lines.push(String::new());
    lines.push("Legend:".to_owned());
    for kind in TerrainKind::LEGEND {
        lines.push(format!("  {} = {}", kind.symbol(), kind.description()));
    }

    if !labels.is_empty() {
        lines.push("Squaddies:".to_owned());
        match info {
            None => lines.extend(squaddie_lines(overview, &labels, "  ", |_| true)),
            Some(info) => {
                let affiliation_of = |key: &str| {
                    info.squaddie_affiliations
                        .get(key)
                        .copied()
                        .unwrap_or(Affiliation::None)
                };
                for affiliation in Affiliation::ALL {
                    let members = squaddie_lines(overview, &labels, "    ", |key| {
                        affiliation_of(key) == affiliation
                    });
                    if !members.is_empty() {
                        lines.push(format!("  {affiliation}:"));
                        lines.extend(members);
                    }
                }
            }
        }
    }

    lines.join("\n")
}

fn squaddie_lines(
    overview: &MapOverview,
    labels: &SquaddieLabels,
    indent: &str,
    include: impl Fn(&str) -> bool,
) -> Vec<String> {
    overview
        .squaddies()
        .filter_map(|(squaddie, coordinate)| {
            let key = squaddie.out_of_battle_squaddie_id();
            if !include(key) {
                return None;
            }
            let label = labels.label(key)?;
            Some(format!("{indent}{label} = {key} {coordinate}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use fell_desert_core::{Coordinate, MapTile, SquaddieRef, Terrain};

    use super::*;

    fn overview(squaddies: &[(u32, u32, &str)]) -> MapOverview {
        let rows = (0..2)
            .map(|row| {
                (0..3)
                    .map(|col| {
                        let squaddie = squaddies
                            .iter()
                            .zip(0_u32..)
                            .find(|((r, c, _), _)| *r == row && *c == col)
                            .map(|((_, _, key), id)| SquaddieRef::new(id, *key));
                        MapTile::new(Coordinate::new(row, col), Terrain::STANDARD, squaddie)
                    })
                    .collect()
            })
            .collect();
        MapOverview::new(3, 2, rows)
    }

    #[test]
    fn plain_render_has_no_turn_header() {
        let rendered = render_map(&overview(&[]), None);

        assert_eq!(
            rendered,
            "Map: 3 columns x 2 rows\n. . .\n . . .\n\nLegend:\n  . = Normal terrain\n  ~ = Rough terrain\n  _ = Pit (cannot stop)\n  # = Wall (impassable)",
        );
    }

    #[test]
    fn flat_squaddie_list_follows_scan_order() {
        let rendered = render_map(&overview(&[(1, 2, "zed"), (0, 1, "amy")]), None);

        assert!(rendered.contains(". A .\n . . Z"), "unexpected grid: {rendered}");
        assert!(
            rendered.ends_with("Squaddies:\n  A = amy (0,1)\n  Z = zed (1,2)"),
            "unexpected listing: {rendered}",
        );
    }

    #[test]
    fn grouped_listing_defaults_unknown_squaddies_to_none() {
        let mut info = MapRenderInfo {
            turn_number: 2,
            current_affiliation: Some(Affiliation::Enemy),
            ..MapRenderInfo::default()
        };
        let _ = info
            .squaddie_affiliations
            .insert("zed".to_owned(), Affiliation::Enemy);

        let rendered = render_map(&overview(&[(1, 2, "zed"), (0, 1, "amy")]), Some(&info));

        assert!(rendered.starts_with("Turn 2 - Enemy Phase\nMap: 3 columns x 2 rows"));
        assert!(
            rendered.ends_with("Squaddies:\n  Enemy:\n    Z = zed (1,2)\n  None:\n    A = amy (0,1)"),
            "unexpected listing: {rendered}",
        );
    }

    #[test]
    fn header_omits_phase_without_affiliation() {
        let info = MapRenderInfo {
            turn_number: 4,
            ..MapRenderInfo::default()
        };
        let rendered = render_map(&overview(&[]), Some(&info));

        assert!(rendered.starts_with("Turn 4\nMap:"));
    }
}
