//! Theme-scoped maps: named locations at normalized coordinates.

use glam::Vec2;
use pixel_arcade_core::ThemeId;
use serde::{Deserialize, Serialize};

/// One findable location on a theme's map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short prompt describing what to find.
    pub description: String,
    /// Horizontal coordinate in [0,1].
    pub x: f32,
    /// Vertical coordinate in [0,1].
    pub y: f32,
    /// Optional flavor text shown after the round.
    pub fun_fact: Option<String>,
}

impl GeoLocation {
    fn new(id: &str, name: &str, description: &str, x: f32, y: f32) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            description: description.to_owned(),
            x,
            y,
            fun_fact: None,
        }
    }

    fn with_fun_fact(mut self, fun_fact: &str) -> Self {
        self.fun_fact = Some(fun_fact.to_owned());
        self
    }

    /// Position as a vector in the normalized map space.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Immutable geography content bundle for one theme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoContent {
    theme: ThemeId,
    name: String,
    quest: String,
    locations: Vec<GeoLocation>,
    rounds: u32,
}

impl GeoContent {
    /// Theme the bundle belongs to.
    #[must_use]
    pub const fn theme(&self) -> ThemeId {
        self.theme
    }

    /// Display name of the map.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Framing line shown at session start.
    #[must_use]
    pub fn quest(&self) -> &str {
        &self.quest
    }

    /// Findable locations on the map.
    #[must_use]
    pub fn locations(&self) -> &[GeoLocation] {
        &self.locations
    }

    /// Number of rounds in one session.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }
}

/// Returns the geography content bundle for the provided theme.
#[must_use]
pub fn content(theme: ThemeId) -> GeoContent {
    match theme {
        ThemeId::Retro => retro(),
        ThemeId::Futuristic => futuristic(),
        ThemeId::Organic => organic(),
    }
}

fn retro() -> GeoContent {
    GeoContent {
        theme: ThemeId::Retro,
        name: "Kingdom of Pixelia".to_owned(),
        quest: "Chart the old kingdom before its map sprite decays.".to_owned(),
        rounds: 5,
        locations: vec![
            GeoLocation::new(
                "castle",
                "Castle Bitcrown",
                "The king's keep at the kingdom's heart.",
                0.48,
                0.32,
            )
            .with_fun_fact("Its drawbridge animates at two frames per second."),
            GeoLocation::new(
                "port",
                "Port Sprite",
                "Harbor town on the western shore.",
                0.12,
                0.58,
            ),
            GeoLocation::new(
                "forest",
                "Forest of Nodes",
                "A woodland where the trees render in rows.",
                0.70,
                0.22,
            )
            .with_fun_fact("Every tree is the same tree, mirrored."),
            GeoLocation::new(
                "volcano",
                "Mount Overclock",
                "The smoking peak in the southeast.",
                0.82,
                0.74,
            ),
            GeoLocation::new(
                "ruins",
                "Glitch Ruins",
                "Half-rendered ruins on the southern plain.",
                0.38,
                0.81,
            ),
            GeoLocation::new(
                "tower",
                "Save Tower",
                "A lone tower on the northern ridge.",
                0.55,
                0.09,
            )
            .with_fun_fact("Travelers rest here; nobody knows why it glows."),
        ],
    }
}

fn futuristic() -> GeoContent {
    GeoContent {
        theme: ThemeId::Futuristic,
        name: "Sector Atlas".to_owned(),
        quest: "Relocate the fleet's waypoints across the sector chart.".to_owned(),
        rounds: 5,
        locations: vec![
            GeoLocation::new(
                "station",
                "Relay Station Kilo",
                "The sector's main comms relay.",
                0.22,
                0.18,
            ),
            GeoLocation::new(
                "shipyard",
                "Meridian Shipyard",
                "Docks strung along the central lane.",
                0.51,
                0.47,
            )
            .with_fun_fact("Builds one hull a year, perfectly."),
            GeoLocation::new(
                "nebula",
                "Carmine Nebula",
                "The red cloud fogging the eastern charts.",
                0.83,
                0.31,
            ),
            GeoLocation::new(
                "mine",
                "Belt Mine Seven",
                "An ore platform deep in the southern belt.",
                0.64,
                0.83,
            ),
            GeoLocation::new(
                "beacon",
                "Pilgrim Beacon",
                "A navigation beacon at the western rim.",
                0.08,
                0.66,
            )
            .with_fun_fact("Its light is older than the fleet."),
            GeoLocation::new(
                "gate",
                "Jump Gate Aleph",
                "The only way out of the sector.",
                0.37,
                0.90,
            ),
        ],
    }
}

fn organic() -> GeoContent {
    GeoContent {
        theme: ThemeId::Organic,
        name: "Verdant Valley".to_owned(),
        quest: "Mark the valley's landmarks before the canopy closes.".to_owned(),
        rounds: 5,
        locations: vec![
            GeoLocation::new(
                "falls",
                "Mossveil Falls",
                "The waterfall feeding the northern pools.",
                0.30,
                0.12,
            ),
            GeoLocation::new(
                "grove",
                "Elder Grove",
                "The oldest stand of trees in the valley.",
                0.57,
                0.38,
            )
            .with_fun_fact("The grove hums in late summer."),
            GeoLocation::new(
                "marsh",
                "Firefly Marsh",
                "Wetlands that glow after dusk.",
                0.18,
                0.72,
            ),
            GeoLocation::new(
                "spire",
                "Granite Spire",
                "A bare stone finger above the treeline.",
                0.79,
                0.20,
            ),
            GeoLocation::new(
                "meadow",
                "Clover Meadow",
                "Open grazing land in the valley's mouth.",
                0.45,
                0.63,
            ),
            GeoLocation::new(
                "warren",
                "Sunken Warren",
                "Burrow mounds along the southern bank.",
                0.68,
                0.86,
            )
            .with_fun_fact("Counts more entrances than residents."),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::content;
    use pixel_arcade_core::ThemeId;
    use std::collections::HashSet;

    #[test]
    fn every_location_sits_inside_the_normalized_map() {
        for theme in ThemeId::ALL {
            for location in content(theme).locations() {
                assert!(
                    (0.0..=1.0).contains(&location.x) && (0.0..=1.0).contains(&location.y),
                    "{theme}: `{}` is off the map",
                    location.id,
                );
            }
        }
    }

    #[test]
    fn bundles_round_trip_through_bincode() {
        for theme in ThemeId::ALL {
            let bundle = content(theme);
            let bytes = bincode::serialize(&bundle).expect("serialize");
            let restored: super::GeoContent = bincode::deserialize(&bytes).expect("deserialize");
            assert_eq!(restored, bundle);
        }
    }

    #[test]
    fn bundles_have_unique_ids_and_enough_locations_for_a_session() {
        for theme in ThemeId::ALL {
            let bundle = content(theme);
            let ids: HashSet<_> = bundle.locations().iter().map(|entry| entry.id.as_str()).collect();
            assert_eq!(ids.len(), bundle.locations().len(), "{theme}: duplicate location id");
            assert!(bundle.rounds() > 0);
            assert!(
                bundle.locations().len() >= bundle.rounds() as usize,
                "{theme}: a session needs a distinct location per round",
            );
        }
    }
}
