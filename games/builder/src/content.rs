//! Theme-scoped item catalogs and adjacency scoring rules.

use pixel_arcade_core::ThemeId;
use serde::{Deserialize, Serialize};

/// Placeable item: cost, presentation hints, and an optional explicit base
/// score (cost is used when absent).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderItem {
    /// Stable identifier referenced by the grid and rules.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Glyph shown in the palette and on the grid.
    pub icon: String,
    /// Budget cost to place; also the refund on removal.
    pub cost: u32,
    /// Display color.
    pub color: String,
    /// Explicit base score; falls back to `cost` when `None`.
    pub base_score: Option<u32>,
}

impl BuilderItem {
    /// Creates an item whose base score falls back to its cost.
    #[must_use]
    pub fn new(id: &str, name: &str, icon: &str, cost: u32, color: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            icon: icon.to_owned(),
            cost,
            color: color.to_owned(),
            base_score: None,
        }
    }

    /// Overrides the base score used by scoring.
    #[must_use]
    pub const fn with_base_score(mut self, base_score: u32) -> Self {
        self.base_score = Some(base_score);
        self
    }
}

/// Directed adjacency bonus: a cell holding `item` earns `bonus` for every
/// orthogonal neighbor holding `neighbor`. A rule for (A, B) does not imply
/// one for (B, A).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyRule {
    /// Item the rule scores.
    pub item: String,
    /// Neighbor the rule looks for.
    pub neighbor: String,
    /// Points per directed occurrence.
    pub bonus: u32,
}

impl AdjacencyRule {
    /// Creates a directed rule.
    #[must_use]
    pub fn new(item: &str, neighbor: &str, bonus: u32) -> Self {
        Self {
            item: item.to_owned(),
            neighbor: neighbor.to_owned(),
            bonus,
        }
    }
}

/// Immutable builder content bundle for one theme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderContent {
    theme: ThemeId,
    title: String,
    description: String,
    score_label: String,
    items: Vec<BuilderItem>,
    rules: Vec<AdjacencyRule>,
}

impl BuilderContent {
    /// Theme the bundle belongs to.
    #[must_use]
    pub const fn theme(&self) -> ThemeId {
        self.theme
    }

    /// Display title of the game under this theme.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// One-line pitch shown in the UI.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Label the UI gives the computed score.
    #[must_use]
    pub fn score_label(&self) -> &str {
        &self.score_label
    }

    /// Placeable items in palette order.
    #[must_use]
    pub fn items(&self) -> &[BuilderItem] {
        &self.items
    }

    /// Adjacency rules in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[AdjacencyRule] {
        &self.rules
    }
}

/// Returns the builder content bundle for the provided theme.
#[must_use]
pub fn content(theme: ThemeId) -> BuilderContent {
    match theme {
        ThemeId::Retro => retro(),
        ThemeId::Futuristic => futuristic(),
        ThemeId::Organic => organic(),
    }
}

fn retro() -> BuilderContent {
    BuilderContent {
        theme: ThemeId::Retro,
        title: "Pixel Town".to_owned(),
        description: "Grow a pixel village by balancing homes, shops, and parks.".to_owned(),
        score_label: "Happiness Score".to_owned(),
        items: vec![
            BuilderItem::new("house", "House", "\u{1F3E0}", 10, "#b85c38"),
            BuilderItem::new("shop", "Shop", "\u{1F3EA}", 12, "#f6c85f"),
            BuilderItem::new("road", "Road", "\u{1F6E3}", 6, "#4d4d4d"),
            BuilderItem::new("park", "Park", "\u{1F333}", 8, "#2a9d3f"),
            BuilderItem::new("well", "Well", "\u{26F2}", 7, "#6c757d"),
            BuilderItem::new("tavern", "Tavern", "\u{1F37A}", 12, "#8d5524"),
            BuilderItem::new("wall", "Wall", "\u{1F9F1}", 5, "#a17f5a"),
            BuilderItem::new("farm", "Farm", "\u{1F33E}", 9, "#9acd32"),
            BuilderItem::new("tower", "Tower", "\u{1F5FC}", 11, "#c07c3d"),
            BuilderItem::new("bridge", "Bridge", "\u{1F309}", 10, "#8c5a3c"),
        ],
        rules: vec![
            AdjacencyRule::new("house", "park", 6),
            AdjacencyRule::new("shop", "road", 4),
            AdjacencyRule::new("tavern", "house", 5),
        ],
    }
}

fn futuristic() -> BuilderContent {
    BuilderContent {
        theme: ThemeId::Futuristic,
        title: "Orbital Habitat".to_owned(),
        description: "Assemble a ring station from pods, grids, and greenhouses.".to_owned(),
        score_label: "Stability Index".to_owned(),
        items: vec![
            BuilderItem::new("hab_pod", "Hab Pod", "\u{1F6F8}", 10, "#4da6ff"),
            BuilderItem::new("solar_array", "Solar Array", "\u{2600}", 12, "#ffd24d"),
            BuilderItem::new("corridor", "Corridor", "\u{1F6E4}", 5, "#8899aa"),
            BuilderItem::new("greenhouse", "Greenhouse", "\u{1F331}", 9, "#39ff88"),
            BuilderItem::new("reactor", "Reactor", "\u{269B}", 14, "#ff4d4d").with_base_score(20),
            BuilderItem::new("med_bay", "Med Bay", "\u{2695}", 11, "#ffffff"),
            BuilderItem::new("antenna", "Antenna", "\u{1F4E1}", 7, "#cccccc"),
            BuilderItem::new("dock", "Dock", "\u{2693}", 13, "#66e0ff"),
        ],
        rules: vec![
            AdjacencyRule::new("hab_pod", "greenhouse", 6),
            AdjacencyRule::new("solar_array", "reactor", 5),
            AdjacencyRule::new("med_bay", "corridor", 3),
        ],
    }
}

fn organic() -> BuilderContent {
    BuilderContent {
        theme: ThemeId::Organic,
        title: "Grove Warren".to_owned(),
        description: "Coax a living warren out of burrows, blossoms, and brooks.".to_owned(),
        score_label: "Harmony Score".to_owned(),
        items: vec![
            BuilderItem::new("burrow", "Burrow", "\u{1F573}", 10, "#8d6e63"),
            BuilderItem::new("blossom", "Blossom", "\u{1F338}", 8, "#f48fb1"),
            BuilderItem::new("brook", "Brook", "\u{1F30A}", 6, "#4fc3f7"),
            BuilderItem::new("hive", "Hive", "\u{1F41D}", 12, "#ffb300"),
            BuilderItem::new("mushroom", "Mushroom", "\u{1F344}", 7, "#d7ccc8"),
            BuilderItem::new("elder_tree", "Elder Tree", "\u{1F332}", 14, "#2e7d32").with_base_score(18),
            BuilderItem::new("stone_ring", "Stone Ring", "\u{1FAA8}", 5, "#90a4ae"),
            BuilderItem::new("fern_bed", "Fern Bed", "\u{1F33F}", 9, "#66bb6a"),
        ],
        rules: vec![
            AdjacencyRule::new("burrow", "blossom", 6),
            AdjacencyRule::new("hive", "blossom", 5),
            AdjacencyRule::new("fern_bed", "brook", 4),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::content;
    use pixel_arcade_core::ThemeId;
    use std::collections::HashSet;

    #[test]
    fn item_ids_are_unique_per_theme() {
        for theme in ThemeId::ALL {
            let bundle = content(theme);
            let ids: HashSet<_> = bundle.items().iter().map(|item| item.id.as_str()).collect();
            assert_eq!(ids.len(), bundle.items().len(), "{theme}: duplicate item id");
        }
    }

    #[test]
    fn rules_reference_declared_items() {
        for theme in ThemeId::ALL {
            let bundle = content(theme);
            let ids: HashSet<_> = bundle.items().iter().map(|item| item.id.as_str()).collect();
            for rule in bundle.rules() {
                assert!(ids.contains(rule.item.as_str()), "{theme}: rule scores unknown item");
                assert!(
                    ids.contains(rule.neighbor.as_str()),
                    "{theme}: rule wants unknown neighbor",
                );
            }
        }
    }

    #[test]
    fn bundles_round_trip_through_bincode() {
        for theme in ThemeId::ALL {
            let bundle = content(theme);
            let bytes = bincode::serialize(&bundle).expect("serialize");
            let restored: super::BuilderContent =
                bincode::deserialize(&bytes).expect("deserialize");
            assert_eq!(restored, bundle);
        }
    }

    #[test]
    fn retro_keeps_the_documented_economy() {
        let bundle = content(ThemeId::Retro);
        let cost_of = |id: &str| {
            bundle
                .items()
                .iter()
                .find(|item| item.id == id)
                .map(|item| item.cost)
                .expect("item exists")
        };

        assert_eq!(cost_of("house"), 10);
        assert_eq!(cost_of("park"), 8);
        assert!(bundle
            .rules()
            .iter()
            .any(|rule| rule.item == "house" && rule.neighbor == "park" && rule.bonus == 6));
    }
}
