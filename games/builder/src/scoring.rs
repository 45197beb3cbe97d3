//! Base plus adjacency-bonus scoring with a per-rule breakdown.

use std::collections::HashMap;

use crate::content::AdjacencyRule;
use crate::grid::{BuilderGrid, ItemsById};

/// Occurrence count and subtotal for one adjacency rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleBreakdown {
    /// The rule being tallied.
    pub rule: AdjacencyRule,
    /// Number of directed occurrences found on the grid.
    pub count: u32,
    /// `count` multiplied by the rule's bonus.
    pub total: u32,
}

/// Full score decomposition exposed for the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// Base plus bonus.
    pub total: u32,
    /// Sum of every placed item's base score (cost when unset).
    pub base: u32,
    /// Sum of every rule subtotal.
    pub bonus: u32,
    /// Per-rule tallies in rule declaration order.
    pub rules: Vec<RuleBreakdown>,
}

/// Scores the grid.
///
/// Base score sums each placed item's explicit base score, falling back to
/// its cost. Bonus score counts, for every rule independently, the directed
/// occurrences of a cell holding the rule's item with an orthogonal neighbor
/// holding the rule's neighbor; one physical adjacency can satisfy several
/// distinct rules.
#[must_use]
pub fn calculate_score(
    grid: &BuilderGrid,
    items: &ItemsById,
    rules: &[AdjacencyRule],
) -> ScoreBreakdown {
    let mut base = 0;
    let mut counts = vec![0u32; rules.len()];

    let mut rules_by_item: HashMap<&str, Vec<usize>> = HashMap::new();
    for (index, rule) in rules.iter().enumerate() {
        rules_by_item.entry(&rule.item).or_default().push(index);
    }

    for (cell, item_id) in grid.placed() {
        base += items
            .get(item_id)
            .map_or(0, |item| item.base_score.unwrap_or(item.cost));

        let Some(rule_indexes) = rules_by_item.get(item_id) else {
            continue;
        };

        for neighbor in cell.orthogonal_neighbors(grid.size(), grid.size()) {
            let Some(neighbor_id) = grid.occupant(neighbor) else {
                continue;
            };
            for &rule_index in rule_indexes {
                if rules[rule_index].neighbor == neighbor_id {
                    counts[rule_index] += 1;
                }
            }
        }
    }

    let mut bonus = 0;
    let mut breakdown = Vec::with_capacity(rules.len());
    for (rule, count) in rules.iter().zip(counts) {
        let total = count * rule.bonus;
        bonus += total;
        breakdown.push(RuleBreakdown {
            rule: rule.clone(),
            count,
            total,
        });
    }

    ScoreBreakdown {
        total: base + bonus,
        base,
        bonus,
        rules: breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::calculate_score;
    use crate::content::{AdjacencyRule, BuilderItem};
    use crate::grid::{items_by_id, place_item, BuilderGrid};
    use pixel_arcade_core::GridPos;

    fn catalog() -> crate::grid::ItemsById {
        items_by_id(&[
            BuilderItem::new("hut", "Hut", "^", 10, "#833"),
            BuilderItem::new("tree", "Tree", "*", 8, "#383"),
            BuilderItem::new("shrine", "Shrine", "+", 6, "#338").with_base_score(15),
        ])
    }

    fn grid_with(placements: &[((u32, u32), &str)]) -> BuilderGrid {
        let items = catalog();
        let mut grid = BuilderGrid::empty(4);
        let mut budget = 1000;
        for &((row, column), item) in placements {
            let outcome = place_item(&mut grid, GridPos::new(row, column), item, &items, budget);
            assert!(outcome.changed, "test placement must succeed");
            budget = outcome.budget;
        }
        grid
    }

    #[test]
    fn base_score_falls_back_to_cost() {
        let grid = grid_with(&[((0, 0), "hut"), ((3, 3), "shrine")]);
        let score = calculate_score(&grid, &catalog(), &[]);

        assert_eq!(score.base, 10 + 15);
        assert_eq!(score.bonus, 0);
        assert_eq!(score.total, 25);
    }

    #[test]
    fn rules_are_directional() {
        let rules = vec![AdjacencyRule::new("hut", "tree", 6)];
        let grid = grid_with(&[((1, 1), "hut"), ((1, 2), "tree")]);

        let score = calculate_score(&grid, &catalog(), &rules);
        assert_eq!(score.rules[0].count, 1, "hut sees its tree neighbor once");
        assert_eq!(score.bonus, 6);

        let reversed = vec![AdjacencyRule::new("tree", "hut", 2)];
        let mirrored = calculate_score(&grid, &catalog(), &reversed);
        assert_eq!(
            mirrored.rules[0].count, 1,
            "the reverse direction needs its own rule",
        );
        assert_eq!(mirrored.bonus, 2);
    }

    #[test]
    fn every_directed_occurrence_counts() {
        let rules = vec![AdjacencyRule::new("hut", "tree", 6)];
        // One hut ringed by trees on three sides.
        let grid = grid_with(&[
            ((1, 1), "hut"),
            ((0, 1), "tree"),
            ((2, 1), "tree"),
            ((1, 0), "tree"),
        ]);

        let score = calculate_score(&grid, &catalog(), &rules);
        assert_eq!(score.rules[0].count, 3);
        assert_eq!(score.rules[0].total, 18);
        assert_eq!(score.bonus, 18);
    }

    #[test]
    fn one_adjacency_can_satisfy_several_rules() {
        let rules = vec![
            AdjacencyRule::new("hut", "tree", 6),
            AdjacencyRule::new("hut", "tree", 1),
        ];
        let grid = grid_with(&[((1, 1), "hut"), ((1, 2), "tree")]);

        let score = calculate_score(&grid, &catalog(), &rules);
        assert_eq!(score.rules[0].count, 1);
        assert_eq!(score.rules[1].count, 1);
        assert_eq!(score.bonus, 7, "rules tally independently with no suppression");
    }

    #[test]
    fn empty_grids_score_zero() {
        let grid = BuilderGrid::empty(4);
        let score = calculate_score(&grid, &catalog(), &[AdjacencyRule::new("hut", "tree", 6)]);

        assert_eq!(score.total, 0);
        assert_eq!(score.rules[0].count, 0);
    }
}
