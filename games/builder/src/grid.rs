//! Placement grid and the budgeted place/remove operations.

use std::collections::HashMap;

use pixel_arcade_core::GridPos;
use serde::{Deserialize, Serialize};

use crate::content::BuilderItem;

/// Default side length of the placement grid in cells.
pub const GRID_SIZE: u32 = 12;
/// Budget a fresh build starts with.
pub const STARTING_BUDGET: u32 = 100;

/// Items indexed by id for constant-time lookup during grid operations.
pub type ItemsById = HashMap<String, BuilderItem>;

/// Indexes a bundle's items by id.
#[must_use]
pub fn items_by_id(items: &[BuilderItem]) -> ItemsById {
    let mut map = ItemsById::new();
    for item in items {
        let _ = map.insert(item.id.clone(), item.clone());
    }
    map
}

/// Fixed-size square grid of optionally occupied cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderGrid {
    size: u32,
    cells: Vec<Option<String>>,
}

impl BuilderGrid {
    /// Creates an empty grid with `size` cells per side.
    #[must_use]
    pub fn empty(size: u32) -> Self {
        Self {
            size,
            cells: vec![None; (size as usize).pow(2)],
        }
    }

    /// Side length of the grid in cells.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Reports whether the cell lies on the grid.
    #[must_use]
    pub const fn contains(&self, cell: GridPos) -> bool {
        cell.in_bounds(self.size, self.size)
    }

    /// Id of the item occupying the cell, if any; `None` off-grid too.
    #[must_use]
    pub fn occupant(&self, cell: GridPos) -> Option<&str> {
        self.index(cell)
            .and_then(|index| self.cells[index].as_deref())
    }

    /// Iterator over every occupied cell and its item id.
    pub fn placed(&self) -> impl Iterator<Item = (GridPos, &str)> {
        self.cells.iter().enumerate().filter_map(|(index, cell)| {
            cell.as_deref().map(|item| {
                let row = index as u32 / self.size;
                let column = index as u32 % self.size;
                (GridPos::new(row, column), item)
            })
        })
    }

    fn index(&self, cell: GridPos) -> Option<usize> {
        self.contains(cell)
            .then(|| (cell.row() * self.size + cell.column()) as usize)
    }

    fn set(&mut self, cell: GridPos, value: Option<String>) {
        if let Some(index) = self.index(cell) {
            self.cells[index] = value;
        }
    }
}

/// Result of a place or remove operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridOutcome {
    /// Budget after the operation; unchanged when `changed` is false.
    pub budget: u32,
    /// Whether the grid was mutated.
    pub changed: bool,
}

impl GridOutcome {
    const fn unchanged(budget: u32) -> Self {
        Self {
            budget,
            changed: false,
        }
    }
}

/// Places `item_id` at `cell`, charging its cost against `budget`.
///
/// No-ops (grid and budget untouched, `changed` false): the cell is off-grid,
/// the item id is unknown, or the cell already holds that same item.
/// Replacing a different item refunds the occupant's cost before charging the
/// new one, as a single atomic swap; if the resulting budget would go
/// negative the whole operation is rejected.
pub fn place_item(
    grid: &mut BuilderGrid,
    cell: GridPos,
    item_id: &str,
    items: &ItemsById,
    budget: u32,
) -> GridOutcome {
    if !grid.contains(cell) {
        return GridOutcome::unchanged(budget);
    }
    let Some(item) = items.get(item_id) else {
        return GridOutcome::unchanged(budget);
    };
    if grid.occupant(cell) == Some(item_id) {
        return GridOutcome::unchanged(budget);
    }

    let refund = grid
        .occupant(cell)
        .and_then(|occupant| items.get(occupant))
        .map_or(0, |occupant| occupant.cost);

    let funds = budget + refund;
    if funds < item.cost {
        return GridOutcome::unchanged(budget);
    }

    grid.set(cell, Some(item_id.to_owned()));
    GridOutcome {
        budget: funds - item.cost,
        changed: true,
    }
}

/// Clears `cell`, refunding the occupant's full cost.
///
/// No-ops when the cell is off-grid or already empty.
pub fn remove_item(
    grid: &mut BuilderGrid,
    cell: GridPos,
    items: &ItemsById,
    budget: u32,
) -> GridOutcome {
    if !grid.contains(cell) {
        return GridOutcome::unchanged(budget);
    }
    let Some(occupant) = grid.occupant(cell) else {
        return GridOutcome::unchanged(budget);
    };

    let refund = items.get(occupant).map_or(0, |item| item.cost);
    grid.set(cell, None);
    GridOutcome {
        budget: budget + refund,
        changed: true,
    }
}

/// Tool selected in the builder UI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    /// Clicking a cell places the selected item.
    Place(String),
    /// Clicking a cell erases its occupant.
    Erase,
}

/// Complete builder session state owned by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderState {
    grid: BuilderGrid,
    budget: u32,
    tool: Tool,
}

impl BuilderState {
    /// Creates a fresh session over an empty grid.
    ///
    /// With no default item the session starts in erase mode.
    #[must_use]
    pub fn new(default_item: Option<&str>, size: u32, budget: u32) -> Self {
        Self {
            grid: BuilderGrid::empty(size),
            budget,
            tool: default_item.map_or(Tool::Erase, |item| Tool::Place(item.to_owned())),
        }
    }

    /// The placement grid.
    #[must_use]
    pub const fn grid(&self) -> &BuilderGrid {
        &self.grid
    }

    /// Budget remaining; never negative.
    #[must_use]
    pub const fn budget(&self) -> u32 {
        self.budget
    }

    /// Currently selected tool.
    #[must_use]
    pub const fn tool(&self) -> &Tool {
        &self.tool
    }

    /// Selects an item for placement.
    pub fn select_item(&mut self, item_id: &str) {
        self.tool = Tool::Place(item_id.to_owned());
    }

    /// Switches to the eraser.
    pub fn select_eraser(&mut self) {
        self.tool = Tool::Erase;
    }

    /// Applies the selected tool to `cell`, reporting whether anything
    /// changed.
    pub fn apply_at(&mut self, cell: GridPos, items: &ItemsById) -> bool {
        let outcome = match &self.tool {
            Tool::Erase => remove_item(&mut self.grid, cell, items, self.budget),
            Tool::Place(item_id) => {
                let item_id = item_id.clone();
                place_item(&mut self.grid, cell, &item_id, items, self.budget)
            }
        };
        self.budget = outcome.budget;
        outcome.changed
    }

    /// Discards the build and starts over with a fresh grid and budget.
    pub fn reset(&mut self, default_item: Option<&str>, size: u32, budget: u32) {
        *self = Self::new(default_item, size, budget);
    }
}

#[cfg(test)]
mod tests {
    use super::{items_by_id, place_item, remove_item, BuilderGrid, BuilderState, Tool};
    use crate::content::BuilderItem;
    use pixel_arcade_core::GridPos;

    fn catalog() -> super::ItemsById {
        items_by_id(&[
            BuilderItem::new("hut", "Hut", "^", 10, "#833"),
            BuilderItem::new("tree", "Tree", "*", 8, "#383"),
            BuilderItem::new("keep", "Keep", "#", 95, "#338"),
        ])
    }

    #[test]
    fn placement_charges_the_item_cost() {
        let mut grid = BuilderGrid::empty(4);
        let outcome = place_item(&mut grid, GridPos::new(0, 0), "hut", &catalog(), 100);

        assert!(outcome.changed);
        assert_eq!(outcome.budget, 90);
        assert_eq!(grid.occupant(GridPos::new(0, 0)), Some("hut"));
    }

    #[test]
    fn placement_rejects_off_grid_unknown_and_same_item() {
        let mut grid = BuilderGrid::empty(4);
        let items = catalog();

        let off = place_item(&mut grid, GridPos::new(4, 0), "hut", &items, 100);
        assert!(!off.changed);
        assert_eq!(off.budget, 100);

        let unknown = place_item(&mut grid, GridPos::new(0, 0), "moat", &items, 100);
        assert!(!unknown.changed);

        let first = place_item(&mut grid, GridPos::new(0, 0), "hut", &items, 100);
        let again = place_item(&mut grid, GridPos::new(0, 0), "hut", &items, first.budget);
        assert!(!again.changed, "re-placing the same item is a no-op");
        assert_eq!(again.budget, 90);
    }

    #[test]
    fn placement_rejects_overdraw_without_touching_state() {
        let mut grid = BuilderGrid::empty(4);
        let items = catalog();

        let outcome = place_item(&mut grid, GridPos::new(1, 1), "keep", &items, 50);

        assert!(!outcome.changed);
        assert_eq!(outcome.budget, 50);
        assert_eq!(grid.occupant(GridPos::new(1, 1)), None);
    }

    #[test]
    fn replacing_refunds_before_charging() {
        let mut grid = BuilderGrid::empty(4);
        let items = catalog();
        let cell = GridPos::new(2, 2);

        let placed = place_item(&mut grid, cell, "tree", &items, 100);
        assert_eq!(placed.budget, 92);

        // 92 alone cannot afford the keep; the tree's refund makes it exact.
        let swapped = place_item(&mut grid, cell, "keep", &items, placed.budget);
        assert!(swapped.changed, "swap must refund the occupant before charging");
        assert_eq!(swapped.budget, 5);
        assert_eq!(grid.occupant(cell), Some("keep"));
    }

    #[test]
    fn removal_refunds_the_full_cost() {
        let mut grid = BuilderGrid::empty(4);
        let items = catalog();
        let cell = GridPos::new(3, 1);

        let placed = place_item(&mut grid, cell, "hut", &items, 100);
        let removed = remove_item(&mut grid, cell, &items, placed.budget);

        assert!(removed.changed);
        assert_eq!(removed.budget, 100, "place then remove restores the budget exactly");
        assert_eq!(grid.occupant(cell), None);
    }

    #[test]
    fn removal_no_ops_on_empty_and_off_grid_cells() {
        let mut grid = BuilderGrid::empty(4);
        let items = catalog();

        let empty = remove_item(&mut grid, GridPos::new(0, 0), &items, 42);
        assert!(!empty.changed);
        assert_eq!(empty.budget, 42);

        let off = remove_item(&mut grid, GridPos::new(9, 9), &items, 42);
        assert!(!off.changed);
    }

    #[test]
    fn session_tools_drive_place_and_erase() {
        let items = catalog();
        let mut state = BuilderState::new(Some("hut"), 4, 100);
        assert_eq!(state.tool(), &Tool::Place("hut".to_owned()));

        assert!(state.apply_at(GridPos::new(0, 0), &items));
        assert_eq!(state.budget(), 90);

        state.select_eraser();
        assert!(state.apply_at(GridPos::new(0, 0), &items));
        assert_eq!(state.budget(), 100);

        state.select_item("tree");
        assert!(state.apply_at(GridPos::new(1, 0), &items));
        assert_eq!(state.budget(), 92);

        state.reset(None, 4, 100);
        assert_eq!(state.budget(), 100);
        assert_eq!(state.tool(), &Tool::Erase);
        assert_eq!(state.grid().placed().count(), 0);
    }
}
