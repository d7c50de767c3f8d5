//! Layout module - fixed world configuration
//!
//! Produces the coordinates of every building, tree and fuel station. The data
//! is independent of the grid size; it was chosen for the standard 30x30 world,
//! and entries that fall outside a smaller grid are skipped at placement time.
//!
//! Buildings come in 5 clusters of 3 rows x 7 columns. Each cluster origin moves
//! 5 rows down and 8 columns right of the previous one, except that the column
//! origin restarts at 1 after the third cluster:
//!
//! ```text
//! cluster  origin    rows     cols
//!   0      (5, 5)    5..=7    5..=11
//!   1      (10, 13)  10..=12  13..=19
//!   2      (15, 21)  15..=17  21..=27
//!   3      (20, 1)   20..=22  1..=7
//!   4      (25, 9)   25..=27  9..=15
//! ```

use arrayvec::ArrayVec;

use crate::types::{EntityKind, Position};

/// Number of building clusters.
pub const BUILDING_GROUPS: usize = 5;

/// Cells per building cluster (3 rows x 7 columns).
pub const BUILDING_CELLS_PER_GROUP: usize = 21;

/// Columns per row inside a building cluster.
const BUILDING_ROW_LEN: usize = 7;

/// Total number of building cells.
pub const BUILDING_COUNT: usize = BUILDING_GROUPS * BUILDING_CELLS_PER_GROUP;

pub const TREE_COUNT: usize = 7;

pub const FUEL_STATION_COUNT: usize = 4;

const FIRST_BUILDING_ORIGIN: (i32, i32) = (5, 5);
const GROUP_STEP_X: i32 = 5;
const GROUP_STEP_Y: i32 = 8;

/// After this cluster is filled the column origin restarts at `RESET_START_Y`.
const RESET_AFTER_GROUP: usize = 2;
const RESET_START_Y: i32 = 1;

const TREES: [(i32, i32); TREE_COUNT] = [
    (2, 20),
    (25, 20),
    (15, 2),
    (18, 17),
    (3, 3),
    (8, 18),
    (28, 2),
];

const FUEL_STATIONS: [(i32, i32); FUEL_STATION_COUNT] = [(2, 27), (20, 15), (28, 19), (25, 6)];

/// Coordinates of every static entity in the world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub buildings: ArrayVec<Position, BUILDING_COUNT>,
    pub trees: ArrayVec<Position, TREE_COUNT>,
    pub fuel_stations: ArrayVec<Position, FUEL_STATION_COUNT>,
}

impl Layout {
    /// Every entry paired with its kind, in placement order:
    /// buildings, then trees, then fuel stations.
    pub fn placements(&self) -> impl Iterator<Item = (Position, EntityKind)> + '_ {
        let buildings = self.buildings.iter().map(|&p| (p, EntityKind::Building));
        let trees = self.trees.iter().map(|&p| (p, EntityKind::Tree));
        let fuel = self
            .fuel_stations
            .iter()
            .map(|&p| (p, EntityKind::FuelStation));
        buildings.chain(trees).chain(fuel)
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.buildings.len() + self.trees.len() + self.fuel_stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Layout {
    fn default() -> Self {
        generate()
    }
}

/// Build the standard layout. Pure and deterministic.
pub fn generate() -> Layout {
    Layout {
        buildings: building_cells(),
        trees: TREES.iter().map(|&p| Position::from(p)).collect(),
        fuel_stations: FUEL_STATIONS.iter().map(|&p| Position::from(p)).collect(),
    }
}

/// Snake-fill each cluster row-major into a 3x7 block.
fn building_cells() -> ArrayVec<Position, BUILDING_COUNT> {
    let mut cells = ArrayVec::new();
    let (mut start_x, mut start_y) = FIRST_BUILDING_ORIGIN;

    for group in 0..BUILDING_GROUPS {
        let mut x = start_x;
        let mut y = start_y;
        for cell in 0..BUILDING_CELLS_PER_GROUP {
            cells.push(Position::new(x, y));
            y += 1;
            if (cell + 1) % BUILDING_ROW_LEN == 0 {
                y = start_y;
                x += 1;
            }
        }

        start_x += GROUP_STEP_X;
        start_y += GROUP_STEP_Y;
        if group == RESET_AFTER_GROUP {
            start_y = RESET_START_Y;
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(layout: &Layout, i: usize) -> &[Position] {
        let start = i * BUILDING_CELLS_PER_GROUP;
        &layout.buildings[start..start + BUILDING_CELLS_PER_GROUP]
    }

    #[test]
    fn building_group_origins() {
        let layout = generate();
        let origins: Vec<Position> = (0..BUILDING_GROUPS).map(|i| group(&layout, i)[0]).collect();
        assert_eq!(
            origins,
            vec![
                Position::new(5, 5),
                Position::new(10, 13),
                Position::new(15, 21),
                Position::new(20, 1),
                Position::new(25, 9),
            ]
        );
    }

    #[test]
    fn building_group_fills_three_rows_of_seven() {
        let layout = generate();
        let g = group(&layout, 0);

        assert_eq!(g[6], Position::new(5, 11));
        assert_eq!(g[7], Position::new(6, 5));
        assert_eq!(g[13], Position::new(6, 11));
        assert_eq!(g[14], Position::new(7, 5));
        assert_eq!(g[20], Position::new(7, 11));
    }

    #[test]
    fn literal_tables_are_reproduced() {
        let layout = generate();
        assert_eq!(layout.trees.len(), TREE_COUNT);
        assert_eq!(layout.trees[0], Position::new(2, 20));
        assert_eq!(layout.trees[6], Position::new(28, 2));
        assert_eq!(layout.fuel_stations[1], Position::new(20, 15));
        assert_eq!(layout.fuel_stations[3], Position::new(25, 6));
    }

    #[test]
    fn placements_follow_building_tree_fuel_order() {
        let layout = generate();
        let kinds: Vec<EntityKind> = layout.placements().map(|(_, k)| k).collect();

        assert_eq!(kinds.len(), BUILDING_COUNT + TREE_COUNT + FUEL_STATION_COUNT);
        assert_eq!(layout.len(), kinds.len());
        assert!(kinds[..BUILDING_COUNT].iter().all(|k| *k == EntityKind::Building));
        assert_eq!(kinds[BUILDING_COUNT], EntityKind::Tree);
        assert_eq!(*kinds.last().unwrap(), EntityKind::FuelStation);
    }

    #[test]
    fn standard_layout_has_no_overlaps() {
        let layout = generate();
        let mut seen = std::collections::HashSet::new();
        for (pos, _) in layout.placements() {
            assert!(seen.insert(pos), "duplicate layout cell {:?}", pos);
        }
    }
}
