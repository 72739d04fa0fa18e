//! Scene model: the 2x16 grid, the car and the per-tick update.
//!
//! The car is pinned to [`CAR_COLUMN`] and only changes rows. Obstacles enter
//! at [`SPAWN_COLUMN`] and move one column left per frame tick.
//!
//! # Tick Order
//!
//! 1. Collision check: the cell right of the car is occupied. The tick stops
//!    here and the grid is left untouched.
//! 2. Shift: every non-car cell in columns `0..15` takes the content of its
//!    right neighbour. Whatever sat next to the car in the other row falls off.
//! 3. Spawn: column 15 receives a fresh [`Spawn`].

use crate::config::{CAR_COLUMN, CAR_SYMBOL, COLS, EMPTY_SYMBOL, OBSTACLE_SYMBOL, ROWS, SPAWN_COLUMN};
use crate::display::Row;
use crate::input::MoveButton;
use crate::spawn::Spawn;

/// Content of one grid cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cell {
    #[default]
    Empty,
    Car,
    Obstacle,
}

impl Cell {
    /// Character shown for this cell.
    #[inline]
    pub const fn symbol(self) -> u8 {
        match self {
            Self::Empty => EMPTY_SYMBOL,
            Self::Car => CAR_SYMBOL,
            Self::Obstacle => OBSTACLE_SYMBOL,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool { matches!(self, Self::Empty) }
}

/// Result of one frame tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// The car hit an obstacle. Nothing moved.
    Collision,
    /// Obstacles shifted and a new column spawned.
    Advanced,
}

/// The playing field.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Scene {
    cells: [[Cell; COLS]; ROWS],
    car_row: Row,
}

impl Scene {
    /// Empty grid with the car in the top row.
    pub const fn new() -> Self {
        let mut cells = [[Cell::Empty; COLS]; ROWS];
        cells[Row::Top.index()][CAR_COLUMN] = Cell::Car;
        Self {
            cells,
            car_row: Row::Top,
        }
    }

    /// Clear every obstacle and put the car back in the top row.
    pub fn reset(&mut self) { *self = Self::new(); }

    /// Row the car is in.
    #[inline]
    pub const fn car_row(&self) -> Row { self.car_row }

    /// Content at `(row, col)`. Columns past the right edge read as empty.
    #[inline]
    pub fn cell(
        &self,
        row: Row,
        col: usize,
    ) -> Cell {
        self.cells[row.index()].get(col).copied().unwrap_or_default()
    }

    /// Both rows, top first.
    #[inline]
    pub const fn rows(&self) -> &[[Cell; COLS]; ROWS] { &self.cells }

    /// Place an obstacle or clear a cell.
    ///
    /// The car cell and out-of-range columns are left alone; returns whether
    /// the cell was written.
    pub fn set_cell(
        &mut self,
        row: Row,
        col: usize,
        cell: Cell,
    ) -> bool {
        if cell == Cell::Car || self.cell(row, col) == Cell::Car {
            return false;
        }
        match self.cells[row.index()].get_mut(col) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Number of cells holding the car (always 1).
    pub fn car_count(&self) -> usize { self.cells.iter().flatten().filter(|c| **c == Cell::Car).count() }

    /// Number of obstacle cells on the grid.
    pub fn obstacle_count(&self) -> usize { self.cells.iter().flatten().filter(|c| **c == Cell::Obstacle).count() }

    // =========================================================================
    // Car Controller
    // =========================================================================

    fn move_to(
        &mut self,
        target: Row,
    ) -> bool {
        if self.car_row == target {
            return false;
        }
        self.cells[self.car_row.index()][CAR_COLUMN] = Cell::Empty;
        self.car_row = target;
        self.cells[target.index()][CAR_COLUMN] = Cell::Car;
        true
    }

    /// Move the car to the bottom row. No-op if it is already there.
    #[inline]
    pub fn move_down(&mut self) -> bool { self.move_to(Row::Bottom) }

    /// Move the car to the top row. No-op if it is already there.
    #[inline]
    pub fn move_up(&mut self) -> bool { self.move_to(Row::Top) }

    /// Apply a button press.
    pub fn apply(
        &mut self,
        button: MoveButton,
    ) -> bool {
        match button {
            MoveButton::Down => self.move_down(),
            MoveButton::Up => self.move_up(),
        }
    }

    // =========================================================================
    // Frame Update
    // =========================================================================

    /// Collision check: the cell right of the car is not empty.
    ///
    /// Checks both rows; the row without the car never matches because its
    /// car-column cell cannot hold the car.
    pub fn collides(&self) -> bool {
        self.cells
            .iter()
            .any(|row| row[CAR_COLUMN] == Cell::Car && !row[CAR_COLUMN + 1].is_empty())
    }

    /// Shift every non-car cell one column left.
    pub fn shift_left(&mut self) {
        for row in &mut self.cells {
            for c in 0..SPAWN_COLUMN {
                if row[c] != Cell::Car {
                    row[c] = row[c + 1];
                }
            }
        }
    }

    /// Fill the rightmost column.
    pub fn spawn(
        &mut self,
        spawn: Spawn,
    ) {
        let (top, bottom) = match spawn {
            Spawn::Top => (Cell::Obstacle, Cell::Empty),
            Spawn::Bottom => (Cell::Empty, Cell::Obstacle),
            Spawn::Clear => (Cell::Empty, Cell::Empty),
        };
        self.cells[Row::Top.index()][SPAWN_COLUMN] = top;
        self.cells[Row::Bottom.index()][SPAWN_COLUMN] = bottom;
    }

    /// Run one frame tick. `next` is only consumed if the tick advances.
    pub fn tick(
        &mut self,
        next: impl FnOnce() -> Spawn,
    ) -> TickOutcome {
        if self.collides() {
            return TickOutcome::Collision;
        }
        self.shift_left();
        self.spawn(next());
        TickOutcome::Advanced
    }
}

impl Default for Scene {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_car_invariant(scene: &Scene) {
        assert_eq!(scene.car_count(), 1, "exactly one car cell");
        assert_eq!(scene.cell(scene.car_row(), CAR_COLUMN), Cell::Car, "car sits in column 0");
    }

    #[test]
    fn test_new_scene_layout() {
        let scene = Scene::new();
        assert_eq!(scene.car_row(), Row::Top);
        assert_eq!(scene.cell(Row::Top, 0), Cell::Car);
        assert_eq!(scene.obstacle_count(), 0);
        assert_car_invariant(&scene);
    }

    #[test]
    fn test_move_down_and_up() {
        let mut scene = Scene::new();
        assert!(scene.move_down());
        assert_eq!(scene.car_row(), Row::Bottom);
        assert_eq!(scene.cell(Row::Top, 0), Cell::Empty);
        assert_eq!(scene.cell(Row::Bottom, 0), Cell::Car);
        assert!(scene.move_up());
        assert_eq!(scene.car_row(), Row::Top);
        assert_car_invariant(&scene);
    }

    #[test]
    fn test_move_guard_is_idempotent() {
        let mut scene = Scene::new();
        scene.move_down();
        scene.set_cell(Row::Top, 3, Cell::Obstacle);
        let before = scene.clone();
        assert!(!scene.move_down(), "already in the bottom row");
        assert_eq!(scene, before);

        scene.move_up();
        let before = scene.clone();
        assert!(!scene.move_up(), "already in the top row");
        assert_eq!(scene, before);
    }

    #[test]
    fn test_set_cell_protects_car() {
        let mut scene = Scene::new();
        assert!(!scene.set_cell(Row::Top, 0, Cell::Obstacle));
        assert!(!scene.set_cell(Row::Bottom, 0, Cell::Car));
        assert!(!scene.set_cell(Row::Bottom, COLS, Cell::Obstacle));
        assert!(scene.set_cell(Row::Bottom, 0, Cell::Obstacle));
        assert_car_invariant(&scene);
    }

    #[test]
    fn test_collision_stops_tick() {
        let mut scene = Scene::new();
        scene.set_cell(Row::Top, 1, Cell::Obstacle);
        scene.set_cell(Row::Bottom, 9, Cell::Obstacle);
        let before = scene.clone();
        let mut drawn = false;
        let outcome = scene.tick(|| {
            drawn = true;
            Spawn::Top
        });
        assert_eq!(outcome, TickOutcome::Collision);
        assert_eq!(scene, before, "no shift on collision");
        assert!(!drawn, "no spawn draw on collision");
    }

    #[test]
    fn test_obstacle_in_other_row_is_harmless() {
        let mut scene = Scene::new();
        scene.set_cell(Row::Bottom, 1, Cell::Obstacle);
        assert!(!scene.collides());
        assert_eq!(scene.tick(|| Spawn::Clear), TickOutcome::Advanced);
        assert_eq!(scene.cell(Row::Bottom, 0), Cell::Obstacle, "shifted beside the car");
        assert_eq!(scene.cell(Row::Bottom, 1), Cell::Empty);

        // Next tick pushes it off the left edge
        assert_eq!(scene.tick(|| Spawn::Clear), TickOutcome::Advanced);
        assert_eq!(scene.obstacle_count(), 0);
        assert_car_invariant(&scene);
    }

    #[test]
    fn test_collision_in_bottom_row() {
        let mut scene = Scene::new();
        scene.move_down();
        scene.set_cell(Row::Bottom, 1, Cell::Obstacle);
        assert!(scene.collides());
        scene.move_up();
        assert!(!scene.collides(), "dodged by moving up");
    }

    #[test]
    fn test_shift_keeps_car_in_place() {
        let mut scene = Scene::new();
        scene.set_cell(Row::Top, 5, Cell::Obstacle);
        scene.set_cell(Row::Bottom, 15, Cell::Obstacle);
        scene.shift_left();
        assert_eq!(scene.cell(Row::Top, 0), Cell::Car);
        assert_eq!(scene.cell(Row::Top, 4), Cell::Obstacle);
        assert_eq!(scene.cell(Row::Top, 5), Cell::Empty);
        assert_eq!(scene.cell(Row::Bottom, 14), Cell::Obstacle);
        // Rightmost column is untouched by the shift itself
        assert_eq!(scene.cell(Row::Bottom, 15), Cell::Obstacle);
    }

    #[test]
    fn test_spawn_fills_rightmost_column() {
        let mut scene = Scene::new();
        scene.spawn(Spawn::Top);
        assert_eq!(scene.cell(Row::Top, 15), Cell::Obstacle);
        assert_eq!(scene.cell(Row::Bottom, 15), Cell::Empty);
        scene.spawn(Spawn::Bottom);
        assert_eq!(scene.cell(Row::Top, 15), Cell::Empty);
        assert_eq!(scene.cell(Row::Bottom, 15), Cell::Obstacle);
        scene.spawn(Spawn::Clear);
        assert_eq!(scene.obstacle_count(), 0);
    }

    #[test]
    fn test_obstacle_travels_to_car() {
        let mut scene = Scene::new();
        scene.tick(|| Spawn::Top);
        assert_eq!(scene.cell(Row::Top, 15), Cell::Obstacle);
        scene.tick(|| Spawn::Clear);
        assert_eq!(scene.cell(Row::Top, 14), Cell::Obstacle);

        // 13 more ticks bring it next to the car
        for _ in 0..13 {
            assert_eq!(scene.tick(|| Spawn::Clear), TickOutcome::Advanced);
            assert_car_invariant(&scene);
        }
        assert_eq!(scene.cell(Row::Top, 1), Cell::Obstacle);
        assert_eq!(scene.tick(|| Spawn::Clear), TickOutcome::Collision);
    }

    #[test]
    fn test_car_invariant_under_random_play() {
        use crate::spawn::{SpawnSource, XorShift32};

        let mut rng = XorShift32::new(7);
        let mut scene = Scene::new();
        for i in 0..500u32 {
            if i % 3 == 0 {
                scene.apply(if i % 2 == 0 { MoveButton::Down } else { MoveButton::Up });
            }
            if scene.tick(|| rng.next_spawn()) == TickOutcome::Collision {
                scene.reset();
            }
            assert_car_invariant(&scene);
        }
    }

    #[test]
    fn test_cell_symbols() {
        assert_eq!(Cell::Empty.symbol(), b' ');
        assert_eq!(Cell::Car.symbol(), b'>');
        assert_eq!(Cell::Obstacle.symbol(), b'O');
    }
}
