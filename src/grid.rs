use std::collections::HashSet;

use crate::snake::Position;

/// The rectangular border of the board. Built once per session.
pub struct Walls {
    height: i32,
    width: i32,
    cells: HashSet<Position>,
}

impl Walls {
    pub fn new(height: i32, width: i32) -> Self {
        let mut cells = HashSet::new();

        for col in 0..width {
            cells.insert(Position::new(0, col));
            cells.insert(Position::new(height - 1, col));
        }

        for row in 1..height - 1 {
            cells.insert(Position::new(row, 0));
            cells.insert(Position::new(row, width - 1));
        }

        Walls { height, width, cells }
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    pub fn is_interior(&self, pos: Position) -> bool {
        pos.row >= 1 && pos.row <= self.height - 2 && pos.col >= 1 && pos.col <= self.width - 2
    }

    pub fn interior_size(&self) -> usize {
        ((self.height - 2).max(0) * (self.width - 2).max(0)) as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perimeter_only() {
        let walls = Walls::new(21, 50);
        assert_eq!(walls.iter().count(), 2 * 50 + 2 * 19);

        assert!(walls.contains(Position::new(0, 0)));
        assert!(walls.contains(Position::new(20, 49)));
        assert!(walls.contains(Position::new(10, 0)));
        assert!(walls.contains(Position::new(10, 49)));
        assert!(!walls.contains(Position::new(10, 10)));
        assert!(!walls.contains(Position::new(1, 1)));
    }

    #[test]
    fn interior_bounds() {
        let walls = Walls::new(5, 6);
        assert_eq!(walls.interior_size(), 3 * 4);
        assert!(walls.is_interior(Position::new(1, 1)));
        assert!(walls.is_interior(Position::new(3, 4)));
        assert!(!walls.is_interior(Position::new(4, 4)));
        assert!(!walls.is_interior(Position::new(3, 5)));

        for pos in walls.iter() {
            assert!(!walls.is_interior(*pos));
        }
    }
}
