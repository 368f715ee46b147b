/// Core value types: grid points, movement directions, driver commands.

/// One cell of the playfield. Signed so that a head stepping past the
/// edge is representable; bounds are checked by `Grid::contains`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// The adjacent cell one step in `dir`.
    pub fn step(self, dir: Direction) -> Point {
        let (dx, dy) = dir.offset();
        Point::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit offset in grid coordinates (y grows downward).
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }
}

/// A discrete command from the driver. One command per driver step;
/// nothing else reaches the game logic.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Turn(Direction),
    TogglePause,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_follows_offset() {
        let p = Point::new(4, 7);
        assert_eq!(p.step(Direction::Up), Point::new(4, 6));
        assert_eq!(p.step(Direction::Down), Point::new(4, 8));
        assert_eq!(p.step(Direction::Left), Point::new(3, 7));
        assert_eq!(p.step(Direction::Right), Point::new(5, 7));
    }

    #[test]
    fn opposites() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Right.is_opposite(Direction::Right));
    }
}
