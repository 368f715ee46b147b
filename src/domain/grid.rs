/// The playfield: a fixed discrete coordinate space with wrap-free
/// bounds checking. Pure queries, no state beyond the dimensions.

use super::types::Point;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Grid { width, height }
    }

    /// In bounds iff 0 <= x < width and 0 <= y < height.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_interior_and_edges() {
        let g = Grid::new(40, 30);
        assert!(g.contains(Point::new(0, 0)));
        assert!(g.contains(Point::new(39, 29)));
        assert!(!g.contains(Point::new(40, 0)));
        assert!(!g.contains(Point::new(0, 30)));
        assert!(!g.contains(Point::new(-1, 5)));
        assert!(!g.contains(Point::new(5, -1)));
    }

    #[test]
    fn cell_count_and_center() {
        let g = Grid::new(40, 30);
        assert_eq!(g.cell_count(), 1200);
        assert_eq!(g.center(), Point::new(20, 15));
    }
}
