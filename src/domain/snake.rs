/// The snake entity: an ordered body (head at the front) plus its
/// current heading.
///
/// `advance` is a pure geometric step. Whether the tail is kept (growth)
/// or dropped, and whether the move killed the snake, are decided by the
/// caller — collision is checked against the body as it stands *after*
/// the grow/shrink decision, so a head entering the cell its own tail
/// just vacated is not a collision.

use std::collections::VecDeque;

use super::grid::Grid;
use super::types::{Direction, Point};

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    pub direction: Direction,
}

impl Snake {
    /// A fresh snake: a single segment heading `direction`.
    pub fn new(start: Point, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_back(start);
        Snake { body, direction }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("snake body is never empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Ordered segments, head first.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    /// Push the next head cell at the front and return it. Tail handling
    /// is the caller's decision.
    pub fn advance(&mut self) -> Point {
        let next = self.head().step(self.direction);
        self.body.push_front(next);
        next
    }

    /// Remove the tail cell (the no-growth case).
    pub fn drop_tail(&mut self) {
        debug_assert!(self.body.len() > 1);
        self.body.pop_back();
    }

    /// Does the head occupy the same cell as any other segment?
    pub fn hits_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&seg| seg == head)
    }

    pub fn hits_wall(&self, grid: Grid) -> bool {
        !grid.contains(self.head())
    }
}
