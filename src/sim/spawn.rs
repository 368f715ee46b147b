/// Random free-cell placement for food and power-ups.
///
/// Uniform rejection sampling over the whole grid. Termination is
/// guaranteed by checking up front that the occupied set does not cover
/// every cell; a fully occupied grid is reported as `ExhaustedGrid`
/// instead of looping forever.

use std::collections::HashSet;

use crate::domain::grid::Grid;
use crate::domain::types::Point;
use super::rng::SessionRng;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SpawnError {
    ExhaustedGrid,
}

/// Draw a uniformly random cell not occupied by `excluded`.
pub fn place_free_cell<I>(
    rng: &mut SessionRng,
    grid: Grid,
    excluded: I,
) -> Result<Point, SpawnError>
where
    I: IntoIterator<Item = Point>,
{
    let occupied: HashSet<Point> = excluded.into_iter().collect();
    if occupied.len() >= grid.cell_count() {
        return Err(SpawnError::ExhaustedGrid);
    }

    loop {
        let p = Point::new(
            rng.random_range(0..grid.width),
            rng.random_range(0..grid.height),
        );
        if !occupied.contains(&p) {
            return Ok(p);
        }
    }
}
