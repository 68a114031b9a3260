//! Merges independently generated regions into one connected layout.

use anyhow::{Context, Result, ensure};
use rand::{Rng, seq::SliceRandom};
use tracing::trace;

use crate::{Direction, DisjointSet, Grid, Wall};

/// Every wall separating two different regions, each edge listed once.
#[must_use]
pub fn connectors(grid: &Grid) -> Vec<Wall> {
    grid.positions()
        .flat_map(|pos| {
            [Direction::Down, Direction::Right]
                .into_iter()
                .filter_map(move |dir| Wall::between(grid, pos, dir))
        })
        .filter(Wall::is_connector)
        .collect()
}

/// Opens one connector per merge until all `region_count` regions are joined.
///
/// Connectors are visited in shuffled order and one is carved whenever it links
/// two regions not yet joined, so exactly `region_count - 1` walls are opened:
/// a random spanning tree over the region adjacency graph. Returns that count.
///
/// # Errors
///
/// Fails if a cell is unclaimed, carries a region id outside
/// `0..region_count`, or the regions cannot all be reached.
pub fn join_regions(grid: &mut Grid, region_count: usize, rng: &mut impl Rng) -> Result<usize> {
    ensure!(
        grid.cells()
            .iter()
            .all(|cell| cell.region().is_some_and(|region| region < region_count)),
        "Every cell must belong to one of {region_count} regions before joining"
    );

    let mut candidates = connectors(grid);
    candidates.shuffle(rng);

    let mut regions = DisjointSet::new(0..region_count);
    let mut carved = 0;
    for connector in candidates {
        if regions.set_count() <= 1 {
            break;
        }
        let (a, b) = connector
            .region_from
            .zip(connector.region_to)
            .with_context(|| format!("Unclaimed cell next to {:?}", connector.from))?;
        let a = regions.find_rep(&a)?;
        let b = regions.find_rep(&b)?;
        if a != b {
            regions.union_reps(&a, &b)?;
            let _ = connector.carve(grid);
            carved += 1;
            trace!(from = ?connector.from, to = ?connector.to, "Opened connector");
        }
    }

    ensure!(
        regions.set_count() <= 1,
        "{} regions remain disconnected",
        regions.set_count()
    );
    Ok(carved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    // Every cell its own region: joining must carve a spanning tree of the grid
    fn singleton_regions(width: usize, height: usize) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        let positions: Vec<_> = grid.positions().collect();
        for (region, pos) in positions.into_iter().enumerate() {
            grid.claim(pos, region);
        }
        grid
    }

    #[test]
    fn test_connectors_list_each_edge_once() {
        let grid = singleton_regions(3, 2);
        // 2 rows of 2 horizontal edges plus 3 vertical edges
        assert_eq!(connectors(&grid).len(), 7);
    }

    #[test]
    fn test_connectors_skip_same_region() {
        let mut grid = Grid::new(3, 1).unwrap();
        grid.claim((0, 0), 0);
        grid.claim((0, 1), 0);
        grid.claim((0, 2), 1);
        let found = connectors(&grid);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].from, (0, 1));
        assert_eq!(found[0].dir_from, Direction::Right);
    }

    #[test]
    fn test_joins_singletons_into_spanning_tree() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut grid = singleton_regions(6, 5);
        let carved = join_regions(&mut grid, 30, &mut rng).unwrap();

        assert_eq!(carved, 29);
        assert_eq!(grid.open_wall_count(), 29);
        assert!(grid.is_connected());
        assert!(grid.is_symmetric());
    }

    #[test]
    fn test_single_region_carves_nothing() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut grid = Grid::new(3, 3).unwrap();
        for pos in grid.positions() {
            grid.claim(pos, 0);
        }
        assert_eq!(join_regions(&mut grid, 1, &mut rng).unwrap(), 0);
        assert_eq!(grid.open_wall_count(), 0);
    }

    #[test]
    fn test_unclaimed_cell_is_an_error() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut grid = Grid::new(2, 1).unwrap();
        grid.claim((0, 0), 0);
        assert!(join_regions(&mut grid, 1, &mut rng).is_err());
    }

    #[test]
    fn test_unknown_region_is_an_error() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut grid = singleton_regions(2, 2);
        assert!(join_regions(&mut grid, 2, &mut rng).is_err());
    }
}
