use braided_maze::{Algorithm, GenerationConfig, Grid, LayoutStats, Room};
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn test_five_by_five_dfs_is_a_perfect_maze() {
    let config = GenerationConfig::new(5, 5, Algorithm::DepthFirst);
    for seed in 0..20 {
        let grid = Grid::generate(&config, &mut StdRng::seed_from_u64(seed)).unwrap();
        let stats = LayoutStats::of(&grid);

        assert_eq!(stats.open_walls, 24, "seed {seed}");
        assert_eq!(stats.loops(), 0, "seed {seed}");
        assert!(stats.connected, "seed {seed}");
    }
}

#[test]
fn test_rooms_on_ten_by_ten() {
    for algorithm in Algorithm::ALL {
        let config = GenerationConfig::new(10, 10, algorithm).with_rooms(50);
        let grid = Grid::generate(&config, &mut StdRng::seed_from_u64(2024)).unwrap();

        assert!(grid.room_count() >= 1, "{algorithm}");
        for room in grid.rooms() {
            for pos in room.cells() {
                assert!(grid[pos].is_room(), "{algorithm} {pos:?}");
            }
        }
        let room_cells = grid.cells().iter().filter(|cell| cell.is_room()).count();
        let expected: usize = grid.rooms().iter().map(Room::area).sum();
        assert_eq!(room_cells, expected, "{algorithm}");
        assert!(grid.is_connected(), "{algorithm}");
        assert!(grid.is_border_intact(), "{algorithm}");
    }
}

#[test]
fn test_joining_opens_one_wall_per_merge() {
    // Each region is internally a tree, joining adds regions - 1 edges, so the
    // whole layout is a tree apart from the open interiors of rooms.
    let config = GenerationConfig::new(24, 16, Algorithm::Prim).with_rooms(40);
    let grid = Grid::generate(&config, &mut StdRng::seed_from_u64(5)).unwrap();

    let room_interior_edges: usize = grid
        .rooms()
        .iter()
        .map(|room| room.height * (room.width - 1) + room.width * (room.height - 1))
        .sum();
    let room_tree_edges: usize = grid.rooms().iter().map(|room| room.area() - 1).sum();
    let expected = grid.len() - 1 + room_interior_edges - room_tree_edges;
    assert_eq!(grid.open_wall_count(), expected);
}

#[test]
fn test_braiding_is_bounded_by_attempts() {
    let base = GenerationConfig::new(12, 12, Algorithm::Kruskal).with_rooms(10);
    let plain = Grid::generate(&base, &mut StdRng::seed_from_u64(77)).unwrap();

    for attempts in [1, 10, 100] {
        let braided = Grid::generate(
            &base.clone().with_wall_removals(attempts),
            &mut StdRng::seed_from_u64(77),
        )
        .unwrap();
        // Braiding runs last, so both share every draw before it
        let extra = braided.open_wall_count() - plain.open_wall_count();
        assert!(extra <= attempts, "{extra} > {attempts}");
        assert!(braided.is_connected());
    }
}

#[test]
fn test_same_seed_same_layout() {
    let config = GenerationConfig::new(30, 20, Algorithm::DepthFirst)
        .with_rooms(25)
        .with_wall_removals(15);
    let a = Grid::generate(&config, &mut StdRng::seed_from_u64(123)).unwrap();
    let b = Grid::generate(&config, &mut StdRng::seed_from_u64(123)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn test_degenerate_shapes() {
    for (width, height) in [(1, 1), (1, 9), (9, 1), (2, 2)] {
        for algorithm in Algorithm::ALL {
            let config = GenerationConfig::new(width, height, algorithm)
                .with_rooms(5)
                .with_wall_removals(5);
            let grid = Grid::generate(&config, &mut StdRng::seed_from_u64(1)).unwrap();
            assert!(grid.is_connected(), "{width}x{height} {algorithm}");
            assert!(grid.is_border_intact(), "{width}x{height} {algorithm}");
        }
    }
}

#[test]
fn test_zero_dimension_fails() {
    let config = GenerationConfig::new(0, 10, Algorithm::Prim);
    assert!(Grid::generate(&config, &mut StdRng::seed_from_u64(0)).is_err());
}
