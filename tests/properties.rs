use braided_maze::{
    ALL_DIRECTIONS, Algorithm, DisjointSet, GenerationConfig, Grid, LayoutStats, braid,
};
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

fn algorithms() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::DepthFirst),
        Just(Algorithm::Prim),
        Just(Algorithm::Kruskal),
    ]
}

fn configs() -> impl Strategy<Value = GenerationConfig> {
    (1..24usize, 1..24usize, algorithms(), 0..40usize).prop_map(
        |(width, height, algorithm, rooms)| {
            GenerationConfig::new(width, height, algorithm).with_rooms(rooms)
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_every_cell_is_claimed(config in configs(), seed in any::<u64>()) {
        let grid = Grid::generate(&config, &mut StdRng::seed_from_u64(seed)).unwrap();
        for cell in grid.cells() {
            prop_assert!(cell.is_visited());
            let region = cell.region();
            prop_assert!(region.is_some_and(|region| region < grid.region_count()));
        }
    }

    #[test]
    fn test_walls_are_symmetric(config in configs(), removals in 0..50usize, seed in any::<u64>()) {
        let config = config.with_wall_removals(removals);
        let grid = Grid::generate(&config, &mut StdRng::seed_from_u64(seed)).unwrap();
        for pos in grid.positions() {
            for dir in ALL_DIRECTIONS {
                if let Some(next) = grid.neighbour(pos, dir) {
                    prop_assert_eq!(grid[pos].wall(dir), grid[next].wall(dir.opposite()));
                }
            }
        }
    }

    #[test]
    fn test_border_stays_closed(config in configs(), removals in 0..50usize, seed in any::<u64>()) {
        let config = config.with_wall_removals(removals);
        let grid = Grid::generate(&config, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert!(grid.is_border_intact());
    }

    #[test]
    fn test_joined_layout_is_connected(config in configs(), seed in any::<u64>()) {
        let grid = Grid::generate(&config, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert!(LayoutStats::of(&grid).connected);
    }

    #[test]
    fn test_corridors_without_rooms_form_a_tree(
        width in 1..30usize,
        height in 1..30usize,
        algorithm in algorithms(),
        seed in any::<u64>(),
    ) {
        let config = GenerationConfig::new(width, height, algorithm);
        let grid = Grid::generate(&config, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(grid.open_wall_count(), width * height - 1);
        prop_assert_eq!(grid.region_count(), 1);
    }

    #[test]
    fn test_braiding_only_opens(config in configs(), attempts in 0..80usize, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = Grid::generate(&config, &mut rng).unwrap();
        let before = grid.clone();

        let opened = braid(&mut grid, attempts, &mut rng);
        prop_assert!(opened <= attempts);
        prop_assert_eq!(grid.open_wall_count(), before.open_wall_count() + opened);
        for pos in grid.positions() {
            for dir in ALL_DIRECTIONS {
                prop_assert!(grid[pos].wall(dir) <= before[pos].wall(dir));
            }
        }
    }

    #[test]
    fn test_reinit_forgets_previous_layout(
        first in configs(),
        second in configs(),
        seed in any::<u64>(),
    ) {
        let fresh = Grid::generate(&second, &mut StdRng::seed_from_u64(seed)).unwrap();

        let mut reused = Grid::generate(&first, &mut StdRng::seed_from_u64(seed ^ 1)).unwrap();
        reused.init(&second, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(reused, fresh);
    }

    #[test]
    fn test_disjoint_set_tracks_transitive_unions(
        size in 1..40usize,
        unions in proptest::collection::vec((0..40usize, 0..40usize), 0..60),
    ) {
        let mut set = DisjointSet::new(0..size);
        // Naive labelling as the reference partition
        let mut labels: Vec<usize> = (0..size).collect();

        for (a, b) in unions.into_iter().map(|(a, b)| (a % size, b % size)) {
            let ra = set.find_rep(&a).unwrap();
            let rb = set.find_rep(&b).unwrap();
            set.union_reps(&ra, &rb).unwrap();

            let (from, to) = (labels[b], labels[a]);
            for label in &mut labels {
                if *label == from {
                    *label = to;
                }
            }
        }

        for a in 0..size {
            for b in 0..size {
                let same = set.find_rep(&a).unwrap() == set.find_rep(&b).unwrap();
                prop_assert_eq!(same, labels[a] == labels[b]);
            }
        }
        let mut distinct = labels.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(set.set_count(), distinct.len());
    }
}
