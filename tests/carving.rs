//! Validates clearing placement and probabilistic flood-fill carving

use glademap::generation::carving::{
    CarveParams, Placement, PlacementGrid, carve_clearing, coarse_cell_center, coarse_cell_of,
    find_clearing_location,
};
use glademap::grid::{Cell, GridState};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_guaranteed_layers_carve_a_manhattan_ball() {
    let mut grid = GridState::new(30, 30);
    let mut rng = StdRng::seed_from_u64(1);
    let params = CarveParams {
        guaranteed_layers: 3,
        probability_decay_rate: 0.0,
        max_layer: 3,
    };

    carve_clearing(&mut grid, [15, 15], &params, &mut rng);

    // Zero decay past the guaranteed zone makes the carve exactly the set of
    // cells within 3 BFS layers
    for x in 0..30_i32 {
        for y in 0..30_i32 {
            let distance = (x - 15).abs() + (y - 15).abs();
            let expected = if distance <= 3 { Cell::Open } else { Cell::Wall };
            assert_eq!(
                grid.get([x, y]),
                Some(expected),
                "unexpected state at [{x}, {y}]"
            );
        }
    }
}

#[test]
fn test_carving_never_crosses_the_outer_frame() {
    let mut grid = GridState::new(20, 20);
    let mut rng = StdRng::seed_from_u64(2);
    let params = CarveParams {
        guaranteed_layers: 6,
        probability_decay_rate: 1.0,
        max_layer: 12,
    };

    carve_clearing(&mut grid, [1, 1], &params, &mut rng);

    for i in 0..20_i32 {
        assert_eq!(grid.get([i, 0]), Some(Cell::Wall));
        assert_eq!(grid.get([0, i]), Some(Cell::Wall));
        assert_eq!(grid.get([i, 19]), Some(Cell::Wall));
        assert_eq!(grid.get([19, i]), Some(Cell::Wall));
    }
    assert!(grid.is_open([1, 1]));
}

#[test]
fn test_empty_placement_grid_yields_isolated_placement() {
    let mut placement = PlacementGrid::new();
    let grid = GridState::new(50, 50);
    let mut rng = StdRng::seed_from_u64(3);

    match find_clearing_location(&mut placement, &grid, &mut rng) {
        Placement::Isolated(center) => {
            assert!(grid.in_interior(center));
        }
        other => unreachable!("expected isolated placement, got {other:?}"),
    }
}

#[test]
fn test_search_relaxes_adjacency_when_no_isolated_cell_exists() {
    let mut placement = PlacementGrid::new();
    // Four occupied cells whose Chebyshev-1 neighborhoods cover all 25 cells
    for coarse in [[1, 1], [1, 3], [3, 1], [3, 3]] {
        placement.mark_occupied(coarse);
    }
    let grid = GridState::new(50, 50);
    let mut rng = StdRng::seed_from_u64(4);

    assert!(matches!(
        find_clearing_location(&mut placement, &grid, &mut rng),
        Placement::Relaxed(_)
    ));
}

#[test]
fn test_search_reports_exhaustion_when_grid_is_full() {
    let mut placement = PlacementGrid::new();
    for x in 0..5 {
        for y in 0..5 {
            placement.mark_occupied([x, y]);
        }
    }
    let grid = GridState::new(50, 50);
    let mut rng = StdRng::seed_from_u64(5);

    assert_eq!(
        find_clearing_location(&mut placement, &grid, &mut rng),
        Placement::Exhausted
    );
}

#[test]
fn test_isolation_respects_chebyshev_adjacency() {
    let mut placement = PlacementGrid::new();
    placement.mark_occupied([2, 2]);

    assert!(!placement.is_isolated([2, 2]));
    assert!(!placement.is_isolated([1, 1]));
    assert!(!placement.is_isolated([3, 2]));
    assert!(placement.is_isolated([0, 0]));
    assert!(placement.is_isolated([4, 4]));
}

#[test]
fn test_coarse_cell_center_round_trips() {
    assert_eq!(coarse_cell_center([0, 0], 50, 50), [5, 5]);
    assert_eq!(coarse_cell_center([4, 4], 50, 50), [45, 45]);
    assert_eq!(coarse_cell_of([5, 5], 50, 50), [0, 0]);
    assert_eq!(coarse_cell_of([45, 45], 50, 50), [4, 4]);

    for x in 0..5 {
        for y in 0..5 {
            let center = coarse_cell_center([x, y], 47, 53);
            assert_eq!(coarse_cell_of(center, 47, 53), [x, y]);
        }
    }
}
