use rand::Rng;

use crate::maze::{Direction, Maze};

/// Edge weights of the grid graph are drawn uniformly from `0..MAX_EDGE_WEIGHT`.
pub const MAX_EDGE_WEIGHT: u16 = 1024;

/// Builds the fully connected grid graph: every cell gets a passage to its right and
/// bottom neighbors (when it has them), each with an independent random weight shared
/// by both sides of the passage.
pub fn build_weighted_grid<R: Rng + ?Sized>(width: u8, height: u8, rng: &mut R) -> Maze {
    let mut maze = Maze::new(width, height);

    for id in 0..maze.cell_count() {
        let (x, y) = maze.coord(id);
        // Draw order per cell (right, then down) keeps mazes reproducible for a given seed
        if x + 1 < width {
            maze.connect(id, Direction::Right, rng.random_range(0..MAX_EDGE_WEIGHT));
        }
        if y + 1 < height {
            maze.connect(id, Direction::Down, rng.random_range(0..MAX_EDGE_WEIGHT));
        }
    }

    maze
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_every_interior_edge_present() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = build_weighted_grid(4, 3, &mut rng);
        // (w - 1) * h horizontal + w * (h - 1) vertical
        assert_eq!(graph.edge_count(), 3 * 3 + 4 * 2);
        for id in 0..graph.cell_count() {
            for direction in Direction::ALL {
                assert_eq!(
                    graph.edge(id, direction).map(|edge| edge.neighbor),
                    graph.neighbor_id(id, direction)
                );
            }
        }
    }

    #[test]
    fn test_weights_in_range_and_shared() {
        let mut rng = StdRng::seed_from_u64(11);
        let graph = build_weighted_grid(8, 8, &mut rng);
        for (id, direction, edge) in graph.edges() {
            assert!(edge.weight < MAX_EDGE_WEIGHT);
            let back = graph
                .edge(edge.neighbor, direction.opposite())
                .expect("reciprocal edge");
            assert_eq!(back.neighbor, id);
            assert_eq!(back.weight, edge.weight);
        }
    }

    #[test]
    fn test_degenerate_shapes() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(build_weighted_grid(1, 1, &mut rng).edge_count(), 0);
        assert_eq!(build_weighted_grid(6, 1, &mut rng).edge_count(), 5);
        assert_eq!(build_weighted_grid(1, 6, &mut rng).edge_count(), 5);
    }
}
