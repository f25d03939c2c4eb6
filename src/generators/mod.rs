use rand::{Rng, SeedableRng, rngs::StdRng};

mod prim;
mod weighted_grid;

pub use prim::{PASSAGE_WEIGHT, extract_spanning_tree, extract_spanning_tree_from};
pub use weighted_grid::{MAX_EDGE_WEIGHT, build_weighted_grid};

use crate::maze::Maze;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generates a perfect maze of the given size.
///
/// Panics if either width or height is 0.
pub fn generate_maze(width: u8, height: u8, seed: Option<u64>) -> Maze {
    let mut rng = get_rng(seed);
    generate_maze_with(width, height, &mut rng)
}

/// Generates a perfect maze of the given size, drawing all randomness from `rng`:
/// a weighted grid graph is built first, then reduced to its minimum spanning tree.
pub fn generate_maze_with<R: Rng + ?Sized>(width: u8, height: u8, rng: &mut R) -> Maze {
    let graph = build_weighted_grid(width, height, rng);
    let maze = extract_spanning_tree(&graph, rng);
    tracing::debug!(
        "[generate] Generated {}x{} maze with {} passages",
        width,
        height,
        maze.edge_count()
    );
    maze
}
