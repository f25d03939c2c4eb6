use std::time::{Duration, Instant};

use primaze::generators::{generate_maze_with, get_rng};

/// Times repeated maze generation.
/// Usage: `profile [WIDTH HEIGHT [ITERATIONS [SEED]]]`
fn main() {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let width = args.next().and_then(|s| s.parse::<u8>().ok()).unwrap_or(64);
    let height = args.next().and_then(|s| s.parse::<u8>().ok()).unwrap_or(64);
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(10);
    let seed = args.next().and_then(|s| s.parse::<u64>().ok());

    if width == 0 || height == 0 || num_iters == 0 {
        eprintln!("Width, height and iterations must all be at least 1.");
        return;
    }

    let mut rng = get_rng(seed);
    let mut total = Duration::ZERO;
    for i in 0..num_iters {
        let start = Instant::now();
        let maze = generate_maze_with(width, height, &mut rng);
        let elapsed = start.elapsed();
        total += elapsed;
        println!(
            "Run {}: {}x{} maze with {} passages in {:?}",
            i + 1,
            width,
            height,
            maze.edge_count(),
            elapsed
        );
    }
    println!("Average: {:?}", total / num_iters as u32);
}
