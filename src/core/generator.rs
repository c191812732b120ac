//! Board generation
//!
//! Shuffles the word pool with Fisher–Yates and lays the first 24 picks out
//! around the free center cell.

use super::board::{Board, CELL_COUNT, FREE_INDEX};
use rand::Rng;
use tracing::{debug, warn};

/// Number of pool entries a full board consumes (every cell but the free one)
pub const PICKS_NEEDED: usize = CELL_COUNT - 1;

/// Generate a fresh board using the thread-local random source
///
/// A pool with fewer than [`PICKS_NEEDED`] entries still produces a board;
/// the cells without a pick get empty content.
#[must_use]
pub fn generate(pool: &[String], free_label: &str) -> Board {
    generate_with(pool, free_label, &mut rand::rng())
}

/// Generate a fresh board drawing randomness from `rng`
///
/// # Examples
/// ```
/// use bingo_board::core::{generate_with, FREE_INDEX};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let pool: Vec<String> = (0..30).map(|i| format!("word {i}")).collect();
/// let board = generate_with(&pool, "FREE", &mut StdRng::seed_from_u64(7));
///
/// assert_eq!(board.content(FREE_INDEX), Some("FREE"));
/// assert!(board.is_marked(FREE_INDEX));
/// assert_eq!(board.marked_count(), 1);
/// ```
pub fn generate_with<R: Rng + ?Sized>(pool: &[String], free_label: &str, rng: &mut R) -> Board {
    if pool.len() < PICKS_NEEDED {
        warn!(
            available = pool.len(),
            needed = PICKS_NEEDED,
            "word pool too small, some cells will be empty"
        );
    }

    let mut shuffled: Vec<&str> = pool.iter().map(String::as_str).collect();
    shuffle(&mut shuffled, rng);
    shuffled.truncate(PICKS_NEEDED);

    let contents = std::array::from_fn(|index| {
        if index == FREE_INDEX {
            return free_label.to_string();
        }
        let pick = if index < FREE_INDEX { index } else { index - 1 };
        shuffled
            .get(pick)
            .map_or_else(String::new, |word| (*word).to_string())
    });
    let marks = std::array::from_fn(|index| index == FREE_INDEX);

    debug!(pool = pool.len(), "generated new board");
    Board::from_parts(contents, marks)
}

/// In-place Fisher–Yates shuffle
///
/// Walks from the last index down to 1, swapping each slot with a uniformly
/// chosen slot in `[0, i]`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
