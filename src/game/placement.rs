use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::{Position, Rect};

/// Pick a uniformly random cell on a `grid`×`grid` board for which
/// `occupied` returns `false`.
///
/// Cells are sampled at random and rejected while occupied.  After
/// [`MAX_PLACEMENT_ATTEMPTS`][consts::MAX_PLACEMENT_ATTEMPTS] rejections, the
/// whole board is scanned and one of the free cells is chosen instead, so
/// that a nearly-full board cannot stall the game.  Returns `None` if every
/// cell is occupied.
pub(super) fn free_cell<R, F>(rng: &mut R, grid: u16, occupied: F) -> Option<Position>
where
    R: Rng,
    F: Fn(Position) -> bool,
{
    if grid == 0 {
        return None;
    }
    for _ in 0..consts::MAX_PLACEMENT_ATTEMPTS {
        let pos = Position::new(rng.random_range(0..grid), rng.random_range(0..grid));
        if !occupied(pos) {
            return Some(pos);
        }
    }
    log::debug!("Random placement gave up; scanning the board for free cells");
    Rect::new(0, 0, grid, grid)
        .positions()
        .filter(|&p| !occupied(p))
        .choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::HashSet;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[test]
    fn never_returns_occupied_cell() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let taken = HashSet::from([
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
            Position::new(1, 1),
        ]);
        for _ in 0..200 {
            let pos = free_cell(&mut rng, 3, |p| taken.contains(&p)).expect("board has room");
            assert!(!taken.contains(&pos), "{pos:?} is occupied");
            assert!(pos.x < 3 && pos.y < 3, "{pos:?} is off the board");
        }
    }

    #[test]
    fn finds_last_free_cell() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let hole = Position::new(7, 3);
        assert_eq!(free_cell(&mut rng, 40, |p| p != hole), Some(hole));
    }

    #[test]
    fn full_board() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        assert_eq!(free_cell(&mut rng, 4, |_| true), None);
    }

    #[test]
    fn empty_board() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        assert_eq!(free_cell(&mut rng, 0, |_| false), None);
    }
}
