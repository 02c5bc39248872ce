mod direction;
mod food;
mod placement;
mod snake;
pub(crate) use self::direction::Direction;
pub(crate) use self::food::BonusFood;
use self::placement::free_cell;
use self::snake::Snake;
use crate::consts;
use rand::Rng;
use ratatui::layout::Position;
use std::collections::{HashSet, VecDeque};

/// The complete state of one game: everything needed to advance the
/// simulation and to draw it.
///
/// `R` is the random number generator used for placing obstacles & food.
/// Pass a seeded generator to get a reproducible sequence of layouts.
#[derive(Clone, Debug)]
pub(crate) struct GameState<R> {
    rng: R,
    /// Number of cells along each side of the board
    grid: u16,
    snake: Snake,
    direction: Direction,
    obstacles: HashSet<Position>,
    food: Position,
    bonus: Option<BonusFood>,
    score: u32,
    game_over: bool,
}

impl<R: Rng> GameState<R> {
    pub(crate) fn new_with_rng(rng: R) -> GameState<R> {
        GameState::with_grid(consts::GRID_COUNT, rng)
    }

    fn with_grid(grid: u16, rng: R) -> GameState<R> {
        let center = Position::new(grid / 2, grid / 2);
        let mut game = GameState {
            rng,
            grid,
            snake: Snake::new(center),
            direction: Direction::Right,
            obstacles: HashSet::new(),
            food: center,
            bonus: None,
            score: 0,
            game_over: false,
        };
        game.reset();
        game
    }

    /// Start over with a one-cell snake in the center of the board heading
    /// right, freshly-placed obstacles & food, no bonus food, and a score of
    /// zero.
    pub(crate) fn reset(&mut self) {
        self.snake = Snake::new(Position::new(self.grid / 2, self.grid / 2));
        self.direction = Direction::Right;
        self.bonus = None;
        self.score = 0;
        self.game_over = false;
        self.obstacles.clear();
        for _ in 0..consts::OBSTACLE_QTY {
            let Some(pos) = free_cell(&mut self.rng, self.grid, |p| {
                self.snake.contains(p) || self.obstacles.contains(&p)
            }) else {
                log::warn!("No room left for obstacles; placed {}", self.obstacles.len());
                break;
            };
            self.obstacles.insert(pos);
        }
        if self.respawn_food() {
            log::debug!(
                "New game: obstacles at {:?}, food at {:?}",
                self.obstacles,
                self.food
            );
        }
    }

    /// Advance the game by one tick.
    ///
    /// If `requested` is a direction other than the reverse of the current
    /// one, the snake turns that way first.  Once the game is over, this does
    /// nothing beyond that until [`reset()`][GameState::reset] is called.
    pub(crate) fn step(&mut self, requested: Option<Direction>) {
        if let Some(d) = requested.filter(|&d| d != self.direction.reverse()) {
            self.direction = d;
        }
        if self.game_over {
            return;
        }
        let head = self.direction.advance(self.snake.head(), self.grid);
        if self.snake.hits_body(head) {
            self.end_game("ran into itself");
            return;
        }
        if self.obstacles.contains(&head) {
            self.end_game("hit an obstacle");
            return;
        }
        self.snake.push_head(head);
        if head == self.food {
            self.score += consts::FOOD_POINTS;
            if !self.respawn_food() {
                return;
            }
            self.maybe_spawn_bonus();
        } else if self.bonus.is_some_and(|b| b.position == head) {
            self.score += consts::BONUS_FOOD_POINTS;
            self.bonus = None;
        } else {
            self.snake.drop_tail();
        }
        if self.bonus.as_mut().is_some_and(BonusFood::tick) {
            log::debug!("Bonus food expired");
            self.bonus = None;
        }
    }

    /// Move the food to a random cell not occupied by the snake, an
    /// obstacle, or the bonus food.  If there is no such cell, the game ends
    /// and `false` is returned.
    fn respawn_food(&mut self) -> bool {
        let bonus = self.bonus.map(|b| b.position);
        match free_cell(&mut self.rng, self.grid, |p| {
            self.snake.contains(p) || self.obstacles.contains(&p) || bonus == Some(p)
        }) {
            Some(pos) => {
                self.food = pos;
                true
            }
            None => {
                log::warn!("No free cell left for food");
                self.end_game("filled the board");
                false
            }
        }
    }

    fn maybe_spawn_bonus(&mut self) {
        if self.bonus.is_some() || !self.rng.random_bool(consts::BONUS_FOOD_PROBABILITY) {
            return;
        }
        let food = self.food;
        if let Some(pos) = free_cell(&mut self.rng, self.grid, |p| {
            self.snake.contains(p) || self.obstacles.contains(&p) || p == food
        }) {
            log::debug!("Bonus food spawned at {pos:?}");
            self.bonus = Some(BonusFood::new(pos));
        }
    }
}

impl<R> GameState<R> {
    pub(crate) fn is_over(&self) -> bool {
        self.game_over
    }

    /// Return a read-only view of everything that should be drawn
    pub(crate) fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.grid,
            snake: self.snake.cells(),
            food: self.food,
            bonus: self.bonus,
            obstacles: &self.obstacles,
            score: self.score,
            game_over: self.game_over,
        }
    }

    #[cfg(test)]
    pub(crate) fn force_game_over(&mut self) {
        self.game_over = true;
    }

    fn end_game(&mut self, cause: &str) {
        log::info!(
            "Game over: snake {cause} at length {} with score {}",
            self.snake.len(),
            self.score
        );
        self.game_over = true;
    }
}

/// A borrowed, read-only view of a [`GameState`] after a tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot<'a> {
    /// Number of cells along each side of the board
    pub(crate) grid: u16,
    /// The snake's cells, head first
    pub(crate) snake: &'a VecDeque<Position>,
    pub(crate) food: Position,
    pub(crate) bonus: Option<BonusFood>,
    pub(crate) obstacles: &'a HashSet<Position>,
    pub(crate) score: u32,
    pub(crate) game_over: bool,
}
