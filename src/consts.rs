//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Number of cells along each side of the (square) grid
pub(crate) const GRID_COUNT: u16 = 40;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Number of obstacles placed at the start of each game
pub(crate) const OBSTACLE_QTY: usize = 5;

/// Points awarded for eating the normal food
pub(crate) const FOOD_POINTS: u32 = 1;

/// Points awarded for eating the bonus food
pub(crate) const BONUS_FOOD_POINTS: u32 = 5;

/// Probability that eating the normal food spawns a bonus food
pub(crate) const BONUS_FOOD_PROBABILITY: f64 = 0.2;

/// Number of ticks a bonus food stays on the board if not eaten
pub(crate) const BONUS_FOOD_LIFETIME: u16 = 50;

/// How many times to randomly sample a cell before falling back to scanning
/// the whole grid for free cells
pub(crate) const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Glyph for a terminal cell whose upper half is a grid cell
pub(crate) const UPPER_HALF_SYMBOL: &str = "▀";

/// Glyph for a terminal cell where only the lower half is a grid cell
pub(crate) const LOWER_HALF_SYMBOL: &str = "▄";

/// Default color of the snake's head
pub(crate) const SNAKE_HEAD_COLOR: Color = Color::Green;

/// Default color of the snake's body
pub(crate) const SNAKE_BODY_COLOR: Color = Color::White;

/// Default color of the normal food
pub(crate) const FOOD_COLOR: Color = Color::Red;

/// Default color of the bonus food (gold)
pub(crate) const BONUS_FOOD_COLOR: Color = Color::Rgb(255, 215, 0);

/// Default color of obstacles
pub(crate) const OBSTACLE_COLOR: Color = Color::Blue;

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
