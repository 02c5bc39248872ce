use crate::consts;
use ratatui::layout::Position;

/// A time-limited, higher-value food item
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct BonusFood {
    pub(crate) position: Position,

    /// Number of ticks left before the bonus food disappears
    pub(crate) ticks_left: u16,
}

impl BonusFood {
    /// Create a bonus food at `position` with a full lifetime of
    /// [`BONUS_FOOD_LIFETIME`][consts::BONUS_FOOD_LIFETIME] ticks
    pub(super) fn new(position: Position) -> BonusFood {
        BonusFood {
            position,
            ticks_left: consts::BONUS_FOOD_LIFETIME,
        }
    }

    /// Count down one tick.  Returns `true` if the bonus food has now
    /// expired.
    pub(super) fn tick(&mut self) -> bool {
        self.ticks_left = self.ticks_left.saturating_sub(1);
        self.ticks_left == 0
    }
}
