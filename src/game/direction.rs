use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the cell one step from `pos` in this direction on a wrapping
    /// square grid with `grid` cells per side
    pub(crate) fn advance(self, pos: Position, grid: u16) -> Position {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::Up => y = decrement_wrapping(y, grid),
            Direction::Down => y = increment_wrapping(y, grid),
            Direction::Left => x = decrement_wrapping(x, grid),
            Direction::Right => x = increment_wrapping(x, grid),
        }
        Position { x, y }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

fn decrement_wrapping(x: u16, max: u16) -> u16 {
    match x.checked_sub(1) {
        Some(x2) if x2 < max => x2,
        _ => max.saturating_sub(1),
    }
}

fn increment_wrapping(x: u16, max: u16) -> u16 {
    x.checked_add(1).filter(|&xx| xx < max).unwrap_or(0)
}
