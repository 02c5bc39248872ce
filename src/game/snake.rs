use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// The body is stored head first and always holds at least one cell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    pub(super) body: VecDeque<Position>,
}

impl Snake {
    /// Create a new one-cell snake at `head`
    pub(super) fn new(head: Position) -> Snake {
        Snake {
            body: VecDeque::from([head]),
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        // `body` is never empty; fall back to the origin rather than panic.
        self.body.front().copied().unwrap_or(Position::ORIGIN)
    }

    /// Return the cells of the snake, head first
    pub(crate) fn cells(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    /// Does `pos` land on any segment other than the head?  (The tail counts,
    /// even though it is about to move out of the way.)
    pub(super) fn hits_body(&self, pos: Position) -> bool {
        self.body.iter().skip(1).any(|&p| p == pos)
    }

    pub(super) fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub(super) fn push_head(&mut self, pos: Position) {
        self.body.push_front(pos);
    }

    /// Drop the tail cell, unless it is the only cell left
    pub(super) fn drop_tail(&mut self) {
        if self.body.len() > 1 {
            let _ = self.body.pop_back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_body_ignores_head_but_not_tail() {
        let snake = Snake {
            body: VecDeque::from([
                Position::new(5, 5),
                Position::new(5, 6),
                Position::new(6, 6),
            ]),
        };
        assert!(!snake.hits_body(Position::new(5, 5)));
        assert!(snake.hits_body(Position::new(5, 6)));
        assert!(snake.hits_body(Position::new(6, 6)));
        assert!(!snake.hits_body(Position::new(6, 5)));
    }

    #[test]
    fn drop_tail_keeps_last_cell() {
        let mut snake = Snake::new(Position::new(1, 1));
        snake.drop_tail();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(1, 1));
    }

    #[test]
    fn push_then_drop_shifts_cells() {
        let mut snake = Snake {
            body: VecDeque::from([Position::new(5, 5), Position::new(4, 5)]),
        };
        snake.push_head(Position::new(6, 5));
        snake.drop_tail();
        assert_eq!(
            snake.cells(),
            &VecDeque::from([Position::new(6, 5), Position::new(5, 5)])
        );
    }
}
