use crate::config::{Entity, Palette};
use crate::consts;
use crate::game::Snapshot;
use crate::util::{center_rect, get_display_area};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Widget},
};
use std::collections::HashMap;

/// Widget for drawing the game screen: the score bar, the board, and (once
/// the game is over) instructions for restarting
#[derive(Clone, Copy, Debug)]
pub(crate) struct Board<'a> {
    pub(crate) snapshot: Snapshot<'a>,
    pub(crate) palette: &'a Palette,
}

impl Board<'_> {
    /// The color of every occupied grid cell.  Later entries win, so the
    /// snake's head is drawn on top of anything it has collided with.
    fn cell_colors(&self) -> HashMap<Position, Color> {
        let snap = &self.snapshot;
        let mut colors = HashMap::new();
        for &p in snap.obstacles {
            colors.insert(p, self.palette.get(Entity::Obstacle));
        }
        colors.insert(snap.food, self.palette.get(Entity::Food));
        if let Some(bonus) = snap.bonus {
            colors.insert(bonus.position, self.palette.get(Entity::BonusFood));
        }
        let mut cells = snap.snake.iter();
        let head = cells.next();
        for &p in cells {
            colors.insert(p, self.palette.get(Entity::SnakeBody));
        }
        if let Some(&p) = head {
            colors.insert(p, self.palette.get(Entity::SnakeHead));
        }
        colors
    }

    fn score_line(&self) -> String {
        let score = self.snapshot.score;
        match self.snapshot.bonus {
            Some(bonus) => format!(" Score: {score}   Bonus: {}", bonus.ticks_left),
            None => format!(" Score: {score}"),
        }
    }
}

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, block_area, msg_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(self.score_line(), consts::SCORE_BAR_STYLE).render(score_area, buf);

        let grid = self.snapshot.grid;
        let rows = grid.div_ceil(2);
        let block_size = Size {
            width: grid.saturating_add(2),
            height: rows.saturating_add(2),
        };
        let block_area = center_rect(block_area, block_size);
        Block::bordered().render(block_area, buf);

        // Each terminal cell covers two grid cells stacked vertically.
        let colors = self.cell_colors();
        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for row in 0..rows {
            for x in 0..grid {
                let upper = colors.get(&Position::new(x, row * 2)).copied();
                let lower = colors.get(&Position::new(x, row * 2 + 1)).copied();
                let (symbol, style) = match (upper, lower) {
                    (Some(u), Some(l)) => (consts::UPPER_HALF_SYMBOL, Style::new().fg(u).bg(l)),
                    (Some(u), None) => (consts::UPPER_HALF_SYMBOL, Style::new().fg(u)),
                    (None, Some(l)) => (consts::LOWER_HALF_SYMBOL, Style::new().fg(l)),
                    (None, None) => continue,
                };
                canvas.draw_cell(Position::new(x, row), symbol, style);
            }
        }

        if self.snapshot.game_over {
            Line::from_iter([
                Span::raw(" Game Over! Press "),
                Span::styled("R", consts::KEY_STYLE),
                Span::raw(" to restart — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
            .render(msg_area, buf);
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: &str, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if !self.area.contains(Position { x, y }) {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_symbol(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}
