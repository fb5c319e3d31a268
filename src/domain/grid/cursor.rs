// カーソル（選択セル）と移動

use serde::{Deserialize, Serialize};

/// 移動方向
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// 盤面上の選択位置
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// 盤面中央
    pub fn center(size: usize) -> Self {
        Self::new(size / 2, size / 2)
    }

    /// amount だけ移動した位置（盤面端でラップ）
    pub fn moved(self, direction: Direction, amount: usize, size: usize) -> Self {
        if size == 0 {
            return self;
        }
        let step = amount % size;
        let back = |v: usize| (v + size - step) % size;
        let fwd = |v: usize| (v + step) % size;
        match direction {
            Direction::Up => Self::new(back(self.row), self.col),
            Direction::Down => Self::new(fwd(self.row), self.col),
            Direction::Left => Self::new(self.row, back(self.col)),
            Direction::Right => Self::new(self.row, fwd(self.col)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_within_grid() {
        let c = Cursor::new(2, 2);
        assert_eq!(c.moved(Direction::Up, 1, 10), Cursor::new(1, 2));
        assert_eq!(c.moved(Direction::Down, 1, 10), Cursor::new(3, 2));
        assert_eq!(c.moved(Direction::Left, 1, 10), Cursor::new(2, 1));
        assert_eq!(c.moved(Direction::Right, 5, 10), Cursor::new(2, 7));
    }

    #[test]
    fn wraps_at_edges() {
        let c = Cursor::new(0, 0);
        assert_eq!(c.moved(Direction::Up, 1, 50), Cursor::new(49, 0));
        assert_eq!(c.moved(Direction::Left, 5, 50), Cursor::new(0, 45));
        assert_eq!(Cursor::new(48, 49).moved(Direction::Down, 5, 50), Cursor::new(3, 49));
        assert_eq!(Cursor::new(1, 49).moved(Direction::Right, 1, 50), Cursor::new(1, 0));
    }

    #[test]
    fn step_larger_than_grid() {
        assert_eq!(Cursor::new(1, 1).moved(Direction::Up, 5, 3), Cursor::new(2, 1));
    }
}
