//! 棋盘状态

use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT, WIN_LINES};
use crate::error::{MoveError, ParseBoardError, Result};
use crate::mark::Mark;

/// 9 个格子的值拷贝，索引为 row * 3 + col
pub type Cells = [Option<Mark>; CELL_COUNT];

/// 对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// 进行中
    InProgress,
    /// 一方连成一线
    Win { mark: Mark, line: [usize; 3] },
    /// 和棋（格子全满且无连线）
    Draw,
}

impl GameResult {
    /// 是否已结束
    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// 获胜方
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameResult::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// 获胜连线（用于高亮）
    pub fn line(&self) -> Option<[usize; 3]> {
        match self {
            GameResult::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// 按固定顺序扫描连线，计算对局结果
///
/// 不做缓存，每次落子后重新计算。
pub fn evaluate(cells: &Cells) -> GameResult {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Some(mark) = cells[a] {
            if cells[b] == Some(mark) && cells[c] == Some(mark) {
                return GameResult::Win { mark, line };
            }
        }
    }

    if cells.iter().all(Option::is_some) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}

/// 棋盘
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// 3x3 格子
    cells: Cells,
    /// 每格落子时间（仅供表现层播放入场动画）
    #[serde(skip)]
    placed_at: [Option<Instant>; CELL_COUNT],
    /// 高亮的获胜连线
    winning_line: Option<[usize; 3]>,
    /// 连线高亮开始时间
    #[serde(skip)]
    win_marked_at: Option<Instant>,
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            cells: [None; CELL_COUNT],
            placed_at: [None; CELL_COUNT],
            winning_line: None,
            win_marked_at: None,
        }
    }

    /// 从格子数组创建（不记录落子时间）
    pub fn from_cells(cells: Cells) -> Self {
        Self {
            cells,
            ..Self::empty()
        }
    }

    /// 行列转换为格子索引
    pub fn index_of(row: usize, col: usize) -> Option<usize> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(row * BOARD_SIZE + col)
        } else {
            None
        }
    }

    /// 获取指定格子的标记
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// 格子值拷贝
    pub fn cells(&self) -> Cells {
        self.cells
    }

    /// 所有空格索引（升序）
    pub fn empty_cells(&self) -> Vec<usize> {
        empty_cells(&self.cells)
    }

    /// 是否已满
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// 落子，失败时返回原因且不修改棋盘
    pub fn try_place(&mut self, index: usize, mark: Mark) -> Result<()> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(MoveError::OutOfRange { index })?;
        if cell.is_some() {
            return Err(MoveError::CellOccupied { index });
        }
        *cell = Some(mark);
        self.placed_at[index] = Some(Instant::now());
        Ok(())
    }

    /// 落子，成功返回 true
    pub fn place(&mut self, index: usize, mark: Mark) -> bool {
        self.try_place(index, mark).is_ok()
    }

    /// 计算当前结果
    pub fn winner(&self) -> GameResult {
        evaluate(&self.cells)
    }

    /// 清空棋盘及所有动画标记
    pub fn reset(&mut self) {
        *self = Self::empty();
    }

    /// 指定格子的落子时间
    pub fn placed_at(&self, index: usize) -> Option<Instant> {
        self.placed_at.get(index).copied().flatten()
    }

    /// 标记获胜连线（开始高亮）
    pub fn mark_winning_line(&mut self, line: [usize; 3]) {
        self.winning_line = Some(line);
        self.win_marked_at = Some(Instant::now());
    }

    /// 高亮中的获胜连线
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winning_line
    }

    /// 连线高亮开始时间
    pub fn win_marked_at(&self) -> Option<Instant> {
        self.win_marked_at
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

/// 所有空格索引（升序）
pub fn empty_cells(cells: &Cells) -> Vec<usize> {
    cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_none())
        .map(|(i, _)| i)
        .collect()
}

/// 空格显示为索引数字，便于文本界面输入
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            for col in 0..BOARD_SIZE {
                let index = row * BOARD_SIZE + col;
                let c = match self.cells[index] {
                    Some(mark) => mark.to_char(),
                    None => char::from_digit(index as u32, 10).unwrap_or(' '),
                };
                if col > 0 {
                    write!(f, "|")?;
                }
                write!(f, " {} ", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// 解析 "XX..O...." 形式的棋盘，`.` `-` `_` 表示空格，忽略空白和 `/`
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut cells: Vec<Option<Mark>> = Vec::with_capacity(CELL_COUNT);
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '/') {
            let cell = match c {
                '.' | '-' | '_' => None,
                _ => Some(Mark::from_char(c).ok_or(ParseBoardError::InvalidChar(c))?),
            };
            cells.push(cell);
        }

        let actual = cells.len();
        let cells: Cells = cells.try_into().map_err(|_| ParseBoardError::WrongLength {
            expected: CELL_COUNT,
            actual,
        })?;
        Ok(Self::from_cells(cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board() {
        let b = Board::empty();
        assert_eq!(b.winner(), GameResult::InProgress);
        assert_eq!(b.empty_cells(), (0..9).collect::<Vec<_>>());
        assert!(!b.is_full());
    }

    #[test]
    fn test_place() {
        let mut b = Board::empty();
        assert!(b.place(4, Mark::X));
        assert_eq!(b.get(4), Some(Mark::X));
        assert!(b.placed_at(4).is_some());
        assert!(b.placed_at(0).is_none());
        assert_eq!(b.winner(), GameResult::InProgress);
    }

    #[test]
    fn test_place_twice_fails() {
        let mut b = Board::empty();
        assert!(b.place(3, Mark::X));
        let before = b.clone();

        assert!(!b.place(3, Mark::O));
        assert_eq!(b, before);
        assert_eq!(b.try_place(3, Mark::X), Err(MoveError::CellOccupied { index: 3 }));
    }

    #[test]
    fn test_place_out_of_range() {
        let mut b = Board::empty();
        assert!(!b.place(9, Mark::X));
        assert_eq!(b.try_place(42, Mark::O), Err(MoveError::OutOfRange { index: 42 }));
        assert_eq!(b, Board::empty());
    }

    #[test]
    fn test_every_line_wins() {
        for line in WIN_LINES {
            for mark in [Mark::X, Mark::O] {
                let mut cells: Cells = [None; CELL_COUNT];
                for i in line {
                    cells[i] = Some(mark);
                }
                assert_eq!(evaluate(&cells), GameResult::Win { mark, line });
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_win() {
        assert_eq!(board("XXO ... ...").winner(), GameResult::InProgress);
        assert_eq!(board("X.. .O. ..X").winner(), GameResult::InProgress);
    }

    #[test]
    fn test_first_line_in_order_is_reported() {
        // 第一行与第一列同时成立时，报告第一行
        let b = board("XXX X.. X..");
        assert_eq!(
            b.winner(),
            GameResult::Win { mark: Mark::X, line: [0, 1, 2] }
        );

        // 两条对角线同时成立时，报告主对角线
        let b = board("O.O .O. O.O");
        assert_eq!(
            b.winner(),
            GameResult::Win { mark: Mark::O, line: [0, 4, 8] }
        );
    }

    #[test]
    fn test_draw() {
        let b = board("XOX XOO OXX");
        assert!(b.is_full());
        assert_eq!(b.winner(), GameResult::Draw);
        assert!(b.winner().is_over());
        assert_eq!(b.winner().winner(), None);
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        let b = board("XXX OOX XOO");
        assert_eq!(
            b.winner(),
            GameResult::Win { mark: Mark::X, line: [0, 1, 2] }
        );
    }

    #[test]
    fn test_near_full_in_progress() {
        let b = board("XOX XOO OX.");
        assert_eq!(b.winner(), GameResult::InProgress);
        assert_eq!(b.empty_cells(), vec![8]);
    }

    #[test]
    fn test_reset_clears_markers() {
        let mut b = board("XXX ... ...");
        b.place(4, Mark::O);
        b.mark_winning_line([0, 1, 2]);
        assert_eq!(b.winning_line(), Some([0, 1, 2]));
        assert!(b.win_marked_at().is_some());

        b.reset();
        assert_eq!(b, Board::empty());
        assert!(b.placed_at(4).is_none());
        assert!(b.winning_line().is_none());
        assert!(b.win_marked_at().is_none());
    }

    #[test]
    fn test_index_of() {
        assert_eq!(Board::index_of(0, 0), Some(0));
        assert_eq!(Board::index_of(1, 2), Some(5));
        assert_eq!(Board::index_of(2, 2), Some(8));
        assert_eq!(Board::index_of(3, 0), None);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XX".parse::<Board>(),
            Err(ParseBoardError::WrongLength { expected: 9, actual: 2 })
        );
        assert_eq!(
            "XX?......".parse::<Board>(),
            Err(ParseBoardError::InvalidChar('?'))
        );
    }

    #[test]
    fn test_display_shows_free_indices() {
        let text = board("X.. .O. ...").to_string();
        assert!(text.starts_with(" X | 1 | 2 \n"));
        assert!(text.contains(" 3 | O | 5 "));
    }
}
