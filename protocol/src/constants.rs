//! 协议常量定义

/// 棋盘边长（行数 = 列数）
pub const BOARD_SIZE: usize = 3;

/// 格子总数
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 所有获胜连线
///
/// 顺序固定：行（上到下）、列（左到右）、对角线。
/// `Board::winner` 返回第一条满足条件的连线。
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 电脑走子前的默认延迟（毫秒）
pub const DEFAULT_ENGINE_DELAY_MS: u64 = 340;
