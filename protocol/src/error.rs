//! 错误类型定义

use thiserror::Error;

/// 落子规则错误
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// 格子索引越界
    #[error("Cell index out of range: {index} (expected 0..=8)")]
    OutOfRange { index: usize },

    /// 格子已被占用
    #[error("Cell {index} is already occupied")]
    CellOccupied { index: usize },
}

/// 落子操作结果类型
pub type Result<T> = std::result::Result<T, MoveError>;

/// 棋盘字符串解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    /// 格子数量不是 9
    #[error("Expected {expected} cells, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// 无法识别的字符
    #[error("Invalid cell character: {0:?}")]
    InvalidChar(char),
}
