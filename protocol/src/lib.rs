//! 井字棋共享协议库
//!
//! 包含:
//! - 标记、棋盘、对局结果等核心数据结构
//! - 胜负与和棋判定
//! - 难度与游戏模式定义

mod board;
mod constants;
mod error;
mod mark;
mod mode;

pub use board::{empty_cells, evaluate, Board, Cells, GameResult};
pub use constants::*;
pub use error::{MoveError, ParseBoardError, Result};
pub use mark::Mark;
pub use mode::{Difficulty, GameMode};
