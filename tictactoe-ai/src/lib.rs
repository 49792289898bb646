//! 井字棋 AI 引擎
//!
//! 包含:
//! - Minimax + Alpha-Beta 搜索
//! - 按难度划分的落子策略（随机 / 限深搜索 / 完整搜索）
//! - 可注入的随机源

mod search;

pub use search::{
    choose_move, AiConfig, AiEngine, FULL_DEPTH, MEDIUM_DEPTH, MEDIUM_RANDOM_CHANCE, WIN_SCORE,
};
pub use protocol::Difficulty;
