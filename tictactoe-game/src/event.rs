//! 表现层接口：事件与只读快照

use protocol::{Cells, Difficulty, GameMode, GameResult, Mark};
use serde::{Deserialize, Serialize};

use crate::score::ScoreBoard;
use crate::state::Phase;

/// 对局事件（供表现层播放音效和动画）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// 新一局开始（包括重新开始）
    RoundStarted { mode: GameMode },
    /// 落子
    MarkPlaced {
        index: usize,
        mark: Mark,
        by_engine: bool,
    },
    /// 对局结束
    RoundOver { result: GameResult },
    /// 返回菜单
    ReturnedToMenu,
    /// 比分清零
    ScoresReset,
    /// 难度变更
    DifficultyChanged { difficulty: Difficulty },
}

/// 对局只读快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub mode: Option<GameMode>,
    pub difficulty: Difficulty,
    pub cells: Cells,
    pub result: GameResult,
    /// 高亮的获胜连线
    pub winning_line: Option<[usize; 3]>,
    /// 当前走子方（菜单中为 None，结束后冻结）
    pub current_player: Option<Mark>,
    /// 电脑是否在等待落子
    pub engine_pending: bool,
    pub scores: ScoreBoard,
}
