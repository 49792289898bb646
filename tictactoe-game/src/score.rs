//! 比分统计

use protocol::{GameResult, Mark};
use serde::{Deserialize, Serialize};

/// 比分
///
/// 只增不减，仅在开始新会话时清零，重新开局不影响
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    /// 先手方（人机模式下为玩家）胜局
    player_wins: u32,
    /// 后手方（人机模式下为电脑）胜局
    opponent_wins: u32,
    /// 和棋
    draws: u32,
}

impl ScoreBoard {
    /// 记录一局结果，进行中的结果不计
    pub fn record(&mut self, result: &GameResult) {
        match result {
            GameResult::Win { mark: Mark::X, .. } => self.player_wins += 1,
            GameResult::Win { mark: Mark::O, .. } => self.opponent_wins += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::InProgress => {}
        }
    }

    pub fn player_wins(&self) -> u32 {
        self.player_wins
    }

    pub fn opponent_wins(&self) -> u32 {
        self.opponent_wins
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// 已结束的局数
    pub fn rounds(&self) -> u32 {
        self.player_wins + self.opponent_wins + self.draws
    }

    /// 清零（新会话）
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
