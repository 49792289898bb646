//! 错误类型定义

use protocol::MoveError;
use thiserror::Error;

use crate::state::{Phase, Transition};

/// 对局操作错误
///
/// 均为可恢复错误：操作不生效，状态不变
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 落子规则错误
    #[error("Invalid move: {0}")]
    Move(#[from] MoveError),

    /// 不是你的回合
    #[error("Not your turn")]
    NotYourTurn,

    /// 当前没有进行中的对局
    #[error("No round in progress (phase: {phase:?})")]
    NotPlaying { phase: Phase },

    /// 状态机不允许的转换
    #[error("Invalid transition: {transition:?} from {from:?}")]
    InvalidTransition { from: Phase, transition: Transition },
}

/// 对局操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
