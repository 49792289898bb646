//! 对局阶段状态机

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// 对局阶段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// 主菜单
    #[default]
    Menu,
    /// 对局中
    Playing,
    /// 对局结束
    GameOver,
}

/// 阶段转换
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// 选择模式开始新一局
    StartRound,
    /// 落子后对局继续
    Continue,
    /// 落子后分出胜负或和棋
    Finish,
    /// 重新开始（保留比分）
    Restart,
    /// 返回菜单
    ReturnToMenu,
}

impl Phase {
    /// 计算转换后的阶段，未列出的转换一律拒绝
    pub fn next(self, transition: Transition) -> Result<Phase> {
        use Phase::*;
        use Transition::*;

        match (self, transition) {
            (Menu, StartRound) => Ok(Playing),
            (Playing, Continue) => Ok(Playing),
            (Playing, Finish) => Ok(GameOver),
            (Playing | GameOver, Restart) => Ok(Playing),
            (Playing | GameOver, ReturnToMenu) => Ok(Menu),
            (from, transition) => Err(GameError::InvalidTransition { from, transition }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_transitions() {
        assert_eq!(Phase::Menu.next(Transition::StartRound), Ok(Phase::Playing));
        assert_eq!(Phase::Playing.next(Transition::Continue), Ok(Phase::Playing));
        assert_eq!(Phase::Playing.next(Transition::Finish), Ok(Phase::GameOver));
        assert_eq!(Phase::GameOver.next(Transition::Restart), Ok(Phase::Playing));
        assert_eq!(Phase::Playing.next(Transition::Restart), Ok(Phase::Playing));
        assert_eq!(Phase::GameOver.next(Transition::ReturnToMenu), Ok(Phase::Menu));
        assert_eq!(Phase::Playing.next(Transition::ReturnToMenu), Ok(Phase::Menu));
    }

    #[test]
    fn test_rejected_transitions() {
        let rejected = [
            (Phase::Menu, Transition::Continue),
            (Phase::Menu, Transition::Finish),
            (Phase::Menu, Transition::Restart),
            (Phase::Menu, Transition::ReturnToMenu),
            (Phase::Playing, Transition::StartRound),
            (Phase::GameOver, Transition::StartRound),
            (Phase::GameOver, Transition::Continue),
            (Phase::GameOver, Transition::Finish),
        ];
        for (from, transition) in rejected {
            assert_eq!(
                from.next(transition),
                Err(GameError::InvalidTransition { from, transition })
            );
        }
    }
}
