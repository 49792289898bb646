//! 对局模式与 AI 难度

use serde::{Deserialize, Serialize};

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    /// 简单：完全随机
    Easy,
    /// 中等：35% 随机，否则 depth=4 搜索
    Medium,
    /// 不可能：完整搜索，永不落败
    #[default]
    Impossible,
}

impl Difficulty {
    /// 显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "简单",
            Difficulty::Medium => "中等",
            Difficulty::Impossible => "不可能",
        }
    }

    /// 所有选项
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Impossible]
    }

    /// 下一个选项
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Impossible,
            Difficulty::Impossible => Difficulty::Easy,
        }
    }

    /// 上一个选项
    pub fn prev(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Impossible,
            Difficulty::Medium => Difficulty::Easy,
            Difficulty::Impossible => Difficulty::Medium,
        }
    }
}

/// 游戏模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// 本地双人对战（同一设备轮流落子）
    HumanVsHuman,
    /// 人机对战（玩家执 X 先手，电脑执 O）
    HumanVsEngine,
}

impl GameMode {
    /// 是否有电脑参与
    pub fn is_vs_engine(&self) -> bool {
        matches!(self, GameMode::HumanVsEngine)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "双人对战",
            GameMode::HumanVsEngine => "人机对战",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_cycle() {
        for &d in Difficulty::all() {
            assert_eq!(d.next().prev(), d);
        }
        assert_eq!(Difficulty::Impossible.next(), Difficulty::Easy);
        assert_eq!(Difficulty::default(), Difficulty::Impossible);
    }

    #[test]
    fn test_difficulty_json_name() {
        // 设置文件中以变体名保存
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"Medium\"");
    }

    #[test]
    fn test_game_mode() {
        assert!(GameMode::HumanVsEngine.is_vs_engine());
        assert!(!GameMode::HumanVsHuman.is_vs_engine());
    }
}
