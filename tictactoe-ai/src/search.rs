//! 搜索引擎
//!
//! 实现 Minimax + Alpha-Beta 剪枝，并按难度决定是否随机落子

use protocol::{empty_cells, evaluate, Board, Cells, Difficulty, GameResult, Mark, CELL_COUNT};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// 胜负基础分（实际得分按深度修正）
pub const WIN_SCORE: i32 = 100;

/// 中等难度搜索深度
pub const MEDIUM_DEPTH: u8 = 4;

/// 完整搜索深度（9 层即搜到终局）
pub const FULL_DEPTH: u8 = 9;

/// 中等难度随机落子概率
pub const MEDIUM_RANDOM_CHANCE: f64 = 0.35;

/// 搜索窗口初始边界
const INFINITY: i32 = 9999;

/// AI 配置
///
/// 双方标记在创建后不可修改
#[derive(Debug, Clone, PartialEq)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    /// 最大搜索深度，达到后按 0 分（未知）返回
    pub max_depth: u8,
    /// 随机落子概率（0.0 = 总是搜索，1.0 = 总是随机）
    pub random_move_chance: f64,
    engine_mark: Mark,
    opponent_mark: Mark,
}

impl AiConfig {
    /// 创建配置
    ///
    /// # Panics
    ///
    /// 电脑与对手使用相同标记时 panic
    pub fn new(difficulty: Difficulty, engine_mark: Mark, opponent_mark: Mark) -> Self {
        assert_ne!(
            engine_mark, opponent_mark,
            "engine and opponent must play different marks"
        );

        let (max_depth, random_move_chance) = match difficulty {
            Difficulty::Easy => (0, 1.0),
            Difficulty::Medium => (MEDIUM_DEPTH, MEDIUM_RANDOM_CHANCE),
            Difficulty::Impossible => (FULL_DEPTH, 0.0),
        };

        Self {
            difficulty,
            max_depth,
            random_move_chance,
            engine_mark,
            opponent_mark,
        }
    }

    /// 从难度创建，对手取电脑的另一方
    pub fn from_difficulty(difficulty: Difficulty, engine_mark: Mark) -> Self {
        Self::new(difficulty, engine_mark, engine_mark.opponent())
    }

    /// 覆盖随机落子概率
    pub fn with_random_move_chance(mut self, chance: f64) -> Self {
        self.random_move_chance = chance.clamp(0.0, 1.0);
        self
    }

    pub fn engine_mark(&self) -> Mark {
        self.engine_mark
    }

    pub fn opponent_mark(&self) -> Mark {
        self.opponent_mark
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Impossible, Mark::O)
    }
}

/// AI 引擎
pub struct AiEngine<R = ChaCha8Rng> {
    config: AiConfig,
    rng: R,
    nodes_searched: u64,
}

impl AiEngine<ChaCha8Rng> {
    /// 创建新的 AI 引擎（随机种子取自系统熵）
    pub fn new(config: AiConfig) -> Self {
        Self::with_rng(config, ChaCha8Rng::from_entropy())
    }

    /// 使用固定种子创建，结果可复现
    pub fn with_seed(config: AiConfig, seed: u64) -> Self {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty, engine_mark: Mark) -> Self {
        Self::new(AiConfig::from_difficulty(difficulty, engine_mark))
    }
}

impl<R: Rng> AiEngine<R> {
    /// 使用指定随机源创建
    pub fn with_rng(config: AiConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            nodes_searched: 0,
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 选择落子位置
    ///
    /// 只读取棋盘的值拷贝，不修改棋盘。没有空格时返回 None。
    pub fn search(&mut self, board: &Board) -> Option<usize> {
        self.search_cells(&board.cells())
    }

    /// 在格子数组上选择落子位置
    pub fn search_cells(&mut self, cells: &Cells) -> Option<usize> {
        self.nodes_searched = 0;

        let available = empty_cells(cells);
        if available.is_empty() {
            return None;
        }

        let chance = self.config.random_move_chance;
        if chance > 0.0 && self.rng.gen::<f64>() < chance {
            let mv = available.choose(&mut self.rng).copied();
            tracing::debug!("随机落子: {:?} (难度: {:?})", mv, self.config.difficulty);
            return mv;
        }

        let (score, best) = self.minimax(cells, true, -INFINITY, INFINITY, 0);
        tracing::debug!(
            "搜索完成: 落子 {:?}, 分数 {}, 节点数 {}",
            best,
            score,
            self.nodes_searched
        );

        // 限深或已终局时可能没有结果，退回随机
        best.or_else(|| available.choose(&mut self.rng).copied())
    }

    /// Minimax + Alpha-Beta
    ///
    /// 电脑为极大层，对手为极小层。按索引升序尝试，分数相同时保留先遇到的走法。
    fn minimax(
        &mut self,
        cells: &Cells,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        depth: u8,
    ) -> (i32, Option<usize>) {
        self.nodes_searched += 1;

        match evaluate(cells) {
            GameResult::Win { mark, .. } if mark == self.config.engine_mark => {
                return (WIN_SCORE - depth as i32, None);
            }
            GameResult::Win { .. } => return (-WIN_SCORE + depth as i32, None),
            GameResult::Draw => return (0, None),
            GameResult::InProgress => {}
        }

        // 到达深度限制，视为未知
        if depth >= self.config.max_depth {
            return (0, None);
        }

        let mark = if maximizing {
            self.config.engine_mark
        } else {
            self.config.opponent_mark
        };
        let mut best_score = if maximizing { -INFINITY } else { INFINITY };
        let mut best_move = None;

        for index in 0..CELL_COUNT {
            if cells[index].is_some() {
                continue;
            }

            let mut next = *cells;
            next[index] = Some(mark);
            let (score, _) = self.minimax(&next, !maximizing, alpha, beta, depth + 1);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(index);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(index);
                }
                beta = beta.min(best_score);
            }

            if beta <= alpha {
                break;
            }
        }

        (best_score, best_move)
    }

    /// 获取上次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}

/// 按难度为电脑选择落子位置
///
/// 没有空格时返回 None。
///
/// # Panics
///
/// `engine_mark == opponent_mark` 时 panic
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    engine_mark: Mark,
    opponent_mark: Mark,
    rng: &mut R,
) -> Option<usize> {
    let config = AiConfig::new(difficulty, engine_mark, opponent_mark);
    AiEngine::with_rng(config, rng).search(board)
}
