//! 回合控制器
//!
//! 驱动菜单 / 对局中 / 结束三个阶段，安排电脑延迟落子并计分。
//! 由外部循环按固定频率调用 [`TurnController::tick`]，自身不创建线程也不阻塞。

use std::time::{Duration, Instant};

use protocol::{Board, Difficulty, GameMode, GameResult, Mark, DEFAULT_ENGINE_DELAY_MS};
use tictactoe_ai::{AiConfig, AiEngine};
use tracing::{debug, error, info};

use crate::clock::{Clock, MonotonicClock};
use crate::error::{GameError, Result};
use crate::event::{GameEvent, GameSnapshot};
use crate::score::ScoreBoard;
use crate::state::{Phase, Transition};

/// 人机模式下玩家的标记（先手）
pub const HUMAN_MARK: Mark = Mark::X;

/// 人机模式下电脑的标记
pub const ENGINE_MARK: Mark = Mark::O;

/// 控制器配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    /// 玩家落子后电脑等待多久再落子
    pub engine_delay: Duration,
    pub difficulty: Difficulty,
    /// 固定随机种子（None 表示使用系统熵）
    pub rng_seed: Option<u64>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            engine_delay: Duration::from_millis(DEFAULT_ENGINE_DELAY_MS),
            difficulty: Difficulty::default(),
            rng_seed: None,
        }
    }
}

/// 回合控制器
pub struct TurnController<C = MonotonicClock> {
    config: ControllerConfig,
    clock: C,
    phase: Phase,
    mode: Option<GameMode>,
    board: Board,
    current_player: Mark,
    result: GameResult,
    engine: AiEngine,
    /// 电脑落子截止时间，重开或返回菜单时清除
    engine_deadline: Option<Instant>,
    last_move_at: Option<Instant>,
    scores: ScoreBoard,
    events: Vec<GameEvent>,
}

impl TurnController<MonotonicClock> {
    /// 使用系统时钟创建
    pub fn new(config: ControllerConfig) -> Self {
        Self::with_clock(config, MonotonicClock)
    }
}

impl Default for TurnController<MonotonicClock> {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl<C: Clock> TurnController<C> {
    /// 使用指定时钟创建
    pub fn with_clock(config: ControllerConfig, clock: C) -> Self {
        let engine = build_engine(config.difficulty, config.rng_seed);
        Self {
            config,
            clock,
            phase: Phase::Menu,
            mode: None,
            board: Board::empty(),
            current_player: Mark::FIRST,
            result: GameResult::InProgress,
            engine,
            engine_deadline: None,
            last_move_at: None,
            scores: ScoreBoard::default(),
            events: Vec::new(),
        }
    }

    /// 选择模式开始新一局（仅在菜单中有效）
    pub fn start_round(&mut self, mode: GameMode) -> Result<()> {
        self.phase = self.phase.next(Transition::StartRound)?;
        self.mode = Some(mode);
        self.reset_round();

        info!("新一局开始: {}", mode.display_name());
        self.events.push(GameEvent::RoundStarted { mode });
        Ok(())
    }

    /// 重新开始当前模式（保留比分）
    pub fn restart(&mut self) -> Result<()> {
        self.phase = self.phase.next(Transition::Restart)?;
        self.reset_round();

        if let Some(mode) = self.mode {
            info!("重新开始: {}", mode.display_name());
            self.events.push(GameEvent::RoundStarted { mode });
        }
        Ok(())
    }

    /// 返回菜单，丢弃当前对局（保留比分）
    pub fn return_to_menu(&mut self) -> Result<()> {
        self.phase = self.phase.next(Transition::ReturnToMenu)?;
        self.mode = None;
        self.reset_round();

        info!("返回菜单");
        self.events.push(GameEvent::ReturnedToMenu);
        Ok(())
    }

    /// 开始新会话：比分清零，不影响当前对局
    pub fn new_session(&mut self) {
        self.scores.reset();
        info!("比分已清零");
        self.events.push(GameEvent::ScoresReset);
    }

    /// 修改电脑难度，从下一步电脑落子开始生效
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty == self.difficulty() {
            return;
        }
        self.config.difficulty = difficulty;
        self.engine = build_engine(difficulty, self.config.rng_seed);

        info!("难度切换为: {}", difficulty.display_name());
        self.events.push(GameEvent::DifficultyChanged { difficulty });
    }

    /// 玩家在指定格子落子
    ///
    /// 人机模式下代表玩家一方，双人模式下代表当前走子方。
    /// 不在对局中、轮到电脑、格子越界或已占用时不生效并返回错误。
    pub fn place_at(&mut self, index: usize) -> Result<GameResult> {
        if self.phase != Phase::Playing {
            debug!("忽略落子 {}: 当前阶段 {:?}", index, self.phase);
            return Err(GameError::NotPlaying { phase: self.phase });
        }
        if self.is_engine_turn() {
            debug!("忽略落子 {}: 轮到电脑", index);
            return Err(GameError::NotYourTurn);
        }

        self.apply_move(index, self.current_player, false)
    }

    /// 轮询：轮到电脑且截止时间已过时落子一次
    ///
    /// 返回电脑落子的格子，本次未落子返回 None。
    pub fn tick(&mut self) -> Option<usize> {
        if !self.is_engine_turn() {
            return None;
        }

        let now = self.clock.now();
        if self.engine_deadline.is_some_and(|deadline| now < deadline) {
            return None;
        }
        self.engine_deadline = None;

        debug_assert!(!self.board.is_full(), "engine asked to move on a full board");
        let index = self.engine.search(&self.board)?;
        info!(
            "电脑落子: {} (难度: {:?}, 节点数: {})",
            index,
            self.difficulty(),
            self.engine.nodes_searched()
        );

        match self.apply_move(index, ENGINE_MARK, true) {
            Ok(_) => Some(index),
            Err(e) => {
                error!("电脑走法不合法: {}", e);
                None
            }
        }
    }

    /// 执行落子并推进状态机
    fn apply_move(&mut self, index: usize, mark: Mark, by_engine: bool) -> Result<GameResult> {
        self.board.try_place(index, mark)?;

        let now = self.clock.now();
        self.last_move_at = Some(now);
        self.events.push(GameEvent::MarkPlaced {
            index,
            mark,
            by_engine,
        });

        let result = self.board.winner();
        self.result = result;

        if result.is_over() {
            self.phase = self.phase.next(Transition::Finish)?;
            self.engine_deadline = None;
            self.scores.record(&result);
            if let Some(line) = result.line() {
                self.board.mark_winning_line(line);
            }

            info!("对局结束: {:?}\n{}", result, self.board);
            self.events.push(GameEvent::RoundOver { result });
        } else {
            self.phase = self.phase.next(Transition::Continue)?;
            self.current_player = mark.opponent();
            if self.is_engine_turn() {
                self.engine_deadline = Some(now + self.config.engine_delay);
            }
        }

        Ok(result)
    }

    /// 清空棋盘和回合状态（隐式取消电脑落子）
    fn reset_round(&mut self) {
        self.board.reset();
        self.current_player = Mark::FIRST;
        self.result = GameResult::InProgress;
        self.engine_deadline = None;
        self.last_move_at = None;
    }

    /// 是否轮到电脑
    pub fn is_engine_turn(&self) -> bool {
        self.phase == Phase::Playing
            && self.mode.is_some_and(|m| m.is_vs_engine())
            && self.current_player == ENGINE_MARK
    }

    /// 取出累积的事件
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// 生成只读快照
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            mode: self.mode,
            difficulty: self.difficulty(),
            cells: self.board.cells(),
            result: self.result,
            winning_line: self.board.winning_line(),
            current_player: self.current_player(),
            engine_pending: self.is_engine_turn(),
            scores: self.scores,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    /// 当前走子方（菜单中为 None）
    pub fn current_player(&self) -> Option<Mark> {
        match self.phase {
            Phase::Menu => None,
            Phase::Playing | Phase::GameOver => Some(self.current_player),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.engine.config().difficulty
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// 电脑落子截止时间
    pub fn engine_deadline(&self) -> Option<Instant> {
        self.engine_deadline
    }

    /// 最近一次落子时间
    pub fn last_move_at(&self) -> Option<Instant> {
        self.last_move_at
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }
}

/// 创建电脑引擎（电脑固定执 O）
fn build_engine(difficulty: Difficulty, seed: Option<u64>) -> AiEngine {
    let config = AiConfig::from_difficulty(difficulty, ENGINE_MARK);
    match seed {
        Some(seed) => AiEngine::with_seed(config, seed),
        None => AiEngine::new(config),
    }
}
