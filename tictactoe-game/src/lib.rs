//! 井字棋对局控制
//!
//! 包含:
//! - 回合控制器（菜单 / 对局中 / 结束 三态状态机）
//! - 电脑延迟落子
//! - 计分
//! - 表现层事件与快照
//! - 设置持久化

pub mod clock;
pub mod controller;
pub mod error;
pub mod event;
pub mod score;
pub mod settings;
pub mod state;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use controller::{ControllerConfig, TurnController, ENGINE_MARK, HUMAN_MARK};
pub use error::{GameError, Result};
pub use event::{GameEvent, GameSnapshot};
pub use score::ScoreBoard;
pub use settings::{GameSettings, LogLevel};
pub use state::{Phase, Transition};
