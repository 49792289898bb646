//! 单调时钟
//!
//! 电脑落子的截止时间只是一个时间点，控制器在后续轮询中与时钟比较，不阻塞等待

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// 单调时钟
pub trait Clock {
    fn now(&self) -> Instant;
}

/// 系统单调时钟
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// 手动推进的时钟
///
/// 克隆共享同一时间点，测试或回放时在外部推进
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    /// 从当前时间开始
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    /// 推进时间
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}
