//! 游戏设置模块
//!
//! 提供设置数据结构和 JSON 持久化

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use protocol::{Difficulty, DEFAULT_ENGINE_DELAY_MS};
use serde::{Deserialize, Serialize};

use crate::controller::ControllerConfig;

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// 用于 EnvFilter 指令的名称
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// 游戏设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// 电脑落子延迟（毫秒）
    pub engine_delay_ms: u64,
    /// 默认 AI 难度
    pub default_difficulty: Difficulty,
    /// 固定随机种子（用于复现对局）
    pub rng_seed: Option<u64>,
    /// 日志级别
    pub log_level: LogLevel,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            engine_delay_ms: DEFAULT_ENGINE_DELAY_MS,
            default_difficulty: Difficulty::Impossible,
            rng_seed: None,
            log_level: LogLevel::default(),
        }
    }
}

impl GameSettings {
    /// 获取设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("tictactoe");
            path.push("settings.json");
            path
        })
    }

    /// 从默认位置加载设置，失败时使用默认值
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            tracing::warn!("无法获取配置目录，使用默认设置");
            return Self::default();
        };

        if !path.exists() {
            tracing::info!("设置文件不存在，使用默认设置");
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                tracing::info!("已加载设置: {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("{:#}，使用默认设置", e);
                Self::default()
            }
        }
    }

    /// 从指定文件加载设置
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取设置文件 {:?}", path))?;
        serde_json::from_str(&content).with_context(|| format!("设置文件格式无效 {:?}", path))
    }

    /// 保存设置到默认位置
    pub fn save(&self) -> Result<()> {
        let path = Self::settings_path().context("无法获取配置目录")?;
        self.save_to(&path)
    }

    /// 保存设置到指定文件（自动创建目录）
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("无法创建配置目录 {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self).context("序列化设置失败")?;
        std::fs::write(path, content).with_context(|| format!("写入设置文件失败 {:?}", path))?;

        tracing::info!("设置已保存: {:?}", path);
        Ok(())
    }

    /// 生成控制器配置
    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            engine_delay: Duration::from_millis(self.engine_delay_ms),
            difficulty: self.default_difficulty,
            rng_seed: self.rng_seed,
        }
    }
}
