use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use protocol::{GameMode, GameResult};
use tictactoe_game::{GameSettings, Phase, TurnController};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 轮询间隔（约 60 帧）
const TICK_INTERVAL: Duration = Duration::from_millis(16);

const HELP: &str = "命令: 1 双人对战 | 2 人机对战 | 0-8 落子 | r 重开 | m 菜单 | n 比分清零 | d 切换难度 | q 退出";

fn main() -> Result<()> {
    let settings = GameSettings::load();

    // 初始化日志（输出到 stderr，避免干扰棋盘显示）
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                format!("tictactoe_game={}", settings.log_level.as_str()).parse()?,
            ),
        )
        .init();

    info!("井字棋启动中...");

    let mut controller = TurnController::new(settings.controller_config());
    println!("{}", HELP);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let command = line.trim();

        let outcome = match command {
            "q" => break,
            "1" if controller.phase() == Phase::Menu => {
                controller.start_round(GameMode::HumanVsHuman)
            }
            "2" if controller.phase() == Phase::Menu => {
                controller.start_round(GameMode::HumanVsEngine)
            }
            "r" => controller.restart(),
            "m" => controller.return_to_menu(),
            "n" => {
                controller.new_session();
                Ok(())
            }
            "d" => {
                controller.set_difficulty(controller.difficulty().next());
                Ok(())
            }
            _ => match command.parse::<usize>() {
                Ok(index) => controller.place_at(index).map(|_| ()),
                Err(_) => {
                    println!("{}", HELP);
                    continue;
                }
            },
        };

        if let Err(e) = outcome {
            println!("无效操作: {}", e);
        }

        // 等待电脑落子
        while controller.is_engine_turn() {
            if controller.tick().is_none() {
                thread::sleep(TICK_INTERVAL);
            }
        }

        render(&controller)?;
    }

    info!("再见");
    Ok(())
}

/// 打印棋盘、状态和比分
fn render(controller: &TurnController) -> Result<()> {
    let mut out = io::stdout().lock();
    let snapshot = controller.snapshot();

    match snapshot.phase {
        Phase::Menu => {
            writeln!(out, "菜单: 1 双人对战 | 2 人机对战 (难度: {})", snapshot.difficulty.display_name())?;
        }
        Phase::Playing | Phase::GameOver => {
            write!(out, "\n{}", controller.board())?;
            match snapshot.result {
                GameResult::InProgress => {
                    if let Some(mark) = snapshot.current_player {
                        writeln!(out, "轮到 {}", mark)?;
                    }
                }
                GameResult::Win { mark, line } => writeln!(out, "{} 获胜 {:?}，按 r 重开", mark, line)?,
                GameResult::Draw => writeln!(out, "和棋，按 r 重开")?,
            }
        }
    }

    let scores = snapshot.scores;
    writeln!(
        out,
        "比分 X: {} | O: {} | 和: {}",
        scores.player_wins(),
        scores.opponent_wins(),
        scores.draws()
    )?;
    out.flush()?;
    Ok(())
}
