use std::io::{self, Write};
use ratatui::{backend::CrosstermBackend, Terminal};
use crossterm::{
    cursor::Show,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    execute,
};
use anyhow::Result;

use crate::config::DisplayConfig;
use crate::models::Project;
use crate::operations::open_in_file_manager;
use crate::tui::events::{map_key, Event, EventHandler};
use crate::tui::screens::MainScreen;
use crate::tui::session::{Effect, Session};

/// 主应用程序
pub struct App {
    /// 排序与光标状态
    session: Session,

    /// 主屏幕
    main_screen: MainScreen,

    /// 最近一次操作的结果，显示在操作提示下方
    status_message: Option<String>,
}

impl App {
    /// 用扫描结果创建应用程序
    pub fn new(projects: Vec<Project>, display: &DisplayConfig) -> Self {
        let table_height = display.table_height.max(1);

        Self {
            session: Session::new(
                projects,
                display.default_sort,
                display.ascending,
                usize::from(table_height),
            ),
            main_screen: MainScreen::new(table_height),
            status_message: None,
        }
    }

    /// 运行应用程序，直到用户退出
    pub async fn run(&mut self) -> Result<()> {
        // 设置终端；守卫在任何退出路径上恢复终端
        let _guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        // 主事件循环
        self.main_loop(&mut terminal).await
    }

    /// 主事件循环
    async fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let mut events = EventHandler::new();

        loop {
            // 绘制界面
            terminal.draw(|f| {
                self.main_screen
                    .draw(f, &mut self.session, self.status_message.as_deref())
            })?;

            match events.next().await? {
                Event::Key(key) => {
                    let Some(message) = map_key(&key) else {
                        continue;
                    };

                    match self.session.update(message) {
                        Effect::Quit => break,
                        Effect::Open(path) => self.open_project(&path),
                        Effect::None => {}
                    }
                }
                // 下一轮循环按新尺寸重绘
                Event::Resize => {}
            }
        }

        Ok(())
    }

    /// 打开项目目录；失败只记录在状态消息里，不中断会话
    fn open_project(&mut self, path: &std::path::Path) {
        self.status_message = Some(match open_in_file_manager(path) {
            Ok(()) => format!("Opened {}", path.display()),
            Err(e) => {
                tracing::warn!("{:#}", e);
                format!("Failed to open {}: {}", path.display(), e.root_cause())
            }
        });
    }
}

/// 进入原始模式和备用屏幕，丢弃时恢复
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        // 之后的步骤失败时由 Drop 关闭原始模式
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal(&mut io::stdout());
    }
}

/// 尽力恢复终端：每一步都执行，失败只记录
fn restore_terminal<W: Write>(out: &mut W) {
    if let Err(e) = disable_raw_mode() {
        tracing::warn!("无法关闭原始模式: {}", e);
    }
    if let Err(e) = execute!(out, LeaveAlternateScreen, Show) {
        tracing::warn!("无法离开备用屏幕: {}", e);
    }
}
