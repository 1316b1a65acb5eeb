use std::time::Duration;
use crossterm::event::{self, KeyEvent, KeyEventKind};
use anyhow::Result;
use tokio::sync::mpsc;

use crate::tui::session::{Message, TableMotion};

/// 读取终端事件的轮询间隔，通道关闭后最多等待这么久退出
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 应用程序事件枚举
#[derive(Clone, Debug)]
pub enum Event {
    /// 键盘输入事件
    Key(KeyEvent),

    /// 终端大小调整事件
    Resize,
}

/// 事件处理器 - 在阻塞线程上读取终端事件，通过通道逐个交给主循环。
///
/// 处理器被丢弃时通道随之关闭，读取线程在下一次轮询后退出。
pub struct EventHandler {
    /// 事件接收器
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// 创建事件处理器并开始读取终端事件
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        tokio::task::spawn_blocking(move || {
            while !sender.is_closed() {
                match event::poll(POLL_INTERVAL) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(e) => {
                        tracing::error!("读取终端事件失败: {}", e);
                        break;
                    }
                }

                let app_event = match event::read() {
                    Ok(event::Event::Key(key)) => Event::Key(key),
                    Ok(event::Event::Resize(_, _)) => Event::Resize,
                    Ok(_) => continue,
                    Err(e) => {
                        tracing::error!("读取终端事件失败: {}", e);
                        break;
                    }
                };

                if sender.send(app_event).is_err() {
                    break;
                }
            }
        });

        Self { receiver }
    }

    /// 接收下一个事件
    pub async fn next(&mut self) -> Result<Event> {
        self.receiver.recv().await
            .ok_or_else(|| anyhow::anyhow!("事件通道已关闭"))
    }
}

/// 键盘快捷键辅助函数
pub mod keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// 检查是否是退出键 (Esc, q, Ctrl+C)
    pub fn is_quit_key(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Esc => true,
            KeyCode::Char('q') => !key.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
    }

    /// 上一列排序 (←, h)
    pub fn is_previous_column_key(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Left | KeyCode::Char('h'))
    }

    /// 下一列排序 (→, l)
    pub fn is_next_column_key(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Right | KeyCode::Char('l'))
    }

    /// 切换排序方向 (s)
    pub fn is_toggle_direction_key(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Char('s'))
    }

    /// 打开选中项目 (Enter)
    pub fn is_enter_key(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Enter)
    }

    /// 检查是否是向上导航键
    pub fn is_up_key(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Up | KeyCode::Char('k'))
    }

    /// 检查是否是向下导航键
    pub fn is_down_key(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Down | KeyCode::Char('j'))
    }
}

/// 把按键翻译成会话消息；无关按键返回 `None`
pub fn map_key(key: &KeyEvent) -> Option<Message> {
    use crossterm::event::KeyCode;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    let message = if keys::is_quit_key(key) {
        Message::Quit
    } else if keys::is_previous_column_key(key) {
        Message::PreviousColumn
    } else if keys::is_next_column_key(key) {
        Message::NextColumn
    } else if keys::is_toggle_direction_key(key) {
        Message::ToggleDirection
    } else if keys::is_enter_key(key) {
        Message::Activate
    } else if keys::is_up_key(key) {
        Message::Table(TableMotion::Up)
    } else if keys::is_down_key(key) {
        Message::Table(TableMotion::Down)
    } else {
        match key.code {
            KeyCode::PageUp => Message::Table(TableMotion::PageUp),
            KeyCode::PageDown => Message::Table(TableMotion::PageDown),
            KeyCode::Home => Message::Table(TableMotion::Top),
            KeyCode::End => Message::Table(TableMotion::Bottom),
            _ => return None,
        }
    };

    Some(message)
}
