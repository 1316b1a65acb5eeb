use std::path::PathBuf;
use ratatui::widgets::TableState;

use crate::models::{render_columns, render_row, reorder, Project, SortColumn};

/// 交互会话中的一次输入
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// 退出
    Quit,

    /// 切换到上一列排序
    PreviousColumn,

    /// 切换到下一列排序
    NextColumn,

    /// 切换升序/降序
    ToggleDirection,

    /// 打开当前选中的项目
    Activate,

    /// 交给表格处理的光标移动
    Table(TableMotion),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMotion {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

/// 处理一条消息后需要执行的副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,

    /// 在文件管理器中打开该路径
    Open(PathBuf),
}

/// 会话状态：项目列表（当前显示顺序）、排序列、方向和表格光标
#[derive(Debug)]
pub struct Session {
    projects: Vec<Project>,
    sort_column: SortColumn,
    ascending: bool,
    table_state: TableState,

    /// 翻页时移动的行数
    page_size: usize,
}

impl Session {
    pub fn new(
        projects: Vec<Project>,
        sort_column: SortColumn,
        ascending: bool,
        page_size: usize,
    ) -> Self {
        let mut table_state = TableState::default();
        if !projects.is_empty() {
            table_state.select(Some(0));
        }

        let mut session = Self {
            projects,
            sort_column,
            ascending,
            table_state,
            page_size: page_size.max(1),
        };
        session.resort();
        session
    }

    /// 更新函数：修改排序状态或光标，返回需要执行的副作用
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::Quit => return Effect::Quit,
            Message::PreviousColumn => {
                self.sort_column = self.sort_column.previous();
                self.resort();
            }
            Message::NextColumn => {
                self.sort_column = self.sort_column.next();
                self.resort();
            }
            Message::ToggleDirection => {
                self.ascending = !self.ascending;
                self.resort();
            }
            Message::Activate => {
                return match self.selected_project() {
                    Some(project) => Effect::Open(project.path.clone()),
                    None => Effect::None,
                };
            }
            Message::Table(motion) => self.move_cursor(motion),
        }
        Effect::None
    }

    /// 重新排序，光标停留在原来的行号
    fn resort(&mut self) {
        reorder(&mut self.projects, self.sort_column, self.ascending);
    }

    fn move_cursor(&mut self, motion: TableMotion) {
        let Some(last) = self.projects.len().checked_sub(1) else {
            return;
        };
        let current = self.table_state.selected().unwrap_or(0).min(last);

        let target = match motion {
            TableMotion::Up => current.saturating_sub(1),
            TableMotion::Down => (current + 1).min(last),
            TableMotion::PageUp => current.saturating_sub(self.page_size),
            TableMotion::PageDown => (current + self.page_size).min(last),
            TableMotion::Top => 0,
            TableMotion::Bottom => last,
        };
        self.table_state.select(Some(target));
    }

    /// 当前显示顺序下光标所在的项目
    pub fn selected_project(&self) -> Option<&Project> {
        self.table_state
            .selected()
            .and_then(|index| self.projects.get(index))
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn sort_column(&self) -> SortColumn {
        self.sort_column
    }

    pub fn ascending(&self) -> bool {
        self.ascending
    }

    pub fn cursor(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub fn table_state_mut(&mut self) -> &mut TableState {
        &mut self.table_state
    }

    /// 表头（含排序方向标记）与列宽
    pub fn columns(&self) -> Vec<(String, u16)> {
        render_columns(self.sort_column, self.ascending)
    }

    pub fn rows(&self) -> Vec<[String; 5]> {
        self.projects.iter().map(render_row).collect()
    }
}
