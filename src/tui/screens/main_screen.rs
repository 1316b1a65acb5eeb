use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::tui::session::Session;

/// 底部操作提示
pub const HELP_TEXT: &str = " ←/→: Sort | Enter: Open | S: Order | Q: Quit";

/// 边框颜色（256 色调色板）
const BORDER_COLOR: Color = Color::Indexed(240);

/// 选中行前景色
const SELECTED_FG: Color = Color::Indexed(229);

/// 选中行背景色
const SELECTED_BG: Color = Color::Indexed(57);

/// 主屏幕组件 - 负责绘制项目表格和底部提示
#[derive(Debug, Clone)]
pub struct MainScreen {
    /// 表格可见的行数
    table_height: u16,
}

impl MainScreen {
    pub fn new(table_height: u16) -> Self {
        Self {
            table_height: table_height.max(1),
        }
    }

    /// 绘制整个界面：表格、操作提示和状态消息
    pub fn draw(&self, f: &mut Frame, session: &mut Session, status_message: Option<&str>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                // 表头占两行（含下边距），边框占两行
                Constraint::Length(self.table_height.saturating_add(4)),
                Constraint::Length(1), // 操作提示
                Constraint::Length(1), // 状态消息
                Constraint::Min(0),
            ])
            .split(f.area());

        self.draw_table(f, chunks[0], session);

        let help = Paragraph::new(Line::from(HELP_TEXT))
            .style(Style::default().fg(BORDER_COLOR));
        f.render_widget(help, chunks[1]);

        if let Some(message) = status_message {
            let status = Paragraph::new(Line::from(format!(" {}", message)))
                .style(Style::default().fg(Color::Yellow));
            f.render_widget(status, chunks[2]);
        }
    }

    /// 绘制项目表格
    fn draw_table(&self, f: &mut Frame, area: Rect, session: &mut Session) {
        let columns = session.columns();

        let header = Row::new(
            columns
                .iter()
                .map(|(title, _)| Cell::from(title.clone()))
                .collect::<Vec<_>>(),
        )
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

        let widths: Vec<Constraint> = columns
            .iter()
            .map(|(_, width)| Constraint::Length(*width))
            .collect();

        let rows: Vec<Row> = session
            .rows()
            .into_iter()
            .map(|cells| Row::new(cells.into_iter().map(Cell::from).collect::<Vec<_>>()))
            .collect();

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(BORDER_COLOR)),
            )
            .row_highlight_style(Style::default().fg(SELECTED_FG).bg(SELECTED_BG));

        f.render_stateful_widget(table, area, session.table_state_mut());
    }
}
