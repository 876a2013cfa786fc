//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::model::App;

use super::components;
use super::theme::colors;

/// 单列外宽度（含边框）
pub const COLUMN_WIDTH: u16 = 28;

/// 三层布局：标题栏 + 列区域 + 状态栏
pub fn areas(size: Rect) -> (Rect, Rect, Rect) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 列区域
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    (main_layout[0], main_layout[1], main_layout[2])
}

/// 列区域（滚动容器）
pub fn finder_area(size: Rect) -> Rect {
    areas(size).1
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let (title_area, finder_area, status_area) = areas(size);

    // 底色
    let c = colors();
    frame.render_widget(Block::default().style(Style::default().bg(c.bg)), size);

    render_title_bar(app, frame, title_area);
    components::columns::render(app, frame, finder_area);
    components::statusbar::render(app, frame, status_area);
}

/// 渲染标题栏（右侧带列数）
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(
        " Column Finder v0.1.0 │ cols: {}",
        app.finder.state().cols
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}
